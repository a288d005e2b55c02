//! Engine configuration
//!
//! Holds the API base URL, the channel identifier sent with every request,
//! and the reference timezone used to decide what "today" means.

use crate::core::date_range::DateRange;
use crate::types::AccountId;
use chrono_tz::Tz;

pub const DEFAULT_BASE_URL: &str = "https://api.example.com";
pub const DEFAULT_CHANNEL: &str = "web";
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::America::New_York;

const BOOTSTRAP_PATH: &str = "/account/data/list";

/// Configuration for the transaction engine
#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// API root, without a trailing slash
    pub base_url: String,
    /// Value of the channel header
    pub channel: String,
    /// Timezone that defines "today" for date-range validation
    pub timezone: Tz,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            channel: DEFAULT_CHANNEL.to_string(),
            timezone: DEFAULT_TIMEZONE,
        }
    }
}

impl EngineConfig {
    /// Create a new EngineConfig with custom values
    ///
    /// Blank values fall back to the defaults with a warning.
    pub fn new(base_url: &str, channel: &str, timezone: Tz) -> Self {
        let default = Self::default();

        let base_url = base_url.trim().trim_end_matches('/');
        let base_url = if base_url.is_empty() {
            tracing::warn!(
                default = %default.base_url,
                "Invalid base_url (empty), using default"
            );
            default.base_url
        } else {
            base_url.to_string()
        };

        let channel = channel.trim();
        let channel = if channel.is_empty() {
            tracing::warn!(
                default = %default.channel,
                "Invalid channel (empty), using default"
            );
            default.channel
        } else {
            channel.to_string()
        };

        Self {
            base_url,
            channel,
            timezone,
        }
    }

    pub fn bootstrap_url(&self) -> String {
        format!("{}{}", self.base_url, BOOTSTRAP_PATH)
    }

    pub fn transactions_url(&self, account: AccountId, range: &DateRange, page: u32) -> String {
        format!(
            "{}/accounts/{}/transactions?start={}&end={}&page={}",
            self.base_url,
            account,
            range.start().format("%Y-%m-%d"),
            range.end().format("%Y-%m-%d"),
            page
        )
    }

    /// Detail endpoint for one transaction
    ///
    /// The id is opaque, so it is percent-encoded as a single path segment.
    pub fn detail_url(&self, account: AccountId, transaction_id: &str) -> String {
        format!(
            "{}/accounts/{}/transactions/{}",
            self.base_url,
            account,
            urlencoding::encode(transaction_id)
        )
    }
}
