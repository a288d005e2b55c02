//! Bootstrap response interpretation
//!
//! Turns the body of the account-data listing call into an
//! [`AccountContext`]. Every required field is mandatory: a response that
//! lacks one is an error, never a partially populated context.

use crate::types::account::truthy_id;
use crate::types::{AccountContext, BootstrapResponse, FetchError};

pub const DEFAULT_ACCOUNT_ID_FIELD: &str = "defaultAccountId";
pub const PROFILE_ID_FIELD: &str = "profileId";

/// Extract the account context from a bootstrap response
///
/// The cache list is scanned in order and the first entry carrying a numeric
/// `defaultAccountId` wins; it need not be the first entry.
///
/// # Returns
///
/// * `Ok(AccountContext)` - both identifiers were found
/// * `Err(FetchError::MissingCacheData)` - the cache list is empty or absent
/// * `Err(FetchError::MissingField)` - no entry has `defaultAccountId`, or
///   `profileId` is absent or falsy
pub fn parse_bootstrap(response: &BootstrapResponse) -> Result<AccountContext, FetchError> {
    let cache = response.cache.as_deref().unwrap_or_default();
    if cache.is_empty() {
        return Err(FetchError::MissingCacheData);
    }

    let default_account_id = cache
        .iter()
        .find_map(|entry| entry.default_account_id())
        .ok_or_else(|| FetchError::missing_field(DEFAULT_ACCOUNT_ID_FIELD))?;

    let profile_id = response
        .profile_id
        .as_ref()
        .and_then(truthy_id)
        .ok_or_else(|| FetchError::missing_field(PROFILE_ID_FIELD))?;

    Ok(AccountContext::new(default_account_id, profile_id))
}
