//! Account-related types for the transaction retriever
//!
//! This module defines the [`AccountContext`] discovered by the bootstrap call
//! and the wire shape of that call's response.

use serde::Deserialize;
use serde_json::Value;

/// Default account identifier assigned by the server
pub type AccountId = u64;

/// Profile identifier assigned by the server
pub type ProfileId = u64;

/// Identifiers discovered once per engine lifetime
///
/// Constructed only from a successful bootstrap, never mutated afterward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountContext {
    default_account_id: AccountId,
    profile_id: ProfileId,
}

impl AccountContext {
    pub fn new(default_account_id: AccountId, profile_id: ProfileId) -> Self {
        AccountContext {
            default_account_id,
            profile_id,
        }
    }

    /// Account whose transactions are listed and enriched
    pub fn default_account_id(&self) -> AccountId {
        self.default_account_id
    }

    pub fn profile_id(&self) -> ProfileId {
        self.profile_id
    }
}

/// Bootstrap response body
///
/// Fields are kept loose so that absent and non-numeric values can be told
/// apart from a malformed body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BootstrapResponse {
    #[serde(default)]
    pub cache: Option<Vec<CacheEntry>>,
    #[serde(default)]
    pub profile_id: Option<Value>,
}

/// One entry of the bootstrap cache list
///
/// Any JSON value is accepted. Entries that are null, not objects, or lack a
/// nested `response` simply carry no account id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct CacheEntry(Value);

impl CacheEntry {
    /// The nested `response` object, if any
    pub fn response(&self) -> Option<&Value> {
        self.0.get("response").filter(|response| !response.is_null())
    }

    /// The nested `defaultAccountId`, if present, numeric and non-zero
    pub fn default_account_id(&self) -> Option<AccountId> {
        self.response()
            .and_then(|response| response.get("defaultAccountId"))
            .and_then(truthy_id)
    }
}

/// Interpret a JSON value as a server-assigned id
///
/// Zero is falsy on the wire and treated as missing.
pub(crate) fn truthy_id(value: &Value) -> Option<u64> {
    value.as_u64().filter(|id| *id != 0)
}
