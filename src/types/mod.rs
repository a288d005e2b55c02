//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account context discovered at bootstrap
//! - `transaction`: Transaction records and their wire shape
//! - `error`: Error types for the transaction retriever

pub mod account;
pub mod error;
pub mod transaction;

pub use account::{AccountContext, AccountId, BootstrapResponse, CacheEntry, ProfileId};
pub use error::FetchError;
pub use transaction::{RawTransaction, Transaction, TransactionId};
