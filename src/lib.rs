//! Transaction Retriever Library
//! # Overview
//!
//! This library retrieves a user's transaction history from a remote
//! account-data API as a lazily paginated stream, with enforced date-range
//! limits and every request routed through an injected rate limiter.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Transaction, AccountContext, FetchError)
//! - [`cli`] - CLI arguments parsing and the retrieval command
//! - [`core`] - Business logic components:
//!   - [`core::engine`] - Bootstrap, pagination and enrichment orchestration
//!   - [`core::bootstrap`] - Account context discovery
//!   - [`core::date_range`] - Date range validation
//!   - [`core::traits`] - Transport, rate limiter and clock abstractions
//! - [`io`] - Request construction, replay transport and CSV output
//!
//! # Retrieval Pipeline
//!
//! - **Validate**: the end date may not be after today in the reference
//!   timezone, and the range may not exceed 90 days
//! - **Bootstrap**: on first use, one call discovers the default account id
//!   and profile id; concurrent callers share it
//! - **Paginate**: pages are requested one at a time from page 1 until a page
//!   comes back empty
//! - **Enrich**: on demand, a per-transaction call fills in the merchant
//!   order identifier

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod types;

pub use crate::core::{
    Clock, EngineConfig, FixedClock, Operation, RateLimiter, SystemClock, TransactionEngine,
    TransactionStream, Transport, Unthrottled,
};
pub use crate::io::{write_transactions_csv, HttpRequest, HttpResponse, Method, ReplayTransport};
pub use crate::types::{AccountContext, FetchError, Transaction, TransactionId};
