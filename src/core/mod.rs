//! Core business logic module
//!
//! This module contains the transaction retrieval components:
//! - `traits` - Collaborator abstractions (transport, rate limiter, clock)
//! - `engine` - Bootstrap, pagination and enrichment orchestration
//! - `bootstrap` - Account context extraction from the bootstrap response
//! - `date_range` - Date range validation
//! - `config` - Engine configuration and endpoint construction
//! - `clock` - Wall-clock and fixed clocks
//! - `rate_limit` - Pass-through rate limiter

pub mod bootstrap;
pub mod clock;
pub mod config;
pub mod date_range;
pub mod engine;
pub mod rate_limit;
pub mod traits;

pub use clock::{FixedClock, SystemClock};
pub use config::EngineConfig;
pub use date_range::{DateRange, MAX_RANGE_DAYS};
pub use engine::{TransactionEngine, TransactionStream};
pub use rate_limit::Unthrottled;
pub use traits::{Clock, Operation, RateLimiter, Transport};
