//! Error types for the transaction retriever
//!
//! This module defines every error that can surface from initialization,
//! date-range validation, page retrieval and enrichment.
//!
//! # Error Categories
//!
//! - **HTTP Errors**: non-success status codes reported by the transport
//! - **Bootstrap Errors**: missing cache data or required identifier fields
//! - **Validation Errors**: future end dates and oversized ranges
//! - **Collaborator Errors**: transport failures and undecodable bodies
//!
//! No variant is recovered locally. Every error is fatal to the operation
//! that raised it and propagates to the immediate caller.

use chrono::NaiveDate;
use thiserror::Error;

/// Main error type for transaction retrieval
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The transport answered with a non-success status
    ///
    /// Surfaced unchanged. Retrying is the rate limiter's concern.
    #[error("HTTP request failed with status {status}")]
    Http {
        /// Original status code
        status: u16,
    },

    /// The bootstrap response carried no cache entries
    #[error("Bootstrap response contains no cache data")]
    MissingCacheData,

    /// A required bootstrap field was absent or falsy
    #[error("API response missing required field: {field}")]
    MissingField {
        /// Wire name of the missing field
        field: String,
    },

    /// The requested end date lies after today in the reference timezone
    #[error("End date {end} cannot be later than today ({today})")]
    FutureDate {
        /// Requested end of range
        end: NaiveDate,
        /// Today in the reference timezone
        today: NaiveDate,
    },

    /// The requested range spans more than the allowed number of days
    #[error("Date range {start}..{end} exceeds {max_days} days")]
    RangeTooLarge {
        /// Requested start of range
        start: NaiveDate,
        /// Requested end of range
        end: NaiveDate,
        /// Largest accepted span
        max_days: i64,
    },

    /// The transport itself failed (connection, timeout, fixture I/O)
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the failure
        message: String,
    },

    /// A response body did not match the expected shape
    #[error("Failed to decode response: {message}")]
    Decode {
        /// Description of the decoding failure
        message: String,
    },
}

impl From<serde_json::Error> for FetchError {
    fn from(error: serde_json::Error) -> Self {
        FetchError::Decode {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl FetchError {
    /// Create an Http error
    pub fn http(status: u16) -> Self {
        FetchError::Http { status }
    }

    /// Create a MissingField error
    pub fn missing_field(field: &str) -> Self {
        FetchError::MissingField {
            field: field.to_string(),
        }
    }

    /// Create a Transport error
    pub fn transport(message: impl Into<String>) -> Self {
        FetchError::Transport {
            message: message.into(),
        }
    }

    /// Create a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        FetchError::Decode {
            message: message.into(),
        }
    }

    /// Whether this error was raised by date-range validation
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FetchError::FutureDate { .. } | FetchError::RangeTooLarge { .. }
        )
    }
}
