//! I/O module
//!
//! Handles the request/response boundary and output.
//!
//! # Components
//!
//! - `http` - Request construction and response decoding
//! - `replay` - Transport answering from a recorded fixture file
//! - `csv_format` - Transaction output serialization

pub mod csv_format;
pub mod http;
pub mod replay;

pub use csv_format::write_transactions_csv;
pub use http::{Credentials, HttpRequest, HttpResponse, Method};
pub use replay::{Fixture, ReplayTransport};
