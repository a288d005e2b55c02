//! Collaborator traits injected into the engine
//!
//! The engine never talks to the network, a scheduler or the wall clock
//! directly. Each of those is a trait object supplied at construction so that
//! production implementations and test doubles are interchangeable.

use crate::io::http::{HttpRequest, HttpResponse};
use crate::types::FetchError;
use async_trait::async_trait;
use chrono::NaiveDate;
use futures::future::BoxFuture;
use serde_json::Value;

/// A zero-argument asynchronous operation handed to a [`RateLimiter`]
///
/// The operation can be invoked more than once, so a limiter that retries
/// simply calls it again. Each invocation builds a fresh request.
pub type Operation<'a> =
    Box<dyn Fn() -> BoxFuture<'a, Result<Value, FetchError>> + Send + Sync + 'a>;

/// Performs a single HTTP request
///
/// Implementations report connection-level failures as
/// [`FetchError::Transport`]. Non-success statuses are returned as ordinary
/// responses; the engine turns them into [`FetchError::Http`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, FetchError>;
}

/// Schedules operations under throughput and concurrency limits
///
/// The limiter owns retry and backoff policy. Whatever the operation finally
/// resolves to, success or failure, must be returned unchanged.
#[async_trait]
pub trait RateLimiter: Send + Sync {
    async fn schedule<'a>(&self, operation: Operation<'a>) -> Result<Value, FetchError>;
}

/// Reports today's calendar date in the reference timezone
pub trait Clock: Send + Sync {
    fn today(&self) -> NaiveDate;
}
