//! Pass-through rate limiter
//!
//! Throttling and retry policy belong to the injected scheduler. `Unthrottled`
//! is the degenerate scheduler: it runs each operation once, immediately,
//! and returns its outcome untouched.

use super::traits::{Operation, RateLimiter};
use crate::types::FetchError;
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone, Copy, Default)]
pub struct Unthrottled;

#[async_trait]
impl RateLimiter for Unthrottled {
    async fn schedule<'a>(&self, operation: Operation<'a>) -> Result<Value, FetchError> {
        operation().await
    }
}
