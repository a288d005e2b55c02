//! HTTP request and response values exchanged with the transport
//!
//! The engine builds [`HttpRequest`] values and hands them to a
//! [`Transport`](crate::core::Transport); the transport answers with an
//! [`HttpResponse`]. No networking happens here.
//!
//! # Fixed Headers
//!
//! Every request carries the same header set:
//!
//! - `accept: application/json`
//! - `x-channel-id`: the configured channel
//! - `x-correlation-id`: a fresh UUID v4 per request
//! - `x-csrf-token`: the `NONE` placeholder
//!
//! and is scoped to same-origin credentials.

use crate::types::FetchError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

pub const HEADER_ACCEPT: &str = "accept";
pub const HEADER_CHANNEL: &str = "x-channel-id";
pub const HEADER_CORRELATION_ID: &str = "x-correlation-id";
pub const HEADER_CSRF_TOKEN: &str = "x-csrf-token";

/// CSRF placeholder sent until a session layer supplies a real token
pub const CSRF_PLACEHOLDER: &str = "NONE";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Method::Get => f.write_str("GET"),
            Method::Post => f.write_str("POST"),
        }
    }
}

/// Credential scoping for a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Credentials {
    SameOrigin,
}

/// An outbound request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub credentials: Credentials,
}

impl HttpRequest {
    /// Build a request with the fixed header set and a new correlation id
    pub fn new(method: Method, url: impl Into<String>, channel: &str) -> Self {
        let headers = vec![
            (HEADER_ACCEPT.to_string(), "application/json".to_string()),
            (HEADER_CHANNEL.to_string(), channel.to_string()),
            (HEADER_CORRELATION_ID.to_string(), Uuid::new_v4().to_string()),
            (HEADER_CSRF_TOKEN.to_string(), CSRF_PLACEHOLDER.to_string()),
        ];

        HttpRequest {
            method,
            url: url.into(),
            headers,
            credentials: Credentials::SameOrigin,
        }
    }

    /// Look up a header value by (case-insensitive) name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn correlation_id(&self) -> Option<&str> {
        self.header(HEADER_CORRELATION_ID)
    }

    /// Path component of the URL, without scheme, host or query
    pub fn path(&self) -> &str {
        let without_scheme = match self.url.find("://") {
            Some(index) => &self.url[index + 3..],
            None => self.url.as_str(),
        };
        let path = match without_scheme.find('/') {
            Some(index) => &without_scheme[index..],
            None => "/",
        };
        match path.find('?') {
            Some(index) => &path[..index],
            None => path,
        }
    }

    /// Value of a query parameter, undecoded
    pub fn query_param(&self, name: &str) -> Option<&str> {
        let query = self.url.split_once('?')?.1;
        query.split('&').find_map(|pair| match pair.split_once('=') {
            Some((key, value)) if key == name => Some(value),
            _ => None,
        })
    }
}

/// A transport response: status plus the raw body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    status: u16,
    body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        HttpResponse {
            status,
            body: body.into(),
        }
    }

    /// A 200 response carrying the given JSON value
    pub fn json_ok(value: &Value) -> Self {
        HttpResponse::new(200, value.to_string())
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Fail with [`FetchError::Http`] unless the status is 2xx
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            Err(FetchError::http(self.status))
        }
    }
}
