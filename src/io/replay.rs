//! Transport that replays a recorded session
//!
//! A fixture file captures the API's answers for one account:
//!
//! ```text
//! {
//!   "bootstrap": { "cache": [...], "profileId": 1 },
//!   "pages":     [ [ ...page 1... ], [ ...page 2... ] ],
//!   "details":   { "<transaction id>": { "merchantOrderIdentifier": "..." } },
//!   "status":    { "<path>": 503 }
//! }
//! ```
//!
//! Requests are routed by method and path. Pages past the recorded list
//! answer with an empty page, unknown detail ids with 404, and a `status`
//! entry forces that status for every request to its path.

use crate::core::Transport;
use crate::io::http::{HttpRequest, HttpResponse, Method};
use crate::types::FetchError;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

/// Recorded API answers
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub bootstrap: Value,
    #[serde(default)]
    pub pages: Vec<Value>,
    #[serde(default)]
    pub details: HashMap<String, Value>,
    #[serde(default)]
    pub status: HashMap<String, u16>,
}

/// Transport answering from a [`Fixture`]
#[derive(Debug, Default)]
pub struct ReplayTransport {
    fixture: Fixture,
    log: Mutex<Vec<HttpRequest>>,
}

impl ReplayTransport {
    pub fn new(fixture: Fixture) -> Self {
        Self {
            fixture,
            log: Mutex::new(Vec::new()),
        }
    }

    /// Load a fixture file
    ///
    /// # Errors
    ///
    /// * `FetchError::Transport` - the file cannot be read
    /// * `FetchError::Decode` - the file is not a valid fixture
    pub async fn from_path(path: &Path) -> Result<Self, FetchError> {
        let contents = tokio::fs::read(path).await.map_err(|e| {
            FetchError::transport(format!(
                "Failed to read fixture '{}': {}",
                path.display(),
                e
            ))
        })?;
        let fixture: Fixture = serde_json::from_slice(&contents)?;
        Ok(Self::new(fixture))
    }

    /// Every request received so far, in arrival order
    pub fn requests(&self) -> Vec<HttpRequest> {
        match self.log.lock() {
            Ok(log) => log.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn record(&self, request: &HttpRequest) {
        match self.log.lock() {
            Ok(mut log) => log.push(request.clone()),
            Err(poisoned) => poisoned.into_inner().push(request.clone()),
        }
    }

    fn respond(&self, request: &HttpRequest) -> HttpResponse {
        let path = request.path();
        if let Some(status) = self.fixture.status.get(path) {
            return HttpResponse::new(*status, "");
        }

        match request.method {
            Method::Post if path.ends_with("/account/data/list") => {
                HttpResponse::json_ok(&self.fixture.bootstrap)
            }
            Method::Get if path.ends_with("/transactions") => {
                let page = request
                    .query_param("page")
                    .and_then(|page| page.parse::<usize>().ok())
                    .filter(|page| *page >= 1);
                match page {
                    Some(page) => {
                        let body = self
                            .fixture
                            .pages
                            .get(page - 1)
                            .cloned()
                            .unwrap_or_else(|| json!([]));
                        HttpResponse::json_ok(&body)
                    }
                    None => HttpResponse::new(400, ""),
                }
            }
            Method::Get => {
                let detail = path
                    .rsplit_once("/transactions/")
                    .and_then(|(_, segment)| urlencoding::decode(segment).ok())
                    .and_then(|id| self.fixture.details.get(&*id));
                match detail {
                    Some(detail) => HttpResponse::json_ok(detail),
                    None => HttpResponse::new(404, ""),
                }
            }
            Method::Post => HttpResponse::new(404, ""),
        }
    }
}

#[async_trait]
impl Transport for ReplayTransport {
    async fn request(&self, request: HttpRequest) -> Result<HttpResponse, FetchError> {
        self.record(&request);
        let response = self.respond(&request);
        tracing::trace!(
            method = %request.method,
            path = request.path(),
            status = response.status(),
            "replayed request"
        );
        Ok(response)
    }
}
