//! Transaction retrieval orchestration
//!
//! This module provides the `TransactionEngine` struct, which ties together
//! account bootstrap, date-range validation, paginated retrieval and detail
//! enrichment.
//!
//! # Architecture
//!
//! ```text
//! TransactionEngine
//!     ├── Arc<dyn Transport>        (single HTTP requests)
//!     ├── Arc<dyn RateLimiter>      (wraps every request)
//!     ├── Arc<dyn Clock>            (today in the reference timezone)
//!     ├── EngineConfig              (base URL, channel, timezone)
//!     └── OnceCell<AccountContext>  (bootstrap result, written once)
//! ```
//!
//! # Concurrency
//!
//! The engine issues at most one request at a time per flow and never runs
//! requests in parallel itself. The account context is initialized through a
//! shared `OnceCell`: concurrent callers that need it wait on the same
//! in-flight bootstrap, so exactly one bootstrap request is made.

use std::collections::VecDeque;
use std::sync::Arc;

use chrono::NaiveDate;
use futures::future::FutureExt;
use futures::stream::{self, BoxStream, StreamExt, TryStreamExt};
use serde_json::Value;
use tokio::sync::OnceCell;

use super::bootstrap::parse_bootstrap;
use super::clock::SystemClock;
use super::config::EngineConfig;
use super::date_range::DateRange;
use super::traits::{Clock, Operation, RateLimiter, Transport};
use crate::io::http::{HttpRequest, Method};
use crate::types::{AccountContext, BootstrapResponse, FetchError, RawTransaction, Transaction};

const MERCHANT_ORDER_IDENTIFIER_FIELD: &str = "merchantOrderIdentifier";

/// Lazily paginated sequence of transactions
///
/// Ends after the first empty page or after the first error.
pub type TransactionStream<'a> = BoxStream<'a, Result<Transaction, FetchError>>;

/// Pagination state carried between pulls
///
/// Holds at most the unconsumed tail of the current page.
#[derive(Debug)]
struct PageCursor {
    next_page: u32,
    buffered: VecDeque<Transaction>,
    exhausted: bool,
}

impl PageCursor {
    fn new() -> Self {
        Self {
            next_page: 1,
            buffered: VecDeque::new(),
            exhausted: false,
        }
    }

    fn advance(&mut self, page: Vec<Transaction>) {
        if page.is_empty() {
            self.exhausted = true;
        } else {
            self.buffered = page.into();
            self.next_page += 1;
        }
    }
}

/// Retrieves transaction history from the account-data API
pub struct TransactionEngine {
    transport: Arc<dyn Transport>,
    rate_limiter: Arc<dyn RateLimiter>,
    clock: Arc<dyn Clock>,
    config: EngineConfig,
    context: OnceCell<AccountContext>,
}

impl TransactionEngine {
    /// Create an engine whose account context is bootstrapped on first use
    ///
    /// "Today" is taken from the wall clock in `config.timezone`.
    pub fn new(
        transport: Arc<dyn Transport>,
        rate_limiter: Arc<dyn RateLimiter>,
        config: EngineConfig,
    ) -> Self {
        let clock = Arc::new(SystemClock::new(config.timezone));
        Self {
            transport,
            rate_limiter,
            clock,
            config,
            context: OnceCell::new(),
        }
    }

    /// Create an engine and bootstrap its account context immediately
    pub async fn connect(
        transport: Arc<dyn Transport>,
        rate_limiter: Arc<dyn RateLimiter>,
        config: EngineConfig,
    ) -> Result<Self, FetchError> {
        let engine = Self::new(transport, rate_limiter, config);
        engine.initialize().await?;
        Ok(engine)
    }

    /// Replace the clock used for date-range validation
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The account context, if bootstrap has completed
    pub fn account_context(&self) -> Option<AccountContext> {
        self.context.get().copied()
    }

    /// Discover the account context, at most once per engine
    ///
    /// After a successful bootstrap further calls return the cached context
    /// without any request. A failed bootstrap caches nothing, so the next
    /// caller tries again.
    ///
    /// # Returns
    ///
    /// * `Ok(AccountContext)` - the cached or freshly discovered context
    /// * `Err(FetchError::Http)` - the bootstrap call returned a non-success status
    /// * `Err(FetchError::MissingCacheData)` - the cache list was empty
    /// * `Err(FetchError::MissingField)` - a required identifier was absent
    pub async fn initialize(&self) -> Result<AccountContext, FetchError> {
        self.context
            .get_or_try_init(|| self.bootstrap())
            .await
            .copied()
    }

    async fn bootstrap(&self) -> Result<AccountContext, FetchError> {
        let body = self
            .call(Method::Post, self.config.bootstrap_url())
            .await?;
        let response: BootstrapResponse = serde_json::from_value(body)?;
        let context = parse_bootstrap(&response)?;

        tracing::info!(
            default_account_id = context.default_account_id(),
            profile_id = context.profile_id(),
            "account context initialized"
        );
        Ok(context)
    }

    /// Stream the transactions posted between `start` and `end`
    ///
    /// `end` defaults to today in the reference timezone. The range is
    /// validated here, before any request, so an invalid range never yields
    /// a stream. The returned stream is lazy: the first poll bootstraps the
    /// account context if needed, and each page is requested only once the
    /// previous one has been consumed. Dropping the stream stops retrieval.
    ///
    /// Every call starts again from page 1.
    ///
    /// # Errors
    ///
    /// * `FetchError::FutureDate` - `end` is after today
    /// * `FetchError::RangeTooLarge` - the range spans more than 90 days
    pub fn transactions(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<TransactionStream<'_>, FetchError> {
        let range = DateRange::validate(start, end, self.clock.today())?;
        tracing::debug!(start = %range.start(), end = %range.end(), "starting transaction retrieval");

        Ok(stream::try_unfold(PageCursor::new(), move |cursor| {
            self.next_transaction(range, cursor)
        })
        .boxed())
    }

    /// Drain [`transactions`](Self::transactions) into a vector
    pub async fn collect_transactions(
        &self,
        start: NaiveDate,
        end: Option<NaiveDate>,
    ) -> Result<Vec<Transaction>, FetchError> {
        self.transactions(start, end)?.try_collect().await
    }

    async fn next_transaction(
        &self,
        range: DateRange,
        mut cursor: PageCursor,
    ) -> Result<Option<(Transaction, PageCursor)>, FetchError> {
        loop {
            if let Some(transaction) = cursor.buffered.pop_front() {
                return Ok(Some((transaction, cursor)));
            }
            if cursor.exhausted {
                return Ok(None);
            }
            let page = self.fetch_page(&range, cursor.next_page).await?;
            cursor.advance(page);
        }
    }

    async fn fetch_page(
        &self,
        range: &DateRange,
        page: u32,
    ) -> Result<Vec<Transaction>, FetchError> {
        let context = self.initialize().await?;
        let url = self
            .config
            .transactions_url(context.default_account_id(), range, page);

        let body = self.call(Method::Get, url).await?;
        let raw: Vec<RawTransaction> = serde_json::from_value(body)?;
        let transactions = raw
            .into_iter()
            .map(Transaction::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(page, count = transactions.len(), "fetched transaction page");
        Ok(transactions)
    }

    /// Fetch and record the merchant order identifier of one transaction
    ///
    /// Bootstraps the account context first if needed. Only the given
    /// instance is modified. Enrichment is best-effort: a response without
    /// the identifier leaves the field unset. A transaction that already
    /// carries an identifier is left as is and no detail request is made.
    ///
    /// # Errors
    ///
    /// * `FetchError::Http` - the detail call returned a non-success status;
    ///   the transaction is unchanged
    /// * any bootstrap error, when the context was not yet initialized
    pub async fn enrich(&self, transaction: &mut Transaction) -> Result<(), FetchError> {
        let context = self.initialize().await?;
        if transaction.is_enriched() {
            return Ok(());
        }

        let url = self
            .config
            .detail_url(context.default_account_id(), transaction.id());
        let body = self.call(Method::Get, url).await?;

        match merchant_order_identifier(&body) {
            Some(identifier) => {
                transaction.set_merchant_order_identifier(identifier);
            }
            None => tracing::debug!(
                transaction = transaction.id(),
                "detail response has no merchant order identifier"
            ),
        }
        Ok(())
    }

    /// Run one request through the rate limiter and decode its JSON body
    async fn call(&self, method: Method, url: String) -> Result<Value, FetchError> {
        let operation: Operation<'_> = Box::new(move || self.send(method, url.clone()).boxed());
        self.rate_limiter.schedule(operation).await
    }

    async fn send(&self, method: Method, url: String) -> Result<Value, FetchError> {
        let request = HttpRequest::new(method, url, &self.config.channel);
        tracing::debug!(
            %method,
            url = %request.url,
            correlation_id = request.correlation_id().unwrap_or_default(),
            "sending request"
        );

        let response = self.transport.request(request).await?;
        if !response.is_success() {
            tracing::debug!(status = response.status(), "request failed");
        }
        response.error_for_status()?.json()
    }
}

fn merchant_order_identifier(body: &Value) -> Option<String> {
    match body.get(MERCHANT_ORDER_IDENTIFIER_FIELD)? {
        Value::String(identifier) if !identifier.is_empty() => Some(identifier.clone()),
        Value::Number(identifier) => Some(identifier.to_string()),
        _ => None,
    }
}
