//! Transaction types for the transaction retriever
//!
//! This module defines the structured [`Transaction`] handed to callers and the
//! [`RawTransaction`] wire shape it is mapped from.

use crate::types::FetchError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};

/// Transaction identifier
///
/// Opaque and stable, unique within the account.
pub type TransactionId = String;

/// One posted financial event
///
/// The identifying fields are fixed at construction. Only the merchant order
/// identifier can change, and only from absent to present.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    id: TransactionId,
    amount: Decimal,
    post_date: NaiveDate,
    merchant_dba_name: String,
    merchant_order_identifier: Option<String>,
}

impl Transaction {
    /// Create a transaction that has not been enriched yet
    pub fn new(
        id: impl Into<TransactionId>,
        amount: Decimal,
        post_date: NaiveDate,
        merchant_dba_name: impl Into<String>,
    ) -> Self {
        Transaction {
            id: id.into(),
            amount,
            post_date,
            merchant_dba_name: merchant_dba_name.into(),
            merchant_order_identifier: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Signed amount: positive for charges, negative for credits
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn post_date(&self) -> NaiveDate {
        self.post_date
    }

    pub fn merchant_dba_name(&self) -> &str {
        &self.merchant_dba_name
    }

    /// Merchant order identifier, `None` until fetched
    pub fn merchant_order_identifier(&self) -> Option<&str> {
        self.merchant_order_identifier.as_deref()
    }

    pub fn is_enriched(&self) -> bool {
        self.merchant_order_identifier.is_some()
    }

    /// Record the merchant order identifier
    ///
    /// Empty values are ignored and an identifier already present is never
    /// replaced. Returns whether the field was set.
    pub(crate) fn set_merchant_order_identifier(&mut self, identifier: String) -> bool {
        if self.merchant_order_identifier.is_some() || identifier.is_empty() {
            return false;
        }
        self.merchant_order_identifier = Some(identifier);
        true
    }
}

/// Transaction as it appears in a page response
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    #[serde(deserialize_with = "string_or_number")]
    pub id: TransactionId,
    pub amount: Decimal,
    pub post_date: String,
    pub merchant_dba_name: String,
    #[serde(default)]
    pub merchant_order_identifier: Option<String>,
}

impl TryFrom<RawTransaction> for Transaction {
    type Error = FetchError;

    fn try_from(raw: RawTransaction) -> Result<Self, Self::Error> {
        let post_date = NaiveDate::parse_from_str(&raw.post_date, "%Y-%m-%d").map_err(|e| {
            FetchError::decode(format!(
                "Invalid postDate '{}' for transaction {}: {}",
                raw.post_date, raw.id, e
            ))
        })?;

        let mut transaction =
            Transaction::new(raw.id, raw.amount, post_date, raw.merchant_dba_name);
        if let Some(identifier) = raw.merchant_order_identifier {
            transaction.set_merchant_order_identifier(identifier);
        }
        Ok(transaction)
    }
}

/// Accept ids sent either as JSON strings or as JSON numbers
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(text) => text,
        Id::Number(number) => number.to_string(),
    })
}
