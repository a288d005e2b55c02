//! Date range validation
//!
//! A [`DateRange`] can only be obtained through [`DateRange::validate`], so
//! holding one proves the range was checked before any request was made.

use crate::types::FetchError;
use chrono::{Days, NaiveDate};

/// Largest span, in calendar days, the API serves in one retrieval
pub const MAX_RANGE_DAYS: i64 = 90;

/// A validated, inclusive calendar-date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Validate a requested range against `today`
    ///
    /// `end` defaults to `today`. Checks run in this order:
    ///
    /// * `Err(FetchError::FutureDate)` - `end` is after `today`
    /// * `Err(FetchError::RangeTooLarge)` - `end - 90 days` is after `start`
    ///
    /// No ordering between `start` and `end` is imposed: a `start` after
    /// `end` passes both checks and is forwarded as requested.
    pub fn validate(
        start: NaiveDate,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, FetchError> {
        let end = end.unwrap_or(today);

        if end > today {
            return Err(FetchError::FutureDate { end, today });
        }

        // Underflow means the earliest allowed start predates any date
        let too_large = end
            .checked_sub_days(Days::new(MAX_RANGE_DAYS as u64))
            .is_some_and(|earliest| earliest > start);
        if too_large {
            return Err(FetchError::RangeTooLarge {
                start,
                end,
                max_days: MAX_RANGE_DAYS,
            });
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}
