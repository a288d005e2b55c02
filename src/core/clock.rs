//! Clock implementations
//!
//! - `SystemClock` - wall clock projected into a fixed timezone
//! - `FixedClock` - a pinned date, for replaying recorded sessions and tests

use super::traits::Clock;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;

/// Wall clock in a fixed reference timezone
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    timezone: Tz,
}

impl SystemClock {
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.timezone).date_naive()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
