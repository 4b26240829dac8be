//! Sources of "today".

use chrono::{Duration, Local, NaiveDate};

/// Supplies the current calendar date
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Reads the local wall-clock date
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always reports the same date
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl FixedClock {
    /// Move the pinned date forward (or back, for negative `days`)
    pub fn advance(&mut self, days: i64) {
        self.0 += Duration::days(days);
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
