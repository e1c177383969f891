//! Calendar helpers for turning a budgeting window into day counts.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Inclusive date range covering one budgeting period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl PeriodWindow {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if end < start {
            return Err(DomainError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    /// Number of calendar days in the window, both ends included.
    pub fn total_days(&self) -> u32 {
        let span = (self.end - self.start).num_days() + 1;
        u32::try_from(span).unwrap_or(u32::MAX)
    }

    /// Days elapsed between `start` and `reference`, clamped to the window.
    pub fn days_elapsed(&self, reference: NaiveDate) -> u32 {
        let elapsed = (reference - self.start).num_days();
        if elapsed <= 0 {
            return 0;
        }
        u32::try_from(elapsed)
            .unwrap_or(u32::MAX)
            .min(self.total_days())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
