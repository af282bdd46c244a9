//! Calendar date intervals used by entry search

use crate::error::{DaybookError, Result};
use chrono::NaiveDate;

/// Format accepted for dates on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive `[start, end]` calendar interval. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting inverted bounds instead of swapping them
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(DaybookError::InvalidRange { start, end });
        }
        Ok(DateRange { start, end })
    }

    /// Parse both bounds as `YYYY-MM-DD`
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_date(start)?, parse_date(end)?)
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Parse a single `YYYY-MM-DD` date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_FORMAT)
        .map_err(|_| DaybookError::InvalidInput(format!("Invalid date: {}", input)))
}
