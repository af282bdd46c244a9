//! Entry statistics use case

use crate::domain::{monthly_series, weekly_series, yearly_pivot, Session, YearMonth, YearlyPivot};
use crate::error::Result;
use crate::infrastructure::JournalStore;
use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Bucket width for a summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Granularity {
    Week,
    #[default]
    Month,
    Year,
}

impl FromStr for Granularity {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "week" | "weekly" => Ok(Granularity::Week),
            "month" | "monthly" => Ok(Granularity::Month),
            "year" | "yearly" => Ok(Granularity::Year),
            _ => Err(format!(
                "Invalid granularity: '{}'. Valid values are: week, month, year",
                s
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Summary {
    Weekly(BTreeMap<NaiveDate, usize>),
    Monthly(BTreeMap<YearMonth, usize>),
    Yearly(YearlyPivot),
}

/// Aggregate a snapshot of the session user's entries
pub fn summarize<S: JournalStore>(
    store: &S,
    session: &Session,
    granularity: Granularity,
) -> Result<Summary> {
    let entries = store.list(session.owner())?;
    Ok(match granularity {
        Granularity::Week => Summary::Weekly(weekly_series(&entries)),
        Granularity::Month => Summary::Monthly(monthly_series(&entries)),
        Granularity::Year => Summary::Yearly(yearly_pivot(&entries)),
    })
}
