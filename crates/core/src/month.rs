//! Calendar-month value object and period windows.
//!
//! Reports are filtered by calendar month; `MonthLabel` is the single place
//! that knows where a month starts and ends, so every aggregator buckets
//! timestamps the same way.

use core::fmt;
use core::str::FromStr;

use chrono::{DateTime, Datelike, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ReportError;

/// A calendar month ("YYYY-MM"), the reporting period unit.
///
/// Ordered chronologically and hashable so it can key month buckets and
/// memoized results.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MonthLabel {
    // First day of the month; day is always 1.
    first_day: NaiveDate,
}

impl MonthLabel {
    /// Build a month from its year and 1-based month number.
    pub fn new(year: i32, month: u32) -> Result<Self, ReportError> {
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(first_day) => Ok(Self { first_day }),
            None => Err(ReportError::validation(format!(
                "invalid month: {year:04}-{month:02}"
            ))),
        }
    }

    /// The calendar-month bucket a timestamp falls into.
    pub fn of(at: DateTime<Utc>) -> Self {
        let date = at.date_naive();
        Self {
            // day 1 of the timestamp's own month always exists
            first_day: date - chrono::Days::new(u64::from(date.day0())),
        }
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// First instant of the month (UTC midnight on day 1).
    pub fn start(&self) -> DateTime<Utc> {
        self.first_day.and_time(NaiveTime::MIN).and_utc()
    }

    /// First instant of the following month; the window upper bound.
    fn end_exclusive(&self) -> DateTime<Utc> {
        let (year, month) = if self.month() == 12 {
            (self.year() + 1, 1)
        } else {
            (self.year(), self.month() + 1)
        };
        match NaiveDate::from_ymd_opt(year, month, 1) {
            Some(next) => next.and_time(NaiveTime::MIN).and_utc(),
            // only reachable at the end of chrono's representable range
            None => DateTime::<Utc>::MAX_UTC,
        }
    }

    /// True for every instant within the month, first to last inclusive.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        at >= self.start() && at < self.end_exclusive()
    }
}

impl fmt::Display for MonthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

impl FromStr for MonthLabel {
    type Err = ReportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ReportError::validation(format!("month label must be YYYY-MM: {s:?}"));
        let (year, month) = s.split_once('-').ok_or_else(malformed)?;
        let year: i32 = year.parse().map_err(|_| malformed())?;
        let month: u32 = month.parse().map_err(|_| malformed())?;
        Self::new(year, month)
    }
}

impl TryFrom<String> for MonthLabel {
    type Error = ReportError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<MonthLabel> for String {
    fn from(value: MonthLabel) -> Self {
        value.to_string()
    }
}
