//! Calendar windows for filtering events.
//!
//! Day, week and month boundaries are UTC calendar boundaries, whatever the
//! viewer's local timezone. Weeks are ISO weeks (Monday to Sunday).

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CampusError;

/// Calendar window relative to "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateRange {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl DateRange {
    /// Half-open `[from, to)` bounds of the window containing `now`.
    /// `None` means unbounded.
    pub fn bounds(&self, now: DateTime<Utc>) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
        let today = now.date_naive();
        match self {
            DateRange::All => None,
            DateRange::Today => Some((start_of(today), start_of(today + Duration::days(1)))),
            DateRange::Week => {
                let monday = today - Duration::days(i64::from(today.weekday().num_days_from_monday()));
                Some((start_of(monday), start_of(monday + Duration::days(7))))
            }
            DateRange::Month => {
                let first = today.with_day(1)?;
                let next = if first.month() == 12 {
                    NaiveDate::from_ymd_opt(first.year() + 1, 1, 1)?
                } else {
                    NaiveDate::from_ymd_opt(first.year(), first.month() + 1, 1)?
                };
                Some((start_of(first), start_of(next)))
            }
        }
    }

    /// Whether `instant` falls in the window containing `now`.
    pub fn contains(&self, instant: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self.bounds(now) {
            None => true,
            Some((from, to)) => instant >= from && instant < to,
        }
    }

    /// Chip label shown when the range is applied.
    pub fn label(&self) -> &'static str {
        match self {
            DateRange::Today => "Today",
            DateRange::Week => "This week",
            DateRange::Month => "This month",
            DateRange::All => "All dates",
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DateRange::Today => "today",
            DateRange::Week => "week",
            DateRange::Month => "month",
            DateRange::All => "all",
        };
        f.write_str(s)
    }
}

impl FromStr for DateRange {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "today" => Ok(DateRange::Today),
            "week" => Ok(DateRange::Week),
            "month" => Ok(DateRange::Month),
            "all" | "" => Ok(DateRange::All),
            other => Err(CampusError::InvalidFilter(format!(
                "invalid date range '{other}'. Expected today, week, month or all"
            ))),
        }
    }
}

/// Whether events must start after or before "now".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum When {
    Upcoming,
    Past,
    #[default]
    All,
}

impl When {
    pub fn matches(&self, start: DateTime<Utc>, now: DateTime<Utc>) -> bool {
        match self {
            When::Upcoming => start >= now,
            When::Past => start < now,
            When::All => true,
        }
    }
}

impl fmt::Display for When {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            When::Upcoming => "upcoming",
            When::Past => "past",
            When::All => "all",
        };
        f.write_str(s)
    }
}

impl FromStr for When {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(When::Upcoming),
            "past" => Ok(When::Past),
            "all" | "" => Ok(When::All),
            other => Err(CampusError::InvalidFilter(format!(
                "invalid time filter '{other}'. Expected upcoming, past or all"
            ))),
        }
    }
}

/// Midnight UTC at the start of `date`
fn start_of(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}
