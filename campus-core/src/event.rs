//! Campus event types.
//!
//! Events are defined at build time in the compiled-in catalog and never
//! mutated at runtime. All timestamps are UTC.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CampusError;

/// A campus event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusEvent {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    pub venue: String,
    pub category: EventCategory,
    /// Map pin for directions. Falls back to the venue text when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organiser: Option<String>,
}

impl CampusEvent {
    /// End of the event, or its start when no end is given.
    pub fn end_or_start(&self) -> DateTime<Utc> {
        self.end.unwrap_or(self.start)
    }

    /// UTC calendar day the event starts on.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Text searched by the free-text event filter.
    pub fn search_text(&self) -> String {
        format!("{} {} {}", self.title, self.description, self.venue)
    }
}

impl fmt::Display for CampusEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EventCategory {
    Orientation,
    Workshop,
    Club,
    Talk,
    Sports,
    Other,
}

impl EventCategory {
    pub const ALL: [EventCategory; 6] = [
        EventCategory::Orientation,
        EventCategory::Workshop,
        EventCategory::Club,
        EventCategory::Talk,
        EventCategory::Sports,
        EventCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Orientation => "Orientation",
            EventCategory::Workshop => "Workshop",
            EventCategory::Club => "Club",
            EventCategory::Talk => "Talk",
            EventCategory::Sports => "Sports",
            EventCategory::Other => "Other",
        }
    }
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventCategory {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        EventCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| CampusError::InvalidFilter(format!("unknown event category '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parses_case_insensitively() {
        assert_eq!("workshop".parse::<EventCategory>().unwrap(), EventCategory::Workshop);
        assert_eq!(" Sports ".parse::<EventCategory>().unwrap(), EventCategory::Sports);
        assert!("concert".parse::<EventCategory>().is_err());
    }

    #[test]
    fn test_event_deserializes_without_optional_fields() {
        let json = r#"{
            "id": "e1",
            "title": "Welcome Week",
            "start": "2026-02-02T01:00:00Z",
            "venue": "Great Hall",
            "category": "Orientation"
        }"#;
        let event: CampusEvent = serde_json::from_str(json).unwrap();
        assert_eq!(event.description, "");
        assert_eq!(event.end, None);
        assert_eq!(event.end_or_start(), event.start);
        assert_eq!(event.start_date(), NaiveDate::from_ymd_opt(2026, 2, 2).unwrap());
    }
}
