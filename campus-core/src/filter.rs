//! Event list filtering and grouping.
//!
//! Filtering is a pure function of the event list, the filter state, the
//! bookmark set and the current instant. Predicates apply in a fixed order:
//! saved-only, date range, time (upcoming/past), free text, category. The
//! result is sorted by start time (stable for equal starts).

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::bookmarks::BookmarkStore;
use crate::date_range::{DateRange, When};
use crate::event::{CampusEvent, EventCategory};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub range: DateRange,
    #[serde(default)]
    pub when: When,
    #[serde(default)]
    pub categories: Vec<EventCategory>,
    #[serde(default)]
    pub saved_only: bool,
}

impl EventFilter {
    /// Filter and sort `events`.
    ///
    /// `saved_only` is ignored while no bookmarks exist, so toggling the
    /// last bookmark off never leaves an empty list behind a stale flag.
    pub fn apply(
        &self,
        events: &[CampusEvent],
        bookmarks: &BookmarkStore,
        now: DateTime<Utc>,
    ) -> Vec<CampusEvent> {
        let query = self.query.trim().to_lowercase();
        let saved_only = self.effective_saved_only(bookmarks);

        let mut list: Vec<CampusEvent> = events
            .iter()
            .filter(|e| !saved_only || bookmarks.is_saved(&e.id))
            .filter(|e| self.range.contains(e.start, now))
            .filter(|e| self.when.matches(e.start, now))
            .filter(|e| query.is_empty() || e.search_text().to_lowercase().contains(&query))
            .filter(|e| self.categories.is_empty() || self.categories.contains(&e.category))
            .cloned()
            .collect();

        list.sort_by_key(|e| e.start);

        tracing::debug!(
            total = events.len(),
            shown = list.len(),
            range = %self.range,
            when = %self.when,
            saved_only,
            "Filtered events"
        );

        list
    }

    pub fn effective_saved_only(&self, bookmarks: &BookmarkStore) -> bool {
        self.saved_only && !bookmarks.is_empty()
    }

    /// Labels for the filters currently applied, in display order.
    pub fn active_chips(&self, bookmarks: &BookmarkStore) -> Vec<String> {
        let mut chips = Vec::new();
        if self.effective_saved_only(bookmarks) {
            chips.push("Saved".to_string());
        }
        if self.range != DateRange::All {
            chips.push(self.range.label().to_string());
        }
        chips.extend(self.categories.iter().map(|c| c.to_string()));
        chips
    }

    /// Remove the filter a chip stands for.
    pub fn clear_chip(&mut self, chip: &str) {
        match chip {
            "Saved" => self.saved_only = false,
            "Today" | "This week" | "This month" => self.range = DateRange::All,
            other => self.categories.retain(|c| c.as_str() != other),
        }
    }

    /// Add the category if absent, remove it if present.
    pub fn toggle_category(&mut self, category: EventCategory) {
        if let Some(pos) = self.categories.iter().position(|c| *c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category);
        }
    }
}

/// Distinct categories present in `events`, sorted by name.
pub fn available_categories(events: &[CampusEvent]) -> Vec<EventCategory> {
    let mut cats: Vec<EventCategory> = events.iter().map(|e| e.category).collect();
    cats.sort_by_key(|c| c.as_str());
    cats.dedup();
    cats
}

/// Events sharing a UTC start date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayGroup {
    pub date: NaiveDate,
    pub label: String,
    pub events: Vec<CampusEvent>,
}

/// Group events by UTC start date, days ascending. Event order within a day
/// is preserved.
pub fn group_by_day(events: &[CampusEvent], now: DateTime<Utc>) -> Vec<DayGroup> {
    let today = now.date_naive();
    let mut days: BTreeMap<NaiveDate, Vec<CampusEvent>> = BTreeMap::new();
    for event in events {
        days.entry(event.start_date()).or_default().push(event.clone());
    }

    days.into_iter()
        .map(|(date, events)| DayGroup {
            date,
            label: day_label(date, today),
            events,
        })
        .collect()
}

/// "Today", "Tomorrow", or e.g. "Wednesday, 04 March 2026".
pub fn day_label(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        "Today".to_string()
    } else if date == today + Duration::days(1) {
        "Tomorrow".to_string()
    } else {
        date.format("%A, %d %B %Y").to_string()
    }
}

/// The next `n` events starting at or after `now`.
pub fn upcoming_preview(events: &[CampusEvent], now: DateTime<Utc>, n: usize) -> Vec<CampusEvent> {
    let mut list: Vec<CampusEvent> = events.iter().filter(|e| e.start >= now).cloned().collect();
    list.sort_by_key(|e| e.start);
    list.truncate(n);
    list
}
