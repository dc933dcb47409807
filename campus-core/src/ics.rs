//! "Add to calendar" export.

use icalendar::{Calendar, Component, EventLike};

use crate::constants::{ICS_PRODID, ICS_UID_DOMAIN};
use crate::error::CampusResult;
use crate::event::CampusEvent;

const ICS_DATETIME: &str = "%Y%m%dT%H%M%SZ";

/// Generate a single-event .ics document for `event`.
pub fn generate_ics(event: &CampusEvent) -> CampusResult<String> {
    let mut cal = Calendar::new();

    let mut ics_event = icalendar::Event::new();
    ics_event.uid(&format!("{}@{}", event.id, ICS_UID_DOMAIN));
    ics_event.summary(&event.title);

    // DTSTAMP is required by RFC 5545; the event start keeps exports stable
    let start = event.start.format(ICS_DATETIME).to_string();
    ics_event.add_property("DTSTAMP", &start);
    ics_event.add_property("DTSTART", &start);
    ics_event.add_property("DTEND", event.end_or_start().format(ICS_DATETIME).to_string());

    ics_event.location(&event.venue);
    ics_event.description(&event.description);

    cal.push(ics_event.done());
    let cal = cal.done();

    Ok(rewrite_calendar_header(&cal.to_string()))
}

/// Use our PRODID and drop CALSCALE:GREGORIAN (it's the default).
fn rewrite_calendar_header(ics: &str) -> String {
    let mut result = String::with_capacity(ics.len());

    for line in ics.lines() {
        if line.starts_with("PRODID:") {
            result.push_str("PRODID:");
            result.push_str(ICS_PRODID);
            result.push_str("\r\n");
            continue;
        }

        if line == "CALSCALE:GREGORIAN" {
            continue;
        }

        result.push_str(line);
        result.push_str("\r\n");
    }

    result
}

/// Download name for an event's .ics: the title with whitespace runs
/// replaced by `_`.
pub fn ics_filename(event: &CampusEvent) -> String {
    let stem = event.title.split_whitespace().collect::<Vec<_>>().join("_");
    if stem.is_empty() {
        format!("{}.ics", event.id)
    } else {
        format!("{stem}.ics")
    }
}
