//! Google Maps links for event venues.

use serde::Serialize;
use url::form_urlencoded;

use crate::event::CampusEvent;

const SEARCH_BASE: &str = "https://www.google.com/maps/search/";
const DIRECTIONS_BASE: &str = "https://www.google.com/maps/dir/";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLinks {
    pub search: String,
    pub directions: String,
}

impl MapLinks {
    pub fn for_event(event: &CampusEvent) -> Self {
        MapLinks {
            search: search_url(event),
            directions: directions_url(event),
        }
    }
}

/// Coordinates when the event has a pin, otherwise the venue text.
fn place(event: &CampusEvent) -> String {
    match event.location {
        Some(point) => format!("{},{}", point.lat, point.lng),
        None => event.venue.clone(),
    }
}

pub fn search_url(event: &CampusEvent) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair("query", &place(event))
        .finish();
    format!("{SEARCH_BASE}?{query}")
}

pub fn directions_url(event: &CampusEvent) -> String {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("api", "1")
        .append_pair("destination", &place(event))
        .finish();
    format!("{DIRECTIONS_BASE}?{query}")
}
