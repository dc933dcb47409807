use anyhow::Result;
use campus_core::date_range::{DateRange, When};
use campus_core::filter::{self, EventFilter};
use campus_core::maps::MapLinks;
use campus_core::EventCategory;
use chrono::Utc;
use owo_colors::OwoColorize;

use crate::commands::{catalog, open_bookmarks};
use crate::render::{event_line, Render};

/// Parse command-line filter arguments.
pub fn build_filter(
    query: Option<String>,
    range: Option<String>,
    when: Option<String>,
    categories: &[String],
    saved_only: bool,
) -> Result<EventFilter> {
    let range: DateRange = range.as_deref().unwrap_or_default().parse()?;
    let when: When = when.as_deref().unwrap_or_default().parse()?;
    let categories = categories
        .iter()
        .map(|c| c.parse::<EventCategory>())
        .collect::<Result<Vec<_>, _>>()?;

    Ok(EventFilter {
        query: query.unwrap_or_default(),
        range,
        when,
        categories,
        saved_only,
    })
}

pub fn run(filter: EventFilter, json: bool) -> Result<()> {
    let catalog = catalog()?;
    let bookmarks = open_bookmarks()?;
    let now = Utc::now();

    if json {
        let events = filter.apply(catalog.events(), &bookmarks, now);
        println!("{}", serde_json::to_string_pretty(&events)?);
        return Ok(());
    }

    if filter.saved_only && bookmarks.is_empty() {
        println!("{}", "No saved events yet, showing everything".dimmed());
    }

    let chips = filter.active_chips(&bookmarks);
    if !chips.is_empty() {
        println!("{} {}", "Filters:".dimmed(), chips.join(", "));
    }

    let events = filter.apply(catalog.events(), &bookmarks, now);
    if events.is_empty() {
        println!("{}", "No events found".dimmed());
        return Ok(());
    }

    for (i, day) in filter::group_by_day(&events, now).iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", day.label.bold());
        for event in &day.events {
            println!("{}", event_line(event, bookmarks.is_saved(&event.id)));
        }
    }

    Ok(())
}

pub fn show(id: &str) -> Result<()> {
    let catalog = catalog()?;
    let bookmarks = open_bookmarks()?;
    let event = catalog.find_event(id)?;

    println!("{}", event.render());
    println!();

    let links = MapLinks::for_event(event);
    println!("{} {}", "Map:".dimmed(), links.search.cyan());
    println!("{} {}", "Directions:".dimmed(), links.directions.cyan());

    let status = if bookmarks.is_saved(&event.id) {
        "★ Saved".yellow().to_string()
    } else {
        format!("Not saved (campus save {})", event.id).dimmed().to_string()
    };
    println!("{status}");

    Ok(())
}
