use anyhow::Result;
use campus_core::filter::EventFilter;
use chrono::Utc;
use owo_colors::OwoColorize;

use crate::commands::{catalog, lock_bookmarks, open_bookmarks};
use crate::render::event_line;

pub fn toggle(id: &str) -> Result<()> {
    let catalog = catalog()?;
    let event = catalog.find_event(id)?;
    let (_lock, mut bookmarks) = lock_bookmarks()?;

    if bookmarks.toggle(&event.id) {
        println!("{} {}", "★ Saved".yellow(), event.title);
    } else {
        println!("{} {}", "Removed".dimmed(), event.title);
    }

    Ok(())
}

pub fn list() -> Result<()> {
    let catalog = catalog()?;
    let bookmarks = open_bookmarks()?;

    if bookmarks.is_empty() {
        println!("{}", "No saved events".dimmed());
        return Ok(());
    }

    if !bookmarks.contains_any(catalog.events().iter().map(|e| e.id.as_str())) {
        println!(
            "{}",
            format!("None of your {} saved events are listed any more", bookmarks.len()).dimmed()
        );
        return Ok(());
    }

    let filter = EventFilter {
        saved_only: true,
        ..EventFilter::default()
    };
    for event in filter.apply(catalog.events(), &bookmarks, Utc::now()) {
        println!("{}", event_line(&event, true));
    }

    let unknown = bookmarks
        .ids()
        .into_iter()
        .filter(|id| catalog.find_event(id).is_err())
        .count();
    if unknown > 0 {
        println!("{}", format!("({unknown} saved events are no longer listed)").dimmed());
    }

    Ok(())
}
