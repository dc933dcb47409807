use anyhow::Result;
use campus_core::exits;
use owo_colors::OwoColorize;

use crate::commands::catalog;
use crate::render::Render;

/// Show a page, or list the available pages when no slug is given.
pub fn show(slug: Option<&str>) -> Result<()> {
    let catalog = catalog()?;

    let Some(slug) = slug else {
        for page in catalog.pages() {
            println!("{} {}", page.slug.bold(), page.title.dimmed());
        }
        return Ok(());
    };

    println!("{}", catalog.find_page(slug)?.render());
    Ok(())
}

pub fn contacts() -> Result<()> {
    let catalog = catalog()?;
    for contact in catalog.contacts() {
        println!("{}", contact.render());
        println!("   {}", contact.tel_href().cyan());
    }
    Ok(())
}

pub fn exits(query: Option<&str>, from: Option<&str>) -> Result<()> {
    let catalog = catalog()?;
    let all = catalog.exits();

    if let Some(from) = from {
        let Some(exit) = exits::nearest_open(all, Some(from)) else {
            println!("{}", "No exits listed".dimmed());
            return Ok(());
        };
        if !exit.is_open() {
            println!("{}", "No open exit found, showing the first listed".yellow());
        }
        println!("{}", exit.render());
        println!();
        println!("{}", exits::directions_text(from, exit));
        return Ok(());
    }

    let matching = exits::search_exits(all, query.unwrap_or_default());
    if matching.is_empty() {
        println!("{}", "No exits found".dimmed());
    }
    for exit in matching {
        println!("{}", exit.render());
    }
    Ok(())
}
