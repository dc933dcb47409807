use anyhow::Result;
use campus_core::config::CampusConfig;
use campus_core::debounce::debounce;
use campus_core::directory::{CategorySelector, DirectoryQuery};
use campus_core::Catalog;
use owo_colors::OwoColorize;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

use crate::commands::catalog;
use crate::render::Render;

pub fn run(cat: Option<&str>, query: &str) -> Result<()> {
    let catalog = catalog()?;
    let category: CategorySelector = cat.unwrap_or_default().parse()?;
    print_results(&catalog, &DirectoryQuery::new(category, query));
    Ok(())
}

/// Search as the user types: each stdin line replaces the query and the
/// search runs once input has been quiet for the configured delay.
pub async fn interactive(cat: Option<&str>) -> Result<()> {
    let config = CampusConfig::load()?;
    let catalog = catalog()?;
    let category: CategorySelector = cat.unwrap_or_default().parse()?;

    println!(
        "{}",
        format!("Searching {category} services. Type a query, Ctrl-D to quit.").dimmed()
    );

    let (tx, rx) = mpsc::channel(16);
    let mut settled = debounce(rx, config.search_debounce());

    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            if tx.send(line).await.is_err() {
                break;
            }
        }
    });

    while let Some(query) = settled.recv().await {
        tracing::debug!(%query, "Running directory search");
        print_results(&catalog, &DirectoryQuery::new(category, query));
    }

    Ok(())
}

fn print_results(catalog: &Catalog, query: &DirectoryQuery) {
    let services = query.search(catalog.services());
    if services.is_empty() {
        println!("{}", "No services found".dimmed());
        return;
    }
    for service in services {
        println!("{}", service.render());
    }
}

pub fn faqs(query: &str) -> Result<()> {
    let catalog = catalog()?;
    let faqs = catalog.search_faqs(query);
    if faqs.is_empty() {
        println!("{}", "No matching questions".dimmed());
    }
    for faq in faqs {
        println!("{}\n", faq.render());
    }
    Ok(())
}
