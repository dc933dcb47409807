use std::path::PathBuf;

use anyhow::{Context, Result};
use campus_core::ics;
use owo_colors::OwoColorize;

use crate::commands::catalog;

pub fn run(id: &str, output: Option<PathBuf>) -> Result<()> {
    let catalog = catalog()?;
    let event = catalog.find_event(id)?;
    let content = ics::generate_ics(event)?;

    let path = output.unwrap_or_else(|| PathBuf::from(ics::ics_filename(event)));
    if path.as_os_str() == "-" {
        print!("{content}");
        return Ok(());
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("{} {}", "Exported".green(), path.display());

    Ok(())
}
