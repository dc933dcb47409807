//! Colored terminal rendering for campus-core types.

use campus_core::exits::ExitInfo;
use campus_core::pages::{EmergencyContact, InfoPage};
use campus_core::service::{Faq, SupportService};
use campus_core::CampusEvent;
use owo_colors::OwoColorize;

pub trait Render {
    fn render(&self) -> String;
}

/// One-line event summary; `saved` adds a bookmark marker.
pub fn event_line(event: &CampusEvent, saved: bool) -> String {
    let marker = if saved { "★".yellow().to_string() } else { " ".to_string() };
    let time = event.start.format("%H:%M").to_string();
    let tag = format!("[{}]", event.category);
    format!(
        "{} {} {} {} {}",
        marker,
        time,
        event.title,
        tag.dimmed(),
        event.id.dimmed()
    )
}

impl Render for CampusEvent {
    fn render(&self) -> String {
        let mut lines = vec![self.title.bold().to_string()];

        let when = match self.end {
            Some(end) if end != self.start => format!(
                "{} - {}",
                self.start.format("%a %d %b %Y %H:%M"),
                end.format("%H:%M UTC")
            ),
            _ => self.start.format("%a %d %b %Y %H:%M UTC").to_string(),
        };
        lines.push(format!("{} {}", "When:".dimmed(), when));
        lines.push(format!("{} {}", "Where:".dimmed(), self.venue));
        lines.push(format!("{} {}", "Category:".dimmed(), self.category));
        if let Some(organiser) = &self.organiser {
            lines.push(format!("{} {}", "Organiser:".dimmed(), organiser));
        }
        if !self.description.is_empty() {
            lines.push(String::new());
            lines.push(self.description.clone());
        }

        lines.join("\n")
    }
}

impl Render for SupportService {
    fn render(&self) -> String {
        let mut line = format!(
            "{} {}\n   {}\n   {} {}",
            self.name.bold(),
            format!("({})", self.category).dimmed(),
            self.description,
            "Hours:".dimmed(),
            self.hours
        );
        if let Some(contact) = &self.contact {
            line.push_str(&format!("  {}", contact.to_string().cyan()));
        }
        line
    }
}

impl Render for Faq {
    fn render(&self) -> String {
        format!("{}\n   {}", self.question.bold(), self.answer)
    }
}

impl Render for InfoPage {
    fn render(&self) -> String {
        let mut lines = vec![self.title.bold().to_string(), self.summary.clone()];

        for section in &self.sections {
            lines.push(String::new());
            lines.push(section.heading.underline().to_string());
            for entry in &section.entries {
                lines.push(format!("  {} {}", entry.title.bold(), entry.text));
            }
        }

        if !self.links.is_empty() {
            lines.push(String::new());
            for link in &self.links {
                lines.push(format!("  {} {}", link.label, link.href.cyan()));
            }
        }

        lines.join("\n")
    }
}

impl Render for EmergencyContact {
    fn render(&self) -> String {
        format!(
            "{} {} {}",
            self.name.bold(),
            self.phone.green(),
            self.availability.dimmed()
        )
    }
}

impl Render for ExitInfo {
    fn render(&self) -> String {
        let status = if self.is_open() {
            self.status.to_string().green().to_string()
        } else {
            self.status.to_string().red().to_string()
        };
        format!(
            "{} [{}]\n   {}, {} ({})\n   {}",
            self.name.bold(),
            status,
            self.location,
            self.distance,
            self.estimated_time,
            self.direction.dimmed()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campus_core::Catalog;

    #[test]
    fn test_event_line_marks_saved() {
        let catalog = Catalog::builtin().unwrap();
        let event = catalog.find_event("talk-ai-ethics").unwrap();

        let saved = event_line(event, true);
        let plain = event_line(event, false);
        assert!(saved.contains('★'));
        assert!(!plain.contains('★'));
        assert!(plain.contains(&event.title));
    }

    #[test]
    fn test_page_render_includes_sections() {
        let catalog = Catalog::builtin().unwrap();
        let page = catalog.find_page("safety").unwrap();
        let out = page.render();
        assert!(out.contains("Staying Safe"));
        assert!(out.contains("Fire Safety"));
    }

    #[test]
    fn test_service_render_shows_contact() {
        let catalog = Catalog::builtin().unwrap();
        let out = catalog.find_service("campus-security").unwrap().render();
        assert!(out.contains("082-260-607"));
    }
}
