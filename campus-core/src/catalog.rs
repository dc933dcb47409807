//! Compiled-in static data.
//!
//! The catalog is parsed once at startup and is read-only afterwards.
//! Identifiers must be unique within each list.

use std::collections::HashSet;

use serde::de::DeserializeOwned;

use crate::error::{CampusError, CampusResult};
use crate::event::CampusEvent;
use crate::exits::ExitInfo;
use crate::pages::{EmergencyContact, InfoPage};
use crate::service::{Faq, SupportService};

const EVENTS_JSON: &str = include_str!("../data/events.json");
const SERVICES_JSON: &str = include_str!("../data/services.json");
const FAQS_JSON: &str = include_str!("../data/faqs.json");
const PAGES_JSON: &str = include_str!("../data/pages.json");
const CONTACTS_JSON: &str = include_str!("../data/contacts.json");
const EXITS_JSON: &str = include_str!("../data/exits.json");

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    events: Vec<CampusEvent>,
    services: Vec<SupportService>,
    faqs: Vec<Faq>,
    pages: Vec<InfoPage>,
    contacts: Vec<EmergencyContact>,
    exits: Vec<ExitInfo>,
}

impl Catalog {
    /// Load the data shipped with the binary.
    pub fn builtin() -> CampusResult<Self> {
        let catalog = Catalog {
            events: parse("events", EVENTS_JSON)?,
            services: parse("services", SERVICES_JSON)?,
            faqs: parse("faqs", FAQS_JSON)?,
            pages: parse("pages", PAGES_JSON)?,
            contacts: parse("contacts", CONTACTS_JSON)?,
            exits: parse("exits", EXITS_JSON)?,
        };
        catalog.validate()?;

        tracing::debug!(
            events = catalog.events.len(),
            services = catalog.services.len(),
            pages = catalog.pages.len(),
            "Loaded built-in catalog"
        );

        Ok(catalog)
    }

    /// Build a catalog from explicit event and service lists.
    pub fn new(events: Vec<CampusEvent>, services: Vec<SupportService>) -> CampusResult<Self> {
        let catalog = Catalog {
            events,
            services,
            ..Default::default()
        };
        catalog.validate()?;
        Ok(catalog)
    }

    fn validate(&self) -> CampusResult<()> {
        ensure_unique("event", self.events.iter().map(|e| e.id.as_str()))?;
        ensure_unique("service", self.services.iter().map(|s| s.slug.as_str()))?;
        ensure_unique("page", self.pages.iter().map(|p| p.slug.as_str()))?;
        Ok(())
    }

    pub fn events(&self) -> &[CampusEvent] {
        &self.events
    }

    pub fn services(&self) -> &[SupportService] {
        &self.services
    }

    pub fn faqs(&self) -> &[Faq] {
        &self.faqs
    }

    pub fn pages(&self) -> &[InfoPage] {
        &self.pages
    }

    pub fn contacts(&self) -> &[EmergencyContact] {
        &self.contacts
    }

    pub fn exits(&self) -> &[ExitInfo] {
        &self.exits
    }

    pub fn find_event(&self, id: &str) -> CampusResult<&CampusEvent> {
        self.events
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| CampusError::EventNotFound(id.to_string()))
    }

    pub fn find_service(&self, slug: &str) -> CampusResult<&SupportService> {
        self.services
            .iter()
            .find(|s| s.slug == slug)
            .ok_or_else(|| CampusError::ServiceNotFound(slug.to_string()))
    }

    pub fn find_page(&self, slug: &str) -> CampusResult<&InfoPage> {
        self.pages
            .iter()
            .find(|p| p.slug == slug)
            .ok_or_else(|| CampusError::PageNotFound(slug.to_string()))
    }

    /// FAQs matching a free-text query (all of them for an empty query).
    pub fn search_faqs(&self, query: &str) -> Vec<&Faq> {
        self.faqs.iter().filter(|f| f.matches(query)).collect()
    }
}

fn parse<T: DeserializeOwned>(name: &str, json: &str) -> CampusResult<Vec<T>> {
    serde_json::from_str(json)
        .map_err(|e| CampusError::Catalog(format!("invalid built-in {name} data: {e}")))
}

fn ensure_unique<'a>(kind: &str, ids: impl Iterator<Item = &'a str>) -> CampusResult<()> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CampusError::Catalog(format!("duplicate {kind} id '{id}'")));
        }
    }
    Ok(())
}
