//! Support services directory search.
//!
//! The category selector narrows the list first; a non-blank query then
//! fuzzy-ranks what is left by name, description and category.

pub mod fuzzy;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::FUZZY_THRESHOLD;
use crate::error::CampusError;
use crate::service::{ServiceCategory, SupportService};
use fuzzy::WeightedKey;

/// Category chip in the directory: "All" or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategorySelector {
    #[default]
    All,
    Only(ServiceCategory),
}

impl CategorySelector {
    pub fn matches(&self, service: &SupportService) -> bool {
        match self {
            CategorySelector::All => true,
            CategorySelector::Only(cat) => service.category == *cat,
        }
    }

    /// "All" followed by every service category, in chip order.
    pub fn chips() -> Vec<CategorySelector> {
        std::iter::once(CategorySelector::All)
            .chain(ServiceCategory::ALL.into_iter().map(CategorySelector::Only))
            .collect()
    }
}

impl fmt::Display for CategorySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySelector::All => f.write_str("All"),
            CategorySelector::Only(cat) => write!(f, "{cat}"),
        }
    }
}

impl FromStr for CategorySelector {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() || s.eq_ignore_ascii_case("all") {
            return Ok(CategorySelector::All);
        }
        s.parse().map(CategorySelector::Only)
    }
}

impl Serialize for CategorySelector {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CategorySelector {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectoryQuery {
    #[serde(default)]
    pub category: CategorySelector,
    #[serde(default)]
    pub query: String,
}

impl DirectoryQuery {
    pub fn new(category: CategorySelector, query: impl Into<String>) -> Self {
        DirectoryQuery {
            category,
            query: query.into(),
        }
    }

    /// Services to display, in display order.
    pub fn search<'a>(&self, services: &'a [SupportService]) -> Vec<&'a SupportService> {
        let subset = services.iter().filter(|s| self.category.matches(s));

        let query = self.query.trim();
        if query.is_empty() {
            return subset.collect();
        }

        fuzzy::rank(subset, query, &service_keys(), FUZZY_THRESHOLD)
            .into_iter()
            .map(|(service, _)| service)
            .collect()
    }
}

fn service_keys() -> [WeightedKey<SupportService>; 3] {
    [
        WeightedKey { weight: 0.6, get: |s: &SupportService| s.name.as_str() },
        WeightedKey { weight: 0.3, get: |s: &SupportService| s.description.as_str() },
        WeightedKey { weight: 0.1, get: |s: &SupportService| s.category.as_str() },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn slugs(list: &[&SupportService]) -> Vec<String> {
        list.iter().map(|s| s.slug.clone()).collect()
    }

    #[test]
    fn test_all_without_query_returns_everything() {
        let catalog = Catalog::builtin().unwrap();
        let hits = DirectoryQuery::default().search(catalog.services());
        assert_eq!(hits.len(), catalog.services().len());
        assert_eq!(hits[0].slug, catalog.services()[0].slug);
    }

    #[test]
    fn test_category_only() {
        let catalog = Catalog::builtin().unwrap();
        let query = DirectoryQuery::new(CategorySelector::Only(ServiceCategory::Safety), "");
        assert_eq!(slugs(&query.search(catalog.services())), vec!["campus-security"]);
    }

    #[test]
    fn test_fuzzy_query_tolerates_typos() {
        let catalog = Catalog::builtin().unwrap();
        let query = DirectoryQuery::new(CategorySelector::All, "wellbeng");
        let hits = query.search(catalog.services());
        assert_eq!(hits.first().map(|s| s.slug.as_str()), Some("student-wellbeing"));
    }

    #[test]
    fn test_query_matches_description() {
        let catalog = Catalog::builtin().unwrap();
        let query = DirectoryQuery::new(CategorySelector::All, "canvas");
        let hits = query.search(catalog.services());
        assert_eq!(slugs(&hits).first().map(String::as_str), Some("it-service-desk"));
    }

    #[test]
    fn test_category_applies_before_query() {
        let catalog = Catalog::builtin().unwrap();
        let query = DirectoryQuery::new(CategorySelector::Only(ServiceCategory::Facilities), "canvas");
        assert!(query.search(catalog.services()).is_empty());
    }

    #[test]
    fn test_selector_parse_and_display() {
        assert_eq!("All".parse::<CategorySelector>().unwrap(), CategorySelector::All);
        assert_eq!(
            "IT Support".parse::<CategorySelector>().unwrap(),
            CategorySelector::Only(ServiceCategory::ItSupport)
        );
        assert!("Cafeteria".parse::<CategorySelector>().is_err());
        assert_eq!(CategorySelector::chips().len(), 6);
        assert_eq!(CategorySelector::chips()[1].to_string(), "IT Support");
    }
}
