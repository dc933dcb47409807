//! Support service and FAQ types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CampusError;

/// A support service listed in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SupportService {
    pub slug: String,
    pub name: String,
    pub category: ServiceCategory,
    #[serde(rename = "desc")]
    pub description: String,
    pub hours: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<Contact>,
}

/// How to reach a service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Contact {
    Email(String),
    Phone(String),
}

impl Contact {
    /// `mailto:` or `tel:` link for the contact channel.
    pub fn href(&self) -> String {
        match self {
            Contact::Email(addr) => format!("mailto:{addr}"),
            Contact::Phone(number) => {
                let digits: String = number
                    .chars()
                    .filter(|c| c.is_ascii_alphanumeric() || *c == '+')
                    .collect();
                format!("tel:{digits}")
            }
        }
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Contact::Email(addr) => write!(f, "{addr}"),
            Contact::Phone(number) => write!(f, "{number}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceCategory {
    #[serde(rename = "IT Support")]
    ItSupport,
    Facilities,
    Safety,
    Wellbeing,
    Academic,
}

impl ServiceCategory {
    pub const ALL: [ServiceCategory; 5] = [
        ServiceCategory::ItSupport,
        ServiceCategory::Facilities,
        ServiceCategory::Safety,
        ServiceCategory::Wellbeing,
        ServiceCategory::Academic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::ItSupport => "IT Support",
            ServiceCategory::Facilities => "Facilities",
            ServiceCategory::Safety => "Safety",
            ServiceCategory::Wellbeing => "Wellbeing",
            ServiceCategory::Academic => "Academic",
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceCategory {
    type Err = CampusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        ServiceCategory::ALL
            .into_iter()
            .find(|c| {
                c.as_str().eq_ignore_ascii_case(s)
                    || c.as_str().replace(' ', "-").eq_ignore_ascii_case(s)
            })
            .ok_or_else(|| CampusError::InvalidFilter(format!("unknown service category '{s}'")))
    }
}

/// A frequently asked support question
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(rename = "q")]
    pub question: String,
    #[serde(rename = "a")]
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Faq {
    /// Case-insensitive match on question, answer or any tag.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        self.question.to_lowercase().contains(&q)
            || self.answer.to_lowercase().contains(&q)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&q))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_category_round_trips_display_name() {
        for cat in ServiceCategory::ALL {
            assert_eq!(cat.as_str().parse::<ServiceCategory>().unwrap(), cat);
        }
        assert_eq!("it-support".parse::<ServiceCategory>().unwrap(), ServiceCategory::ItSupport);
    }

    #[test]
    fn test_contact_href() {
        assert_eq!(Contact::Email("a@b.edu".into()).href(), "mailto:a@b.edu");
        assert_eq!(Contact::Phone("082-260-607".into()).href(), "tel:082260607");
        assert_eq!(Contact::Phone("+60 82 260 607".into()).href(), "tel:+6082260607");
    }

    #[test]
    fn test_service_deserializes_with_contact() {
        let json = r#"{
            "slug": "campus-security",
            "name": "Campus Security",
            "category": "Safety",
            "desc": "Emergencies & safety on campus.",
            "hours": "24/7",
            "contact": { "phone": "082-260-607" }
        }"#;
        let service: SupportService = serde_json::from_str(json).unwrap();
        assert_eq!(service.category, ServiceCategory::Safety);
        assert_eq!(service.contact, Some(Contact::Phone("082-260-607".into())));
    }

    #[test]
    fn test_faq_matches_tags() {
        let faq = Faq {
            question: "I can't log into Canvas.".into(),
            answer: "Reset your password.".into(),
            tags: vec!["login".into(), "it".into()],
        };
        assert!(faq.matches("LOGIN"));
        assert!(faq.matches("canvas"));
        assert!(faq.matches(""));
        assert!(!faq.matches("parking"));
    }
}
