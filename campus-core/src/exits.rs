//! Emergency exit directory.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitInfo {
    /// Where the user is standing when this exit applies
    pub location: String,
    pub name: String,
    pub distance: String,
    pub direction: String,
    pub estimated_time: String,
    pub status: ExitStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExitStatus {
    Open,
    Closed,
    #[serde(rename = "Under Maintenance")]
    UnderMaintenance,
}

impl fmt::Display for ExitStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitStatus::Open => write!(f, "Open"),
            ExitStatus::Closed => write!(f, "Closed"),
            ExitStatus::UnderMaintenance => write!(f, "Under Maintenance"),
        }
    }
}

impl ExitInfo {
    pub fn is_open(&self) -> bool {
        self.status == ExitStatus::Open
    }
}

/// Pick the exit to recommend.
///
/// An open exit serving `from` wins, then the first open exit, then the
/// first exit of any status.
pub fn nearest_open<'a>(exits: &'a [ExitInfo], from: Option<&str>) -> Option<&'a ExitInfo> {
    if let Some(from) = from.map(str::trim).filter(|f| !f.is_empty()) {
        let here = exits
            .iter()
            .find(|e| e.is_open() && e.location.eq_ignore_ascii_case(from));
        if here.is_some() {
            return here;
        }
    }

    exits.iter().find(|e| e.is_open()).or_else(|| exits.first())
}

/// Case-insensitive search over exit name and location.
pub fn search_exits<'a>(exits: &'a [ExitInfo], query: &str) -> Vec<&'a ExitInfo> {
    let q = query.trim().to_lowercase();
    exits
        .iter()
        .filter(|e| e.name.to_lowercase().contains(&q) || e.location.to_lowercase().contains(&q))
        .collect()
}

/// Plain-text directions suitable for copying or sharing.
pub fn directions_text(from: &str, exit: &ExitInfo) -> String {
    format!("From {}, go to {}. Direction: {}.", from, exit.name, exit.direction)
}
