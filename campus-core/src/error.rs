//! Error types for campus-hub.

use thiserror::Error;

/// Errors that can occur in campus-hub operations.
#[derive(Error, Debug)]
pub enum CampusError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event not found: {0}")]
    EventNotFound(String),

    #[error("Service not found: {0}")]
    ServiceNotFound(String),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Invalid filter: {0}")]
    InvalidFilter(String),

    #[error("Catalog error: {0}")]
    Catalog(String),

    #[error("ICS generation error: {0}")]
    Ics(String),

    #[error("Data directory {} is in use by another campus process (pid {holder})", .dir.display())]
    DataDirLocked { dir: std::path::PathBuf, holder: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl CampusError {
    /// True for lookups of unknown ids or slugs.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CampusError::EventNotFound(_)
                | CampusError::ServiceNotFound(_)
                | CampusError::PageNotFound(_)
        )
    }
}

/// Result type alias for campus-hub operations.
pub type CampusResult<T> = Result<T, CampusError>;
