/// Durable storage key holding the bookmark set.
pub const BOOKMARKS_KEY: &str = "bookmarks";

/// Quiet period before a directory search query is evaluated.
pub const SEARCH_DEBOUNCE_MS: u64 = 180;

/// Maximum fuzzy score (0 = exact) a service may have to be listed.
pub const FUZZY_THRESHOLD: f64 = 0.35;

/// Number of events shown in the "coming up" preview.
pub const PREVIEW_LEN: usize = 3;

pub const DEFAULT_PORT: u16 = 4097;
pub const DEFAULT_BIND: &str = "127.0.0.1";

/// Suffix for event UIDs in exported .ics files.
pub const ICS_UID_DOMAIN: &str = "campus-hub";
pub const ICS_PRODID: &str = "-//Campus Hub//Events//EN";
