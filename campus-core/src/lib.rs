//! Core types for campus-hub.
//!
//! This crate holds everything the CLI and the server share:
//! - the compiled-in [`catalog::Catalog`] of events, services and pages
//! - the persisted [`bookmarks::BookmarkStore`]
//! - event filtering ([`filter`]) and directory search ([`directory`])
//! - calendar export ([`ics`]) and map links ([`maps`])

pub mod bookmarks;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod date_range;
pub mod debounce;
pub mod directory;
pub mod error;
pub mod event;
pub mod exits;
pub mod filter;
pub mod ics;
pub mod maps;
pub mod pages;
pub mod service;

pub use bookmarks::BookmarkStore;
pub use catalog::Catalog;
pub use error::{CampusError, CampusResult};
pub use event::{CampusEvent, EventCategory};
