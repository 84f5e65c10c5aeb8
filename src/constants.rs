// src/constants.rs
//! Domain constants that define the operational boundaries of the system.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

/// Label stamped into the synthetic timestamp heading of every note.
pub const NOTE_ATTRIBUTION: &str = "notion-scribe";

/// Timestamp format used in note headings and inferred titles.
pub const TIMESTAMP_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Tags applied to quick notes, independent of the configured defaults.
pub const QUICK_NOTE_TAGS: &[&str] = &["DAILY", "PRODUCTIVITY"];

/// Maximum characters kept from the first line when inferring a quick-note
/// title; longer lines are truncated with an ellipsis.
pub const QUICK_TITLE_MAX_CHARS: usize = 50;

/// First lines at or beyond this length are considered prose, not a title,
/// and the timestamp fallback title is used instead.
pub const QUICK_TITLE_SOURCE_LIMIT: usize = 100;

/// How many pages `list` shows when no limit is given.
pub const DEFAULT_RECENT_LIMIT: u32 = 5;

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 500;
