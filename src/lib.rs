// src/lib.rs
//! notion-scribe library — CLI wrappers around the Notion REST API.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling** — `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration** — `NotesConfig`, `api_key_from_env`
//! - **Domain model** — `Block`, `HeadingLevel`
//! - **Domain types** — `ApiKey`, `NotionId`
//! - **API client** — `NotionGateway`, `NotionHttpClient`, request/response types
//! - **Notes** — `NoteService`, `note_blocks`, `infer_title`

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod model;
pub mod notes;
pub mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{api_key_from_env, NotesConfig, DEFAULT_CONFIG_FILE};

// --- Domain Model ---
pub use crate::model::{Block, HeadingLevel};

// --- Domain Types ---
pub use crate::types::{ApiKey, NotionId};

// --- API Client ---
pub use crate::api::{
    CreatePageRequest, CreatedPage, DatabaseQuery, NotionGateway, NotionHttpClient, ParentRef,
    SearchRequest,
};

// --- Notes ---
pub use crate::notes::{infer_title, note_blocks, CreatedNote, NoteService, RecentPage};
