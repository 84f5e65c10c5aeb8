// src/api/responses.rs
//! Thin serde views over the response JSON this tool actually consumes.
//!
//! The raw CLI prints responses verbatim, so only the notes layer needs
//! typed views — and only for the handful of fields it reads.

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::{Map, Value};

/// The error body Notion returns alongside non-2xx statuses.
#[derive(Debug, Deserialize)]
pub struct NotionErrorBody {
    #[serde(default)]
    pub status: u16,
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// The fields of a freshly created page the notes layer cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedPage {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
}

impl CreatedPage {
    pub fn from_response(value: &Value) -> Result<Self, AppError> {
        serde_json::from_value(value.clone())
            .map_err(|e| AppError::MalformedResponse(format!("create-page response: {}", e)))
    }
}

/// A page of database query results.
#[derive(Debug, Deserialize)]
pub struct QueryResults {
    pub results: Vec<PageStub>,
}

/// The slice of a page object needed for recent-page listing.
#[derive(Debug, Deserialize)]
pub struct PageStub {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

impl PageStub {
    /// Reads the page title from the preferred property, falling back to any
    /// property carrying a non-empty `title` array, then to `"Untitled"`.
    pub fn title(&self, preferred_property: &str) -> String {
        self.properties
            .get(preferred_property)
            .and_then(plain_text_title)
            .or_else(|| self.properties.values().find_map(plain_text_title))
            .unwrap_or_else(|| "Untitled".to_string())
    }
}

/// Extracts the first `plain_text` span from a title property value.
fn plain_text_title(property: &Value) -> Option<String> {
    property
        .get("title")?
        .as_array()?
        .first()?
        .get("plain_text")?
        .as_str()
        .map(String::from)
}
