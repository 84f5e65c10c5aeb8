// src/config.rs
//! Configuration for the notes layer and key resolution for the raw CLI.
//!
//! The notes binary is driven by a local JSON file (`notion_config.json` by
//! default); the raw binary resolves its key from the environment. Both end
//! up in explicit structs handed to whatever needs them — there is no
//! ambient global configuration.

use crate::error::AppError;
use crate::types::{ApiKey, NotionId};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "notion_config.json";

/// Environment variable the raw CLI reads its API token from.
pub const TOKEN_ENV_VAR: &str = "NOTION_API_TOKEN";

fn default_title_property() -> String {
    "Page".to_string()
}

fn default_tags_property() -> String {
    "Tags".to_string()
}

/// On-disk schema of the config file.
#[derive(Debug, Deserialize)]
struct ConfigFile {
    notion_api_token: String,
    default_database_id: NotionId,
    #[serde(default)]
    default_tags: Vec<String>,
    #[serde(default = "default_title_property")]
    title_property: String,
    #[serde(default = "default_tags_property")]
    tags_property: String,
}

/// Resolved notes configuration — validated and ready to drive the service.
#[derive(Debug, Clone)]
pub struct NotesConfig {
    pub api_key: ApiKey,
    pub default_database_id: NotionId,
    pub default_tags: Vec<String>,
    pub title_property: String,
    pub tags_property: String,
}

impl NotesConfig {
    /// Loads and validates the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path).map_err(|e| {
            AppError::MissingConfiguration(format!(
                "cannot read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let file: ConfigFile = serde_json::from_str(&raw).map_err(|e| AppError::JsonParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(Self {
            api_key: ApiKey::new(file.notion_api_token)?,
            default_database_id: file.default_database_id,
            default_tags: file.default_tags,
            title_property: file.title_property,
            tags_property: file.tags_property,
        })
    }
}

/// Resolves the API key for the raw CLI from the environment.
pub fn api_key_from_env() -> Result<ApiKey, AppError> {
    let token = std::env::var(TOKEN_ENV_VAR).map_err(|_| {
        AppError::MissingConfiguration(format!(
            "{} environment variable not set",
            TOKEN_ENV_VAR
        ))
    })?;
    Ok(ApiKey::new(token)?)
}
