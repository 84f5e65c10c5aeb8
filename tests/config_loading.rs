// tests/config_loading.rs
//! Config file loading and its failure modes.

use notion_scribe::error::AppError;
use notion_scribe::NotesConfig;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("notion_config.json");
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn loads_a_complete_config() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "notion_api_token": "secret_abcdefghijklmnopqrs",
            "default_database_id": "11112222333344445555666677778888",
            "default_tags": ["INBOX", "NOTES"],
            "title_property": "Name",
            "tags_property": "Labels"
        }"#,
    );

    let config = NotesConfig::load(&path).unwrap();
    assert_eq!(config.api_key.as_str(), "secret_abcdefghijklmnopqrs");
    assert_eq!(
        config.default_database_id.as_str(),
        "11112222333344445555666677778888"
    );
    assert_eq!(config.default_tags, vec!["INBOX", "NOTES"]);
    assert_eq!(config.title_property, "Name");
    assert_eq!(config.tags_property, "Labels");
}

#[test]
fn property_names_and_tags_default_when_omitted() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "notion_api_token": "secret_abcdefghijklmnopqrs",
            "default_database_id": "11112222333344445555666677778888"
        }"#,
    );

    let config = NotesConfig::load(&path).unwrap();
    assert!(config.default_tags.is_empty());
    assert_eq!(config.title_property, "Page");
    assert_eq!(config.tags_property, "Tags");
}

#[test]
fn database_id_accepts_url_form() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "notion_api_token": "secret_abcdefghijklmnopqrs",
            "default_database_id": "https://www.notion.so/ws/11112222333344445555666677778888"
        }"#,
    );

    let config = NotesConfig::load(&path).unwrap();
    assert_eq!(
        config.default_database_id.as_str(),
        "11112222333344445555666677778888"
    );
}

#[test]
fn missing_file_reports_configuration_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nope.json");

    let err = NotesConfig::load(&path).unwrap_err();
    assert!(matches!(err, AppError::MissingConfiguration(_)));
}

#[test]
fn malformed_json_reports_parse_error_with_path() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "{ not json");

    let err = NotesConfig::load(&path).unwrap_err();
    match err {
        AppError::JsonParseError { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("expected JsonParseError, got {:?}", other),
    }
}

#[test]
fn invalid_token_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "notion_api_token": "not-a-notion-token",
            "default_database_id": "11112222333344445555666677778888"
        }"#,
    );

    let err = NotesConfig::load(&path).unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}

#[test]
fn invalid_database_id_is_rejected_at_parse_time() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"{
            "notion_api_token": "secret_abcdefghijklmnopqrs",
            "default_database_id": "not-an-id"
        }"#,
    );

    // NotionId deserialization fails inside serde, so this surfaces as a
    // JSON parse error for the config file.
    let err = NotesConfig::load(&path).unwrap_err();
    assert!(matches!(err, AppError::JsonParseError { .. }));
}
