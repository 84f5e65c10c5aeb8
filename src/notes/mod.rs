// src/notes/mod.rs
//! The convenience layer: formatted note pages, quick notes, recent listings.
//!
//! `NoteService` orchestrates the two-call create flow (page, then children)
//! over an injected [`NotionGateway`], so everything here runs against an
//! in-memory fake in tests.

mod formatter;
mod title;

pub use formatter::note_blocks;
pub use title::infer_title;

use crate::api::{
    CreatePageRequest, CreatedPage, DatabaseQuery, NotionGateway, ParentRef, QueryResults,
};
use crate::config::NotesConfig;
use crate::constants::QUICK_NOTE_TAGS;
use crate::error::AppError;
use crate::types::NotionId;
use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::sync::Arc;

/// Outcome of a note-creation call.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedNote {
    pub page_id: String,
    pub url: Option<String>,
    pub title: String,
}

/// One row of the recent-page listing.
#[derive(Debug, Clone, Serialize)]
pub struct RecentPage {
    pub id: String,
    pub title: String,
    pub url: Option<String>,
    pub last_edited: DateTime<Utc>,
}

/// Note-taking operations over the default database.
pub struct NoteService {
    gateway: Arc<dyn NotionGateway>,
    config: NotesConfig,
}

impl NoteService {
    pub fn new(gateway: Arc<dyn NotionGateway>, config: NotesConfig) -> Self {
        Self { gateway, config }
    }

    /// Creates a page titled `title` in the default database and appends the
    /// formatted note blocks to it.
    ///
    /// When `tags` is absent or empty, the configured default tags apply.
    pub async fn create_note(
        &self,
        title: &str,
        notes: &str,
        tags: Option<Vec<String>>,
    ) -> Result<CreatedNote, AppError> {
        let tags = match tags {
            Some(tags) if !tags.is_empty() => tags,
            _ => self.config.default_tags.clone(),
        };

        let request = CreatePageRequest::titled(
            ParentRef::database(&self.config.default_database_id),
            &self.config.title_property,
            title,
        )
        .with_multi_select(&self.config.tags_property, &tags);

        let response = self.gateway.create_page(&request).await?;
        let created = CreatedPage::from_response(&response)?;
        let page_id = NotionId::parse(&created.id)?;

        let blocks = note_blocks(notes, Local::now().naive_local());
        self.gateway.append_blocks(&page_id, &blocks).await?;

        log::info!(
            "Created page '{}' ({}) with {} blocks",
            title,
            created.id,
            blocks.len()
        );

        Ok(CreatedNote {
            page_id: created.id,
            url: created.url,
            title: title.to_string(),
        })
    }

    /// Creates a quick note: the title is inferred from the content and the
    /// quick-note tags apply instead of the configured defaults.
    pub async fn quick_note(&self, content: &str) -> Result<CreatedNote, AppError> {
        let title = infer_title(content, Local::now().naive_local());
        let tags = QUICK_NOTE_TAGS.iter().map(|tag| tag.to_string()).collect();
        self.create_note(&title, content, Some(tags)).await
    }

    /// Lists the most recently edited pages in the default database.
    pub async fn recent_pages(&self, limit: u32) -> Result<Vec<RecentPage>, AppError> {
        let query = DatabaseQuery::recent_first(limit);
        let response = self
            .gateway
            .query_database(&self.config.default_database_id, &query)
            .await?;
        let results: QueryResults = serde_json::from_value(response)?;

        Ok(results
            .results
            .into_iter()
            .map(|page| {
                let title = page.title(&self.config.title_property);
                RecentPage {
                    id: page.id,
                    title,
                    url: page.url,
                    last_edited: page.last_edited_time,
                }
            })
            .collect())
    }
}
