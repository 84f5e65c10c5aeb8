// src/api/mod.rs
//! Notion API interaction — the ability to read and write workspace content.
//!
//! Business logic depends on the [`NotionGateway`] trait, never on HTTP
//! details, so the notes layer stays testable without network access.

pub mod client;
pub mod requests;
pub mod responses;

use crate::error::AppError;
use crate::model::Block;
use crate::types::NotionId;
use serde_json::Value;

pub use client::NotionHttpClient;
pub use requests::{
    AppendChildren, CreatePageRequest, DatabaseQuery, ObjectFilter, ParentRef, SearchRequest,
    TimestampSort,
};
pub use responses::{CreatedPage, NotionErrorBody, PageStub, QueryResults};

/// The ability to call the Notion API endpoints this tool uses.
///
/// Each method maps one-to-one onto an HTTP call and returns the raw response
/// JSON; callers that need structure parse it with the views in
/// [`responses`].
#[async_trait::async_trait]
pub trait NotionGateway: Send + Sync {
    /// `POST /search`
    async fn search(&self, request: &SearchRequest) -> Result<Value, AppError>;

    /// `GET /pages/{id}`
    async fn retrieve_page(&self, id: &NotionId) -> Result<Value, AppError>;

    /// `GET /databases/{id}`
    async fn retrieve_database(&self, id: &NotionId) -> Result<Value, AppError>;

    /// `POST /databases/{id}/query`
    async fn query_database(&self, id: &NotionId, query: &DatabaseQuery)
        -> Result<Value, AppError>;

    /// `POST /pages`
    async fn create_page(&self, request: &CreatePageRequest) -> Result<Value, AppError>;

    /// `PATCH /blocks/{id}/children`
    async fn append_blocks(&self, parent: &NotionId, blocks: &[Block]) -> Result<Value, AppError>;
}
