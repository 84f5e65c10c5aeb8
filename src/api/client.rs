// src/api/client.rs
//! Pure HTTP client wrapper for the Notion API.
//!
//! A thin wrapper around reqwest handling authentication headers and
//! request/response plumbing. No business logic lives here.

use super::requests::{AppendChildren, CreatePageRequest, DatabaseQuery, SearchRequest};
use super::responses::NotionErrorBody;
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::Block;
use crate::types::{ApiKey, NotionId};
use reqwest::{header, Client, Response};
use serde::Serialize;
use serde_json::Value;

const NOTION_VERSION: &str = "2022-06-28";
const API_BASE_URL: &str = "https://api.notion.com/v1";

/// A thin wrapper around a reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .build()?;
        Ok(Self { client })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint.
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a POST request with a JSON body to the specified endpoint.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }

    /// Makes a PATCH request with a JSON body to the specified endpoint.
    pub async fn patch<T: Serialize>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("PATCH {}", url);
        Ok(self.client.patch(url).json(body).send().await?)
    }
}

/// Decodes a response into JSON, mapping non-2xx statuses to typed errors.
pub async fn decode_response(response: Response) -> Result<Value, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let body = response.text().await?;

    if status.is_success() {
        return serde_json::from_str(&body).map_err(|e| {
            log::error!("Failed to parse response from {}: {}", url, e);
            AppError::MalformedResponse(format!("{}: {}", e, body_preview(&body)))
        });
    }

    // Notion error bodies carry a machine-readable code; fall back to the
    // bare HTTP status when the body is something else entirely.
    match serde_json::from_str::<NotionErrorBody>(&body) {
        Ok(error_body) => Err(AppError::NotionService {
            code: NotionErrorCode::from_api_response(&error_body.code),
            message: error_body.message,
            status,
        }),
        Err(_) => Err(AppError::NotionService {
            code: NotionErrorCode::from_http_status(status.as_u16()),
            message: format!("HTTP {} from {}: {}", status, url, body_preview(&body)),
            status,
        }),
    }
}

fn body_preview(body: &str) -> &str {
    match body.char_indices().nth(ERROR_BODY_PREVIEW_LENGTH) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[async_trait::async_trait]
impl super::NotionGateway for NotionHttpClient {
    async fn search(&self, request: &SearchRequest) -> Result<Value, AppError> {
        let response = self.post("search", request).await?;
        decode_response(response).await
    }

    async fn retrieve_page(&self, id: &NotionId) -> Result<Value, AppError> {
        let response = self.get(&format!("pages/{}", id.to_hyphenated())).await?;
        decode_response(response).await
    }

    async fn retrieve_database(&self, id: &NotionId) -> Result<Value, AppError> {
        let response = self
            .get(&format!("databases/{}", id.to_hyphenated()))
            .await?;
        decode_response(response).await
    }

    async fn query_database(
        &self,
        id: &NotionId,
        query: &DatabaseQuery,
    ) -> Result<Value, AppError> {
        let endpoint = format!("databases/{}/query", id.to_hyphenated());
        let response = self.post(&endpoint, query).await?;
        decode_response(response).await
    }

    async fn create_page(&self, request: &CreatePageRequest) -> Result<Value, AppError> {
        let response = self.post("pages", request).await?;
        decode_response(response).await
    }

    async fn append_blocks(&self, parent: &NotionId, blocks: &[Block]) -> Result<Value, AppError> {
        let endpoint = format!("blocks/{}/children", parent.to_hyphenated());
        let response = self
            .patch(&endpoint, &AppendChildren { children: blocks })
            .await?;
        decode_response(response).await
    }
}
