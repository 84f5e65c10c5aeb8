// src/api/requests.rs
//! Typed request bodies for the handful of Notion endpoints this tool speaks.
//!
//! Optional fields are skipped during serialization so the wire payloads stay
//! minimal — the API treats an absent filter differently from a null one.

use crate::model::Block;
use crate::types::NotionId;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Restricts search results to one object kind.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectFilter {
    property: &'static str,
    value: &'static str,
}

impl ObjectFilter {
    pub fn pages() -> Self {
        Self {
            property: "object",
            value: "page",
        }
    }

    pub fn databases() -> Self {
        Self {
            property: "object",
            value: "database",
        }
    }
}

/// Body for `POST /search`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<ObjectFilter>,
}

impl SearchRequest {
    /// Search pages matching a title query.
    pub fn pages(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
            filter: Some(ObjectFilter::pages()),
        }
    }

    /// List every database the integration can see.
    pub fn databases() -> Self {
        Self {
            query: None,
            filter: Some(ObjectFilter::databases()),
        }
    }
}

/// Sort clause on one of the page timestamps.
#[derive(Debug, Clone, Serialize)]
pub struct TimestampSort {
    timestamp: &'static str,
    direction: &'static str,
}

impl TimestampSort {
    pub fn last_edited_desc() -> Self {
        Self {
            timestamp: "last_edited_time",
            direction: "descending",
        }
    }
}

/// Body for `POST /databases/{id}/query`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DatabaseQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub sorts: Vec<TimestampSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl DatabaseQuery {
    /// A query with no filter, sorts, or page size — returns everything.
    pub fn unfiltered() -> Self {
        Self::default()
    }

    /// A query with a caller-supplied filter object, passed through verbatim.
    pub fn filtered(filter: Value) -> Self {
        Self {
            filter: Some(filter),
            ..Self::default()
        }
    }

    /// The most recently edited pages, newest first.
    pub fn recent_first(limit: u32) -> Self {
        Self {
            filter: None,
            sorts: vec![TimestampSort::last_edited_desc()],
            page_size: Some(limit),
        }
    }
}

/// Parent reference for page creation.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ParentRef {
    Database { database_id: String },
    Page { page_id: String },
}

impl ParentRef {
    pub fn database(id: &NotionId) -> Self {
        Self::Database {
            database_id: id.to_hyphenated(),
        }
    }

    pub fn page(id: &NotionId) -> Self {
        Self::Page {
            page_id: id.to_hyphenated(),
        }
    }
}

/// Body for `POST /pages`.
#[derive(Debug, Clone, Serialize)]
pub struct CreatePageRequest {
    pub parent: ParentRef,
    pub properties: Map<String, Value>,
}

impl CreatePageRequest {
    /// A page with just a title under the given property name.
    pub fn titled(parent: ParentRef, title_property: &str, title: &str) -> Self {
        let mut properties = Map::new();
        properties.insert(title_property.to_string(), title_value(title));
        Self { parent, properties }
    }

    /// Adds a multi-select property (used for tags).
    pub fn with_multi_select(mut self, property: &str, options: &[String]) -> Self {
        self.properties
            .insert(property.to_string(), multi_select_value(options));
        self
    }
}

/// Body for `PATCH /blocks/{id}/children`.
#[derive(Debug, Serialize)]
pub struct AppendChildren<'a> {
    pub children: &'a [Block],
}

/// A title property value.
pub fn title_value(text: &str) -> Value {
    json!({ "title": [ { "text": { "content": text } } ] })
}

/// A multi-select property value from a list of option names.
pub fn multi_select_value(options: &[String]) -> Value {
    let names: Vec<Value> = options.iter().map(|name| json!({ "name": name })).collect();
    json!({ "multi_select": names })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn search_request_pages_shape() {
        let body = serde_json::to_value(SearchRequest::pages("meeting")).unwrap();
        assert_eq!(
            body,
            json!({ "query": "meeting", "filter": { "property": "object", "value": "page" } })
        );
    }

    #[test]
    fn database_listing_omits_query() {
        let body = serde_json::to_value(SearchRequest::databases()).unwrap();
        assert_eq!(
            body,
            json!({ "filter": { "property": "object", "value": "database" } })
        );
    }

    #[test]
    fn unfiltered_query_serializes_empty() {
        let body = serde_json::to_value(DatabaseQuery::unfiltered()).unwrap();
        assert_eq!(body, json!({}));
    }

    #[test]
    fn recent_first_query_shape() {
        let body = serde_json::to_value(DatabaseQuery::recent_first(5)).unwrap();
        assert_eq!(
            body,
            json!({
                "sorts": [ { "timestamp": "last_edited_time", "direction": "descending" } ],
                "page_size": 5
            })
        );
    }

    #[test]
    fn create_page_request_shape() {
        let id = NotionId::parse("550e8400e29b41d4a716446655440000").unwrap();
        let request = CreatePageRequest::titled(ParentRef::database(&id), "Name", "My page")
            .with_multi_select("Tags", &["DAILY".to_string()]);
        let body = serde_json::to_value(request).unwrap();
        assert_eq!(
            body["parent"],
            json!({ "database_id": "550e8400-e29b-41d4-a716-446655440000" })
        );
        assert_eq!(
            body["properties"]["Name"]["title"][0]["text"]["content"],
            "My page"
        );
        assert_eq!(
            body["properties"]["Tags"]["multi_select"][0]["name"],
            "DAILY"
        );
    }

    #[test]
    fn append_children_wraps_blocks() {
        let blocks = vec![crate::model::Block::paragraph("hello")];
        let body = serde_json::to_value(AppendChildren { children: &blocks }).unwrap();
        assert_eq!(body["children"][0]["type"], "paragraph");
    }
}
