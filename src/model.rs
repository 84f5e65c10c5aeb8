// src/model.rs
//! Content blocks destined for the append-children endpoint.
//!
//! The formatter produces an ordered sequence of these; serialization turns
//! each one into the Notion block wire object (`object`/`type`/payload keyed
//! by the type name).

use serde::{Serialize, Serializer};
use serde_json::{json, Map, Value};

/// Heading depth, clamped to the three levels Notion supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Clamps a raw `#` count into the supported range (minimum 1, maximum 3).
    pub fn clamp(marker_count: usize) -> Self {
        match marker_count {
            0 | 1 => Self::H1,
            2 => Self::H2,
            _ => Self::H3,
        }
    }

    /// The Notion block type name for this level.
    pub fn api_type(self) -> &'static str {
        match self {
            Self::H1 => "heading_1",
            Self::H2 => "heading_2",
            Self::H3 => "heading_3",
        }
    }
}

/// A structured content unit: heading, bulleted item, or paragraph.
///
/// Output order is significant — blocks are appended to the page in the
/// order they appear in the sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Heading { level: HeadingLevel, text: String },
    BulletItem { text: String },
    Paragraph { text: String },
}

impl Block {
    /// Convenience constructor for headings.
    pub fn heading(level: HeadingLevel, text: impl Into<String>) -> Self {
        Self::Heading {
            level,
            text: text.into(),
        }
    }

    /// Convenience constructor for bulleted list items.
    pub fn bullet(text: impl Into<String>) -> Self {
        Self::BulletItem { text: text.into() }
    }

    /// Convenience constructor for paragraphs.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self::Paragraph { text: text.into() }
    }

    /// The Notion block type name.
    pub fn block_type(&self) -> &'static str {
        match self {
            Self::Heading { level, .. } => level.api_type(),
            Self::BulletItem { .. } => "bulleted_list_item",
            Self::Paragraph { .. } => "paragraph",
        }
    }

    /// The plain text carried by this block.
    pub fn text(&self) -> &str {
        match self {
            Self::Heading { text, .. } | Self::BulletItem { text } | Self::Paragraph { text } => {
                text
            }
        }
    }

    /// Builds the Notion wire object for this block.
    ///
    /// The payload key repeats the block type name, so the object is built
    /// through a map rather than a literal.
    pub fn to_wire(&self) -> Value {
        let block_type = self.block_type();
        let mut object = Map::new();
        object.insert("object".to_string(), json!("block"));
        object.insert("type".to_string(), json!(block_type));
        object.insert(
            block_type.to_string(),
            json!({
                "rich_text": [
                    { "type": "text", "text": { "content": self.text() } }
                ]
            }),
        );
        Value::Object(object)
    }
}

impl Serialize for Block {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_wire().serialize(serializer)
    }
}
