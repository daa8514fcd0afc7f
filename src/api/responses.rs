//! Serde wire models for Notion API responses.
//!
//! Only the fields the exporter reads are modeled; everything else in a
//! response is ignored by serde. Conversion to the domain model lives in
//! `parser`.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

/// Generic paginated response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct PaginatedResponse<T> {
    pub object: String,
    pub results: Vec<T>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// A page object as returned by `databases/{id}/query`.
#[derive(Debug, Clone, Deserialize)]
pub struct WirePage {
    pub object: String,
    pub id: String,
    pub last_edited_time: DateTime<Utc>,
    #[serde(default)]
    pub properties: HashMap<String, WireProperty>,
}

/// A single property value on a page. Only title properties are read;
/// the `type` tag tells us whether `title` is meaningful.
#[derive(Debug, Clone, Deserialize)]
pub struct WireProperty {
    #[serde(rename = "type")]
    pub property_type: String,
    #[serde(default)]
    pub title: Option<Vec<WireRichText>>,
}

/// A block object as returned by `blocks/{id}/children`.
///
/// The type-specific payload lives under a key named after `type`
/// (`{"type": "paragraph", "paragraph": {...}}`), so it is captured as
/// flattened extra fields and extracted during conversion.
#[derive(Debug, Clone, Deserialize)]
pub struct WireBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub has_children: bool,
    pub last_edited_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub payload: HashMap<String, Value>,
}

impl WireBlock {
    /// The type-specific payload object, if present.
    pub fn type_payload(&self) -> Option<&Value> {
        self.payload.get(&self.block_type)
    }
}

/// Payload of text-bearing blocks (paragraph, headings, list items).
#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireTextPayload {
    #[serde(default)]
    pub rich_text: Vec<WireRichText>,
}

/// Payload of a `child_page` block.
#[derive(Debug, Clone, Deserialize)]
pub struct WireChildPagePayload {
    pub title: String,
}

/// One rich text run.
#[derive(Debug, Clone, Deserialize)]
pub struct WireRichText {
    #[serde(rename = "type")]
    pub text_type: String,
    #[serde(default)]
    pub text: Option<WireTextContent>,
    #[serde(default)]
    pub annotations: Option<WireAnnotations>,
    #[serde(default)]
    pub plain_text: String,
    #[serde(default)]
    pub href: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireTextContent {
    pub content: String,
    pub link: Option<WireLink>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireLink {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct WireAnnotations {
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub strikethrough: bool,
    #[serde(default)]
    pub underline: bool,
    #[serde(default)]
    pub code: bool,
}

/// Error response body from the Notion API.
#[derive(Debug, Clone, Deserialize)]
pub struct NotionApiErrorResponse {
    pub code: String,
    pub message: String,
}
