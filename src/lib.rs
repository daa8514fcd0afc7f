// src/lib.rs
//! export-notion-pages library: exports Notion database pages to local
//! Markdown files for static site builds.
//!
//! # Public API
//!
//! The library exposes types organized by concern:
//! - **Error handling**: `AppError`, `NotionErrorCode`, `ValidationError`
//! - **Configuration**: `CommandLineInput`, `ExportConfig`
//! - **Domain model**: `Block`, `PageRecord`, rich text types
//! - **Domain types**: `DatabaseId`, `PageId`, `BlockId`, `ApiKey`
//! - **API client**: `NotionBackend`, `NotionHttpClient`, parsers
//! - **Rendering**: `render_page`, `RenderedPage`
//! - **Output**: `Frontmatter`, path and writer helpers

mod api;
mod config;
mod constants;
mod error;
mod export;
mod model;
mod output;
mod pipeline;
mod render;
mod types;

// --- Error Handling ---
pub use crate::error::{AppError, NotionErrorCode, Result};
pub use crate::types::ValidationError;

// --- Configuration ---
pub use crate::config::{CommandLineInput, ExportConfig};

// --- Domain Model ---
pub use crate::model::{
    Annotations, Block, BlockCommon, BulletedListItemBlock, ChildPageBlock, Heading1Block,
    Heading2Block, Heading3Block, Link, PageRecord, ParagraphBlock, RichTextItem, RichTextType,
    TextBlockContent, UnsupportedBlock,
};

// --- Domain Types ---
pub use crate::types::{ApiKey, BlockId, DatabaseId, PageId, RenderedDocument, ValidatedUrl};

// --- API Client ---
pub use crate::api::{
    client::ApiResponse,
    parser::{block_from_wire, page_record_from_wire, parse_blocks_page, parse_pages_page},
    responses::{PaginatedResponse, WireBlock, WirePage},
    HttpSettings, NotionBackend, NotionHttpClient,
};

// --- Rendering ---
pub use crate::render::{render_page, RenderedPage};

// --- Output ---
pub use crate::output::{
    page_frontmatter, page_output_path, parse_custom_frontmatter, slug_filename, write_page_file,
    Frontmatter,
};

// --- Export Pipeline ---
pub use crate::export::{ExportSummary, Exporter};
pub use crate::pipeline::{PageRenderer, PageSink, PageSource};
