//! Pipeline capability traits for the three stages of an export.
//!
//! Each trait describes a single capability, enabling testing each stage
//! in isolation.

use crate::error::AppError;
use crate::model::{Block, PageRecord};
use crate::output::Frontmatter;
use crate::render::RenderedPage;
use std::path::PathBuf;

/// Retrieves the pages of a database and their block content.
#[async_trait::async_trait]
pub trait PageSource {
    /// Returns one record per exportable database row.
    async fn fetch_pages(&self) -> Result<Vec<PageRecord>, AppError>;

    /// Returns the block tree of one page, children resolved.
    async fn fetch_page_blocks(&self, record: &PageRecord) -> Result<Vec<Block>, AppError>;
}

/// Transforms a page's blocks into its rendered document.
pub trait PageRenderer {
    fn render(&self, record: &PageRecord, blocks: &[Block]) -> RenderedPage;
}

/// Persists a rendered page, returning its path and size in bytes.
pub trait PageSink {
    fn write(
        &self,
        record: &PageRecord,
        frontmatter: &Frontmatter,
        page: &RenderedPage,
    ) -> Result<(PathBuf, usize), AppError>;
}
