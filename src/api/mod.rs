//! Notion API interaction: the ability to retrieve content from a workspace.
//!
//! This module provides a data-oriented interface to the Notion API,
//! with clear separation between I/O operations, parsing, and export logic.

pub mod client;
mod pagination;
pub mod parser;
pub mod responses;

use crate::error::AppError;
use crate::model::Block;
use crate::types::{BlockId, DatabaseId};

/// The ability to retrieve content from a Notion workspace.
///
/// Export logic depends on this trait, never on HTTP details, so tests
/// can substitute a fixture backend.
#[async_trait::async_trait]
pub trait NotionBackend: Send + Sync {
    /// Returns every row of the database, following pagination cursors.
    async fn query_database_pages(
        &self,
        database: &DatabaseId,
    ) -> Result<Vec<responses::WirePage>, AppError>;

    /// Returns every child block of the given block or page.
    async fn retrieve_block_children(&self, parent: &BlockId) -> Result<Vec<Block>, AppError>;
}

// Re-export the public interface
pub use client::{HttpSettings, NotionHttpClient};
