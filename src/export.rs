//! Orchestrates a full database export: query rows, fetch each page's
//! blocks, render, and write the Markdown files.

use crate::api::{parser, NotionBackend};
use crate::config::ExportConfig;
use crate::error::AppError;
use crate::model::{Block, PageRecord};
use crate::output::{page_frontmatter, page_output_path, write_page_file, Frontmatter};
use crate::pipeline::{PageRenderer, PageSink, PageSource};
use crate::render::{render_page, RenderedPage};
use std::path::PathBuf;

/// Counters accumulated over one export run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportSummary {
    pub pages_exported: usize,
    pub pages_skipped: usize,
    pub bytes_written: usize,
}

/// Drives the export of one Notion database to a local directory.
pub struct Exporter<'a, B: NotionBackend> {
    backend: &'a B,
    config: &'a ExportConfig,
}

impl<'a, B: NotionBackend> Exporter<'a, B> {
    pub fn new(backend: &'a B, config: &'a ExportConfig) -> Self {
        Self { backend, config }
    }

    /// Exports every page of the configured database.
    ///
    /// Rows without a title are skipped with a warning; any other
    /// failure aborts the run.
    pub async fn run(&self) -> Result<ExportSummary, AppError> {
        log::info!(
            "Querying database {} for pages to export",
            self.config.database
        );

        let (records, skipped) = self.collect_records().await?;
        log::info!(
            "Database query returned {} rows, {} exportable",
            records.len() + skipped,
            records.len()
        );

        let mut summary = ExportSummary {
            pages_skipped: skipped,
            ..ExportSummary::default()
        };

        for record in &records {
            log::info!("Exporting page {}", record.display_label());

            let blocks = self.fetch_page_blocks(record).await?;
            let rendered = self.render(record, &blocks);
            let frontmatter = page_frontmatter(
                record,
                rendered.last_modified_time,
                &self.config.custom_frontmatter,
            );

            let (path, bytes) =
                self.write(record, &frontmatter, &rendered)
                    .map_err(|e| AppError::PageExportFailed {
                        title: record.title.clone(),
                        cause: e.to_string(),
                    })?;

            log::info!("Exported '{}' to {}", record.title, path.display());
            summary.pages_exported += 1;
            summary.bytes_written += bytes;
        }

        Ok(summary)
    }

    /// Queries the database and converts rows to records, counting the
    /// rows that had to be skipped.
    async fn collect_records(&self) -> Result<(Vec<PageRecord>, usize), AppError> {
        let wire_pages = self
            .backend
            .query_database_pages(&self.config.database)
            .await?;

        let mut records = Vec::with_capacity(wire_pages.len());
        let mut skipped = 0;
        for page in wire_pages {
            match parser::page_record_from_wire(page)? {
                Some(record) => records.push(record),
                None => {
                    log::warn!("Skipping a database row with no title property");
                    skipped += 1;
                }
            }
        }

        Ok((records, skipped))
    }

    /// Fills in the children of any block that reports `has_children`.
    ///
    /// One level is enough: the only nested content the renderer uses is
    /// the direct body of a child page, plus immediate children of text
    /// blocks, which flatten into the parent document.
    async fn resolve_children(&self, blocks: &mut [Block]) -> Result<(), AppError> {
        for block in blocks.iter_mut() {
            if block.has_children() && block.children().is_empty() {
                let children = self.backend.retrieve_block_children(block.id()).await?;
                block.set_children(children);
            }
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl<B: NotionBackend> PageSource for Exporter<'_, B> {
    async fn fetch_pages(&self) -> Result<Vec<PageRecord>, AppError> {
        let (records, _) = self.collect_records().await?;
        Ok(records)
    }

    async fn fetch_page_blocks(&self, record: &PageRecord) -> Result<Vec<Block>, AppError> {
        let mut blocks = self
            .backend
            .retrieve_block_children(&record.id.as_block_id())
            .await?;
        self.resolve_children(&mut blocks).await?;
        Ok(blocks)
    }
}

impl<B: NotionBackend> PageRenderer for Exporter<'_, B> {
    fn render(&self, record: &PageRecord, blocks: &[Block]) -> RenderedPage {
        render_page(record, blocks)
    }
}

impl<B: NotionBackend> PageSink for Exporter<'_, B> {
    fn write(
        &self,
        record: &PageRecord,
        frontmatter: &Frontmatter,
        page: &RenderedPage,
    ) -> Result<(PathBuf, usize), AppError> {
        let path = page_output_path(&self.config.output_dir, &record.title, self.config.index_mode);
        let bytes = write_page_file(&path, frontmatter, &page.document)?;
        Ok((path, bytes))
    }
}
