//! Executes output operations by performing actual I/O.
//!
//! This module is the only place where file writes occur, keeping the
//! rest of the codebase pure and testable.

use super::frontmatter::Frontmatter;
use crate::error::AppError;
use crate::types::RenderedDocument;
use std::fs;
use std::path::Path;

/// Writes one exported page: frontmatter block followed by the content.
///
/// Returns the number of bytes written.
pub fn write_page_file(
    path: &Path,
    frontmatter: &Frontmatter,
    document: &RenderedDocument,
) -> Result<usize, AppError> {
    let body = compose_file_body(frontmatter, document);
    log::debug!("Writing {} bytes to {}", body.len(), path.display());

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(path, &body)?;

    log::info!("Wrote file: {}", path.display());
    Ok(body.len())
}

/// Assembles the on-disk representation of a page.
pub fn compose_file_body(frontmatter: &Frontmatter, document: &RenderedDocument) -> String {
    let mut out = String::with_capacity(document.len() + 256);
    out.push_str("---");
    for (key, value) in frontmatter.fields() {
        out.push_str(&format!("\n{}: {}", key, value));
    }
    out.push_str("\n---");
    out.push('\n');
    out.push_str(document.as_str());
    out
}
