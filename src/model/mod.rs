mod block;
pub mod blocks;
pub mod common;
mod rich_text;

pub use block::Block;
pub use blocks::*;
pub use common::BlockCommon;
pub use rich_text::{Annotations, Link, RichTextItem, RichTextType};

use crate::types::PageId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the exported database, carrying the metadata the frontmatter needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRecord {
    pub id: PageId,
    pub title: String,
    pub last_edited_time: DateTime<Utc>,
}

impl PageRecord {
    /// A short label for logs: the title, or the ID if the title is blank.
    pub fn display_label(&self) -> &str {
        if self.title.is_empty() {
            self.id.as_str()
        } else {
            &self.title
        }
    }
}
