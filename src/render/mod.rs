//! Assembles a page's blocks into the final Markdown document.
//!
//! Most blocks render to plain Markdown lines. Child pages become HTML
//! `<section>` elements whose body is the child's blocks rendered to
//! Markdown and converted to HTML, so a static site build can treat each
//! child page as a self-contained section of the parent document.

mod blocks;
mod rich_text;

pub use blocks::block_markdown_line;
pub use rich_text::{apply_styles, rich_text_to_markdown};

use crate::constants::CHARS_PER_BLOCK_ESTIMATE;
use crate::model::{Block, PageRecord};
use crate::types::RenderedDocument;
use chrono::{DateTime, Utc};
use pulldown_cmark::{html, Parser};

/// The rendered body of one page, plus the effective modification time.
///
/// A child page edited after its parent bumps `last_modified_time`, so
/// the frontmatter reflects the newest content in the file.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub document: RenderedDocument,
    pub last_modified_time: DateTime<Utc>,
}

/// Renders a page's block tree into its final document.
pub fn render_page(record: &PageRecord, page_blocks: &[Block]) -> RenderedPage {
    let mut body = String::with_capacity(page_blocks.len() * CHARS_PER_BLOCK_ESTIMATE);
    let mut last_modified_time = record.last_edited_time;

    for block in page_blocks {
        match block {
            Block::ChildPage(child) => {
                if let Some(edited) = child.common.last_edited_time {
                    if edited > last_modified_time {
                        last_modified_time = edited;
                    }
                }

                body.push_str("\n<section>");
                body.push_str(&format!("\n<h2>{}</h2>", child.title));
                let section_markdown = blocks_to_markdown(&child.common.children);
                body.push('\n');
                body.push_str(&markdown_to_html(&section_markdown));
                body.push_str("\n</section>");
            }
            other => {
                if let Some(line) = block_markdown_line(other) {
                    body.push_str(&line);
                }
                // Nested content flattens into the parent document
                if !other.children().is_empty() {
                    body.push_str(&blocks_to_markdown(other.children()));
                }
            }
        }
    }

    RenderedPage {
        document: RenderedDocument::new(body),
        last_modified_time,
    }
}

/// Renders a flat run of blocks to Markdown lines.
fn blocks_to_markdown(blocks: &[Block]) -> String {
    let mut out = String::with_capacity(blocks.len() * CHARS_PER_BLOCK_ESTIMATE);
    for block in blocks {
        if let Some(line) = block_markdown_line(block) {
            out.push_str(&line);
        }
    }
    out
}

/// Converts Markdown to HTML for section bodies.
fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut out = String::with_capacity(markdown.len() * 2);
    html::push_html(&mut out, parser);
    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        BlockCommon, ChildPageBlock, Heading3Block, ParagraphBlock, RichTextItem, TextBlockContent,
    };
    use crate::types::PageId;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn record(last_edited: DateTime<Utc>) -> PageRecord {
        PageRecord {
            id: PageId::new_v4(),
            title: "Test Page".to_string(),
            last_edited_time: last_edited,
        }
    }

    fn paragraph(text: &str) -> Block {
        Block::Paragraph(ParagraphBlock {
            common: BlockCommon::default(),
            content: TextBlockContent::new(vec![RichTextItem::plain_text(text)]),
        })
    }

    #[test]
    fn test_flat_page_renders_lines_in_order() {
        let blocks = vec![
            Block::Heading3(Heading3Block {
                common: BlockCommon::default(),
                content: TextBlockContent::new(vec![RichTextItem::plain_text("About")]),
            }),
            paragraph("welcome"),
        ];
        let rendered = render_page(&record(Utc::now()), &blocks);
        assert_eq!(rendered.document.as_str(), "### About\nwelcome\n");
    }

    #[test]
    fn test_child_page_becomes_section() {
        let mut common = BlockCommon::default().with_children(vec![paragraph("inside")]);
        common.last_edited_time = None;
        let blocks = vec![Block::ChildPage(ChildPageBlock {
            common,
            title: "Chapter One".to_string(),
        })];

        let rendered = render_page(&record(Utc::now()), &blocks);
        let doc = rendered.document.as_str();
        assert!(doc.contains("<section>"));
        assert!(doc.contains("<h2>Chapter One</h2>"));
        assert!(doc.contains("<p>inside</p>"));
        assert!(doc.contains("</section>"));
    }

    #[test]
    fn test_newer_child_page_bumps_modified_time() {
        let parent_time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let child_time = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();

        let mut common = BlockCommon::default();
        common.last_edited_time = Some(child_time);
        let blocks = vec![Block::ChildPage(ChildPageBlock {
            common,
            title: "Newer".to_string(),
        })];

        let rendered = render_page(&record(parent_time), &blocks);
        assert_eq!(rendered.last_modified_time, child_time);
    }

    #[test]
    fn test_older_child_page_keeps_parent_time() {
        let parent_time = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        let child_time = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

        let mut common = BlockCommon::default();
        common.last_edited_time = Some(child_time);
        let blocks = vec![Block::ChildPage(ChildPageBlock {
            common,
            title: "Older".to_string(),
        })];

        let rendered = render_page(&record(parent_time), &blocks);
        assert_eq!(rendered.last_modified_time, parent_time);
    }

    #[test]
    fn test_nested_children_flatten() {
        let mut parent = paragraph("intro");
        parent.set_children(vec![paragraph("detail")]);
        let rendered = render_page(&record(Utc::now()), &[parent]);
        assert_eq!(rendered.document.as_str(), "intro\ndetail\n");
    }
}
