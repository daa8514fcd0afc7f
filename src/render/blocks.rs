//! Block to Markdown line conversion.

use super::rich_text::rich_text_to_markdown;
use crate::model::{Block, TextBlockContent};

/// Renders a single block to its Markdown line, if it has one.
///
/// Child pages are assembled into sections at the document level and
/// unsupported block types are skipped, so both return `None` here.
pub fn block_markdown_line(block: &Block) -> Option<String> {
    match block {
        Block::Heading1(b) => Some(heading_line(&b.content, 1)),
        Block::Heading2(b) => Some(heading_line(&b.content, 2)),
        Block::Heading3(b) => Some(heading_line(&b.content, 3)),
        Block::Paragraph(b) => Some(format!("{}\n", rich_text_to_markdown(&b.content.rich_text))),
        Block::BulletedListItem(b) => Some(format!(
            "* {}\n",
            rich_text_to_markdown(&b.content.rich_text)
        )),
        Block::ChildPage(_) => None,
        Block::Unsupported(b) => {
            log::debug!("Not rendering unsupported block type: {}", b.block_type);
            None
        }
    }
}

fn heading_line(content: &TextBlockContent, level: usize) -> String {
    format!(
        "{} {}\n",
        "#".repeat(level),
        rich_text_to_markdown(&content.rich_text)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        BlockCommon, BulletedListItemBlock, Heading1Block, Heading2Block, ParagraphBlock,
        RichTextItem, UnsupportedBlock,
    };
    use pretty_assertions::assert_eq;

    fn text_content(text: &str) -> TextBlockContent {
        TextBlockContent::new(vec![RichTextItem::plain_text(text)])
    }

    #[test]
    fn test_heading_levels() {
        let block = Block::Heading2(Heading2Block {
            common: BlockCommon::default(),
            content: text_content("Section"),
        });
        assert_eq!(block_markdown_line(&block), Some("## Section\n".to_string()));
    }

    #[test]
    fn test_linked_heading() {
        let block = Block::Heading1(Heading1Block {
            common: BlockCommon::default(),
            content: TextBlockContent::new(vec![RichTextItem::linked_text(
                "Title",
                "https://example.com",
            )]),
        });
        assert_eq!(
            block_markdown_line(&block),
            Some("# [Title](https://example.com)\n".to_string())
        );
    }

    #[test]
    fn test_paragraph_and_bullet() {
        let para = Block::Paragraph(ParagraphBlock {
            common: BlockCommon::default(),
            content: text_content("some prose"),
        });
        assert_eq!(block_markdown_line(&para), Some("some prose\n".to_string()));

        let bullet = Block::BulletedListItem(BulletedListItemBlock {
            common: BlockCommon::default(),
            content: text_content("first item"),
        });
        assert_eq!(
            block_markdown_line(&bullet),
            Some("* first item\n".to_string())
        );
    }

    #[test]
    fn test_unsupported_renders_nothing() {
        let block = Block::Unsupported(UnsupportedBlock {
            common: BlockCommon::default(),
            block_type: "callout".to_string(),
        });
        assert_eq!(block_markdown_line(&block), None);
    }
}
