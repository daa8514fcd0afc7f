//! Rich text to Markdown conversion.
//!
//! Annotations are applied in a fixed order so nested styles compose
//! predictably: code innermost, then strikethrough, bold, italic,
//! underline (as HTML), and the link wrapper outermost.

use crate::model::{Annotations, Link, RichTextItem, RichTextType};
use crate::types::ValidatedUrl;

/// Renders an array of rich text items into Markdown.
pub fn rich_text_to_markdown(items: &[RichTextItem]) -> String {
    let mut output = String::new();
    for item in items {
        output.push_str(&render_item(item));
    }
    output
}

fn render_item(item: &RichTextItem) -> String {
    let (content, link) = match &item.text_type {
        RichTextType::Text { content, link } => (content.clone(), link.clone()),
        // Mentions and equations fall back to their plain-text form
        RichTextType::Other => (item.plain_text.clone(), None),
    };

    if content.is_empty() {
        return content;
    }

    let styled = apply_styles(&content, &item.annotations);

    let link_url = link
        .map(|Link { url }| url)
        .or_else(|| item.href.clone());
    match link_url {
        Some(url) => match ValidatedUrl::parse(&url) {
            Ok(valid) => format!("[{}]({})", styled, valid.as_str()),
            Err(_) => {
                log::debug!("Dropping invalid link URL: {}", url);
                styled
            }
        },
        None => styled,
    }
}

/// Applies annotation styling to text content for Markdown output.
pub fn apply_styles(content: &str, annotations: &Annotations) -> String {
    let mut result = content.to_string();

    // Code style first; it affects how other styles wrap
    if annotations.code {
        result = format!("`{}`", result);
    }

    if annotations.strikethrough {
        result = format!("~~{}~~", result);
    }

    if annotations.bold {
        result = format!("**{}**", result);
    }

    if annotations.italic {
        result = format!("*{}*", result);
    }

    // Underline requires HTML
    if annotations.underline {
        result = format!("<u>{}</u>", result);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text() {
        let items = vec![RichTextItem::plain_text("Hello World")];
        assert_eq!(rich_text_to_markdown(&items), "Hello World");
    }

    #[test]
    fn test_bold_italic() {
        let mut item = RichTextItem::plain_text("Bold Italic");
        item.annotations = Annotations {
            bold: true,
            italic: true,
            ..Default::default()
        };
        assert_eq!(rich_text_to_markdown(&[item]), "***Bold Italic***");
    }

    #[test]
    fn test_code_inside_bold() {
        let mut item = RichTextItem::plain_text("snippet");
        item.annotations = Annotations {
            code: true,
            bold: true,
            ..Default::default()
        };
        assert_eq!(rich_text_to_markdown(&[item]), "**`snippet`**");
    }

    #[test]
    fn test_linked_text() {
        let item = RichTextItem::linked_text("docs", "https://example.com/docs");
        assert_eq!(
            rich_text_to_markdown(&[item]),
            "[docs](https://example.com/docs)"
        );
    }

    #[test]
    fn test_invalid_link_dropped() {
        let item = RichTextItem::linked_text("here", "notion://internal");
        assert_eq!(rich_text_to_markdown(&[item]), "here");
    }

    #[test]
    fn test_segments_concatenate() {
        let items = vec![
            RichTextItem::plain_text("see "),
            RichTextItem::linked_text("this", "https://example.com"),
            RichTextItem::plain_text(" for details"),
        ];
        assert_eq!(
            rich_text_to_markdown(&items),
            "see [this](https://example.com) for details"
        );
    }
}
