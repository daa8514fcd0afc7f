//! Parsing of raw API responses into the domain model.
//!
//! Success bodies deserialize through the wire models in `responses`;
//! error bodies are classified into the typed `NotionErrorCode`
//! vocabulary with an HTTP-status fallback.

use super::client::ApiResponse;
use super::responses::{
    NotionApiErrorResponse, PaginatedResponse, WireBlock, WireChildPagePayload, WirePage,
    WireRichText, WireTextPayload,
};
use crate::constants::ERROR_BODY_PREVIEW_LENGTH;
use crate::error::{AppError, NotionErrorCode};
use crate::model::{
    Annotations, Block, BlockCommon, BulletedListItemBlock, ChildPageBlock, Heading1Block,
    Heading2Block, Heading3Block, Link, PageRecord, ParagraphBlock, RichTextItem, RichTextType,
    TextBlockContent, UnsupportedBlock,
};
use crate::types::{BlockId, PageId};
use reqwest::StatusCode;

/// Parse any Notion API response body, dispatching on HTTP status.
pub fn parse_api_response<T>(result: ApiResponse<String>) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    if result.status.is_success() {
        parse_success_body(&result.data, &result.url)
    } else {
        parse_error_body(&result.data, result.status, &result.url)
    }
}

fn parse_success_body<T>(body: &str, url: &str) -> Result<T, AppError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| {
        log::error!("Failed to parse response from {}: {}", url, e);

        let preview = if body.len() > ERROR_BODY_PREVIEW_LENGTH {
            format!("{}...", &body[..ERROR_BODY_PREVIEW_LENGTH])
        } else {
            body.to_string()
        };

        AppError::MalformedResponse(format!("{} (body: {})", e, preview))
    })
}

fn parse_error_body<T>(body: &str, status: StatusCode, url: &str) -> Result<T, AppError> {
    // The API reports errors as a JSON body with code and message
    if let Ok(err) = serde_json::from_str::<NotionApiErrorResponse>(body) {
        return Err(AppError::NotionService {
            code: NotionErrorCode::from_api_response(&err.code),
            message: err.message,
            status,
        });
    }

    // Fallback to the bare HTTP status when the body is unparseable
    Err(AppError::NotionService {
        code: NotionErrorCode::from_http_status(status.as_u16()),
        message: format!("HTTP {} from {}", status, url),
        status,
    })
}

/// Parse one page of database query results.
pub fn parse_pages_page(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<WirePage>, AppError> {
    parse_api_response(result)
}

/// Parse one page of block children results, converting to domain blocks.
pub fn parse_blocks_page(
    result: ApiResponse<String>,
) -> Result<PaginatedResponse<Block>, AppError> {
    let wire: PaginatedResponse<WireBlock> = parse_api_response(result)?;
    let results = wire.results.into_iter().map(block_from_wire).collect();
    Ok(PaginatedResponse {
        object: wire.object,
        results,
        next_cursor: wire.next_cursor,
        has_more: wire.has_more,
    })
}

/// Convert a wire page into a `PageRecord`.
///
/// Returns `Ok(None)` when the page has no usable title property; the
/// caller decides whether to skip or abort. A result whose `object` is
/// not `"page"` is malformed.
pub fn page_record_from_wire(page: WirePage) -> Result<Option<PageRecord>, AppError> {
    if page.object != "page" {
        return Err(AppError::MalformedResponse(format!(
            "Database query returned a '{}' object, expected a page",
            page.object
        )));
    }

    let title = page.properties.values().find_map(|prop| {
        if prop.property_type != "title" {
            return None;
        }
        prop.title.as_ref().map(|items| plain_title(items))
    });

    let Some(title) = title.filter(|t| !t.is_empty()) else {
        return Ok(None);
    };

    Ok(Some(PageRecord {
        id: PageId::parse(&page.id)?,
        title,
        last_edited_time: page.last_edited_time,
    }))
}

fn plain_title(items: &[WireRichText]) -> String {
    items
        .iter()
        .map(|item| item.plain_text.as_str())
        .collect::<Vec<_>>()
        .join("")
}

/// Convert a wire block into the domain `Block` enum.
pub fn block_from_wire(block: WireBlock) -> Block {
    let mut common = BlockCommon::new(BlockId::from_normalized(block.id.replace('-', "")));
    common.has_children = block.has_children;
    common.last_edited_time = block.last_edited_time;

    let text_content = |block: &WireBlock| -> TextBlockContent {
        block
            .type_payload()
            .and_then(|payload| {
                serde_json::from_value::<WireTextPayload>(payload.clone()).ok()
            })
            .map(|payload| {
                TextBlockContent::new(
                    payload.rich_text.into_iter().map(rich_text_from_wire).collect(),
                )
            })
            .unwrap_or_default()
    };

    match block.block_type.as_str() {
        "paragraph" => Block::Paragraph(ParagraphBlock {
            content: text_content(&block),
            common,
        }),
        "heading_1" => Block::Heading1(Heading1Block {
            content: text_content(&block),
            common,
        }),
        "heading_2" => Block::Heading2(Heading2Block {
            content: text_content(&block),
            common,
        }),
        "heading_3" => Block::Heading3(Heading3Block {
            content: text_content(&block),
            common,
        }),
        "bulleted_list_item" => Block::BulletedListItem(BulletedListItemBlock {
            content: text_content(&block),
            common,
        }),
        "child_page" => {
            let title = block
                .type_payload()
                .and_then(|payload| {
                    serde_json::from_value::<WireChildPagePayload>(payload.clone()).ok()
                })
                .map(|payload| payload.title)
                .unwrap_or_default();
            Block::ChildPage(ChildPageBlock { common, title })
        }
        other => {
            log::debug!("Skipping unsupported block type: {}", other);
            Block::Unsupported(UnsupportedBlock {
                common,
                block_type: other.to_string(),
            })
        }
    }
}

fn rich_text_from_wire(item: WireRichText) -> RichTextItem {
    let annotations = item
        .annotations
        .map(|a| Annotations {
            bold: a.bold,
            italic: a.italic,
            strikethrough: a.strikethrough,
            underline: a.underline,
            code: a.code,
        })
        .unwrap_or_default();

    let text_type = match (item.text_type.as_str(), item.text) {
        ("text", Some(text)) => RichTextType::Text {
            content: text.content,
            link: text.link.map(|l| Link { url: l.url }),
        },
        _ => RichTextType::Other,
    };

    RichTextItem {
        text_type,
        annotations,
        plain_text: item.plain_text,
        href: item.href,
    }
}
