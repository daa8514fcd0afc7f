// tests/wire_parsing.rs
//! Parsing raw Notion API bodies into the domain model, including the
//! error classification paths.

use export_notion_pages::{
    parse_blocks_page, parse_pages_page, ApiResponse, AppError, Block, NotionErrorCode,
};
use reqwest::StatusCode;

fn response(body: &str, status: StatusCode) -> ApiResponse<String> {
    ApiResponse {
        data: body.to_string(),
        status,
        url: "https://api.notion.com/v1/test".to_string(),
    }
}

#[test]
fn parses_database_query_page() {
    let body = r#"{
        "object": "list",
        "results": [
            {
                "object": "page",
                "id": "550e8400-e29b-41d4-a716-446655440000",
                "last_edited_time": "2024-03-01T12:00:00.000Z",
                "properties": {
                    "Name": {
                        "type": "title",
                        "title": [{"type": "text", "plain_text": "First Post"}]
                    },
                    "Tags": {"type": "multi_select"}
                }
            }
        ],
        "next_cursor": "cursor-2",
        "has_more": true
    }"#;

    let page = parse_pages_page(response(body, StatusCode::OK)).unwrap();
    assert!(page.has_more);
    assert_eq!(page.next_cursor.as_deref(), Some("cursor-2"));
    assert_eq!(page.results.len(), 1);
    assert_eq!(page.results[0].object, "page");
}

#[test]
fn parses_block_children_page() {
    let body = r#"{
        "object": "list",
        "results": [
            {
                "id": "11111111-2222-3333-4444-555555555555",
                "type": "heading_1",
                "has_children": false,
                "heading_1": {
                    "rich_text": [{
                        "type": "text",
                        "text": {"content": "Intro", "link": null},
                        "plain_text": "Intro"
                    }]
                }
            },
            {
                "id": "22222222-2222-3333-4444-555555555555",
                "type": "child_page",
                "has_children": true,
                "last_edited_time": "2024-05-01T00:00:00.000Z",
                "child_page": {"title": "Details"}
            }
        ],
        "next_cursor": null,
        "has_more": false
    }"#;

    let page = parse_blocks_page(response(body, StatusCode::OK)).unwrap();
    assert!(!page.has_more);
    assert_eq!(page.results.len(), 2);

    assert!(matches!(page.results[0], Block::Heading1(_)));
    let Block::ChildPage(child) = &page.results[1] else {
        panic!("expected child_page");
    };
    assert_eq!(child.title, "Details");
    assert!(child.common.has_children);
    assert!(child.common.last_edited_time.is_some());
}

#[test]
fn classifies_api_error_bodies() {
    let body = r#"{
        "object": "error",
        "status": 404,
        "code": "object_not_found",
        "message": "Could not find database."
    }"#;

    let err = parse_pages_page(response(body, StatusCode::NOT_FOUND)).unwrap_err();
    let AppError::NotionService { code, message, .. } = err else {
        panic!("expected a NotionService error");
    };
    assert_eq!(code, NotionErrorCode::ObjectNotFound);
    assert!(code.is_not_found());
    assert_eq!(message, "Could not find database.");
}

#[test]
fn falls_back_to_http_status_for_unparseable_errors() {
    let err = parse_pages_page(response("<html>bad gateway</html>", StatusCode::BAD_GATEWAY))
        .unwrap_err();
    let AppError::NotionService { code, .. } = err else {
        panic!("expected a NotionService error");
    };
    assert_eq!(code, NotionErrorCode::HttpStatus(502));
}

#[test]
fn malformed_success_body_is_an_error() {
    let err = parse_pages_page(response("{not json", StatusCode::OK)).unwrap_err();
    assert!(matches!(err, AppError::MalformedResponse(_)));
}
