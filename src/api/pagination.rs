//! Cursor pagination over Notion list endpoints.
//!
//! The API caps each response at 100 results and hands back a
//! `next_cursor` while more remain. Between result pages the loop pauses
//! to stay under Notion's integration rate limit.

use super::responses::PaginatedResponse;
use crate::constants::NOTION_API_PAGE_SIZE;
use crate::error::AppError;
use std::time::Duration;

/// Fetches all result pages of a list endpoint using async closures.
///
/// `fetch_fn` receives the page size and the cursor to resume from
/// (None for the first request).
pub async fn fetch_all_pages<T, F, Fut>(
    mut fetch_fn: F,
    page_sleep: Duration,
) -> Result<Vec<T>, AppError>
where
    F: FnMut(u32, Option<String>) -> Fut,
    Fut: std::future::Future<Output = Result<PaginatedResponse<T>, AppError>>,
{
    let mut all_items = Vec::new();
    let mut cursor = None;

    loop {
        let response = fetch_fn(NOTION_API_PAGE_SIZE, cursor).await?;

        let has_more = response.has_more;
        cursor = response.next_cursor.clone();
        all_items.extend(response.results);

        if !has_more || cursor.is_none() {
            break;
        }

        if !page_sleep.is_zero() {
            log::debug!(
                "More results pending, sleeping {}ms before next request",
                page_sleep.as_millis()
            );
            tokio::time::sleep(page_sleep).await;
        }
    }

    Ok(all_items)
}
