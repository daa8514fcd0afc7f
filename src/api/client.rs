//! Pure HTTP client wrapper for the Notion API.
//!
//! A thin layer over reqwest handling authentication headers, timeouts,
//! and request/response plumbing without parsing or business logic.

use crate::constants::{API_BASE_URL, CONNECT_TIMEOUT_SECS, NOTION_VERSION};
use crate::error::AppError;
use crate::types::{ApiKey, BlockId, DatabaseId};
use reqwest::{header, Client, Response};
use serde::Serialize;
use std::time::Duration;

/// Connection settings for the Notion API client.
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub user_agent: String,
    pub read_timeout: Duration,
    pub page_sleep: Duration,
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            user_agent: crate::constants::DEFAULT_USER_AGENT.to_string(),
            read_timeout: Duration::from_secs(crate::constants::DEFAULT_HTTP_TIMEOUT_SECS),
            page_sleep: Duration::from_millis(crate::constants::DEFAULT_PAGE_SLEEP_MS),
        }
    }
}

/// A thin wrapper around reqwest Client for Notion API requests.
#[derive(Clone)]
pub struct NotionHttpClient {
    client: Client,
    page_sleep: Duration,
}

impl NotionHttpClient {
    /// Creates a new HTTP client with Notion API authentication.
    pub fn new(api_key: &ApiKey, settings: &HttpSettings) -> Result<Self, AppError> {
        let client = Client::builder()
            .default_headers(Self::create_headers(api_key)?)
            .user_agent(settings.user_agent.clone())
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(settings.read_timeout)
            .build()?;
        Ok(Self {
            client,
            page_sleep: settings.page_sleep,
        })
    }

    /// Creates the default headers for Notion API requests.
    fn create_headers(api_key: &ApiKey) -> Result<header::HeaderMap, AppError> {
        let mut headers = header::HeaderMap::new();

        let auth_header = format!("Bearer {}", api_key.as_str());
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&auth_header).map_err(|e| {
                AppError::MissingConfiguration(format!("Invalid API token format: {}", e))
            })?,
        );

        headers.insert(
            "Notion-Version",
            header::HeaderValue::from_static(NOTION_VERSION),
        );

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        Ok(headers)
    }

    /// Makes a GET request to the specified endpoint path.
    pub async fn get(&self, endpoint: &str) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("GET {}", url);
        Ok(self.client.get(url).send().await?)
    }

    /// Makes a POST request with JSON body to the specified endpoint path.
    pub async fn post<T: Serialize>(&self, endpoint: &str, body: &T) -> Result<Response, AppError> {
        let url = format!("{}/{}", API_BASE_URL, endpoint);
        log::debug!("POST {}", url);
        Ok(self.client.post(url).json(body).send().await?)
    }
}

#[async_trait::async_trait]
impl super::NotionBackend for NotionHttpClient {
    async fn query_database_pages(
        &self,
        database: &DatabaseId,
    ) -> Result<Vec<super::responses::WirePage>, AppError> {
        let endpoint = format!("databases/{}/query", database.to_hyphenated());
        let client = self.clone();
        super::pagination::fetch_all_pages(
            |page_size, cursor| {
                let client = client.clone();
                let endpoint = endpoint.clone();
                async move {
                    let mut query = serde_json::json!({ "page_size": page_size });
                    if let Some(cursor) = cursor {
                        query["start_cursor"] = serde_json::json!(cursor);
                    }
                    let response = client.post(&endpoint, &query).await?;
                    let result = extract_response_text(response).await?;
                    super::parser::parse_pages_page(result)
                }
            },
            self.page_sleep,
        )
        .await
    }

    async fn retrieve_block_children(
        &self,
        parent: &BlockId,
    ) -> Result<Vec<crate::model::Block>, AppError> {
        let base = format!("blocks/{}/children", parent.to_hyphenated());
        let client = self.clone();
        super::pagination::fetch_all_pages(
            |page_size, cursor| {
                let client = client.clone();
                let base = base.clone();
                async move {
                    let endpoint = match cursor {
                        Some(cursor) => {
                            format!("{}?page_size={}&start_cursor={}", base, page_size, cursor)
                        }
                        None => format!("{}?page_size={}", base, page_size),
                    };
                    let response = client.get(&endpoint).await?;
                    let result = extract_response_text(response).await?;
                    super::parser::parse_blocks_page(result)
                }
            },
            self.page_sleep,
        )
        .await
    }
}

/// Result of an HTTP operation with response metadata.
#[derive(Debug)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: reqwest::StatusCode,
    pub url: String,
}

/// Extracts the response body as text with status and URL metadata.
pub async fn extract_response_text(response: Response) -> Result<ApiResponse<String>, AppError> {
    let status = response.status();
    let url = response.url().to_string();
    let text = response.text().await?;

    Ok(ApiResponse {
        data: text,
        status,
        url,
    })
}
