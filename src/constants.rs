//! Domain constants that define the operational boundaries of the exporter.
//!
//! Each constant is named for the domain concept it constrains, not its
//! technical role.

// ---------------------------------------------------------------------------
// Notion API boundaries
// ---------------------------------------------------------------------------

/// Base URL for all Notion API endpoints.
pub const API_BASE_URL: &str = "https://api.notion.com/v1";

/// Notion API version header value.
pub const NOTION_VERSION: &str = "2022-06-28";

/// How many objects the Notion API returns per page of results.
///
/// The Notion API maximum is 100. We use the maximum to minimize
/// round-trips while paging through large databases.
pub const NOTION_API_PAGE_SIZE: u32 = 100;

/// Delay between successive paginated requests, in milliseconds.
///
/// Notion rate-limits integrations to roughly three requests per second;
/// pausing between result pages keeps a large export comfortably under
/// that limit without a retry loop.
pub const DEFAULT_PAGE_SLEEP_MS: u64 = 300;

/// Connect timeout for API requests, in seconds.
pub const CONNECT_TIMEOUT_SECS: u64 = 5;

/// Default read timeout for API requests, in seconds (overridable via CLI).
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 5;

/// Default User-Agent header for API requests (overridable via CLI).
pub const DEFAULT_USER_AGENT: &str = "curl/7.64.1";

// ---------------------------------------------------------------------------
// Rendering boundaries
// ---------------------------------------------------------------------------

/// Estimated characters per block, used to pre-allocate output strings.
///
/// This is a performance hint, not a constraint.
pub const CHARS_PER_BLOCK_ESTIMATE: usize = 256;

/// Maximum length of a generated filename stem before truncation.
pub const FILENAME_MAX_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Error display
// ---------------------------------------------------------------------------

/// Maximum characters shown when previewing unparseable response bodies.
pub const ERROR_BODY_PREVIEW_LENGTH: usize = 200;
