use crate::api::HttpSettings;
use crate::error::AppError;
use crate::output::parse_custom_frontmatter;
use crate::types::{ApiKey, DatabaseId, ValidationError};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Parsed and validated command-line input.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct CommandLineInput {
    /// Notion database URL or ID (e.g., "https://www.notion.so/...")
    pub database: String,

    /// Directory to write the exported Markdown files into
    #[arg(default_value = ".")]
    pub output_path: String,

    /// User-Agent header sent with every API request
    #[arg(long, default_value = crate::constants::DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Read timeout for API requests, in seconds
    #[arg(long, default_value_t = crate::constants::DEFAULT_HTTP_TIMEOUT_SECS)]
    pub http_timeout: u64,

    /// Extra frontmatter fields as a JSON object (e.g., '{"layout": "post"}')
    #[arg(long)]
    pub frontmatter: Option<String>,

    /// Write every page as index.md instead of a slug of its title
    #[arg(long, default_value_t = false)]
    pub index: bool,

    /// Pause between paginated API requests, in milliseconds
    #[arg(long, default_value_t = crate::constants::DEFAULT_PAGE_SLEEP_MS)]
    pub sleep_ms: u64,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

/// Resolved export configuration, validated and ready to drive a run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub database: DatabaseId,
    pub api_key: ApiKey,
    pub output_dir: PathBuf,
    pub index_mode: bool,
    pub custom_frontmatter: Vec<(String, String)>,
    pub http: HttpSettings,
    pub verbose: bool,
}

impl ExportConfig {
    /// Resolves a complete export configuration from CLI input and environment.
    pub fn resolve(cli: CommandLineInput) -> Result<Self, AppError> {
        let api_key_str = std::env::var("NOTION_API_KEY").map_err(|_| {
            AppError::MissingConfiguration(
                "NOTION_API_KEY environment variable not set".to_string(),
            )
        })?;

        let api_key = ApiKey::new(api_key_str)?;
        let database = DatabaseId::parse(&cli.database)?;
        let output_dir = validate_output_dir(&cli.output_path)?;

        let custom_frontmatter = match &cli.frontmatter {
            Some(raw) => parse_custom_frontmatter(raw)?,
            None => Vec::new(),
        };

        Ok(ExportConfig {
            database,
            api_key,
            output_dir,
            index_mode: cli.index,
            custom_frontmatter,
            http: HttpSettings {
                user_agent: cli.user_agent,
                read_timeout: Duration::from_secs(cli.http_timeout),
                page_sleep: Duration::from_millis(cli.sleep_ms),
            },
            verbose: cli.verbose,
        })
    }
}

/// The output directory must already exist; it is never created.
fn validate_output_dir(path: &str) -> Result<PathBuf, ValidationError> {
    let dir = PathBuf::from(path);
    if !dir.exists() {
        return Err(ValidationError::InvalidOutputPath {
            path: path.to_string(),
            reason: "directory does not exist".to_string(),
        });
    }
    if !dir.is_dir() {
        return Err(ValidationError::InvalidOutputPath {
            path: path.to_string(),
            reason: "not a directory".to_string(),
        });
    }
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_cli() -> CommandLineInput {
        CommandLineInput::parse_from(["export-notion-pages", "550e8400e29b41d4a716446655440000"])
    }

    #[test]
    fn test_cli_defaults() {
        let cli = base_cli();
        assert_eq!(cli.output_path, ".");
        assert_eq!(cli.user_agent, crate::constants::DEFAULT_USER_AGENT);
        assert_eq!(cli.http_timeout, crate::constants::DEFAULT_HTTP_TIMEOUT_SECS);
        assert_eq!(cli.sleep_ms, crate::constants::DEFAULT_PAGE_SLEEP_MS);
        assert!(!cli.index);
        assert!(!cli.verbose);
        assert!(cli.frontmatter.is_none());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = CommandLineInput::parse_from([
            "export-notion-pages",
            "550e8400e29b41d4a716446655440000",
            "/tmp",
            "--index",
            "--sleep-ms",
            "0",
            "--frontmatter",
            r#"{"layout": "post"}"#,
        ]);
        assert_eq!(cli.output_path, "/tmp");
        assert!(cli.index);
        assert_eq!(cli.sleep_ms, 0);
        assert_eq!(cli.frontmatter.as_deref(), Some(r#"{"layout": "post"}"#));
    }

    #[test]
    fn test_validate_output_dir() {
        assert!(validate_output_dir(env!("CARGO_MANIFEST_DIR")).is_ok());
        assert!(validate_output_dir("/definitely/not/a/real/path").is_err());
    }
}
