//! Pure functions for filename generation. No I/O happens here.

use crate::constants::FILENAME_MAX_LENGTH;
use std::path::{Path, PathBuf};

/// Builds the output path for a page.
///
/// In index mode every page writes `index.md` (static-site page bundles);
/// otherwise the filename is a slug of the page title.
pub fn page_output_path(out_dir: &Path, title: &str, index_mode: bool) -> PathBuf {
    if index_mode {
        out_dir.join("index.md")
    } else {
        out_dir.join(format!("{}.md", slug_filename(title)))
    }
}

/// Lowercases the title and joins whitespace-separated words with hyphens,
/// sanitizing anything the filesystem would reject.
pub fn slug_filename(title: &str) -> String {
    let joined = title
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-");
    sanitize_filename(&joined)
}

/// Sanitizes a string to be safe for use as a filename.
pub fn sanitize_filename(name: &str) -> String {
    let mut safe_name = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect::<String>();

    // Trim whitespace and dots
    safe_name = safe_name.trim().trim_matches('.').to_string();

    if safe_name.len() > FILENAME_MAX_LENGTH {
        let mut cut = FILENAME_MAX_LENGTH;
        while !safe_name.is_char_boundary(cut) {
            cut -= 1;
        }
        safe_name.truncate(cut);
    }

    if safe_name.is_empty() {
        safe_name = "unnamed".to_string();
    }

    safe_name
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_slug_filename() {
        assert_eq!(slug_filename("My First Post"), "my-first-post");
        assert_eq!(slug_filename("  Spaced   Out  "), "spaced-out");
        assert_eq!(slug_filename("Q&A: Part 2"), "q&a_-part-2");
    }

    #[test]
    fn test_sanitize_filename() {
        assert_eq!(sanitize_filename("Hello/World"), "Hello_World");
        assert_eq!(sanitize_filename("Test:File*Name"), "Test_File_Name");
        assert_eq!(sanitize_filename("...dots..."), "dots");
        assert_eq!(sanitize_filename(""), "unnamed");
    }

    #[test]
    fn test_long_multibyte_name_truncates_cleanly() {
        let name = "é".repeat(80);
        let sanitized = sanitize_filename(&name);
        assert!(sanitized.len() <= FILENAME_MAX_LENGTH);
        assert!(!sanitized.is_empty());
    }

    #[test]
    fn test_page_output_path_modes() {
        let dir = Path::new("/tmp/site");
        assert_eq!(
            page_output_path(dir, "About Us", false),
            PathBuf::from("/tmp/site/about-us.md")
        );
        assert_eq!(
            page_output_path(dir, "About Us", true),
            PathBuf::from("/tmp/site/index.md")
        );
    }
}
