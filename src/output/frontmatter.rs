//! Frontmatter assembly for exported pages.

use crate::error::AppError;
use crate::model::PageRecord;
use chrono::{DateTime, SecondsFormat, Utc};

/// An ordered set of frontmatter fields.
///
/// Insertion order is preserved so the generated files diff cleanly
/// between export runs.
#[derive(Debug, Clone, Default)]
pub struct Frontmatter {
    fields: Vec<(String, String)>,
}

impl Frontmatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any existing value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(existing) = self.fields.iter_mut().find(|(k, _)| *k == key) {
            existing.1 = value;
        } else {
            self.fields.push((key, value));
        }
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Builds the frontmatter for one page: the standard metadata fields
/// followed by any user-supplied custom fields.
pub fn page_frontmatter(
    record: &PageRecord,
    last_modified_time: DateTime<Utc>,
    custom: &[(String, String)],
) -> Frontmatter {
    let mut fm = Frontmatter::new();
    fm.insert("title", record.title.clone());
    fm.insert("notion_id", record.id.as_str());
    fm.insert(
        "last_modified_time",
        last_modified_time.to_rfc3339_opts(SecondsFormat::Millis, true),
    );
    for (key, value) in custom {
        fm.insert(key.clone(), value.clone());
    }
    fm
}

/// Parses the `--frontmatter` CLI argument: a JSON object whose values
/// become additional frontmatter fields.
pub fn parse_custom_frontmatter(raw: &str) -> Result<Vec<(String, String)>, AppError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let value: serde_json::Value = serde_json::from_str(raw).map_err(|e| {
        AppError::Validation(crate::types::ValidationError::InvalidFrontmatter(format!(
            "not valid JSON: {}",
            e
        )))
    })?;

    let serde_json::Value::Object(map) = value else {
        return Err(AppError::Validation(
            crate::types::ValidationError::InvalidFrontmatter(
                "expected a JSON object of key/value pairs".to_string(),
            ),
        ));
    };

    Ok(map
        .into_iter()
        .map(|(key, value)| {
            let rendered = match value {
                serde_json::Value::String(s) => s,
                other => other.to_string(),
            };
            (key, rendered)
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PageId;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn record() -> PageRecord {
        PageRecord {
            id: PageId::parse("550e8400e29b41d4a716446655440000").unwrap(),
            title: "Post".to_string(),
            last_edited_time: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_page_frontmatter_field_order() {
        let rec = record();
        let fm = page_frontmatter(&rec, rec.last_edited_time, &[]);
        let keys: Vec<_> = fm.fields().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["title", "notion_id", "last_modified_time"]);
        assert_eq!(
            fm.get("last_modified_time"),
            Some("2024-03-01T12:00:00.000Z")
        );
    }

    #[test]
    fn test_custom_fields_appended() {
        let rec = record();
        let custom = vec![("layout".to_string(), "post".to_string())];
        let fm = page_frontmatter(&rec, rec.last_edited_time, &custom);
        assert_eq!(fm.get("layout"), Some("post"));
    }

    #[test]
    fn test_custom_field_can_override() {
        let rec = record();
        let custom = vec![("title".to_string(), "Overridden".to_string())];
        let fm = page_frontmatter(&rec, rec.last_edited_time, &custom);
        assert_eq!(fm.get("title"), Some("Overridden"));
        assert_eq!(fm.fields().filter(|(k, _)| *k == "title").count(), 1);
    }

    #[test]
    fn test_parse_custom_frontmatter() {
        let fields = parse_custom_frontmatter(r#"{"layout": "post", "weight": 3}"#).unwrap();
        assert!(fields.contains(&("layout".to_string(), "post".to_string())));
        assert!(fields.contains(&("weight".to_string(), "3".to_string())));

        assert!(parse_custom_frontmatter("").unwrap().is_empty());
        assert!(parse_custom_frontmatter("[1,2]").is_err());
        assert!(parse_custom_frontmatter("{broken").is_err());
    }
}
