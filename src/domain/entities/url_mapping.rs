//! URL mapping entity: one short code pointing at one long URL.

use chrono::{DateTime, Utc};

/// A stored short code to long URL mapping.
///
/// Rows are created once and never updated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlMapping {
    pub id: i64,
    pub long_url: String,
    /// Column name kept as `short_url` in the `urls` table.
    #[sqlx(rename = "short_url")]
    pub short_code: String,
    pub created_at: DateTime<Utc>,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, long_url: String, short_code: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            long_url,
            short_code,
            created_at,
        }
    }
}

/// Input data for inserting a mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub long_url: String,
    pub short_code: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_mapping_creation() {
        let now = Utc::now();
        let mapping = UrlMapping::new(
            1,
            "https://example.com".to_string(),
            "aB3dE6gH".to_string(),
            now,
        );

        assert_eq!(mapping.id, 1);
        assert_eq!(mapping.long_url, "https://example.com");
        assert_eq!(mapping.short_code, "aB3dE6gH");
        assert_eq!(mapping.created_at, now);
    }
}
