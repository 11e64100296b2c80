//! Account records and label handling

use chrono::{DateTime, Utc};

/// Separator used when labels are flattened into a single column.
///
/// Labels containing the separator are not escaped, so they split apart
/// again on load.
pub const LABEL_SEPARATOR: char = ',';

/// A tracked account.
///
/// `id`, `created_at` and `updated_at` are assigned by the store and stay
/// `None` until the record has been saved.
#[derive(Debug, Clone, PartialEq)]
pub struct AccountRecord {
    pub id: Option<i64>,
    pub address: String,
    pub private_key: String,
    pub alias: String,
    pub chain: String,
    pub labels: Vec<String>,
    pub memo: String,
    pub total_value: f64,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl AccountRecord {
    /// Build an unsaved record around a freshly generated key pair.
    pub fn new(address: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            id: None,
            address: address.into(),
            private_key: private_key.into(),
            alias: String::new(),
            chain: String::new(),
            labels: Vec::new(),
            memo: String::new(),
            total_value: 0.0,
            created_at: None,
            updated_at: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }

    pub fn joined_labels(&self) -> String {
        join_labels(&self.labels)
    }
}

/// Turn raw label input into an ordered label list.
///
/// Whitespace around the whole input and around each piece is trimmed.
/// Blank input yields no labels. Empty pieces between two separators are
/// kept; the empty piece left by a leading or trailing separator is not.
/// Duplicates are kept.
pub fn parse_labels(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }

    let mut labels: Vec<String> = trimmed
        .split(LABEL_SEPARATOR)
        .map(|piece| piece.trim().to_string())
        .collect();

    if labels.len() > 1 && labels.last().is_some_and(String::is_empty) {
        labels.pop();
    }
    if labels.len() > 1 && labels.first().is_some_and(String::is_empty) {
        labels.remove(0);
    }
    // a lone separator leaves a single empty piece
    if labels.len() == 1 && labels[0].is_empty() {
        labels.clear();
    }
    labels
}

pub fn join_labels(labels: &[String]) -> String {
    labels.join(&LABEL_SEPARATOR.to_string())
}

/// Inverse of [`join_labels`] for values read back from storage.
pub fn split_stored_labels(stored: &str) -> Vec<String> {
    if stored.is_empty() {
        return Vec::new();
    }
    stored.split(LABEL_SEPARATOR).map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_parse_blank_labels() {
        assert!(parse_labels("").is_empty());
        assert!(parse_labels("   ").is_empty());
    }

    #[test]
    fn test_parse_trims_each_piece() {
        assert_eq!(parse_labels("  a, b ,c"), labels(&["a", "b", "c"]));
    }

    #[test]
    fn test_parse_keeps_inner_empty_piece() {
        assert_eq!(parse_labels("a,,b"), labels(&["a", "", "b"]));
        assert_eq!(parse_labels("a, ,b"), labels(&["a", "", "b"]));
    }

    #[test]
    fn test_parse_drops_edge_separators() {
        assert_eq!(parse_labels("a,b,"), labels(&["a", "b"]));
        assert_eq!(parse_labels(",a"), labels(&["a"]));
        assert_eq!(parse_labels(" , a , "), labels(&["a"]));
        assert!(parse_labels(",").is_empty());
    }

    #[test]
    fn test_parse_keeps_duplicates() {
        assert_eq!(parse_labels("hot,hot"), labels(&["hot", "hot"]));
    }

    #[test]
    fn test_join_is_unescaped() {
        let record = AccountRecord {
            labels: labels(&["a", "b,c"]),
            ..AccountRecord::new("0x1", "ff")
        };
        assert_eq!(record.joined_labels(), "a,b,c");
        assert_eq!(split_stored_labels(&record.joined_labels()), labels(&["a", "b", "c"]));
    }

    #[test]
    fn test_split_empty_column() {
        assert!(split_stored_labels("").is_empty());
    }
}
