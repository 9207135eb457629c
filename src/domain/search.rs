//! Free-text search and status filtering over flat records.
//!
//! Every record kind exposes an allow-list of fields through [`Searchable`].
//! A [`RecordFilter`] lowercases and trims its query, then keeps a record when
//! any of those fields contains the query, AND'd with an exact status match.

use serde::{Deserialize, Serialize};

/// Status filter value that disables status filtering.
pub const ALL_STATUSES: &str = "all";

/// A record that can be found by the dashboard search box.
pub trait Searchable {
    /// Stringified fields the text query is matched against.
    fn search_fields(&self) -> Vec<String>;

    /// Value compared against the status filter. Records without one never
    /// pass an active status filter.
    fn status_key(&self) -> Option<&str> {
        None
    }
}

/// Returns true if any allow-listed field of `record` contains `query`,
/// ignoring case. An empty (or whitespace) query matches everything.
pub fn matches_query<T: Searchable + ?Sized>(record: &T, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record
        .search_fields()
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecordFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl RecordFilter {
    pub fn query(query: impl Into<String>) -> Self {
        Self { query: query.into(), status: None }
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    fn active_status(&self) -> Option<&str> {
        self.status
            .as_deref()
            .filter(|s| !s.is_empty() && *s != ALL_STATUSES)
    }

    pub fn matches<T: Searchable + ?Sized>(&self, record: &T) -> bool {
        let status_ok = match self.active_status() {
            Some(wanted) => record.status_key() == Some(wanted),
            None => true,
        };
        status_ok && matches_query(record, &self.query)
    }

    pub fn apply<T: Searchable + Clone>(&self, records: &[T]) -> Vec<T> {
        records.iter().filter(|r| self.matches(*r)).cloned().collect()
    }

    /// Consuming variant of [`RecordFilter::apply`].
    pub fn retain<T: Searchable>(&self, mut records: Vec<T>) -> Vec<T> {
        records.retain(|r| self.matches(r));
        records
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        name: &'static str,
        phone: &'static str,
        status: Option<&'static str>,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<String> {
            vec![self.name.to_string(), self.phone.to_string()]
        }

        fn status_key(&self) -> Option<&str> {
            self.status
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Amina Yusuf", phone: "0700 111", status: Some("ready") },
            Row { name: "Brian Otieno", phone: "0711 222", status: Some("confirmed") },
            Row { name: "Cheng Li", phone: "0722 333", status: None },
        ]
    }

    #[test]
    fn test_empty_query_keeps_everything() {
        assert_eq!(RecordFilter::query("").apply(&rows()).len(), 3);
        assert_eq!(RecordFilter::query("   ").apply(&rows()).len(), 3);
    }

    #[test]
    fn test_query_is_case_insensitive_and_trimmed() {
        let found = RecordFilter::query("  BRIAN ").apply(&rows());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Brian Otieno");
    }

    #[test]
    fn test_query_matches_any_allow_listed_field() {
        let found = RecordFilter::query("333").apply(&rows());
        assert_eq!(found, vec![rows()[2].clone()]);
    }

    #[test]
    fn test_absent_substring_drops_record() {
        assert!(RecordFilter::query("zzz").apply(&rows()).is_empty());
    }

    #[test]
    fn test_status_filter_is_exact_and_anded() {
        let filter = RecordFilter::query("").with_status("ready");
        assert_eq!(filter.apply(&rows()).len(), 1);

        let filter = RecordFilter::query("brian").with_status("ready");
        assert!(filter.apply(&rows()).is_empty());

        // Not a case-insensitive match.
        let filter = RecordFilter::query("").with_status("Ready");
        assert!(filter.apply(&rows()).is_empty());
    }

    #[test]
    fn test_all_or_empty_status_disables_status_filter() {
        assert_eq!(RecordFilter::query("").with_status(ALL_STATUSES).apply(&rows()).len(), 3);
        assert_eq!(RecordFilter::query("").with_status("").apply(&rows()).len(), 3);
    }

    #[test]
    fn test_filter_deserializes_with_defaults() {
        let filter: RecordFilter = serde_json::from_str(r#"{"status":"ready"}"#).unwrap();
        assert_eq!(filter, RecordFilter::query("").with_status("ready"));
    }
}
