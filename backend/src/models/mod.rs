//! Persisted shapes and request/response payloads.

use serde::Deserialize;

/// Query parameters for paginated listings.
///
/// `page` is 1-based; `skip` is `(page - 1) * limit`. Values are passed
/// through exactly as submitted: a zero or negative `page`/`limit` yields a
/// zero or negative skip and is not corrected here. Known limitation,
/// callers relying on sane offsets must send sane pages.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageQuery {
    #[serde(default = "default_page")]
    pub page: i64,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_page() -> i64 {
    1
}

fn default_limit() -> i64 {
    10
}

impl PageQuery {
    pub fn skip(&self) -> i64 {
        (self.page - 1) * self.limit
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

pub mod assignee;
pub mod custom_field;
pub mod label;
pub mod notification;
pub mod priority;
pub mod project;
pub mod recurring;
pub mod reminder;
pub mod status;
pub mod tag;
pub mod task_metrics;
pub mod user;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_query_defaults_to_first_page_of_ten() {
        let q = PageQuery::default();
        assert_eq!(q.skip(), 0);
        assert_eq!(q.limit, 10);
    }

    #[test]
    fn page_query_computes_skip_from_one_based_page() {
        let q = PageQuery { page: 2, limit: 5 };
        assert_eq!(q.skip(), 5);
        assert_eq!(q.limit, 5);
    }

    #[test]
    fn page_query_passes_out_of_range_values_through() {
        let q = PageQuery { page: 0, limit: 10 };
        assert_eq!(q.skip(), -10);
        let q = PageQuery { page: -1, limit: 3 };
        assert_eq!(q.skip(), -6);
    }

    #[test]
    fn page_query_deserializes_with_defaults() {
        let q: PageQuery = serde_json::from_str("{}").unwrap();
        assert_eq!(q.page, 1);
        assert_eq!(q.limit, 10);

        let q: PageQuery = serde_json::from_str(r#"{"page": 3, "limit": 20}"#).unwrap();
        assert_eq!(q.skip(), 40);
    }
}
