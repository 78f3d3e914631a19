//! Request types for paginated queries
//!
//! [`PageRequest`] is the validated-at-use input to the pager.
//! [`PageQuery`] is the loose shape a web layer deserializes from query
//! parameters; it becomes a [`PageRequest`] once configured defaults are
//! applied.
//!
//! # Example
//!
//! ```rust
//! use query_pager::{PageRequest, SortDirection};
//!
//! let request = PageRequest::new(2, 25)
//!     .with_keyword("smith")
//!     .with_sort("created_at", SortDirection::Descending);
//!
//! assert_eq!(request.offset(), 25);
//! assert_eq!(request.keyword(), Some("smith"));
//! assert_eq!(request.sort_field(), Some("created_at"));
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::PagerConfig;
use crate::record::IntoFieldValue;

/// Sort direction
///
/// Parsed leniently: `"asc"` or `"ascending"` in any letter case means
/// ascending, every other token means descending.
///
/// # Example
///
/// ```rust
/// use query_pager::SortDirection;
///
/// assert_eq!(SortDirection::parse("ASC"), SortDirection::Ascending);
/// assert_eq!(SortDirection::parse("Ascending"), SortDirection::Ascending);
/// assert_eq!(SortDirection::parse("desc"), SortDirection::Descending);
/// assert_eq!(SortDirection::parse("upward"), SortDirection::Descending);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "&'static str")]
pub enum SortDirection {
    /// Smallest first (A-Z, 0-9, oldest first)
    Ascending,
    /// Largest first (Z-A, 9-0, newest first)
    #[default]
    Descending,
}

impl SortDirection {
    /// Parse a direction token
    #[must_use]
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if token.eq_ignore_ascii_case("asc") || token.eq_ignore_ascii_case("ascending") {
            Self::Ascending
        } else {
            Self::Descending
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    #[must_use]
    pub const fn is_ascending(&self) -> bool {
        matches!(self, Self::Ascending)
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for SortDirection {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for SortDirection {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl From<SortDirection> for &'static str {
    fn from(direction: SortDirection) -> Self {
        direction.as_str()
    }
}

/// Parameters for a single pagination call
///
/// `current_page` is 1-indexed. An absent or empty `keyword` disables
/// filtering, an absent or empty `sort_field` keeps source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    /// Page number, starting at 1
    pub current_page: u32,

    /// Maximum number of items per page
    pub page_size: u32,

    /// Free-text search keyword
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    /// Name of the field to sort by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_field: Option<String>,

    /// Direction applied when `sort_field` is set
    #[serde(default)]
    pub sort_direction: SortDirection,
}

impl PageRequest {
    /// Create a request for a page with no search and no sort
    #[must_use]
    pub fn new(current_page: u32, page_size: u32) -> Self {
        Self {
            current_page,
            page_size,
            keyword: None,
            sort_field: None,
            sort_direction: SortDirection::default(),
        }
    }

    /// Set the search keyword
    #[must_use]
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keyword = Some(keyword.into());
        self
    }

    /// Search for a non-text value
    ///
    /// The value is rendered with the same text form used for record fields,
    /// so searching for `42_i64` matches a field holding `1425`.
    ///
    /// ```rust
    /// use query_pager::PageRequest;
    ///
    /// let request = PageRequest::new(1, 10).with_keyword_value(42_i64);
    /// assert_eq!(request.keyword(), Some("42"));
    /// ```
    #[must_use]
    pub fn with_keyword_value<V: IntoFieldValue>(mut self, value: V) -> Self {
        let rendered = value.to_field_value().to_string();
        self.keyword = Some(rendered);
        self
    }

    /// Set the sort field and direction
    #[must_use]
    pub fn with_sort(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort_field = Some(field.into());
        self.sort_direction = direction;
        self
    }

    /// Effective keyword; `None` when absent or empty
    #[must_use]
    pub fn keyword(&self) -> Option<&str> {
        self.keyword.as_deref().filter(|k| !k.is_empty())
    }

    /// Effective sort field; `None` when absent or empty
    #[must_use]
    pub fn sort_field(&self) -> Option<&str> {
        self.sort_field.as_deref().filter(|f| !f.is_empty())
    }

    /// Number of filtered items before this page
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.current_page.saturating_sub(1)) * u64::from(self.page_size)
    }
}

/// Raw pagination parameters as received from a client
///
/// Every field is optional; [`PageQuery::into_request`] fills gaps from
/// [`PagerConfig`]. Explicit values, including zero, are kept as given so the
/// pager can reject them.
///
/// # Example
///
/// ```rust
/// use query_pager::{PageQuery, PagerConfig, SortDirection};
///
/// let query: PageQuery =
///     serde_json::from_str(r#"{"page": 3, "sort": "price", "order": "ASC"}"#).unwrap();
/// let request = query.into_request(&PagerConfig::default());
///
/// assert_eq!(request.current_page, 3);
/// assert_eq!(request.page_size, 20);
/// assert_eq!(request.sort_direction, SortDirection::Ascending);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    /// Page number (1-indexed). None defaults to 1.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    /// Items per page. None defaults to the configured page size.
    #[serde(default, alias = "per_page", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,

    /// Search keyword
    #[serde(default, alias = "search", skip_serializing_if = "Option::is_none")]
    pub keyword: Option<String>,

    /// Field name to sort by
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,

    /// Sort direction token (asc or desc)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<String>,
}

impl PageQuery {
    /// Resolve into a [`PageRequest`] using configured defaults
    #[must_use]
    pub fn into_request(self, config: &PagerConfig) -> PageRequest {
        let sort_direction = self
            .order
            .as_deref()
            .map_or(config.default_sort_direction, SortDirection::parse);

        PageRequest {
            current_page: self.page.unwrap_or(1),
            page_size: self.page_size.unwrap_or(config.default_page_size),
            keyword: self.keyword,
            sort_field: self.sort,
            sort_direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_direction_parse() {
        assert_eq!(SortDirection::parse("asc"), SortDirection::Ascending);
        assert_eq!(SortDirection::parse("AsC"), SortDirection::Ascending);
        assert_eq!(SortDirection::parse("ASCENDING"), SortDirection::Ascending);
        assert_eq!(SortDirection::parse(" asc "), SortDirection::Ascending);
        assert_eq!(SortDirection::parse("desc"), SortDirection::Descending);
        assert_eq!(SortDirection::parse(""), SortDirection::Descending);
        assert_eq!(SortDirection::parse("ascend"), SortDirection::Descending);
    }

    #[test]
    fn test_sort_direction_default_is_descending() {
        assert_eq!(SortDirection::default(), SortDirection::Descending);
    }

    #[test]
    fn test_sort_direction_display() {
        assert_eq!(format!("{}", SortDirection::Ascending), "asc");
        assert_eq!(format!("{}", SortDirection::Descending), "desc");
        assert_eq!("Asc".parse::<SortDirection>(), Ok(SortDirection::Ascending));
    }

    #[test]
    fn test_sort_direction_serde() {
        let json = serde_json::to_string(&SortDirection::Ascending).unwrap();
        assert_eq!(json, "\"asc\"");
        let parsed: SortDirection = serde_json::from_str("\"whatever\"").unwrap();
        assert_eq!(parsed, SortDirection::Descending);
    }

    #[test]
    fn test_empty_keyword_and_sort_are_absent() {
        let request = PageRequest::new(1, 10).with_keyword("").with_sort("", SortDirection::Ascending);
        assert_eq!(request.keyword(), None);
        assert_eq!(request.sort_field(), None);
    }

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
        assert_eq!(
            PageRequest::new(u32::MAX, u32::MAX).offset(),
            u64::from(u32::MAX - 1) * u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_keyword_value_is_stringified() {
        let request = PageRequest::new(1, 10).with_keyword_value(true);
        assert_eq!(request.keyword(), Some("true"));
    }

    #[test]
    fn test_page_request_serde_camel_case() {
        let request: PageRequest = serde_json::from_str(
            r#"{"currentPage": 2, "pageSize": 5, "sortField": "name", "sortDirection": "asc"}"#,
        )
        .unwrap();
        assert_eq!(request.current_page, 2);
        assert_eq!(request.page_size, 5);
        assert_eq!(request.keyword, None);
        assert_eq!(request.sort_field(), Some("name"));
        assert_eq!(request.sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_page_query_defaults() {
        let request = PageQuery::default().into_request(&PagerConfig::default());
        assert_eq!(request.current_page, 1);
        assert_eq!(request.page_size, 20);
        assert_eq!(request.keyword, None);
        assert_eq!(request.sort_field, None);
        assert_eq!(request.sort_direction, SortDirection::Descending);
    }

    #[test]
    fn test_page_query_keeps_explicit_zero() {
        let query = PageQuery {
            page: Some(0),
            page_size: Some(0),
            ..PageQuery::default()
        };
        let request = query.into_request(&PagerConfig::default());
        assert_eq!(request.current_page, 0);
        assert_eq!(request.page_size, 0);
    }

    #[test]
    fn test_page_query_uses_configured_direction() {
        let config = PagerConfig {
            default_sort_direction: SortDirection::Ascending,
            ..PagerConfig::default()
        };
        let query = PageQuery {
            sort: Some("name".to_string()),
            ..PageQuery::default()
        };
        assert_eq!(query.into_request(&config).sort_direction, SortDirection::Ascending);
    }

    #[test]
    fn test_page_query_aliases() {
        let query: PageQuery =
            serde_json::from_str(r#"{"per_page": 50, "search": "alice"}"#).unwrap();
        assert_eq!(query.page_size, Some(50));
        assert_eq!(query.keyword, Some("alice".to_string()));
    }
}
