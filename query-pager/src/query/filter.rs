//! Free-text keyword filtering across every field of a record

use crate::record::{FieldValue, Record};

/// Case-insensitive substring matcher over all fields of a record
///
/// Matching is ordinal ignore-case: each character on both sides is mapped
/// to its simple uppercase form and compared without any locale rules.
/// Characters whose uppercase expands to several characters (`ß`) are
/// compared as-is, and compatibility characters such as the Kelvin sign do
/// not match their ASCII look-alikes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatcher {
    needle: String,
}

impl KeywordMatcher {
    /// Build a matcher, `None` when the keyword is absent or empty
    #[must_use]
    pub fn new(keyword: Option<&str>) -> Option<Self> {
        keyword.filter(|k| !k.is_empty()).map(|k| Self {
            needle: fold_case(k),
        })
    }

    /// Whether any non-null field of `record` contains the keyword
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        R::schema().iter().any(|def| match record.field_value(def.name) {
            Some(FieldValue::Null) | None => false,
            Some(value) => self.matches_text(&value.to_string()),
        })
    }

    fn matches_text(&self, haystack: &str) -> bool {
        fold_case(haystack).contains(&self.needle)
    }
}

fn fold_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            let mut upper = c.to_uppercase();
            match (upper.next(), upper.next()) {
                (Some(single), None) => single,
                _ => c,
            }
        })
        .collect()
}

/// Keep the records where at least one field contains `keyword`
///
/// Each record is tested once, so a record matching in several fields still
/// appears a single time, and source order is preserved. An absent or empty
/// keyword returns every record unchanged.
///
/// # Example
///
/// ```rust
/// use query_pager::query::filter_records;
///
/// struct City { name: String, country: String }
/// query_pager::record_schema!(City { name: String, country: String });
///
/// let cities = vec![
///     City { name: "Paris".into(), country: "France".into() },
///     City { name: "Lyon".into(), country: "France".into() },
///     City { name: "Porto".into(), country: "Portugal".into() },
/// ];
///
/// let matched = filter_records(&cities, Some("PAR"));
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].name, "Paris");
///
/// assert_eq!(filter_records(&cities, None).len(), 3);
/// ```
pub fn filter_records<R, I>(records: I, keyword: Option<&str>) -> Vec<R>
where
    R: Record,
    I: IntoIterator<Item = R>,
{
    let Some(matcher) = KeywordMatcher::new(keyword) else {
        return records.into_iter().collect();
    };

    let filtered: Vec<R> = records
        .into_iter()
        .filter(|record| matcher.matches(record))
        .collect();

    tracing::trace!(
        keyword = keyword.unwrap_or_default(),
        matched = filtered.len(),
        "keyword filter applied"
    );

    filtered
}
