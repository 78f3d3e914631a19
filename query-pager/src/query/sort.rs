//! Sorting by a field named at runtime
//!
//! The field name is resolved against the record schema once, then each
//! record's value for that field is read a single time and the records are
//! stably sorted with the value type's natural ordering.

use crate::error::{Error, Result};
use crate::query::SortDirection;
use crate::record::{natural_cmp, resolve_field, FieldDef, FieldValue, Record};

/// A resolved, sortable field plus a direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortKey {
    field: &'static FieldDef,
    direction: SortDirection,
}

impl SortKey {
    /// Resolve `field` on `R` and check that it can be ordered
    ///
    /// # Errors
    ///
    /// [`Error::FieldNotFound`] for an unknown name, [`Error::UnsortableField`]
    /// when the field's declared type has no natural ordering.
    pub fn resolve<R: Record>(field: &str, direction: SortDirection) -> Result<Self> {
        let def = resolve_field::<R>(field)?;
        if !def.field_type.is_orderable() {
            return Err(Error::unsortable(def.name, def.field_type));
        }
        Ok(Self {
            field: def,
            direction,
        })
    }

    #[must_use]
    pub fn field(&self) -> &'static FieldDef {
        self.field
    }

    #[must_use]
    pub fn direction(&self) -> SortDirection {
        self.direction
    }

    /// Stable sort of `records` by this key
    ///
    /// Records with equal values keep their input order in both directions.
    pub fn apply<R: Record>(&self, records: Vec<R>) -> Vec<R> {
        let name = self.field.name;
        let mut keyed: Vec<(FieldValue, R)> = records
            .into_iter()
            .map(|record| {
                let value = record.field_value(name).unwrap_or(FieldValue::Null);
                (value, record)
            })
            .collect();

        // slice::sort_by is stable
        match self.direction {
            SortDirection::Ascending => keyed.sort_by(|(a, _), (b, _)| natural_cmp(a, b)),
            SortDirection::Descending => keyed.sort_by(|(a, _), (b, _)| natural_cmp(b, a)),
        }

        tracing::trace!(
            field = name,
            direction = %self.direction,
            count = keyed.len(),
            "records sorted"
        );

        keyed.into_iter().map(|(_, record)| record).collect()
    }
}

/// Sort `records` by the field called `field`
///
/// # Errors
///
/// See [`SortKey::resolve`].
///
/// # Example
///
/// ```rust
/// use query_pager::{query::sort_records, SortDirection};
///
/// struct Item { qty: u32 }
/// query_pager::record_schema!(Item { qty: u32 });
///
/// let items = vec![Item { qty: 10 }, Item { qty: 2 }, Item { qty: 33 }];
/// let sorted = sort_records(items, "qty", SortDirection::Ascending).unwrap();
/// let qtys: Vec<u32> = sorted.iter().map(|i| i.qty).collect();
/// assert_eq!(qtys, vec![2, 10, 33]);
/// ```
pub fn sort_records<R: Record>(
    records: Vec<R>,
    field: &str,
    direction: SortDirection,
) -> Result<Vec<R>> {
    let key = SortKey::resolve::<R>(field, direction)?;
    Ok(key.apply(records))
}

/// Like [`sort_records`], but an absent or empty field name returns the
/// records in their original order
///
/// # Errors
///
/// See [`SortKey::resolve`].
pub fn sort_records_by<R: Record>(
    records: Vec<R>,
    field: Option<&str>,
    direction: SortDirection,
) -> Result<Vec<R>> {
    match field.filter(|f| !f.is_empty()) {
        Some(field) => sort_records(records, field, direction),
        None => Ok(records),
    }
}

#[cfg(test)]
mod tests {
    use chrono::{DateTime, Utc};

    use super::*;
    use crate::record::FieldType;

    #[derive(Debug, Clone, PartialEq)]
    struct Order {
        id: u32,
        customer: String,
        total: i64,
        discount: Option<f64>,
        placed_at: DateTime<Utc>,
        lines: Vec<String>,
        extra: serde_json::Value,
    }

    crate::record_schema!(Order {
        id: u32,
        customer: String,
        total: i64,
        discount: Option<f64>,
        placed_at: DateTime<Utc>,
        lines: Vec<String>,
        extra: serde_json::Value,
    });

    fn order(id: u32, customer: &str, total: i64, discount: Option<f64>, ts: i64) -> Order {
        Order {
            id,
            customer: customer.to_string(),
            total,
            discount,
            placed_at: DateTime::from_timestamp(ts, 0).unwrap(),
            lines: Vec::new(),
            extra: serde_json::Value::Null,
        }
    }

    fn ids<R: std::borrow::Borrow<Order>>(orders: &[R]) -> Vec<u32> {
        orders.iter().map(|o| o.borrow().id).collect()
    }

    #[test]
    fn test_numeric_sort_is_not_lexicographic() {
        let orders = vec![
            order(1, "a", 10, None, 0),
            order(2, "b", 2, None, 0),
            order(3, "c", 33, None, 0),
        ];
        let sorted = sort_records(orders, "total", SortDirection::Ascending).unwrap();
        let totals: Vec<i64> = sorted.iter().map(|o| o.total).collect();
        assert_eq!(totals, vec![2, 10, 33]);
    }

    #[test]
    fn test_descending() {
        let orders = vec![
            order(1, "a", 10, None, 0),
            order(2, "b", 2, None, 0),
            order(3, "c", 33, None, 0),
        ];
        let sorted = sort_records(orders, "total", SortDirection::Descending).unwrap();
        assert_eq!(ids(&sorted), vec![3, 1, 2]);
    }

    #[test]
    fn test_stable_for_equal_keys() {
        let orders = vec![
            order(1, "zed", 5, None, 0),
            order(2, "amy", 5, None, 0),
            order(3, "kim", 1, None, 0),
            order(4, "bob", 5, None, 0),
        ];
        let asc = sort_records(orders.clone(), "total", SortDirection::Ascending).unwrap();
        assert_eq!(ids(&asc), vec![3, 1, 2, 4]);

        let desc = sort_records(orders, "total", SortDirection::Descending).unwrap();
        assert_eq!(ids(&desc), vec![1, 2, 4, 3]);
    }

    #[test]
    fn test_text_uses_default_string_ordering() {
        let orders = vec![
            order(1, "bravo", 0, None, 0),
            order(2, "Alpha", 0, None, 0),
            order(3, "alpha", 0, None, 0),
        ];
        let sorted = sort_records(orders, "customer", SortDirection::Ascending).unwrap();
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_datetime_sorts_chronologically() {
        let orders = vec![
            order(1, "a", 0, None, 1_700_000_000),
            order(2, "b", 0, None, 86_400),
            order(3, "c", 0, None, 999_999_999),
        ];
        let sorted = sort_records(orders, "placed_at", SortDirection::Ascending).unwrap();
        assert_eq!(ids(&sorted), vec![2, 3, 1]);
    }

    #[test]
    fn test_nulls_first_ascending_last_descending() {
        let orders = vec![
            order(1, "a", 0, Some(0.25), 0),
            order(2, "b", 0, None, 0),
            order(3, "c", 0, Some(0.1), 0),
        ];
        let asc = sort_records(orders.clone(), "discount", SortDirection::Ascending).unwrap();
        assert_eq!(ids(&asc), vec![2, 3, 1]);

        let desc = sort_records(orders, "discount", SortDirection::Descending).unwrap();
        assert_eq!(ids(&desc), vec![1, 3, 2]);
    }

    #[test]
    fn test_unknown_field() {
        let orders = vec![order(1, "a", 0, None, 0)];
        match sort_records(orders, "Total", SortDirection::Ascending) {
            Err(Error::FieldNotFound { field }) => assert_eq!(field, "Total"),
            other => panic!("expected FieldNotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_unsortable_fields() {
        let orders = vec![order(1, "a", 0, None, 0)];
        match sort_records(orders.clone(), "lines", SortDirection::Ascending) {
            Err(Error::UnsortableField { field, field_type }) => {
                assert_eq!(field, "lines");
                assert_eq!(field_type, FieldType::List);
            }
            other => panic!("expected UnsortableField, got {other:?}"),
        }
        assert!(matches!(
            sort_records(orders, "extra", SortDirection::Descending),
            Err(Error::UnsortableField { .. })
        ));
    }

    #[test]
    fn test_unknown_field_fails_even_when_empty() {
        let empty: Vec<Order> = Vec::new();
        assert!(sort_records(empty, "nope", SortDirection::Ascending).is_err());
    }

    #[test]
    fn test_absent_field_is_identity() {
        let orders = vec![
            order(3, "c", 3, None, 0),
            order(1, "a", 1, None, 0),
            order(2, "b", 2, None, 0),
        ];
        let same = sort_records_by(orders.clone(), None, SortDirection::Ascending).unwrap();
        assert_eq!(same, orders);
        let same = sort_records_by(orders.clone(), Some(""), SortDirection::Ascending).unwrap();
        assert_eq!(same, orders);
    }

    #[test]
    fn test_sorting_borrowed_records() {
        let orders = vec![order(1, "a", 9, None, 0), order(2, "b", 4, None, 0)];
        let refs: Vec<&Order> = orders.iter().collect();
        let sorted = sort_records(refs, "total", SortDirection::Ascending).unwrap();
        assert_eq!(ids(&sorted), vec![2, 1]);
        // source untouched
        assert_eq!(ids(&orders), vec![1, 2]);
    }

    #[test]
    fn test_sort_key_accessors() {
        let key = SortKey::resolve::<Order>("id", SortDirection::Ascending).unwrap();
        assert_eq!(key.field().name, "id");
        assert_eq!(key.field().field_type, FieldType::Uint);
        assert!(key.direction().is_ascending());
    }
}
