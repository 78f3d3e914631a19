//! Field introspection for paginated records
//!
//! A [`Record`] exposes a static schema (field names and declared types) and
//! lets callers read any field's current value by name at runtime. This is
//! what allows the pager to search every field without the caller listing
//! them, and to sort by a field whose name only arrives with the request.
//!
//! Most types implement [`Record`] through the [`record_schema!`] macro, which
//! generates the accessor table at compile time:
//!
//! ```rust
//! use query_pager::record::{FieldType, FieldValue, Record};
//!
//! struct Book {
//!     title: String,
//!     pages: u32,
//!     subtitle: Option<String>,
//! }
//!
//! query_pager::record_schema!(Book {
//!     title: String,
//!     pages: u32,
//!     subtitle: Option<String>,
//! });
//!
//! let book = Book { title: "Dune".into(), pages: 412, subtitle: None };
//!
//! assert_eq!(Book::schema().len(), 3);
//! assert_eq!(Book::schema()[1].field_type, FieldType::Uint);
//! assert_eq!(book.field_value("pages"), Some(FieldValue::Uint(412)));
//! assert_eq!(book.field_value("subtitle"), Some(FieldValue::Null));
//! assert_eq!(book.field_value("Pages"), None);
//! ```

mod value;

use std::sync::Arc;

use crate::error::{Error, Result};

pub use value::{natural_cmp, FieldType, FieldValue, IntoFieldValue};

/// A named, readable field in a record schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldDef {
    /// Field name, matched case-sensitively
    pub name: &'static str,
    /// Declared type of the field
    pub field_type: FieldType,
}

impl FieldDef {
    #[must_use]
    pub const fn new(name: &'static str, field_type: FieldType) -> Self {
        Self { name, field_type }
    }
}

/// Runtime field access for an element type being paginated
///
/// `field_value` must return `Some` for every name listed in `schema` and
/// `None` for any other name.
pub trait Record {
    /// Readable fields in declaration order
    fn schema() -> &'static [FieldDef];

    /// Current value of the named field
    fn field_value(&self, name: &str) -> Option<FieldValue>;
}

impl<R: Record> Record for &R {
    fn schema() -> &'static [FieldDef] {
        R::schema()
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        (**self).field_value(name)
    }
}

impl<R: Record> Record for Box<R> {
    fn schema() -> &'static [FieldDef] {
        R::schema()
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        (**self).field_value(name)
    }
}

impl<R: Record> Record for Arc<R> {
    fn schema() -> &'static [FieldDef] {
        R::schema()
    }

    fn field_value(&self, name: &str) -> Option<FieldValue> {
        (**self).field_value(name)
    }
}

/// Look up a field definition by name
///
/// # Errors
///
/// Returns [`Error::FieldNotFound`] when `R` declares no field called `name`.
///
/// # Example
///
/// ```rust
/// use query_pager::{record::resolve_field, Error};
///
/// struct Point { x: i32, y: i32 }
/// query_pager::record_schema!(Point { x: i32, y: i32 });
///
/// assert!(resolve_field::<Point>("x").is_ok());
/// assert!(matches!(
///     resolve_field::<Point>("X"),
///     Err(Error::FieldNotFound { .. })
/// ));
/// ```
pub fn resolve_field<R: Record>(name: &str) -> Result<&'static FieldDef> {
    R::schema()
        .iter()
        .find(|def| def.name == name)
        .ok_or_else(|| Error::field_not_found(name))
}

/// Names of all readable fields of `R`, in declaration order
pub fn field_names<R: Record>() -> impl Iterator<Item = &'static str> {
    R::schema().iter().map(|def| def.name)
}

/// Implement [`Record`] for a struct from a list of its fields and types
///
/// Each listed field must implement [`IntoFieldValue`]. Fields left out of
/// the list are invisible to search and sorting.
#[macro_export]
macro_rules! record_schema {
    ($record:ident { $($field:ident : $ty:ty),+ $(,)? }) => {
        impl $crate::record::Record for $record {
            fn schema() -> &'static [$crate::record::FieldDef] {
                const FIELDS: &[$crate::record::FieldDef] = &[
                    $(
                        $crate::record::FieldDef::new(
                            stringify!($field),
                            <$ty as $crate::record::IntoFieldValue>::FIELD_TYPE,
                        ),
                    )+
                ];
                FIELDS
            }

            fn field_value(&self, name: &str) -> Option<$crate::record::FieldValue> {
                match name {
                    $(
                        stringify!($field) => Some(
                            <$ty as $crate::record::IntoFieldValue>::to_field_value(&self.$field),
                        ),
                    )+
                    _ => None,
                }
            }
        }
    };
}
