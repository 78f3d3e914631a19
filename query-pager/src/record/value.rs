//! Runtime field values and their declared types
//!
//! [`FieldValue`] is what a record hands back when a field is read by name.
//! It carries enough type information to pick the field's native ordering
//! during sorting, and renders to text through [`fmt::Display`] for keyword
//! matching.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Declared type of a record field
///
/// # Example
///
/// ```rust
/// use query_pager::record::FieldType;
///
/// assert!(FieldType::Int.is_orderable());
/// assert!(!FieldType::List.is_orderable());
/// assert_eq!(format!("{}", FieldType::DateTime), "datetime");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// UTF-8 text
    Text,
    /// Signed integer
    Int,
    /// Unsigned integer
    Uint,
    /// Floating point number
    Float,
    /// Boolean flag
    Bool,
    /// Calendar date without time
    Date,
    /// Point in time (UTC)
    DateTime,
    /// UUID
    Uuid,
    /// Ordered collection of values
    List,
    /// Arbitrary JSON document
    Json,
}

impl FieldType {
    /// Whether values of this type have a natural ordering usable for sorting
    #[must_use]
    pub const fn is_orderable(&self) -> bool {
        !matches!(self, Self::List | Self::Json)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Int => write!(f, "int"),
            Self::Uint => write!(f, "uint"),
            Self::Float => write!(f, "float"),
            Self::Bool => write!(f, "bool"),
            Self::Date => write!(f, "date"),
            Self::DateTime => write!(f, "datetime"),
            Self::Uuid => write!(f, "uuid"),
            Self::List => write!(f, "list"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Current value of a record field
///
/// `Null` means the field exists on the record but holds no value, as with
/// `Option::None`.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Date(NaiveDate),
    DateTime(DateTime<Utc>),
    Uuid(Uuid),
    List(Vec<FieldValue>),
    Json(serde_json::Value),
    Null,
}

impl FieldValue {
    /// The declared type matching this value, `None` for [`FieldValue::Null`]
    #[must_use]
    pub const fn field_type(&self) -> Option<FieldType> {
        match self {
            Self::Text(_) => Some(FieldType::Text),
            Self::Int(_) => Some(FieldType::Int),
            Self::Uint(_) => Some(FieldType::Uint),
            Self::Float(_) => Some(FieldType::Float),
            Self::Bool(_) => Some(FieldType::Bool),
            Self::Date(_) => Some(FieldType::Date),
            Self::DateTime(_) => Some(FieldType::DateTime),
            Self::Uuid(_) => Some(FieldType::Uuid),
            Self::List(_) => Some(FieldType::List),
            Self::Json(_) => Some(FieldType::Json),
            Self::Null => None,
        }
    }

    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    const fn rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Bool(_) => 1,
            Self::Int(_) => 2,
            Self::Uint(_) => 3,
            Self::Float(_) => 4,
            Self::Date(_) => 5,
            Self::DateTime(_) => 6,
            Self::Text(_) => 7,
            Self::Uuid(_) => 8,
            Self::List(_) => 9,
            Self::Json(_) => 10,
        }
    }
}

/// Natural comparator used for sorting
///
/// Ordering rules:
/// 1. `Null` sorts before every other value
/// 2. Same-variant values use the native ordering of their type
/// 3. Mixed variants fall back to a fixed variant rank so the order stays total
///
/// Floats use IEEE total ordering. Lists and JSON documents have no natural
/// ordering and compare as equal among themselves.
#[must_use]
pub fn natural_cmp(left: &FieldValue, right: &FieldValue) -> Ordering {
    match (left, right) {
        (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
        (FieldValue::Int(a), FieldValue::Int(b)) => a.cmp(b),
        (FieldValue::Uint(a), FieldValue::Uint(b)) => a.cmp(b),
        (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
        (FieldValue::Bool(a), FieldValue::Bool(b)) => a.cmp(b),
        (FieldValue::Date(a), FieldValue::Date(b)) => a.cmp(b),
        (FieldValue::DateTime(a), FieldValue::DateTime(b)) => a.cmp(b),
        (FieldValue::Uuid(a), FieldValue::Uuid(b)) => a.cmp(b),
        _ => left.rank().cmp(&right.rank()),
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
            Self::Uint(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            Self::DateTime(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Self::Uuid(id) => write!(f, "{}", id.hyphenated()),
            Self::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Self::Json(value) => write!(f, "{value}"),
            Self::Null => Ok(()),
        }
    }
}

/// Conversion from a Rust field type into a [`FieldValue`]
///
/// `FIELD_TYPE` is the declared type reported in the record schema.
pub trait IntoFieldValue {
    const FIELD_TYPE: FieldType;

    fn to_field_value(&self) -> FieldValue;
}

macro_rules! impl_into_field_value {
    ($variant:ident => $($ty:ty),+ $(,)?) => {
        $(
            impl IntoFieldValue for $ty {
                const FIELD_TYPE: FieldType = FieldType::$variant;

                fn to_field_value(&self) -> FieldValue {
                    FieldValue::$variant((*self).into())
                }
            }
        )+
    };
}

impl_into_field_value!(Int => i8, i16, i32, i64);
impl_into_field_value!(Uint => u8, u16, u32, u64);
impl_into_field_value!(Float => f64);
impl_into_field_value!(Bool => bool);
impl_into_field_value!(Date => NaiveDate);
impl_into_field_value!(DateTime => DateTime<Utc>);
impl_into_field_value!(Uuid => Uuid);

impl IntoFieldValue for f32 {
    const FIELD_TYPE: FieldType = FieldType::Float;

    // Widened through the shortest decimal text: 0.1_f32 renders as 0.1
    fn to_field_value(&self) -> FieldValue {
        let widened = self.to_string().parse().unwrap_or_else(|_| f64::from(*self));
        FieldValue::Float(widened)
    }
}

impl IntoFieldValue for isize {
    const FIELD_TYPE: FieldType = FieldType::Int;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Int(*self as i64)
    }
}

impl IntoFieldValue for usize {
    const FIELD_TYPE: FieldType = FieldType::Uint;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Uint(*self as u64)
    }
}

impl IntoFieldValue for NaiveDateTime {
    const FIELD_TYPE: FieldType = FieldType::DateTime;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::DateTime(self.and_utc())
    }
}

impl IntoFieldValue for char {
    const FIELD_TYPE: FieldType = FieldType::Text;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.to_string())
    }
}

impl IntoFieldValue for str {
    const FIELD_TYPE: FieldType = FieldType::Text;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.to_string())
    }
}

impl IntoFieldValue for String {
    const FIELD_TYPE: FieldType = FieldType::Text;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Text(self.clone())
    }
}

impl IntoFieldValue for serde_json::Value {
    const FIELD_TYPE: FieldType = FieldType::Json;

    fn to_field_value(&self) -> FieldValue {
        match self {
            serde_json::Value::Null => FieldValue::Null,
            other => FieldValue::Json(other.clone()),
        }
    }
}

impl<T: IntoFieldValue> IntoFieldValue for Option<T> {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;

    fn to_field_value(&self) -> FieldValue {
        self.as_ref()
            .map_or(FieldValue::Null, IntoFieldValue::to_field_value)
    }
}

impl<T: IntoFieldValue> IntoFieldValue for Vec<T> {
    const FIELD_TYPE: FieldType = FieldType::List;

    fn to_field_value(&self) -> FieldValue {
        FieldValue::List(self.iter().map(IntoFieldValue::to_field_value).collect())
    }
}

impl<T: IntoFieldValue + ?Sized> IntoFieldValue for &T {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;

    fn to_field_value(&self) -> FieldValue {
        (**self).to_field_value()
    }
}

impl<T: IntoFieldValue + ?Sized> IntoFieldValue for Box<T> {
    const FIELD_TYPE: FieldType = T::FIELD_TYPE;

    fn to_field_value(&self) -> FieldValue {
        (**self).to_field_value()
    }
}
