//! Field value types and null-safe comparisons used by the listing filters

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A polymorphic field value read out of a record
///
/// Records expose their columns through [`crate::core::Record::field_value`];
/// a column that is absent or `NULL` in the store comes back as
/// [`FieldValue::Null`], never as an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    List(Vec<String>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer, coercing numeric strings
    ///
    /// `"2019"` and `2019` both yield `Some(2019)`. Floats with a fractional
    /// part do not coerce.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            FieldValue::Float(f) if f.fract() == 0.0 => Some(*f as i64),
            FieldValue::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Get the value as a boolean flag
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the value as a UUID if possible
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            FieldValue::Uuid(u) => Some(*u),
            FieldValue::String(s) => Uuid::parse_str(s).ok(),
            _ => None,
        }
    }

    /// Get the value as a timestamp if possible
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            FieldValue::String(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Truthiness of a stored value
    ///
    /// Null, empty strings, zero and `false` are falsy. Lists are always
    /// truthy, even when empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            FieldValue::Null => false,
            FieldValue::String(s) => !s.is_empty(),
            FieldValue::Integer(i) => *i != 0,
            FieldValue::Float(f) => *f != 0.0 && !f.is_nan(),
            FieldValue::Boolean(b) => *b,
            FieldValue::Uuid(_) | FieldValue::DateTime(_) | FieldValue::List(_) => true,
        }
    }

    /// Case-insensitive substring test
    ///
    /// `needle` must already be lowercased. Null is treated as the empty
    /// string; a list matches when any of its elements matches.
    pub fn contains_folded(&self, needle: &str) -> bool {
        match self {
            FieldValue::Null => needle.is_empty(),
            FieldValue::String(s) => s.to_lowercase().contains(needle),
            FieldValue::List(items) => items.iter().any(|i| i.to_lowercase().contains(needle)),
            FieldValue::Integer(i) => i.to_string().contains(needle),
            FieldValue::Float(f) => f.to_string().contains(needle),
            FieldValue::Boolean(b) => b.to_string().contains(needle),
            FieldValue::Uuid(u) => u.to_string().contains(needle),
            FieldValue::DateTime(dt) => dt.to_rfc3339().to_lowercase().contains(needle),
        }
    }
}

/// Conversion of typed model fields into a [`FieldValue`]
///
/// Implemented for the column types used by the models so the
/// `impl_record!` macro can expose any field by name.
pub trait ToFieldValue {
    fn to_field_value(&self) -> FieldValue;
}

impl ToFieldValue for String {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::String(self.clone())
    }
}

impl ToFieldValue for i32 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(i64::from(*self))
    }
}

impl ToFieldValue for i64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Integer(*self)
    }
}

impl ToFieldValue for f64 {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Float(*self)
    }
}

impl ToFieldValue for bool {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Boolean(*self)
    }
}

impl ToFieldValue for Uuid {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::Uuid(*self)
    }
}

impl ToFieldValue for DateTime<Utc> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::DateTime(*self)
    }
}

impl ToFieldValue for Vec<String> {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::List(self.clone())
    }
}

impl ToFieldValue for serde_json::Value {
    fn to_field_value(&self) -> FieldValue {
        FieldValue::from(self)
    }
}

impl<T: ToFieldValue> ToFieldValue for Option<T> {
    fn to_field_value(&self) -> FieldValue {
        match self {
            Some(v) => v.to_field_value(),
            None => FieldValue::Null,
        }
    }
}

impl From<&serde_json::Value> for FieldValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => n.as_f64().map(FieldValue::Float).unwrap_or(FieldValue::Null),
            },
            Value::String(s) => FieldValue::String(s.clone()),
            Value::Array(items) => FieldValue::List(
                items
                    .iter()
                    .filter_map(|i| i.as_str().map(str::to_string))
                    .collect(),
            ),
            // Nested objects are never filtered on
            Value::Object(_) => FieldValue::Null,
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(i64::from(value))
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_coercion() {
        assert_eq!(FieldValue::Integer(2019).as_integer(), Some(2019));
        assert_eq!(FieldValue::String("2019".to_string()).as_integer(), Some(2019));
        assert_eq!(FieldValue::String(" 2020 ".to_string()).as_integer(), Some(2020));
        assert_eq!(FieldValue::Float(2021.0).as_integer(), Some(2021));
        assert_eq!(FieldValue::Float(20.5).as_integer(), None);
        assert_eq!(FieldValue::String("twenty".to_string()).as_integer(), None);
        assert_eq!(FieldValue::Null.as_integer(), None);
    }

    #[test]
    fn test_truthiness() {
        assert!(!FieldValue::Null.is_truthy());
        assert!(!FieldValue::String(String::new()).is_truthy());
        assert!(!FieldValue::Integer(0).is_truthy());
        assert!(!FieldValue::Boolean(false).is_truthy());
        assert!(!FieldValue::Float(f64::NAN).is_truthy());
        assert!(FieldValue::String("CSE".to_string()).is_truthy());
        assert!(FieldValue::Integer(2019).is_truthy());
        assert!(FieldValue::List(vec![]).is_truthy());
    }

    #[test]
    fn test_contains_folded() {
        let name = FieldValue::String("Arjun Patel".to_string());
        assert!(name.contains_folded("arjun"));
        assert!(name.contains_folded("patel"));
        assert!(!name.contains_folded("sneha"));

        let skills = FieldValue::List(vec!["Rust".to_string(), "Machine Learning".to_string()]);
        assert!(skills.contains_folded("learn"));
        assert!(!skills.contains_folded("java"));
    }

    #[test]
    fn test_null_behaves_as_empty_string() {
        assert!(!FieldValue::Null.contains_folded("x"));
        assert!(FieldValue::Null.contains_folded(""));
    }

    #[test]
    fn test_datetime_from_string() {
        let value = FieldValue::String("2024-05-01T10:00:00Z".to_string());
        let dt = value.as_datetime().expect("rfc3339 should parse");
        assert_eq!(dt.to_rfc3339(), "2024-05-01T10:00:00+00:00");
    }

    #[test]
    fn test_option_conversion() {
        let missing: Option<String> = None;
        assert!(missing.to_field_value().is_null());
        assert_eq!(Some(2020_i32).to_field_value(), FieldValue::Integer(2020));
    }

    #[test]
    fn test_from_json() {
        let value = serde_json::json!(["a", "b", 3]);
        assert_eq!(
            FieldValue::from(&value),
            FieldValue::List(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(FieldValue::from(&serde_json::json!(7)), FieldValue::Integer(7));
        assert!(FieldValue::from(&serde_json::json!({"k": 1})).is_null());
    }
}
