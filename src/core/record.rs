//! The record abstraction every listable row implements

use crate::core::field::FieldValue;
use chrono::{DateTime, Utc};
use serde::{Serialize, de::DeserializeOwned};
use uuid::Uuid;

/// A row fetched from a remote collection.
///
/// Records are typed structs with optional fields; this trait adds the
/// dynamic, null-safe view the listing filters work against. All records
/// have:
/// - collection: the remote table they live in (e.g. "profiles")
/// - id: opaque identifier, used for list-key stability and updates
/// - field_value: lookup of any column by name, `Null` when absent
///
/// Implementations are usually generated with [`crate::impl_record!`].
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The remote collection name (e.g. "profiles", "events")
    fn collection() -> &'static str;

    /// Names of the fields exposed through `field_value`
    fn field_names() -> &'static [&'static str];

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// Get the value of a field by name
    ///
    /// Unknown field names and missing values both yield `FieldValue::Null`.
    fn field_value(&self, field: &str) -> FieldValue;

    /// Creation timestamp, if the collection tracks one
    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.field_value("created_at").as_datetime()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::ToFieldValue;
    use serde::Deserialize;

    #[derive(Clone, Debug, Serialize, Deserialize)]
    struct TestRecord {
        id: Uuid,
        title: Option<String>,
        created_at: Option<DateTime<Utc>>,
    }

    impl Record for TestRecord {
        fn collection() -> &'static str {
            "tests"
        }

        fn field_names() -> &'static [&'static str] {
            &["id", "title", "created_at"]
        }

        fn id(&self) -> Uuid {
            self.id
        }

        fn field_value(&self, field: &str) -> FieldValue {
            match field {
                "id" => self.id.to_field_value(),
                "title" => self.title.to_field_value(),
                "created_at" => self.created_at.to_field_value(),
                _ => FieldValue::Null,
            }
        }
    }

    #[test]
    fn test_missing_field_is_null() {
        let record = TestRecord {
            id: Uuid::new_v4(),
            title: None,
            created_at: None,
        };

        assert!(record.field_value("title").is_null());
        assert!(record.field_value("does_not_exist").is_null());
        assert!(record.created_at().is_none());
    }

    #[test]
    fn test_created_at_default() {
        let now = Utc::now();
        let record = TestRecord {
            id: Uuid::new_v4(),
            title: Some("Reunion".to_string()),
            created_at: Some(now),
        };

        assert_eq!(record.created_at(), Some(now));
        assert_eq!(TestRecord::collection(), "tests");
    }
}
