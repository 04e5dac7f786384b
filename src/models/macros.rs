//! Macros for reducing boilerplate when defining records
//!
//! Every model exposes its columns by name to the listing filters. Writing
//! that `match` by hand for each model is repetitive, so it is generated.

/// Implement [`crate::core::Record`] for a model struct
///
/// The struct must have an `id: Uuid` field. Every listed field must
/// implement [`crate::core::field::ToFieldValue`] (all `Option<_>`,
/// `String`, integer, `bool`, `Uuid`, `DateTime<Utc>` and `Vec<String>`
/// columns do).
///
/// # Example
/// ```rust,ignore
/// #[derive(Debug, Clone, Serialize, Deserialize)]
/// pub struct Job {
///     pub id: Uuid,
///     pub title: Option<String>,
///     pub is_featured: bool,
/// }
///
/// impl_record!(Job, "jobs", [title, is_featured]);
///
/// assert_eq!(job.field_value("title").as_string(), Some("Backend Engineer"));
/// ```
#[macro_export]
macro_rules! impl_record {
    ($type:ident, $collection:expr, [$($field:ident),* $(,)?]) => {
        impl $crate::core::Record for $type {
            fn collection() -> &'static str {
                $collection
            }

            fn field_names() -> &'static [&'static str] {
                &["id", $(stringify!($field)),*]
            }

            fn id(&self) -> ::uuid::Uuid {
                self.id
            }

            fn field_value(&self, field: &str) -> $crate::core::FieldValue {
                #[allow(unused_imports)]
                use $crate::core::field::ToFieldValue;

                match field {
                    "id" => self.id.to_field_value(),
                    $(stringify!($field) => self.$field.to_field_value(),)*
                    _ => $crate::core::FieldValue::Null,
                }
            }
        }
    };
}
