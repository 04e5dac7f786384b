//! The remote store collaborator
//!
//! The portal owns no persistence. Everything goes through a hosted store
//! exposing a handful of table operations: fetch rows (optionally filtered
//! by equality, ordered and capped), fetch one row by id, insert a row and
//! patch a row by id. Any backend able to answer those can drive the
//! portal: the hosted REST store, an in-memory map, or a static JSON file.

use crate::core::error::StoreError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Ordering applied by the store before returning rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub field: String,
    pub ascending: bool,
}

/// A read against one collection
///
/// # Example
/// ```rust,ignore
/// let request = FetchRequest::new("profiles")
///     .eq("user_type", "alumni")
///     .order("created_at", false);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FetchRequest {
    /// Remote collection (table) name
    pub collection: String,

    /// Equality constraints, all of which must hold
    pub filters: Vec<(String, Value)>,

    pub order: Option<OrderBy>,

    /// Maximum number of rows to return
    pub limit: Option<usize>,
}

impl FetchRequest {
    pub fn new(collection: impl Into<String>) -> Self {
        Self {
            collection: collection.into(),
            ..Default::default()
        }
    }

    /// Require `field == value`
    pub fn eq(mut self, field: &str, value: impl Into<Value>) -> Self {
        self.filters.push((field.to_string(), value.into()));
        self
    }

    pub fn order(mut self, field: &str, ascending: bool) -> Self {
        self.order = Some(OrderBy {
            field: field.to_string(),
            ascending,
        });
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Whether a JSON row satisfies every equality constraint
    pub fn matches_row(&self, row: &Value) -> bool {
        self.filters
            .iter()
            .all(|(field, expected)| row.get(field).unwrap_or(&Value::Null) == expected)
    }
}

/// Backend-agnostic access to the hosted data store
///
/// Rows travel as JSON objects carrying an `"id"` field. Typed access is
/// layered on top by [`crate::core::service::Repository`].
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the rows of a collection
    async fn fetch(&self, request: &FetchRequest) -> StoreResult<Vec<Value>>;

    /// Insert a row and return it as stored
    async fn insert(&self, collection: &str, row: Value) -> StoreResult<Value>;

    /// Merge `patch` into the row with the given id
    ///
    /// Returns the updated row, or `None` if no row has that id.
    async fn update(&self, collection: &str, id: &Uuid, patch: Value) -> StoreResult<Option<Value>>;

    /// Fetch a single row by id
    async fn get(&self, collection: &str, id: &Uuid) -> StoreResult<Option<Value>> {
        let request = FetchRequest::new(collection).eq("id", id.to_string()).limit(1);
        Ok(self.fetch(&request).await?.into_iter().next())
    }

    /// Add `by` to a numeric field and return the new value
    ///
    /// The default implementation reads the row, then writes `current + by`
    /// back. Two clients incrementing concurrently can lose an update
    /// (last write wins on the stale read). Backends able to increment
    /// atomically override this and report it through
    /// [`RemoteStore::supports_atomic_increment`].
    async fn increment(
        &self,
        collection: &str,
        id: &Uuid,
        field: &str,
        by: i64,
    ) -> StoreResult<Option<i64>> {
        let Some(row) = self.get(collection, id).await? else {
            return Ok(None);
        };

        let next = row.get(field).and_then(Value::as_i64).unwrap_or(0) + by;
        let updated = self.update(collection, id, json!({ field: next })).await?;

        Ok(updated.map(|_| next))
    }

    /// Whether `increment` is free of lost updates
    fn supports_atomic_increment(&self) -> bool {
        false
    }
}
