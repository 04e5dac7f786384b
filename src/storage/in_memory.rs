//! In-memory implementation of RemoteStore for testing and offline use

use crate::core::{
    error::StoreError,
    store::{FetchRequest, RemoteStore, StoreResult},
};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory store implementation
///
/// Collections are vectors of JSON rows kept in insertion order. Uses
/// RwLock for thread-safe access; increments happen under the write lock
/// and are therefore atomic.
#[derive(Clone, Debug)]
pub struct InMemoryStore {
    collections: Arc<RwLock<HashMap<String, Vec<Value>>>>,
}

impl InMemoryStore {
    /// Create an empty in-memory store
    pub fn new() -> Self {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Build a store from a JSON object of `{collection: [rows]}`
    pub fn from_json(document: Value) -> StoreResult<Self> {
        let Value::Object(collections) = document else {
            return Err(StoreError::decode("document", "expected an object of collections"));
        };

        let store = Self::new();
        for (name, rows) in collections {
            let Value::Array(rows) = rows else {
                return Err(StoreError::decode(&name, "expected an array of rows"));
            };
            store.seed(&name, rows)?;
        }
        Ok(store)
    }

    /// Append rows to a collection, assigning ids where missing
    pub fn seed(&self, collection: &str, rows: Vec<Value>) -> StoreResult<()> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Lock("write"))?;

        let target = collections.entry(collection.to_string()).or_default();
        for row in rows {
            target.push(with_id(row));
        }
        Ok(())
    }

    /// Copy of a collection's rows in insertion order
    pub fn rows(&self, collection: &str) -> StoreResult<Vec<Value>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Lock("read"))?;

        Ok(collections.get(collection).cloned().unwrap_or_default())
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

fn with_id(row: Value) -> Value {
    match row {
        Value::Object(mut map) => {
            map.entry("id")
                .or_insert_with(|| Value::String(Uuid::new_v4().to_string()));
            Value::Object(map)
        }
        other => other,
    }
}

fn row_has_id(row: &Value, id: &Uuid) -> bool {
    row.get("id")
        .and_then(Value::as_str)
        .and_then(|s| Uuid::parse_str(s).ok())
        .is_some_and(|row_id| &row_id == id)
}

/// Order two JSON values the way the hosted store orders columns
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => {
            match (x.parse::<DateTime<Utc>>(), y.parse::<DateTime<Utc>>()) {
                (Ok(dx), Ok(dy)) => dx.cmp(&dy),
                _ => x.cmp(y),
            }
        }
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

fn merge(row: &mut Value, patch: Map<String, Value>) {
    if let Value::Object(map) = row {
        for (key, value) in patch {
            // The id is immutable
            if key != "id" {
                map.insert(key, value);
            }
        }
    }
}

#[async_trait]
impl RemoteStore for InMemoryStore {
    async fn fetch(&self, request: &FetchRequest) -> StoreResult<Vec<Value>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Lock("read"))?;

        let mut rows: Vec<Value> = collections
            .get(&request.collection)
            .map(|rows| {
                rows.iter()
                    .filter(|row| request.matches_row(row))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default();

        if let Some(order) = &request.order {
            // Stable sort; rows missing the column go last either way
            rows.sort_by(|a, b| {
                match (
                    a.get(&order.field).filter(|v| !v.is_null()),
                    b.get(&order.field).filter(|v| !v.is_null()),
                ) {
                    (Some(x), Some(y)) => {
                        let ord = compare_values(x, y);
                        if order.ascending { ord } else { ord.reverse() }
                    }
                    (Some(_), None) => Ordering::Less,
                    (None, Some(_)) => Ordering::Greater,
                    (None, None) => Ordering::Equal,
                }
            });
        }

        if let Some(limit) = request.limit {
            rows.truncate(limit);
        }

        Ok(rows)
    }

    async fn insert(&self, collection: &str, row: Value) -> StoreResult<Value> {
        if !row.is_object() {
            return Err(StoreError::decode(collection, "row must be a JSON object"));
        }

        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Lock("write"))?;

        let row = with_id(row);
        collections
            .entry(collection.to_string())
            .or_default()
            .push(row.clone());

        Ok(row)
    }

    async fn update(&self, collection: &str, id: &Uuid, patch: Value) -> StoreResult<Option<Value>> {
        let Value::Object(patch) = patch else {
            return Err(StoreError::decode(collection, "patch must be a JSON object"));
        };

        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Lock("write"))?;

        let Some(row) = collections
            .get_mut(collection)
            .and_then(|rows| rows.iter_mut().find(|row| row_has_id(row, id)))
        else {
            return Ok(None);
        };

        merge(row, patch);
        Ok(Some(row.clone()))
    }

    async fn get(&self, collection: &str, id: &Uuid) -> StoreResult<Option<Value>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::Lock("read"))?;

        Ok(collections
            .get(collection)
            .and_then(|rows| rows.iter().find(|row| row_has_id(row, id)))
            .cloned())
    }

    async fn increment(
        &self,
        collection: &str,
        id: &Uuid,
        field: &str,
        by: i64,
    ) -> StoreResult<Option<i64>> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::Lock("write"))?;

        let Some(Value::Object(map)) = collections
            .get_mut(collection)
            .and_then(|rows| rows.iter_mut().find(|row| row_has_id(row, id)))
        else {
            return Ok(None);
        };

        let next = map.get(field).and_then(Value::as_i64).unwrap_or(0) + by;
        map.insert(field.to_string(), Value::from(next));
        Ok(Some(next))
    }

    fn supports_atomic_increment(&self) -> bool {
        true
    }
}
