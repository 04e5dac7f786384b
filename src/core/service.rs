//! Typed repository over the remote store

use crate::core::{
    error::{PortalError, PortalResult, StoreError},
    record::Record,
    store::{FetchRequest, RemoteStore},
};
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;
use uuid::Uuid;

/// Typed access to one collection
///
/// Decodes JSON rows into `R` and logs every round-trip. Failures are
/// logged and returned; an empty collection is `Ok(vec![])`, never an error.
pub struct Repository<R: Record> {
    store: Arc<dyn RemoteStore>,
    _record: PhantomData<fn() -> R>,
}

impl<R: Record> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

impl<R: Record> Repository<R> {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// A fetch request targeting this collection
    pub fn request(&self) -> FetchRequest {
        FetchRequest::new(R::collection())
    }

    /// The underlying store
    pub fn store(&self) -> &Arc<dyn RemoteStore> {
        &self.store
    }

    /// Fetch and decode rows
    pub async fn fetch(&self, request: &FetchRequest) -> PortalResult<Vec<R>> {
        let rows = self.store.fetch(request).await.map_err(|e| {
            tracing::error!(collection = R::collection(), error = %e, "Fetch failed");
            e
        })?;

        tracing::debug!(collection = R::collection(), rows = rows.len(), "Fetched rows");

        rows.into_iter().map(decode::<R>).collect()
    }

    /// Fetch every row of the collection in store order
    pub async fn list(&self) -> PortalResult<Vec<R>> {
        self.fetch(&self.request()).await
    }

    /// Fetch a single record by id
    pub async fn get(&self, id: &Uuid) -> PortalResult<Option<R>> {
        let row = self.store.get(R::collection(), id).await.map_err(|e| {
            tracing::error!(collection = R::collection(), id = %id, error = %e, "Get failed");
            e
        })?;

        row.map(decode::<R>).transpose()
    }

    /// Insert a record and return it as stored
    pub async fn insert(&self, record: &R) -> PortalResult<R> {
        let row = serde_json::to_value(record)?;
        let stored = self.store.insert(R::collection(), row).await.map_err(|e| {
            tracing::error!(collection = R::collection(), error = %e, "Insert failed");
            e
        })?;

        tracing::info!(collection = R::collection(), id = %record.id(), "Inserted record");
        decode(stored)
    }

    /// Patch a record; a missing record is `PortalError::NotFound`
    pub async fn update(&self, id: &Uuid, patch: Value) -> PortalResult<R> {
        let updated = self
            .store
            .update(R::collection(), id, patch)
            .await
            .map_err(|e| {
                tracing::error!(collection = R::collection(), id = %id, error = %e, "Update failed");
                e
            })?
            .ok_or_else(|| PortalError::not_found(R::collection(), *id))?;

        tracing::info!(collection = R::collection(), id = %id, "Updated record");
        decode(updated)
    }
}

fn decode<R: Record>(row: Value) -> PortalResult<R> {
    serde_json::from_value(row)
        .map_err(|e| PortalError::Store(StoreError::decode(R::collection(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Job;
    use crate::storage::InMemoryStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_decode_failure_is_store_error() {
        let store = InMemoryStore::new();
        store
            .seed("jobs", vec![json!({"id": "not-a-uuid", "title": 3})])
            .unwrap();

        let repo: Repository<Job> = Repository::new(Arc::new(store));
        let err = repo.list().await.unwrap_err();
        assert_eq!(err.error_code(), "STORE_DECODE");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo: Repository<Job> = Repository::new(Arc::new(InMemoryStore::new()));
        let err = repo
            .update(&Uuid::new_v4(), json!({"title": "x"}))
            .await
            .unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_empty_collection_is_ok() {
        let repo: Repository<Job> = Repository::new(Arc::new(InMemoryStore::new()));
        assert!(repo.list().await.unwrap().is_empty());
    }
}
