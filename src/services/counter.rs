//! Counter bumps (RSVP count, likes) followed by a listing refresh

use crate::core::{
    error::{PortalError, PortalResult},
    listing::ListingHandle,
    record::Record,
    service::Repository,
    store::{FetchRequest, RemoteStore},
};
use std::sync::Arc;
use uuid::Uuid;

/// Increments one numeric field of one record
///
/// Delegates to [`RemoteStore::increment`], which is atomic on stores that
/// support it and read-then-write otherwise. After a bump the caller's
/// listing is re-fetched wholesale rather than patched locally.
#[derive(Clone)]
pub struct CounterService {
    store: Arc<dyn RemoteStore>,
}

impl CounterService {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self { store }
    }

    /// Add one to `field` and return the new value
    pub async fn bump<R: Record>(&self, id: &Uuid, field: &str) -> PortalResult<i64> {
        self.add::<R>(id, field, 1).await
    }

    /// Add `by` to `field` and return the new value
    pub async fn add<R: Record>(&self, id: &Uuid, field: &str, by: i64) -> PortalResult<i64> {
        let atomic = self.store.supports_atomic_increment();
        let value = self
            .store
            .increment(R::collection(), id, field, by)
            .await
            .map_err(|e| {
                tracing::error!(collection = R::collection(), id = %id, field, error = %e, "Increment failed");
                e
            })?
            .ok_or_else(|| PortalError::not_found(R::collection(), *id))?;

        tracing::info!(collection = R::collection(), id = %id, field, value, atomic, "Incremented counter");
        Ok(value)
    }

    /// Bump, then reload the listing the record was shown in
    ///
    /// A failed refresh is returned as the error even though the bump
    /// itself landed; the listing keeps its rows and records the failure.
    pub async fn bump_and_refresh<R: Record>(
        &self,
        listing: &ListingHandle<R>,
        request: &FetchRequest,
        id: &Uuid,
        field: &str,
    ) -> PortalResult<i64> {
        let value = self.bump::<R>(id, field).await?;
        let repo = Repository::<R>::new(self.store.clone());
        listing.refresh(&repo, request).await?;
        Ok(value)
    }
}
