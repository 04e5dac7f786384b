//! Memory likes

use crate::core::{
    error::PortalResult, listing::ListingHandle, service::Repository, store::RemoteStore,
};
use crate::listings::memories as lane;
use crate::models::Memory;
use crate::services::counter::CounterService;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct MemoryService {
    memories: Repository<Memory>,
    counter: CounterService,
}

impl MemoryService {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            memories: Repository::new(store.clone()),
            counter: CounterService::new(store),
        }
    }

    pub async fn load(&self, listing: &ListingHandle<Memory>) -> PortalResult<bool> {
        listing.refresh(&self.memories, &lane::fetch_request()).await
    }

    /// Add a like and return the new count
    ///
    /// Likes are anonymous and unlimited.
    pub async fn like(&self, memory_id: Uuid) -> PortalResult<i64> {
        self.counter.bump::<Memory>(&memory_id, "likes_count").await
    }

    /// Like, then reload the memory lane
    pub async fn like_and_refresh(
        &self,
        memory_id: Uuid,
        listing: &ListingHandle<Memory>,
    ) -> PortalResult<i64> {
        self.counter
            .bump_and_refresh(listing, &lane::fetch_request(), &memory_id, "likes_count")
            .await
    }
}
