//! Public landing page counters

use crate::core::{
    error::{PortalResult, StoreError},
    service::Repository,
    store::RemoteStore,
};
use crate::models::PlatformStats;
use std::sync::Arc;

#[derive(Clone)]
pub struct LandingService {
    stats: Repository<PlatformStats>,
}

impl LandingService {
    pub fn new(store: Arc<dyn RemoteStore>) -> Self {
        Self {
            stats: Repository::new(store),
        }
    }

    /// The platform counters, if the stats row exists
    ///
    /// No sign-in required. More than one stats row is a store error.
    pub async fn stats(&self) -> PortalResult<Option<PlatformStats>> {
        let mut rows = self.stats.fetch(&self.stats.request().limit(2)).await?;
        if rows.len() > 1 {
            return Err(StoreError::decode("platform_stats", "expected at most one row").into());
        }
        Ok(rows.pop())
    }
}
