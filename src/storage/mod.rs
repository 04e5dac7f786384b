//! Store backends

pub mod in_memory;
pub mod json_file;

#[cfg(feature = "remote")]
pub mod rest;

pub use in_memory::InMemoryStore;
pub use json_file::{load_snapshot, parse_snapshot};

#[cfg(feature = "remote")]
pub use rest::RestStore;

use crate::config::StoreConfig;
use crate::core::{error::PortalResult, store::RemoteStore};
use std::sync::Arc;

/// Open the store described by the configuration
///
/// A configured snapshot wins over the hosted store. Without the `remote`
/// feature, a configuration that only names a URL yields an empty
/// in-memory store.
pub async fn connect(config: &StoreConfig) -> PortalResult<Arc<dyn RemoteStore>> {
    if let Some(path) = &config.snapshot {
        tracing::info!(path = %path, "Using JSON snapshot store");
        return Ok(Arc::new(load_snapshot(path).await?));
    }

    #[cfg(feature = "remote")]
    if config.url.is_some() {
        let store = RestStore::from_config(config)?;
        tracing::info!(url = ?config.url, "Using hosted REST store");
        return Ok(Arc::new(store));
    }

    tracing::warn!("No store configured, falling back to an empty in-memory store");
    Ok(Arc::new(InMemoryStore::new()))
}
