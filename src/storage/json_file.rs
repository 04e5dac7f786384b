//! Static JSON snapshots loaded into an in-memory store
//!
//! A snapshot is one JSON object mapping collection names to arrays of
//! rows, e.g. an export of the hosted store:
//!
//! ```json
//! {
//!   "profiles": [{"id": "…", "full_name": "Arjun Patel", "batch_year": 2019}],
//!   "events": []
//! }
//! ```

use crate::core::error::StoreError;
use crate::core::store::StoreResult;
use crate::storage::InMemoryStore;
use std::path::Path;

/// Load a snapshot file into a fresh in-memory store
pub async fn load_snapshot(path: impl AsRef<Path>) -> StoreResult<InMemoryStore> {
    let path = path.as_ref();
    let content = tokio::fs::read_to_string(path).await.map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "Failed to read snapshot");
        StoreError::Io(format!("cannot read {}: {}", path.display(), e))
    })?;

    let store = parse_snapshot(&content)?;
    tracing::info!(path = %path.display(), "Loaded store snapshot");
    Ok(store)
}

/// Parse snapshot text into a fresh in-memory store
pub fn parse_snapshot(content: &str) -> StoreResult<InMemoryStore> {
    let document = serde_json::from_str(content).map_err(|e| StoreError::decode("snapshot", e))?;
    InMemoryStore::from_json(document)
}
