//! Hosted REST store client
//!
//! Talks to a PostgREST-style endpoint (`{url}/rest/v1/{table}`), the
//! interface exposed by the hosted backend the portal runs against.
//!
//! # Request mapping
//!
//! | Operation | HTTP                                                         |
//! |-----------|--------------------------------------------------------------|
//! | fetch     | `GET ?select=*&{col}=eq.{v}&order={col}.{asc,desc}&limit={n}` |
//! | insert    | `POST` with `Prefer: return=representation`                  |
//! | update    | `PATCH ?id=eq.{id}` with `Prefer: return=representation`     |
//!
//! The endpoint offers no increment primitive, so counters use the
//! read-then-write default of [`RemoteStore::increment`] and can lose
//! updates under concurrent writers.
//!
//! # Feature flag
//!
//! Enable with `--features remote`. Requires the `reqwest` crate.

use crate::config::StoreConfig;
use crate::core::{
    error::{PortalResult, StoreError},
    store::{FetchRequest, RemoteStore, StoreResult},
};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response};
use serde_json::Value;
use uuid::Uuid;

/// Client for the hosted store
#[derive(Clone)]
pub struct RestStore {
    client: Client,
    base_url: String,
    api_key: String,
}

impl RestStore {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from configuration and the API key environment variable
    pub fn from_config(config: &StoreConfig) -> PortalResult<Self> {
        let url = config.require_url()?;
        let api_key = config.api_key()?;
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| StoreError::Network(e.to_string()))?;

        Ok(Self::new(client, url, api_key))
    }

    fn table_url(&self, collection: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, collection)
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        builder
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    async fn send(&self, collection: &str, builder: RequestBuilder) -> StoreResult<Vec<Value>> {
        let response = self
            .authorized(builder)
            .send()
            .await
            .map_err(|e| StoreError::Network(e.to_string()))?;

        rows_from(collection, response).await
    }
}

/// Query-string pairs for a fetch
pub fn query_pairs(request: &FetchRequest) -> Vec<(String, String)> {
    let mut pairs = vec![("select".to_string(), "*".to_string())];

    for (field, value) in &request.filters {
        pairs.push((field.clone(), format!("eq.{}", filter_literal(value))));
    }
    if let Some(order) = &request.order {
        let direction = if order.ascending { "asc" } else { "desc" };
        pairs.push(("order".to_string(), format!("{}.{}", order.field, direction)));
    }
    if let Some(limit) = request.limit {
        pairs.push(("limit".to_string(), limit.to_string()));
    }
    pairs
}

fn filter_literal(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "null".to_string(),
        other => other.to_string(),
    }
}

async fn rows_from(collection: &str, response: Response) -> StoreResult<Vec<Value>> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::warn!(collection, status = status.as_u16(), "Store rejected request");
        return Err(StoreError::Status {
            status: status.as_u16(),
            body,
        });
    }

    let body: Value = response
        .json()
        .await
        .map_err(|e| StoreError::decode(collection, e))?;

    match body {
        Value::Array(rows) => Ok(rows),
        Value::Null => Ok(Vec::new()),
        row @ Value::Object(_) => Ok(vec![row]),
        other => Err(StoreError::decode(
            collection,
            format!("unexpected response body: {}", other),
        )),
    }
}

#[async_trait]
impl RemoteStore for RestStore {
    async fn fetch(&self, request: &FetchRequest) -> StoreResult<Vec<Value>> {
        let builder = self
            .client
            .get(self.table_url(&request.collection))
            .query(&query_pairs(request));

        self.send(&request.collection, builder).await
    }

    async fn insert(&self, collection: &str, row: Value) -> StoreResult<Value> {
        let builder = self
            .client
            .post(self.table_url(collection))
            .header("Prefer", "return=representation")
            .json(&row);

        self.send(collection, builder)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| StoreError::decode(collection, "insert returned no row"))
    }

    async fn update(&self, collection: &str, id: &Uuid, patch: Value) -> StoreResult<Option<Value>> {
        let builder = self
            .client
            .patch(self.table_url(collection))
            .query(&[("id", format!("eq.{}", id))])
            .header("Prefer", "return=representation")
            .json(&patch);

        Ok(self.send(collection, builder).await?.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_pairs() {
        let request = FetchRequest::new("profiles")
            .eq("user_type", "alumni")
            .eq("is_mentor", true)
            .order("created_at", false)
            .limit(50);

        let pairs = query_pairs(&request);
        let expected: Vec<(String, String)> = [
            ("select", "*"),
            ("user_type", "eq.alumni"),
            ("is_mentor", "eq.true"),
            ("order", "created_at.desc"),
            ("limit", "50"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_filter_literal() {
        assert_eq!(filter_literal(&json!(2019)), "2019");
        assert_eq!(filter_literal(&json!(null)), "null");
        assert_eq!(filter_literal(&json!("pending")), "pending");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let store = RestStore::new(Client::new(), "https://store.example.org/", "key");
        assert_eq!(
            store.table_url("events"),
            "https://store.example.org/rest/v1/events"
        );
        assert!(!store.supports_atomic_increment());
    }
}
