//! Macro-generated conformance suite for `RemoteStore` backends
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//!
//! use store_harness::*;
//! use alumni::storage::InMemoryStore;
//!
//! remote_store_tests!(InMemoryStore::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_insert_then_get`: inserted row comes back by id
//! - `test_get_nonexistent`: unknown id is `None`
//! - `test_fetch_empty_collection`: unknown collection is an empty list
//! - `test_fetch_eq_filters`: every equality constraint must hold
//! - `test_fetch_order_and_limit`: ordering is applied before the cap
//! - `test_update_merges`: patch merges into the row
//! - `test_update_nonexistent`: unknown id is `None`, not an error
//! - `test_increment`: counter goes up and missing counters start at zero
//! - `test_concurrent_increments`: atomic stores lose no update

/// Generate the `RemoteStore` conformance suite
///
/// `$factory` is re-evaluated for each test and must produce a
/// `RemoteStore + Clone + 'static` starting out empty.
#[macro_export]
macro_rules! remote_store_tests {
    ($factory:expr) => {
        mod remote_store_contract_tests {
            use super::*;
            use alumni::core::store::{FetchRequest, RemoteStore};
            use serde_json::json;
            use uuid::Uuid;

            fn titles(rows: &[serde_json::Value]) -> Vec<&str> {
                rows.iter().filter_map(|r| r["title"].as_str()).collect()
            }

            #[tokio::test]
            async fn test_insert_then_get() {
                let store = $factory;
                let id = Uuid::new_v4();
                store
                    .insert("jobs", json!({"id": id, "title": "Backend Engineer"}))
                    .await
                    .unwrap();

                let row = store.get("jobs", &id).await.unwrap().unwrap();
                assert_eq!(row["title"], "Backend Engineer");
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let store = $factory;
                assert!(store.get("jobs", &Uuid::new_v4()).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_fetch_empty_collection() {
                let store = $factory;
                let rows = store.fetch(&FetchRequest::new("stories")).await.unwrap();
                assert!(rows.is_empty());
            }

            #[tokio::test]
            async fn test_fetch_eq_filters() {
                let store = $factory;
                for (title, kind, mentor) in [
                    ("a", "alumni", true),
                    ("b", "alumni", false),
                    ("c", "student", true),
                ] {
                    store
                        .insert(
                            "profiles",
                            json!({"title": title, "user_type": kind, "is_mentor": mentor}),
                        )
                        .await
                        .unwrap();
                }

                let request = FetchRequest::new("profiles")
                    .eq("user_type", "alumni")
                    .eq("is_mentor", true);
                let rows = store.fetch(&request).await.unwrap();
                assert_eq!(titles(&rows), vec!["a"]);
            }

            #[tokio::test]
            async fn test_fetch_order_and_limit() {
                let store = $factory;
                for (title, year) in [("mid", 2019), ("old", 2015), ("new", 2023)] {
                    store
                        .insert("memories", json!({"title": title, "year": year}))
                        .await
                        .unwrap();
                }

                let request = FetchRequest::new("memories").order("year", false).limit(2);
                let rows = store.fetch(&request).await.unwrap();
                assert_eq!(titles(&rows), vec!["new", "mid"]);

                let request = FetchRequest::new("memories").order("year", true);
                let rows = store.fetch(&request).await.unwrap();
                assert_eq!(titles(&rows), vec!["old", "mid", "new"]);
            }

            #[tokio::test]
            async fn test_update_merges() {
                let store = $factory;
                let id = Uuid::new_v4();
                store
                    .insert("profiles", json!({"id": id, "full_name": "A", "approval_status": "pending"}))
                    .await
                    .unwrap();

                let row = store
                    .update("profiles", &id, json!({"approval_status": "approved"}))
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(row["approval_status"], "approved");
                assert_eq!(row["full_name"], "A");
            }

            #[tokio::test]
            async fn test_update_nonexistent() {
                let store = $factory;
                let row = store
                    .update("profiles", &Uuid::new_v4(), json!({"full_name": "B"}))
                    .await
                    .unwrap();
                assert!(row.is_none());
            }

            #[tokio::test]
            async fn test_increment() {
                let store = $factory;
                let id = Uuid::new_v4();
                store
                    .insert("events", json!({"id": id, "rsvp_count": 2}))
                    .await
                    .unwrap();

                assert_eq!(store.increment("events", &id, "rsvp_count", 1).await.unwrap(), Some(3));
                assert_eq!(store.increment("events", &id, "views", 1).await.unwrap(), Some(1));
                assert_eq!(
                    store.increment("events", &Uuid::new_v4(), "rsvp_count", 1).await.unwrap(),
                    None
                );
            }

            #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
            async fn test_concurrent_increments() {
                let store = $factory;
                if !store.supports_atomic_increment() {
                    return;
                }

                let id = Uuid::new_v4();
                store
                    .insert("memories", json!({"id": id, "likes_count": 0}))
                    .await
                    .unwrap();

                let handles: Vec<_> = (0..20)
                    .map(|_| {
                        let store = store.clone();
                        tokio::spawn(async move { store.increment("memories", &id, "likes_count", 1).await })
                    })
                    .collect();
                for handle in handles {
                    handle.await.unwrap().unwrap();
                }

                let row = store.get("memories", &id).await.unwrap().unwrap();
                assert_eq!(row["likes_count"], 20);
            }
        }
    };
}
