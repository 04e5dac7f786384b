//! Shared fixtures for store and portal integration tests
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//! use store_harness::*;
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod remote_store_tests;

use alumni::prelude::*;
use async_trait::async_trait;
use chrono::Duration;
use serde_json::{Value, json};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const ARJUN: &str = "0b7f6f3e-8a3c-4a55-9a53-6f1f2f0a0001";
pub const SNEHA: &str = "0b7f6f3e-8a3c-4a55-9a53-6f1f2f0a0002";
pub const ADMIN: &str = "0b7f6f3e-8a3c-4a55-9a53-6f1f2f0a00ad";

pub fn uuid(s: &str) -> Uuid {
    Uuid::parse_str(s).unwrap()
}

/// The two-profile directory used throughout the filter properties
pub fn directory_profiles() -> Vec<Profile> {
    vec![
        Profile {
            id: uuid(ARJUN),
            full_name: Some("Arjun Patel".to_string()),
            batch_year: Some(2019),
            department: Some("CSE".to_string()),
            current_company: Some("Google".to_string()),
            country: Some("India".to_string()),
            user_type: Some("alumni".to_string()),
            ..Default::default()
        },
        Profile {
            id: uuid(SNEHA),
            full_name: Some("Sneha Gupta".to_string()),
            batch_year: Some(2020),
            department: Some("ECE".to_string()),
            current_company: Some("Microsoft".to_string()),
            country: None,
            user_type: Some("alumni".to_string()),
            ..Default::default()
        },
    ]
}

/// A small portal snapshot covering every collection
pub fn portal_snapshot(now: DateTime<Utc>) -> Value {
    let profiles: Vec<Value> = directory_profiles()
        .into_iter()
        .map(|p| serde_json::to_value(p).unwrap())
        .chain([json!({
            "id": ADMIN,
            "full_name": "Portal Admin",
            "role": "admin",
            "user_type": "alumni",
            "approval_status": "approved"
        })])
        .collect();

    json!({
        "profiles": profiles,
        "events": [
            {"title": "Webinar", "event_date": now - Duration::days(30), "rsvp_count": 12},
            {"title": "Reunion 2025", "event_date": now + Duration::days(12), "rsvp_count": 0},
            {"title": "Hackathon", "event_date": now + Duration::hours(5), "max_attendees": 1}
        ],
        "jobs": [
            {"title": "Backend Engineer", "job_type": "full-time", "is_featured": true,
             "created_at": now - Duration::days(1)},
            {"title": "Data Intern", "job_type": "internship",
             "created_at": now - Duration::days(2)},
            {"title": "SRE", "job_type": "full-time", "is_featured": true,
             "created_at": now - Duration::days(3)}
        ],
        "memories": [
            {"title": "Convocation", "year": 2019},
            {"title": "Tech fest", "year": 2021, "likes_count": 3}
        ],
        "stories": [
            {"title": "From campus to CTO", "is_featured": true, "published_at": now - Duration::days(5)},
            {"title": "Teaching abroad", "published_at": now - Duration::days(9)}
        ],
        "platform_stats": [{"total_alumni": 1200, "total_countries": 18}]
    })
}

pub fn session_for(id: &str, role: Option<&str>) -> Session {
    Session::signed_in(Profile {
        id: uuid(id),
        full_name: Some("Signed In".to_string()),
        role: role.map(str::to_string),
        ..Default::default()
    })
}

/// A store that is always unreachable
#[derive(Default)]
pub struct OfflineStore {
    pub calls: AtomicUsize,
}

impl OfflineStore {
    fn fail(&self) -> StoreError {
        self.calls.fetch_add(1, Ordering::SeqCst);
        StoreError::Network("connection refused".to_string())
    }
}

#[async_trait]
impl RemoteStore for OfflineStore {
    async fn fetch(&self, _request: &FetchRequest) -> Result<Vec<Value>, StoreError> {
        Err(self.fail())
    }

    async fn insert(&self, _collection: &str, _row: Value) -> Result<Value, StoreError> {
        Err(self.fail())
    }

    async fn update(&self, _collection: &str, _id: &Uuid, _patch: Value) -> Result<Option<Value>, StoreError> {
        Err(self.fail())
    }
}
