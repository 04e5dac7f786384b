//! Shared campus memories (`memories` collection)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Memory {
    pub id: Uuid,
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<String>,
    pub image_url: Option<String>,

    /// Year the memory is filed under
    pub year: Option<i32>,

    #[serde(default)]
    pub likes_count: i64,

    pub uploaded_by: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
}

crate::impl_record!(
    Memory,
    "memories",
    [
        title,
        description,
        event_type,
        image_url,
        year,
        likes_count,
        uploaded_by,
        created_at,
    ]
);
