//! Job board postings (`jobs` collection)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Job {
    pub id: Uuid,
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub location: Option<String>,

    /// "full-time", "part-time", "internship", ...
    pub job_type: Option<String>,

    pub domain: Option<String>,

    #[serde(default)]
    pub skills_required: Vec<String>,

    pub apply_url: Option<String>,

    #[serde(default)]
    pub is_featured: bool,

    pub posted_by: Option<Uuid>,
    pub created_at: Option<DateTime<Utc>>,
}

crate::impl_record!(
    Job,
    "jobs",
    [
        title,
        company,
        description,
        location,
        job_type,
        domain,
        skills_required,
        apply_url,
        is_featured,
        posted_by,
        created_at,
    ]
);
