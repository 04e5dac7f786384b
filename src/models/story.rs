//! Alumni stories (`stories` collection)

use crate::core::FieldValue;
use crate::core::field::ToFieldValue;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The story's author as returned by the store
///
/// Plain reads carry the author id; reads that join the author profile
/// carry the embedded name and company instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum StoryAuthor {
    Id(Uuid),
    Profile {
        full_name: Option<String>,
        current_company: Option<String>,
    },
}

impl StoryAuthor {
    pub fn full_name(&self) -> Option<&str> {
        match self {
            StoryAuthor::Profile { full_name, .. } => full_name.as_deref(),
            StoryAuthor::Id(_) => None,
        }
    }
}

impl ToFieldValue for StoryAuthor {
    fn to_field_value(&self) -> FieldValue {
        match self {
            StoryAuthor::Id(id) => FieldValue::Uuid(*id),
            StoryAuthor::Profile { full_name, .. } => full_name.to_field_value(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Story {
    pub id: Uuid,
    pub title: Option<String>,
    pub excerpt: Option<String>,
    pub cover_image_url: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,

    #[serde(default)]
    pub is_featured: bool,

    #[serde(default)]
    pub views_count: i64,

    pub author_id: Option<StoryAuthor>,
    pub published_at: Option<DateTime<Utc>>,
}

crate::impl_record!(
    Story,
    "stories",
    [
        title,
        excerpt,
        cover_image_url,
        tags,
        is_featured,
        views_count,
        author_id,
        published_at,
    ]
);
