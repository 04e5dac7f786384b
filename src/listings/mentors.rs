//! Mentor listing

use crate::core::{FetchRequest, FilterCriteria, Record};
use crate::models::Profile;

/// Name, company, and every listed skill are searched
pub const SEARCH_FIELDS: &[&str] = &["full_name", "current_company", "skills"];

/// Profiles that volunteered as mentors, newest first
pub fn fetch_request() -> FetchRequest {
    FetchRequest::new(Profile::collection())
        .eq("is_mentor", true)
        .order("created_at", false)
}

pub fn criteria(search_text: &str) -> FilterCriteria {
    FilterCriteria::new().search(SEARCH_FIELDS, search_text)
}
