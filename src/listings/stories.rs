//! Alumni stories and the featured carousel

use crate::core::{FetchRequest, FilterCriteria, Record};
use crate::models::Story;
use crate::ui::Carousel;

/// Published stories, newest first
pub fn fetch_request() -> FetchRequest {
    FetchRequest::new(Story::collection()).order("published_at", false)
}

pub fn featured_criteria() -> FilterCriteria {
    FilterCriteria::new().flag("is_featured")
}

/// Rotating carousel over the featured stories
pub fn featured_carousel(stories: &[Story]) -> Carousel<Story> {
    Carousel::new(featured_criteria().apply(stories))
}
