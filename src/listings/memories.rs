//! Memory lane: memories grouped by year

use crate::core::{FetchRequest, Record};
use crate::models::Memory;
use indexmap::IndexMap;

/// Memories, most recent year first
pub fn fetch_request() -> FetchRequest {
    FetchRequest::new(Memory::collection()).order("year", false)
}

/// Group memories by year, years descending
///
/// Within a year the fetch order is kept. Memories without a year are
/// gathered under `None`, after every dated year.
pub fn group_by_year(memories: &[Memory]) -> IndexMap<Option<i32>, Vec<&Memory>> {
    let mut groups: IndexMap<Option<i32>, Vec<&Memory>> = IndexMap::new();
    for memory in memories {
        groups.entry(memory.year).or_default().push(memory);
    }

    groups.sort_by(|a, _, b, _| match (a, b) {
        (Some(x), Some(y)) => y.cmp(x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });
    groups
}
