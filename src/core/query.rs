//! Listing filter engine, facet extraction and client-side pagination
//!
//! Every listing page (directory, mentors, jobs, events, ...) works the same
//! way: the full collection is fetched once, then a [`FilterCriteria`] is
//! applied to the in-memory records to obtain the visible subset. The engine
//! never goes back to the store.
//!
//! # Semantics
//!
//! - Criteria are AND-ed; there is no OR across criteria and no negation.
//! - A criterion whose value is empty/falsy is inactive and always passes.
//! - Field access is null-safe: a missing field fails substring and equality
//!   tests instead of raising.
//! - The output is an order-preserving subsequence of the input, so applying
//!   the same criteria twice yields the same result.
//!
//! # Example
//! ```rust,ignore
//! let criteria = FilterCriteria::new()
//!     .search(&["full_name", "current_company", "department"], "arjun")
//!     .exact("batch_year", "2019")
//!     .contains("country", "ind");
//!
//! let visible = criteria.apply(&profiles);
//! let years = facet(&profiles, "batch_year", FacetOrder::Descending);
//! ```

use crate::core::{field::FieldValue, record::Record};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Which side of "now" a dated record must fall on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Timeframe {
    #[default]
    Upcoming,
    Past,
}

impl Timeframe {
    /// Classify a date relative to `now`
    ///
    /// Only `date < now` is past; a date equal to `now` is still upcoming.
    pub fn classify(date: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if date < now {
            Timeframe::Past
        } else {
            Timeframe::Upcoming
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Timeframe::Upcoming => "upcoming",
            Timeframe::Past => "past",
        }
    }
}

/// A single predicate over one or more record fields
#[derive(Debug, Clone, PartialEq)]
pub enum Criterion {
    /// Keep records where ANY of `fields` contains `text`, case-insensitively
    Search { fields: Vec<String>, text: String },

    /// Keep records whose field equals `value`, with integer coercion
    Exact { field: String, value: FieldValue },

    /// Keep records whose field contains `text`, case-insensitively
    Contains { field: String, text: String },

    /// Keep records whose field is exactly the string `value`
    Equals { field: String, value: String },

    /// Keep records whose boolean field is `true`
    Flag { field: String },

    /// Keep records whose date field falls in `timeframe` relative to `now`
    Timeframe {
        field: String,
        timeframe: Timeframe,
        now: DateTime<Utc>,
    },
}

impl Criterion {
    /// Whether this criterion constrains anything at all
    pub fn is_active(&self) -> bool {
        match self {
            Criterion::Search { text, .. } | Criterion::Contains { text, .. } => !text.is_empty(),
            Criterion::Exact { value, .. } => value.is_truthy(),
            Criterion::Equals { value, .. } => !value.is_empty(),
            Criterion::Flag { .. } | Criterion::Timeframe { .. } => true,
        }
    }

    /// Test a record against this criterion
    ///
    /// Inactive criteria always pass.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if !self.is_active() {
            return true;
        }

        match self {
            Criterion::Search { fields, text } => {
                let needle = text.to_lowercase();
                fields
                    .iter()
                    .any(|f| record.field_value(f).contains_folded(&needle))
            }
            Criterion::Exact { field, value } => exact_match(&record.field_value(field), value),
            Criterion::Contains { field, text } => {
                let needle = text.to_lowercase();
                let value = record.field_value(field);
                // A missing field never matches a non-empty needle
                !value.is_null() && value.contains_folded(&needle)
            }
            Criterion::Equals { field, value } => {
                record.field_value(field).as_string() == Some(value.as_str())
            }
            Criterion::Flag { field } => record.field_value(field).as_bool() == Some(true),
            Criterion::Timeframe {
                field,
                timeframe,
                now,
            } => {
                // A missing date counts as the epoch, so it is past
                let date = record.field_value(field).as_datetime().unwrap_or_default();
                Timeframe::classify(date, *now) == *timeframe
            }
        }
    }
}

fn exact_match(actual: &FieldValue, expected: &FieldValue) -> bool {
    match expected.as_integer() {
        Some(n) => actual.as_integer() == Some(n),
        None => match (actual, expected) {
            (FieldValue::String(a), FieldValue::String(b)) => a == b,
            (a, b) => !a.is_null() && a == b,
        },
    }
}

/// A conjunction of criteria applied to a loaded listing
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    criteria: Vec<Criterion>,
}

impl FilterCriteria {
    /// Create empty criteria (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary criterion
    pub fn with(mut self, criterion: Criterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Free-text search over several fields
    pub fn search(self, fields: &[&str], text: impl Into<String>) -> Self {
        self.with(Criterion::Search {
            fields: fields.iter().map(|f| f.to_string()).collect(),
            text: text.into(),
        })
    }

    /// Exact match with numeric coercion; a falsy value is ignored
    pub fn exact(self, field: &str, value: impl Into<FieldValue>) -> Self {
        self.with(Criterion::Exact {
            field: field.to_string(),
            value: value.into(),
        })
    }

    /// Case-insensitive substring match on one field
    pub fn contains(self, field: &str, text: impl Into<String>) -> Self {
        self.with(Criterion::Contains {
            field: field.to_string(),
            text: text.into(),
        })
    }

    /// Category equality on one field
    pub fn equals(self, field: &str, value: impl Into<String>) -> Self {
        self.with(Criterion::Equals {
            field: field.to_string(),
            value: value.into(),
        })
    }

    /// Boolean flag must be set
    pub fn flag(self, field: &str) -> Self {
        self.with(Criterion::Flag {
            field: field.to_string(),
        })
    }

    /// Date field must fall in the given timeframe
    pub fn timeframe(self, field: &str, timeframe: Timeframe, now: DateTime<Utc>) -> Self {
        self.with(Criterion::Timeframe {
            field: field.to_string(),
            timeframe,
            now,
        })
    }

    /// The criteria that actually constrain the result
    pub fn active(&self) -> impl Iterator<Item = &Criterion> {
        self.criteria.iter().filter(|c| c.is_active())
    }

    /// True when no criterion is active
    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Test a single record against every active criterion
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        self.active().all(|c| c.matches(record))
    }

    /// Apply the criteria, borrowing the visible records
    pub fn apply_refs<'a, R: Record>(&self, records: &'a [R]) -> Vec<&'a R> {
        records.iter().filter(|r| self.matches(*r)).collect()
    }

    /// Apply the criteria, cloning the visible records
    pub fn apply<R: Record>(&self, records: &[R]) -> Vec<R> {
        records.iter().filter(|r| self.matches(*r)).cloned().collect()
    }
}

// =============================================================================
// Facets
// =============================================================================

/// Sort order for a facet list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetOrder {
    Ascending,
    Descending,
}

/// A distinct value offered in a filter dropdown
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum FacetValue {
    Integer(i64),
    Text(String),
}

impl FacetValue {
    fn from_field(value: FieldValue) -> Vec<FacetValue> {
        if !value.is_truthy() {
            return Vec::new();
        }

        match value {
            FieldValue::Integer(i) => vec![FacetValue::Integer(i)],
            FieldValue::Float(f) if f.fract() == 0.0 => vec![FacetValue::Integer(f as i64)],
            FieldValue::Float(f) => vec![FacetValue::Text(f.to_string())],
            FieldValue::String(s) => vec![FacetValue::Text(s)],
            FieldValue::Boolean(b) => vec![FacetValue::Text(b.to_string())],
            FieldValue::Uuid(u) => vec![FacetValue::Text(u.to_string())],
            FieldValue::DateTime(dt) => vec![FacetValue::Text(dt.to_rfc3339())],
            FieldValue::List(items) => items
                .into_iter()
                .filter(|i| !i.is_empty())
                .map(FacetValue::Text)
                .collect(),
            FieldValue::Null => Vec::new(),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FacetValue::Integer(i) => Some(*i),
            FacetValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FacetValue::Text(s) => Some(s),
            FacetValue::Integer(_) => None,
        }
    }
}

/// Distinct truthy values of `field` across `records`
///
/// Pass the unfiltered records: facets describe what the collection
/// contains, not what the current filter shows. List fields contribute
/// each of their elements.
pub fn facet<R: Record>(records: &[R], field: &str, order: FacetOrder) -> Vec<FacetValue> {
    let mut seen = HashSet::new();
    let mut values: Vec<FacetValue> = records
        .iter()
        .flat_map(|r| FacetValue::from_field(r.field_value(field)))
        .filter(|v| seen.insert(v.clone()))
        .collect();

    values.sort();
    if order == FacetOrder::Descending {
        values.reverse();
    }
    values
}

/// Distinct integer values of `field`, newest (largest) first
pub fn year_facet<R: Record>(records: &[R], field: &str) -> Vec<i64> {
    facet(records, field, FacetOrder::Descending)
        .iter()
        .filter_map(FacetValue::as_integer)
        .collect()
}

/// Distinct text values of `field`, lexicographically ascending
pub fn text_facet<R: Record>(records: &[R], field: &str) -> Vec<String> {
    facet(records, field, FacetOrder::Ascending)
        .iter()
        .filter_map(|v| v.as_text().map(str::to_string))
        .collect()
}

// =============================================================================
// Pagination
// =============================================================================

/// Client-side pagination over an already filtered listing
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PageRequest {
    /// Page number (starts at 1)
    #[serde(default = "default_page")]
    pub page: usize,

    /// Number of items per page
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_page() -> usize {
    1
}

fn default_limit() -> usize {
    20
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
        }
    }
}

impl PageRequest {
    pub fn new(page: usize, limit: usize) -> Self {
        Self { page, limit }
    }

    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, between 1 and 100
    pub fn limit(&self) -> usize {
        self.limit.clamp(1, 100)
    }
}

/// A page of results with its metadata
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    pub pagination: PaginationMeta,
}

/// Pagination metadata
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PaginationMeta {
    /// Current page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: usize,

    /// Total number of items (after filters)
    pub total: usize,

    /// Total number of pages
    pub total_pages: usize,

    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationMeta {
    pub fn new(page: usize, limit: usize, total: usize) -> Self {
        let page = page.max(1);
        let limit = limit.max(1);
        let total_pages = if total == 0 { 0 } else { total.div_ceil(limit) };
        let start = (page - 1) * limit;

        Self {
            page,
            limit,
            total,
            total_pages,
            has_next: start + limit < total,
            has_prev: page > 1,
        }
    }
}

/// Slice a filtered listing into one page
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Paginated<T> {
    let page = request.page();
    let limit = request.limit();
    let pagination = PaginationMeta::new(page, limit, items.len());

    let data = items
        .into_iter()
        .skip((page - 1) * limit)
        .take(limit)
        .collect();

    Paginated { data, pagination }
}
