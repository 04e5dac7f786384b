//! Alumni directory: search, batch/department/country filters and facets

use crate::core::{FetchRequest, FilterCriteria, Record, text_facet, year_facet};
use crate::models::Profile;
use serde::{Deserialize, Serialize};

/// Fields the directory search box looks in
pub const SEARCH_FIELDS: &[&str] = &["full_name", "current_company", "department"];

/// The directory's filter form
///
/// Every field holds the raw form input; an empty string leaves that
/// filter off.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DirectoryFilter {
    pub search_text: String,

    /// Batch year as typed or picked, e.g. "2019"
    pub batch_year: String,

    pub department: String,
    pub country: String,
}

impl DirectoryFilter {
    pub fn criteria(&self) -> FilterCriteria {
        FilterCriteria::new()
            .search(SEARCH_FIELDS, self.search_text.as_str())
            .exact("batch_year", self.batch_year.trim())
            .contains("department", self.department.as_str())
            .contains("country", self.country.as_str())
    }

    /// Narrow the loaded profiles, keeping fetch order
    pub fn apply<'a>(&self, profiles: &'a [Profile]) -> Vec<&'a Profile> {
        self.criteria().apply_refs(profiles)
    }
}

/// Alumni profiles, newest first
pub fn fetch_request() -> FetchRequest {
    FetchRequest::new(Profile::collection())
        .eq("user_type", "alumni")
        .order("created_at", false)
}

/// Dropdown options offered by the directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DirectoryFacets {
    /// Newest batch first
    pub batch_years: Vec<i64>,

    /// Alphabetical
    pub departments: Vec<String>,
}

/// Facets over the full, unfiltered directory
pub fn facets(profiles: &[Profile]) -> DirectoryFacets {
    DirectoryFacets {
        batch_years: year_facet(profiles, "batch_year"),
        departments: text_facet(profiles, "department"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn profile(name: &str, company: &str, dept: &str, year: i32, country: Option<&str>) -> Profile {
        Profile {
            id: Uuid::new_v4(),
            full_name: Some(name.to_string()),
            current_company: Some(company.to_string()),
            department: Some(dept.to_string()),
            batch_year: Some(year),
            country: country.map(str::to_string),
            ..Default::default()
        }
    }

    fn sample() -> Vec<Profile> {
        vec![
            profile("Arjun Patel", "Google", "CSE", 2019, Some("India")),
            profile("Sneha Gupta", "Microsoft", "ECE", 2020, None),
        ]
    }

    #[test]
    fn test_search_matches_company_and_department() {
        let profiles = sample();

        let filter = DirectoryFilter {
            search_text: "micro".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&profiles), vec![&profiles[1]]);

        let filter = DirectoryFilter {
            search_text: "cse".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&profiles), vec![&profiles[0]]);
    }

    #[test]
    fn test_filters_combine() {
        let profiles = sample();
        let filter = DirectoryFilter {
            batch_year: "2019".to_string(),
            country: "ind".to_string(),
            ..Default::default()
        };
        assert_eq!(filter.apply(&profiles), vec![&profiles[0]]);

        let filter = DirectoryFilter {
            batch_year: "2020".to_string(),
            country: "ind".to_string(),
            ..Default::default()
        };
        assert!(filter.apply(&profiles).is_empty());
    }

    #[test]
    fn test_facets_ignore_filter_state() {
        let mut profiles = sample();
        profiles.push(profile("Rahul Verma", "Amazon", "CSE", 2019, None));
        profiles.push(Profile {
            id: Uuid::new_v4(),
            ..Default::default()
        });

        let facets = facets(&profiles);
        assert_eq!(facets.batch_years, vec![2020, 2019]);
        assert_eq!(facets.departments, vec!["CSE".to_string(), "ECE".to_string()]);
    }

    #[test]
    fn test_fetch_request() {
        let request = fetch_request();
        assert_eq!(request.collection, "profiles");
        assert_eq!(request.filters.len(), 1);
        assert!(request.order.is_some_and(|o| !o.ascending));
    }
}
