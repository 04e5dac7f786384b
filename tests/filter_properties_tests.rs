//! Properties of the listing filter engine

mod store_harness;

use alumni::prelude::*;
use chrono::Duration;
use store_harness::*;

fn many_profiles() -> Vec<Profile> {
    let departments = ["CSE", "ECE", "Mechanical", "", "Civil"];
    let countries = [Some("India"), Some("United States"), None, Some("Indonesia")];

    (0..40)
        .map(|i| Profile {
            id: Uuid::new_v4(),
            full_name: Some(format!("Member {}", i)),
            batch_year: if i % 7 == 0 { None } else { Some(2010 + (i % 9)) },
            department: Some(departments[i as usize % departments.len()].to_string()),
            country: countries[i as usize % countries.len()].map(str::to_string),
            current_company: (i % 3 == 0).then(|| "Infosys".to_string()),
            ..Default::default()
        })
        .collect()
}

#[test]
fn test_empty_criteria_is_identity() {
    let profiles = many_profiles();
    let visible = DirectoryFilter::default().criteria().apply(&profiles);
    assert_eq!(visible, profiles);
}

#[test]
fn test_substring_partitions_exactly() {
    let profiles = many_profiles();
    let criteria = FilterCriteria::new().contains("country", "INDI");

    let kept = criteria.apply(&profiles);
    let expected: Vec<Profile> = profiles
        .iter()
        .filter(|p| {
            p.country
                .as_deref()
                .is_some_and(|c| c.to_lowercase().contains("indi"))
        })
        .cloned()
        .collect();
    assert_eq!(kept, expected);

    let dropped = profiles.iter().filter(|p| !criteria.matches(*p)).count();
    assert_eq!(kept.len() + dropped, profiles.len());
}

#[test]
fn test_filtering_is_idempotent() {
    let profiles = many_profiles();
    let filter = DirectoryFilter {
        search_text: "infosys".to_string(),
        department: "c".to_string(),
        ..Default::default()
    };
    let criteria = filter.criteria();

    let once = criteria.apply(&profiles);
    let twice = criteria.apply(&once);
    assert_eq!(once, twice);
}

#[test]
fn test_output_preserves_order() {
    let profiles = many_profiles();
    let visible = FilterCriteria::new().exact("batch_year", 2012).apply_refs(&profiles);

    let positions: Vec<usize> = visible
        .iter()
        .map(|v| profiles.iter().position(|p| p.id == v.id).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_facets_are_distinct_truthy_and_unfiltered() {
    let profiles = many_profiles();
    let facets = alumni::listings::directory::facets(&profiles);

    let mut years = facets.batch_years.clone();
    years.dedup();
    assert_eq!(years, facets.batch_years);
    assert!(facets.batch_years.windows(2).all(|w| w[0] > w[1]));
    assert!(!facets.batch_years.contains(&0));

    assert!(!facets.departments.iter().any(String::is_empty));
    assert!(facets.departments.windows(2).all(|w| w[0] < w[1]));

    let narrowed = DirectoryFilter {
        batch_year: "2012".to_string(),
        ..Default::default()
    };
    let _visible = narrowed.apply(&profiles);
    assert_eq!(alumni::listings::directory::facets(&profiles), facets);
}

#[test]
fn test_search_arjun_selects_first_record() {
    let profiles = directory_profiles();
    let filter = DirectoryFilter {
        search_text: "arjun".to_string(),
        ..Default::default()
    };
    assert_eq!(filter.apply(&profiles), vec![&profiles[0]]);
}

#[test]
fn test_batch_year_exact() {
    let profiles = directory_profiles();

    let filter = DirectoryFilter {
        batch_year: "2020".to_string(),
        ..Default::default()
    };
    assert_eq!(filter.apply(&profiles), vec![&profiles[1]]);

    let filter = DirectoryFilter {
        batch_year: "1999".to_string(),
        ..Default::default()
    };
    assert!(filter.apply(&profiles).is_empty());

    let criteria = FilterCriteria::new().exact("batch_year", 2020);
    assert_eq!(criteria.apply_refs(&profiles), vec![&profiles[1]]);
}

#[test]
fn test_event_dated_now_is_upcoming() {
    let now = Utc::now();
    let events = vec![
        Event {
            id: Uuid::new_v4(),
            event_date: Some(now),
            ..Default::default()
        },
        Event {
            id: Uuid::new_v4(),
            event_date: Some(now - Duration::milliseconds(1)),
            ..Default::default()
        },
        Event {
            id: Uuid::new_v4(),
            event_date: None,
            ..Default::default()
        },
    ];

    let past = alumni::listings::events::criteria(Timeframe::Past, now).apply_refs(&events);
    let upcoming = alumni::listings::events::criteria(Timeframe::Upcoming, now).apply_refs(&events);
    assert_eq!(upcoming, vec![&events[0]]);
    assert_eq!(past, vec![&events[1], &events[2]]);
}

#[test]
fn test_pagination_over_filtered_view() {
    let profiles = many_profiles();
    let visible = FilterCriteria::new().contains("country", "india").apply(&profiles);
    let total = visible.len();

    let page = paginate(visible, PageRequest::new(2, 4));
    assert_eq!(page.pagination.total, total);
    assert_eq!(page.pagination.page, 2);
    assert!(page.data.len() <= 4);
    assert!(page.pagination.has_prev);
}
