//! Unit tests for the filter evaluator

use super::*;
use crate::favorites::FavoriteSet;
use crate::models::Mentor;

fn mentor(id: &str, country: &str, tags: &[&str]) -> Mentor {
    Mentor {
        id: id.to_string(),
        name: format!("Mentor {id}"),
        country: country.to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
        spoken_languages: None,
    }
}

fn with_languages(mut m: Mentor, languages: &[&str]) -> Mentor {
    m.spoken_languages = Some(languages.iter().map(|l| l.to_string()).collect());
    m
}

#[test]
fn test_empty_criteria_matches_everything() {
    let mentors = vec![mentor("1", "US", &["go"]), mentor("2", "FR", &["rust"])];
    let favorites = FavoriteSet::from(["2".to_string()]);
    for m in &mentors {
        assert!(matches(m, &FilterCriteria::default(), &favorites));
    }
    assert_eq!(
        apply(&mentors, &FilterCriteria::default(), &favorites),
        vec![0, 1]
    );
}

#[test]
fn test_country_constraint() {
    let mentors = vec![mentor("1", "US", &["go"]), mentor("2", "FR", &["rust"])];
    let criteria = FilterCriteria {
        country: Some("US".to_string()),
        ..Default::default()
    };
    let selected = select(&mentors, &criteria, &FavoriteSet::new());
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, "1");
}

#[test]
fn test_country_is_case_sensitive() {
    let m = mentor("1", "US", &[]);
    let criteria = FilterCriteria {
        country: Some("us".to_string()),
        ..Default::default()
    };
    assert!(!matches(&m, &criteria, &FavoriteSet::new()));
}

#[test]
fn test_inactive_tag_vs_active_tag() {
    let m = mentor("1", "US", &["go", "docker"]);
    let hit = FilterCriteria {
        tag: Some("docker".to_string()),
        ..Default::default()
    };
    let miss = FilterCriteria {
        tag: Some("rust".to_string()),
        ..Default::default()
    };
    assert!(matches(&m, &hit, &FavoriteSet::new()));
    assert!(!matches(&m, &miss, &FavoriteSet::new()));
}

#[test]
fn test_name_is_exact_not_substring() {
    let m = mentor("1", "US", &[]);
    let criteria = FilterCriteria {
        name: Some("Mentor".to_string()),
        ..Default::default()
    };
    // The mentor is named "Mentor 1"; a prefix must not match
    assert!(!matches(&m, &criteria, &FavoriteSet::new()));
}

#[test]
fn test_language_constraint_excludes_missing_language_list() {
    let without = mentor("1", "US", &[]);
    let with = with_languages(mentor("2", "US", &[]), &["Spanish", "English"]);
    let criteria = FilterCriteria {
        language: Some("Spanish".to_string()),
        ..Default::default()
    };
    assert!(!matches(&without, &criteria, &FavoriteSet::new()));
    assert!(matches(&with, &criteria, &FavoriteSet::new()));
}

#[test]
fn test_favorites_only() {
    let mentors = vec![mentor("1", "US", &[]), mentor("2", "FR", &[])];
    let favorites = FavoriteSet::from(["2".to_string()]);
    let criteria = FilterCriteria {
        show_favorites: true,
        ..Default::default()
    };
    let selected = select(&mentors, &criteria, &favorites);
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].id, "2");
}

#[test]
fn test_constraints_are_and_combined() {
    let mentors = vec![
        with_languages(mentor("1", "US", &["rust"]), &["English"]),
        with_languages(mentor("2", "US", &["rust"]), &["French"]),
        with_languages(mentor("3", "FR", &["rust"]), &["English"]),
    ];
    let criteria = FilterCriteria {
        tag: Some("rust".to_string()),
        country: Some("US".to_string()),
        language: Some("English".to_string()),
        ..Default::default()
    };
    assert_eq!(apply(&mentors, &criteria, &FavoriteSet::new()), vec![0]);
}

#[test]
fn test_apply_preserves_original_order() {
    let mentors: Vec<Mentor> = (0..10)
        .map(|i| {
            let country = if i % 3 == 0 { "US" } else { "FR" };
            mentor(&i.to_string(), country, &[])
        })
        .collect();
    let criteria = FilterCriteria {
        country: Some("FR".to_string()),
        ..Default::default()
    };
    let indices = apply(&mentors, &criteria, &FavoriteSet::new());
    assert!(indices.windows(2).all(|w| w[0] < w[1]));
}
