//! Window title generation
//!
//! Builds a human-readable title from the active filter dimensions so the
//! browser tab reflects what the user is looking at.

use crate::filter::FilterCriteria;

/// Title shown when no filter is active
const BASE_TITLE: &str = "Find a mentor";

/// Window title for the current filter selection.
///
/// Examples: "Find a mentor", "Find a JavaScript mentor from Germany",
/// "Find a mentor speaking Spanish".
pub fn window_title(criteria: &FilterCriteria) -> String {
    if criteria.tag.is_none()
        && criteria.name.is_none()
        && criteria.country.is_none()
        && criteria.language.is_none()
    {
        return BASE_TITLE.to_string();
    }

    let mut title = String::from("Find a ");
    if let Some(tag) = &criteria.tag {
        title.push_str(tag);
        title.push(' ');
    }
    title.push_str("mentor");

    if let Some(name) = &criteria.name {
        title.push_str(" named ");
        title.push_str(name);
    }
    if let Some(country) = &criteria.country {
        title.push_str(" from ");
        title.push_str(country);
    }
    if let Some(language) = &criteria.language {
        title.push_str(" speaking ");
        title.push_str(language);
    }
    title
}
