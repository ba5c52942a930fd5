//! Filter evaluation
//!
//! Pure functions, no I/O. `matches` decides inclusion for a single mentor;
//! `apply` runs it over a list, returning indices so the caller keeps one
//! owned mentor list and cheap filtered views.

use crate::favorites::FavoriteSet;
use crate::filter::FilterCriteria;
use crate::models::Mentor;

/// Check a single mentor against all active constraints.
///
/// Returns true iff every active dimension holds. A mentor without a
/// language list fails an active language constraint (not an error).
pub fn matches(mentor: &Mentor, criteria: &FilterCriteria, favorites: &FavoriteSet) -> bool {
    if let Some(tag) = &criteria.tag {
        if !mentor.has_tag(tag) {
            return false;
        }
    }

    if let Some(country) = &criteria.country {
        if mentor.country != *country {
            return false;
        }
    }

    if let Some(name) = &criteria.name {
        if mentor.name != *name {
            return false;
        }
    }

    if let Some(language) = &criteria.language {
        if !mentor.speaks(language) {
            return false;
        }
    }

    if criteria.show_favorites && !favorites.contains(&mentor.id) {
        return false;
    }

    true
}

/// Apply the criteria to a slice of mentors, returning indices of matches.
///
/// The output is a subsequence of `0..mentors.len()` in original order.
pub fn apply(mentors: &[Mentor], criteria: &FilterCriteria, favorites: &FavoriteSet) -> Vec<usize> {
    if criteria.is_empty() {
        return (0..mentors.len()).collect();
    }

    mentors
        .iter()
        .enumerate()
        .filter(|(_, mentor)| matches(mentor, criteria, favorites))
        .map(|(idx, _)| idx)
        .collect()
}

/// Borrowing convenience over `apply` for callers that want the records
pub fn select<'a>(
    mentors: &'a [Mentor],
    criteria: &FilterCriteria,
    favorites: &FavoriteSet,
) -> Vec<&'a Mentor> {
    apply(mentors, criteria, favorites)
        .into_iter()
        .map(|idx| &mentors[idx])
        .collect()
}
