//! Filter criteria
//!
//! Each dimension is independently optional; absence means no constraint.

use serde::{Deserialize, Serialize};

/// The user's current filter selection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    /// Skill tag the mentor must carry
    pub tag: Option<String>,

    /// Country of residence (exact, case-sensitive)
    pub country: Option<String>,

    /// Display name (exact equality, not substring search)
    pub name: Option<String>,

    /// Language the mentor must speak
    pub language: Option<String>,

    /// Restrict the list to favorited mentors
    pub show_favorites: bool,
}

impl FilterCriteria {
    /// Returns true if no constraint is active
    pub fn is_empty(&self) -> bool {
        self.tag.is_none()
            && self.country.is_none()
            && self.name.is_none()
            && self.language.is_none()
            && !self.show_favorites
    }
}
