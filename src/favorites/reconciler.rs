//! Favorites reconciliation
//!
//! Pure set arithmetic over mentor ids. Cannot fail given well-typed input;
//! malformed cache contents are normalized to an empty set before they get
//! here (see the storage module).

use std::collections::BTreeSet;

/// Set of favorited mentor ids. Duplicates impossible, order irrelevant
/// for matching.
pub type FavoriteSet = BTreeSet<String>;

/// Outcome of merging the locally cached and remotely stored favorite sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Union of both sources; authoritative for the rest of the session
    pub merged: FavoriteSet,

    /// Ids present locally but unknown to the remote store. The caller
    /// issues exactly one push carrying these when non-empty.
    pub to_push: FavoriteSet,
}

/// Merge the local cache with the server's favorite ids.
///
/// The merged set is a superset of both inputs. Reconciling the output
/// against itself yields an empty push delta, so the operation is idempotent.
pub fn reconcile(local: &FavoriteSet, remote: &FavoriteSet) -> Reconciliation {
    Reconciliation {
        merged: local.union(remote).cloned().collect(),
        to_push: local.difference(remote).cloned().collect(),
    }
}

/// Add the id if absent, remove it if present.
///
/// Returns a fresh set and leaves the input untouched, so callers comparing
/// before/after references for change detection behave correctly.
pub fn toggle(mentor_id: &str, current: &FavoriteSet) -> FavoriteSet {
    let mut next = current.clone();
    if !next.remove(mentor_id) {
        next.insert(mentor_id.to_string());
    }
    next
}
