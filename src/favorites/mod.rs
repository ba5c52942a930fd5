//! Favorite mentors
//!
//! The favorite set has two sources of truth at startup: the local cache and
//! the remote store. This module holds the pure logic that merges them into
//! the single authoritative in-memory set and computes what the server still
//! needs to be told about. All I/O stays with the callers.

mod reconciler;


pub use reconciler::{reconcile, toggle, FavoriteSet, Reconciliation};
