//! Local persistence
//!
//! The favorites cache file, the local source of truth the session reads at
//! startup before the remote store answers.

pub mod cache;

pub use cache::FavoritesCache;
