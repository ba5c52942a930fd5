//! Favorites cache file
//!
//! A plain JSON list of mentor ids. Reading never fails: a missing file,
//! unreadable bytes or anything that is not a list of strings all count as
//! an empty cache. Writing is atomic (temp file in the same directory, then
//! rename) so a crash cannot leave a half-written cache behind.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::favorites::FavoriteSet;

/// File-backed favorites cache
#[derive(Debug, Clone)]
pub struct FavoritesCache {
    path: PathBuf,
}

impl FavoritesCache {
    /// Create a cache handle for the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the underlying cache file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the cached favorite ids.
    ///
    /// Never fails; corruption is logged and treated as an empty cache.
    pub fn read(&self) -> FavoriteSet {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return FavoriteSet::new(),
            Err(e) => {
                warn!(path = %self.path.display(), "favorites cache unreadable: {e}");
                return FavoriteSet::new();
            }
        };

        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                warn!(path = %self.path.display(), "favorites cache corrupt, starting empty: {e}");
                FavoriteSet::new()
            }
        }
    }

    /// Persist the favorite ids.
    ///
    /// Failure is logged and swallowed; the in-memory set stays authoritative
    /// either way.
    pub fn write(&self, favorites: &FavoriteSet) {
        if let Err(e) = self.try_write(favorites) {
            warn!(path = %self.path.display(), "favorites cache write failed: {e}");
        }
    }

    fn try_write(&self, favorites: &FavoriteSet) -> io::Result<()> {
        let ids: Vec<&String> = favorites.iter().collect();
        let body = serde_json::to_string(&ids)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        // Write to a temp file in the target directory, then rename.
        // rename is atomic on the same filesystem.
        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        let temp = tempfile::NamedTempFile::new_in(parent)?;
        let temp_path = temp.into_temp_path();
        fs::write(&temp_path, body.as_bytes())?;

        if let Err(e) = fs::rename(&temp_path, &self.path) {
            let _ = fs::remove_file(&temp_path);
            return Err(e);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn set(ids: &[&str]) -> FavoriteSet {
        ids.iter().map(|id| id.to_string()).collect()
    }

    #[test]
    fn test_missing_file_reads_empty() {
        let dir = TempDir::new().unwrap();
        let cache = FavoritesCache::new(dir.path().join("favorites.json"));
        assert!(cache.read().is_empty());
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let cache = FavoritesCache::new(dir.path().join("favorites.json"));
        cache.write(&set(&["a", "b"]));
        assert_eq!(cache.read(), set(&["a", "b"]));
    }

    #[test]
    fn test_corrupt_json_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, "{not json").unwrap();
        assert!(FavoritesCache::new(path).read().is_empty());
    }

    #[test]
    fn test_non_list_content_reads_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, r#"{"a": 1}"#).unwrap();
        assert!(FavoritesCache::new(path).read().is_empty());
    }

    #[test]
    fn test_duplicate_ids_collapse_into_a_set() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("favorites.json");
        fs::write(&path, r#"["a", "a", "b"]"#).unwrap();
        assert_eq!(FavoritesCache::new(path).read(), set(&["a", "b"]));
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let cache = FavoritesCache::new(dir.path().join("nested/dir/favorites.json"));
        cache.write(&set(&["x"]));
        assert_eq!(cache.read(), set(&["x"]));
    }

    #[test]
    fn test_overwrite_replaces_contents() {
        let dir = TempDir::new().unwrap();
        let cache = FavoritesCache::new(dir.path().join("favorites.json"));
        cache.write(&set(&["a", "b"]));
        cache.write(&set(&["c"]));
        assert_eq!(cache.read(), set(&["c"]));
    }
}
