//! Input cache for storing puzzle inputs locally

use crate::error::CacheError;
use std::fs;
use std::io::Write;
use std::path::PathBuf;
use tempfile::NamedTempFile;

/// File-based cache for puzzle inputs
///
/// Directory structure: `{root}/{year}/Day{day}.txt`. Entries are written
/// once, through a temporary file in the same directory, so a failed write
/// never leaves a partial entry behind.
pub struct InputCache {
    root: PathBuf,
}

impl InputCache {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn year_dir(&self, year: u16) -> PathBuf {
        self.root.join(year.to_string())
    }

    /// Get the cache path for a specific year/day
    pub fn cache_path(&self, year: u16, day: u8) -> PathBuf {
        self.year_dir(year).join(format!("Day{}.txt", day))
    }

    /// Get cached input or None if not cached
    pub fn get(&self, year: u16, day: u8) -> Result<Option<String>, CacheError> {
        let path = self.cache_path(year, day);
        if !path.is_file() {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)?;
        log::debug!("cache hit {}", path.display());
        Ok(Some(content))
    }

    /// Store input in cache
    pub fn put(&self, year: u16, day: u8, input: &str) -> Result<(), CacheError> {
        let dir = self.year_dir(year);
        fs::create_dir_all(&dir).map_err(|e| {
            CacheError::DirCreation(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let mut file = NamedTempFile::new_in(&dir)?;
        file.write_all(input.as_bytes())?;
        file.flush()?;

        let path = self.cache_path(year, day);
        file.persist(&path)?;
        log::info!("cached input at {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cache_path_format() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());

        assert_eq!(
            cache.cache_path(2024, 1),
            temp.path().join("2024").join("Day1.txt")
        );
        assert_eq!(
            cache.cache_path(2023, 25),
            temp.path().join("2023").join("Day25.txt")
        );
    }

    #[test]
    fn test_cache_roundtrip() {
        let temp = TempDir::new().unwrap();
        let cache = InputCache::new(temp.path().to_path_buf());

        assert!(cache.get(2024, 1).unwrap().is_none());

        let input = "test input\nline 2\n";
        cache.put(2024, 1, input).unwrap();

        assert!(cache.cache_path(2024, 1).is_file());
        assert_eq!(cache.get(2024, 1).unwrap(), Some(input.to_string()));
        // only the entry itself remains in the year directory
        assert_eq!(fs::read_dir(temp.path().join("2024")).unwrap().count(), 1);
    }

    #[test]
    fn test_root_is_a_file() {
        let temp = TempDir::new().unwrap();
        let root = temp.path().join("occupied");
        fs::write(&root, "not a directory").unwrap();

        let cache = InputCache::new(root);
        assert!(matches!(
            cache.put(2023, 10, "input"),
            Err(CacheError::DirCreation(_))
        ));
        assert!(cache.get(2023, 10).unwrap().is_none());
    }
}
