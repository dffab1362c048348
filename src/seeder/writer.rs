//! Local storage of downloaded datasets

use crate::seeder::SeedError;
use std::path::PathBuf;
use tracing::debug;

/// Directory holding one JSON file per year
#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Destination file for `year`; depends on nothing but the year
    pub fn path_for(&self, year: i32) -> PathBuf {
        self.root.join(format!("best-books-{}.json", year))
    }

    /// Create the directory if it is missing
    pub fn ensure_exists(&self, year: i32) -> Result<(), SeedError> {
        std::fs::create_dir_all(&self.root).map_err(|e| {
            SeedError::write(
                year,
                format!("cannot create directory {}: {}", self.root.display(), e),
            )
        })
    }

    /// Write `payload` verbatim to the year's file, replacing any previous copy
    pub fn write(&self, year: i32, payload: &[u8]) -> Result<PathBuf, SeedError> {
        self.ensure_exists(year)?;

        let path = self.path_for(year);
        std::fs::write(&path, payload).map_err(|e| {
            SeedError::write(year, format!("cannot write {}: {}", path.display(), e))
        })?;

        debug!("Wrote {} bytes to {}", payload.len(), path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_path_is_derived_from_year() {
        let dir = DataDir::new("data");
        assert_eq!(dir.path_for(2025), PathBuf::from("data/best-books-2025.json"));
        assert_eq!(dir.path_for(2025), dir.path_for(2025));
        assert_ne!(dir.path_for(2024), dir.path_for(2025));
    }

    #[test]
    fn test_write_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let dir = DataDir::new(temp_dir.path().join("nested").join("data"));

        let path = dir.write(2025, br#"{"books":[]}"#).unwrap();
        assert_eq!(path, dir.path_for(2025));
        assert_eq!(std::fs::read(&path).unwrap(), br#"{"books":[]}"#.to_vec());
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let dir = DataDir::new(temp_dir.path());

        dir.write(2020, b"first payload that is longer").unwrap();
        let path = dir.write(2020, b"second").unwrap();

        assert_eq!(std::fs::read(&path).unwrap(), b"second".to_vec());
        assert_eq!(std::fs::read_dir(temp_dir.path()).unwrap().count(), 1);
    }

    #[test]
    fn test_write_failure_is_write_error() {
        let temp_dir = TempDir::new().unwrap();
        // A regular file where the directory should be
        let blocker = temp_dir.path().join("data");
        std::fs::write(&blocker, b"not a directory").unwrap();

        let err = DataDir::new(&blocker).write(2016, b"{}").unwrap_err();
        assert!(matches!(err, SeedError::Write { year: 2016, .. }));
    }
}
