// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! File-backed storage.
//!
//! All keys live in one JSON object on disk. Every write rewrites the whole
//! file through a sibling temp file and a rename, so a crash mid-write leaves
//! the previous contents intact.

use crate::db::KeyValueStorage;
use crate::error::{AppError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(data) if data.trim().is_empty() => Ok(None),
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let Some(data) = self.read()? else {
            return Ok(BTreeMap::new());
        };
        serde_json::from_str(&data).map_err(|e| {
            AppError::Storage(format!("Corrupt storage file {}: {}", self.path.display(), e))
        })
    }

    /// Load entries ahead of a write. A corrupt file is moved aside to
    /// `<name>.corrupt` and writing starts from empty.
    fn load_for_write(&self) -> Result<BTreeMap<String, String>> {
        let Some(data) = self.read()? else {
            return Ok(BTreeMap::new());
        };
        match serde_json::from_str(&data) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                let aside = self.corrupt_path();
                tracing::warn!(
                    path = %self.path.display(),
                    moved_to = %aside.display(),
                    error = %e,
                    "Corrupt storage file replaced"
                );
                fs::rename(&self.path, &aside).map_err(|e| {
                    AppError::Storage(format!(
                        "Failed to move aside {}: {}",
                        self.path.display(),
                        e
                    ))
                })?;
                Ok(BTreeMap::new())
            }
        }
    }

    fn corrupt_path(&self) -> PathBuf {
        self.path.with_extension("corrupt")
    }

    fn save(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let data = serde_json::to_string_pretty(entries)?;
        let tmp = self.path.with_extension("tmp");

        fs::write(&tmp, data).map_err(|e| {
            AppError::Storage(format!("Failed to write {}: {}", tmp.display(), e))
        })?;
        fs::rename(&tmp, &self.path).map_err(|e| {
            AppError::Storage(format!(
                "Failed to replace {}: {}",
                self.path.display(),
                e
            ))
        })?;

        tracing::debug!(path = %self.path.display(), keys = entries.len(), "Storage file written");
        Ok(())
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load_for_write()?;
        entries.insert(key.to_string(), value.to_string());
        self.save(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.load_for_write()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.save(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("absent.json"));

        assert_eq!(storage.get("workouts").unwrap(), None);
    }

    #[test]
    fn test_set_get_remove() {
        let dir = tempfile::tempdir().unwrap();
        let mut storage = FileStorage::new(dir.path().join("store.json"));

        storage.set("workouts", "[1,2]").unwrap();
        storage.set("other", "x").unwrap();
        assert_eq!(storage.get("workouts").unwrap().as_deref(), Some("[1,2]"));

        storage.remove("workouts").unwrap();
        assert_eq!(storage.get("workouts").unwrap(), None);
        assert_eq!(storage.get("other").unwrap().as_deref(), Some("x"));
    }

    #[test]
    fn test_values_survive_new_instance() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        FileStorage::new(&path).set("workouts", "[]").unwrap();
        let reopened = FileStorage::new(&path);

        assert_eq!(reopened.get("workouts").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let storage = FileStorage::new(&path);
        assert!(matches!(storage.get("workouts"), Err(AppError::Storage(_))));
    }

    #[test]
    fn test_write_over_corrupt_file_moves_it_aside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{{{{").unwrap();

        let mut storage = FileStorage::new(&path);
        storage.set("workouts", "[]").unwrap();

        assert_eq!(storage.get("workouts").unwrap().as_deref(), Some("[]"));
        assert_eq!(
            fs::read_to_string(dir.path().join("store.corrupt")).unwrap(),
            "{{{{"
        );
    }

    #[test]
    fn test_remove_on_corrupt_file_succeeds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "not json").unwrap();

        let mut storage = FileStorage::new(&path);
        storage.remove("workouts").unwrap();

        assert_eq!(storage.get("workouts").unwrap(), None);
    }
}
