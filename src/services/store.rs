// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Ordered workout store with write-through persistence.
//!
//! Insertion order is creation order is display order. The store only grows
//! during a session; it is replaced wholesale on restore and emptied by
//! `clear`. Every append is written through to storage before the in-memory
//! list changes.

use crate::db::KeyValueStorage;
use crate::error::{AppError, Result};
use crate::models::Workout;
use std::iter;

/// The session's workout list and the storage slot it is persisted under.
pub struct WorkoutStore {
    records: Vec<Workout>,
    storage: Box<dyn KeyValueStorage>,
    key: String,
}

impl WorkoutStore {
    /// Create an empty store. Call `restore` to load the previous session.
    pub fn new(storage: Box<dyn KeyValueStorage>, key: impl Into<String>) -> Self {
        Self {
            records: Vec::new(),
            storage,
            key: key.into(),
        }
    }

    pub fn records(&self) -> &[Workout] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<Workout> {
        self.records
    }

    /// Look up a record by id.
    pub fn find(&self, id: &str) -> Option<&Workout> {
        self.records.iter().find(|w| w.id() == id)
    }

    /// Append a record and persist the whole list.
    ///
    /// If the write fails the store is left unchanged. A record whose pace or
    /// speed is not finite is refused: JSON has no encoding for it and the
    /// saved document would no longer restore.
    pub fn append(&mut self, record: Workout) -> Result<&Workout> {
        if !record.details().metric().is_finite() {
            return Err(AppError::Internal(anyhow::anyhow!(
                "refusing to persist workout {} with non-finite {}",
                record.id(),
                record.workout_type()
            )));
        }

        let data = serialize_records(self.records.iter().chain(iter::once(&record)))?;
        self.storage.set(&self.key, &data)?;

        tracing::debug!(
            id = record.id(),
            count = self.records.len() + 1,
            "Workout appended"
        );
        self.records.push(record);
        Ok(&self.records[self.records.len() - 1])
    }

    /// Serialize the full list as stored.
    pub fn serialize(&self) -> Result<String> {
        serialize_records(self.records.iter())
    }

    /// Replace the list with whatever is persisted under the store's key.
    ///
    /// Absent, unreadable or malformed data leaves the store empty. Returns
    /// the number of records restored.
    pub fn restore(&mut self) -> usize {
        let raw = match self.storage.get(&self.key) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "Could not read saved workouts");
                None
            }
        };
        self.restore_from(raw.as_deref())
    }

    /// Replace the list from a raw serialized document.
    pub fn restore_from(&mut self, raw: Option<&str>) -> usize {
        self.records = match raw {
            None => Vec::new(),
            Some(data) => match serde_json::from_str::<Option<Vec<Workout>>>(data) {
                Ok(records) => records.unwrap_or_default(),
                Err(e) => {
                    tracing::warn!(key = %self.key, error = %e, "Ignoring malformed saved workouts");
                    Vec::new()
                }
            },
        };

        tracing::info!(count = self.records.len(), "Workouts restored");
        self.records.len()
    }

    /// Empty the list and erase the persisted copy.
    pub fn clear(&mut self) -> Result<()> {
        self.storage.remove(&self.key)?;
        let dropped = self.records.len();
        self.records.clear();
        tracing::info!(dropped, "Workouts cleared");
        Ok(())
    }
}

fn serialize_records<'a>(records: impl Iterator<Item = &'a Workout>) -> Result<String> {
    let records: Vec<&Workout> = records.collect();
    Ok(serde_json::to_string(&records)?)
}
