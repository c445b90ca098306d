// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-memory storage backend.
//!
//! Clones share the same map, so a test can keep a handle and inspect what
//! the store wrote through it.

use crate::db::KeyValueStorage;
use crate::error::{AppError, Result};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
    read_only: bool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose writes always fail, for exercising error paths.
    pub fn read_only() -> Self {
        Self {
            read_only: true,
            ..Self::default()
        }
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_writable(&self) -> Result<()> {
        if self.read_only {
            return Err(AppError::Storage("storage is read-only".to_string()));
        }
        Ok(())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.entries().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.check_writable()?;
        self.entries().remove(key);
        Ok(())
    }
}
