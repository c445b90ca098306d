// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Trailmark: log runs and rides by clicking where they happened.
//!
//! This crate provides the workout model, the persisted workout store and
//! the session controller that ties map clicks and form submissions to new
//! entries.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod surfaces;
pub mod time_utils;

use config::Config;
use db::FileStorage;
use services::{SessionController, WorkoutStore};
use surfaces::Surfaces;

/// Build a session persisted to the configured storage file.
pub fn build_session(config: &Config, surfaces: Surfaces) -> SessionController {
    let storage = FileStorage::new(&config.storage_path);
    let store = WorkoutStore::new(Box::new(storage), config.storage_key.clone());
    SessionController::new(config.map.clone(), store, surfaces)
}
