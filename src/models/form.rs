// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Raw form values as read from the form surface.

use serde::{Deserialize, Serialize};

/// Current contents of the workout form.
///
/// Numeric fields are kept as typed text; parsing and validation happen in
/// `services::validation`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormValues {
    /// Type selector value ("running" or "cycling")
    pub kind: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            kind: "running".to_string(),
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
        }
    }
}

impl FormValues {
    /// Empty the numeric inputs, keeping the selected type.
    pub fn clear_inputs(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation.clear();
    }
}
