// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! UI events accepted by the headless driver, one JSON object per line.

use serde::Deserialize;

/// A single user interaction.
///
/// ```json
/// {"event":"map_click","lat":51.5,"lng":-0.12}
/// {"event":"fill","distance":"5","duration":"25","cadence":"170"}
/// {"event":"submit"}
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    MapClick {
        lat: f64,
        lng: f64,
    },
    ChangeType {
        kind: String,
    },
    Fill {
        #[serde(default)]
        distance: String,
        #[serde(default)]
        duration: String,
        #[serde(default)]
        cadence: String,
        #[serde(default)]
        elevation: String,
    },
    Submit,
    ListClick {
        id: String,
    },
    Reset,
}
