// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use trailmark::config::MapSettings;
use trailmark::db::{keys, KeyValueStorage, MemoryStorage};
use trailmark::models::Coordinates;
use trailmark::services::{SessionController, WorkoutStore};
use trailmark::surfaces::headless::{
    FixedPosition, HeadlessForm, HeadlessList, HeadlessMap, LogNotifier,
};
use trailmark::surfaces::Surfaces;

/// Where the headless geolocation puts the user.
#[allow(dead_code)]
pub const HOME: Coordinates = Coordinates {
    lat: 51.5,
    lng: -0.12,
};

/// Handles onto the collaborators of a test session.
#[allow(dead_code)]
pub struct Probes {
    pub storage: MemoryStorage,
    pub map: HeadlessMap,
    pub form: HeadlessForm,
    pub list: HeadlessList,
    pub notifier: LogNotifier,
}

/// Create a session over `storage` without initializing it.
#[allow(dead_code)]
pub fn create_session(storage: MemoryStorage) -> (SessionController, Probes) {
    let probes = Probes {
        storage,
        map: HeadlessMap::default(),
        form: HeadlessForm::default(),
        list: HeadlessList::default(),
        notifier: LogNotifier::default(),
    };
    let surfaces = Surfaces {
        map: Box::new(probes.map.clone()),
        form: Box::new(probes.form.clone()),
        list: Box::new(probes.list.clone()),
        notifier: Box::new(probes.notifier.clone()),
    };
    let store = WorkoutStore::new(Box::new(probes.storage.clone()), keys::WORKOUTS);
    let controller = SessionController::new(MapSettings::default(), store, surfaces);
    (controller, probes)
}

/// Create a session over `storage` and initialize it with a position fix.
#[allow(dead_code)]
pub fn started_session(storage: MemoryStorage) -> (SessionController, Probes) {
    let (mut controller, probes) = create_session(storage);
    controller.init(&FixedPosition::new(Some(HOME)));
    (controller, probes)
}

/// Click the map, fill the form and submit a run.
#[allow(dead_code)]
pub fn log_run(
    controller: &mut SessionController,
    probes: &Probes,
    at: Coordinates,
    distance: &str,
    duration: &str,
    cadence: &str,
) -> trailmark::error::Result<String> {
    controller.handle_map_click(at)?;
    probes.form.select_kind("running");
    probes.form.fill(distance, duration, cadence, "");
    controller.handle_submit()
}

/// Click the map, fill the form and submit a ride.
#[allow(dead_code)]
pub fn log_ride(
    controller: &mut SessionController,
    probes: &Probes,
    at: Coordinates,
    distance: &str,
    duration: &str,
    elevation: &str,
) -> trailmark::error::Result<String> {
    controller.handle_map_click(at)?;
    probes.form.select_kind("cycling");
    probes.form.fill(distance, duration, "", elevation);
    controller.handle_submit()
}

/// Raw saved document, if any.
#[allow(dead_code)]
pub fn saved(storage: &MemoryStorage) -> Option<String> {
    storage
        .get(keys::WORKOUTS)
        .expect("memory storage reads never fail")
}
