// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session controller.
//!
//! Handles the UI lifecycle:
//! 1. Restore saved workouts and render their list items
//! 2. Ask for the user's position and build the map around it
//! 3. Turn a map click plus a form submit into a new workout
//! 4. Persist, then render marker and list item
//! 5. Re-center the map when a list item is clicked

use crate::config::MapSettings;
use crate::error::{AppError, Result};
use crate::models::{Coordinates, Workout};
use crate::services::store::WorkoutStore;
use crate::services::validation;
use crate::surfaces::{render, Geolocation, MapHandle, MapWidget, MarkerHandle, Surfaces};
use crate::time_utils::format_utc_rfc3339;

/// Owns the workout store and the UI collaborators for one session.
///
/// Handlers take `&mut self` and run to completion; callers must not
/// interleave them (see `session_actor` for a task that serializes them).
pub struct SessionController {
    settings: MapSettings,
    store: WorkoutStore,
    surfaces: Surfaces,
    map: Option<MapHandle>,
    markers: Vec<MarkerHandle>,
    pending_click: Option<Coordinates>,
}

impl SessionController {
    pub fn new(settings: MapSettings, store: WorkoutStore, surfaces: Surfaces) -> Self {
        Self {
            settings,
            store,
            surfaces,
            map: None,
            markers: Vec::new(),
            pending_click: None,
        }
    }

    /// Restore the previous session and request the user's position.
    ///
    /// List items for restored workouts are rendered immediately; their
    /// markers follow once the map exists. A failed position request alerts
    /// the user and leaves the session without a map.
    pub fn init(&mut self, geolocation: &dyn Geolocation) {
        let restored = self.store.restore();
        for workout in self.store.records() {
            self.surfaces
                .list
                .prepend(workout.id(), &render::list_item_html(workout));
        }
        tracing::info!(restored, "Session initialized");

        match geolocation.current_position() {
            Ok(position) => self.load_map(position),
            Err(e) => {
                tracing::warn!(error = %e, "Position unavailable, map disabled");
                self.surfaces
                    .notifier
                    .alert(e.user_message().unwrap_or(AppError::POSITION_ALERT));
            }
        }
    }

    fn load_map(&mut self, center: Coordinates) {
        let widget = self.surfaces.map.as_mut();
        let map = widget.create_map(center, self.settings.zoom);
        widget.add_tile_layer(map, &self.settings.tile_url, &self.settings.tile_attribution);
        widget.subscribe_clicks(map);

        for workout in self.store.records() {
            self.markers.push(render_marker(widget, map, workout));
        }
        self.map = Some(map);

        tracing::info!(
            lat = center.lat,
            lng = center.lng,
            markers = self.markers.len(),
            "Map ready"
        );
    }

    pub fn is_map_ready(&self) -> bool {
        self.map.is_some()
    }

    pub fn store(&self) -> &WorkoutStore {
        &self.store
    }

    /// Remember where the user clicked and open the form.
    pub fn handle_map_click(&mut self, at: Coordinates) -> Result<()> {
        if self.map.is_none() {
            return Err(AppError::MapNotReady);
        }
        tracing::debug!(lat = at.lat, lng = at.lng, "Map clicked");
        self.pending_click = Some(at);
        self.surfaces.form.show();
        Ok(())
    }

    /// The type selector changed: swap cadence and elevation rows.
    pub fn handle_type_change(&mut self) {
        self.surfaces.form.toggle_metric_rows();
    }

    /// Validate the form and record a workout at the last clicked location.
    ///
    /// Invalid input alerts the user and changes nothing; the form stays
    /// open. Returns the new workout's id.
    pub fn handle_submit(&mut self) -> Result<String> {
        let at = self.pending_click.ok_or(AppError::NoLocationSelected)?;
        let form = self.surfaces.form.values();

        let input = match validation::validate(&form) {
            Ok(input) => input,
            Err(e) => {
                tracing::info!(error = %e, "Workout input rejected");
                if let Some(message) = e.user_message() {
                    self.surfaces.notifier.alert(message);
                }
                return Err(e);
            }
        };

        let workout = Workout::from_input(at, input, chrono::Utc::now());
        let workout = self.store.append(workout).inspect_err(|e| {
            tracing::error!(error = %e, "Failed to persist workout");
        })?;

        tracing::info!(
            id = workout.id(),
            kind = %workout.workout_type(),
            distance = workout.distance(),
            duration = workout.duration(),
            created_at = %format_utc_rfc3339(workout.created_at()),
            "Workout recorded"
        );

        if let Some(map) = self.map {
            self.markers
                .push(render_marker(self.surfaces.map.as_mut(), map, workout));
        }
        self.surfaces
            .list
            .prepend(workout.id(), &render::list_item_html(workout));
        self.surfaces.form.hide();
        self.pending_click = None;

        Ok(workout.id().to_string())
    }

    /// A list item was clicked: move the map to that workout.
    ///
    /// Unknown ids are ignored and do not move the map.
    pub fn handle_list_click(&mut self, id: &str) -> Option<&Workout> {
        let Some(workout) = self.store.find(id) else {
            tracing::debug!(id, "List click for unknown workout ignored");
            return None;
        };

        match self.map {
            Some(map) => self.surfaces.map.set_view(
                map,
                workout.location(),
                self.settings.zoom,
                self.settings.pan,
            ),
            None => tracing::debug!(id, "List click before map ready"),
        }
        Some(workout)
    }

    /// Erase every workout, in memory and in storage, and clear the UI.
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;

        if let Some(map) = self.map {
            for marker in self.markers.drain(..) {
                self.surfaces.map.remove_marker(map, marker);
            }
        }
        self.surfaces.list.clear();
        self.surfaces.form.hide();
        self.pending_click = None;
        Ok(())
    }

    /// End the session, handing back the workouts it held.
    pub fn teardown(self) -> Vec<Workout> {
        tracing::info!(count = self.store.len(), "Session closed");
        self.store.into_records()
    }
}

fn render_marker(widget: &mut dyn MapWidget, map: MapHandle, workout: &Workout) -> MarkerHandle {
    let marker = widget.add_marker(map, workout.location());
    widget.bind_popup(
        marker,
        &render::popup_options(workout),
        &render::popup_content(workout),
    );
    marker
}
