// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Headless collaborators that log and record every call.
//!
//! Each type is a cheap handle over shared state: clone it before handing it
//! to a session and keep the clone to drive input or inspect output.

use crate::error::{AppError, Result};
use crate::models::{Coordinates, FormValues};
use crate::surfaces::{
    FormSurface, Geolocation, ListSurface, MapHandle, MapWidget, MarkerHandle, Notifier,
    PanOptions, PopupOptions,
};
use std::sync::{Arc, Mutex, MutexGuard};

fn lock<T>(m: &Arc<Mutex<T>>) -> MutexGuard<'_, T> {
    m.lock().unwrap_or_else(|e| e.into_inner())
}

// ─── Geolocation ─────────────────────────────────────────────

/// Geolocation that reports a fixed position, or none at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedPosition(Option<Coordinates>);

impl FixedPosition {
    pub fn new(position: Option<Coordinates>) -> Self {
        Self(position)
    }

    pub fn unavailable() -> Self {
        Self(None)
    }
}

impl Geolocation for FixedPosition {
    fn current_position(&self) -> Result<Coordinates> {
        self.0.ok_or_else(|| {
            AppError::PositionUnavailable("no position fix configured".to_string())
        })
    }
}

// ─── Map ─────────────────────────────────────────────────────

/// A call made on the map widget.
#[derive(Debug, Clone, PartialEq)]
pub enum MapCommand {
    Create {
        map: MapHandle,
        center: Coordinates,
        zoom: u8,
    },
    TileLayer {
        map: MapHandle,
        url: String,
    },
    SubscribeClicks {
        map: MapHandle,
    },
    SetView {
        map: MapHandle,
        center: Coordinates,
        zoom: u8,
        pan: PanOptions,
    },
    AddMarker {
        map: MapHandle,
        marker: MarkerHandle,
        at: Coordinates,
    },
    BindPopup {
        marker: MarkerHandle,
        options: PopupOptions,
        content: String,
    },
    RemoveMarker {
        map: MapHandle,
        marker: MarkerHandle,
    },
}

#[derive(Debug, Default)]
struct MapState {
    next_handle: u64,
    commands: Vec<MapCommand>,
    markers: Vec<MarkerHandle>,
}

impl MapState {
    fn next(&mut self) -> u64 {
        self.next_handle += 1;
        self.next_handle
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessMap {
    state: Arc<Mutex<MapState>>,
}

impl HeadlessMap {
    pub fn commands(&self) -> Vec<MapCommand> {
        lock(&self.state).commands.clone()
    }

    /// Markers currently on the map.
    pub fn marker_count(&self) -> usize {
        lock(&self.state).markers.len()
    }

    pub fn set_view_count(&self) -> usize {
        lock(&self.state)
            .commands
            .iter()
            .filter(|c| matches!(c, MapCommand::SetView { .. }))
            .count()
    }
}

impl MapWidget for HeadlessMap {
    fn create_map(&mut self, center: Coordinates, zoom: u8) -> MapHandle {
        let mut state = lock(&self.state);
        let map = MapHandle(state.next());
        tracing::info!(lat = center.lat, lng = center.lng, zoom, "Map created");
        state.commands.push(MapCommand::Create { map, center, zoom });
        map
    }

    fn add_tile_layer(&mut self, map: MapHandle, url: &str, attribution: &str) {
        tracing::debug!(url, attribution, "Tile layer added");
        lock(&self.state).commands.push(MapCommand::TileLayer {
            map,
            url: url.to_string(),
        });
    }

    fn subscribe_clicks(&mut self, map: MapHandle) {
        lock(&self.state)
            .commands
            .push(MapCommand::SubscribeClicks { map });
    }

    fn set_view(&mut self, map: MapHandle, center: Coordinates, zoom: u8, pan: PanOptions) {
        tracing::info!(lat = center.lat, lng = center.lng, zoom, "Map view moved");
        lock(&self.state).commands.push(MapCommand::SetView {
            map,
            center,
            zoom,
            pan,
        });
    }

    fn add_marker(&mut self, map: MapHandle, at: Coordinates) -> MarkerHandle {
        let mut state = lock(&self.state);
        let marker = MarkerHandle(state.next());
        state.markers.push(marker);
        state
            .commands
            .push(MapCommand::AddMarker { map, marker, at });
        marker
    }

    fn bind_popup(&mut self, marker: MarkerHandle, options: &PopupOptions, content: &str) {
        tracing::info!(marker = marker.0, popup = content, "Marker placed");
        lock(&self.state).commands.push(MapCommand::BindPopup {
            marker,
            options: options.clone(),
            content: content.to_string(),
        });
    }

    fn remove_marker(&mut self, map: MapHandle, marker: MarkerHandle) {
        let mut state = lock(&self.state);
        state.markers.retain(|m| *m != marker);
        state
            .commands
            .push(MapCommand::RemoveMarker { map, marker });
    }
}

// ─── Form ────────────────────────────────────────────────────

#[derive(Debug)]
struct FormState {
    values: FormValues,
    visible: bool,
    cadence_row_visible: bool,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            values: FormValues::default(),
            visible: false,
            cadence_row_visible: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeadlessForm {
    state: Arc<Mutex<FormState>>,
}

impl HeadlessForm {
    /// Type into the numeric inputs, as the user would.
    pub fn fill(&self, distance: &str, duration: &str, cadence: &str, elevation: &str) {
        let mut state = lock(&self.state);
        state.values.distance = distance.to_string();
        state.values.duration = duration.to_string();
        state.values.cadence = cadence.to_string();
        state.values.elevation = elevation.to_string();
    }

    /// Change the type selector value.
    pub fn select_kind(&self, kind: &str) {
        lock(&self.state).values.kind = kind.to_string();
    }

    pub fn is_visible(&self) -> bool {
        lock(&self.state).visible
    }

    pub fn cadence_row_visible(&self) -> bool {
        lock(&self.state).cadence_row_visible
    }
}

impl FormSurface for HeadlessForm {
    fn show(&mut self) {
        lock(&self.state).visible = true;
        tracing::debug!("Form shown");
    }

    fn hide(&mut self) {
        let mut state = lock(&self.state);
        state.visible = false;
        state.values.clear_inputs();
        tracing::debug!("Form hidden");
    }

    fn values(&self) -> FormValues {
        lock(&self.state).values.clone()
    }

    fn toggle_metric_rows(&mut self) {
        let mut state = lock(&self.state);
        state.cadence_row_visible = !state.cadence_row_visible;
    }
}

// ─── List ────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct HeadlessList {
    items: Arc<Mutex<Vec<(String, String)>>>,
}

impl HeadlessList {
    /// Rendered item ids, top to bottom.
    pub fn ids(&self) -> Vec<String> {
        lock(&self.items).iter().map(|(id, _)| id.clone()).collect()
    }

    pub fn html(&self, id: &str) -> Option<String> {
        lock(&self.items)
            .iter()
            .find(|(item_id, _)| item_id == id)
            .map(|(_, html)| html.clone())
    }

    pub fn len(&self) -> usize {
        lock(&self.items).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ListSurface for HeadlessList {
    fn prepend(&mut self, id: &str, html: &str) {
        tracing::debug!(id, "List item rendered");
        lock(&self.items).insert(0, (id.to_string(), html.to_string()));
    }

    fn clear(&mut self) {
        lock(&self.items).clear();
    }
}

// ─── Alerts ──────────────────────────────────────────────────

/// Notifier that logs each alert and keeps it for inspection.
#[derive(Debug, Clone, Default)]
pub struct LogNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl LogNotifier {
    pub fn messages(&self) -> Vec<String> {
        lock(&self.messages).clone()
    }
}

impl Notifier for LogNotifier {
    fn alert(&mut self, message: &str) {
        tracing::warn!(message, "User alert");
        lock(&self.messages).push(message.to_string());
    }
}
