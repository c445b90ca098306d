// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Collaborators the session talks to: geolocation, map, form, list and
//! user alerts.
//!
//! A browser build backs these with the DOM and a slippy-map widget; the
//! `headless` implementations record every call instead.

pub mod headless;
pub mod render;

use crate::error::Result;
use crate::models::{Coordinates, FormValues};

/// Opaque reference to a created map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MapHandle(pub u64);

/// Opaque reference to a marker placed on a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerHandle(pub u64);

/// How the map moves to a new center.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanOptions {
    pub animate: bool,
    pub duration_secs: f64,
}

/// Popup behaviour for a workout marker.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupOptions {
    pub auto_close: bool,
    pub close_on_click: bool,
    pub class_name: String,
}

/// Source of the user's current position. Exactly one outcome per request.
pub trait Geolocation {
    fn current_position(&self) -> Result<Coordinates>;
}

pub trait MapWidget: Send {
    fn create_map(&mut self, center: Coordinates, zoom: u8) -> MapHandle;
    fn add_tile_layer(&mut self, map: MapHandle, url: &str, attribution: &str);
    /// Start forwarding clicks on `map` to the session.
    fn subscribe_clicks(&mut self, map: MapHandle);
    fn set_view(&mut self, map: MapHandle, center: Coordinates, zoom: u8, pan: PanOptions);
    fn add_marker(&mut self, map: MapHandle, at: Coordinates) -> MarkerHandle;
    fn bind_popup(&mut self, marker: MarkerHandle, options: &PopupOptions, content: &str);
    fn remove_marker(&mut self, map: MapHandle, marker: MarkerHandle);
}

pub trait FormSurface: Send {
    /// Reveal the form and focus the distance input.
    fn show(&mut self);
    /// Hide the form and clear its numeric inputs.
    fn hide(&mut self);
    fn values(&self) -> FormValues;
    /// Swap the cadence and elevation rows.
    fn toggle_metric_rows(&mut self);
}

/// The workout list. New items go directly under the form, so the most
/// recent workout is shown first.
pub trait ListSurface: Send {
    fn prepend(&mut self, id: &str, html: &str);
    fn clear(&mut self);
}

/// Blocking user-facing alert.
pub trait Notifier: Send {
    fn alert(&mut self, message: &str);
}

/// The UI collaborators owned by a session.
pub struct Surfaces {
    pub map: Box<dyn MapWidget>,
    pub form: Box<dyn FormSurface>,
    pub list: Box<dyn ListSurface>,
    pub notifier: Box<dyn Notifier>,
}
