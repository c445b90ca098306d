// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Markup for list items and marker popups.

use crate::models::{Workout, WorkoutDetails, WorkoutType};
use crate::surfaces::PopupOptions;

fn icon(kind: WorkoutType) -> &'static str {
    match kind {
        WorkoutType::Running => "🏃‍♂️",
        WorkoutType::Cycling => "🚴‍♀️",
    }
}

/// Popup options for a workout marker. Popups stay open.
pub fn popup_options(workout: &Workout) -> PopupOptions {
    PopupOptions {
        auto_close: false,
        close_on_click: false,
        class_name: format!("{}-popup", workout.workout_type()),
    }
}

/// Popup text: type icon followed by the label.
pub fn popup_content(workout: &Workout) -> String {
    format!("{} {}", icon(workout.workout_type()), workout.label())
}

fn detail(icon: &str, value: impl std::fmt::Display, unit: &str) -> String {
    format!(
        r#"
  <div class="workout__details">
    <span class="workout__icon">{icon}</span>
    <span class="workout__value">{value}</span>
    <span class="workout__unit">{unit}</span>
  </div>"#
    )
}

/// List item for a workout, tagged with its id for click lookup.
pub fn list_item_html(workout: &Workout) -> String {
    let kind = workout.workout_type();
    let mut html = format!(
        r#"<li class="workout workout--{kind}" data-id="{id}">
  <h2 class="workout__title">{label}</h2>"#,
        id = workout.id(),
        label = workout.label(),
    );
    html.push_str(&detail(icon(kind), workout.distance(), "km"));
    html.push_str(&detail("⏱", workout.duration(), "min"));

    match workout.details() {
        WorkoutDetails::Running { cadence, pace } => {
            html.push_str(&detail("⚡️", format!("{:.1}", pace), "min/km"));
            html.push_str(&detail("🦶🏼", cadence, "spm"));
        }
        WorkoutDetails::Cycling {
            elevation_gain,
            speed,
        } => {
            html.push_str(&detail("⚡️", format!("{:.1}", speed), "km/h"));
            html.push_str(&detail("⛰", elevation_gain, "m"));
        }
    }

    html.push_str("\n</li>");
    html
}
