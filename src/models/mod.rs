// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Data models for the application.

pub mod event;
pub mod form;
pub mod workout;

pub use event::SessionEvent;
pub use form::FormValues;
pub use workout::{Coordinates, Workout, WorkoutDetails, WorkoutInput, WorkoutType};
