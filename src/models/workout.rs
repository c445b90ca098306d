// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout record model for storage and rendering.
//!
//! A record is immutable once built: the derived metric (pace or speed) and
//! the display label are computed exactly once, in the constructor.

use crate::time_utils::month_name;
use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// A map position, stored as `[lat, lng]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl From<[f64; 2]> for Coordinates {
    fn from([lat, lng]: [f64; 2]) -> Self {
        Self { lat, lng }
    }
}

impl From<Coordinates> for [f64; 2] {
    fn from(c: Coordinates) -> Self {
        [c.lat, c.lng]
    }
}

/// Workout discriminant, as written in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    pub fn as_str(self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    /// Capitalized name used in labels ("Running", "Cycling").
    pub fn title(self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "running" => Ok(WorkoutType::Running),
            "cycling" => Ok(WorkoutType::Cycling),
            other => Err(format!("unknown workout type '{}'", other)),
        }
    }
}

/// Variant-specific input and derived metric.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum WorkoutDetails {
    Running {
        /// Steps per minute
        cadence: f64,
        /// Minutes per kilometer
        pace: f64,
    },
    Cycling {
        /// Meters; may be zero or negative
        #[serde(rename = "elevationGain")]
        elevation_gain: f64,
        /// Kilometers per hour
        speed: f64,
    },
}

impl WorkoutDetails {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            WorkoutDetails::Running { .. } => WorkoutType::Running,
            WorkoutDetails::Cycling { .. } => WorkoutType::Cycling,
        }
    }

    /// The derived metric: pace for running, speed for cycling.
    pub fn metric(&self) -> f64 {
        match self {
            WorkoutDetails::Running { pace, .. } => *pace,
            WorkoutDetails::Cycling { speed, .. } => *speed,
        }
    }
}

/// Minutes per kilometer.
pub fn pace(distance: f64, duration: f64) -> f64 {
    duration / distance
}

/// Kilometers per hour.
pub fn speed(distance: f64, duration: f64) -> f64 {
    distance / (duration / 60.0)
}

/// Validated numeric input for a new workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutInput {
    Running {
        distance: f64,
        duration: f64,
        cadence: f64,
    },
    Cycling {
        distance: f64,
        duration: f64,
        elevation_gain: f64,
    },
}

impl WorkoutInput {
    /// The pace or speed a workout built from this input would carry.
    pub fn metric(&self) -> f64 {
        match *self {
            WorkoutInput::Running {
                distance, duration, ..
            } => pace(distance, duration),
            WorkoutInput::Cycling {
                distance, duration, ..
            } => speed(distance, duration),
        }
    }
}

/// One logged workout.
///
/// Field names on the wire match what the browser build kept in local
/// storage, so older documents restore unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Workout {
    #[serde(rename = "date")]
    #[cfg_attr(feature = "binding-generation", ts(type = "string"))]
    created_at: DateTime<Utc>,
    id: String,
    #[serde(rename = "coords")]
    #[cfg_attr(feature = "binding-generation", ts(type = "[number, number]"))]
    location: Coordinates,
    /// Kilometers
    distance: f64,
    /// Minutes
    duration: f64,
    #[serde(rename = "description")]
    label: String,
    #[serde(flatten)]
    details: WorkoutDetails,
}

impl Workout {
    /// Build a running workout. Pace is `duration / distance`.
    pub fn running(
        location: Coordinates,
        distance: f64,
        duration: f64,
        cadence: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let pace = pace(distance, duration);
        Self::build(
            location,
            distance,
            duration,
            WorkoutDetails::Running { cadence, pace },
            created_at,
        )
    }

    /// Build a cycling workout. Speed is `distance / (duration / 60)`.
    pub fn cycling(
        location: Coordinates,
        distance: f64,
        duration: f64,
        elevation_gain: f64,
        created_at: DateTime<Utc>,
    ) -> Self {
        let speed = speed(distance, duration);
        Self::build(
            location,
            distance,
            duration,
            WorkoutDetails::Cycling {
                elevation_gain,
                speed,
            },
            created_at,
        )
    }

    /// Build the variant matching already-validated input.
    pub fn from_input(location: Coordinates, input: WorkoutInput, created_at: DateTime<Utc>) -> Self {
        match input {
            WorkoutInput::Running {
                distance,
                duration,
                cadence,
            } => Self::running(location, distance, duration, cadence, created_at),
            WorkoutInput::Cycling {
                distance,
                duration,
                elevation_gain,
            } => Self::cycling(location, distance, duration, elevation_gain, created_at),
        }
    }

    fn build(
        location: Coordinates,
        distance: f64,
        duration: f64,
        details: WorkoutDetails,
        created_at: DateTime<Utc>,
    ) -> Self {
        let label = build_label(details.workout_type(), created_at);
        Self {
            created_at,
            id: uuid::Uuid::new_v4().to_string(),
            location,
            distance,
            duration,
            label,
            details,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn location(&self) -> Coordinates {
        self.location
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn details(&self) -> &WorkoutDetails {
        &self.details
    }

    pub fn workout_type(&self) -> WorkoutType {
        self.details.workout_type()
    }
}

/// "Running on March". Only the local calendar month is used, never the day
/// or year.
fn build_label(kind: WorkoutType, created_at: DateTime<Utc>) -> String {
    let local = created_at.with_timezone(&Local);
    format!("{} on {}", kind.title(), month_name(&local))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn march() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 2, 8, 15, 0).unwrap()
    }

    #[test]
    fn test_running_pace_and_label() {
        let w = Workout::running(Coordinates::new(51.5, -0.12), 5.0, 25.0, 170.0, march());

        assert_eq!(w.workout_type(), WorkoutType::Running);
        assert_eq!(w.label(), "Running on March");
        match w.details() {
            WorkoutDetails::Running { cadence, pace } => {
                assert_eq!(*cadence, 170.0);
                assert_eq!(*pace, 25.0 / 5.0);
            }
            other => panic!("expected running details, got {:?}", other),
        }
    }

    #[test]
    fn test_cycling_speed_and_label() {
        let w = Workout::cycling(Coordinates::new(51.5, -0.12), 30.0, 90.0, 420.0, march());

        assert_eq!(w.label(), "Cycling on March");
        match w.details() {
            WorkoutDetails::Cycling {
                elevation_gain,
                speed,
            } => {
                assert_eq!(*elevation_gain, 420.0);
                assert_eq!(*speed, 30.0 / (90.0 / 60.0));
            }
            other => panic!("expected cycling details, got {:?}", other),
        }
    }

    #[test]
    fn test_label_ignores_year() {
        let a = Utc.with_ymd_and_hms(2023, 7, 12, 0, 0, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2025, 7, 18, 0, 0, 0).unwrap();
        let loc = Coordinates::new(0.0, 0.0);

        let first = Workout::running(loc, 1.0, 1.0, 1.0, a);
        let second = Workout::running(loc, 1.0, 1.0, 1.0, b);

        assert_eq!(first.label(), second.label());
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn test_label_uses_local_month() {
        // Last second of January in UTC; east of Greenwich this is February
        let edge = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
        let w = Workout::cycling(Coordinates::new(0.0, 0.0), 1.0, 1.0, 0.0, edge);

        let expected = month_name(&edge.with_timezone(&Local));
        assert_eq!(w.label(), format!("Cycling on {}", expected));
    }

    #[test]
    fn test_input_metric_matches_built_record() {
        let input = WorkoutInput::Cycling {
            distance: 30.0,
            duration: 90.0,
            elevation_gain: 10.0,
        };
        let w = Workout::from_input(Coordinates::new(0.0, 0.0), input, march());
        assert_eq!(input.metric(), w.details().metric());

        let tiny = WorkoutInput::Running {
            distance: 1e-320,
            duration: 25.0,
            cadence: 170.0,
        };
        assert!(tiny.metric().is_infinite());
    }

    #[test]
    fn test_serialized_shape() {
        let w = Workout::cycling(Coordinates::new(1.5, 2.5), 10.0, 30.0, -12.0, march());
        let value = serde_json::to_value(&w).unwrap();

        assert_eq!(value["type"], "cycling");
        assert_eq!(value["coords"], serde_json::json!([1.5, 2.5]));
        assert_eq!(value["elevationGain"], -12.0);
        assert_eq!(value["speed"], 20.0);
        assert_eq!(value["description"], "Cycling on March");
        assert_eq!(value["date"], "2024-03-02T08:15:00Z");
    }

    #[test]
    fn test_workout_type_from_str() {
        assert_eq!("running".parse::<WorkoutType>(), Ok(WorkoutType::Running));
        assert_eq!("cycling".parse::<WorkoutType>(), Ok(WorkoutType::Cycling));
        assert!("swimming".parse::<WorkoutType>().is_err());
    }
}
