// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Form input validation, applied before any record is built.

use crate::error::{AppError, Result};
use crate::models::{FormValues, WorkoutInput, WorkoutType};

/// Parse typed text as a number. Empty or non-numeric text yields NaN.
pub fn parse_number(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    trimmed.parse().unwrap_or(f64::NAN)
}

/// True only if every value is a finite number.
pub fn all_finite(values: &[f64]) -> bool {
    values.iter().all(|v| v.is_finite())
}

/// True only if every value is strictly greater than zero.
pub fn all_positive(values: &[f64]) -> bool {
    values.iter().all(|v| *v > 0.0)
}

/// Validate the form for the selected workout type.
///
/// Running needs distance, duration and cadence finite and positive.
/// Cycling needs all three finite but only distance and duration positive:
/// a negative elevation gain is accepted. Either way the derived pace or
/// speed must come out finite, or the record could not be stored.
pub fn validate(form: &FormValues) -> Result<WorkoutInput> {
    let input = validate_fields(form)?;
    let metric = input.metric();
    if !metric.is_finite() {
        return Err(AppError::InvalidInput(format!(
            "derived metric {} out of range for {:?}",
            metric, input
        )));
    }
    Ok(input)
}

fn validate_fields(form: &FormValues) -> Result<WorkoutInput> {
    let kind: WorkoutType = form.kind.parse().map_err(AppError::InvalidInput)?;
    let distance = parse_number(&form.distance);
    let duration = parse_number(&form.duration);

    match kind {
        WorkoutType::Running => {
            let cadence = parse_number(&form.cadence);
            let values = [distance, duration, cadence];
            if !all_finite(&values) || !all_positive(&values) {
                return Err(invalid(kind, &values));
            }
            Ok(WorkoutInput::Running {
                distance,
                duration,
                cadence,
            })
        }
        WorkoutType::Cycling => {
            let elevation_gain = parse_number(&form.elevation);
            let values = [distance, duration, elevation_gain];
            if !all_finite(&values) || !all_positive(&[distance, duration]) {
                return Err(invalid(kind, &values));
            }
            Ok(WorkoutInput::Cycling {
                distance,
                duration,
                elevation_gain,
            })
        }
    }
}

fn invalid(kind: WorkoutType, values: &[f64]) -> AppError {
    AppError::InvalidInput(format!("{} values {:?}", kind, values))
}
