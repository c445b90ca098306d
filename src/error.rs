// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent user-facing messages.

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Position unavailable: {0}")]
    PositionUnavailable(String),

    #[error("No map location selected")]
    NoLocationSelected,

    #[error("Map not initialized")]
    MapNotReady,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session closed")]
    SessionClosed,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Alert text shown when form input fails validation.
    pub const INVALID_INPUT_ALERT: &'static str = "please enter valid and positive number value";

    /// Alert text shown when the user's position cannot be determined.
    pub const POSITION_ALERT: &'static str = "could not get position";

    /// Message to show the user, if this error is user-visible at all.
    ///
    /// Storage and internal failures are logged rather than alerted.
    pub fn user_message(&self) -> Option<&'static str> {
        match self {
            AppError::InvalidInput(_) => Some(Self::INVALID_INPUT_ALERT),
            AppError::PositionUnavailable(_) => Some(Self::POSITION_ALERT),
            AppError::NoLocationSelected
            | AppError::MapNotReady
            | AppError::Storage(_)
            | AppError::Serialization(_)
            | AppError::SessionClosed
            | AppError::Internal(_) => None,
        }
    }
}

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, AppError>;
