// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use trailmark::error::AppError;

#[test]
fn test_user_message_for_alerted_errors() {
    let err = AppError::InvalidInput("running values [NaN]".to_string());
    assert_eq!(
        err.user_message(),
        Some("please enter valid and positive number value")
    );

    let err = AppError::PositionUnavailable("denied".to_string());
    assert_eq!(err.user_message(), Some(AppError::POSITION_ALERT));
}

#[test]
fn test_user_message_for_silent_errors() {
    assert_eq!(AppError::Storage("disk full".to_string()).user_message(), None);
    assert_eq!(AppError::NoLocationSelected.user_message(), None);
    assert_eq!(AppError::MapNotReady.user_message(), None);
    assert_eq!(AppError::SessionClosed.user_message(), None);

    let err: AppError = anyhow::anyhow!("boom").into();
    assert_eq!(err.user_message(), None);
}

#[test]
fn test_serialization_error_converts() {
    let parse_err = serde_json::from_str::<Vec<u8>>("nope").unwrap_err();
    let err: AppError = parse_err.into();
    assert!(matches!(err, AppError::Serialization(_)));
    assert!(err.to_string().starts_with("Serialization error"));
}
