// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - session logic layer.

pub mod session;
pub mod session_actor;
pub mod store;
pub mod validation;

pub use session::SessionController;
pub use session_actor::SessionHandle;
pub use store::WorkoutStore;
