// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Runs a `SessionController` inside a single tokio task.
//!
//! All handlers execute on that task in the order their commands arrive, so
//! store mutations never interleave no matter how many handles send events.

use crate::error::{AppError, Result};
use crate::models::{Coordinates, Workout};
use crate::services::session::SessionController;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

const COMMAND_BUFFER: usize = 64;

enum SessionCommand {
    MapClick(Coordinates, oneshot::Sender<Result<()>>),
    ChangeType,
    Submit(oneshot::Sender<Result<String>>),
    ListClick(String, oneshot::Sender<Option<Workout>>),
    Reset(oneshot::Sender<Result<()>>),
    Count(oneshot::Sender<usize>),
}

/// Cloneable handle for sending events to a running session.
#[derive(Clone)]
pub struct SessionHandle {
    tx: mpsc::Sender<SessionCommand>,
}

/// Spawn the session task. It runs until every handle is dropped and then
/// returns the session's workouts from `teardown`.
pub fn spawn(controller: SessionController) -> (SessionHandle, JoinHandle<Vec<Workout>>) {
    let (tx, rx) = mpsc::channel(COMMAND_BUFFER);
    let task = tokio::spawn(run(controller, rx));
    (SessionHandle { tx }, task)
}

async fn run(
    mut controller: SessionController,
    mut rx: mpsc::Receiver<SessionCommand>,
) -> Vec<Workout> {
    while let Some(command) = rx.recv().await {
        // A dropped reply receiver only means the caller stopped waiting.
        match command {
            SessionCommand::MapClick(at, reply) => {
                let _ = reply.send(controller.handle_map_click(at));
            }
            SessionCommand::ChangeType => controller.handle_type_change(),
            SessionCommand::Submit(reply) => {
                let _ = reply.send(controller.handle_submit());
            }
            SessionCommand::ListClick(id, reply) => {
                let _ = reply.send(controller.handle_list_click(&id).cloned());
            }
            SessionCommand::Reset(reply) => {
                let _ = reply.send(controller.reset());
            }
            SessionCommand::Count(reply) => {
                let _ = reply.send(controller.store().len());
            }
        }
    }
    controller.teardown()
}

impl SessionHandle {
    async fn request<T>(
        &self,
        make: impl FnOnce(oneshot::Sender<T>) -> SessionCommand,
    ) -> Result<T> {
        let (reply, rx) = oneshot::channel();
        self.tx
            .send(make(reply))
            .await
            .map_err(|_| AppError::SessionClosed)?;
        rx.await.map_err(|_| AppError::SessionClosed)
    }

    pub async fn map_click(&self, at: Coordinates) -> Result<()> {
        self.request(|reply| SessionCommand::MapClick(at, reply))
            .await?
    }

    pub async fn change_type(&self) -> Result<()> {
        self.tx
            .send(SessionCommand::ChangeType)
            .await
            .map_err(|_| AppError::SessionClosed)
    }

    /// Submit the form; returns the new workout's id.
    pub async fn submit(&self) -> Result<String> {
        self.request(SessionCommand::Submit).await?
    }

    pub async fn list_click(&self, id: impl Into<String>) -> Result<Option<Workout>> {
        let id = id.into();
        self.request(|reply| SessionCommand::ListClick(id, reply))
            .await
    }

    pub async fn reset(&self) -> Result<()> {
        self.request(SessionCommand::Reset).await?
    }

    /// Number of workouts currently held.
    pub async fn count(&self) -> Result<usize> {
        self.request(SessionCommand::Count).await
    }
}
