// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Trailmark headless session
//!
//! Reads UI events as JSON lines on stdin and drives a workout session with
//! recording map, form and list surfaces. Effects are reported as structured
//! log lines.

use trailmark::{
    build_session,
    config::Config,
    models::{Coordinates, SessionEvent},
    services::{session_actor, SessionHandle},
    surfaces::{
        headless::{FixedPosition, HeadlessForm, HeadlessList, HeadlessMap, LogNotifier},
        FormSurface, Surfaces,
    },
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let config = Config::from_env()?;
    tracing::info!(
        storage = %config.storage_path.display(),
        key = %config.storage_key,
        "Starting Trailmark session"
    );

    let form = HeadlessForm::default();
    let list = HeadlessList::default();
    let surfaces = Surfaces {
        map: Box::new(HeadlessMap::default()),
        form: Box::new(form.clone()),
        list: Box::new(list.clone()),
        notifier: Box::new(LogNotifier::default()),
    };

    let mut controller = build_session(&config, surfaces);
    controller.init(&FixedPosition::new(config.home_position));
    let (handle, task) = session_actor::spawn(controller);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let event: SessionEvent = match serde_json::from_str(line) {
            Ok(event) => event,
            Err(e) => {
                tracing::warn!(error = %e, line, "Skipping malformed event");
                continue;
            }
        };
        if let Err(e) = dispatch(&handle, &form, event).await {
            tracing::warn!(error = %e, "Event failed");
        }
    }

    drop(handle);
    let workouts = task.await?;
    tracing::info!(
        count = workouts.len(),
        listed = list.len(),
        "Trailmark session finished"
    );
    Ok(())
}

async fn dispatch(
    handle: &SessionHandle,
    form: &HeadlessForm,
    event: SessionEvent,
) -> trailmark::error::Result<()> {
    match event {
        SessionEvent::MapClick { lat, lng } => handle.map_click(Coordinates::new(lat, lng)).await,
        SessionEvent::ChangeType { kind } => {
            if form.values().kind != kind {
                form.select_kind(&kind);
                handle.change_type().await?;
            }
            Ok(())
        }
        SessionEvent::Fill {
            distance,
            duration,
            cadence,
            elevation,
        } => {
            form.fill(&distance, &duration, &cadence, &elevation);
            Ok(())
        }
        SessionEvent::Submit => {
            let id = handle.submit().await?;
            tracing::info!(id = %id, "Submitted");
            Ok(())
        }
        SessionEvent::ListClick { id } => {
            if let Some(workout) = handle.list_click(id).await? {
                tracing::info!(id = workout.id(), label = workout.label(), "Jumped to workout");
            }
            Ok(())
        }
        SessionEvent::Reset => handle.reset().await,
    }
}

/// Initialize structured JSON logging.
fn init_logging() -> Result<(), Box<dyn std::error::Error>> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("trailmark=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
