//! Dashboard handler: owns the backend on the main thread, spawns the TUI
//! renderer on a second thread, and keeps the two talking over channels.
//!
//! The renderer never calls the backend directly, so the simulated
//! round-trip latency of mutations can never freeze the UI. Periodic
//! refresh re-polls tours and stats on the configured interval.

use anyhow::Result;
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::Duration;

use tourdesk_engine::FormMode;
use tourdesk_runtime::{AgencyBackend, Config, RefreshTimer};

use crate::presentation::tui::{AppSignal, TuiRenderer, UiEvent, ViewConfig};

pub fn handle(backend: AgencyBackend, config: &Config) -> Result<()> {
    let (event_tx, event_rx) = mpsc::channel(); // Handler -> Renderer
    let (signal_tx, signal_rx) = mpsc::channel(); // Renderer -> Handler

    let view = ViewConfig {
        currency_suffix: config.currency_suffix.clone(),
        animation_window: config.animation_window(),
    };

    let renderer_handle = thread::spawn(move || {
        let renderer = TuiRenderer::new(view);
        renderer.run(event_rx, signal_tx)
    });

    run_handler(backend, config, event_tx, signal_rx);

    match renderer_handle.join() {
        Ok(result) => result,
        Err(_) => {
            eprintln!("TUI thread panicked");
            Ok(())
        }
    }
}

fn run_handler(
    backend: AgencyBackend,
    config: &Config,
    tx: Sender<UiEvent>,
    signal_rx: Receiver<AppSignal>,
) {
    let poll_timeout = Duration::from_millis(200);
    let mut timer = RefreshTimer::new(config.refresh_interval());

    // Initial load; later reloads ride the refresh timer.
    push_snapshot(&backend, &tx);

    loop {
        match signal_rx.recv_timeout(poll_timeout) {
            Ok(AppSignal::Quit) => break,
            Ok(AppSignal::Refresh) => timer.force(),
            Ok(AppSignal::Submit { mode, tour }) => {
                let result = match mode {
                    FormMode::Add => backend
                        .create_tour(tour)
                        .map(|record| format!("Tour \"{}\" added", record.name)),
                    FormMode::Edit(id) => backend
                        .update_tour(id, tour)
                        .map(|record| format!("Tour \"{}\" updated", record.name)),
                };
                let result = result.map_err(|e| e.to_string());
                let succeeded = result.is_ok();
                let _ = tx.send(UiEvent::SubmitFinished(result));
                if succeeded {
                    push_snapshot(&backend, &tx);
                }
            }
            Ok(AppSignal::Delete(id)) => {
                let result = backend
                    .delete_tour(id)
                    .map(|record| format!("Tour \"{}\" deleted", record.name))
                    .map_err(|e| e.to_string());
                let succeeded = result.is_ok();
                let _ = tx.send(UiEvent::DeleteFinished(result));
                if succeeded {
                    push_snapshot(&backend, &tx);
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }

        if timer.due() {
            push_snapshot(&backend, &tx);
        }
    }
}

/// Reload tours and stats; failures become non-fatal notifications.
fn push_snapshot(backend: &AgencyBackend, tx: &Sender<UiEvent>) {
    match backend.list_tours() {
        Ok(tours) => {
            let _ = tx.send(UiEvent::Tours(tours));
        }
        Err(e) => {
            let _ = tx.send(UiEvent::LoadFailed(format!("Failed to load tours: {}", e)));
        }
    }

    match backend.stats() {
        Ok(snapshot) => {
            let _ = tx.send(UiEvent::Stats(snapshot));
        }
        Err(e) => {
            let _ = tx.send(UiEvent::LoadFailed(format!(
                "Failed to load statistics: {}",
                e
            )));
        }
    }
}
