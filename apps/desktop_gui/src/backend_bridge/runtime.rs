//! Runtime bridge between UI command queue and backend event intake.

use std::{sync::Arc, thread};

use client_core::{HttpMessageTransport, MessageTransport, PendingSubmission};
use crossbeam_channel::{Receiver, Sender};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext, UiEvent};

pub fn launch(
    cmd_rx: Receiver<BackendCommand>,
    ui_tx: Sender<UiEvent>,
    server_url: String,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker starting...".to_string()));
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: failed to build runtime: {err}"),
                )));
                tracing::error!("failed to build backend runtime: {err}");
                return;
            }
        };

        let transport = match HttpMessageTransport::new(&server_url) {
            Ok(transport) => Arc::new(transport),
            Err(err) => {
                let _ = ui_tx.try_send(UiEvent::Error(UiError::from_message(
                    UiErrorContext::BackendStartup,
                    format!("backend worker startup failure: {err}"),
                )));
                tracing::error!(server_url = %server_url, "cannot build message transport: {err}");
                // Queued submissions still settle with an alert.
                drain_without_transport(&cmd_rx, &ui_tx);
                return;
            }
        };

        tracing::info!(endpoint = %transport.endpoint(), "backend worker ready");
        let _ = ui_tx.try_send(UiEvent::Info("Backend worker ready".to_string()));

        runtime.block_on(async move {
            while let Ok(cmd) = cmd_rx.recv() {
                match cmd {
                    BackendCommand::SubmitMessage { pending } => {
                        let transport = Arc::clone(&transport);
                        let ui_tx = ui_tx.clone();
                        // Requests overlap; results arrive in completion order.
                        tokio::spawn(async move {
                            let event = submission_event(transport.as_ref(), pending).await;
                            deliver_ui_event(ui_tx, event).await;
                        });
                    }
                }
            }
            tracing::info!("ui command queue closed; backend worker exiting");
        });
    })
}

pub async fn submission_event<T>(transport: &T, pending: PendingSubmission) -> UiEvent
where
    T: MessageTransport + ?Sized,
{
    match transport.submit_message(pending.request()).await {
        Ok(body) => UiEvent::SubmitSucceeded { pending, body },
        Err(err) => UiEvent::SubmitFailed {
            pending,
            error: UiError::from_message(UiErrorContext::SubmitMessage, err.to_string()),
        },
    }
}

/// Waits for room in the UI queue; submit results are never dropped while the UI lives.
pub async fn deliver_ui_event(ui_tx: Sender<UiEvent>, event: UiEvent) {
    let delivered = tokio::task::spawn_blocking(move || ui_tx.send(event).is_ok()).await;
    if !matches!(delivered, Ok(true)) {
        tracing::warn!("ui event queue closed; dropping submit result");
    }
}

fn drain_without_transport(cmd_rx: &Receiver<BackendCommand>, ui_tx: &Sender<UiEvent>) {
    while let Ok(cmd) = cmd_rx.recv() {
        match cmd {
            BackendCommand::SubmitMessage { pending } => {
                let event = UiEvent::SubmitFailed {
                    pending,
                    error: UiError::from_message(
                        UiErrorContext::SubmitMessage,
                        "message transport unavailable",
                    ),
                };
                if ui_tx.send(event).is_err() {
                    tracing::warn!("ui event queue closed; dropping submit result");
                    return;
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../tests/runtime_tests.rs"]
mod tests;
