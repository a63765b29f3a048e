//! Command orchestration helpers from UI actions to backend command queue.

use crossbeam_channel::{Sender, TrySendError};

use crate::backend_bridge::commands::BackendCommand;
use crate::controller::events::{UiError, UiErrorContext};

/// Queues a command for the backend worker. On failure the command is
/// handed back so the caller can settle it locally.
pub fn dispatch_backend_command(
    cmd_tx: &Sender<BackendCommand>,
    cmd: BackendCommand,
) -> Result<(), (BackendCommand, UiError)> {
    let cmd_name = cmd.name();

    match cmd_tx.try_send(cmd) {
        Ok(()) => {
            tracing::debug!(command = cmd_name, "queued ui->backend command");
            Ok(())
        }
        Err(TrySendError::Full(cmd)) => {
            tracing::warn!(command = cmd_name, "ui->backend command queue is full");
            Err((
                cmd,
                UiError::from_message(
                    UiErrorContext::General,
                    "UI command queue is full; please retry",
                ),
            ))
        }
        Err(TrySendError::Disconnected(cmd)) => {
            tracing::error!(command = cmd_name, "backend command processor disconnected");
            Err((
                cmd,
                UiError::from_message(
                    UiErrorContext::General,
                    "Backend command processor disconnected (possible startup/runtime failure)",
                ),
            ))
        }
    }
}

#[cfg(test)]
#[path = "../tests/orchestration_tests.rs"]
mod tests;
