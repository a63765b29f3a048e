//! Applies backend events to the mounted task widget.

use client_core::{SubmitOutcome, TaskPage, TaskWidget};

use crate::controller::events::{UiErrorContext, UiEvent};

pub fn apply_ui_event<P: TaskPage>(
    widget: &mut TaskWidget<P>,
    status: &mut String,
    event: UiEvent,
) -> Option<SubmitOutcome> {
    match event {
        UiEvent::Info(message) => {
            *status = message;
            None
        }
        UiEvent::Error(err) => {
            tracing::error!(
                context = ?err.context(),
                category = ?err.category(),
                "{}",
                err.message()
            );
            *status = match err.context() {
                UiErrorContext::BackendStartup => format!("Backend unavailable: {}", err.message()),
                _ => err.message().to_string(),
            };
            None
        }
        UiEvent::SubmitSucceeded { pending, body } => {
            Some(widget.finish_submit(pending, Ok::<_, String>(body)))
        }
        UiEvent::SubmitFailed { pending, error } => {
            Some(widget.finish_submit(pending, Err(error)))
        }
    }
}

#[cfg(test)]
#[path = "../tests/reducer_tests.rs"]
mod tests;
