//! Backend commands queued from UI to backend worker.

use client_core::PendingSubmission;

#[derive(Debug)]
pub enum BackendCommand {
    SubmitMessage { pending: PendingSubmission },
}

impl BackendCommand {
    pub fn name(&self) -> &'static str {
        match self {
            BackendCommand::SubmitMessage { .. } => "submit_message",
        }
    }
}
