use serde::{Deserialize, Serialize};

/// Endpoint that accepts submitted task messages.
pub const SUBMIT_MESSAGE_PATH: &str = "/button-click";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitMessageRequest {
    pub message: String,
}

impl SubmitMessageRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
