//! Task entry widget: submission guard, task rows and the heart reward.
//!
//! The widget never touches a UI toolkit directly. The host implements
//! [`TaskPage`] and forwards its form-submit and row-control events to
//! [`TaskWidget::begin_submit`], [`TaskWidget::finish_submit`] and
//! [`TaskWidget::complete_task`].

use std::fmt::Display;

use shared::{
    domain::{HeartImage, TaskRow, TaskRowId, HEART_FRAME_COUNT, MAX_HEARTS_SHOWN},
    protocol::SubmitMessageRequest,
};
use tracing::{debug, info, warn};

use crate::{error::MountError, transport::MessageTransport};

/// Text shown when a submission request fails.
pub const SUBMIT_FAILED_ALERT: &str = "Error sending message";

/// Elements the host page must already provide.
pub trait TaskPage {
    fn has_element(&self, id: &str) -> bool;
    fn input_value(&self) -> String;
    fn clear_input(&mut self);
    fn append_row(&mut self, row: &TaskRow);
    fn remove_row(&mut self, row_id: TaskRowId);
    fn append_heart(&mut self, heart: &HeartImage);
    /// Blocking notice. The host keeps other input disabled until dismissed.
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub form: String,
    pub input: String,
    pub messages: String,
    pub hearts: String,
}

impl Default for ElementIds {
    fn default() -> Self {
        Self {
            form: "taskForm".to_string(),
            input: "inputMessage".to_string(),
            messages: "messagesContainer".to_string(),
            hearts: "heartscontainers".to_string(),
        }
    }
}

impl ElementIds {
    fn required(&self) -> [&str; 4] {
        [
            self.form.as_str(),
            self.input.as_str(),
            self.messages.as_str(),
            self.hearts.as_str(),
        ]
    }
}

/// Page-lifetime counters plus the rows currently on display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetState {
    current_frame: usize,
    images_shown: usize,
    heart_cap: usize,
    next_row_id: u64,
    rows: Vec<TaskRowId>,
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::with_heart_cap(MAX_HEARTS_SHOWN)
    }
}

impl WidgetState {
    pub fn with_heart_cap(heart_cap: usize) -> Self {
        Self {
            current_frame: 0,
            images_shown: 0,
            heart_cap,
            next_row_id: 1,
            rows: Vec::new(),
        }
    }

    pub fn current_frame(&self) -> usize {
        self.current_frame
    }

    pub fn images_shown(&self) -> usize {
        self.images_shown
    }

    pub fn rows(&self) -> &[TaskRowId] {
        &self.rows
    }

    fn push_row(&mut self) -> TaskRowId {
        let row_id = TaskRowId(self.next_row_id);
        self.next_row_id += 1;
        self.rows.push(row_id);
        row_id
    }

    fn take_row(&mut self, row_id: TaskRowId) -> bool {
        match self.rows.iter().position(|id| *id == row_id) {
            Some(index) => {
                self.rows.remove(index);
                true
            }
            None => false,
        }
    }

    fn next_heart(&mut self) -> Option<HeartImage> {
        if self.images_shown >= self.heart_cap {
            return None;
        }
        let heart = HeartImage::from_frame(self.current_frame);
        self.current_frame = (self.current_frame + 1) % HEART_FRAME_COUNT;
        self.images_shown += 1;
        Some(heart)
    }
}

/// A trimmed, non-empty message waiting on its request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    request: SubmitMessageRequest,
}

impl PendingSubmission {
    pub fn message(&self) -> &str {
        &self.request.message
    }

    pub fn request(&self) -> &SubmitMessageRequest {
        &self.request
    }

    pub fn into_request(self) -> SubmitMessageRequest {
        self.request
    }
}

impl From<SubmitMessageRequest> for PendingSubmission {
    fn from(request: SubmitMessageRequest) -> Self {
        Self { request }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    RowAdded(TaskRowId),
    Alerted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionOutcome {
    pub removed: bool,
    pub heart: Option<HeartImage>,
}

pub struct TaskWidget<P> {
    page: P,
    state: WidgetState,
}

impl<P: TaskPage> TaskWidget<P> {
    pub fn mount(page: P, ids: &ElementIds) -> Result<Self, MountError> {
        Self::mount_with_state(page, ids, WidgetState::default())
    }

    pub fn mount_with_state(
        page: P,
        ids: &ElementIds,
        state: WidgetState,
    ) -> Result<Self, MountError> {
        if let Some(missing) = ids.required().into_iter().find(|id| !page.has_element(id)) {
            return Err(MountError::MissingElement {
                id: missing.to_string(),
            });
        }
        Ok(Self { page, state })
    }

    pub fn page(&self) -> &P {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut P {
        &mut self.page
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Form-submit handler. Returns `None` for empty or whitespace-only input.
    pub fn begin_submit(&mut self) -> Option<PendingSubmission> {
        let raw = self.page.input_value();
        let message = raw.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
        if message.is_empty() {
            return None;
        }
        Some(SubmitMessageRequest::new(message).into())
    }

    /// Applies the response for a submission started by [`Self::begin_submit`].
    /// Responses may arrive in any order; rows follow arrival order.
    pub fn finish_submit<E: Display>(
        &mut self,
        pending: PendingSubmission,
        result: Result<String, E>,
    ) -> SubmitOutcome {
        match result {
            Ok(_body) => {
                let row = TaskRow {
                    row_id: self.state.push_row(),
                    text: pending.into_request().message,
                };
                self.page.append_row(&row);
                self.page.clear_input();
                info!(row_id = row.row_id.0, "task row added");
                SubmitOutcome::RowAdded(row.row_id)
            }
            Err(err) => {
                warn!(text = pending.message(), "task submission failed: {err}");
                self.page.alert(SUBMIT_FAILED_ALERT);
                SubmitOutcome::Alerted
            }
        }
    }

    /// Submits inline, awaiting the transport before applying the outcome.
    pub async fn submit_with<T>(&mut self, transport: &T) -> Option<SubmitOutcome>
    where
        T: MessageTransport + ?Sized,
    {
        let pending = self.begin_submit()?;
        let result = transport.submit_message(pending.request()).await;
        Some(self.finish_submit(pending, result))
    }

    /// Row-control handler.
    pub fn complete_task(&mut self, row_id: TaskRowId) -> CompletionOutcome {
        if !self.state.take_row(row_id) {
            debug!(row_id = row_id.0, "completion for a row that is not displayed");
            return CompletionOutcome {
                removed: false,
                heart: None,
            };
        }
        self.page.remove_row(row_id);
        info!(row_id = row_id.0, "task row completed");

        let heart = self.state.next_heart();
        if let Some(heart) = &heart {
            self.page.append_heart(heart);
            debug!(
                frame = heart.frame_index,
                images_shown = self.state.images_shown,
                "heart revealed"
            );
        }
        CompletionOutcome {
            removed: true,
            heart,
        }
    }
}

#[cfg(test)]
#[path = "tests/widget_tests.rs"]
mod tests;
