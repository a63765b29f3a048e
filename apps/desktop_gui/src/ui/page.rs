//! Host page state the task widget renders into.

use std::collections::VecDeque;

use client_core::{ElementIds, TaskPage};
use shared::domain::{HeartImage, TaskRow, TaskRowId};

#[derive(Debug, Default)]
pub struct HostPage {
    ids: ElementIds,
    pub input: String,
    rows: Vec<TaskRow>,
    hearts: Vec<HeartImage>,
    alerts: VecDeque<String>,
}

impl HostPage {
    pub fn new(ids: ElementIds) -> Self {
        Self {
            ids,
            ..Self::default()
        }
    }

    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    pub fn rows(&self) -> &[TaskRow] {
        &self.rows
    }

    pub fn hearts(&self) -> &[HeartImage] {
        &self.hearts
    }

    /// The alert currently blocking the page, if any.
    pub fn active_alert(&self) -> Option<&str> {
        self.alerts.front().map(String::as_str)
    }

    pub fn dismiss_alert(&mut self) {
        self.alerts.pop_front();
    }
}

impl TaskPage for HostPage {
    fn has_element(&self, id: &str) -> bool {
        [
            &self.ids.form,
            &self.ids.input,
            &self.ids.messages,
            &self.ids.hearts,
        ]
        .into_iter()
        .any(|own| own == id)
    }

    fn input_value(&self) -> String {
        self.input.clone()
    }

    fn clear_input(&mut self) {
        self.input.clear();
    }

    fn append_row(&mut self, row: &TaskRow) {
        self.rows.push(row.clone());
    }

    fn remove_row(&mut self, row_id: TaskRowId) {
        self.rows.retain(|row| row.row_id != row_id);
    }

    fn append_heart(&mut self, heart: &HeartImage) {
        self.hearts.push(heart.clone());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push_back(message.to_string());
    }
}
