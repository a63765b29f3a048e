use super::*;
use crate::error::TransportError;
use async_trait::async_trait;
use shared::domain::HEART_ALT_TEXT;
use std::sync::Mutex;

#[derive(Default)]
struct RecordingPage {
    missing: Vec<&'static str>,
    input: String,
    rows: Vec<TaskRow>,
    hearts: Vec<HeartImage>,
    alerts: Vec<String>,
}

impl RecordingPage {
    fn with_input(input: &str) -> Self {
        Self {
            input: input.to_string(),
            ..Self::default()
        }
    }

    fn row_texts(&self) -> Vec<&str> {
        self.rows.iter().map(|row| row.text.as_str()).collect()
    }
}

impl TaskPage for RecordingPage {
    fn has_element(&self, id: &str) -> bool {
        !self.missing.iter().any(|missing| *missing == id)
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
        self.alerts.push(message.to_string());
    }
}

struct StubTransport {
    fail_with: Option<String>,
    sent: Mutex<Vec<SubmitMessageRequest>>,
}

impl StubTransport {
    fn ok() -> Self {
        Self {
            fail_with: None,
            sent: Mutex::new(Vec::new()),
        }
    }

    fn failing(err: impl Into<String>) -> Self {
        Self {
            fail_with: Some(err.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    fn sent(&self) -> Vec<SubmitMessageRequest> {
        self.sent.lock().expect("sent lock").clone()
    }
}

#[async_trait]
impl MessageTransport for StubTransport {
    async fn submit_message(
        &self,
        request: &SubmitMessageRequest,
    ) -> Result<String, TransportError> {
        self.sent.lock().expect("sent lock").push(request.clone());
        match &self.fail_with {
            Some(err) => Err(TransportError::InvalidEndpoint {
                url: err.clone(),
                source: url::ParseError::EmptyHost,
            }),
            None => Ok("ok".to_string()),
        }
    }
}

fn mounted(page: RecordingPage) -> TaskWidget<RecordingPage> {
    TaskWidget::mount(page, &ElementIds::default()).expect("mount")
}

fn add_row(widget: &mut TaskWidget<RecordingPage>, text: &str) -> TaskRowId {
    widget.page_mut().input = text.to_string();
    let pending = widget.begin_submit().expect("pending");
    match widget.finish_submit(pending, Ok::<_, String>(String::new())) {
        SubmitOutcome::RowAdded(row_id) => row_id,
        SubmitOutcome::Alerted => panic!("unexpected alert"),
    }
}

#[test]
fn mount_requires_every_host_element() {
    let page = RecordingPage {
        missing: vec!["heartscontainers"],
        ..RecordingPage::default()
    };
    let err = TaskWidget::mount(page, &ElementIds::default())
        .err()
        .expect("mount must fail");
    assert_eq!(
        err,
        MountError::MissingElement {
            id: "heartscontainers".to_string()
        }
    );
}

#[tokio::test]
async fn submit_sends_trimmed_message_once() {
    let transport = StubTransport::ok();
    let mut widget = mounted(RecordingPage::with_input("   Buy milk \n"));

    let outcome = widget.submit_with(&transport).await;

    assert!(matches!(outcome, Some(SubmitOutcome::RowAdded(_))));
    assert_eq!(transport.sent(), vec![SubmitMessageRequest::new("Buy milk")]);
    assert_eq!(widget.page().row_texts(), vec!["Buy milk"]);
    assert_eq!(widget.page().input, "");
}

#[tokio::test]
async fn blank_input_is_ignored_silently() {
    for input in ["", "   ", "\t\n "] {
        let transport = StubTransport::ok();
        let mut widget = mounted(RecordingPage::with_input(input));

        assert_eq!(widget.submit_with(&transport).await, None);
        assert!(transport.sent().is_empty());
        assert!(widget.page().rows.is_empty());
        assert!(widget.page().alerts.is_empty());
        assert_eq!(widget.page().input, input);
    }
}

#[tokio::test]
async fn byte_order_mark_counts_as_blank() {
    let transport = StubTransport::ok();
    let mut widget = mounted(RecordingPage::with_input("\u{feff} \u{feff}"));

    assert_eq!(widget.submit_with(&transport).await, None);
    assert!(transport.sent().is_empty());
    assert!(widget.page().rows.is_empty());
}

#[tokio::test]
async fn byte_order_mark_is_trimmed_from_message() {
    let transport = StubTransport::ok();
    let mut widget = mounted(RecordingPage::with_input("\u{feff}Buy milk "));

    widget.submit_with(&transport).await;

    assert_eq!(transport.sent(), vec![SubmitMessageRequest::new("Buy milk")]);
}

#[tokio::test]
async fn failed_request_alerts_once_and_keeps_input() {
    let transport = StubTransport::failing("connection refused");
    let mut widget = mounted(RecordingPage::with_input("Buy milk"));

    let outcome = widget.submit_with(&transport).await;

    assert_eq!(outcome, Some(SubmitOutcome::Alerted));
    assert!(widget.page().rows.is_empty());
    assert_eq!(widget.page().alerts, vec![SUBMIT_FAILED_ALERT.to_string()]);
    assert_eq!(widget.page().input, "Buy milk");
    assert!(widget.state().rows().is_empty());
}

#[test]
fn rows_follow_response_arrival_order() {
    let mut widget = mounted(RecordingPage::default());

    widget.page_mut().input = "first".to_string();
    let first = widget.begin_submit().expect("first");
    widget.page_mut().input = "second".to_string();
    let second = widget.begin_submit().expect("second");
    widget.page_mut().input = "third".to_string();
    let third = widget.begin_submit().expect("third");

    widget.finish_submit(second, Ok::<_, String>(String::new()));
    widget.finish_submit(third, Err("timed out".to_string()));
    widget.finish_submit(first, Ok::<_, String>(String::new()));

    assert_eq!(widget.page().row_texts(), vec!["second", "first"]);
    assert_eq!(widget.state().rows().len(), 2);
    assert_eq!(widget.page().alerts.len(), 1);
}

#[test]
fn completing_a_row_removes_only_that_row() {
    let mut widget = mounted(RecordingPage::default());
    let a = add_row(&mut widget, "a");
    let b = add_row(&mut widget, "b");
    let c = add_row(&mut widget, "c");

    let outcome = widget.complete_task(b);

    assert!(outcome.removed);
    assert_eq!(widget.page().row_texts(), vec!["a", "c"]);
    assert_eq!(widget.state().rows(), &[a, c]);
}

#[test]
fn buy_milk_scenario_reveals_first_heart() {
    let mut widget = mounted(RecordingPage::default());
    let row_id = add_row(&mut widget, "Buy milk");
    assert_eq!(widget.page().row_texts(), vec!["Buy milk"]);

    let outcome = widget.complete_task(row_id);

    assert!(widget.page().rows.is_empty());
    assert_eq!(outcome.heart.as_ref().map(|h| h.frame_index), Some(0));
    assert_eq!(widget.page().hearts.len(), 1);
    assert_eq!(widget.page().hearts[0].src, "static/hearts.png");
    assert_eq!(widget.page().hearts[0].alt, HEART_ALT_TEXT);
    assert_eq!(widget.state().images_shown(), 1);
    assert_eq!(widget.state().current_frame(), 1);
}

#[test]
fn hearts_stop_after_five_completions_but_rows_still_leave() {
    let mut widget = mounted(RecordingPage::default());
    let rows: Vec<_> = (0..7).map(|i| add_row(&mut widget, &format!("task {i}"))).collect();

    let outcomes: Vec<_> = rows.iter().map(|row| widget.complete_task(*row)).collect();

    let frames: Vec<_> = widget.page().hearts.iter().map(|h| h.frame_index).collect();
    assert_eq!(frames, vec![0, 1, 2, 3, 4]);
    assert!(outcomes.iter().all(|o| o.removed));
    assert!(outcomes[5].heart.is_none());
    assert!(outcomes[6].heart.is_none());
    assert!(widget.page().rows.is_empty());
    assert_eq!(widget.state().images_shown(), 5);
    assert_eq!(widget.state().current_frame(), 0);
}

#[test]
fn frame_index_wraps_when_cap_is_lifted() {
    let mut widget = TaskWidget::mount_with_state(
        RecordingPage::default(),
        &ElementIds::default(),
        WidgetState::with_heart_cap(8),
    )
    .expect("mount");
    let rows: Vec<_> = (0..8).map(|i| add_row(&mut widget, &format!("task {i}"))).collect();
    for row in rows {
        widget.complete_task(row);
    }

    let frames: Vec<_> = widget.page().hearts.iter().map(|h| h.frame_index).collect();
    assert_eq!(frames, vec![0, 1, 2, 3, 4, 0, 1, 2]);
    assert_eq!(widget.state().current_frame(), 3);
}

#[test]
fn completing_a_row_twice_has_no_second_effect() {
    let mut widget = mounted(RecordingPage::default());
    let row_id = add_row(&mut widget, "once");

    assert!(widget.complete_task(row_id).removed);
    let second = widget.complete_task(row_id);

    assert!(!second.removed);
    assert!(second.heart.is_none());
    assert_eq!(widget.page().hearts.len(), 1);
    assert_eq!(widget.state().images_shown(), 1);
}

#[test]
fn row_ids_are_not_reused() {
    let mut widget = mounted(RecordingPage::default());
    let first = add_row(&mut widget, "a");
    widget.complete_task(first);
    let second = add_row(&mut widget, "b");
    assert_ne!(first, second);
}
