pub mod error;
pub mod transport;
pub mod widget;

pub use error::{MountError, TransportError};
pub use transport::{HttpMessageTransport, MessageTransport};
pub use widget::{
    CompletionOutcome, ElementIds, PendingSubmission, SubmitOutcome, TaskPage, TaskWidget,
    WidgetState, SUBMIT_FAILED_ALERT,
};
