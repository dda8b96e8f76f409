mod query;
mod upload;

pub use query::QueryPanel;
pub use upload::UploadPanel;

use thiserror::Error;

/// Submission lifecycle of one input panel.
///
/// Success and failure are reported to the caller, not stored: both paths
/// return the panel to `Idle` so the next submission can start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    Submitting,
}

/// Client-side rejections, raised before any network call.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PanelError {
    #[error("nothing to submit: the input is empty")]
    EmptyInput,
    #[error("a submission is already in flight")]
    InFlight,
}
