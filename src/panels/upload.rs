use crate::api::types::{DocumentSubmission, USER_INPUT_SOURCE};

use super::{PanelError, SubmitState};

/// Title used when the user leaves the field blank.
pub const DEFAULT_TITLE: &str = "Untitled Document";

/// State machine behind the document upload form.
///
/// Collects text plus an optional title, allows at most one in-flight
/// submission, and clears itself only once the backend accepts the document.
/// Failed submissions keep the user's input so they can retry.
#[derive(Debug, Default)]
pub struct UploadPanel {
    text: String,
    title: String,
    state: SubmitState,
}

impl UploadPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    #[cfg(test)]
    pub fn state(&self) -> SubmitState {
        self.state
    }

    /// Whether the submit action is currently available.
    #[cfg(test)]
    pub fn can_submit(&self) -> bool {
        self.state == SubmitState::Idle && !self.text.trim().is_empty()
    }

    /// Move to `Submitting` and produce the request payload.
    ///
    /// Rejects overlapping submissions and empty/whitespace-only text before
    /// anything touches the network.
    pub fn begin_submit(&mut self) -> Result<DocumentSubmission, PanelError> {
        if self.state == SubmitState::Submitting {
            return Err(PanelError::InFlight);
        }
        if self.text.trim().is_empty() {
            return Err(PanelError::EmptyInput);
        }
        self.state = SubmitState::Submitting;

        let title = if self.title.trim().is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            self.title.clone()
        };

        Ok(DocumentSubmission {
            text: self.text.clone(),
            title,
            source: USER_INPUT_SOURCE.to_string(),
        })
    }

    /// The document was accepted: clear the form for the next one.
    pub fn finish_success(&mut self) {
        self.text.clear();
        self.title.clear();
        self.state = SubmitState::Idle;
    }

    /// The submission failed: keep the input, return to `Idle` for retry.
    pub fn finish_failure(&mut self) {
        self.state = SubmitState::Idle;
    }

    #[cfg(test)]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[cfg(test)]
    pub fn title(&self) -> &str {
        &self.title
    }
}
