use crate::api::types::QueryRequest;

use super::{PanelError, SubmitState};

/// Chunks fetched from the index per query.
pub const TOP_K: u32 = 5;
/// Chunks kept after reranking.
pub const RERANK_TOP_K: u32 = 3;

/// State machine behind the question form.
///
/// Same lifecycle as the upload panel, parameterized over a query; the
/// retrieval parameters are fixed and attached to every request.
#[derive(Debug, Default)]
pub struct QueryPanel {
    query: String,
    state: SubmitState,
}

impl QueryPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    #[cfg(test)]
    pub fn state(&self) -> SubmitState {
        self.state
    }

    #[cfg(test)]
    pub fn can_submit(&self) -> bool {
        self.state == SubmitState::Idle && !self.query.trim().is_empty()
    }

    /// Move to `Submitting` and produce the request payload.
    pub fn begin_submit(&mut self) -> Result<QueryRequest, PanelError> {
        if self.state == SubmitState::Submitting {
            return Err(PanelError::InFlight);
        }
        if self.query.trim().is_empty() {
            return Err(PanelError::EmptyInput);
        }
        self.state = SubmitState::Submitting;

        Ok(QueryRequest {
            query: self.query.clone(),
            top_k: TOP_K,
            rerank_top_k: RERANK_TOP_K,
        })
    }

    /// The answer arrived: clear the form for the next question.
    pub fn finish_success(&mut self) {
        self.query.clear();
        self.state = SubmitState::Idle;
    }

    /// The query failed: keep the question, return to `Idle` for retry.
    pub fn finish_failure(&mut self) {
        self.state = SubmitState::Idle;
    }

    #[cfg(test)]
    pub fn query(&self) -> &str {
        &self.query
    }
}
