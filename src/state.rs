use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use crate::api::types::AnswerResponse;
use crate::api::ApiClient;
use crate::panels::{QueryPanel, UploadPanel};

/// Shared application state: the backend client, one state machine per input
/// panel, and the single "current answer" slot.
///
/// The slot has exactly two writers: a successful query replaces it, and a
/// successful upload clears it (the held answer may describe a corpus that
/// no longer exists). Nothing else mutates it.
pub struct AppState {
    pub api: Arc<ApiClient>,
    pub upload: Mutex<UploadPanel>,
    pub query: Mutex<QueryPanel>,
    current_answer: RwLock<Option<AnswerResponse>>,
}

impl AppState {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api: Arc::new(api),
            upload: Mutex::new(UploadPanel::new()),
            query: Mutex::new(QueryPanel::new()),
            current_answer: RwLock::new(None),
        }
    }

    /// Replace the displayed answer with a fresh query result.
    pub async fn set_answer(&self, answer: AnswerResponse) {
        *self.current_answer.write().await = Some(answer);
    }

    /// Drop the displayed answer after the corpus changed underneath it.
    pub async fn clear_answer(&self) {
        *self.current_answer.write().await = None;
    }

    pub async fn current_answer(&self) -> Option<AnswerResponse> {
        self.current_answer.read().await.clone()
    }
}

pub type Context<'a> = poise::Context<'a, AppState, anyhow::Error>;
