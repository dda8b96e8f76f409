use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Source tag attached to every document submitted through this client.
pub const USER_INPUT_SOURCE: &str = "user_input";

/// A document to be indexed, built from the upload form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentSubmission {
    pub text: String,
    pub title: String,
    pub source: String,
}

/// A question plus the retrieval parameters the backend should use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryRequest {
    pub query: String,
    pub top_k: u32,
    pub rerank_top_k: u32,
}

/// A retrieved passage the answer explicitly references by `[id]` marker.
///
/// Ids are stable identifiers within one response, not positions — they may
/// be sparse, and the list order is the display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Citation {
    pub id: i64,
    pub text: String,
    pub source: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
}

/// A chunk returned by the retrieval step, cited or not.
///
/// The backend emits chunks in relevance order; callers must not reorder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrievedChunk {
    pub text: String,
    pub source: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub section: Option<String>,
    pub position: i64,
    pub score: f64,
    #[serde(default)]
    pub metadata: HashMap<String, serde_json::Value>,
}

/// Approximate LLM token usage for one query (total = input + output).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenEstimate {
    pub input: i64,
    pub output: i64,
    pub total: i64,
}

/// The backend's complete answer to one query.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
    pub citations: Vec<Citation>,
    pub retrieved_chunks: Vec<RetrievedChunk>,
    /// Named phases in seconds; a missing key means the phase took no
    /// measurable time, never an error.
    pub timing: HashMap<String, f64>,
    pub token_estimate: TokenEstimate,
    #[serde(default)]
    pub cost_estimate: Option<f64>,
}
