pub mod types;

use anyhow::{Context, Result};
use thiserror::Error;

use types::{AnswerResponse, DocumentSubmission, QueryRequest};

/// Failures of a backend call, split by how far the request got.
#[derive(Debug, Error)]
pub enum ApiError {
    /// No response reached the client (DNS failure, refused connection,
    /// dropped socket).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The backend answered with a non-2xx status.
    #[error("backend error ({status}): {detail}")]
    Backend { status: u16, detail: String },
    /// A 2xx response whose body does not match the expected schema.
    #[error("malformed response: {0}")]
    MalformedResponse(#[source] serde_json::Error),
}

impl ApiError {
    /// The message to show the user: the backend's own `detail` when it sent
    /// one, otherwise a generic message built from the transport error.
    pub fn detail(&self) -> String {
        match self {
            ApiError::Backend { detail, .. } => detail.clone(),
            other => other.to_string(),
        }
    }
}

/// Typed client for the two backend operations.
///
/// Does not retry and enforces no timeout — a submission runs until the
/// backend resolves it one way or the other.
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client against an explicit base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .build()
            .context("Failed to create HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Resolve the base URL from `RAG_API_URL`, falling back to the local
    /// default. Fixed for the life of the process.
    pub fn from_env() -> Result<Self> {
        let base_url = dotenv::var("RAG_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Submit a document for indexing. Any 2xx response means accepted; the
    /// response body carries no contract.
    pub async fn submit_document(
        &self,
        doc: &DocumentSubmission,
    ) -> Result<(), ApiError> {
        let resp = self
            .client
            .post(self.endpoint("/api/upload"))
            .json(doc)
            .send()
            .await?;
        check_status(resp).await?;
        Ok(())
    }

    /// Submit a query and parse the structured answer. A 2xx body that does
    /// not satisfy the answer schema is a protocol violation, not a success.
    pub async fn submit_query(
        &self,
        request: &QueryRequest,
    ) -> Result<AnswerResponse, ApiError> {
        let resp = self
            .client
            .post(self.endpoint("/api/query"))
            .json(request)
            .send()
            .await?;
        let resp = check_status(resp).await?;
        let body = resp.text().await?;
        serde_json::from_str(&body).map_err(ApiError::MalformedResponse)
    }
}

/// Pass 2xx responses through; turn anything else into `ApiError::Backend`,
/// extracting the backend's JSON `detail` field when the body carries one.
async fn check_status(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    let code = status.as_u16();
    let body = resp.text().await.unwrap_or_default();
    let detail = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| v["detail"].as_str().map(str::to_string))
        .unwrap_or_else(|| format!("HTTP {}", code));

    Err(ApiError::Backend {
        status: code,
        detail,
    })
}
