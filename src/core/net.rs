// src/core/net.rs
// HTTP GET over reqwest. One shared client per run; small retry budget for
// transient failures. Rate limiting between pages is the caller's job.

use std::time::Duration;

use crate::config::consts::{CONNECT_TIMEOUT_SECS, MAX_REDIRECTS, MAX_RETRIES, RETRY_BACKOFF_MS};

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status} for {url}")]
    Http { status: u16, url: String },

    #[error("failed to read response body: {0}")]
    Body(String),

    #[error("invalid request for {url}: {msg}")]
    Request { url: String, msg: String },

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

impl FetchError {
    /// Transient failures worth another attempt.
    pub fn is_retryable(&self) -> bool {
        match self {
            FetchError::Timeout(_) | FetchError::Network(_) => true,
            FetchError::Http { status, .. } => matches!(status, 408 | 429 | 500..=599),
            FetchError::Body(_)
            | FetchError::Request { .. }
            | FetchError::Client(_) => false,
        }
    }

    fn classify(url: &str, e: reqwest::Error) -> Self {
        if e.is_builder() {
            return FetchError::Request { url: url.to_string(), msg: e.to_string() };
        }
        if e.is_timeout() {
            return FetchError::Timeout(url.to_string());
        }
        if let Some(status) = e.status() {
            return FetchError::Http { status: status.as_u16(), url: url.to_string() };
        }
        FetchError::Network(e.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct HttpClient {
    client: reqwest::Client,
    user_agent: String,
}

impl HttpClient {
    pub fn new(user_agent: &str, timeout_secs: u64) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .gzip(true)
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self { client, user_agent: user_agent.to_string() })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// GET `url` and return the body as text. Non-2xx is an error.
    pub async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let mut attempt = 0;
        loop {
            match self.get_text_once(url).await {
                Ok(body) => return Ok(body),
                Err(e) if e.is_retryable() && attempt < MAX_RETRIES => {
                    attempt += 1;
                    tracing::debug!(%url, attempt, error = %e, "retrying");
                    tokio::time::sleep(Duration::from_millis(RETRY_BACKOFF_MS * attempt as u64)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn get_text_once(&self, url: &str) -> Result<String, FetchError> {
        let resp = self
            .client
            .get(url)
            .header("Accept", "text/html,application/json;q=0.9,*/*;q=0.8")
            .send()
            .await
            .map_err(|e| FetchError::classify(url, e))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Http { status: status.as_u16(), url: url.to_string() });
        }

        resp.text().await.map_err(|e| FetchError::Body(e.to_string()))
    }
}
