//! Client for the homework statuses API.

use std::error::Error as _;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use homework_common::config::AppConfig;
use homework_common::error::HomeworkError;
use homework_common::types::PollCursor;

/// Source of homework status snapshots.
#[async_trait]
pub trait HomeworkApi: Send + Sync {
    /// Fetch every homework updated at or after `cursor`.
    ///
    /// Returns the decoded body as-is; shape checks are the caller's job.
    async fn fetch(&self, cursor: PollCursor) -> Result<Value, HomeworkError>;
}

/// HTTP client authenticating with an OAuth token.
pub struct PracticumClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(
        endpoint: impl Into<String>,
        token: impl Into<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }

    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        Self::new(
            config.endpoint.clone(),
            config.practicum_token.clone(),
            config.request_timeout,
        )
    }
}

#[async_trait]
impl HomeworkApi for PracticumClient {
    async fn fetch(&self, cursor: PollCursor) -> Result<Value, HomeworkError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", cursor.timestamp())])
            .send()
            .await
            .map_err(|e| HomeworkError::Fetch(describe(e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::warn!(status = status.as_u16(), "Homework API answered with non-200 status");
            return Err(HomeworkError::BadStatusCode(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| HomeworkError::Fetch(describe(e)))?;

        serde_json::from_slice(&body).map_err(|e| HomeworkError::Decode(e.to_string()))
    }
}

/// Flatten a reqwest error and its causes into one line.
///
/// The URL is dropped: it changes with the cursor, and the text has to stay
/// stable across polls for error dedup to work.
fn describe(error: reqwest::Error) -> String {
    let error = error.without_url();
    let mut detail = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        detail.push_str(": ");
        detail.push_str(&cause.to_string());
        source = cause.source();
    }
    detail
}
