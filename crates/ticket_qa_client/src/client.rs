//! HTTP client: POST a question to the answering endpoint and decode the reply.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::StatusCode;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::config::Config;
use crate::messages::{AnswerResponse, Question, QuestionRequest};

/// Path of the question endpoint relative to the server base URL.
pub const DEFAULT_QUESTION_PATH: &str = "/api/question";

/// Request or decode failure. Only ever logged; users see a generic message.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid endpoint url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with {0}")]
    Status(StatusCode),
    #[error("malformed answer body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Anything that can answer a question. The controller depends on this seam.
#[async_trait]
pub trait AnswerService: Send + Sync {
    async fn ask(&self, question: &Question) -> Result<AnswerResponse, ClientError>;
}

/// Answering service reached over HTTP.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
}

/// Join `base_url` and `path` into the endpoint URL.
pub fn endpoint_url(base_url: &str, path: &str) -> Result<Url, ClientError> {
    let joined = format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|source| ClientError::InvalidUrl {
        url: joined,
        source,
    })
}

impl Client {
    /// Client posting to `{base_url}/api/question` with no request timeout.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_endpoint(endpoint_url(base_url, DEFAULT_QUESTION_PATH)?, None)
    }

    /// Client built from the `server` section of the config.
    pub fn from_config(config: &Config) -> Result<Self, ClientError> {
        let endpoint = endpoint_url(config.server.base_url(), config.server.question_path())?;
        let timeout = config.server.timeout_secs.map(Duration::from_secs);
        Self::with_endpoint(endpoint, timeout)
    }

    fn with_endpoint(endpoint: Url, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl AnswerService for Client {
    /// Send one POST and decode the answer. Non-2xx is an error; the body is not read.
    async fn ask(&self, question: &Question) -> Result<AnswerResponse, ClientError> {
        let body = serde_json::to_vec(&QuestionRequest::new(question))?;
        debug!(endpoint = %self.endpoint, "posting question");
        let response = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        let bytes = response.bytes().await?;
        let answer = AnswerResponse::from_json(&bytes)?;
        debug!(tickets = answer.tickets.len(), "answer received");
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_joins_without_double_slash() {
        let url = endpoint_url("http://localhost:8000/", "/api/question").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/question");
        let url = endpoint_url("http://localhost:8000", "api/question").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8000/api/question");
    }

    #[test]
    fn endpoint_rejects_garbage() {
        let err = endpoint_url("not a url", "/api/question").unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl { .. }));
    }
}
