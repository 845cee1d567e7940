//! JSON messages exchanged with the question-answering endpoint.
//! Client → server: `{"question": ...}`. Server → client: answer plus related tickets.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A user question, trimmed and guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

/// Rejected user input; recovered locally without touching the network.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a question")]
    EmptyQuestion,
}

impl Question {
    /// Trim `raw` and reject it when nothing is left.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyQuestion);
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Client → server: question request body.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionRequest<'a> {
    pub question: &'a str,
}

impl<'a> QuestionRequest<'a> {
    pub fn new(question: &'a Question) -> Self {
        Self {
            question: question.as_str(),
        }
    }
}

/// Support ticket surfaced alongside an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ticket {
    pub ticket_id: String,
    pub issue: String,
    pub resolution: String,
}

/// Server → client: answer with related tickets.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawAnswerResponse")]
pub struct AnswerResponse {
    pub answer: String,
    pub tickets: Vec<Ticket>,
}

/// Wire shape: `tickets` may be missing or `null`.
#[derive(Deserialize)]
struct RawAnswerResponse {
    answer: String,
    #[serde(default)]
    tickets: Option<Vec<Ticket>>,
}

impl From<RawAnswerResponse> for AnswerResponse {
    fn from(raw: RawAnswerResponse) -> Self {
        Self {
            answer: raw.answer,
            tickets: raw.tickets.unwrap_or_default(),
        }
    }
}

impl AnswerResponse {
    pub fn from_json(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }
}
