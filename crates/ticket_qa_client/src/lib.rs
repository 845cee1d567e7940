//! Ticket Q&A client library (wire messages, HTTP client, markup rendering, config).
//! Used by the question submission controller and the `ticket-qa` CLI.

pub mod client;
pub mod config;
pub mod messages;
pub mod render;

pub use client::{endpoint_url, AnswerService, Client, ClientError};
pub use config::{default_config_path, Config, ConfigError, LoggingSection, ServerSection, UiSection};
pub use messages::{AnswerResponse, Question, QuestionRequest, Ticket, ValidationError};
pub use render::{render_answer, render_tickets, NO_TICKETS_MARKUP};
