//! Question submission controller: validate, post, render into the surfaces.
//!
//! Lifecycle per submission: idle → submitting → (rendered | errored) → idle.
//! The disabled submit control is what keeps submissions serialized; nothing
//! is ever cancelled.

use std::sync::{Mutex, MutexGuard};

use ticket_qa_client::config::DEFAULT_BUSY_LABEL;
use ticket_qa_client::{render_answer, render_tickets, AnswerService, Question};
use tracing::{debug, error, info, warn};

use crate::surface::Surfaces;

/// Answer surface content while a request is in flight.
pub const LOADING_MARKUP: &str = r#"<div class="loading">Analyzing your question</div>"#;

/// Answer surface content after any transport or decode failure.
pub const ERROR_MARKUP: &str = r#"<div class="error">An error occurred while processing your request. Please try again.</div>"#;

/// What a call to [`QuestionController::submit`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty question; a notice was shown and nothing was sent.
    Rejected,
    /// Submit control disabled by an earlier submission still in flight.
    Busy,
    /// Answer and tickets rendered.
    Rendered,
    /// Request failed; the generic error message is shown.
    Failed,
}

/// Ctrl+Enter in the question input submits.
pub fn is_submit_shortcut(key: &str, ctrl: bool) -> bool {
    ctrl && key == "Enter"
}

pub struct QuestionController<S> {
    service: S,
    surfaces: Mutex<Surfaces>,
    submit_label: String,
    busy_label: String,
}

impl<S: AnswerService> QuestionController<S> {
    /// Take ownership of the surfaces. The submit control's current label is
    /// the one restored after every submission.
    pub fn new(service: S, surfaces: Surfaces) -> Self {
        let submit_label = surfaces.submit.label();
        Self {
            service,
            surfaces: Mutex::new(surfaces),
            submit_label,
            busy_label: DEFAULT_BUSY_LABEL.to_string(),
        }
    }

    pub fn with_busy_label(mut self, label: impl Into<String>) -> Self {
        self.busy_label = label.into();
        self
    }

    /// Submit `raw` as a question.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let question = {
            let mut surfaces = self.lock();
            if !surfaces.submit.is_enabled() {
                debug!("submit ignored, request already in flight");
                return SubmitOutcome::Busy;
            }
            let question = match Question::parse(raw) {
                Ok(q) => q,
                Err(e) => {
                    warn!("rejected submission: {}", e);
                    surfaces.notices.notify(&e.to_string());
                    return SubmitOutcome::Rejected;
                }
            };
            surfaces.submit.set_enabled(false);
            surfaces.submit.set_label(&self.busy_label);
            surfaces.section.reveal();
            surfaces.content.set_markup(LOADING_MARKUP.to_string());
            surfaces.tickets.set_markup(String::new());
            question
        };

        info!(chars = question.as_str().len(), "submitting question");
        let result = self.service.ask(&question).await;

        let mut surfaces = self.lock();
        let outcome = match result {
            Ok(response) => {
                debug!(tickets = response.tickets.len(), "rendering answer");
                surfaces.content.set_markup(render_answer(&response.answer));
                surfaces.tickets.set_markup(render_tickets(&response.tickets));
                SubmitOutcome::Rendered
            }
            Err(e) => {
                error!(error = %e, "question request failed");
                surfaces.content.set_markup(ERROR_MARKUP.to_string());
                SubmitOutcome::Failed
            }
        };
        surfaces.submit.set_enabled(true);
        surfaces.submit.set_label(&self.submit_label);
        outcome
    }

    /// Key event in the question input. Returns `None` when the key is not
    /// the submit shortcut.
    pub async fn handle_key(&self, key: &str, ctrl: bool, input: &str) -> Option<SubmitOutcome> {
        if !is_submit_shortcut(key, ctrl) {
            return None;
        }
        Some(self.submit(input).await)
    }

    fn lock(&self) -> MutexGuard<'_, Surfaces> {
        self.surfaces
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
