//! Question submission controller for the ticket Q&A client, plus the UI
//! surfaces it renders into. The `ticket-qa` binary drives it from a terminal.

pub mod controller;
pub mod surface;

pub use controller::{is_submit_shortcut, QuestionController, SubmitOutcome, ERROR_MARKUP, LOADING_MARKUP};
pub use surface::{MarkupSurface, MemoryPage, Notifier, PageState, ResponseSection, SubmitControl, Surfaces};
