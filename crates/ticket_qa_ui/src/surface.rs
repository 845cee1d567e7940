//! UI surfaces the controller writes to, handed over explicitly at construction.
//!
//! `MemoryPage` keeps every surface in one shared in-memory record. The CLI
//! reads it back after a submission and tests inspect it directly.

use std::sync::{Arc, Mutex, MutexGuard};

/// The submit button.
pub trait SubmitControl: Send {
    fn is_enabled(&self) -> bool;
    fn set_enabled(&mut self, enabled: bool);
    fn label(&self) -> String;
    fn set_label(&mut self, label: &str);
}

/// Container wrapping the answer and ticket list; hidden until first use.
pub trait ResponseSection: Send {
    fn reveal(&mut self);
}

/// A surface whose whole content is replaced with markup.
pub trait MarkupSurface: Send {
    fn set_markup(&mut self, markup: String);
}

/// User-facing notices (validation messages).
pub trait Notifier: Send {
    fn notify(&mut self, message: &str);
}

/// Handles to every surface the controller owns.
pub struct Surfaces {
    pub submit: Box<dyn SubmitControl>,
    pub section: Box<dyn ResponseSection>,
    pub content: Box<dyn MarkupSurface>,
    pub tickets: Box<dyn MarkupSurface>,
    pub notices: Box<dyn Notifier>,
}

/// Snapshot of everything the surfaces currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub submit_enabled: bool,
    pub submit_label: String,
    pub section_visible: bool,
    pub content: String,
    pub tickets: String,
    pub notices: Vec<String>,
}

impl PageState {
    fn new(submit_label: &str) -> Self {
        Self {
            submit_enabled: true,
            submit_label: submit_label.to_string(),
            section_visible: false,
            content: String::new(),
            tickets: String::new(),
            notices: Vec::new(),
        }
    }
}

/// In-memory page. Clones share the same state.
#[derive(Debug, Clone)]
pub struct MemoryPage {
    state: Arc<Mutex<PageState>>,
}

impl MemoryPage {
    pub fn new(submit_label: &str) -> Self {
        Self {
            state: Arc::new(Mutex::new(PageState::new(submit_label))),
        }
    }

    /// Current contents of every surface.
    pub fn snapshot(&self) -> PageState {
        self.lock().clone()
    }

    /// Surface handles backed by this page.
    pub fn surfaces(&self) -> Surfaces {
        Surfaces {
            submit: Box::new(MemorySubmit(self.clone())),
            section: Box::new(MemorySection(self.clone())),
            content: Box::new(MemoryContent(self.clone())),
            tickets: Box::new(MemoryTickets(self.clone())),
            notices: Box::new(MemoryNotices(self.clone())),
        }
    }

    fn lock(&self) -> MutexGuard<'_, PageState> {
        // Writers assign whole fields, so a poisoned record is still consistent.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

struct MemorySubmit(MemoryPage);
struct MemorySection(MemoryPage);
struct MemoryContent(MemoryPage);
struct MemoryTickets(MemoryPage);
struct MemoryNotices(MemoryPage);

impl SubmitControl for MemorySubmit {
    fn is_enabled(&self) -> bool {
        self.0.lock().submit_enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.0.lock().submit_enabled = enabled;
    }

    fn label(&self) -> String {
        self.0.lock().submit_label.clone()
    }

    fn set_label(&mut self, label: &str) {
        self.0.lock().submit_label = label.to_string();
    }
}

impl ResponseSection for MemorySection {
    fn reveal(&mut self) {
        self.0.lock().section_visible = true;
    }
}

impl MarkupSurface for MemoryContent {
    fn set_markup(&mut self, markup: String) {
        self.0.lock().content = markup;
    }
}

impl MarkupSurface for MemoryTickets {
    fn set_markup(&mut self, markup: String) {
        self.0.lock().tickets = markup;
    }
}

impl Notifier for MemoryNotices {
    fn notify(&mut self, message: &str) {
        self.0.lock().notices.push(message.to_string());
    }
}
