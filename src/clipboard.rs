//! System clipboard access
//!
//! Writes go through the [`ClipboardBackend`] trait so the UI can run against
//! the real clipboard (`arboard`) or an in-memory stand-in.

use std::sync::{Arc, Mutex};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("clipboard write failed: {0}")]
    Write(String),
}

/// Something that can receive text
pub trait ClipboardBackend: Send {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// Backend handle shared between the UI and blocking write tasks
pub type SharedClipboard = Arc<Mutex<Box<dyn ClipboardBackend>>>;

pub fn shared(backend: impl ClipboardBackend + 'static) -> SharedClipboard {
    Arc::new(Mutex::new(Box::new(backend)))
}

/// The operating system clipboard.
///
/// Kept alive for the whole session: on X11 and Wayland the copied text is
/// only served while the owning handle exists.
pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> Result<Self, ClipboardError> {
        let inner = arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.inner
            .set_text(text.to_owned())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

/// In-memory clipboard recording every write; clones share the same history
#[derive(Debug, Clone, Default)]
pub struct MemoryClipboard {
    history: Arc<Mutex<Vec<String>>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// All texts written so far, oldest first
    pub fn history(&self) -> Vec<String> {
        self.history.lock().map(|h| h.clone()).unwrap_or_default()
    }

    /// The most recent write
    pub fn contents(&self) -> Option<String> {
        self.history.lock().ok().and_then(|h| h.last().cloned())
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.history
            .lock()
            .map_err(|e| ClipboardError::Write(e.to_string()))?
            .push(text.to_owned());
        Ok(())
    }
}
