//! Clipboard copy with a self-clearing "copied" acknowledgement

use super::actions::Action;
use super::task_manager::{TaskId, TaskManager};
use crate::clipboard::SharedClipboard;
use crate::state::CopiedState;
use std::time::Duration;

/// Copies text and keeps track of what was copied last.
///
/// The clipboard write is fire-and-forget; the acknowledgement is set
/// immediately. A newer copy cancels the reset timer of the previous one, so
/// the acknowledgement always lasts the full delay after the latest copy.
pub struct ClipboardNotifier {
    clipboard: Option<SharedClipboard>,
    copied: CopiedState,
    clear_after: Duration,
    pending_reset: Option<TaskId>,
}

impl ClipboardNotifier {
    /// `clipboard` is `None` when no system clipboard could be opened; copies
    /// still update the acknowledgement.
    pub fn new(clipboard: Option<SharedClipboard>, clear_after: Duration) -> Self {
        Self {
            clipboard,
            copied: CopiedState::default(),
            clear_after,
            pending_reset: None,
        }
    }

    pub fn copy(&mut self, text: String, tasks: &mut TaskManager) {
        if let Some(clipboard) = &self.clipboard {
            tasks.spawn_clipboard_write(clipboard.clone(), text.clone());
        }

        let generation = self.copied.copied(text);

        if let Some(previous) = self.pending_reset.take() {
            tasks.cancel(previous);
        }
        self.pending_reset = Some(tasks.spawn_delayed_action(
            Action::ResetCopied(generation),
            self.clear_after,
            format!("Reset copied state #{}", generation),
        ));
    }

    /// Apply a reset delivered by the timer; stale generations are ignored
    pub fn reset(&mut self, generation: u64) -> bool {
        let cleared = self.copied.reset(generation);
        if cleared {
            self.pending_reset = None;
        }
        cleared
    }

    pub fn copied(&self) -> &CopiedState {
        &self.copied
    }

    pub fn has_clipboard(&self) -> bool {
        self.clipboard.is_some()
    }

    pub fn clear_after(&self) -> Duration {
        self.clear_after
    }
}
