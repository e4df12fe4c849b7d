use super::actions::Action;
use crate::clipboard::SharedClipboard;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type TaskId = u64;

#[derive(Debug)]
pub struct BackgroundTask {
    pub id: TaskId,
    pub handle: JoinHandle<TaskResult>,
    pub description: String,
    pub started_at: std::time::Instant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskResult {
    ClipboardWritten,
    ClipboardFailed(String),
    ActionSent,
}

/// Runs background work for the UI and reports back through an action channel.
///
/// Tasks never surface errors directly: failures are turned into actions and
/// the UI loop decides what to do with them.
pub struct TaskManager {
    tasks: HashMap<TaskId, BackgroundTask>,
    next_task_id: TaskId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl TaskManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                tasks: HashMap::new(),
                next_task_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    fn register(&mut self, handle: JoinHandle<TaskResult>, description: String) -> TaskId {
        let task_id = self.next_task_id;
        self.next_task_id += 1;

        let task = BackgroundTask {
            id: task_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.tasks.insert(task_id, task);
        task_id
    }

    /// Write `text` to the clipboard on a blocking worker.
    ///
    /// Nobody waits for the result; a failure is logged and reported as
    /// [`Action::ClipboardFailed`].
    pub fn spawn_clipboard_write(&mut self, clipboard: SharedClipboard, text: String) -> TaskId {
        let action_sender = self.action_sender.clone();
        let description = format!("Clipboard write: {}", text);

        let handle = tokio::task::spawn_blocking(move || {
            let outcome = match clipboard.lock() {
                Ok(mut backend) => backend.set_text(&text).map_err(|e| e.to_string()),
                Err(e) => Err(format!("clipboard lock poisoned: {}", e)),
            };

            match outcome {
                Ok(()) => TaskResult::ClipboardWritten,
                Err(error_msg) => {
                    // Reported to the UI, which owns the log entry
                    let _ = action_sender.send(Action::ClipboardFailed(error_msg.clone()));
                    TaskResult::ClipboardFailed(error_msg)
                }
            }
        });

        self.register(handle, description)
    }

    /// Send `action` back to the UI after `delay`
    pub fn spawn_delayed_action(&mut self, action: Action, delay: Duration, description: String) -> TaskId {
        let action_sender = self.action_sender.clone();

        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = action_sender.send(action);
            TaskResult::ActionSent
        });

        self.register(handle, description)
    }

    /// Abort a task if it is still tracked; returns whether it was
    pub fn cancel(&mut self, task_id: TaskId) -> bool {
        match self.tasks.remove(&task_id) {
            Some(task) => {
                task.handle.abort();
                true
            }
            None => false,
        }
    }

    /// Drop finished tasks and return their ids and descriptions
    pub fn cleanup_finished_tasks(&mut self) -> Vec<(TaskId, String)> {
        let finished: Vec<TaskId> = self
            .tasks
            .iter()
            .filter(|(_, task)| task.handle.is_finished())
            .map(|(task_id, _)| *task_id)
            .collect();

        finished
            .into_iter()
            .filter_map(|task_id| self.tasks.remove(&task_id).map(|task| (task.id, task.description)))
            .collect()
    }

    /// Cancel all running tasks
    pub fn cancel_all_tasks(&mut self) {
        for (_, task) in self.tasks.drain() {
            task.handle.abort();
        }
    }

    /// Get the number of active tasks
    pub fn task_count(&self) -> usize {
        self.tasks.len()
    }
}

impl Drop for TaskManager {
    fn drop(&mut self) {
        // Cancel all tasks when the manager is dropped
        self.cancel_all_tasks();
    }
}
