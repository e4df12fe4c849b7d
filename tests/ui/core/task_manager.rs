use std::time::Duration;
use stampgen::clipboard::{self, ClipboardBackend, ClipboardError, MemoryClipboard};
use stampgen::ui::core::{Action, TaskManager};

struct BrokenClipboard;

impl ClipboardBackend for BrokenClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Write("no display".to_string()))
    }
}

#[tokio::test(start_paused = true)]
async fn test_delayed_action_is_delivered() {
    let (mut tasks, mut rx) = TaskManager::new();
    let start = tokio::time::Instant::now();

    tasks.spawn_delayed_action(Action::ResetCopied(7), Duration::from_millis(2000), "reset".to_string());
    assert_eq!(tasks.task_count(), 1);

    assert_eq!(rx.recv().await, Some(Action::ResetCopied(7)));
    assert!(start.elapsed() >= Duration::from_millis(2000));
}

#[tokio::test(start_paused = true)]
async fn test_cancelled_action_never_arrives() {
    let (mut tasks, mut rx) = TaskManager::new();

    let id = tasks.spawn_delayed_action(Action::ResetCopied(1), Duration::from_millis(100), "reset".to_string());
    assert!(tasks.cancel(id));
    assert!(!tasks.cancel(id));
    assert_eq!(tasks.task_count(), 0);

    let received = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await;
    assert!(received.is_err());
}

#[tokio::test]
async fn test_clipboard_write_and_cleanup() {
    let (mut tasks, _rx) = TaskManager::new();
    let memory = MemoryClipboard::new();

    tasks.spawn_clipboard_write(clipboard::shared(memory.clone()), "<t:0:t>".to_string());

    for _ in 0..100 {
        if memory.contents().is_some() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(memory.history(), vec!["<t:0:t>".to_string()]);

    // Give the blocking task a moment to report completion
    for _ in 0..100 {
        if !tasks.cleanup_finished_tasks().is_empty() || tasks.task_count() == 0 {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(tasks.task_count(), 0);
}

#[tokio::test]
async fn test_clipboard_failure_is_reported_as_action() {
    let (mut tasks, mut rx) = TaskManager::new();

    tasks.spawn_clipboard_write(clipboard::shared(BrokenClipboard), "<t:0:t>".to_string());

    match tokio::time::timeout(Duration::from_secs(5), rx.recv()).await {
        Ok(Some(Action::ClipboardFailed(message))) => assert!(message.contains("no display")),
        other => panic!("expected a clipboard failure, got {:?}", other),
    }
}
