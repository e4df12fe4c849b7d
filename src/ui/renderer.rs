use crate::clipboard::{self, SharedClipboard, SystemClipboard};
use crate::config::Config;
use crate::constants::LOG_CLIPBOARD_UNAVAILABLE;
use crate::logger::Logger;
use crate::ui::app_component::AppComponent;
use crate::ui::core::{Component, EventHandler, EventType};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::io;
use tokio::time::Duration;

/// Redraw at least this often so the relative preview keeps moving
const IDLE_REDRAW: Duration = Duration::from_secs(1);

/// Open the system clipboard if the config allows it.
///
/// A missing clipboard is not fatal: copies still flip the "copied" state.
fn open_clipboard(config: &Config, logger: &Logger) -> Option<SharedClipboard> {
    if !config.clipboard.enabled {
        logger.log("Clipboard: disabled by configuration".to_string());
        return None;
    }

    match SystemClipboard::new() {
        Ok(system) => Some(clipboard::shared(system)),
        Err(e) => {
            logger.warn(format!("{}: {}", LOG_CLIPBOARD_UNAVAILABLE, e));
            None
        }
    }
}

/// Run the interactive picker until the user quits
pub async fn run_app(config: &Config, logger: Logger) -> anyhow::Result<()> {
    let clipboard = open_clipboard(config, &logger);
    let mut app = AppComponent::new(config, logger, clipboard)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut event_handler = EventHandler::new();
    let result = run_app_loop(&mut terminal, &mut app, &mut event_handler).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppComponent,
    event_handler: &mut EventHandler,
) -> anyhow::Result<()> {
    let mut needs_render = true;

    loop {
        if needs_render {
            terminal.draw(|f| app.render(f, f.area()))?;
            event_handler.mark_rendered();
            needs_render = false;
        }

        match event_handler.next_event().await? {
            event @ (EventType::Key(_) | EventType::Resize(_, _)) => {
                app.handle_event(event);
                needs_render = true;
            }
            EventType::Tick => {
                if app.process_background_actions() > 0 || event_handler.time_since_last_render() >= IDLE_REDRAW {
                    needs_render = true;
                }
            }
            EventType::Other => {}
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(())
}
