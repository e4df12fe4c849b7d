use crate::clipboard::SharedClipboard;
use crate::config::Config;
use crate::constants::{APP_TITLE, LOG_CLIPBOARD_WRITE_FAILED, NO_DATE_SELECTED};
use crate::icons::IconService;
use crate::logger::Logger;
use crate::state::SelectionState;
use crate::timestamp::{self, TimestampFormat, ZoneSetting};
use crate::ui::components::{
    CalendarComponent, DialogComponent, FormatListComponent, FormatRow, StatusBar, TimeInputComponent,
};
use crate::ui::core::{
    actions::{Action, DialogType, Focus},
    event_handler::EventType,
    ClipboardNotifier, Component, TaskManager,
};
use crate::ui::layout::LayoutManager;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use tokio::sync::mpsc;

/// Application state separate from UI concerns
#[derive(Debug, Clone)]
pub struct AppState {
    pub selection: SelectionState,
    pub focus: Focus,
    pub error_message: Option<String>,
}

impl AppState {
    pub fn new(selection: SelectionState) -> Self {
        Self {
            selection,
            focus: Focus::default(),
            error_message: None,
        }
    }
}

pub struct AppComponent {
    // Component composition
    calendar: CalendarComponent,
    time_input: TimeInputComponent,
    formats: FormatListComponent,
    dialog: DialogComponent,

    // Application state
    state: AppState,
    zone: ZoneSetting,
    show_preview: bool,
    icons: IconService,

    // Services
    notifier: ClipboardNotifier,
    task_manager: TaskManager,
    background_action_rx: mpsc::UnboundedReceiver<Action>,
    logger: Logger,

    should_quit: bool,
}

impl AppComponent {
    /// Build the UI from a validated configuration.
    ///
    /// Must be called inside a tokio runtime: copies spawn background tasks.
    pub fn new(config: &Config, logger: Logger, clipboard: Option<SharedClipboard>) -> anyhow::Result<Self> {
        let zone = config.display.zone()?;
        let week_start = config.ui.week_start()?;
        let icons = IconService::new(config.display.icon_theme);

        let selection = SelectionState::starting_today(zone, config.ui.initial_time());

        let mut calendar = CalendarComponent::new(zone.today(), selection.date(), week_start);
        calendar.date_format = config.display.date_format.clone();
        calendar.icons = icons.clone();
        calendar.on_focus();

        let mut time_input = TimeInputComponent::new(selection.time());
        time_input.icons = icons.clone();

        let mut formats = FormatListComponent::new();
        formats.icons = icons.clone();

        let (task_manager, background_action_rx) = TaskManager::new();
        let notifier = ClipboardNotifier::new(clipboard, config.clipboard.clear_after());

        logger.log(format!(
            "AppComponent: started with zone {}, clipboard {}",
            zone,
            if notifier.has_clipboard() { "available" } else { "disabled" }
        ));

        Ok(Self {
            calendar,
            time_input,
            formats,
            dialog: DialogComponent::new(),
            state: AppState::new(selection),
            zone,
            show_preview: config.display.show_preview,
            icons,
            notifier,
            task_manager,
            background_action_rx,
            logger,
            should_quit: false,
        })
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn zone(&self) -> ZoneSetting {
        self.zone
    }

    /// Markup currently acknowledged as copied, or empty
    pub fn copied_text(&self) -> &str {
        self.notifier.copied().text()
    }

    pub fn dialog_type(&self) -> Option<DialogType> {
        self.dialog.dialog_type
    }

    /// Get the number of active background tasks
    pub fn active_task_count(&self) -> usize {
        self.task_manager.task_count()
    }

    /// Rows for the format table, recomputed from the current selection.
    ///
    /// `now` (epoch seconds) anchors the relative-time preview.
    pub fn rows(&self, now: i64) -> Vec<FormatRow> {
        let selection = &self.state.selection;
        let epoch = selection.epoch(self.zone);

        TimestampFormat::ALL
            .into_iter()
            .map(|format| {
                let rendered = selection.rendered(format, self.zone);
                let preview = match epoch {
                    Some(epoch) if self.show_preview => Some(timestamp::preview(epoch, format, self.zone, now)),
                    _ => None,
                };
                FormatRow {
                    format,
                    copied: self.notifier.copied().matches(&rendered),
                    rendered,
                    preview,
                }
            })
            .collect()
    }

    fn set_focus(&mut self, focus: Focus) {
        if focus == self.state.focus {
            return;
        }
        self.focused_component().on_blur();
        self.state.focus = focus;
        self.focused_component().on_focus();
    }

    fn focused_component(&mut self) -> &mut dyn Component {
        match self.state.focus {
            Focus::Calendar => &mut self.calendar,
            Focus::Time => &mut self.time_input,
            Focus::Formats => &mut self.formats,
        }
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Option<Action> {
        let action = match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.logger.log("Global key: Ctrl+C - quitting application".to_string());
                Action::Quit
            }
            KeyCode::Char('q') | KeyCode::Esc => {
                self.logger.log("Global key: quitting application".to_string());
                Action::Quit
            }
            KeyCode::Tab => Action::FocusNext,
            KeyCode::BackTab => Action::FocusPrevious,
            KeyCode::Char('?') => Action::ShowDialog(DialogType::Help),
            KeyCode::Char('G') => Action::ShowDialog(DialogType::Logs),
            KeyCode::Char('i') => Action::CycleIcons,
            KeyCode::Char(digit @ '1'..='7') if self.state.focus != Focus::Time => {
                let index = digit as usize - '1' as usize;
                Action::Copy(TimestampFormat::ALL[index])
            }
            _ => return None,
        };
        Some(action)
    }

    /// Route a key press: open dialog first, then global shortcuts, then the focused pane
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.dialog.is_visible() {
            return self.dialog.handle_key_events(key);
        }

        if let Some(action) = self.handle_global_key(key) {
            return action;
        }

        self.focused_component().handle_key_events(key)
    }

    pub fn handle_event(&mut self, event: EventType) -> Action {
        match event {
            EventType::Key(key) => {
                let action = self.handle_key(key);
                self.apply(action)
            }
            _ => Action::None,
        }
    }

    /// Apply an action to the state and the components that mirror it
    pub fn apply(&mut self, action: Action) -> Action {
        if !matches!(action, Action::None | Action::ResetCopied(_) | Action::ClipboardFailed(_)) {
            self.state.error_message = None;
        }

        match &action {
            Action::SelectDate(date) => {
                self.logger.log(format!("Selection: date {}", date));
                self.state.selection.select_date(*date);
                self.calendar.update(action.clone());
            }
            Action::ClearDate => {
                self.logger.log("Selection: date cleared".to_string());
                self.state.selection.clear_date();
                self.calendar.update(action.clone());
            }
            Action::SetTime(time) => {
                self.state.selection.set_time(time.clone());
                self.time_input.update(action.clone());
            }
            Action::Copy(format) => {
                let text = self.state.selection.rendered(*format, self.zone);
                if text.is_empty() {
                    self.state.error_message = Some(format!("❌ Nothing to copy: {}", NO_DATE_SELECTED));
                    self.logger.log("Copy: skipped, no date selected".to_string());
                } else {
                    self.logger.log(format!("Copy: {} {}", format.label(), text));
                    self.notifier.copy(text, &mut self.task_manager);
                }
            }
            Action::ResetCopied(generation) => {
                if self.notifier.reset(*generation) {
                    self.logger.log(format!("Copy: acknowledgement #{} cleared", generation));
                }
            }
            Action::ClipboardFailed(error) => {
                // The UI keeps showing the copy as done; only the log records the failure
                self.logger.warn(format!("{}: {}", LOG_CLIPBOARD_WRITE_FAILED, error));
            }
            Action::FocusNext => self.set_focus(self.state.focus.next()),
            Action::FocusPrevious => self.set_focus(self.state.focus.previous()),
            Action::Focus(focus) => self.set_focus(*focus),
            Action::ShowDialog(dialog_type) => {
                if *dialog_type == DialogType::Logs {
                    self.dialog.update_logs(self.logger.get_logs());
                }
                self.dialog.update(action.clone());
            }
            Action::HideDialog => {
                self.dialog.update(action.clone());
            }
            Action::CycleIcons => {
                self.icons.cycle_icon_theme();
                self.calendar.icons = self.icons.clone();
                self.time_input.icons = self.icons.clone();
                self.formats.icons = self.icons.clone();
                self.logger.log(format!("Icons: switched to {:?}", self.icons.theme()));
            }
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }

        action
    }

    /// Apply every action delivered by background tasks since the last call
    pub fn process_background_actions(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(action) = self.background_action_rx.try_recv() {
            self.apply(action);
            processed += 1;
        }
        self.task_manager.cleanup_finished_tasks();
        processed
    }

    /// Wait for the next action from a background task and apply it
    pub async fn next_background_action(&mut self) -> Option<Action> {
        let action = self.background_action_rx.recv().await?;
        Some(self.apply(action))
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let header = Line::from(vec![
            Span::styled(
                format!("{} {}", self.icons.icons().ui.app_title, APP_TITLE),
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} {}", self.state.selection.time(), self.zone),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        f.render_widget(Paragraph::new(header).alignment(Alignment::Center), area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.handle_key(key)
    }

    fn update(&mut self, action: Action) -> Action {
        self.apply(action)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let chunks = LayoutManager::main_layout(rect);
        self.render_header(f, chunks[0]);

        let body = LayoutManager::body_layout(chunks[1]);
        let picker = LayoutManager::picker_layout(body[0]);
        self.calendar.render(f, picker[0]);
        self.time_input.render(f, picker[1]);

        let rows = self.rows(chrono::Utc::now().timestamp());
        self.formats.update_rows(rows);
        self.formats.render(f, body[1]);

        StatusBar::render(
            f,
            chunks[2],
            &self.zone.to_string(),
            self.notifier.copied().text(),
            self.state.error_message.as_deref(),
        );

        if self.dialog.is_visible() {
            self.dialog.render(f, rect);
        }
    }
}
