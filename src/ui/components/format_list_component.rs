use crate::constants::{NO_DATE_SELECTED, TITLE_FORMATS};
use crate::icons::IconService;
use crate::timestamp::TimestampFormat;
use crate::ui::components::badge::create_code_badge;
use crate::ui::core::{Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState},
    Frame,
};

/// One line of the format table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatRow {
    pub format: TimestampFormat,
    pub rendered: String,
    pub preview: Option<String>,
    pub copied: bool,
}

pub struct FormatListComponent {
    pub rows: Vec<FormatRow>,
    pub selected_index: usize,
    pub list_state: ListState,
    pub focused: bool,
    pub icons: IconService,
}

impl Default for FormatListComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FormatListComponent {
    pub fn new() -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));

        Self {
            rows: Vec::new(),
            selected_index: 0,
            list_state,
            focused: false,
            icons: IconService::default(),
        }
    }

    pub fn update_rows(&mut self, rows: Vec<FormatRow>) {
        self.rows = rows;
        if self.selected_index >= TimestampFormat::ALL.len() {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    pub fn selected_format(&self) -> TimestampFormat {
        TimestampFormat::ALL[self.selected_index % TimestampFormat::ALL.len()]
    }

    pub fn next(&mut self) {
        self.selected_index = (self.selected_index + 1) % TimestampFormat::ALL.len();
        self.list_state.select(Some(self.selected_index));
    }

    pub fn previous(&mut self) {
        self.selected_index = if self.selected_index == 0 {
            TimestampFormat::ALL.len() - 1
        } else {
            self.selected_index - 1
        };
        self.list_state.select(Some(self.selected_index));
    }

    fn label_width(&self) -> usize {
        TimestampFormat::ALL
            .iter()
            .map(|format| format.label().len())
            .max()
            .unwrap_or_default()
    }

    fn create_row_item(&self, row: &FormatRow, label_width: usize) -> ListItem<'static> {
        let mut spans = vec![
            create_code_badge(row.format.code()),
            Span::raw(" "),
            Span::styled(
                format!("{:<width$}", row.format.label(), width = label_width),
                Style::default().fg(Color::Gray),
            ),
            Span::raw("  "),
        ];

        if row.rendered.is_empty() {
            spans.push(Span::styled(NO_DATE_SELECTED, Style::default().fg(Color::DarkGray)));
        } else {
            spans.push(Span::styled(
                row.rendered.clone(),
                Style::default().fg(Color::Rgb(114, 137, 218)).add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(" "));
            let icon_style = if row.copied {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(self.icons.copy_state(row.copied), icon_style));
        }

        let mut lines = vec![Line::from(spans)];
        if let Some(preview) = &row.preview {
            lines.push(Line::from(Span::styled(
                format!("    {:<width$}  {}", "", preview, width = label_width),
                Style::default().fg(Color::DarkGray).add_modifier(Modifier::ITALIC),
            )));
        }

        ListItem::new(lines)
    }
}

impl Component for FormatListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.next();
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.previous();
                Action::None
            }
            KeyCode::Home => {
                self.selected_index = 0;
                self.list_state.select(Some(0));
                Action::None
            }
            KeyCode::End => {
                self.selected_index = TimestampFormat::ALL.len() - 1;
                self.list_state.select(Some(self.selected_index));
                Action::None
            }
            KeyCode::Enter | KeyCode::Char('c') | KeyCode::Char('y') => Action::Copy(self.selected_format()),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let border_color = if self.focused { Color::Cyan } else { Color::DarkGray };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .title(format!(" {} {} ", self.icons.icons().ui.formats_title, TITLE_FORMATS))
            .border_style(Style::default().fg(border_color));

        let label_width = self.label_width();
        let items: Vec<ListItem> = self.rows.iter().map(|row| self.create_row_item(row, label_width)).collect();

        let highlight = if self.focused {
            Style::default().bg(Color::Rgb(64, 68, 75))
        } else {
            Style::default()
        };

        let list = List::new(items).block(block).highlight_style(highlight);
        f.render_stateful_widget(list, rect, &mut self.list_state);
    }

    fn on_focus(&mut self) {
        self.focused = true;
    }

    fn on_blur(&mut self) {
        self.focused = false;
    }
}
