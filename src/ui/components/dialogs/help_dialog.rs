use super::common::{self, shortcuts};
use crate::constants::DIALOG_TITLE_HELP;
use crate::ui::layout::LayoutManager;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Clear, Paragraph, ScrollbarState},
    Frame,
};

pub const HELP_CONTENT: &str = r"
DISCORD TIMESTAMP GENERATOR
===========================

Pick a date and a time; every format below updates immediately.
Copy one and paste it into a Discord message.

FOCUS
-----
Tab / Shift+Tab   Cycle calendar, time, formats

CALENDAR
--------
←/→ h/l           Previous / next day
↑/↓ k/j           Previous / next week
PgUp/PgDn [ ]     Previous / next month
Enter / Space     Select the highlighted day
t                 Jump to and select today
Backspace/Del/x   Clear the selection

TIME
----
0-9 and :         Type HH:MM (24-hour)
Backspace         Delete last character
↑/↓               One minute later / earlier
PgUp/PgDn         One hour later / earlier

FORMATS
-------
↑/↓ k/j           Move between formats
Enter / c / y     Copy the highlighted format
1-7               Copy a format directly (outside the time field)

GENERAL
-------
i                 Cycle icon theme
?                 Toggle this help
G                 Show logs
q / Esc / Ctrl+C  Quit

FORMAT CODES
------------
t  Short Time        16:20
T  Long Time         16:20:30
d  Short Date        20/04/2021
D  Long Date         20 April 2021
f  Short Date/Time   20 April 2021 16:20
F  Long Date/Time    Tuesday, 20 April 2021 16:20
R  Relative Time     2 months ago

Each reader sees the time in their own zone and locale.
";

/// Draw the help overlay and return the scroll offset actually used
pub fn render_help_dialog(f: &mut Frame, area: Rect, scroll_offset: usize, scrollbar_state: &mut ScrollbarState) -> usize {
    let (percent_x, percent_y) = LayoutManager::dialog_dimensions(area.width, area.height);
    let dialog_area = LayoutManager::centered_rect(percent_x, percent_y, area);
    f.render_widget(Clear, dialog_area);

    let block = common::create_dialog_block(DIALOG_TITLE_HELP, Color::Yellow);
    let inner = block.inner(dialog_area);
    f.render_widget(block, dialog_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let lines: Vec<&str> = HELP_CONTENT.lines().collect();
    let visible_height = chunks[0].height as usize;
    let offset = common::clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_text = lines
        .iter()
        .skip(offset)
        .take(visible_height)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");

    f.render_widget(
        Paragraph::new(visible_text).style(Style::default().fg(Color::Cyan)),
        chunks[0],
    );
    common::render_scrollbar(f, chunks[0], scrollbar_state, lines.len(), visible_height, offset);

    let instructions = common::create_instructions_paragraph(&[
        shortcuts::SCROLL,
        shortcuts::SEPARATOR,
        shortcuts::HOME_END,
        shortcuts::SEPARATOR,
        shortcuts::ESC_CLOSE,
    ]);
    f.render_widget(instructions, chunks[1]);
    offset
}
