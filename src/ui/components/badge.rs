use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
};

/// Create a badge showing a format code, e.g. `[R]`
#[must_use]
pub fn create_code_badge(code: char) -> Span<'static> {
    Span::styled(
        format!("[{code}]"),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Rgb(114, 137, 218))
            .add_modifier(Modifier::BOLD),
    )
}

/// Create the badge naming the zone the selection is read in
#[must_use]
pub fn create_zone_badge(zone: &str) -> Span<'static> {
    Span::styled(
        format!(" {zone} "),
        Style::default()
            .fg(Color::Black)
            .bg(Color::LightYellow)
            .add_modifier(Modifier::BOLD),
    )
}
