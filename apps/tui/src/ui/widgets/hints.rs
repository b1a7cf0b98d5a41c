use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};

/// `key: action | key: action` in the footer style.
pub fn shortcuts_line(entries: &[(&'static str, &'static str)]) -> TextLine<'static> {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(Color::Gray);

    let mut spans = Vec::with_capacity(entries.len() * 2);
    for (index, (key, action)) in entries.iter().enumerate() {
        spans.push(Span::styled(*key, key_style));
        let separator = if index + 1 == entries.len() { "" } else { " | " };
        spans.push(Span::styled(format!(": {action}{separator}"), text_style));
    }
    TextLine::from(spans)
}
