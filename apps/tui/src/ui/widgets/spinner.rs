use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use throbber_widgets_tui::{Throbber, ThrobberState, BRAILLE_SIX};

/// One-line spinner with a label, advanced by `App::update`.
pub fn spinner_line<'a>(state: &ThrobberState, label: &'a str) -> TextLine<'a> {
    Throbber::default()
        .label(label)
        .style(Style::default().fg(Color::Gray))
        .throbber_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .throbber_set(BRAILLE_SIX)
        .to_line(state)
}
