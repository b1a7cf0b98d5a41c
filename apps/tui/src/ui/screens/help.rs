use crate::ui::widgets::popup::open_popup;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Paragraph, Wrap};
use ratatui::Frame;

const SECTIONS: [(&str, &[(&str, &str)]); 3] = [
    (
        "Explore",
        &[
            ("Up/Down, PgUp/PgDn", "Move through the results"),
            ("Home/End", "First/last result"),
            ("/", "Search by planet or host star name"),
            ("Esc", "Clear the search"),
            ("m / M", "Cycle the discovery method filter"),
            ("h / H", "Cycle the planet size filter"),
            ("r", "Reset all filters"),
            ("n", "Load the next page"),
            ("Enter", "Show details for the selected planet"),
            ("Tab / Shift+Tab", "Switch chart"),
            ("F5", "Reload everything"),
        ],
    ),
    (
        "Predict",
        &[
            ("p", "Open the transit predictor"),
            ("Tab / Up / Down", "Move between fields"),
            ("Enter", "Submit"),
            ("Del", "Clear the form"),
            ("Esc", "Back to explore"),
        ],
    ),
    (
        "General",
        &[
            ("F1 / ?", "Toggle this help"),
            ("q / Ctrl+C", "Quit"),
        ],
    ),
];

pub fn render_help_popup(f: &mut Frame<'_>) {
    let inner = open_popup(f, 70, 80, "Keyboard Shortcuts", Color::Yellow);

    let heading_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (heading, entries) in SECTIONS {
        lines.push(TextLine::from(Span::styled(heading, heading_style)));
        for (key, action) in entries {
            lines.push(TextLine::from(vec![
                Span::styled(format!("  {key:<20}"), key_style),
                Span::raw(*action),
            ]));
        }
        lines.push(TextLine::from(""));
    }

    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false });
    f.render_widget(paragraph, inner);
}
