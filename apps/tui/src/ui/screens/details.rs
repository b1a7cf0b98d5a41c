use crate::app::App;
use crate::ui::widgets::grid::planet_type_color;
use crate::ui::widgets::hints::shortcuts_line;
use crate::ui::widgets::popup::open_popup;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Cell, Paragraph, Row, Table};
use ratatui::Frame;
use stellar_scout_core::view::render_detail;

pub fn render_details_popup(app: &App, f: &mut Frame<'_>) {
    let Some(planet) = app.selected_planet() else {
        return;
    };
    let detail = render_detail(planet);
    let inner = open_popup(f, 60, 60, &detail.title, Color::Cyan);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let badge = Paragraph::new(TextLine::from(Span::styled(
        format!(" {} ", detail.badge),
        Style::default()
            .fg(Color::Black)
            .bg(planet_type_color(planet.planet_type()))
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    f.render_widget(badge, layout[0]);

    let rows = detail.rows.iter().map(|(label, value)| {
        Row::new(vec![
            Cell::from(Span::styled(*label, Style::default().fg(Color::Gray))),
            Cell::from(Span::styled(
                value.clone(),
                Style::default().fg(Color::White),
            )),
        ])
    });
    let table = Table::new(rows, [Constraint::Length(28), Constraint::Fill(1)]).column_spacing(1);
    f.render_widget(table, layout[1]);

    let hints = shortcuts_line(&[("Up/Down", "Previous/Next"), ("Esc", "Close")]);
    f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), layout[2]);
}
