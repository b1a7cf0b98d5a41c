use crate::app::App;
use crate::ui::widgets::hints::shortcuts_line;
use crate::ui::widgets::spinner::spinner_line;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Gauge, Paragraph, Row, Table, Wrap};
use ratatui::Frame;
use stellar_scout_core::prediction::{PredictionField, PredictionState};
use stellar_scout_core::view::ResultView;

pub fn render_predict(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(1),
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    let title = Paragraph::new(TextLine::from(vec![
        Span::styled(
            "Transit Predictor ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Estimate whether a transit signal is an exoplanet",
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, layout[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(layout[1]);

    render_form(app, f, columns[0]);
    render_result_panel(app, f, columns[1]);

    let hints = shortcuts_line(&[
        ("Tab/Up/Down", "Field"),
        ("Enter", "Predict"),
        ("Del", "Clear"),
        ("Esc", "Back"),
    ]);
    f.render_widget(Paragraph::new(hints).alignment(Alignment::Center), layout[2]);
}

fn render_form(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Transit Parameters ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let form = &app.prediction_form;
    let mut lines = Vec::new();
    for field in PredictionField::ALL {
        let selected = field == form.field;
        let label_style = if selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let prefix = if selected { ">" } else { " " };
        let cursor = if selected { "_" } else { "" };

        lines.push(TextLine::from(Span::styled(
            format!("{prefix} {}", field.label()),
            label_style,
        )));
        lines.push(TextLine::from(Span::styled(
            format!("    {}{cursor}", form.value(field)),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )));
    }

    let paragraph = Paragraph::new(Text::from(lines))
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn render_result_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(" Result ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    match &app.prediction {
        PredictionState::Idle => {
            let paragraph = Paragraph::new("Fill in the parameters and press Enter.")
                .block(block)
                .style(Style::default().fg(Color::Gray))
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
        }
        PredictionState::Loading => {
            let paragraph = Paragraph::new(spinner_line(&app.throbber_state, "Analyzing..."))
                .block(block)
                .alignment(Alignment::Center);
            f.render_widget(paragraph, area);
        }
        PredictionState::Failed(message) => {
            let paragraph = Paragraph::new(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            ))
            .block(block)
            .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
        }
        PredictionState::Ready(view) => {
            let inner = block.inner(area);
            f.render_widget(block, area);
            render_result(view, f, inner);
        }
    }
}

fn render_result(view: &ResultView, f: &mut Frame<'_>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Min(4),
        ])
        .split(area);

    let verdict_color = if view.has_exoplanet {
        Color::Green
    } else {
        Color::Red
    };

    let verdict = Paragraph::new(Span::styled(
        view.verdict,
        Style::default()
            .fg(verdict_color)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center);
    f.render_widget(verdict, layout[0]);

    let gauge = Gauge::default()
        .block(Block::default().title("Confidence").borders(Borders::ALL))
        .gauge_style(Style::default().fg(verdict_color))
        .ratio(view.bar_ratio)
        .label(format!("{}%", view.confidence));
    f.render_widget(gauge, layout[1]);

    let rows = view.details.iter().map(|(label, value)| {
        Row::new(vec![
            Cell::from(Span::styled(*label, Style::default().fg(Color::Gray))),
            Cell::from(value.clone()),
        ])
    });
    let table = Table::new(rows, [Constraint::Length(16), Constraint::Fill(1)]).column_spacing(1);
    f.render_widget(table, layout[2]);
}
