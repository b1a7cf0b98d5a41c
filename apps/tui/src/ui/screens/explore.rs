use crate::app::App;
use crate::ui::widgets::charts::{render_chart_panel, render_chart_tabs};
use crate::ui::widgets::grid::{render_grid, render_load_more_line};
use crate::ui::widgets::hints::shortcuts_line;
use crate::ui::widgets::spinner::spinner_line;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;
use stellar_scout_core::view::StatsView;

pub fn render_explore(app: &App, f: &mut Frame<'_>) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // Title and counters
            Constraint::Length(3), // Search and filters
            Constraint::Min(8),    // Grid and charts
            Constraint::Length(1), // Load more
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(1, 0)));

    render_title_section(app, f, layout[0]);
    render_filter_bar(app, f, layout[1]);
    render_content_section(app, f, layout[2]);
    render_load_more_line(app, f, layout[3]);
    render_status_section(app, f, layout[4]);

    let shortcuts = shortcuts_line(&[
        ("/", "Search"),
        ("m", "Method"),
        ("h", "Size"),
        ("r", "Reset"),
        ("n", "More"),
        ("Enter", "Details"),
        ("p", "Predict"),
        ("Tab", "Chart"),
        ("F1", "Help"),
        ("q", "Quit"),
    ]);
    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Center),
        layout[5],
    );
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== Stellar Scout ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .title(health_line(app).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = title_block.inner(area);
    f.render_widget(title_block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(inner);

    let counters = app.stats.as_ref().map_or(
        [None, None, None],
        |StatsView {
             total,
             habitable,
             recent,
         }| [Some(total.as_str()), Some(habitable.as_str()), Some(recent.as_str())],
    );
    let labels = [
        "Confirmed Exoplanets",
        "Potentially Habitable",
        "Recent Discoveries",
    ];

    for ((label, value), column) in labels.iter().zip(counters).zip(columns.iter()) {
        let value_line = value.map_or_else(
            || spinner_line(&app.throbber_state, ""),
            |value| {
                TextLine::from(Span::styled(
                    value.to_string(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ))
            },
        );
        let paragraph = Paragraph::new(Text::from(vec![
            value_line,
            TextLine::from(Span::styled(*label, Style::default().fg(Color::Gray))),
        ]))
        .alignment(Alignment::Center);
        f.render_widget(paragraph, *column);
    }
}

fn health_line(app: &App) -> TextLine<'static> {
    match &app.health {
        Some(health) => {
            let model = if health.ml_model_loaded {
                "model ready"
            } else {
                "model offline"
            };
            TextLine::from(Span::styled(
                format!(" API {} | {model} ", health.status),
                Style::default().fg(Color::Green),
            ))
        }
        None => TextLine::from(Span::styled(" API ? ", Style::default().fg(Color::Gray))),
    }
}

fn render_filter_bar(app: &App, f: &mut Frame<'_>, area: Rect) {
    let border_color = if app.search_active {
        Color::Green
    } else {
        Color::Gray
    };
    let block = Block::default()
        .title(" Filters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default().fg(Color::Yellow);
    let cursor = if app.search_active { "_" } else { "" };
    let search = if app.search_query.is_empty() && !app.search_active {
        "(press /)".to_string()
    } else {
        format!("{}{cursor}", app.search_query)
    };

    let line = TextLine::from(vec![
        Span::styled("Search: ", label_style),
        Span::styled(
            search,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Method: ", label_style),
        Span::styled(app.selected_method().unwrap_or("All").to_string(), value_style),
        Span::styled("   Size: ", label_style),
        Span::styled(
            app.selected_habitability()
                .map_or("All", |habitability| habitability.label()),
            value_style,
        ),
    ]);

    f.render_widget(Paragraph::new(line).block(block), area);
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    render_grid(app, f, horizontal_split[0]);

    let right_split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(5)])
        .split(horizontal_split[1]);

    render_chart_tabs(app, f, right_split[0]);
    render_chart_panel(app, f, right_split[1]);
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let updated = app.last_updated.map_or_else(String::new, |time| {
        format!(" Updated {} ", time.format("%H:%M:%S"))
    });
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .title(TextLine::from(updated).right_aligned())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let status_paragraph = Paragraph::new(Span::styled(app.status_message.as_str(), style))
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}
