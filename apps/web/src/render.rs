use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, Clear, Gauge, Paragraph, Row, Table, Tabs,
        Wrap,
    },
    Frame,
};
use stellar_scout_core::charts::ChartKind;
use stellar_scout_core::prediction::{PredictionField, PredictionState};
use stellar_scout_core::view::{
    render_detail, render_load_more, render_store_grid, GridView, LoadMoreView, StatsView,
};
use stellar_scout_core::PlanetType;

use crate::dashboard::{Dashboard, View};

const fn badge_color(kind: PlanetType) -> Color {
    match kind {
        PlanetType::EarthLike => Color::Green,
        PlanetType::SuperEarth => Color::Cyan,
        PlanetType::NeptuneLike => Color::Blue,
        PlanetType::JupiterLike => Color::Yellow,
        PlanetType::Unknown => Color::Gray,
    }
}

pub fn render_dashboard(dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Min(12),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(dashboard.stats.as_ref(), f, layout[0]);
    render_filters(dashboard, f, layout[1]);

    if dashboard.view == View::Predict {
        render_predict(dashboard, f, layout[2]);
    } else {
        let content = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
            .split(layout[2]);
        render_grid(dashboard, f, content[0]);
        render_charts(dashboard, f, content[1]);
    }

    render_footer(dashboard, f, layout[3]);
    let status_color = if dashboard.status.starts_with("Error") {
        Color::Red
    } else {
        Color::Gray
    };
    let updated = dashboard
        .updated
        .as_deref()
        .map_or_else(String::new, |time| format!("  (updated {time})"));
    let status = Paragraph::new(TextLine::from(vec![
        Span::styled(dashboard.status.as_str(), Style::default().fg(status_color)),
        Span::styled(updated, Style::default().fg(Color::DarkGray)),
    ]));
    f.render_widget(status, layout[4]);

    if dashboard.view == View::Details {
        render_details(dashboard, f, area);
    }
}

fn render_header(stats: Option<&StatsView>, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Overview")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let value = |pick: fn(&StatsView) -> String| stats.map_or_else(|| "...".to_string(), pick);
    let line = TextLine::from(vec![
        Span::styled(
            value(|s| s.total.clone()),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" confirmed   ", Style::default().fg(Color::Gray)),
        Span::styled(
            value(|s| s.habitable.clone()),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" potentially habitable   ", Style::default().fg(Color::Gray)),
        Span::styled(
            value(|s| s.recent.clone()),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(" recent discoveries", Style::default().fg(Color::Gray)),
    ]);

    let paragraph = Paragraph::new(Text::from(line))
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_filters(dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let criteria = dashboard.store.criteria();
    let cursor = if dashboard.search_active { "_" } else { "" };
    let line = TextLine::from(vec![
        Span::styled(" Search: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{}{cursor}", dashboard.search),
            Style::default().fg(Color::White),
        ),
        Span::styled("  Method: ", Style::default().fg(Color::Gray)),
        Span::styled(
            criteria.method.clone().unwrap_or_else(|| "All".to_string()),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled("  Size: ", Style::default().fg(Color::Gray)),
        Span::styled(
            criteria.habitability.map_or("All", |h| h.label()),
            Style::default().fg(Color::Yellow),
        ),
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn render_grid(dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(
            "Exoplanets ({} of {})",
            dashboard.store.filtered_len(),
            dashboard.store.all().len()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let cards = match render_store_grid(&dashboard.store) {
        GridView::Placeholder(message) => {
            let paragraph = Paragraph::new(message)
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
            return;
        }
        GridView::Cards(cards) => cards,
    };

    let visible = area.height.saturating_sub(3) as usize;
    let offset = dashboard.selected.saturating_sub(visible.saturating_sub(1));

    let header = Row::new(vec!["Name", "Host", "Method", "Year", "Distance", "Type"]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );
    let rows = cards
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, card)| {
            let style = if index == dashboard.selected {
                Style::default().bg(Color::Blue).fg(Color::White)
            } else {
                Style::default()
            };
            Row::new(vec![
                Cell::from(card.name.clone()),
                Cell::from(card.host.clone()),
                Cell::from(card.method.clone()),
                Cell::from(card.year.clone()),
                Cell::from(card.distance.clone()),
                Cell::from(Span::styled(
                    card.badge_label(),
                    Style::default().fg(badge_color(card.badge)),
                )),
            ])
            .style(style)
        });

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(24),
            Constraint::Percentage(18),
            Constraint::Percentage(20),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .block(block)
    .column_spacing(1);
    f.render_widget(table, area);
}

fn render_charts(dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(area);

    let tabs = Tabs::new(
        ChartKind::ALL
            .iter()
            .map(|kind| TextLine::from(kind.tab_title()))
            .collect::<Vec<_>>(),
    )
    .select(dashboard.chart_tab)
    .style(Style::default().fg(Color::Gray))
    .highlight_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    f.render_widget(tabs, split[0]);

    let block = Block::default()
        .title(dashboard.chart_kind().label())
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(view) = dashboard.current_chart() else {
        let message = if dashboard.charts_failed {
            "Chart data unavailable"
        } else {
            "Loading chart data..."
        };
        f.render_widget(
            Paragraph::new(message).block(block).alignment(Alignment::Center),
            split[1],
        );
        return;
    };

    let bars: Vec<Bar<'_>> = view
        .bars
        .iter()
        .map(|(label, value)| {
            Bar::default()
                .value(*value)
                .label(TextLine::from(label.as_str()))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .max(view.max_value().max(1))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0);
    f.render_widget(chart, split[1]);
}

fn render_predict(dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let lines: Vec<TextLine<'_>> = PredictionField::ALL
        .iter()
        .map(|field| {
            let selected = *field == dashboard.form.field;
            let style = if selected {
                Style::default().fg(Color::Black).bg(Color::Yellow)
            } else {
                Style::default().fg(Color::Gray)
            };
            TextLine::from(vec![
                Span::styled(format!("{:<28}", field.label()), style),
                Span::raw(" "),
                Span::styled(
                    dashboard.form.value(*field).to_string(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();
    let form = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title("Transit Parameters")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    f.render_widget(form, columns[0]);

    let block = Block::default()
        .title("Result")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    match &dashboard.prediction {
        PredictionState::Idle => f.render_widget(
            Paragraph::new("Fill in the parameters and press Enter.").block(block),
            columns[1],
        ),
        PredictionState::Loading => {
            f.render_widget(Paragraph::new("Analyzing...").block(block), columns[1]);
        }
        PredictionState::Failed(message) => f.render_widget(
            Paragraph::new(Span::styled(message.as_str(), Style::default().fg(Color::Red)))
                .block(block)
                .wrap(Wrap { trim: true }),
            columns[1],
        ),
        PredictionState::Ready(result) => {
            let inner = block.inner(columns[1]);
            f.render_widget(block, columns[1]);
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(1),
                    Constraint::Length(1),
                    Constraint::Min(1),
                ])
                .split(inner);
            let color = if result.has_exoplanet {
                Color::Green
            } else {
                Color::Red
            };
            f.render_widget(
                Paragraph::new(Span::styled(
                    result.verdict,
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                rows[0],
            );
            f.render_widget(
                Gauge::default()
                    .gauge_style(Style::default().fg(color))
                    .ratio(result.bar_ratio)
                    .label(format!("{}%", result.confidence)),
                rows[1],
            );
            let details: Vec<TextLine<'_>> = result
                .details
                .iter()
                .map(|(label, value)| TextLine::from(format!("{label}: {value}")))
                .collect();
            f.render_widget(Paragraph::new(Text::from(details)), rows[2]);
        }
    }
}

fn render_details(dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let Some(planet) = dashboard.selected_planet() else {
        return;
    };
    let detail = render_detail(planet);

    let width = area.width.saturating_mul(3) / 5;
    let height = u16::try_from(detail.rows.len() + 4).unwrap_or(u16::MAX).min(area.height);
    let popup = Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let mut lines = vec![
        TextLine::from(Span::styled(
            detail.badge,
            Style::default()
                .fg(badge_color(planet.planet_type()))
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];
    lines.extend(detail.rows.iter().map(|(label, value)| {
        TextLine::from(vec![
            Span::styled(format!("{label:<26}"), Style::default().fg(Color::Gray)),
            Span::raw(value.clone()),
        ])
    }));

    f.render_widget(Clear, popup);
    f.render_widget(
        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .title(detail.title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        popup,
    );
}

fn render_footer(dashboard: &Dashboard, f: &mut Frame<'_>, area: Rect) {
    let more = match render_load_more(&dashboard.store) {
        LoadMoreView::Hidden => "",
        LoadMoreView::Ready => "[n] load more  ",
        LoadMoreView::Loading => "loading more...  ",
    };
    let hints = match dashboard.view {
        View::Predict => "Tab/Up/Down field  Enter predict  Del clear  Esc back",
        View::Details => "Up/Down previous/next  Esc close",
        View::Explore => "/ search  m method  h size  r reset  Enter details  p predict  Left/Right chart",
    };
    let paragraph = Paragraph::new(TextLine::from(vec![
        Span::styled(
            more,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled(hints, Style::default().fg(Color::Gray)),
    ]))
    .alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
