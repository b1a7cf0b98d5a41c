use crate::app::App;
use crate::ui::widgets::spinner::spinner_line;
use ratatui::layout::{Alignment, Direction, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Tabs};
use ratatui::Frame;
use stellar_scout_core::charts::{ChartKind, ChartView};

const BAR_COLORS: [Color; 5] = [
    Color::Cyan,
    Color::Yellow,
    Color::Magenta,
    Color::Green,
    Color::Rgb(0, 0, 238),
];

pub fn render_chart_tabs(app: &App, f: &mut Frame<'_>, area: Rect) {
    let titles = ChartKind::ALL
        .iter()
        .map(|kind| TextLine::from(kind.tab_title()))
        .collect::<Vec<_>>();

    let tabs = Tabs::new(titles)
        .select(app.chart_tab_index)
        .block(Block::default().borders(Borders::BOTTOM))
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    f.render_widget(tabs, area);
}

pub fn render_chart_panel(app: &App, f: &mut Frame<'_>, area: Rect) {
    let kind = app.chart_kind();
    let block = Block::default()
        .title(format!(" {} ", kind.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let Some(view) = app.current_chart() else {
        let line = if app.charts_failed {
            TextLine::from(Span::styled(
                "Chart data unavailable",
                Style::default().fg(Color::Red),
            ))
        } else {
            spinner_line(&app.throbber_state, "Loading chart data...")
        };
        let paragraph = Paragraph::new(line)
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    if view.bars.is_empty() {
        let paragraph = Paragraph::new("No data")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    render_bar_chart(&view, block, f, area);
}

/// Years read left to right; categories read better as horizontal bars.
fn render_bar_chart(view: &ChartView, block: Block<'_>, f: &mut Frame<'_>, area: Rect) {
    let bars: Vec<Bar<'_>> = view
        .bars
        .iter()
        .enumerate()
        .map(|(index, (label, value))| {
            Bar::default()
                .value(*value)
                .label(TextLine::from(label.as_str()))
                .style(Style::default().fg(BAR_COLORS[index % BAR_COLORS.len()]))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let max_value = view.max_value().max(1);
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .max(max_value);

    let chart = if view.kind == ChartKind::Timeline {
        let inner_width = area.width.saturating_sub(2);
        chart
            .direction(Direction::Vertical)
            .bar_width(timeline_bar_width(inner_width, view.bars.len()))
            .bar_gap(1)
    } else {
        chart.direction(Direction::Horizontal).bar_width(1).bar_gap(1)
    };

    f.render_widget(chart, area);
}

/// Widest bar that still fits every year, with one column of gap each.
fn timeline_bar_width(width: u16, bars: usize) -> u16 {
    let bars = u16::try_from(bars).unwrap_or(u16::MAX).max(1);
    (width / bars).saturating_sub(1).clamp(1, 6)
}
