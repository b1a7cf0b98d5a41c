use crate::app::App;
use crate::ui::widgets::spinner::spinner_line;
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;
use stellar_scout_core::store::GridStatus;
use stellar_scout_core::view::{render_load_more, render_store_grid, CardView, GridView, LoadMoreView};
use stellar_scout_core::PlanetType;

pub const fn planet_type_color(kind: PlanetType) -> Color {
    match kind {
        PlanetType::EarthLike => Color::Green,
        PlanetType::SuperEarth => Color::Cyan,
        PlanetType::NeptuneLike => Color::Rgb(0, 0, 238),
        PlanetType::JupiterLike => Color::Yellow,
        PlanetType::Unknown => Color::Gray,
    }
}

/// First row to draw so that `selected` stays on screen.
pub const fn scroll_offset(selected: usize, visible_rows: usize) -> usize {
    if visible_rows == 0 {
        return 0;
    }
    selected.saturating_sub(visible_rows - 1)
}

pub fn render_grid(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title(format!(
            " Exoplanets ({} shown, {} loaded) ",
            app.store.filtered_len(),
            app.store.all().len()
        ))
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    match render_store_grid(&app.store) {
        GridView::Placeholder(message) => {
            let line = match app.store.status() {
                GridStatus::Loading => spinner_line(&app.throbber_state, &message),
                GridStatus::Failed(_) => {
                    TextLine::from(Span::styled(message.clone(), Style::default().fg(Color::Red)))
                }
                GridStatus::Ready => TextLine::from(Span::styled(
                    message.clone(),
                    Style::default().fg(Color::Gray),
                )),
            };
            let paragraph = Paragraph::new(vec![TextLine::from(""), line])
                .block(block)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            f.render_widget(paragraph, area);
        }
        GridView::Cards(cards) => render_cards(app, &cards, block, f, area),
    }
}

fn render_cards(app: &App, cards: &[CardView], block: Block<'_>, f: &mut Frame<'_>, area: Rect) {
    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Host Star"),
        Cell::from("Method"),
        Cell::from("Year"),
        Cell::from("Distance"),
        Cell::from("Type"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    // Border plus header row
    let visible_rows = area.height.saturating_sub(3) as usize;
    let offset = scroll_offset(app.selected_index, visible_rows);

    let rows = cards
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible_rows)
        .map(|(index, card)| {
            let badge_color = planet_type_color(card.badge);
            let row_style = if index == app.selected_index {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
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
                    Style::default().fg(badge_color),
                )),
            ])
            .style(row_style)
        });

    let widths = [
        Constraint::Fill(3),
        Constraint::Fill(2),
        Constraint::Fill(3),
        Constraint::Length(7),
        Constraint::Length(12),
        Constraint::Length(13),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1);

    f.render_widget(table, area);
}

pub fn render_load_more_line(app: &App, f: &mut Frame<'_>, area: Rect) {
    let line = match render_load_more(&app.store) {
        LoadMoreView::Hidden => return,
        LoadMoreView::Loading => spinner_line(&app.throbber_state, "Loading more exoplanets..."),
        LoadMoreView::Ready => TextLine::from(vec![
            Span::styled(
                "[n]",
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(format!(
                " Load more (page {} loaded)",
                app.store.current_page()
            )),
        ]),
    };

    f.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
