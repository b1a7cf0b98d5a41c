use crate::app::input::helpers::PAGE_JUMP;
use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_explore_input(app: &mut App, key: KeyCode) {
    if app.search_active {
        handle_search_input(app, key);
        return;
    }

    match key {
        KeyCode::Char('q') => app.running = false,
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Esc => {
            if !app.search_query.is_empty() {
                app.clear_search();
            }
        }
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::PageUp => app.select_by(-PAGE_JUMP),
        KeyCode::PageDown => app.select_by(PAGE_JUMP),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),
        KeyCode::Enter => {
            if app.selected_planet().is_some() {
                app.screen = AppScreen::Details;
            }
        }
        KeyCode::Char('m') => app.cycle_method(true),
        KeyCode::Char('M') => app.cycle_method(false),
        KeyCode::Char('h') => app.cycle_habitability(true),
        KeyCode::Char('H') => app.cycle_habitability(false),
        KeyCode::Char('r') => app.reset_filters(),
        KeyCode::Char('n') => app.load_more(),
        KeyCode::Char('p') => app.screen = AppScreen::Predict,
        KeyCode::Tab | KeyCode::Right => app.next_chart_tab(),
        KeyCode::BackTab | KeyCode::Left => app.previous_chart_tab(),
        KeyCode::F(5) => app.reload(),
        _ => {}
    }
}

fn handle_search_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc => app.clear_search(),
        KeyCode::Enter => app.finish_search(),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Up => app.select_previous(),
        KeyCode::Down => app.select_next(),
        KeyCode::Char(ch) => app.push_search_char(ch),
        _ => {}
    }
}
