use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_details_input(app: &mut App, key: KeyCode) {
    match key {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace => {
            app.screen = AppScreen::Explore;
        }
        KeyCode::Char('q') => app.running = false,
        // Step through neighbours without closing the popup.
        KeyCode::Up | KeyCode::Left => app.select_previous(),
        KeyCode::Down | KeyCode::Right => app.select_next(),
        _ => {}
    }
}
