use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

/// F1 toggles the popup anywhere. `?` does too, except where it would be
/// typed into an input.
pub fn handle_help_toggle(app: &mut App, key: KeyCode) -> bool {
    let typing = app.search_active || app.screen == AppScreen::Predict;
    if key == KeyCode::F(1) || (key == KeyCode::Char('?') && !typing) {
        app.show_help = !app.show_help;
        return true;
    }

    if app.show_help {
        if key == KeyCode::Esc {
            app.show_help = false;
        }
        return true;
    }

    false
}
