use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

mod details;
mod explore;
mod help;
mod predict;

pub fn dispatch_input(app: &mut App, key: KeyCode) {
    if help::handle_help_toggle(app, key) {
        return;
    }

    match app.screen {
        AppScreen::Explore => explore::handle_explore_input(app, key),
        AppScreen::Details => details::handle_details_input(app, key),
        AppScreen::Predict => predict::handle_predict_input(app, key),
    }
}
