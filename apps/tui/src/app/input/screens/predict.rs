use crate::app::state::{App, AppScreen};
use crossterm::event::KeyCode;

pub fn handle_predict_input(app: &mut App, key: KeyCode) {
    let form = &mut app.prediction_form;
    match key {
        KeyCode::Esc => app.screen = AppScreen::Explore,
        KeyCode::Tab | KeyCode::Down => form.field = form.field.next(),
        KeyCode::BackTab | KeyCode::Up => form.field = form.field.prev(),
        KeyCode::Backspace => form.pop_char(),
        KeyCode::Delete => form.clear(),
        KeyCode::Enter => app.submit_prediction(),
        KeyCode::Char(ch) => form.push_char(ch),
        _ => {}
    }
}
