// UI module for stellar_scout
// Handles all UI rendering functions

pub mod screens;
pub mod widgets;

use crate::app::state::AppScreen;
use crate::app::App;
use ratatui::Frame;

pub fn ui(app: &App, f: &mut Frame<'_>) {
    match app.screen {
        AppScreen::Explore => screens::explore::render_explore(app, f),
        AppScreen::Details => {
            screens::explore::render_explore(app, f);
            screens::details::render_details_popup(app, f);
        }
        AppScreen::Predict => screens::predict::render_predict(app, f),
    }

    if app.show_help {
        screens::help::render_help_popup(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::actions::{ApiEvent, Request};
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use stellar_scout_core::prediction::PredictionState;
    use stellar_scout_core::store::PageTicket;
    use stellar_scout_core::view::{render_prediction, NO_RESULTS_MESSAGE};
    use stellar_scout_core::{ApiError, Exoplanet, ExoplanetPage, PredictionResult};

    fn draw(app: &App) -> String {
        let backend = TestBackend::new(140, 42);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| ui(app, f)).unwrap();
        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content()
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn first_page_ticket(app: &mut App) -> PageTicket {
        app.request_initial_load();
        app.take_requests()
            .into_iter()
            .find_map(|request| match request {
                Request::FirstPage(ticket) => Some(ticket),
                _ => None,
            })
            .unwrap()
    }

    fn app_with(planets: Vec<Exoplanet>, has_more: bool) -> App {
        let mut app = App::new();
        let ticket = first_page_ticket(&mut app);
        app.apply(ApiEvent::FirstPage(
            ticket,
            Ok(ExoplanetPage::new(planets, has_more)),
        ));
        app
    }

    fn kepler() -> Exoplanet {
        Exoplanet {
            hostname: Some("Kepler-22".to_string()),
            discoverymethod: Some("Transit".to_string()),
            disc_year: Some(2011),
            sy_dist: Some(635.4),
            pl_rade: Some(2.1),
            ..Exoplanet::named("Kepler-22 b")
        }
    }

    #[test]
    fn shows_loading_placeholder_before_first_page() {
        let screen = draw(&App::new());
        assert!(screen.contains("Loading exoplanets..."));
    }

    #[test]
    fn empty_view_shows_single_no_results_message() {
        let app = app_with(Vec::new(), false);
        let screen = draw(&app);
        assert_eq!(screen.matches(NO_RESULTS_MESSAGE).count(), 1);
        assert!(!screen.contains("Load more"));
    }

    #[test]
    fn cards_show_badge_and_load_more() {
        let app = app_with(vec![kepler()], true);
        let screen = draw(&app);
        assert!(screen.contains("Kepler-22 b"));
        assert!(screen.contains("Neptune-like"));
        assert!(screen.contains("635.40 ly"));
        assert!(screen.contains("Load more"));
    }

    #[test]
    fn first_page_failure_is_shown_inline() {
        let mut app = App::new();
        let ticket = first_page_ticket(&mut app);
        app.apply(ApiEvent::FirstPage(
            ticket,
            Err(ApiError::Network("refused".to_string())),
        ));
        let screen = draw(&app);
        assert!(screen.contains("Failed to load exoplanets. Please try again later."));
    }

    #[test]
    fn stats_fallback_counters_render() {
        let mut app = app_with(vec![kepler()], false);
        app.apply(ApiEvent::Stats(Err(ApiError::Network("down".to_string()))));
        let screen = draw(&app);
        assert!(screen.contains("5000+"));
        assert!(screen.contains("60+"));
        assert!(screen.contains("150+"));
    }

    #[test]
    fn details_popup_lists_fields() {
        let mut app = app_with(vec![kepler()], false);
        app.screen = AppScreen::Details;
        let screen = draw(&app);
        assert!(screen.contains("Host Star"));
        assert!(screen.contains("Radius (Earth radii)"));
        assert!(screen.contains("2.10"));
    }

    #[test]
    fn prediction_result_renders_verdict_and_confidence() {
        let mut app = App::new();
        app.screen = AppScreen::Predict;
        app.prediction = PredictionState::Ready(render_prediction(&PredictionResult {
            prediction: 1,
            probability: 0.87,
            planet_type: Some("Earth-like".to_string()),
            habitable_zone: Some("Habitable Zone".to_string()),
        }));
        let screen = draw(&app);
        assert!(screen.contains("Exoplanet Likely Detected!"));
        assert!(screen.contains("87.0%"));
        assert!(screen.contains("Habitable Zone"));
    }

    #[test]
    fn help_popup_lists_shortcuts() {
        let mut app = App::new();
        app.show_help = true;
        let screen = draw(&app);
        assert!(screen.contains("Keyboard Shortcuts"));
        assert!(screen.contains("Load the next page"));
    }
}
