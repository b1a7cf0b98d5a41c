//! Pure data-to-ViewModel mapping. Adapters bind these to a surface.

use crate::api::{ApiError, ExoplanetApi};
use crate::domain::{Exoplanet, PlanetType, PredictionResult, Stats};
use crate::store::{DatasetStore, GridStatus};
use tracing::warn;

pub const UNKNOWN: &str = "Unknown";
pub const NO_RESULTS_MESSAGE: &str = "No exoplanets found matching your criteria.";
pub const LOADING_MESSAGE: &str = "Loading exoplanets...";

#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub name: String,
    pub host: String,
    pub method: String,
    pub year: String,
    pub distance: String,
    pub badge: PlanetType,
}

impl CardView {
    pub const fn badge_label(&self) -> &'static str {
        self.badge.label()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GridView {
    /// Exactly one element in place of the cards: loading text, an inline
    /// error, or the no-results message.
    Placeholder(String),
    Cards(Vec<CardView>),
}

impl GridView {
    pub fn cards(&self) -> &[CardView] {
        match self {
            Self::Placeholder(_) => &[],
            Self::Cards(cards) => cards,
        }
    }

    pub fn placeholder(&self) -> Option<&str> {
        match self {
            Self::Placeholder(message) => Some(message),
            Self::Cards(_) => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub title: String,
    pub badge: &'static str,
    pub rows: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub has_exoplanet: bool,
    pub verdict: &'static str,
    /// Percentage with one decimal, without the `%` sign.
    pub confidence: String,
    /// Width of the confidence bar in `[0, 1]`.
    pub bar_ratio: f64,
    pub details: Vec<(&'static str, String)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsView {
    pub total: String,
    pub habitable: String,
    pub recent: String,
}

impl StatsView {
    pub fn fallback() -> Self {
        Self {
            total: "5000+".to_string(),
            habitable: "60+".to_string(),
            recent: "150+".to_string(),
        }
    }

    pub fn from_stats(stats: &Stats) -> Self {
        Self {
            total: stats.total_exoplanets.to_string(),
            habitable: stats.habitable_exoplanets.to_string(),
            recent: stats.recent_discoveries.to_string(),
        }
    }

    /// Failures never reach the UI; the counters show fixed placeholders.
    pub fn from_result(result: &Result<Stats, ApiError>) -> Self {
        match result {
            Ok(stats) => Self::from_stats(stats),
            Err(error) => {
                warn!(%error, "stats unavailable, using placeholders");
                Self::fallback()
            }
        }
    }
}

pub async fn load_stats<A: ExoplanetApi>(api: &A) -> StatsView {
    StatsView::from_result(&api.fetch_stats().await)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadMoreView {
    Hidden,
    Ready,
    Loading,
}

pub fn format_fixed(value: Option<f64>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |value| format!("{value:.2}"))
}

pub fn format_distance(value: Option<f64>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |value| format!("{value:.2} ly"))
}

fn format_text(value: Option<&str>) -> String {
    value.unwrap_or(UNKNOWN).to_string()
}

fn format_plain<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(|| UNKNOWN.to_string(), |value| value.to_string())
}

pub fn render_card(planet: &Exoplanet) -> CardView {
    CardView {
        name: planet.name.clone(),
        host: format_text(planet.hostname.as_deref()),
        method: format_text(planet.discoverymethod.as_deref()),
        year: format_plain(planet.disc_year),
        distance: format_distance(planet.sy_dist),
        badge: planet.planet_type(),
    }
}

pub fn render_grid<'a>(planets: impl IntoIterator<Item = &'a Exoplanet>) -> GridView {
    let cards: Vec<CardView> = planets.into_iter().map(render_card).collect();
    if cards.is_empty() {
        GridView::Placeholder(NO_RESULTS_MESSAGE.to_string())
    } else {
        GridView::Cards(cards)
    }
}

/// Grid for the store's current status and filtered view.
pub fn render_store_grid(store: &DatasetStore) -> GridView {
    match store.status() {
        GridStatus::Loading => GridView::Placeholder(LOADING_MESSAGE.to_string()),
        GridStatus::Failed(message) => GridView::Placeholder(message.clone()),
        GridStatus::Ready => render_grid(store.filtered()),
    }
}

pub const fn render_load_more(store: &DatasetStore) -> LoadMoreView {
    if store.is_loading_more() {
        LoadMoreView::Loading
    } else if store.load_more_visible() {
        LoadMoreView::Ready
    } else {
        LoadMoreView::Hidden
    }
}

pub fn render_detail(planet: &Exoplanet) -> DetailView {
    let rows = vec![
        ("Host Star", format_text(planet.hostname.as_deref())),
        ("Discovery Method", format_text(planet.discoverymethod.as_deref())),
        ("Discovery Year", format_plain(planet.disc_year)),
        ("Distance", format_distance(planet.sy_dist)),
        ("Radius (Earth radii)", format_fixed(planet.pl_rade)),
        ("Mass (Earth masses)", format_fixed(planet.pl_bmasse)),
        ("Orbital Period (days)", format_fixed(planet.pl_orbper)),
        ("Star Temperature (K)", format_plain(planet.st_teff)),
        ("Star Radius (solar radii)", format_fixed(planet.st_rad)),
    ];

    DetailView {
        title: planet.name.clone(),
        badge: planet.planet_type().label(),
        rows,
    }
}

pub fn render_prediction(result: &PredictionResult) -> ResultView {
    let has_exoplanet = result.prediction == 1 || result.probability > 0.5;
    let confidence = format!("{:.1}", result.probability * 100.0);
    let bar_ratio = if result.probability.is_finite() {
        result.probability.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let verdict = if has_exoplanet {
        "Exoplanet Likely Detected!"
    } else {
        "No Exoplanet Detected"
    };

    let details = vec![
        (
            "Prediction",
            if has_exoplanet { "Exoplanet" } else { "No Exoplanet" }.to_string(),
        ),
        ("Confidence", format!("{confidence}%")),
        ("Planet Type", format_text(result.planet_type.as_deref())),
        ("Habitable Zone", format_text(result.habitable_zone.as_deref())),
    ];

    ResultView {
        has_exoplanet,
        verdict,
        confidence,
        bar_ratio,
        details,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Exoplanet {
        Exoplanet {
            hostname: Some("Kepler-22".to_string()),
            discoverymethod: Some("Transit".to_string()),
            disc_year: Some(2011),
            sy_dist: Some(635.4),
            pl_rade: Some(2.1),
            st_teff: Some(5518.0),
            ..Exoplanet::named("Kepler-22 b")
        }
    }

    #[test]
    fn card_formats_distance_and_badge() {
        let card = render_card(&sample());
        assert_eq!(card.host, "Kepler-22");
        assert_eq!(card.year, "2011");
        assert_eq!(card.distance, "635.40 ly");
        assert_eq!(card.badge_label(), "Neptune-like");
    }

    #[test]
    fn card_substitutes_unknown() {
        let card = render_card(&Exoplanet::named("Mystery"));
        assert_eq!(card.host, "Unknown");
        assert_eq!(card.method, "Unknown");
        assert_eq!(card.year, "Unknown");
        assert_eq!(card.distance, "Unknown");
        assert_eq!(card.badge_label(), "Unknown Type");
    }

    #[test]
    fn empty_grid_has_exactly_one_placeholder() {
        let none: Vec<Exoplanet> = Vec::new();
        let grid = render_grid(&none);
        assert_eq!(grid.placeholder(), Some(NO_RESULTS_MESSAGE));
        assert!(grid.cards().is_empty());
    }

    #[test]
    fn grid_keeps_insertion_order() {
        let planets = vec![Exoplanet::named("b"), Exoplanet::named("a")];
        let grid = render_grid(&planets);
        let names: Vec<_> = grid.cards().iter().map(|card| card.name.as_str()).collect();
        assert_eq!(names, ["b", "a"]);
    }

    #[test]
    fn detail_rounds_numbers_but_not_temperature() {
        let detail = render_detail(&Exoplanet {
            pl_bmasse: Some(5.123),
            st_teff: Some(5518.0),
            ..sample()
        });
        let value = |label: &str| {
            detail
                .rows
                .iter()
                .find(|(name, _)| *name == label)
                .map(|(_, value)| value.clone())
        };

        assert_eq!(value("Mass (Earth masses)").as_deref(), Some("5.12"));
        assert_eq!(value("Radius (Earth radii)").as_deref(), Some("2.10"));
        assert_eq!(value("Star Temperature (K)").as_deref(), Some("5518"));
        assert_eq!(value("Star Radius (solar radii)").as_deref(), Some("Unknown"));
    }

    #[test]
    fn prediction_uses_or_rule() {
        let view = render_prediction(&PredictionResult {
            prediction: 0,
            probability: 0.62,
            planet_type: None,
            habitable_zone: None,
        });
        assert!(view.has_exoplanet);
        assert_eq!(view.confidence, "62.0");
        assert!((view.bar_ratio - 0.62).abs() < f64::EPSILON);
        assert!(view
            .details
            .contains(&("Planet Type", "Unknown".to_string())));
    }

    #[test]
    fn prediction_flag_alone_trips_verdict() {
        let view = render_prediction(&PredictionResult {
            prediction: 1,
            probability: 0.1,
            planet_type: Some("Earth-like".to_string()),
            habitable_zone: Some("Too Hot".to_string()),
        });
        assert!(view.has_exoplanet);
        assert_eq!(view.confidence, "10.0");
    }

    #[test]
    fn low_probability_without_flag_is_negative() {
        let view = render_prediction(&PredictionResult {
            prediction: 0,
            probability: 0.5,
            planet_type: None,
            habitable_zone: None,
        });
        assert!(!view.has_exoplanet);
        assert_eq!(view.verdict, "No Exoplanet Detected");
    }

    #[test]
    fn stats_failure_uses_placeholders() {
        let view = StatsView::from_result(&Err(ApiError::Network("down".to_string())));
        assert_eq!(view, StatsView::fallback());
        assert_eq!(view.total, "5000+");
    }

    #[tokio::test]
    async fn stats_counters_come_from_backend() {
        let api = crate::fake::FakeApi::failing().with_stats(Stats {
            total_exoplanets: 5600,
            habitable_exoplanets: 72,
            recent_discoveries: 210,
        });
        let view = load_stats(&api).await;
        assert_eq!(view.total, "5600");
        assert_eq!(view.recent, "210");
    }

    #[test]
    fn store_grid_shows_loading_then_inline_error() {
        let mut store = DatasetStore::new();
        assert_eq!(render_store_grid(&store).placeholder(), Some(LOADING_MESSAGE));

        let ticket = store.begin_first_page();
        let _ = store.finish_first_page(ticket, Err(ApiError::Decode("bad".to_string())));
        assert_eq!(
            render_store_grid(&store).placeholder(),
            Some(crate::store::GRID_ERROR_MESSAGE)
        );
        assert_eq!(render_load_more(&store), LoadMoreView::Hidden);
    }

    #[test]
    fn failed_reload_replaces_grid_with_inline_error() {
        let mut store = DatasetStore::new();
        let ticket = store.begin_first_page();
        store
            .finish_first_page(ticket, Ok(crate::fake::page_of("a", 12, true)))
            .unwrap();
        assert_eq!(render_store_grid(&store).cards().len(), 12);

        let reload = store.begin_first_page();
        let _ = store.finish_first_page(reload, Err(ApiError::Network("down".to_string())));

        assert_eq!(
            render_store_grid(&store).placeholder(),
            Some(crate::store::GRID_ERROR_MESSAGE)
        );
        assert_eq!(render_load_more(&store), LoadMoreView::Hidden);
        assert_eq!(store.all().len(), 12);
        assert_eq!(store.filtered_len(), 12);
    }
}
