use color_eyre::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;
use std::time::Duration;
use stellar_scout_core::charts::{chart_view, ChartKind};
use stellar_scout_core::store::{load_first_page, GridStatus};
use stellar_scout_core::view::{load_stats, render_store_grid, CardView, StatsView};
use stellar_scout_core::{DatasetStore, ExoplanetApi, Health};
use tokio::sync::mpsc::UnboundedReceiver;
use tracing::{debug, info};

use crate::api::HttpApi;
use crate::app::{handle_input, ApiEvent, App, AppActions};
use crate::ui;

/// Run the application in headless mode (no UI)
pub async fn run_headless(api: &HttpApi, json: bool) -> Result<()> {
    let report = build_headless_report(api).await;

    if json {
        let json = serde_json::to_string_pretty(&report)?;
        println!("{json}");
    } else {
        render_headless_text(&report);
    }

    Ok(())
}

async fn build_headless_report(api: &HttpApi) -> HeadlessReport {
    let mut store = DatasetStore::new();
    let (stats, charts, health, _) = tokio::join!(
        load_stats(api),
        api.fetch_chart_data(),
        api.fetch_health(),
        load_first_page(&mut store, api),
    );

    let grid = render_store_grid(&store);
    let grid_error = match store.status() {
        GridStatus::Failed(message) => Some(message.clone()),
        GridStatus::Loading | GridStatus::Ready => None,
    };

    let charts = charts
        .map(|data| {
            ChartKind::ALL
                .iter()
                .map(|kind| {
                    let view = chart_view(&data, *kind);
                    HeadlessChart {
                        title: kind.label().to_string(),
                        bars: view.bars,
                    }
                })
                .collect()
        })
        .unwrap_or_default();

    HeadlessReport {
        api_url: api.endpoint().base().to_string(),
        generated_at: chrono::Local::now().to_rfc3339(),
        stats: HeadlessStats::from(stats),
        health: health.ok(),
        grid_error,
        has_more: store.has_more(),
        exoplanets: grid.cards().iter().map(HeadlessPlanet::from).collect(),
        charts,
    }
}

fn render_headless_text(report: &HeadlessReport) {
    println!("\nStellar Scout");
    println!("=============");
    println!("API: {}", report.api_url);
    match &report.health {
        Some(health) => println!(
            "Backend: {} (model loaded: {}, cache active: {})",
            health.status, health.ml_model_loaded, health.cache_active
        ),
        None => println!("Backend: unreachable"),
    }

    println!("\nTotal exoplanets: {}", report.stats.total);
    println!("Habitable candidates: {}", report.stats.habitable);
    println!("Recent discoveries: {}", report.stats.recent);

    if let Some(error) = &report.grid_error {
        println!("\n{error}");
    } else {
        let more = if report.has_more {
            ", more available"
        } else {
            ""
        };
        println!("\nFirst page ({} exoplanets{more}):", report.exoplanets.len());
        for planet in &report.exoplanets {
            println!(
                "- {} | {} | {} | {} | {} | {}",
                planet.name,
                planet.host,
                planet.method,
                planet.year,
                planet.distance,
                planet.planet_type
            );
        }
    }

    for chart in &report.charts {
        println!("\n{}:", chart.title);
        for (label, value) in &chart.bars {
            println!("- {label}: {value}");
        }
    }
}

#[derive(serde::Serialize)]
struct HeadlessReport {
    api_url: String,
    generated_at: String,
    stats: HeadlessStats,
    health: Option<Health>,
    grid_error: Option<String>,
    has_more: bool,
    exoplanets: Vec<HeadlessPlanet>,
    charts: Vec<HeadlessChart>,
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    total: String,
    habitable: String,
    recent: String,
}

impl From<StatsView> for HeadlessStats {
    fn from(view: StatsView) -> Self {
        Self {
            total: view.total,
            habitable: view.habitable,
            recent: view.recent,
        }
    }
}

#[derive(serde::Serialize)]
struct HeadlessPlanet {
    name: String,
    host: String,
    method: String,
    year: String,
    distance: String,
    planet_type: &'static str,
}

impl From<&CardView> for HeadlessPlanet {
    fn from(card: &CardView) -> Self {
        Self {
            name: card.name.clone(),
            host: card.host.clone(),
            method: card.method.clone(),
            year: card.year.clone(),
            distance: card.distance.clone(),
            planet_type: card.badge_label(),
        }
    }
}

#[derive(serde::Serialize)]
struct HeadlessChart {
    title: String,
    bars: Vec<(String, u64)>,
}

/// Run the main application event loop
pub async fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App,
    actions: &AppActions,
    events: &mut UnboundedReceiver<ApiEvent>,
) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    info!("entering event loop");

    loop {
        for request in app.take_requests() {
            actions.dispatch(request);
        }

        while let Ok(event) = events.try_recv() {
            debug!(?event, "response received");
            app.apply(event);
        }

        // Advance the spinner
        app.update();

        if let Err(e) = terminal.draw(|f| ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        if matches!(
            event::poll(Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => {
                    handle_input(app, key);
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(_) | Err(_) => {
                    // Ignore non-key events
                }
            }
        }
    }

    info!("event loop finished");
    Ok(())
}
