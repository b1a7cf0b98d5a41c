mod api;
mod dashboard;
mod render;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratzilla::ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use stellar_scout_core::view::StatsView;
use stellar_scout_core::{ExoplanetApi, PAGE_SIZE};
use wasm_bindgen_futures::spawn_local;

use crate::api::WebApi;
use crate::dashboard::{Command, Dashboard};

type Shared = Rc<RefCell<Dashboard>>;

fn main() -> io::Result<()> {
    let dashboard: Shared = Rc::new(RefCell::new(Dashboard::new()));
    let api = Rc::new(WebApi::from_document());
    web_sys::console::log_1(&format!("stellar scout api: {}", api.endpoint().base()).into());

    spawn_local(fetch_stats(api.clone(), dashboard.clone()));
    spawn_local(fetch_charts(api.clone(), dashboard.clone()));
    spawn_local(fetch_first_page(api.clone(), dashboard.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let dashboard = dashboard.clone();
        let api = api.clone();
        move |event| {
            let command = dashboard.borrow_mut().handle_key(event.code);
            if let Some(command) = command {
                spawn_local(run_command(command, api.clone(), dashboard.clone()));
            }
        }
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title("Stellar Scout")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area);
        f.render_widget(block, area);

        render::render_dashboard(&dashboard.borrow(), f, inner);
    });

    Ok(())
}

async fn fetch_stats(api: Rc<WebApi>, dashboard: Shared) {
    let result = api.fetch_stats().await;
    if let Err(error) = &result {
        web_sys::console::error_1(&format!("Failed to load stats: {error}").into());
    }
    dashboard.borrow_mut().stats = Some(StatsView::from_result(&result));
}

async fn fetch_charts(api: Rc<WebApi>, dashboard: Shared) {
    match api.fetch_chart_data().await {
        Ok(data) => dashboard.borrow_mut().charts = Some(data),
        Err(error) => {
            web_sys::console::error_1(&format!("Failed to load chart data: {error}").into());
            dashboard.borrow_mut().charts_failed = true;
        }
    }
}

async fn fetch_first_page(api: Rc<WebApi>, dashboard: Shared) {
    let ticket = dashboard.borrow_mut().store.begin_first_page();
    let result = api.fetch_exoplanets(ticket.page, PAGE_SIZE).await;
    if let Err(error) = &result {
        web_sys::console::error_1(&format!("Failed to load exoplanets: {error}").into());
    }
    let mut dashboard = dashboard.borrow_mut();
    if dashboard.finish_first_page(ticket, result) {
        dashboard.updated = Some(now());
    }
}

async fn run_command(command: Command, api: Rc<WebApi>, dashboard: Shared) {
    match command {
        Command::NextPage(ticket) => {
            let result = api.fetch_exoplanets(ticket.page, PAGE_SIZE).await;
            if let Err(error) = &result {
                web_sys::console::error_1(&format!("Failed to load page {}: {error}", ticket.page).into());
            }
            let mut dashboard = dashboard.borrow_mut();
            if dashboard.finish_next_page(ticket, result) {
                dashboard.updated = Some(now());
            }
        }
        Command::Predict(input) => {
            let result = api.predict(&input).await;
            if let Err(error) = &result {
                web_sys::console::error_1(&format!("Prediction failed: {error}").into());
            }
            dashboard.borrow_mut().finish_prediction(result);
        }
    }
}

fn now() -> String {
    String::from(js_sys::Date::new_0().to_locale_time_string("en-GB"))
}
