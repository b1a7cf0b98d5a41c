use clap::Parser;
use color_eyre::Result;
use stellar_scout::api::HttpApi;
use stellar_scout::app::{App, AppActions};
use stellar_scout::cli::CliArgs;
use stellar_scout::config::init_app_config;
use stellar_scout::{event, logging, terminal};
use stellar_scout_core::Endpoint;
use tokio::sync::mpsc;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config()?;

    let headless = args.wants_headless(is_terminal());
    logging::init_logging(&config, headless)?;

    let api = HttpApi::new(Endpoint::new(&config.api_url))?;

    if headless {
        return event::run_headless(&api, args.json).await;
    }

    let (events_tx, mut events_rx) = mpsc::unbounded_channel();
    let actions = AppActions::new(api, events_tx);

    let mut app = App::new();
    app.request_initial_load();

    terminal::install_panic_hook();
    let mut terminal = terminal::setup()?;

    let result = event::run(&mut terminal, &mut app, &actions, &mut events_rx).await;

    // Restore terminal
    terminal::cleanup(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
