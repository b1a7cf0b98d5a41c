use crate::config::AppConfig;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use std::fs::OpenOptions;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVES: &str = "stellar_scout=debug,stellar_scout_core=debug";

/// Installs the global subscriber when `--debug`/`DEBUG` or `RUST_LOG` asks
/// for it. The interactive UI owns stdout, so it logs to a file; headless
/// runs log to stderr. Returns whether logging was enabled.
pub fn init_logging(config: &AppConfig, headless: bool) -> Result<bool> {
    let rust_log_set = std::env::var_os("RUST_LOG").is_some();
    if !config.debug && !rust_log_set {
        return Ok(false);
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true);

    if headless {
        builder
            .with_writer(std::io::stderr)
            .try_init()
            .map_err(|e| eyre!("Failed to install logger: {e}"))?;
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.log_file)?;
        builder
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .try_init()
            .map_err(|e| eyre!("Failed to install logger: {e}"))?;
    }

    tracing::info!(api_url = %config.api_url, "logging enabled");
    Ok(true)
}
