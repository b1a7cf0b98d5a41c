use crate::config::{API_URL_VAR, DEBUG_VAR, LOG_FILE_VAR};
use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "stellar_scout", version, about = "Stellar Scout exoplanet explorer")]
pub struct CliArgs {
    /// Print stats, the first page and chart totals, then exit
    #[arg(long)]
    pub headless: bool,

    /// Print headless output as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,

    /// Override the backend base URL
    #[arg(long = "api-url", value_name = "URL")]
    pub api_url: Option<String>,

    /// Override the log file path
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<String>,
}

impl CliArgs {
    pub fn apply_env_overrides(&self) {
        if let Some(url) = &self.api_url {
            std::env::set_var(API_URL_VAR, url);
        }
        if let Some(path) = &self.log_file {
            std::env::set_var(LOG_FILE_VAR, path);
        }
        if self.debug {
            std::env::set_var(DEBUG_VAR, "1");
        }
    }

    pub const fn wants_headless(&self, is_terminal: bool) -> bool {
        self.headless || self.json || !is_terminal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_overrides() {
        let args = CliArgs::parse_from([
            "stellar_scout",
            "--api-url",
            "http://10.0.0.5:8000/api",
            "--json",
        ]);
        assert_eq!(args.api_url.as_deref(), Some("http://10.0.0.5:8000/api"));
        assert!(args.json);
        assert!(!args.debug);
    }

    #[test]
    fn json_implies_headless() {
        let args = CliArgs::parse_from(["stellar_scout", "--json"]);
        assert!(args.wants_headless(true));

        let args = CliArgs::parse_from(["stellar_scout"]);
        assert!(!args.wants_headless(true));
        assert!(args.wants_headless(false));
    }
}
