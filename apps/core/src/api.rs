use crate::domain::{ChartData, ExoplanetPage, Health, PredictionInput, PredictionResult, Stats};
use serde::de::DeserializeOwned;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("network failure: {0}")]
    Network(String),
    #[error("{endpoint} returned HTTP {status}")]
    Status { endpoint: String, status: u16 },
    /// The body was not JSON or did not match the expected shape.
    #[error("decode failure: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}

pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str(body).map_err(Into::into)
}

/// Builds endpoint URLs from a single base.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    base: String,
}

impl Endpoint {
    pub fn new(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        let base = if trimmed.is_empty() {
            DEFAULT_API_URL.to_string()
        } else {
            trimmed.to_string()
        };
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn stats(&self) -> String {
        format!("{}/stats", self.base)
    }

    pub fn exoplanets(&self, page: u32, limit: u32) -> String {
        format!("{}/exoplanets?page={page}&limit={limit}", self.base)
    }

    pub fn chart_data(&self) -> String {
        format!("{}/chart-data", self.base)
    }

    pub fn predict(&self) -> String {
        format!("{}/predict", self.base)
    }

    pub fn health(&self) -> String {
        format!("{}/health", self.base)
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

/// The backend as seen by the client. Implemented once per presentation
/// surface: reqwest for the terminal, `fetch` for the browser.
#[allow(async_fn_in_trait)]
pub trait ExoplanetApi {
    async fn fetch_stats(&self) -> Result<Stats, ApiError>;

    /// `page` is 1-indexed.
    async fn fetch_exoplanets(&self, page: u32, limit: u32) -> Result<ExoplanetPage, ApiError>;

    async fn fetch_chart_data(&self) -> Result<ChartData, ApiError>;

    async fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, ApiError>;

    async fn fetch_health(&self) -> Result<Health, ApiError>;
}
