//! In-memory backend for tests.

use crate::api::{ApiError, ExoplanetApi};
use crate::domain::{
    ChartData, Exoplanet, ExoplanetPage, Health, PredictionInput, PredictionResult, Stats,
};
use std::cell::RefCell;

pub fn page_of(prefix: &str, count: usize, has_more: bool) -> ExoplanetPage {
    let exoplanets = (0..count)
        .map(|index| Exoplanet::named(format!("{prefix}-{index}")))
        .collect();
    ExoplanetPage::new(exoplanets, has_more)
}

#[derive(Debug, Default)]
pub struct FakeApi {
    pages: Vec<ExoplanetPage>,
    stats: Option<Stats>,
    prediction: Option<PredictionResult>,
    requested: RefCell<Vec<u32>>,
    submitted: RefCell<Vec<PredictionInput>>,
}

impl FakeApi {
    pub fn with_pages(pages: Vec<ExoplanetPage>) -> Self {
        Self {
            pages,
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self::default()
    }

    pub fn with_stats(mut self, stats: Stats) -> Self {
        self.stats = Some(stats);
        self
    }

    pub fn with_prediction(mut self, prediction: PredictionResult) -> Self {
        self.prediction = Some(prediction);
        self
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested.borrow().clone()
    }

    pub fn submitted(&self) -> Vec<PredictionInput> {
        self.submitted.borrow().clone()
    }

    fn offline() -> ApiError {
        ApiError::Network("connection refused".to_string())
    }
}

impl ExoplanetApi for FakeApi {
    async fn fetch_stats(&self) -> Result<Stats, ApiError> {
        self.stats.clone().ok_or_else(Self::offline)
    }

    async fn fetch_exoplanets(&self, page: u32, _limit: u32) -> Result<ExoplanetPage, ApiError> {
        self.requested.borrow_mut().push(page);
        let index = usize::try_from(page).unwrap_or(usize::MAX).saturating_sub(1);
        self.pages.get(index).cloned().ok_or_else(Self::offline)
    }

    async fn fetch_chart_data(&self) -> Result<ChartData, ApiError> {
        Ok(ChartData::default())
    }

    async fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, ApiError> {
        self.submitted.borrow_mut().push(*input);
        self.prediction.clone().ok_or_else(Self::offline)
    }

    async fn fetch_health(&self) -> Result<Health, ApiError> {
        Err(Self::offline())
    }
}
