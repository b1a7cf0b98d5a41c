//! Presentation core shared by the terminal and browser clients: the data
//! model, the backend seam, the dataset store and its filtered view, and the
//! ViewModels every surface renders.

pub mod api;
pub mod charts;
pub mod domain;
pub mod filter;
pub mod prediction;
pub mod store;
pub mod view;

#[cfg(test)]
mod fake;

pub use api::{ApiError, Endpoint, ExoplanetApi, DEFAULT_API_URL};
pub use domain::{
    ChartData, Exoplanet, ExoplanetPage, Habitability, Health, PlanetType, PredictionInput,
    PredictionResult, Stats, PAGE_SIZE,
};
pub use filter::Criteria;
pub use store::DatasetStore;
