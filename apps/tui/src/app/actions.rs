use crate::api::HttpApi;
use std::future::Future;
use stellar_scout_core::store::PageTicket;
use stellar_scout_core::{
    ApiError, ChartData, ExoplanetPage, Health, PredictionInput, PredictionResult, Stats,
    PAGE_SIZE,
};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, warn};

/// Work queued by the UI for the network layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Request {
    Stats,
    Charts,
    Health,
    FirstPage(PageTicket),
    NextPage(PageTicket),
    Predict(PredictionInput),
}

/// A settled request, fed back into `App::apply`.
#[derive(Debug)]
pub enum ApiEvent {
    Stats(Result<Stats, ApiError>),
    Charts(Result<ChartData, ApiError>),
    Health(Result<Health, ApiError>),
    FirstPage(PageTicket, Result<ExoplanetPage, ApiError>),
    NextPage(PageTicket, Result<ExoplanetPage, ApiError>),
    Prediction(Result<PredictionResult, ApiError>),
}

/// Runs each request on its own task so the draw loop never waits on the
/// network.
#[derive(Debug, Clone)]
pub struct AppActions {
    api: HttpApi,
    events: UnboundedSender<ApiEvent>,
}

impl AppActions {
    pub const fn new(api: HttpApi, events: UnboundedSender<ApiEvent>) -> Self {
        Self { api, events }
    }

    pub fn dispatch(&self, request: Request) {
        debug!(?request, "dispatching");
        let api = self.api.clone();
        match request {
            Request::Stats => self.spawn(async move { ApiEvent::Stats(api.stats().await) }),
            Request::Charts => {
                self.spawn(async move { ApiEvent::Charts(api.chart_data().await) });
            }
            Request::Health => self.spawn(async move { ApiEvent::Health(api.health().await) }),
            Request::FirstPage(ticket) => self.spawn(async move {
                ApiEvent::FirstPage(ticket, api.exoplanets(ticket.page, PAGE_SIZE).await)
            }),
            Request::NextPage(ticket) => self.spawn(async move {
                ApiEvent::NextPage(ticket, api.exoplanets(ticket.page, PAGE_SIZE).await)
            }),
            Request::Predict(input) => self.spawn(async move {
                ApiEvent::Prediction(api.submit_prediction(input).await)
            }),
        }
    }

    fn spawn<F>(&self, task: F)
    where
        F: Future<Output = ApiEvent> + Send + 'static,
    {
        let events = self.events.clone();
        tokio::spawn(async move {
            let event = task.await;
            if events.send(event).is_err() {
                warn!("event loop gone, dropping response");
            }
        });
    }
}
