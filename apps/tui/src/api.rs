use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use stellar_scout_core::api::decode;
use stellar_scout_core::{
    ApiError, ChartData, Endpoint, ExoplanetApi, ExoplanetPage, Health, PredictionInput,
    PredictionResult, Stats,
};
use tracing::debug;

/// reqwest-backed client. Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    endpoint: Endpoint,
}

impl HttpApi {
    pub fn new(endpoint: Endpoint) -> Result<Self, ApiError> {
        let client = Client::builder()
            .user_agent(concat!("stellar_scout/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;
        Ok(Self { client, endpoint })
    }

    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    pub async fn stats(&self) -> Result<Stats, ApiError> {
        let url = self.endpoint.stats();
        self.send(self.client.get(&url), url).await
    }

    pub async fn exoplanets(&self, page: u32, limit: u32) -> Result<ExoplanetPage, ApiError> {
        let url = self.endpoint.exoplanets(page, limit);
        self.send(self.client.get(&url), url).await
    }

    pub async fn chart_data(&self) -> Result<ChartData, ApiError> {
        let url = self.endpoint.chart_data();
        self.send(self.client.get(&url), url).await
    }

    pub async fn submit_prediction(
        &self,
        input: PredictionInput,
    ) -> Result<PredictionResult, ApiError> {
        let url = self.endpoint.predict();
        // Serialized by hand so NaN fields go out as `null`.
        let body = serde_json::to_string(&input)?;
        let request = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(body);
        self.send(request, url).await
    }

    pub async fn health(&self) -> Result<Health, ApiError> {
        let url = self.endpoint.health();
        self.send(self.client.get(&url), url).await
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        url: String,
    ) -> Result<T, ApiError> {
        debug!(%url, "sending request");
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                endpoint: url,
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(&body)
    }
}

impl ExoplanetApi for HttpApi {
    async fn fetch_stats(&self) -> Result<Stats, ApiError> {
        self.stats().await
    }

    async fn fetch_exoplanets(&self, page: u32, limit: u32) -> Result<ExoplanetPage, ApiError> {
        self.exoplanets(page, limit).await
    }

    async fn fetch_chart_data(&self) -> Result<ChartData, ApiError> {
        self.chart_data().await
    }

    async fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, ApiError> {
        self.submit_prediction(*input).await
    }

    async fn fetch_health(&self) -> Result<Health, ApiError> {
        self.health().await
    }
}
