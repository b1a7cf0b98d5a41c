use serde::de::DeserializeOwned;
use stellar_scout_core::{
    ApiError, ChartData, Endpoint, ExoplanetApi, ExoplanetPage, Health, PredictionInput,
    PredictionResult, Stats, DEFAULT_API_URL,
};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Request, RequestInit, RequestMode, Response};

const API_URL_META: &str = "meta[name=\"stellar-api-url\"]";

/// Backend client over the browser's `fetch`.
#[derive(Debug, Clone)]
pub struct WebApi {
    endpoint: Endpoint,
}

impl WebApi {
    pub const fn new(endpoint: Endpoint) -> Self {
        Self { endpoint }
    }

    /// Base URL from `<meta name="stellar-api-url" content="...">`, falling
    /// back to the default.
    pub fn from_document() -> Self {
        let base = web_sys::window()
            .and_then(|window| window.document())
            .map_or_else(|| DEFAULT_API_URL.to_string(), |document| resolve_api_url(&document));
        Self::new(Endpoint::new(&base))
    }

    pub const fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, ApiError> {
        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        fetch_json(request, url).await
    }

    async fn post_json<T: DeserializeOwned>(&self, url: String, body: &str) -> Result<T, ApiError> {
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(body));
        let request = Request::new_with_str_and_init(&url, &opts).map_err(js_error)?;
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(js_error)?;
        fetch_json(request, url).await
    }
}

impl ExoplanetApi for WebApi {
    async fn fetch_stats(&self) -> Result<Stats, ApiError> {
        self.get_json(self.endpoint.stats()).await
    }

    async fn fetch_exoplanets(&self, page: u32, limit: u32) -> Result<ExoplanetPage, ApiError> {
        self.get_json(self.endpoint.exoplanets(page, limit)).await
    }

    async fn fetch_chart_data(&self) -> Result<ChartData, ApiError> {
        self.get_json(self.endpoint.chart_data()).await
    }

    async fn predict(&self, input: &PredictionInput) -> Result<PredictionResult, ApiError> {
        // serde_json writes NaN as null, which is what the backend expects
        // for fields the user left unparseable.
        let body = serde_json::to_string(input)?;
        self.post_json(self.endpoint.predict(), &body).await
    }

    async fn fetch_health(&self) -> Result<Health, ApiError> {
        self.get_json(self.endpoint.health()).await
    }
}

async fn fetch_json<T: DeserializeOwned>(request: Request, url: String) -> Result<T, ApiError> {
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;

    let response_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?;
    let response = response_value
        .dyn_into::<Response>()
        .map_err(|_| ApiError::Network(format!("{url}: not a Response")))?;

    if !response.ok() {
        return Err(ApiError::Status {
            endpoint: url,
            status: response.status(),
        });
    }

    let json = JsFuture::from(response.json().map_err(js_error)?)
        .await
        .map_err(|e| ApiError::Decode(format!("{e:?}")))?;
    serde_wasm_bindgen::from_value::<T>(json).map_err(|e| ApiError::Decode(e.to_string()))
}

fn js_error(value: JsValue) -> ApiError {
    ApiError::Network(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

fn resolve_api_url(document: &Document) -> String {
    let meta = document.query_selector(API_URL_META).ok().flatten();
    if let Some(meta) = meta {
        if let Some(value) = meta.get_attribute("content") {
            let trimmed = value.trim();
            if !trimmed.is_empty() {
                return trimmed.to_string();
            }
        }
    }
    DEFAULT_API_URL.to_string()
}
