use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use std::fmt::Debug;
use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::{Result, SkyViewError},
    provider::weatherapi::truncate_body,
    record::{FeatureMatrix, PredictionRecord},
};

pub const DEFAULT_BASE_URL: &str = "https://rnn-weather-forecast-api.onrender.com";

const SERVICE: &str = "prediction";

/// Remote model predicting tomorrow's weather from a week of history.
#[async_trait]
pub trait Predictor: Send + Sync + Debug {
    async fn predict(&self, matrix: &FeatureMatrix) -> Result<PredictionRecord>;
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    data: &'a FeatureMatrix,
}

#[derive(Debug, Clone)]
pub struct PredictionClient {
    base_url: String,
    http: Client,
}

impl PredictionClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into().trim_end_matches('/').to_string(), http: Client::new() }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.prediction.base_url)
    }
}

impl Default for PredictionClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait]
impl Predictor for PredictionClient {
    #[instrument(skip_all, fields(rows = matrix.len()))]
    async fn predict(&self, matrix: &FeatureMatrix) -> Result<PredictionRecord> {
        let url = format!("{}/predict/", self.base_url);

        let res = self.http.post(&url).json(&PredictRequest { data: matrix }).send().await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "prediction responded");

        if !status.is_success() {
            return Err(SkyViewError::UpstreamStatus {
                service: SERVICE,
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|source| SkyViewError::MalformedResponse { service: SERVICE, source })
    }
}
