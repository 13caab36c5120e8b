use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::{Result, SkyViewError},
    model::{CurrentResponse, HistoryResponse},
};

use super::WeatherSource;

pub const DEFAULT_BASE_URL: &str = "http://api.weatherapi.com/v1";

/// Client for the WeatherAPI.com `current.json` and `history.json` endpoints.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiClient {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self { api_key: api_key.into(), base_url: DEFAULT_BASE_URL.to_string(), http: Client::new() }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let api_key = config.weather_api_key()?;
        Ok(Self::new(api_key).with_base_url(&config.weather_api.base_url))
    }

    async fn get<T: DeserializeOwned>(
        &self,
        service: &'static str,
        endpoint: &str,
        location: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}/{endpoint}", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", location)])
            .query(params)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        debug!(%status, bytes = body.len(), "{service} responded");

        if status == StatusCode::BAD_REQUEST {
            return Err(SkyViewError::LocationNotFound(location.to_string()));
        }
        if !status.is_success() {
            return Err(SkyViewError::UpstreamStatus {
                service,
                status: status.as_u16(),
                body: truncate_body(&body),
            });
        }

        serde_json::from_str(&body)
            .map_err(|source| SkyViewError::MalformedResponse { service, source })
    }
}

#[async_trait]
impl WeatherSource for WeatherApiClient {
    #[instrument(skip(self))]
    async fn current(&self, location: &str) -> Result<CurrentResponse> {
        self.get("WeatherAPI current", "current.json", location, &[]).await
    }

    #[instrument(skip(self))]
    async fn history(&self, location: &str, date: NaiveDate) -> Result<HistoryResponse> {
        let dt = date.format("%Y-%m-%d").to_string();
        self.get("WeatherAPI history", "history.json", location, &[("dt", dt)]).await
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((idx, _)) => format!("{}...", &body[..idx]),
        None => body.to_string(),
    }
}
