use async_trait::async_trait;
use chrono::NaiveDate;
use std::fmt::Debug;

use crate::{
    error::Result,
    model::{CurrentResponse, HistoryResponse},
};

pub mod weatherapi;

pub use weatherapi::WeatherApiClient;

/// Source of raw weather documents for a location.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    /// Current conditions; used to resolve the location and its timezone.
    async fn current(&self, location: &str) -> Result<CurrentResponse>;

    /// Observed weather for a single local date.
    async fn history(&self, location: &str, date: NaiveDate) -> Result<HistoryResponse>;
}
