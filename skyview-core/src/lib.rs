//! Core library for SkyView, a weather viewer for Australian locations.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - Clients for the WeatherAPI.com provider and the forecast model service
//! - Parsing of provider responses into typed records
//! - Assembly of the seven-day feature matrix fed to the model
//! - Human-readable formatting of observed and predicted weather
//!
//! It is used by `skyview-cli`, but can also be reused by other front ends.

pub mod assembler;
pub mod config;
pub mod error;
pub mod fields;
pub mod formatter;
pub mod locations;
pub mod model;
pub mod parser;
pub mod prediction;
pub mod provider;
pub mod record;
pub mod report;

#[cfg(test)]
mod testing;

pub use assembler::{PredictionInput, TodayWeather, WeatherAssembler, WeatherPayload};
pub use config::Config;
pub use error::{Result, SkyViewError};
pub use formatter::{FormattedRecord, WeatherRecord};
pub use prediction::{PredictionClient, Predictor};
pub use provider::{WeatherApiClient, WeatherSource};
pub use record::{
    Condition, DisplayRecord, FeatureMatrix, FeatureRecord, FieldValue, ParsedWeatherRecord,
    PredictionRecord,
};
pub use report::{ForecastDay, SkyView, WeatherReport};
