//! Wire shapes of the WeatherAPI.com responses we consume.
//!
//! Fields are required: a missing upstream value is a decode error, never a
//! silent default.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct WaLocation {
    pub name: String,
    pub country: String,
    pub tz_id: String,
}

/// Body of `current.json`. Only the location block is used.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentResponse {
    pub location: WaLocation,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WaCondition {
    pub text: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WaDay {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub totalprecip_mm: f64,
    pub condition: WaCondition,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WaHour {
    /// Local time, `YYYY-MM-DD HH:MM`.
    pub time: String,
    pub gust_kph: f64,
    pub wind_kph: f64,
    pub pressure_mb: f64,
    pub temp_c: f64,
    pub wind_dir: String,
    pub humidity: f64,
    pub cloud: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WaForecastDay {
    pub day: WaDay,
    pub hour: Vec<WaHour>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WaForecast {
    pub forecastday: Vec<WaForecastDay>,
}

/// Body of `history.json` for a single day.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryResponse {
    pub forecast: WaForecast,
}
