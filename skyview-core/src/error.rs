use thiserror::Error;

use crate::fields::ObservationHour;

pub type Result<T> = std::result::Result<T, SkyViewError>;

/// Failures surfaced by the weather and prediction pipeline.
///
/// Only [`SkyViewError::LocationNotFound`] and [`SkyViewError::EmptyLocation`]
/// are recoverable by the user; everything else is an upstream failure.
#[derive(Debug, Error)]
pub enum SkyViewError {
    /// The provider rejected the location, or it resolved outside Australia.
    #[error("Location '{0}' not found")]
    LocationNotFound(String),

    #[error("No location given")]
    EmptyLocation,

    #[error("{service} request failed with status {status}: {body}")]
    UpstreamStatus { service: &'static str, status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to parse {service} response: {source}")]
    MalformedResponse {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("Invalid hourly timestamp '{0}', expected YYYY-MM-DD HH:MM")]
    InvalidTimestamp(String),

    #[error("History response contained no forecastday data")]
    MissingForecastDay,

    #[error("History response contained no hourly data")]
    MissingHourlyData,

    #[error("Expected exactly one hourly entry at {hour}, found {found}")]
    ObservationHour { hour: ObservationHour, found: usize },
}

impl SkyViewError {
    pub fn is_location_not_found(&self) -> bool {
        matches!(self, SkyViewError::LocationNotFound(_))
    }

    /// Message suitable for showing to an end user.
    pub fn user_message(&self) -> &'static str {
        match self {
            SkyViewError::LocationNotFound(_) => {
                "Location not found. Please enter a valid location in Australia."
            }
            SkyViewError::EmptyLocation => "Please select a location.",
            _ => "Sorry, the service is temporarily unavailable. Please try again later.",
        }
    }
}
