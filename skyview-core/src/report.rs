//! End-to-end report for one location: fetch, optionally predict, format.

use chrono::NaiveDate;
use tracing::instrument;

use crate::{
    assembler::WeatherAssembler,
    config::Config,
    error::{Result, SkyViewError},
    formatter::{self, FormattedRecord, WeatherRecord},
    prediction::{PredictionClient, Predictor},
    provider::{WeatherApiClient, WeatherSource},
    record::Condition,
};

/// Which day to show; the two states of the today/tomorrow toggle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ForecastDay {
    #[default]
    Today,
    Tomorrow,
}

impl ForecastDay {
    pub fn toggled(self) -> Self {
        match self {
            ForecastDay::Today => ForecastDay::Tomorrow,
            ForecastDay::Tomorrow => ForecastDay::Today,
        }
    }

    pub fn is_prediction(self) -> bool {
        self == ForecastDay::Tomorrow
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WeatherReport {
    pub location: String,
    pub country: String,
    pub date: NaiveDate,
    /// Only observed (today) reports have a condition.
    pub condition: Option<Condition>,
    pub fields: FormattedRecord,
}

impl WeatherReport {
    pub fn heading(&self) -> String {
        format!("{}, {} - {}", self.location, self.country, self.date)
    }
}

#[derive(Debug)]
pub struct SkyView<S, P> {
    assembler: WeatherAssembler<S>,
    predictor: P,
}

impl SkyView<WeatherApiClient, PredictionClient> {
    pub fn from_config(config: &Config) -> anyhow::Result<Self> {
        let source = WeatherApiClient::from_config(config)?;
        Ok(Self::new(WeatherAssembler::new(source), PredictionClient::from_config(config)))
    }
}

impl<S: WeatherSource, P: Predictor> SkyView<S, P> {
    pub fn new(assembler: WeatherAssembler<S>, predictor: P) -> Self {
        Self { assembler, predictor }
    }

    #[instrument(skip(self))]
    pub async fn report(&self, location: &str, day: ForecastDay) -> Result<WeatherReport> {
        let location = location.trim();
        if location.is_empty() {
            return Err(SkyViewError::EmptyLocation);
        }

        match day {
            ForecastDay::Today => {
                let today = self.assembler.fetch_today(location).await?;
                let condition = today.record.condition.clone();
                Ok(WeatherReport {
                    location: today.location,
                    country: today.country,
                    date: today.date,
                    condition: Some(condition),
                    fields: formatter::format(WeatherRecord::Observed(today.record)),
                })
            }
            ForecastDay::Tomorrow => {
                let input = self.assembler.fetch_prediction_input(location).await?;
                let predicted = self.predictor.predict(&input.matrix).await?;
                Ok(WeatherReport {
                    location: input.location,
                    country: input.country,
                    date: input.target_date,
                    condition: None,
                    fields: formatter::format(WeatherRecord::Predicted(predicted)),
                })
            }
        }
    }
}
