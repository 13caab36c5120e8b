//! Builds today's record or the prediction input from provider calls.

use chrono::{DateTime, Days, NaiveDate, Utc};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::{Result, SkyViewError},
    parser,
    provider::WeatherSource,
    record::{CurrentLocation, DisplayRecord, FeatureMatrix, HISTORY_DAYS},
};

/// Only locations in this country are served.
pub const SERVICE_COUNTRY: &str = "Australia";

#[derive(Debug, Clone, PartialEq)]
pub struct TodayWeather {
    pub record: DisplayRecord,
    pub location: String,
    pub country: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionInput {
    pub matrix: FeatureMatrix,
    pub location: String,
    pub country: String,
    /// The day being predicted: tomorrow in the location's timezone.
    pub target_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WeatherPayload {
    Today(TodayWeather),
    Prediction(PredictionInput),
}

#[derive(Debug)]
pub struct WeatherAssembler<S> {
    source: S,
    clock: fn() -> DateTime<Utc>,
}

impl<S: WeatherSource> WeatherAssembler<S> {
    pub fn new(source: S) -> Self {
        Self { source, clock: Utc::now }
    }

    /// Replace the clock used to determine "today".
    pub fn with_clock(mut self, clock: fn() -> DateTime<Utc>) -> Self {
        self.clock = clock;
        self
    }

    pub async fn fetch_weather(&self, location: &str, for_prediction: bool) -> Result<WeatherPayload> {
        if for_prediction {
            self.fetch_prediction_input(location).await.map(WeatherPayload::Prediction)
        } else {
            self.fetch_today(location).await.map(WeatherPayload::Today)
        }
    }

    #[instrument(skip(self))]
    pub async fn fetch_today(&self, location: &str) -> Result<TodayWeather> {
        let resolved = self.resolve(location).await?;

        let raw = self.source.history(location, resolved.date).await?;
        let record = parser::parse_display(&raw)?;

        Ok(TodayWeather {
            record,
            location: resolved.name,
            country: resolved.country,
            date: resolved.date,
        })
    }

    /// Fetch the last [`HISTORY_DAYS`] days, oldest first and ending today.
    #[instrument(skip(self))]
    pub async fn fetch_prediction_input(&self, location: &str) -> Result<PredictionInput> {
        let resolved = self.resolve(location).await?;
        let today = resolved.date;

        let mut rows = Vec::with_capacity(HISTORY_DAYS);
        for offset in (0..HISTORY_DAYS as u64).rev() {
            let date = shift(today, offset, NaiveDate::checked_sub_days)?;
            let raw = self.source.history(location, date).await?;
            let features = parser::parse_features(&raw)?;
            debug!(%date, max_gust = features.max_gust, rain_today = features.rain_today, "history row");
            rows.push(features.to_row());
        }

        let target_date = shift(today, 1, NaiveDate::checked_add_days)?;
        info!(location = %resolved.name, %target_date, "assembled prediction input");

        Ok(PredictionInput {
            matrix: FeatureMatrix::from_rows(rows),
            location: resolved.name,
            country: resolved.country,
            target_date,
        })
    }

    async fn resolve(&self, location: &str) -> Result<CurrentLocation> {
        let raw = self.source.current(location).await?;
        let resolved = parser::parse_current(&raw, (self.clock)())?;

        if resolved.country != SERVICE_COUNTRY {
            warn!(location, country = %resolved.country, "location outside service area");
            return Err(SkyViewError::LocationNotFound(location.to_string()));
        }

        Ok(resolved)
    }
}

fn shift(
    date: NaiveDate,
    days: u64,
    op: fn(NaiveDate, Days) -> Option<NaiveDate>,
) -> Result<NaiveDate> {
    op(date, Days::new(days)).ok_or_else(|| SkyViewError::InvalidTimestamp(date.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        model::{CurrentResponse, HistoryResponse},
        record::FieldValue,
        testing::{current_json, history_json},
    };
    use async_trait::async_trait;
    use chrono::TimeZone;
    use std::sync::{Arc, Mutex};

    /// In-memory provider recording the dates it was asked for.
    #[derive(Debug)]
    struct FakeSource {
        country: &'static str,
        fail_on: Option<NaiveDate>,
        requested: Arc<Mutex<Vec<NaiveDate>>>,
    }

    impl FakeSource {
        fn australia() -> Self {
            Self { country: "Australia", fail_on: None, requested: Arc::default() }
        }

        /// Handle onto the dates requested so far, usable after the source moves.
        fn log(&self) -> Log {
            Log(self.requested.clone())
        }
    }

    struct Log(Arc<Mutex<Vec<NaiveDate>>>);

    impl Log {
        fn dates(&self) -> Vec<NaiveDate> {
            self.0.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl WeatherSource for FakeSource {
        async fn current(&self, location: &str) -> Result<CurrentResponse> {
            if location == "Nowhere" {
                return Err(SkyViewError::LocationNotFound(location.into()));
            }
            Ok(serde_json::from_value(current_json(location, self.country, "Australia/Sydney"))
                .unwrap())
        }

        async fn history(&self, _location: &str, date: NaiveDate) -> Result<HistoryResponse> {
            self.requested.lock().unwrap().push(date);
            if self.fail_on == Some(date) {
                return Err(SkyViewError::UpstreamStatus {
                    service: "fake history",
                    status: 500,
                    body: String::new(),
                });
            }
            // encode the day of month as rainfall so rows can be told apart
            let precip = f64::from(chrono::Datelike::day(&date)) / 10.0;
            Ok(serde_json::from_value(history_json(&date.to_string(), precip)).unwrap())
        }
    }

    fn fixed_now() -> DateTime<Utc> {
        // 2024-03-10 in Sydney
        Utc.with_ymd_and_hms(2024, 3, 9, 20, 0, 0).unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn today_uses_local_date_and_display_record() {
        let source = FakeSource::australia();
        let log = source.log();
        let assembler = WeatherAssembler::new(source).with_clock(fixed_now);

        let today = assembler.fetch_today("Sydney").await.unwrap();

        assert_eq!(today.date, ymd(2024, 3, 10));
        assert_eq!(today.location, "Sydney");
        assert_eq!(today.country, "Australia");
        assert_eq!(today.record.rain_today_label(), "Yes");
        assert_eq!(today.record.condition.text, "Sunny");
        assert_eq!(log.dates(), vec![ymd(2024, 3, 10)]);
    }

    #[tokio::test]
    async fn prediction_input_is_seven_days_oldest_first() {
        let source = FakeSource::australia();
        let log = source.log();
        let assembler = WeatherAssembler::new(source).with_clock(fixed_now);

        let input = assembler.fetch_prediction_input("Sydney").await.unwrap();

        assert_eq!(input.target_date, ymd(2024, 3, 11));
        assert_eq!(input.matrix.len(), 7);
        let expected: Vec<_> = (4..=10).map(|d| ymd(2024, 3, d)).collect();
        assert_eq!(log.dates(), expected);

        let rainfall: Vec<_> = input.matrix.rows().iter().map(|r| r.0[2].clone()).collect();
        let expected: Vec<_> = (4..=10).map(|d| FieldValue::Number(f64::from(d) / 10.0)).collect();
        assert_eq!(rainfall, expected);
        assert!(input.matrix.rows().iter().all(|r| r.0.len() == 17));
    }

    #[tokio::test]
    async fn prediction_crosses_month_boundary() {
        fn early_march() -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2024, 3, 2, 1, 0, 0).unwrap()
        }
        let source = FakeSource::australia();
        let log = source.log();
        let assembler = WeatherAssembler::new(source).with_clock(early_march);

        let input = assembler.fetch_prediction_input("Sydney").await.unwrap();

        assert_eq!(log.dates().first(), Some(&ymd(2024, 2, 25)));
        assert_eq!(log.dates().last(), Some(&ymd(2024, 3, 2)));
        assert_eq!(input.target_date, ymd(2024, 3, 3));
    }

    #[tokio::test]
    async fn foreign_country_is_location_not_found() {
        let source = FakeSource { country: "New Zealand", ..FakeSource::australia() };
        let log = source.log();
        let assembler = WeatherAssembler::new(source).with_clock(fixed_now);

        let err = assembler.fetch_weather("Auckland", false).await.unwrap_err();
        assert!(err.is_location_not_found());
        let err = assembler.fetch_weather("Auckland", true).await.unwrap_err();
        assert!(err.is_location_not_found());
        assert!(log.dates().is_empty());
    }

    #[tokio::test]
    async fn provider_not_found_propagates() {
        let source = FakeSource::australia();
        let assembler = WeatherAssembler::new(source);

        let err = assembler.fetch_today("Nowhere").await.unwrap_err();
        assert!(err.is_location_not_found());
    }

    #[tokio::test]
    async fn first_failing_day_aborts_the_sequence() {
        let source = FakeSource { fail_on: Some(ymd(2024, 3, 6)), ..FakeSource::australia() };
        let log = source.log();
        let assembler = WeatherAssembler::new(source).with_clock(fixed_now);

        let err = assembler.fetch_prediction_input("Sydney").await.unwrap_err();

        assert!(matches!(err, SkyViewError::UpstreamStatus { status: 500, .. }));
        assert_eq!(log.dates(), vec![ymd(2024, 3, 4), ymd(2024, 3, 5), ymd(2024, 3, 6)]);
    }

    #[tokio::test]
    async fn fetch_weather_selects_payload_shape() {
        let source = FakeSource::australia();
        let assembler = WeatherAssembler::new(source).with_clock(fixed_now);

        assert!(matches!(
            assembler.fetch_weather("Sydney", false).await.unwrap(),
            WeatherPayload::Today(_)
        ));
        assert!(matches!(
            assembler.fetch_weather("Sydney", true).await.unwrap(),
            WeatherPayload::Prediction(_)
        ));
    }
}
