//! Parsed weather records.
//!
//! A history response is parsed into one of two shapes: a [`FeatureRecord`]
//! (provider field names, one row of the model input) or a [`DisplayRecord`]
//! (display field names plus the day's condition). The prediction service
//! answers with a [`PredictionRecord`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::{collections::BTreeMap, fmt};

use crate::fields::{DailyField, FEATURE_ORDER, Field, HourlyField, ObservationHour};

/// Number of days of history fed to the prediction model.
pub const HISTORY_DAYS: usize = 7;

/// A single cell of a parsed record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Integer(i64),
    Text(String),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(v) => write!(f, "{v}"),
            FieldValue::Integer(v) => write!(f, "{v}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Location resolved from a current-conditions response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentLocation {
    /// Today's date in the location's own timezone.
    pub date: NaiveDate,
    pub name: String,
    pub country: String,
}

/// Values read from the hourly entry at one [`ObservationHour`].
#[derive(Debug, Clone, PartialEq)]
pub struct HourlySample {
    pub wind_kph: f64,
    pub pressure_mb: f64,
    pub temp_c: f64,
    pub wind_dir: String,
    pub humidity: f64,
    pub cloud: f64,
}

impl HourlySample {
    pub fn value(&self, field: HourlyField) -> FieldValue {
        match field {
            HourlyField::WindSpeed => FieldValue::Number(self.wind_kph),
            HourlyField::Pressure => FieldValue::Number(self.pressure_mb),
            HourlyField::Temp => FieldValue::Number(self.temp_c),
            HourlyField::WindDir => FieldValue::Text(self.wind_dir.clone()),
            HourlyField::Humidity => FieldValue::Number(self.humidity),
            HourlyField::Cloud => FieldValue::Number(self.cloud),
        }
    }
}

/// One day of observations under provider field names.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureRecord {
    pub mintemp_c: f64,
    pub maxtemp_c: f64,
    pub totalprecip_mm: f64,
    pub max_gust: f64,
    pub morning: HourlySample,
    pub afternoon: HourlySample,
    /// `totalprecip_mm > 0`.
    pub rain_today: bool,
}

impl FeatureRecord {
    pub fn sample(&self, hour: ObservationHour) -> &HourlySample {
        match hour {
            ObservationHour::Morning => &self.morning,
            ObservationHour::Afternoon => &self.afternoon,
        }
    }

    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Daily(DailyField::MinTemp) => FieldValue::Number(self.mintemp_c),
            Field::Daily(DailyField::MaxTemp) => FieldValue::Number(self.maxtemp_c),
            Field::Daily(DailyField::TotalPrecip) => FieldValue::Number(self.totalprecip_mm),
            Field::Daily(DailyField::MaxGust) => FieldValue::Number(self.max_gust),
            Field::Daily(DailyField::RainToday) => FieldValue::Integer(i64::from(self.rain_today)),
            Field::Hourly(f, hour) => self.sample(hour).value(f),
        }
    }

    /// All 17 values keyed by provider name, in feature order.
    pub fn fields(&self) -> Vec<(String, FieldValue)> {
        FEATURE_ORDER.iter().map(|f| (f.provider_key(), self.value(*f))).collect()
    }

    pub fn to_row(&self) -> FeatureRow {
        FeatureRow(FEATURE_ORDER.map(|f| self.value(f)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
}

/// One day of observations under display names, with its condition.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayRecord {
    pub observation: FeatureRecord,
    pub condition: Condition,
}

impl DisplayRecord {
    pub fn rain_today_label(&self) -> &'static str {
        if self.observation.rain_today { "Yes" } else { "No" }
    }

    pub fn value(&self, field: Field) -> FieldValue {
        match field {
            Field::Daily(DailyField::RainToday) => {
                FieldValue::Text(self.rain_today_label().to_string())
            }
            other => self.observation.value(other),
        }
    }

    /// Display-named values followed by the condition `text` and `icon`.
    pub fn fields(&self) -> Vec<(String, FieldValue)> {
        let mut fields: Vec<_> =
            FEATURE_ORDER.iter().map(|f| (f.display_name(), self.value(*f))).collect();
        fields.push(("text".to_string(), FieldValue::Text(self.condition.text.clone())));
        fields.push(("icon".to_string(), FieldValue::Text(self.condition.icon.clone())));
        fields
    }
}

/// Result of parsing a history response.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedWeatherRecord {
    Features(FeatureRecord),
    Display(DisplayRecord),
}

impl ParsedWeatherRecord {
    pub fn fields(&self) -> Vec<(String, FieldValue)> {
        match self {
            ParsedWeatherRecord::Features(r) => r.fields(),
            ParsedWeatherRecord::Display(r) => r.fields(),
        }
    }
}

/// One matrix row in [`FEATURE_ORDER`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureRow(pub [FieldValue; 17]);

/// Model input: one row per day, oldest first.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FeatureMatrix {
    rows: Vec<FeatureRow>,
}

impl FeatureMatrix {
    pub fn from_rows(rows: Vec<FeatureRow>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[FeatureRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Response of the prediction service for tomorrow.
///
/// `rain_today` is the model's rain probability in `0.0..=1.0`. Any extra keys
/// the model returns are kept in `extra` and displayed verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    #[serde(rename = "MinTemp")]
    pub min_temp: f64,
    #[serde(rename = "MaxTemp")]
    pub max_temp: f64,
    #[serde(rename = "Rainfall")]
    pub rainfall: f64,
    #[serde(rename = "WindGustSpeed")]
    pub wind_gust_speed: f64,
    #[serde(rename = "WindSpeed9am")]
    pub wind_speed_9am: f64,
    #[serde(rename = "WindSpeed3pm")]
    pub wind_speed_3pm: f64,
    #[serde(rename = "Pressure9am")]
    pub pressure_9am: f64,
    #[serde(rename = "Pressure3pm")]
    pub pressure_3pm: f64,
    #[serde(rename = "Temp9am")]
    pub temp_9am: f64,
    #[serde(rename = "Temp3pm")]
    pub temp_3pm: f64,
    #[serde(rename = "RainToday")]
    pub rain_today: f64,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}
