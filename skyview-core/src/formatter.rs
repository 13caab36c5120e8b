//! Human-readable rendering of weather records.
//!
//! Formatting consumes the record, so a value can never be formatted twice.

use std::collections::BTreeMap;

use crate::{
    fields::{DailyField, FEATURE_ORDER, Field, Unit},
    record::{DisplayRecord, FieldValue, PredictionRecord},
};

/// A record ready for display.
#[derive(Debug, Clone, PartialEq)]
pub enum WeatherRecord {
    /// Today's observations from the weather provider.
    Observed(DisplayRecord),
    /// Tomorrow's values from the prediction model.
    Predicted(PredictionRecord),
}

impl WeatherRecord {
    pub fn is_prediction(&self) -> bool {
        matches!(self, WeatherRecord::Predicted(_))
    }
}

/// Display name to unit-suffixed value, sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedRecord(BTreeMap<String, String>);

impl FormattedRecord {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn insert(&mut self, name: impl Into<String>, value: String) {
        self.0.insert(name.into(), value);
    }
}

pub fn format(record: WeatherRecord) -> FormattedRecord {
    match record {
        WeatherRecord::Observed(r) => format_observed(r),
        WeatherRecord::Predicted(r) => format_predicted(r),
    }
}

/// Format today's record. The condition is dropped; callers that show it
/// must read it before formatting.
pub fn format_observed(record: DisplayRecord) -> FormattedRecord {
    let mut out = FormattedRecord::default();

    for field in FEATURE_ORDER {
        let value = match (field.unit(), record.value(field)) {
            (Unit::RainFlag, _) => record.rain_today_label().to_string(),
            (unit, FieldValue::Number(v)) => with_unit(unit, v),
            (_, other) => other.to_string(),
        };
        out.insert(field.display_name(), value);
    }

    out
}

pub fn format_predicted(record: PredictionRecord) -> FormattedRecord {
    let mut out = FormattedRecord::default();

    for (name, unit, value) in [
        ("MinTemp", Unit::Celsius, record.min_temp),
        ("MaxTemp", Unit::Celsius, record.max_temp),
        ("Rainfall", Unit::Millimetres, record.rainfall),
        ("WindGustSpeed", Unit::Kph, record.wind_gust_speed),
        ("WindSpeed9am", Unit::Kph, record.wind_speed_9am),
        ("WindSpeed3pm", Unit::Kph, record.wind_speed_3pm),
        ("Pressure9am", Unit::Hectopascal, record.pressure_9am),
        ("Pressure3pm", Unit::Hectopascal, record.pressure_3pm),
        ("Temp9am", Unit::Celsius, record.temp_9am),
        ("Temp3pm", Unit::Celsius, record.temp_3pm),
    ] {
        out.insert(name, with_unit(unit, value));
    }
    out.insert(
        Field::Daily(DailyField::RainToday).display_name(),
        percent(record.rain_today * 100.0),
    );

    for (name, value) in record.extra {
        let value = match value {
            serde_json::Value::String(s) => s,
            other => other.to_string(),
        };
        out.insert(name, value);
    }

    out
}

fn with_unit(unit: Unit, value: f64) -> String {
    match unit {
        Unit::Celsius => format!("{}°C", fixed(value, 1)),
        Unit::Millimetres => format!("{}mm", fixed(value.max(0.0), 2)),
        Unit::Kph => format!("{}kph", fixed(value, 1)),
        Unit::Hectopascal => format!("{}hPa", fixed(value, 1)),
        Unit::Percent => percent(value),
        Unit::Direction | Unit::RainFlag => value.to_string(),
    }
}

fn percent(value: f64) -> String {
    format!("{}%", fixed(value, 0))
}

/// Round half away from zero to `decimals` places, then render.
fn fixed(value: f64, decimals: u32) -> String {
    let scale = 10f64.powi(decimals as i32);
    // + 0.0 turns -0.0 into 0.0
    let rounded = (value * scale).round() / scale + 0.0;
    format!("{rounded:.prec$}", prec = decimals as usize)
}
