//! Shared fixtures for unit tests.

use serde_json::{Value, json};

use crate::{
    model::HistoryResponse,
    record::{FeatureRecord, HourlySample},
};

pub(crate) fn sample_features() -> FeatureRecord {
    FeatureRecord {
        mintemp_c: 12.1,
        maxtemp_c: 24.3,
        totalprecip_mm: 0.0,
        max_gust: 40.0,
        morning: HourlySample {
            wind_kph: 10.0,
            pressure_mb: 1015.0,
            temp_c: 15.2,
            wind_dir: "NE".into(),
            humidity: 70.0,
            cloud: 25.0,
        },
        afternoon: HourlySample {
            wind_kph: 20.5,
            pressure_mb: 1012.0,
            temp_c: 22.8,
            wind_dir: "SSW".into(),
            humidity: 45.0,
            cloud: 50.0,
        },
        rain_today: false,
    }
}

pub(crate) fn hour_json(date: &str, hour: u32) -> Value {
    let h = f64::from(hour);
    let wind_dir = match hour {
        9 => "NE",
        15 => "SW",
        _ => "N",
    };
    json!({
        "time": format!("{date} {hour:02}:00"),
        "gust_kph": 10.0 + h,
        "wind_kph": h,
        "pressure_mb": 1000.0 + h,
        "temp_c": 10.0 + h * 0.5,
        "wind_dir": wind_dir,
        "humidity": 90 - hour as i64,
        "cloud": hour * 2,
    })
}

/// A full day of history: 24 hourly entries, gusts peaking at 33.0 at 23:00.
pub(crate) fn history_json(date: &str, totalprecip_mm: f64) -> Value {
    let hours: Vec<Value> = (0..24).map(|h| hour_json(date, h)).collect();
    history_with_hours(totalprecip_mm, hours)
}

pub(crate) fn history_with_hours(totalprecip_mm: f64, hours: Vec<Value>) -> Value {
    json!({
        "location": { "name": "Sydney", "country": "Australia", "tz_id": "Australia/Sydney" },
        "forecast": {
            "forecastday": [{
                "day": {
                    "maxtemp_c": 25.0,
                    "mintemp_c": 8.0,
                    "totalprecip_mm": totalprecip_mm,
                    "condition": {
                        "text": "Sunny",
                        "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png"
                    }
                },
                "hour": hours,
            }]
        }
    })
}

pub(crate) fn history(date: &str, totalprecip_mm: f64) -> HistoryResponse {
    serde_json::from_value(history_json(date, totalprecip_mm)).unwrap()
}

pub(crate) fn current_json(name: &str, country: &str, tz_id: &str) -> Value {
    json!({
        "location": { "name": name, "country": country, "tz_id": tz_id },
        "current": { "temp_c": 21.0, "condition": { "text": "Sunny" } }
    })
}
