#![allow(dead_code)]

use chrono::{DateTime, TimeZone, Utc};
use serde_json::{Value, json};

/// 2024-01-15 10:00 in Sydney (UTC+11).
pub fn sydney_morning() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 14, 23, 0, 0).unwrap()
}

pub fn current_response(name: &str, country: &str) -> Value {
    json!({
        "location": {
            "name": name,
            "region": "New South Wales",
            "country": country,
            "tz_id": "Australia/Sydney",
            "localtime": "2024-01-15 10:00"
        },
        "current": {
            "temp_c": 24.0,
            "condition": { "text": "Sunny", "icon": "//cdn.weatherapi.com/weather/64x64/day/113.png" }
        }
    })
}

pub fn history_response(date: &str, totalprecip_mm: f64) -> Value {
    let hours: Vec<Value> = (0..24u32)
        .map(|h| {
            json!({
                "time": format!("{date} {h:02}:00"),
                "gust_kph": if h == 14 { 52.4 } else { 20.0 },
                "wind_kph": 5.0 + f64::from(h),
                "pressure_mb": 1010.0 + f64::from(h) / 10.0,
                "temp_c": 15.0 + f64::from(h) / 2.0,
                "wind_dir": if h < 12 { "ENE" } else { "S" },
                "humidity": 80 - h,
                "cloud": 10 + h,
            })
        })
        .collect();

    json!({
        "location": { "name": "Sydney", "country": "Australia", "tz_id": "Australia/Sydney" },
        "forecast": {
            "forecastday": [{
                "date": date,
                "day": {
                    "maxtemp_c": 27.4,
                    "mintemp_c": 18.2,
                    "totalprecip_mm": totalprecip_mm,
                    "condition": {
                        "text": "Patchy rain possible",
                        "icon": "//cdn.weatherapi.com/weather/64x64/day/176.png"
                    }
                },
                "hour": hours
            }]
        }
    })
}

pub fn prediction_response() -> Value {
    json!({
        "MinTemp": 17.96, "MaxTemp": 26.04, "Rainfall": -0.21, "WindGustSpeed": 44.44,
        "WindSpeed9am": 12.0, "WindSpeed3pm": 19.5, "Pressure9am": 1012.34,
        "Pressure3pm": 1010.0, "Temp9am": 20.0, "Temp3pm": 25.25, "RainToday": 0.42
    })
}
