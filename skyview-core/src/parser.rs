use chrono::{DateTime, NaiveDateTime, NaiveTime, Utc};
use chrono_tz::Tz;
use tracing::debug;

use crate::{
    error::{Result, SkyViewError},
    fields::ObservationHour,
    model::{CurrentResponse, HistoryResponse, WaForecastDay, WaHour},
    record::{
        Condition, CurrentLocation, DisplayRecord, FeatureRecord, HourlySample,
        ParsedWeatherRecord,
    },
};

const HOUR_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Resolve the location's local date at `now`, plus its name and country.
pub fn parse_current(response: &CurrentResponse, now: DateTime<Utc>) -> Result<CurrentLocation> {
    let location = &response.location;
    let tz: Tz = location
        .tz_id
        .parse()
        .map_err(|_| SkyViewError::UnknownTimezone(location.tz_id.clone()))?;

    let date = now.with_timezone(&tz).date_naive();
    debug!(name = %location.name, country = %location.country, %tz, %date, "resolved location");

    Ok(CurrentLocation { date, name: location.name.clone(), country: location.country.clone() })
}

/// Parse a single-day history response into the requested record shape.
pub fn parse_history(response: &HistoryResponse, for_matrix: bool) -> Result<ParsedWeatherRecord> {
    if for_matrix {
        parse_features(response).map(ParsedWeatherRecord::Features)
    } else {
        parse_display(response).map(ParsedWeatherRecord::Display)
    }
}

pub fn parse_features(response: &HistoryResponse) -> Result<FeatureRecord> {
    let forecast_day = forecast_day(response)?;
    let day = &forecast_day.day;
    let hours = &forecast_day.hour;

    let max_gust = hours
        .iter()
        .map(|h| h.gust_kph)
        .reduce(f64::max)
        .ok_or(SkyViewError::MissingHourlyData)?;

    let times = hours.iter().map(|h| hour_of(&h.time)).collect::<Result<Vec<_>>>()?;

    Ok(FeatureRecord {
        mintemp_c: day.mintemp_c,
        maxtemp_c: day.maxtemp_c,
        totalprecip_mm: day.totalprecip_mm,
        max_gust,
        morning: sample_at(hours, &times, ObservationHour::Morning)?,
        afternoon: sample_at(hours, &times, ObservationHour::Afternoon)?,
        rain_today: day.totalprecip_mm > 0.0,
    })
}

pub fn parse_display(response: &HistoryResponse) -> Result<DisplayRecord> {
    let observation = parse_features(response)?;
    let condition = &forecast_day(response)?.day.condition;

    Ok(DisplayRecord {
        observation,
        condition: Condition { text: condition.text.clone(), icon: condition.icon.clone() },
    })
}

fn forecast_day(response: &HistoryResponse) -> Result<&WaForecastDay> {
    response.forecast.forecastday.first().ok_or(SkyViewError::MissingForecastDay)
}

fn hour_of(time: &str) -> Result<NaiveTime> {
    NaiveDateTime::parse_from_str(time, HOUR_FORMAT)
        .map(|dt| dt.time())
        .map_err(|_| SkyViewError::InvalidTimestamp(time.to_string()))
}

fn sample_at(hours: &[WaHour], times: &[NaiveTime], at: ObservationHour) -> Result<HourlySample> {
    let mut matching = hours.iter().zip(times).filter(|(_, t)| at.matches(**t)).map(|(h, _)| h);

    let (Some(hour), None) = (matching.next(), matching.next()) else {
        let found = hours.iter().zip(times).filter(|(_, t)| at.matches(**t)).count();
        return Err(SkyViewError::ObservationHour { hour: at, found });
    };

    Ok(HourlySample {
        wind_kph: hour.wind_kph,
        pressure_mb: hour.pressure_mb,
        temp_c: hour.temp_c,
        wind_dir: hour.wind_dir.clone(),
        humidity: hour.humidity,
        cloud: hour.cloud,
    })
}
