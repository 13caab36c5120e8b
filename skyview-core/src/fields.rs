//! Naming table for the observation fields.
//!
//! Every field has a provider key (as used in the feature matrix, e.g.
//! `wind_kph09AM`) and a display name (e.g. `WindSpeed9am`). Hourly fields are
//! built from a base name plus the suffix of the [`ObservationHour`] they were
//! sampled at, so the suffix convention lives only here.

use chrono::{NaiveTime, Timelike};
use std::fmt;

/// The two hours of the day the forecast model samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObservationHour {
    /// 09:00 local time.
    Morning,
    /// 15:00 local time.
    Afternoon,
}

impl ObservationHour {
    pub const fn all() -> &'static [ObservationHour] {
        &[ObservationHour::Morning, ObservationHour::Afternoon]
    }

    pub fn hour(&self) -> u32 {
        match self {
            ObservationHour::Morning => 9,
            ObservationHour::Afternoon => 15,
        }
    }

    /// True only for the exact time `HH:00:00`.
    pub fn matches(&self, time: NaiveTime) -> bool {
        time.hour() == self.hour() && time.minute() == 0 && time.second() == 0
    }

    pub fn provider_suffix(&self) -> &'static str {
        match self {
            ObservationHour::Morning => "09AM",
            ObservationHour::Afternoon => "03PM",
        }
    }

    pub fn display_suffix(&self) -> &'static str {
        match self {
            ObservationHour::Morning => "9am",
            ObservationHour::Afternoon => "3pm",
        }
    }
}

impl fmt::Display for ObservationHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:00", self.hour())
    }
}

/// Values aggregated over the whole day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyField {
    MinTemp,
    MaxTemp,
    TotalPrecip,
    MaxGust,
    RainToday,
}

/// Values read from a single hourly entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HourlyField {
    WindSpeed,
    Pressure,
    Temp,
    WindDir,
    Humidity,
    Cloud,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Daily(DailyField),
    Hourly(HourlyField, ObservationHour),
}

/// How a field is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Celsius,
    Millimetres,
    Kph,
    Hectopascal,
    Percent,
    /// Compass direction, shown verbatim.
    Direction,
    /// Rain flag; "Yes"/"No" when observed, a probability when predicted.
    RainFlag,
}

/// Column order of a feature matrix row.
pub const FEATURE_ORDER: [Field; 17] = {
    use DailyField::*;
    use HourlyField::*;
    use ObservationHour::*;
    [
        Field::Daily(MinTemp),
        Field::Daily(MaxTemp),
        Field::Daily(TotalPrecip),
        Field::Daily(MaxGust),
        Field::Hourly(WindSpeed, Morning),
        Field::Hourly(WindSpeed, Afternoon),
        Field::Hourly(Pressure, Morning),
        Field::Hourly(Pressure, Afternoon),
        Field::Hourly(Temp, Morning),
        Field::Hourly(Temp, Afternoon),
        Field::Hourly(WindDir, Morning),
        Field::Hourly(WindDir, Afternoon),
        Field::Hourly(Humidity, Morning),
        Field::Hourly(Humidity, Afternoon),
        Field::Hourly(Cloud, Morning),
        Field::Hourly(Cloud, Afternoon),
        Field::Daily(RainToday),
    ]
};

impl DailyField {
    fn provider_key(&self) -> &'static str {
        match self {
            DailyField::MinTemp => "mintemp_c",
            DailyField::MaxTemp => "maxtemp_c",
            DailyField::TotalPrecip => "totalprecip_mm",
            DailyField::MaxGust => "max_gust",
            DailyField::RainToday => "rain_today",
        }
    }

    fn display_name(&self) -> &'static str {
        match self {
            DailyField::MinTemp => "MinTemp",
            DailyField::MaxTemp => "MaxTemp",
            DailyField::TotalPrecip => "Rainfall",
            DailyField::MaxGust => "WindGustSpeed",
            DailyField::RainToday => "RainToday",
        }
    }
}

impl HourlyField {
    /// Key of the value inside a provider hourly entry.
    pub fn provider_base(&self) -> &'static str {
        match self {
            HourlyField::WindSpeed => "wind_kph",
            HourlyField::Pressure => "pressure_mb",
            HourlyField::Temp => "temp_c",
            HourlyField::WindDir => "wind_dir",
            HourlyField::Humidity => "humidity",
            HourlyField::Cloud => "cloud",
        }
    }

    fn display_base(&self) -> &'static str {
        match self {
            HourlyField::WindSpeed => "WindSpeed",
            HourlyField::Pressure => "Pressure",
            HourlyField::Temp => "Temp",
            HourlyField::WindDir => "WindDir",
            HourlyField::Humidity => "Humidity",
            HourlyField::Cloud => "Cloud",
        }
    }
}

impl Field {
    pub fn provider_key(&self) -> String {
        match self {
            Field::Daily(f) => f.provider_key().to_string(),
            Field::Hourly(f, hour) => format!("{}{}", f.provider_base(), hour.provider_suffix()),
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            Field::Daily(f) => f.display_name().to_string(),
            Field::Hourly(f, hour) => format!("{}{}", f.display_base(), hour.display_suffix()),
        }
    }

    pub fn from_provider_key(key: &str) -> Option<Field> {
        FEATURE_ORDER.iter().copied().find(|f| f.provider_key() == key)
    }

    pub fn unit(&self) -> Unit {
        match self {
            Field::Daily(DailyField::MinTemp | DailyField::MaxTemp) => Unit::Celsius,
            Field::Daily(DailyField::TotalPrecip) => Unit::Millimetres,
            Field::Daily(DailyField::MaxGust) => Unit::Kph,
            Field::Daily(DailyField::RainToday) => Unit::RainFlag,
            Field::Hourly(HourlyField::WindSpeed, _) => Unit::Kph,
            Field::Hourly(HourlyField::Pressure, _) => Unit::Hectopascal,
            Field::Hourly(HourlyField::Temp, _) => Unit::Celsius,
            Field::Hourly(HourlyField::WindDir, _) => Unit::Direction,
            Field::Hourly(HourlyField::Humidity | HourlyField::Cloud, _) => Unit::Percent,
        }
    }
}
