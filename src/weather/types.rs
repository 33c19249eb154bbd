use serde::Deserialize;
use thiserror::Error;

const KELVIN_OFFSET: f64 = 273.15;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Weather provider returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("Weather provider response has no weather condition")]
    MissingCondition,
}

/// `GET /weather` body, reduced to the fields the bot reads.
#[derive(Debug, Deserialize)]
pub struct CurrentWeatherResponse {
    pub main: MainReadings,
    pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    /// Kelvin.
    pub temp: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Condition {
    /// Category such as `Rain` or `Clear`.
    pub main: String,
    pub description: String,
}

/// `GET /forecast` body (5 day / 3 hour).
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub list: Vec<ForecastEntry>,
}

#[derive(Debug, Deserialize)]
pub struct ForecastEntry {
    pub dt_txt: String,
    pub weather: Vec<Condition>,
}

/// Current conditions for a city.
#[derive(Debug, Clone, PartialEq)]
pub struct CurrentWeather {
    pub kelvin: f64,
    pub description: String,
}

impl CurrentWeather {
    pub fn celsius(&self) -> i64 {
        kelvin_to_celsius(self.kelvin)
    }
}

/// First forecast slot for a given date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forecast {
    pub category: String,
    pub description: String,
}

/// Which warning, if any, a forecast category calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// Rain, snow, low visibility: take an umbrella.
    Precipitation,
    /// Haze, smoke, squalls, tornadoes: stay safe.
    Hazard,
}

impl WarningKind {
    pub fn classify(category: &str) -> Option<Self> {
        match category {
            "Rain" | "Thunderstorm" | "Snow" | "Mist" | "Fog" | "Extreme" => {
                Some(WarningKind::Precipitation)
            }
            "Haze" | "Smoke" | "Squall" | "Tornado" => Some(WarningKind::Hazard),
            _ => None,
        }
    }
}

/// Rounds half to even, so 2.5 becomes 2 and -15.5 becomes -16.
pub fn kelvin_to_celsius(kelvin: f64) -> i64 {
    (kelvin - KELVIN_OFFSET).round_ties_even() as i64
}
