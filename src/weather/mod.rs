//! Client for the OpenWeatherMap-compatible provider.

pub mod client;
pub mod types;

pub use client::WeatherClient;
pub use types::{CurrentWeather, Forecast, WarningKind, WeatherError};
