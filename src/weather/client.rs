use chrono::NaiveDate;
use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::locale::Locale;
use crate::utils::datetime::parse_forecast_date;
use crate::utils::logging::log_provider_error;
use crate::weather::types::{
    CurrentWeather, CurrentWeatherResponse, Forecast, ForecastResponse, WeatherError,
};

/// HTTP client for current conditions and the multi-day forecast.
///
/// Requests carry the city name and API key as query parameters. No retries
/// and no timeout beyond the `reqwest` defaults.
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// `base_url` is the provider's API root, e.g. `http://api.openweathermap.org/data/2.5`.
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, WeatherError> {
        let client = Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// Current conditions, or `WeatherError::Status` on any non-200 answer.
    pub async fn current_weather(&self, city: &str) -> Result<CurrentWeather, WeatherError> {
        let response = self.get("weather", city).await?;
        let body: CurrentWeatherResponse = response.json().await?;

        let condition = body
            .weather
            .into_iter()
            .next()
            .ok_or(WeatherError::MissingCondition)?;

        Ok(CurrentWeather {
            kelvin: body.main.temp,
            description: condition.description,
        })
    }

    /// Report text for `/weather`.
    ///
    /// A non-200 status becomes the locale's fixed error text; transport and
    /// decoding failures are still returned as errors.
    pub async fn weather_report(&self, city: &str, locale: Locale) -> Result<String, WeatherError> {
        match self.current_weather(city).await {
            Ok(weather) => Ok(locale.weather_report(city, weather.celsius(), &weather.description)),
            Err(WeatherError::Status(status)) => {
                log_provider_error("weather", city, &status.to_string());
                Ok(locale.weather_unavailable().to_string())
            }
            Err(e) => Err(e),
        }
    }

    /// First forecast entry falling on `date`.
    ///
    /// `Ok(None)` means the provider answered but had nothing for that date;
    /// a non-200 answer is `Err(WeatherError::Status)`.
    pub async fn forecast_for_date(
        &self,
        city: &str,
        date: NaiveDate,
    ) -> Result<Option<Forecast>, WeatherError> {
        let response = self.get("forecast", city).await?;
        let body: ForecastResponse = response.json().await?;

        let forecast = body
            .list
            .into_iter()
            .find(|entry| parse_forecast_date(&entry.dt_txt) == Some(date))
            .and_then(|entry| entry.weather.into_iter().next())
            .map(|condition| Forecast {
                category: condition.main,
                description: condition.description,
            });

        debug!("Forecast for {} on {}: {:?}", city, date, forecast);
        Ok(forecast)
    }

    async fn get(&self, endpoint: &str, city: &str) -> Result<reqwest::Response, WeatherError> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} for '{}'", url, city);

        let response = self
            .client
            .get(&url)
            .query(&[("q", city), ("appid", self.api_key.as_str())])
            .send()
            .await?;

        if response.status() != StatusCode::OK {
            return Err(WeatherError::Status(response.status()));
        }

        Ok(response)
    }
}
