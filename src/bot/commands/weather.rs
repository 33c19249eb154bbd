use crate::locale::Locale;
use crate::utils::logging::log_usage_error;
use crate::weather::{WeatherClient, WeatherError};

/// First word after `/weather`.
pub fn parse_city(args: &str) -> Option<&str> {
    args.split_whitespace().next()
}

pub async fn handle_weather(
    client: &WeatherClient,
    args: &str,
    locale: Locale,
) -> Result<String, WeatherError> {
    let Some(city) = parse_city(args) else {
        log_usage_error("weather", args);
        return Ok(locale.weather_usage().to_string());
    };

    client.weather_report(city, locale).await
}
