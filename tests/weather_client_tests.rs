//! Integration tests for WeatherClient using wiremock.

#![allow(clippy::unwrap_used)]

mod common;

use common::{current_weather_body, date, forecast_body, forecast_entry, mount_forecast, API_KEY};
use weather_birthday_bot::locale::Locale;
use weather_birthday_bot::weather::{Forecast, WeatherClient, WeatherError};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_current(server: &MockServer, city: &str, status: u16, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", city))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_weather_report_success() {
    let mock_server = MockServer::start().await;
    mount_current(&mock_server, "Bishkek", 200, current_weather_body(300.15, "clear sky")).await;

    let client = WeatherClient::new(&mock_server.uri(), API_KEY).unwrap();
    let report = client.weather_report("Bishkek", Locale::Russian).await.unwrap();

    assert_eq!(report, "Текущая температура в Bishkek: 27 С\nОписание: clear sky");
}

#[tokio::test]
async fn test_weather_report_english() {
    let mock_server = MockServer::start().await;
    mount_current(&mock_server, "Osh", 200, current_weather_body(300.15, "clear sky")).await;

    let client = WeatherClient::new(&mock_server.uri(), API_KEY).unwrap();
    let report = client.weather_report("Osh", Locale::English).await.unwrap();

    assert!(report.contains("27"));
    assert!(report.contains("clear sky"));
    assert_eq!(report.lines().count(), 2);
}

#[tokio::test]
async fn test_weather_report_rounds_half_to_even() {
    let mock_server = MockServer::start().await;
    mount_current(&mock_server, "Bishkek", 200, current_weather_body(275.65, "light snow")).await;

    let client = WeatherClient::new(&mock_server.uri(), API_KEY).unwrap();
    let report = client.weather_report("Bishkek", Locale::Russian).await.unwrap();

    assert_eq!(report, "Текущая температура в Bishkek: 2 С\nОписание: light snow");
}

#[tokio::test]
async fn test_weather_report_not_found_returns_fixed_text() {
    let mock_server = MockServer::start().await;
    mount_current(
        &mock_server,
        "Atlantis",
        404,
        serde_json::json!({ "cod": "404", "message": "city not found" }),
    )
    .await;

    let client = WeatherClient::new(&mock_server.uri(), API_KEY).unwrap();
    let report = client.weather_report("Atlantis", Locale::Russian).await.unwrap();

    assert_eq!(report, "Ошибка получения данных о погоде");
}

#[tokio::test]
async fn test_weather_report_unauthorized_returns_fixed_text() {
    let mock_server = MockServer::start().await;
    mount_current(
        &mock_server,
        "Bishkek",
        401,
        serde_json::json!({ "cod": 401, "message": "Invalid API key" }),
    )
    .await;

    let client = WeatherClient::new(&mock_server.uri(), API_KEY).unwrap();
    let report = client.weather_report("Bishkek", Locale::English).await.unwrap();

    assert_eq!(report, Locale::English.weather_unavailable());
}

#[tokio::test]
async fn test_current_weather_status_error() {
    let mock_server = MockServer::start().await;
    mount_current(&mock_server, "Bishkek", 500, serde_json::json!({})).await;

    let client = WeatherClient::new(&mock_server.uri(), API_KEY).unwrap();
    let result = client.current_weather("Bishkek").await;

    match result {
        Err(WeatherError::Status(status)) => assert_eq!(status.as_u16(), 500),
        other => panic!("Expected status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_current_weather_without_condition() {
    let mock_server = MockServer::start().await;
    mount_current(
        &mock_server,
        "Bishkek",
        200,
        serde_json::json!({ "main": { "temp": 280.0 }, "weather": [] }),
    )
    .await;

    let client = WeatherClient::new(&mock_server.uri(), API_KEY).unwrap();
    let result = client.current_weather("Bishkek").await;

    assert!(matches!(result, Err(WeatherError::MissingCondition)));
}

#[tokio::test]
async fn test_current_weather_malformed_body_is_an_error() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    let client = WeatherClient::new(&mock_server.uri(), API_KEY).unwrap();
    let result = client.weather_report("Bishkek", Locale::Russian).await;

    assert!(matches!(result, Err(WeatherError::Http(_))));
}

#[tokio::test]
async fn test_weather_report_connection_refused_is_an_error() {
    // Nothing listens on the discard port
    let client = WeatherClient::new("http://127.0.0.1:9", API_KEY).unwrap();
    let result = client.weather_report("Bishkek", Locale::Russian).await;

    assert!(matches!(result, Err(WeatherError::Http(_))));
}

#[tokio::test]
async fn test_forecast_returns_first_entry_for_date() {
    let mock_server = MockServer::start().await;
    mount_forecast(
        &mock_server,
        "Bishkek",
        forecast_body(vec![
            forecast_entry("2024-01-01 21:00:00", "Clear", "clear sky"),
            forecast_entry("2024-01-02 00:00:00", "Snow", "Light Snow"),
            forecast_entry("2024-01-02 03:00:00", "Rain", "moderate rain"),
            forecast_entry("2024-01-03 00:00:00", "Haze", "haze"),
        ]),
    )
    .await;

    let client = WeatherClient::new(&mock_server.uri(), API_KEY).unwrap();
    let forecast = client.forecast_for_date("Bishkek", date(2024, 1, 2)).await.unwrap();

    assert_eq!(
        forecast,
        Some(Forecast {
            category: "Snow".to_string(),
            description: "Light Snow".to_string(),
        })
    );
}

#[tokio::test]
async fn test_forecast_without_matching_date() {
    let mock_server = MockServer::start().await;
    mount_forecast(
        &mock_server,
        "Bishkek",
        forecast_body(vec![
            forecast_entry("2024-01-01 21:00:00", "Rain", "light rain"),
            forecast_entry("2024-01-03 00:00:00", "Rain", "light rain"),
        ]),
    )
    .await;

    let client = WeatherClient::new(&mock_server.uri(), API_KEY).unwrap();
    let forecast = client.forecast_for_date("Bishkek", date(2024, 1, 2)).await.unwrap();

    assert_eq!(forecast, None);
}

#[tokio::test]
async fn test_forecast_empty_list() {
    let mock_server = MockServer::start().await;
    mount_forecast(&mock_server, "Bishkek", forecast_body(vec![])).await;

    let client = WeatherClient::new(&mock_server.uri(), API_KEY).unwrap();
    let forecast = client.forecast_for_date("Bishkek", date(2024, 1, 2)).await.unwrap();

    assert_eq!(forecast, None);
}

#[tokio::test]
async fn test_forecast_status_error_is_distinct_from_no_forecast() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = WeatherClient::new(&mock_server.uri(), API_KEY).unwrap();
    let result = client.forecast_for_date("Atlantis", date(2024, 1, 2)).await;

    assert!(matches!(result, Err(WeatherError::Status(_))));
}

#[tokio::test]
async fn test_base_url_trailing_slash() {
    let mock_server = MockServer::start().await;
    mount_current(&mock_server, "Bishkek", 200, current_weather_body(273.15, "fog")).await;

    let client = WeatherClient::new(&format!("{}/", mock_server.uri()), API_KEY).unwrap();
    let weather = client.current_weather("Bishkek").await.unwrap();

    assert_eq!(weather.celsius(), 0);
    assert_eq!(weather.description, "fog");
}
