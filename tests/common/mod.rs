#![allow(dead_code)]
#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::sync::Mutex;
use teloxide::types::ChatId;
use teloxide::RequestError;
use weather_birthday_bot::database::models::BirthdayRecord;
use weather_birthday_bot::database::store::BirthdayStore;
use weather_birthday_bot::services::messenger::Messenger;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Store fake that accepts ISO dates only, like a PostgreSQL `date` column.
#[derive(Default)]
pub struct InMemoryStore {
    rows: Mutex<Vec<BirthdayRecord>>,
    lookups: Mutex<usize>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<BirthdayRecord> {
        self.rows.lock().unwrap().clone()
    }

    pub fn lookups(&self) -> usize {
        *self.lookups.lock().unwrap()
    }
}

#[async_trait]
impl BirthdayStore for InMemoryStore {
    async fn add_birthday(
        &self,
        user_id: i64,
        name: &str,
        birthdate: &str,
    ) -> Result<(), sqlx::Error> {
        let birthdate = NaiveDate::parse_from_str(birthdate, "%Y-%m-%d").map_err(|_| {
            sqlx::Error::Protocol(format!("invalid input syntax for type date: \"{}\"", birthdate))
        })?;

        self.rows.lock().unwrap().push(BirthdayRecord {
            user_id,
            name: name.to_string(),
            birthdate,
        });
        Ok(())
    }

    async fn birthdays_on(&self, month: u32, day: u32) -> Result<Vec<BirthdayRecord>, sqlx::Error> {
        *self.lookups.lock().unwrap() += 1;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.birthdate.month() == month && r.birthdate.day() == day)
            .cloned()
            .collect())
    }
}

/// Messenger fake that records every outbound message.
#[derive(Default)]
pub struct RecordingMessenger {
    sent: Mutex<Vec<(ChatId, String)>>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sent(&self) -> Vec<(ChatId, String)> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), RequestError> {
        self.sent.lock().unwrap().push((chat_id, text.to_string()));
        Ok(())
    }
}

pub const API_KEY: &str = "test-api-key";

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn current_weather_body(kelvin: f64, description: &str) -> serde_json::Value {
    serde_json::json!({
        "coord": { "lon": 74.59, "lat": 42.87 },
        "weather": [{ "id": 800, "main": "Clear", "description": description, "icon": "01d" }],
        "main": { "temp": kelvin, "feels_like": kelvin, "pressure": 1013, "humidity": 40 },
        "name": "Bishkek",
        "cod": 200
    })
}

pub fn forecast_entry(dt_txt: &str, category: &str, description: &str) -> serde_json::Value {
    serde_json::json!({
        "dt": 1_704_196_800,
        "main": { "temp": 275.0 },
        "weather": [{ "id": 500, "main": category, "description": description, "icon": "10d" }],
        "dt_txt": dt_txt
    })
}

pub fn forecast_body(entries: Vec<serde_json::Value>) -> serde_json::Value {
    serde_json::json!({
        "cod": "200",
        "cnt": entries.len(),
        "list": entries,
        "city": { "name": "Bishkek" }
    })
}

pub async fn mount_forecast(server: &MockServer, city: &str, body: serde_json::Value) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("q", city))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
