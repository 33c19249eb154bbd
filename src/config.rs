use anyhow::{anyhow, Result};
use std::env;

use crate::locale::Locale;

const DEFAULT_DATABASE_USER: &str = "postgres";
const DEFAULT_MONITORED_CITY: &str = "Bishkek";
const DEFAULT_WEATHER_API_URL: &str = "http://api.openweathermap.org/data/2.5";

/// Connection settings for the PostgreSQL store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// `DATABASE`
    pub name: String,
    /// `DATABASE_USER`, `postgres` unless set.
    pub user: String,
    /// `PASSWORD`
    pub password: String,
    /// `HOST`
    pub host: String,
    /// `PORT`
    pub port: u16,
}

/// Process-wide settings resolved from the environment at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// `API_KEY` for the weather provider.
    pub weather_api_key: String,
    /// `TOKEN`
    pub telegram_bot_token: String,
    pub database: DatabaseConfig,
    /// Destination for weather warnings and birthday reminders.
    pub alert_chat_id: i64,
    /// City checked for next-day weather warnings.
    pub monitored_city: String,
    pub weather_api_url: String,
    pub locale: Locale,
}

impl Config {
    /// Fails on the first required variable that is missing, blank or unparsable.
    pub fn from_env() -> Result<Self> {
        let weather_api_key = required("API_KEY")?;
        let telegram_bot_token = required("TOKEN")?;
        let database = DatabaseConfig::from_env()?;

        let alert_chat_id = required("CHAT_ID")?
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid CHAT_ID"))?;

        let monitored_city = optional("MONITORED_CITY", DEFAULT_MONITORED_CITY);
        let weather_api_url = optional("WEATHER_API_URL", DEFAULT_WEATHER_API_URL);

        let locale = optional("BOT_LOCALE", "ru")
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid BOT_LOCALE"))?;

        Ok(Config {
            weather_api_key,
            telegram_bot_token,
            database,
            alert_chat_id,
            monitored_city,
            weather_api_url,
            locale,
        })
    }
}

impl DatabaseConfig {
    /// Store settings only; the bot token and API key are not required.
    pub fn from_env() -> Result<Self> {
        let name = required("DATABASE")?;
        let password = required("PASSWORD")?;
        let host = required("HOST")?;
        let port = required("PORT")?
            .trim()
            .parse()
            .map_err(|_| anyhow!("Invalid PORT"))?;
        let user = optional("DATABASE_USER", DEFAULT_DATABASE_USER);

        Ok(DatabaseConfig {
            name,
            user,
            password,
            host,
            port,
        })
    }

    /// Connection target without the password, for logs.
    pub fn display_target(&self) -> String {
        format!("postgres://{}@{}:{}/{}", self.user, self.host, self.port, self.name)
    }
}

fn required(name: &str) -> Result<String> {
    let value = env::var(name).map_err(|_| anyhow!("{} must be set", name))?;

    if value.trim().is_empty() {
        return Err(anyhow!("{} must be set", name));
    }

    Ok(value)
}

fn optional(name: &str, default: &str) -> String {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => default.to_string(),
    }
}
