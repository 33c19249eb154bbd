use anyhow::Result;
use chrono::NaiveDate;
use teloxide::types::ChatId;

use crate::database::store::BirthdayStore;
use crate::locale::Locale;
use crate::services::messenger::Messenger;
use crate::utils::datetime::{month_day, tomorrow};
use crate::utils::logging::{log_notification_sent, log_provider_error, log_system_event};
use crate::weather::{WarningKind, WeatherClient, WeatherError};

/// Pushes next-day weather warnings and birthday reminders to the alert chat.
///
/// Runs once per process start; repeating it daily is left to whatever
/// launches the process.
pub struct Notifier<'a, M: Messenger + ?Sized, S: BirthdayStore + ?Sized> {
    messenger: &'a M,
    store: &'a S,
    weather: &'a WeatherClient,
    alert_chat_id: ChatId,
    locale: Locale,
}

impl<'a, M: Messenger + ?Sized, S: BirthdayStore + ?Sized> Notifier<'a, M, S> {
    pub fn new(
        messenger: &'a M,
        store: &'a S,
        weather: &'a WeatherClient,
        alert_chat_id: ChatId,
        locale: Locale,
    ) -> Self {
        Self {
            messenger,
            store,
            weather,
            alert_chat_id,
            locale,
        }
    }

    /// Weather warning for `city`, then birthday reminders, both for tomorrow.
    pub async fn run_startup_checks(&self, city: &str) -> Result<()> {
        let date = tomorrow();
        log_system_event("Running startup checks", Some(&format!("city={} date={}", city, date)));

        let warnings = self.send_weather_warning(city, date).await?;
        let reminders = self.send_birthday_reminders(date).await?;

        log_system_event(
            "Startup checks finished",
            Some(&format!("{} weather warning(s), {} birthday reminder(s)", warnings, reminders)),
        );
        Ok(())
    }

    /// Sends at most one warning about `city`'s forecast for `date`.
    ///
    /// Returns the number of messages sent. A provider that answers with a
    /// non-200 status is treated like "no forecast"; transport failures are
    /// returned.
    pub async fn send_weather_warning(&self, city: &str, date: NaiveDate) -> Result<usize> {
        let forecast = match self.weather.forecast_for_date(city, date).await {
            Ok(forecast) => forecast,
            Err(WeatherError::Status(status)) => {
                log_provider_error("forecast", city, &status.to_string());
                None
            }
            Err(e) => return Err(e.into()),
        };

        let Some(forecast) = forecast else {
            log_system_event("No forecast available", Some(&format!("{} on {}", city, date)));
            return Ok(0);
        };

        let text = match WarningKind::classify(&forecast.category) {
            Some(WarningKind::Precipitation) => {
                self.locale.precipitation_warning(city, &forecast.description)
            }
            Some(WarningKind::Hazard) => self.locale.hazard_warning(city, &forecast.description),
            None => return Ok(0),
        };

        self.messenger.send_text(self.alert_chat_id, &text).await?;
        log_notification_sent("weather_warning", self.alert_chat_id.0, &forecast.category);
        Ok(1)
    }

    /// One reminder per stored birthday falling on `date`'s month and day.
    pub async fn send_birthday_reminders(&self, date: NaiveDate) -> Result<usize> {
        let (month, day) = month_day(date);
        let records = self.store.birthdays_on(month, day).await?;

        for record in &records {
            let text = self.locale.birthday_reminder(&record.name);
            self.messenger.send_text(self.alert_chat_id, &text).await?;
            log_notification_sent(
                "birthday_reminder",
                self.alert_chat_id.0,
                &format!("'{}' registered by user {}", record.name, record.user_id),
            );
        }

        Ok(records.len())
    }
}
