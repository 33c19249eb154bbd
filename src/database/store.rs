use async_trait::async_trait;

use crate::database::{connection::DatabaseManager, models::BirthdayRecord};
use crate::utils::logging::{log_database_error, log_database_operation};

/// Birthday persistence as seen by the command handlers and the notifier.
#[async_trait]
pub trait BirthdayStore: Send + Sync {
    async fn add_birthday(
        &self,
        user_id: i64,
        name: &str,
        birthdate: &str,
    ) -> Result<(), sqlx::Error>;

    async fn birthdays_on(&self, month: u32, day: u32) -> Result<Vec<BirthdayRecord>, sqlx::Error>;
}

#[async_trait]
impl BirthdayStore for DatabaseManager {
    async fn add_birthday(
        &self,
        user_id: i64,
        name: &str,
        birthdate: &str,
    ) -> Result<(), sqlx::Error> {
        let details = format!("user {} registered '{}' ({})", user_id, name, birthdate);
        log_database_operation("INSERT", "birthdays", Some(&details));

        BirthdayRecord::create(&self.pool, user_id, name, birthdate)
            .await
            .map_err(|e| {
                log_database_error("INSERT", "birthdays", &e.to_string(), Some(&details));
                e
            })
    }

    async fn birthdays_on(&self, month: u32, day: u32) -> Result<Vec<BirthdayRecord>, sqlx::Error> {
        let details = format!("month={} day={}", month, day);
        log_database_operation("SELECT", "birthdays", Some(&details));

        BirthdayRecord::find_by_month_day(&self.pool, month, day)
            .await
            .map_err(|e| {
                log_database_error("SELECT", "birthdays", &e.to_string(), Some(&details));
                e
            })
    }
}
