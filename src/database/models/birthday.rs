use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One registration made through `/add_birthday`.
///
/// Rows are never updated or deleted, and the same person may be registered
/// any number of times.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize, Deserialize)]
pub struct BirthdayRecord {
    pub user_id: i64,
    pub name: String,
    pub birthdate: NaiveDate,
}

impl BirthdayRecord {
    /// Inserts a registration.
    ///
    /// `birthdate` is handed to PostgreSQL as text and cast there, so whatever
    /// the `date` type accepts is stored and anything else fails with the
    /// database error.
    pub async fn create(
        pool: &sqlx::PgPool,
        user_id: i64,
        name: &str,
        birthdate: &str,
    ) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO birthdays (user_id, name, birthdate) VALUES ($1, $2, $3::date)")
            .bind(user_id)
            .bind(name)
            .bind(birthdate)
            .execute(pool)
            .await?;

        Ok(())
    }

    /// Every record whose month and day match, regardless of year.
    pub async fn find_by_month_day(
        pool: &sqlx::PgPool,
        month: u32,
        day: u32,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, BirthdayRecord>(
            "SELECT user_id, name, birthdate FROM birthdays
             WHERE EXTRACT(MONTH FROM birthdate) = $1 AND EXTRACT(DAY FROM birthdate) = $2",
        )
        .bind(month as i32)
        .bind(day as i32)
        .fetch_all(pool)
        .await
    }

    /// Every registration made by one user. Not used by the bot itself; kept for
    /// inspecting the store and for the database tests.
    pub async fn find_by_user(
        pool: &sqlx::PgPool,
        user_id: i64,
    ) -> Result<Vec<Self>, sqlx::Error> {
        sqlx::query_as::<_, BirthdayRecord>(
            "SELECT user_id, name, birthdate FROM birthdays WHERE user_id = $1",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
