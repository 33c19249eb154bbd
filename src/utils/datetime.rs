use chrono::{Datelike, Duration, Local, NaiveDate};

/// Tomorrow's date on the host's local clock.
pub fn tomorrow() -> NaiveDate {
    next_day(Local::now().date_naive())
}

pub fn next_day(date: NaiveDate) -> NaiveDate {
    date + Duration::days(1)
}

/// Date portion of a provider timestamp such as `2024-01-02 12:00:00`.
pub fn parse_forecast_date(dt_txt: &str) -> Option<NaiveDate> {
    let date = dt_txt.split_whitespace().next()?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// `(month, day)` used for year-agnostic birthday matching.
pub fn month_day(date: NaiveDate) -> (u32, u32) {
    (date.month(), date.day())
}
