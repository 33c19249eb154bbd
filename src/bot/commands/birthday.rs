use crate::database::store::BirthdayStore;
use crate::locale::Locale;
use crate::utils::logging::log_usage_error;

/// `<name> <date>` from the text after `/add_birthday`; extra words are ignored.
pub fn parse_birthday_args(args: &str) -> Option<(&str, &str)> {
    let mut parts = args.split_whitespace();
    let name = parts.next()?;
    let birthdate = parts.next()?;
    Some((name, birthdate))
}

/// Stores the birthday and returns the reply text.
///
/// The date is not validated here; a value the store rejects surfaces as the
/// returned error.
pub async fn handle_add_birthday<S: BirthdayStore + ?Sized>(
    store: &S,
    user_id: i64,
    args: &str,
    locale: Locale,
) -> Result<String, sqlx::Error> {
    let Some((name, birthdate)) = parse_birthday_args(args) else {
        log_usage_error("add_birthday", args);
        return Ok(locale.add_birthday_usage().to_string());
    };

    store.add_birthday(user_id, name, birthdate).await?;

    Ok(locale.birthday_added(name))
}
