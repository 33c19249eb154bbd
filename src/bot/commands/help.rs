use crate::locale::Locale;

pub fn help_text(locale: Locale) -> String {
    locale.help().to_string()
}
