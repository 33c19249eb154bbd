//! User-facing text.
//!
//! Every string the bot sends lives here so that handlers and the notifier only
//! decide *what* to say, never *how* to phrase it.

use std::str::FromStr;

/// Language of the bot's replies and notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    Russian,
    English,
}

impl FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ru" | "russian" => Ok(Locale::Russian),
            "en" | "english" => Ok(Locale::English),
            other => Err(format!("Unsupported locale: {}", other)),
        }
    }
}

impl Locale {
    /// Two-line current conditions report.
    pub fn weather_report(self, city: &str, celsius: i64, description: &str) -> String {
        match self {
            Locale::Russian => format!(
                "Текущая температура в {}: {} С\nОписание: {}",
                city, celsius, description
            ),
            Locale::English => format!(
                "Current temperature in {}: {} C\nDescription: {}",
                city, celsius, description
            ),
        }
    }

    /// Fixed reply used whenever the provider answers with a non-200 status.
    pub fn weather_unavailable(self) -> &'static str {
        match self {
            Locale::Russian => "Ошибка получения данных о погоде",
            Locale::English => "Failed to fetch weather data",
        }
    }

    pub fn precipitation_warning(self, city: &str, description: &str) -> String {
        let description = description.to_lowercase();
        match self {
            Locale::Russian => format!(
                "Завтра в городе {} будет {}, возьмите зонты, будьте осторожны!",
                city, description
            ),
            Locale::English => format!(
                "Tomorrow in {} expect {}, bring an umbrella and be careful!",
                city, description
            ),
        }
    }

    pub fn hazard_warning(self, city: &str, description: &str) -> String {
        let description = description.to_lowercase();
        match self {
            Locale::Russian => format!(
                "Предупреждаем: завтра в городе {} ожидается {}, будьте в безопасности!",
                city, description
            ),
            Locale::English => format!(
                "Warning: tomorrow in {} expect {}, stay safe!",
                city, description
            ),
        }
    }

    pub fn birthday_reminder(self, name: &str) -> String {
        match self {
            Locale::Russian => format!("Завтра у {} будет день рождения!", name),
            Locale::English => format!("Tomorrow is {}'s birthday!", name),
        }
    }

    pub fn add_birthday_usage(self) -> &'static str {
        match self {
            Locale::Russian => {
                "Неправильный формат команды. Используйте: /add_birthday [Имя] [Дата рождения]"
            }
            Locale::English => "Invalid command format. Usage: /add_birthday [Name] [Birthdate]",
        }
    }

    pub fn birthday_added(self, name: &str) -> String {
        match self {
            Locale::Russian => format!(
                "Информация о дне рождения для {} добавлена в базу данных.",
                name
            ),
            Locale::English => format!("Birthday for {} has been saved.", name),
        }
    }

    pub fn weather_usage(self) -> &'static str {
        match self {
            Locale::Russian => "Неправильный формат команды. Используйте: /weather [Город]",
            Locale::English => "Invalid command format. Usage: /weather [City]",
        }
    }

    pub fn help(self) -> &'static str {
        match self {
            Locale::Russian => concat!(
                "Доступные команды:\n",
                "/add_birthday [Имя] [Дата рождения] - добавить день рождения\n",
                "/weather [Город] - получить информацию о погоде\n",
                "/help - показать список доступных команд и их использование\n",
                "\n",
                "Использование команд:\n",
                "/add_birthday [Имя] [Дата рождения] - добавить день рождения (например, /add_birthday John 2000-01-01)\n",
                "/weather [Город] - получить информацию о погоде (например, /weather Bishkek)"
            ),
            Locale::English => concat!(
                "Available commands:\n",
                "/add_birthday [Name] [Birthdate] - register a birthday\n",
                "/weather [City] - current weather\n",
                "/help - list the available commands and their usage\n",
                "\n",
                "Examples:\n",
                "/add_birthday [Name] [Birthdate] - register a birthday (e.g. /add_birthday John 2000-01-01)\n",
                "/weather [City] - current weather (e.g. /weather Bishkek)"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_locale_codes() {
        assert_eq!("ru".parse::<Locale>(), Ok(Locale::Russian));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::English));
        assert!("de".parse::<Locale>().is_err());
    }

    #[test]
    fn warnings_lowercase_the_description() {
        let text = Locale::English.precipitation_warning("Bishkek", "Light RAIN");
        assert!(text.contains("light rain"));

        let text = Locale::Russian.hazard_warning("Бишкек", "Дымка");
        assert!(text.contains("дымка"));
    }

    #[test]
    fn help_mentions_every_command() {
        for locale in [Locale::Russian, Locale::English] {
            let help = locale.help();
            assert!(help.contains("/add_birthday"));
            assert!(help.contains("/weather"));
            assert!(help.contains("/help"));
            assert!(help.contains("/add_birthday John 2000-01-01"));
            assert!(help.contains("/weather Bishkek"));
        }
    }
}
