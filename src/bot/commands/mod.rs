pub mod birthday;
pub mod help;
pub mod weather;

use teloxide::utils::command::BotCommands;

/// Commands the bot understands. Arguments arrive unsplit and are parsed by
/// each handler so that missing ones produce a usage reply instead of being
/// silently dropped by the dispatcher.
#[derive(BotCommands, Clone, Debug, PartialEq)]
#[command(rename_rule = "snake_case", description = "Available commands:")]
pub enum Command {
    #[command(description = "Register a birthday: /add_birthday <name> <date>")]
    AddBirthday(String),
    #[command(description = "Current weather: /weather <city>")]
    Weather(String),
    #[command(description = "Show the list of commands")]
    Help,
}
