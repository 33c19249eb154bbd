use teloxide::prelude::*;
use tracing::warn;

use crate::bot::commands::{birthday, help, weather, Command};
use crate::bot::handlers::BotContext;
use crate::utils::logging::{log_command_error, log_command_start, log_command_success};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

pub async fn command_handler(
    bot: Bot,
    msg: Message,
    cmd: Command,
    context: BotContext,
) -> HandlerResult {
    let chat_id = msg.chat.id.0;
    let user_id = msg.from().map(|u| u.id.0 as i64);
    let name = command_name(&cmd);

    log_command_start(name, user_id.unwrap_or(0), chat_id, command_args(&cmd));

    let reply = match cmd {
        Command::Help => help::help_text(context.locale),
        Command::AddBirthday(args) => {
            let Some(user_id) = user_id else {
                warn!("add_birthday in chat {} has no sender, ignoring", chat_id);
                return Ok(());
            };
            birthday::handle_add_birthday(&context.db, user_id, &args, context.locale)
                .await
                .map_err(|e| {
                    log_command_error(name, user_id, chat_id, &e.to_string());
                    e
                })?
        }
        Command::Weather(args) => weather::handle_weather(&context.weather, &args, context.locale)
            .await
            .map_err(|e| {
                log_command_error(name, user_id.unwrap_or(0), chat_id, &e.to_string());
                e
            })?,
    };

    bot.send_message(msg.chat.id, reply)
        .reply_to_message_id(msg.id)
        .await?;

    log_command_success(name, user_id.unwrap_or(0), chat_id);
    Ok(())
}

fn command_name(cmd: &Command) -> &'static str {
    match cmd {
        Command::AddBirthday(_) => "add_birthday",
        Command::Weather(_) => "weather",
        Command::Help => "help",
    }
}

fn command_args(cmd: &Command) -> Option<&str> {
    match cmd {
        Command::AddBirthday(args) | Command::Weather(args) => Some(args.as_str()),
        Command::Help => None,
    }
}
