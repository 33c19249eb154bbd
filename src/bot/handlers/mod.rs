pub mod message;

use teloxide::{dispatching::UpdateHandler, prelude::*};

use crate::bot::commands::Command;
use crate::database::connection::DatabaseManager;
use crate::locale::Locale;
use crate::weather::WeatherClient;

/// Dependencies shared by every command handler, built once in `main`.
#[derive(Clone)]
pub struct BotContext {
    pub db: DatabaseManager,
    pub weather: WeatherClient,
    pub locale: Locale,
}

pub struct BotHandler {
    pub context: BotContext,
}

impl BotHandler {
    pub fn new(context: BotContext) -> Self {
        Self { context }
    }

    pub fn schema(&self) -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
        let context = self.context.clone();

        Update::filter_message()
            .filter_command::<Command>()
            .endpoint(move |bot: Bot, msg: Message, cmd: Command| {
                let context = context.clone();
                async move { message::command_handler(bot, msg, cmd, context).await }
            })
    }
}
