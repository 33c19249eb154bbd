//! # Weather & Birthday Bot Main Entry Point
//!
//! Initializes logging, loads configuration, connects to the database, sends
//! the next-day weather warning and birthday reminders once, then listens for
//! commands until terminated.

use anyhow::Result;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use weather_birthday_bot::bot::handlers::{BotContext, BotHandler};
use weather_birthday_bot::config::Config;
use weather_birthday_bot::database::connection::DatabaseManager;
use weather_birthday_bot::services::notifier::Notifier;
use weather_birthday_bot::weather::WeatherClient;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "weather_birthday_bot=debug,teloxide=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Weather & Birthday Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Database: {}, Monitored city: {}, Alert chat: {}, Locale: {:?}",
        config.database.display_target(),
        config.monitored_city,
        config.alert_chat_id,
        config.locale
    );

    // Initialize database
    info!("Initializing database connection...");
    let db = DatabaseManager::new(&config.database).await?;
    info!("Running database migrations...");
    db.run_migrations().await?;
    info!("Database initialized successfully");

    let weather = WeatherClient::new(&config.weather_api_url, &config.weather_api_key)?;

    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);

    // One-shot notifications; daily repetition comes from whoever restarts the process
    let alert_chat = ChatId(config.alert_chat_id);
    Notifier::new(&bot, &db, &weather, alert_chat, config.locale)
        .run_startup_checks(&config.monitored_city)
        .await?;

    let handler = BotHandler::new(BotContext {
        db,
        weather,
        locale: config.locale,
    });

    info!("Listening for commands");

    // A constant distribution key funnels every update through one worker,
    // so commands are handled strictly one after another.
    Dispatcher::builder(bot, handler.schema())
        .distribution_function(|_| Some(()))
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Application stopped");
    Ok(())
}
