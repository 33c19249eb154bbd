//! # Weather & Birthday Bot
//!
//! A Telegram bot that relays weather alerts and birthday reminders to a group chat.
//!
//! ## Features
//! - `/weather <city>` replies with the current temperature and conditions
//! - `/add_birthday <name> <date>` registers a birthday
//! - On startup, warns the alert chat about tomorrow's bad weather in the monitored city
//! - On startup, reminds the alert chat about tomorrow's birthdays
//! - Persistent storage with PostgreSQL

/// Bot command handlers and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Database models, connections, and migrations
pub mod database;
/// Localized user-facing text
pub mod locale;
/// Scheduled notifications and outbound messaging
pub mod services;
/// Utility functions for dates and logging
pub mod utils;
/// Weather provider client
pub mod weather;
