use tracing::{debug, error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user_id: i64, chat_id: i64, details: Option<&str>) {
    match details {
        Some(d) => info!(
            "CMD_START: {} by user {} in chat {} - {}",
            command, user_id, chat_id, d
        ),
        None => info!("CMD_START: {} by user {} in chat {}", command, user_id, chat_id),
    }
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user_id: i64, chat_id: i64) {
    info!("CMD_SUCCESS: {} by user {} in chat {}", command, user_id, chat_id);
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, user_id: i64, chat_id: i64, error: &str) {
    error!(
        "CMD_ERROR: {} by user {} in chat {} - {}",
        command, user_id, chat_id, error
    );
}

/// Logs a command rejected for missing arguments
pub fn log_usage_error(command: &str, args: &str) {
    warn!("USAGE_ERROR: {} - not enough arguments in '{}'", command, args);
}

/// Logs database operations with consistent format
pub fn log_database_operation(operation: &str, table: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("DB_OP: {} on {} - {}", operation, table, d),
        None => debug!("DB_OP: {} on {}", operation, table),
    }
}

/// Logs database errors with consistent format
pub fn log_database_error(operation: &str, table: &str, error: &str, details: Option<&str>) {
    match details {
        Some(d) => error!("DB_ERROR: {} on {} failed: {} - {}", operation, table, error, d),
        None => error!("DB_ERROR: {} on {} failed: {}", operation, table, error),
    }
}

/// Logs a failed or rejected weather provider call
pub fn log_provider_error(endpoint: &str, city: &str, error: &str) {
    warn!("PROVIDER_ERROR: {} for '{}' - {}", endpoint, city, error);
}

/// Logs an outbound scheduled notification
pub fn log_notification_sent(kind: &str, chat_id: i64, details: &str) {
    info!("NOTIFY: {} to chat {} - {}", kind, chat_id, details);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
