use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::RequestError;

/// Outbound chat messages that are not replies, i.e. scheduled notifications.
#[async_trait]
pub trait Messenger: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), RequestError>;
}

#[async_trait]
impl Messenger for Bot {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<(), RequestError> {
        self.send_message(chat_id, text.to_string()).await?;
        Ok(())
    }
}
