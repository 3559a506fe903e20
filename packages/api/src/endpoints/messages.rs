use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Message, MessageDraft};
use crate::transport::Transport;

#[derive(Deserialize)]
struct MessageList {
    #[serde(default)]
    messages: Vec<Message>,
}

impl<T: Transport> ApiClient<T> {
    /// Notes for one event, in server order.
    pub async fn list_messages(&self, event_id: &str) -> Result<Vec<Message>, ApiError> {
        let list: MessageList = self.get(&format!("/messages/event/{event_id}")).await?;
        Ok(list.messages)
    }

    pub async fn create_message(&self, event_id: &str, content: &str) -> Result<(), ApiError> {
        let draft = MessageDraft {
            content: content.to_string(),
        };
        let _: IgnoredAny = self
            .post(&format!("/messages/event/{event_id}"), &draft)
            .await?;
        Ok(())
    }

    pub async fn update_message(&self, id: &str, content: &str) -> Result<(), ApiError> {
        let draft = MessageDraft {
            content: content.to_string(),
        };
        let _: IgnoredAny = self.put(&format!("/messages/{id}"), &draft).await?;
        Ok(())
    }

    pub async fn delete_message(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self.delete(&format!("/messages/{id}")).await?;
        Ok(())
    }
}
