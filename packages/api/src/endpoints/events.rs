use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Event, EventDraft, EventStatus, StatusUpdate};
use crate::transport::Transport;

#[derive(Deserialize)]
struct EventList {
    #[serde(default)]
    events: Vec<Event>,
}

#[derive(Deserialize)]
struct EventEnvelope {
    event: Event,
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_events(&self) -> Result<Vec<Event>, ApiError> {
        let list: EventList = self.get("/events").await?;
        Ok(list.events)
    }

    pub async fn get_event(&self, id: &str) -> Result<Event, ApiError> {
        let envelope: EventEnvelope = self.get(&format!("/events/{id}")).await?;
        Ok(envelope.event)
    }

    pub async fn create_event(&self, draft: &EventDraft) -> Result<(), ApiError> {
        let _: IgnoredAny = self.post("/events", draft).await?;
        Ok(())
    }

    pub async fn update_event(&self, id: &str, draft: &EventDraft) -> Result<(), ApiError> {
        let _: IgnoredAny = self.put(&format!("/events/{id}"), draft).await?;
        Ok(())
    }

    /// Partial update carrying only the status.
    pub async fn update_event_status(&self, id: &str, status: EventStatus) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .put(&format!("/events/{id}"), &StatusUpdate { status })
            .await?;
        Ok(())
    }

    pub async fn delete_event(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self.delete(&format!("/events/{id}")).await?;
        Ok(())
    }
}
