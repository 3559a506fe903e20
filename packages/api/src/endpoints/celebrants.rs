use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Celebrant, CelebrantDraft};
use crate::transport::Transport;

#[derive(Deserialize)]
struct CelebrantList {
    #[serde(default)]
    celebrants: Vec<Celebrant>,
}

#[derive(Deserialize)]
struct CelebrantEnvelope {
    celebrant: Celebrant,
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_celebrants(&self) -> Result<Vec<Celebrant>, ApiError> {
        let list: CelebrantList = self.get("/celebrants").await?;
        Ok(list.celebrants)
    }

    pub async fn get_celebrant(&self, id: &str) -> Result<Celebrant, ApiError> {
        let envelope: CelebrantEnvelope = self.get(&format!("/celebrants/{id}")).await?;
        Ok(envelope.celebrant)
    }

    pub async fn create_celebrant(&self, draft: &CelebrantDraft) -> Result<(), ApiError> {
        let _: IgnoredAny = self.post("/celebrants", draft).await?;
        Ok(())
    }

    pub async fn update_celebrant(&self, id: &str, draft: &CelebrantDraft) -> Result<(), ApiError> {
        let _: IgnoredAny = self.put(&format!("/celebrants/{id}"), draft).await?;
        Ok(())
    }

    pub async fn delete_celebrant(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self.delete(&format!("/celebrants/{id}")).await?;
        Ok(())
    }
}
