use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Credentials, Registration, User};
use crate::transport::Transport;

/// Auth replies carry the user either bare or under `user`.
#[derive(Deserialize)]
#[serde(untagged)]
enum UserPayload {
    Wrapped { user: User },
    Bare(User),
}

impl From<UserPayload> for User {
    fn from(payload: UserPayload) -> Self {
        match payload {
            UserPayload::Wrapped { user } | UserPayload::Bare(user) => user,
        }
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn login(&self, credentials: &Credentials) -> Result<User, ApiError> {
        let payload: UserPayload = self.post("/auth/login", credentials).await?;
        Ok(payload.into())
    }

    pub async fn register(&self, registration: &Registration) -> Result<User, ApiError> {
        let payload: UserPayload = self.post("/auth/register", registration).await?;
        Ok(payload.into())
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        let _: IgnoredAny = self.get("/auth/logout").await?;
        Ok(())
    }

    /// The user behind the current session cookie.
    pub async fn profile(&self) -> Result<User, ApiError> {
        let payload: UserPayload = self.get("/auth/profile").await?;
        Ok(payload.into())
    }
}
