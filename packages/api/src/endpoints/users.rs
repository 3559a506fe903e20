use serde::de::IgnoredAny;
use serde::Deserialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{ProfileUpdate, Role, RoleUpdate, User};
use crate::transport::Transport;

#[derive(Deserialize)]
struct UserList {
    #[serde(default)]
    users: Vec<User>,
}

impl<T: Transport> ApiClient<T> {
    /// All members. Admin only on the server side.
    pub async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        let list: UserList = self.get("/users").await?;
        Ok(list.users)
    }

    pub async fn update_user_role(&self, id: &str, role: Role) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .put(&format!("/users/{id}"), &RoleUpdate { role })
            .await?;
        Ok(())
    }

    pub async fn delete_user(&self, id: &str) -> Result<(), ApiError> {
        let _: IgnoredAny = self.delete(&format!("/users/{id}")).await?;
        Ok(())
    }

    pub async fn update_me(&self, update: &ProfileUpdate) -> Result<(), ApiError> {
        let _: IgnoredAny = self.put("/users/me", update).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoints::test_support::{client, BASE};
    use crate::transport::Method;
    use crate::MockTransport;
    use serde_json::json;

    #[tokio::test]
    async fn test_admin_calls() {
        let mock = MockTransport::new();
        mock.respond(200, json!({ "users": [{ "_id": "u1", "email": "a@b.com" }] }));
        mock.respond(200, json!({}));
        mock.respond(200, json!({}));
        let api = client(&mock);

        assert_eq!(api.list_users().await.unwrap()[0].email, "a@b.com");
        api.update_user_role("u1", Role::Admin).await.unwrap();
        api.delete_user("u1").await.unwrap();

        let requests = mock.requests();
        assert_eq!(requests[1].method, Method::Put);
        assert_eq!(requests[1].url, format!("{BASE}/users/u1"));
        assert_eq!(requests[1].body.as_deref(), Some(r#"{"role":"admin"}"#));
        assert_eq!(requests[2].method, Method::Delete);
    }

    #[tokio::test]
    async fn test_update_me() {
        let mock = MockTransport::new();
        mock.respond(200, json!({ "user": { "_id": "u1", "email": "new@b.com" } }));

        let update = ProfileUpdate {
            name: "A".into(),
            email: "new@b.com".into(),
        };
        client(&mock).update_me(&update).await.unwrap();

        let request = mock.last_request().unwrap();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.url, format!("{BASE}/users/me"));
    }
}
