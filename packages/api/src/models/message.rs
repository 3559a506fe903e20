use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Author, Identified, Linked, User};

/// A planning note attached to an event.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<String>,
    #[serde(default)]
    pub user: Option<Linked<Author>>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    pub fn author_id(&self) -> Option<&str> {
        self.user.as_ref().map(Linked::id)
    }

    pub fn is_authored_by(&self, user: &User) -> bool {
        self.author_id() == Some(user.id.as_str())
    }
}

impl Identified for Message {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MessageDraft {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_authorship_with_either_author_form() {
        let me: User =
            serde_json::from_value(json!({ "_id": "u1", "email": "me@seembe.app" })).unwrap();

        let bare: Message =
            serde_json::from_value(json!({ "_id": "m1", "user": "u1", "content": "Cake" })).unwrap();
        assert!(bare.is_authored_by(&me));

        let embedded: Message = serde_json::from_value(json!({
            "_id": "m2",
            "user": { "_id": "u2", "name": "Seun" },
            "content": "Balloons",
            "createdAt": "2030-01-01T00:00:00Z"
        }))
        .unwrap();
        assert!(!embedded.is_authored_by(&me));

        assert_eq!(bare.event_id, None);

        let anonymous: Message =
            serde_json::from_value(json!({ "_id": "m3", "content": "?" })).unwrap();
        assert_eq!(anonymous.author_id(), None);
        assert!(!anonymous.is_authored_by(&me));
    }

    #[test]
    fn test_event_id_is_read_from_camel_case() {
        let message: Message = serde_json::from_value(json!({
            "_id": "m1",
            "eventId": "e7",
            "user": "u1",
            "content": "Book the venue"
        }))
        .unwrap();
        assert_eq!(message.event_id.as_deref(), Some("e7"));

        let encoded = serde_json::to_value(&message).unwrap();
        assert_eq!(encoded["eventId"], "e7");
    }
}
