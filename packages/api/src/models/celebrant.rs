use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Identified;

/// Occasion types offered for key dates.
pub const KEY_DATE_KINDS: [&str; 5] = [
    "Birthday",
    "Anniversary",
    "Wedding",
    "Naming Ceremony",
    "Holiday",
];

/// A person whose occasions are tracked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Celebrant {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub relationship: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub favourite_tags: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub key_dates: Vec<KeyDate>,
}

impl Identified for Celebrant {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyDate {
    #[serde(rename = "type")]
    pub kind: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub recurring: bool,
}

/// Create/update body for a celebrant.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CelebrantDraft {
    pub name: String,
    pub relationship: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    pub favourite_tags: Vec<String>,
    pub notes: String,
    pub key_dates: Vec<KeyDate>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_celebrant_decodes_backend_record() {
        let celebrant: Celebrant = serde_json::from_value(json!({
            "_id": "c1",
            "name": "Mum",
            "relationship": "Mother",
            "favouriteTags": ["lilies", "jollof"],
            "keyDates": [
                { "type": "Birthday", "date": "1965-05-04T00:00:00.000Z", "recurring": true }
            ]
        }))
        .unwrap();

        assert_eq!(celebrant.photo_url, None);
        assert_eq!(celebrant.favourite_tags, vec!["lilies", "jollof"]);
        assert_eq!(celebrant.key_dates[0].kind, "Birthday");
        assert!(celebrant.key_dates[0].recurring);
    }

    #[test]
    fn test_draft_omits_missing_photo() {
        let draft = CelebrantDraft {
            name: "Mum".into(),
            relationship: "Mother".into(),
            photo_url: None,
            favourite_tags: vec![],
            notes: String::new(),
            key_dates: vec![],
        };
        let value = serde_json::to_value(&draft).unwrap();
        assert!(value.get("photoUrl").is_none());
        assert_eq!(value["favouriteTags"], json!([]));
        assert_eq!(value["keyDates"], json!([]));
    }
}
