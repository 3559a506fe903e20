use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Celebrant, Identified, Linked};

/// Reminder lead time used when none is set.
pub const DEFAULT_REMINDER_DAYS: u32 = 3;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Past,
    Cancelled,
}

impl EventStatus {
    pub const ALL: [EventStatus; 3] = [EventStatus::Upcoming, EventStatus::Past, EventStatus::Cancelled];

    /// Wire value, also used as the select option value.
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "upcoming",
            EventStatus::Past => "past",
            EventStatus::Cancelled => "cancelled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Past => "Completed",
            EventStatus::Cancelled => "Cancelled",
        }
    }

    pub fn parse(value: &str) -> Option<EventStatus> {
        EventStatus::ALL.into_iter().find(|status| status.as_str() == value)
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReminderSettings {
    #[serde(default = "default_reminder_days")]
    pub days_before: u32,
    #[serde(default)]
    pub notes: String,
}

impl Default for ReminderSettings {
    fn default() -> Self {
        Self {
            days_before: DEFAULT_REMINDER_DAYS,
            notes: String::new(),
        }
    }
}

fn default_reminder_days() -> u32 {
    DEFAULT_REMINDER_DAYS
}

/// A dated occasion tied to a celebrant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub celebrant: Option<Linked<Celebrant>>,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reminder_settings: Option<ReminderSettings>,
}

impl Event {
    pub fn celebrant_id(&self) -> Option<&str> {
        self.celebrant.as_ref().map(Linked::id)
    }

    /// Celebrant name from the embedded object or the fetched list.
    pub fn celebrant_name<'a>(&'a self, celebrants: &'a [Celebrant]) -> Option<&'a str> {
        self.celebrant
            .as_ref()
            .and_then(|linked| linked.resolve(celebrants))
            .map(|celebrant| celebrant.name.as_str())
    }
}

impl Identified for Event {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Create/update body for an event.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub date: DateTime<Utc>,
    pub celebrant: String,
    pub status: EventStatus,
    pub reminder_settings: ReminderSettings,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct StatusUpdate {
    pub status: EventStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_with_bare_and_embedded_celebrant() {
        let celebrants: Vec<Celebrant> =
            serde_json::from_value(json!([{ "_id": "c1", "name": "Ada" }])).unwrap();

        let bare: Event = serde_json::from_value(json!({
            "_id": "e1",
            "title": "Ada turns 30",
            "date": "2030-01-01T09:00:00.000Z",
            "celebrant": "c1"
        }))
        .unwrap();
        assert_eq!(bare.status, EventStatus::Upcoming);
        assert_eq!(bare.celebrant_id(), Some("c1"));
        assert_eq!(bare.celebrant_name(&celebrants), Some("Ada"));

        let embedded: Event = serde_json::from_value(json!({
            "_id": "e2",
            "title": "Wedding",
            "date": "2030-06-01T09:00:00.000Z",
            "status": "past",
            "celebrant": { "_id": "c2", "name": "Bola" },
            "reminderSettings": { "daysBefore": 7 }
        }))
        .unwrap();
        assert_eq!(embedded.celebrant_id(), Some("c2"));
        assert_eq!(embedded.celebrant_name(&[]), Some("Bola"));
        assert_eq!(embedded.reminder_settings.unwrap().days_before, 7);
    }

    #[test]
    fn test_event_without_celebrant() {
        let event: Event = serde_json::from_value(json!({
            "_id": "e3",
            "title": "Orphan",
            "date": "2030-01-01T00:00:00Z",
            "celebrant": null
        }))
        .unwrap();
        assert_eq!(event.celebrant_id(), None);
        assert_eq!(event.celebrant_name(&[]), None);
    }

    #[test]
    fn test_status_labels_and_parse() {
        assert_eq!(EventStatus::Past.label(), "Completed");
        assert_eq!(EventStatus::parse("cancelled"), Some(EventStatus::Cancelled));
        assert_eq!(EventStatus::parse(""), None);
        assert_eq!(
            serde_json::to_value(StatusUpdate { status: EventStatus::Past }).unwrap(),
            json!({ "status": "past" })
        );
    }
}
