//! Client-side filtering and ordering for the events list and message hub.

use std::cmp::Reverse;

use api::{Celebrant, Event, EventStatus, Message};

/// Shown when an event's celebrant cannot be resolved.
pub const NOT_LINKED: &str = "Not linked";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct EventFilters {
    /// Case-insensitive title substring.
    pub query: String,
    pub status: Option<EventStatus>,
    /// Celebrant id; empty matches all.
    pub celebrant: String,
}

impl EventFilters {
    pub fn matches(&self, event: &Event) -> bool {
        let query = self.query.trim().to_lowercase();
        let matches_query = query.is_empty() || event.title.to_lowercase().contains(&query);
        let matches_status = self.status.map_or(true, |status| event.status == status);
        let matches_celebrant =
            self.celebrant.is_empty() || event.celebrant_id() == Some(self.celebrant.as_str());
        matches_query && matches_status && matches_celebrant
    }

    pub fn apply(&self, events: &[Event]) -> Vec<Event> {
        events.iter().filter(|event| self.matches(event)).cloned().collect()
    }
}

pub fn celebrant_label(event: &Event, celebrants: &[Celebrant]) -> String {
    event
        .celebrant_name(celebrants)
        .unwrap_or(NOT_LINKED)
        .to_string()
}

/// Newest first; undated notes sink to the bottom.
pub fn newest_first(mut messages: Vec<Message>) -> Vec<Message> {
    messages.sort_by_key(|message| Reverse(message.created_at));
    messages
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn events() -> Vec<Event> {
        serde_json::from_value(json!([
            { "_id": "e1", "title": "Ada's Birthday", "date": "2030-01-01T00:00:00Z", "celebrant": "c1" },
            { "_id": "e2", "title": "Wedding", "date": "2030-02-01T00:00:00Z", "status": "past",
              "celebrant": { "_id": "c2", "name": "Bola" } },
            { "_id": "e3", "title": "Birthday brunch", "date": "2030-03-01T00:00:00Z", "status": "cancelled" }
        ]))
        .unwrap()
    }

    fn ids(events: &[Event]) -> Vec<&str> {
        events.iter().map(|event| event.id.as_str()).collect()
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let filters = EventFilters {
            query: "BIRTHDAY".into(),
            ..EventFilters::default()
        };
        assert_eq!(ids(&filters.apply(&events())), vec!["e1", "e3"]);
    }

    #[test]
    fn test_status_and_celebrant_filters() {
        let all = events();
        let past = EventFilters {
            status: Some(EventStatus::Past),
            ..EventFilters::default()
        };
        assert_eq!(ids(&past.apply(&all)), vec!["e2"]);

        let bola = EventFilters {
            celebrant: "c2".into(),
            ..EventFilters::default()
        };
        assert_eq!(ids(&bola.apply(&all)), vec!["e2"]);

        assert_eq!(EventFilters::default().apply(&all).len(), 3);
    }

    #[test]
    fn test_celebrant_label() {
        let all = events();
        let celebrants: Vec<Celebrant> =
            serde_json::from_value(json!([{ "_id": "c1", "name": "Ada" }])).unwrap();
        assert_eq!(celebrant_label(&all[0], &celebrants), "Ada");
        assert_eq!(celebrant_label(&all[1], &[]), "Bola");
        assert_eq!(celebrant_label(&all[2], &celebrants), NOT_LINKED);
        assert_eq!(celebrant_label(&all[0], &[]), NOT_LINKED);
    }

    #[test]
    fn test_messages_newest_first() {
        let messages: Vec<Message> = serde_json::from_value(json!([
            { "_id": "m1", "content": "a", "createdAt": "2030-01-01T00:00:00Z" },
            { "_id": "m2", "content": "b" },
            { "_id": "m3", "content": "c", "createdAt": "2030-01-02T00:00:00Z" }
        ]))
        .unwrap();

        let order: Vec<_> = newest_first(messages).into_iter().map(|m| m.id).collect();
        assert_eq!(order, vec!["m3", "m1", "m2"]);
    }
}
