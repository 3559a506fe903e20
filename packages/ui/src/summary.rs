//! Dashboard figures derived from the event and celebrant lists.

use api::{Celebrant, Event};
use chrono::{DateTime, Utc};

#[derive(Clone, Debug, PartialEq)]
pub struct Spotlight {
    pub celebrant: Celebrant,
    pub events: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DashboardSummary {
    pub total_events: usize,
    pub upcoming_events: usize,
    pub past_events: usize,
    pub celebrants: usize,
    /// Earliest event not yet started.
    pub next_event: Option<Event>,
    /// All events, oldest first.
    pub timeline: Vec<Event>,
    /// Celebrant with the most events; ties go to the first listed.
    pub spotlight: Option<Spotlight>,
}

impl DashboardSummary {
    pub fn new(events: &[Event], celebrants: &[Celebrant], now: DateTime<Utc>) -> Self {
        let mut timeline = events.to_vec();
        timeline.sort_by_key(|event| event.date);

        let upcoming: Vec<&Event> = timeline.iter().filter(|event| event.date >= now).collect();
        let next_event = upcoming.first().map(|event| (*event).clone());
        let upcoming_events = upcoming.len();

        let mut spotlight: Option<Spotlight> = None;
        for celebrant in celebrants {
            let count = events
                .iter()
                .filter(|event| event.celebrant_id() == Some(celebrant.id.as_str()))
                .count();
            if count > spotlight.as_ref().map_or(0, |current| current.events) {
                spotlight = Some(Spotlight {
                    celebrant: celebrant.clone(),
                    events: count,
                });
            }
        }

        Self {
            total_events: events.len(),
            upcoming_events,
            past_events: events.len() - upcoming_events,
            celebrants: celebrants.len(),
            next_event,
            timeline,
            spotlight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    fn event(id: &str, date: &str, celebrant: Option<serde_json::Value>) -> Event {
        serde_json::from_value(json!({
            "_id": id,
            "title": id,
            "date": date,
            "celebrant": celebrant
        }))
        .unwrap()
    }

    fn celebrants() -> Vec<Celebrant> {
        serde_json::from_value(json!([
            { "_id": "c1", "name": "Ada" },
            { "_id": "c2", "name": "Bola" },
            { "_id": "c3", "name": "Chidi" }
        ]))
        .unwrap()
    }

    #[test]
    fn test_counts_next_event_and_timeline() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let events = vec![
            event("late", "2030-09-01T00:00:00Z", Some(json!("c2"))),
            event("old", "2029-05-01T00:00:00Z", Some(json!("c1"))),
            event("soon", "2030-02-01T00:00:00Z", Some(json!({ "_id": "c2", "name": "Bola" }))),
        ];

        let summary = DashboardSummary::new(&events, &celebrants(), now);

        assert_eq!(summary.total_events, 3);
        assert_eq!(summary.upcoming_events, 2);
        assert_eq!(summary.past_events, 1);
        assert_eq!(summary.celebrants, 3);
        assert_eq!(summary.next_event.map(|e| e.id), Some("soon".to_string()));
        let order: Vec<_> = summary.timeline.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(order, vec!["old", "soon", "late"]);
        let spotlight = summary.spotlight.unwrap();
        assert_eq!(spotlight.celebrant.name, "Bola");
        assert_eq!(spotlight.events, 2);
    }

    #[test]
    fn test_spotlight_tie_goes_to_first_and_zero_means_none() {
        let now = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();
        let events = vec![
            event("a", "2030-02-01T00:00:00Z", Some(json!("c2"))),
            event("b", "2030-03-01T00:00:00Z", Some(json!("c1"))),
        ];
        let summary = DashboardSummary::new(&events, &celebrants(), now);
        assert_eq!(summary.spotlight.unwrap().celebrant.id, "c1");

        let unlinked = vec![event("x", "2030-02-01T00:00:00Z", None)];
        let summary = DashboardSummary::new(&unlinked, &celebrants(), now);
        assert!(summary.spotlight.is_none());

        let empty = DashboardSummary::new(&[], &[], now);
        assert!(empty.next_event.is_none());
        assert!(empty.spotlight.is_none());
    }
}
