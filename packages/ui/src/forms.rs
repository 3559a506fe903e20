//! Form state for the celebrant and event editors and the conversions
//! between HTML input values and API payloads.
//!
//! | Input | Format | Converted with |
//! |-------|--------|----------------|
//! | `datetime-local` | `YYYY-MM-DDTHH:MM`, browser-local time | [`to_input_datetime`] / [`from_input_datetime`] |
//! | `date` | `YYYY-MM-DD`, UTC calendar day | [`to_input_date`] / [`from_input_date`] |
//! | tags | comma separated | [`parse_tags`] |

use api::{
    ApiError, Celebrant, CelebrantDraft, Event, EventDraft, EventStatus, KeyDate, ReminderSettings,
};
use api::models::{DEFAULT_REMINDER_DAYS, KEY_DATE_KINDS};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// Upper bound for the reminder lead time input.
pub const MAX_REMINDER_DAYS: u32 = 30;

const INPUT_DATETIME: &str = "%Y-%m-%dT%H:%M";
const INPUT_DATE: &str = "%Y-%m-%d";

/// Comma-separated tags, trimmed, blanks dropped.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn to_input_datetime(value: DateTime<Utc>) -> String {
    to_input_datetime_in(value, &Local)
}

pub fn to_input_datetime_in<Tz: TimeZone>(value: DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    value.with_timezone(tz).format(INPUT_DATETIME).to_string()
}

pub fn from_input_datetime(raw: &str) -> Option<DateTime<Utc>> {
    from_input_datetime_in(raw, &Local)
}

/// Browsers may include seconds; both forms are accepted.
pub fn from_input_datetime_in<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    let naive = NaiveDateTime::parse_from_str(raw, INPUT_DATETIME)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .ok()?;
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
}

pub fn to_input_date(value: DateTime<Utc>) -> String {
    value.format(INPUT_DATE).to_string()
}

pub fn from_input_date(raw: &str) -> Option<DateTime<Utc>> {
    let date = NaiveDate::parse_from_str(raw.trim(), INPUT_DATE).ok()?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc())
}

/// Reminder lead time from the number input; unparseable text falls back
/// to the default.
pub fn reminder_days(raw: &str) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(days) => days.clamp(0, MAX_REMINDER_DAYS as i64) as u32,
        Err(_) => DEFAULT_REMINDER_DAYS,
    }
}

/// Local check before a registration request.
pub fn validate_registration(password: &str, confirm: &str) -> Result<(), ApiError> {
    if password == confirm {
        Ok(())
    } else {
        Err(ApiError::invalid("Passwords do not match"))
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct EventForm {
    pub title: String,
    pub date: String,
    pub celebrant: String,
    pub status: EventStatus,
    pub reminder_days: String,
    pub notes: String,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            title: String::new(),
            date: String::new(),
            celebrant: String::new(),
            status: EventStatus::Upcoming,
            reminder_days: DEFAULT_REMINDER_DAYS.to_string(),
            notes: String::new(),
        }
    }
}

impl EventForm {
    pub fn from_event(event: &Event) -> Self {
        let reminder = event.reminder_settings.clone().unwrap_or_default();
        Self {
            title: event.title.clone(),
            date: to_input_datetime(event.date),
            celebrant: event.celebrant_id().unwrap_or_default().to_string(),
            status: event.status,
            reminder_days: reminder.days_before.to_string(),
            notes: reminder.notes,
        }
    }

    pub fn to_draft(&self) -> Result<EventDraft, ApiError> {
        self.to_draft_in(&Local)
    }

    pub fn to_draft_in<Tz: TimeZone>(&self, tz: &Tz) -> Result<EventDraft, ApiError> {
        if self.title.trim().is_empty() {
            return Err(ApiError::invalid("Event title is required"));
        }
        let date = from_input_datetime_in(&self.date, tz)
            .ok_or_else(|| ApiError::invalid("Choose a valid date and time"))?;
        if self.celebrant.is_empty() {
            return Err(ApiError::invalid("Select a celebrant"));
        }
        Ok(EventDraft {
            title: self.title.clone(),
            date,
            celebrant: self.celebrant.clone(),
            status: self.status,
            reminder_settings: ReminderSettings {
                days_before: reminder_days(&self.reminder_days),
                notes: self.notes.clone(),
            },
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyDateRow {
    pub kind: String,
    pub date: String,
    pub recurring: bool,
}

impl Default for KeyDateRow {
    fn default() -> Self {
        Self {
            kind: KEY_DATE_KINDS[0].to_string(),
            date: String::new(),
            recurring: true,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CelebrantForm {
    pub name: String,
    pub relationship: String,
    pub photo_url: String,
    pub tags: String,
    pub notes: String,
    pub key_dates: Vec<KeyDateRow>,
}

impl Default for CelebrantForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            relationship: String::new(),
            photo_url: String::new(),
            tags: String::new(),
            notes: String::new(),
            key_dates: vec![KeyDateRow::default()],
        }
    }
}

impl CelebrantForm {
    pub fn from_celebrant(celebrant: &Celebrant) -> Self {
        let mut key_dates: Vec<KeyDateRow> = celebrant
            .key_dates
            .iter()
            .map(|key_date| KeyDateRow {
                kind: key_date.kind.clone(),
                date: to_input_date(key_date.date),
                recurring: key_date.recurring,
            })
            .collect();
        if key_dates.is_empty() {
            key_dates.push(KeyDateRow::default());
        }
        Self {
            name: celebrant.name.clone(),
            relationship: celebrant.relationship.clone(),
            photo_url: celebrant.photo_url.clone().unwrap_or_default(),
            tags: celebrant.favourite_tags.join(", "),
            notes: celebrant.notes.clone(),
            key_dates,
        }
    }

    pub fn add_key_date(&mut self) {
        self.key_dates.push(KeyDateRow::default());
    }

    /// Removes a row, always leaving at least one.
    pub fn remove_key_date(&mut self, index: usize) {
        if self.key_dates.len() > 1 && index < self.key_dates.len() {
            self.key_dates.remove(index);
        }
    }

    pub fn to_draft(&self) -> Result<CelebrantDraft, ApiError> {
        if self.name.trim().is_empty() {
            return Err(ApiError::invalid("Name is required"));
        }
        let photo_url = Some(self.photo_url.trim())
            .filter(|url| !url.is_empty())
            .map(str::to_string);
        let key_dates = self
            .key_dates
            .iter()
            .filter_map(|row| {
                from_input_date(&row.date).map(|date| KeyDate {
                    kind: row.kind.clone(),
                    date,
                    recurring: row.recurring,
                })
            })
            .collect();
        Ok(CelebrantDraft {
            name: self.name.clone(),
            relationship: self.relationship.clone(),
            photo_url,
            favourite_tags: parse_tags(&self.tags),
            notes: self.notes.clone(),
            key_dates,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;
    use serde_json::json;

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" cake, , flowers ,jazz,"), vec!["cake", "flowers", "jazz"]);
        assert!(parse_tags("").is_empty());
        assert!(parse_tags(" , ").is_empty());
    }

    #[test]
    fn test_datetime_input_round_trip_in_lagos() {
        let lagos = FixedOffset::east_opt(3600).unwrap();
        let utc = from_input_datetime_in("2030-05-04T18:30", &lagos).unwrap();
        assert_eq!(utc, Utc.with_ymd_and_hms(2030, 5, 4, 17, 30, 0).unwrap());
        assert_eq!(to_input_datetime_in(utc, &lagos), "2030-05-04T18:30");
        assert!(from_input_datetime_in("2030-05-04T18:30:15", &lagos).is_some());
        assert_eq!(from_input_datetime_in("", &lagos), None);
    }

    #[test]
    fn test_date_input_is_utc_midnight() {
        let date = from_input_date("1965-05-04").unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(1965, 5, 4, 0, 0, 0).unwrap());
        assert_eq!(to_input_date(date), "1965-05-04");
        assert_eq!(from_input_date("04/05/1965"), None);
    }

    #[test]
    fn test_reminder_days_clamped() {
        assert_eq!(reminder_days("7"), 7);
        assert_eq!(reminder_days("45"), MAX_REMINDER_DAYS);
        assert_eq!(reminder_days("-2"), 0);
        assert_eq!(reminder_days(""), DEFAULT_REMINDER_DAYS);
    }

    #[test]
    fn test_password_confirmation() {
        assert!(validate_registration("secret", "secret").is_ok());
        let err = validate_registration("secret", "secrte").unwrap_err();
        assert_eq!(err.message(), "Passwords do not match");
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_event_form_builds_draft() {
        let form = EventForm {
            title: "Mum's 60th".into(),
            date: "2030-05-04T18:30".into(),
            celebrant: "c1".into(),
            reminder_days: "5".into(),
            notes: "Order cake".into(),
            ..EventForm::default()
        };

        let draft = form.to_draft_in(&Utc).unwrap();

        assert_eq!(draft.date, Utc.with_ymd_and_hms(2030, 5, 4, 18, 30, 0).unwrap());
        assert_eq!(draft.status, EventStatus::Upcoming);
        assert_eq!(draft.reminder_settings.days_before, 5);
        assert_eq!(draft.reminder_settings.notes, "Order cake");
    }

    #[test]
    fn test_event_form_rejects_missing_fields() {
        let form = EventForm {
            title: "Party".into(),
            ..EventForm::default()
        };
        assert_eq!(
            form.to_draft_in(&Utc).unwrap_err().message(),
            "Choose a valid date and time"
        );

        let form = EventForm {
            title: "Party".into(),
            date: "2030-01-01T10:00".into(),
            ..EventForm::default()
        };
        assert_eq!(form.to_draft_in(&Utc).unwrap_err().message(), "Select a celebrant");
    }

    #[test]
    fn test_event_form_from_event_with_embedded_celebrant() {
        let event: Event = serde_json::from_value(json!({
            "_id": "e1",
            "title": "Wedding",
            "date": "2030-06-01T09:00:00Z",
            "status": "cancelled",
            "celebrant": { "_id": "c2", "name": "Bola" }
        }))
        .unwrap();

        let form = EventForm::from_event(&event);

        assert_eq!(form.celebrant, "c2");
        assert_eq!(form.status, EventStatus::Cancelled);
        assert_eq!(form.reminder_days, "3");
    }

    #[test]
    fn test_celebrant_form_drops_undated_rows_and_blank_photo() {
        let mut form = CelebrantForm {
            name: "Mum".into(),
            relationship: "Mother".into(),
            photo_url: "  ".into(),
            tags: "lilies, jollof".into(),
            ..CelebrantForm::default()
        };
        form.key_dates[0].date = "1965-05-04".into();
        form.add_key_date();
        form.key_dates[1].kind = "Anniversary".into();

        let draft = form.to_draft().unwrap();

        assert_eq!(draft.photo_url, None);
        assert_eq!(draft.favourite_tags, vec!["lilies", "jollof"]);
        assert_eq!(draft.key_dates.len(), 1);
        assert_eq!(draft.key_dates[0].kind, "Birthday");
        assert!(draft.key_dates[0].recurring);
    }

    #[test]
    fn test_celebrant_form_keeps_one_row() {
        let mut form = CelebrantForm::default();
        form.remove_key_date(0);
        assert_eq!(form.key_dates.len(), 1);

        form.add_key_date();
        form.remove_key_date(0);
        assert_eq!(form.key_dates.len(), 1);
        form.remove_key_date(5);
        assert_eq!(form.key_dates.len(), 1);
    }

    #[test]
    fn test_celebrant_form_from_celebrant() {
        let celebrant: Celebrant = serde_json::from_value(json!({
            "_id": "c1",
            "name": "Mum",
            "relationship": "Mother",
            "favouriteTags": ["lilies", "jollof"],
            "keyDates": []
        }))
        .unwrap();

        let form = CelebrantForm::from_celebrant(&celebrant);

        assert_eq!(form.tags, "lilies, jollof");
        assert_eq!(form.key_dates, vec![KeyDateRow::default()]);
    }
}
