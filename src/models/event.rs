use super::validation::{non_negative_amount, non_negative_count, optional_text, required_text, MAX_NAME_LEN};
use crate::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

string_enum! {
    /// How attendees take part in an event
    EventFormat {
        InPerson => "in_person",
        Virtual => "virtual",
        Hybrid => "hybrid",
    }
}

string_enum! {
    /// Planning lifecycle of an event
    EventStatus {
        Planning => "planning",
        Confirmed => "confirmed",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

string_enum! {
    EventType {
        Conference => "conference",
        Webinar => "webinar",
        Workshop => "workshop",
        Meetup => "meetup",
        Party => "party",
        Wedding => "wedding",
        Other => "other",
    }
}

/// Event model representing a planned occurrence owned by a user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub event_type: String, // Stored as TEXT, use EventType enum for type safety
    pub format: String,     // Stored as TEXT, use EventFormat enum for type safety
    pub status: String,     // Stored as TEXT, use EventStatus enum for type safety
    pub event_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub virtual_link: Option<String>,
    pub budget: Decimal,
    pub expected_attendees: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Reject an end date that precedes the start date
pub fn check_schedule(event_date: DateTime<Utc>, end_date: Option<DateTime<Utc>>) -> AppResult<()> {
    match end_date {
        Some(end) if end < event_date => Err(AppError::Validation(
            "end_date cannot be before event_date".to_string(),
        )),
        _ => Ok(()),
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub event_type: Option<EventType>,
    pub format: Option<EventFormat>,
    pub status: Option<EventStatus>,
    pub event_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub virtual_link: Option<String>,
    pub budget: Option<Decimal>,
    pub expected_attendees: Option<i32>,
}

impl CreateEventRequest {
    /// Validate and normalise the request in place
    pub fn validate(&mut self) -> AppResult<()> {
        self.title = required_text("title", &self.title, MAX_NAME_LEN)?;
        self.description = optional_text(self.description.as_deref());
        self.location = optional_text(self.location.as_deref());
        self.virtual_link = optional_text(self.virtual_link.as_deref());

        if let Some(budget) = self.budget {
            non_negative_amount("budget", budget)?;
        }
        if let Some(expected) = self.expected_attendees {
            non_negative_count("expected_attendees", expected)?;
        }
        check_schedule(self.event_date, self.end_date)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateEventRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub event_type: Option<EventType>,
    pub format: Option<EventFormat>,
    pub status: Option<EventStatus>,
    pub event_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub virtual_link: Option<String>,
    pub budget: Option<Decimal>,
    pub expected_attendees: Option<i32>,
}

impl UpdateEventRequest {
    /// Field checks that do not depend on the stored row
    pub fn validate(&mut self) -> AppResult<()> {
        if let Some(title) = &self.title {
            self.title = Some(required_text("title", title, MAX_NAME_LEN)?);
        }
        // Blank text leaves the stored value untouched
        self.description = optional_text(self.description.as_deref());
        self.location = optional_text(self.location.as_deref());
        self.virtual_link = optional_text(self.virtual_link.as_deref());

        if let Some(budget) = self.budget {
            non_negative_amount("budget", budget)?;
        }
        if let Some(expected) = self.expected_attendees {
            non_negative_count("expected_attendees", expected)?;
        }
        Ok(())
    }
}

/// Query string for `GET /api/events`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventListQuery {
    pub status: Option<EventStatus>,
    #[serde(default)]
    pub upcoming: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_enum_round_trip_strings() {
        assert_eq!("in_person".parse::<EventFormat>().unwrap(), EventFormat::InPerson);
        assert_eq!(EventFormat::Hybrid.as_str(), "hybrid");
        assert_eq!("Cancelled".parse::<EventStatus>().unwrap(), EventStatus::Cancelled);
        assert!("someday".parse::<EventStatus>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case_values() {
        let json = serde_json::to_string(&EventFormat::InPerson).unwrap();
        assert_eq!(json, "\"in_person\"");
        let parsed: EventType = serde_json::from_str("\"webinar\"").unwrap();
        assert_eq!(parsed, EventType::Webinar);
    }

    #[test]
    fn test_create_request_validation() {
        let start = Utc::now();
        let mut req = CreateEventRequest {
            title: "  Summit ".to_string(),
            description: Some("   ".to_string()),
            event_type: None,
            format: Some(EventFormat::Virtual),
            status: None,
            event_date: start,
            end_date: Some(start + Duration::hours(2)),
            location: None,
            virtual_link: Some("https://meet.example.com/summit".to_string()),
            budget: Some(Decimal::new(1000, 0)),
            expected_attendees: Some(40),
        };
        req.validate().unwrap();
        assert_eq!(req.title, "Summit");
        assert_eq!(req.description, None);

        req.end_date = Some(start - Duration::hours(1));
        assert!(req.validate().is_err());

        req.end_date = None;
        req.budget = Some(Decimal::new(-1, 0));
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_drops_blank_text() {
        let mut req = UpdateEventRequest {
            description: Some("   ".to_string()),
            location: Some("  Porto  ".to_string()),
            virtual_link: Some("\t".to_string()),
            ..Default::default()
        };
        req.validate().unwrap();
        assert_eq!(req.description, None);
        assert_eq!(req.location.as_deref(), Some("Porto"));
        assert_eq!(req.virtual_link, None);
    }
}
