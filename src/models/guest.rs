use super::validation::{normalize_email, optional_text, required_text, MAX_NAME_LEN};
use crate::error::AppResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

string_enum! {
    RsvpStatus {
        Invited => "invited",
        Confirmed => "confirmed",
        Declined => "declined",
    }
}

/// Guest invited to an event. Emails are unique per event.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Guest {
    pub id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub rsvp_status: String,
    pub plus_one: bool,
    pub dietary_notes: Option<String>,
    pub checked_in_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Guest {
    pub fn is_checked_in(&self) -> bool {
        self.checked_in_at.is_some()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGuestRequest {
    pub event_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub rsvp_status: Option<RsvpStatus>,
    #[serde(default)]
    pub plus_one: bool,
    pub dietary_notes: Option<String>,
}

impl CreateGuestRequest {
    pub fn validate(&mut self) -> AppResult<()> {
        self.name = required_text("name", &self.name, MAX_NAME_LEN)?;
        self.email = normalize_email(&self.email)?;
        self.phone = optional_text(self.phone.as_deref());
        self.dietary_notes = optional_text(self.dietary_notes.as_deref());
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateGuestRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub rsvp_status: Option<RsvpStatus>,
    pub plus_one: Option<bool>,
    pub dietary_notes: Option<String>,
}

impl UpdateGuestRequest {
    pub fn validate(&mut self) -> AppResult<()> {
        if let Some(name) = &self.name {
            self.name = Some(required_text("name", name, MAX_NAME_LEN)?);
        }
        if let Some(email) = &self.email {
            self.email = Some(normalize_email(email)?);
        }
        self.phone = optional_text(self.phone.as_deref());
        self.dietary_notes = optional_text(self.dietary_notes.as_deref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_guest_normalizes_email() {
        let mut req = CreateGuestRequest {
            event_id: Uuid::new_v4(),
            name: " Grace Hopper ".to_string(),
            email: " Grace@Navy.MIL".to_string(),
            phone: Some("".to_string()),
            rsvp_status: None,
            plus_one: false,
            dietary_notes: None,
        };
        req.validate().unwrap();
        assert_eq!(req.name, "Grace Hopper");
        assert_eq!(req.email, "grace@navy.mil");
        assert_eq!(req.phone, None);
    }

    #[test]
    fn test_update_guest_rejects_bad_email() {
        let mut req = UpdateGuestRequest {
            email: Some("not-an-email".to_string()),
            ..Default::default()
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_rsvp_parsing() {
        assert_eq!("confirmed".parse::<RsvpStatus>().unwrap(), RsvpStatus::Confirmed);
        assert!("maybe".parse::<RsvpStatus>().is_err());
    }
}
