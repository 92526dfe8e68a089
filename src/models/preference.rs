use super::event::EventFormat;
use crate::error::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

string_enum! {
    Theme {
        Light => "light",
        Dark => "dark",
        System => "system",
    }
}

/// Per-user settings, one row per user
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserPreference {
    pub user_id: Uuid,
    pub theme: String,
    pub email_notifications: bool,
    pub default_event_format: String,
    pub timezone: String,
    pub currency: String,
    pub updated_at: DateTime<Utc>,
}

impl UserPreference {
    /// Settings reported for a user who has never saved any
    pub fn defaults(user_id: Uuid) -> Self {
        Self {
            user_id,
            theme: Theme::System.into(),
            email_notifications: true,
            default_event_format: EventFormat::InPerson.into(),
            timezone: "UTC".to_string(),
            currency: "USD".to_string(),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePreferenceRequest {
    pub theme: Option<Theme>,
    pub email_notifications: Option<bool>,
    pub default_event_format: Option<EventFormat>,
    pub timezone: Option<String>,
    pub currency: Option<String>,
}

impl UpdatePreferenceRequest {
    pub fn validate(&mut self) -> AppResult<()> {
        if let Some(tz) = &self.timezone {
            let tz = tz.trim();
            if tz.is_empty() {
                return Err(AppError::Validation("timezone cannot be empty".to_string()));
            }
            self.timezone = Some(tz.to_string());
        }

        if let Some(currency) = &self.currency {
            let currency = currency.trim();
            if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_alphabetic()) {
                return Err(AppError::Validation(
                    "currency must be a three-letter ISO code".to_string(),
                ));
            }
            self.currency = Some(currency.to_ascii_uppercase());
        }

        Ok(())
    }

    /// Overlay this request on top of `current`
    pub fn apply(self, mut current: UserPreference) -> UserPreference {
        if let Some(theme) = self.theme {
            current.theme = theme.into();
        }
        if let Some(notify) = self.email_notifications {
            current.email_notifications = notify;
        }
        if let Some(format) = self.default_event_format {
            current.default_event_format = format.into();
        }
        if let Some(tz) = self.timezone {
            current.timezone = tz;
        }
        if let Some(currency) = self.currency {
            current.currency = currency;
        }
        current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_is_upper_cased() {
        let mut req = UpdatePreferenceRequest {
            currency: Some(" eur ".to_string()),
            ..Default::default()
        };
        req.validate().unwrap();
        assert_eq!(req.currency.as_deref(), Some("EUR"));

        let mut bad = UpdatePreferenceRequest {
            currency: Some("EURO".to_string()),
            ..Default::default()
        };
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_apply_overlays_only_given_fields() {
        let user_id = Uuid::new_v4();
        let req = UpdatePreferenceRequest {
            theme: Some(Theme::Dark),
            email_notifications: Some(false),
            ..Default::default()
        };
        let merged = req.apply(UserPreference::defaults(user_id));
        assert_eq!(merged.theme, "dark");
        assert!(!merged.email_notifications);
        assert_eq!(merged.timezone, "UTC");
        assert_eq!(merged.default_event_format, "in_person");
    }
}
