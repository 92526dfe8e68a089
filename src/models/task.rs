use super::validation::{optional_text, required_text, MAX_NAME_LEN};
use crate::error::AppResult;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

string_enum! {
    TaskStatus {
        Pending => "pending",
        InProgress => "in_progress",
        Completed => "completed",
    }
}

string_enum! {
    TaskPriority {
        Low => "low",
        Medium => "medium",
        High => "high",
    }
}

/// Planning task attached to an event
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Task {
    pub id: Uuid,
    pub event_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub priority: String,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// `completed_at` for a task moving to `status`: kept (or stamped with `now`)
/// while completed, cleared otherwise.
pub fn completion_timestamp(
    status: TaskStatus,
    current: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
) -> Option<DateTime<Utc>> {
    match status {
        TaskStatus::Completed => Some(current.unwrap_or(now)),
        TaskStatus::Pending | TaskStatus::InProgress => None,
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateTaskRequest {
    pub event_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
}

impl CreateTaskRequest {
    pub fn validate(&mut self) -> AppResult<()> {
        self.title = required_text("title", &self.title, MAX_NAME_LEN)?;
        self.description = optional_text(self.description.as_deref());
        self.assigned_to = optional_text(self.assigned_to.as_deref());
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTaskRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub due_date: Option<NaiveDate>,
    pub assigned_to: Option<String>,
}

impl UpdateTaskRequest {
    pub fn validate(&mut self) -> AppResult<()> {
        if let Some(title) = &self.title {
            self.title = Some(required_text("title", title, MAX_NAME_LEN)?);
        }
        self.description = optional_text(self.description.as_deref());
        self.assigned_to = optional_text(self.assigned_to.as_deref());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_completion_timestamp_sets_and_clears() {
        let now = Utc::now();
        let earlier = now - Duration::days(1);

        assert_eq!(completion_timestamp(TaskStatus::Completed, None, now), Some(now));
        assert_eq!(
            completion_timestamp(TaskStatus::Completed, Some(earlier), now),
            Some(earlier)
        );
        assert_eq!(completion_timestamp(TaskStatus::InProgress, Some(earlier), now), None);
        assert_eq!(completion_timestamp(TaskStatus::Pending, None, now), None);
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut req = CreateTaskRequest {
            event_id: Uuid::new_v4(),
            title: " ".to_string(),
            description: None,
            status: None,
            priority: None,
            due_date: None,
            assigned_to: None,
        };
        assert!(req.validate().is_err());

        let mut update = UpdateTaskRequest {
            title: Some("".to_string()),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
