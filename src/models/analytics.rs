//! Analytics rows, feedback, and the aggregate views served by `/api/analytics`.

use super::validation::{non_negative_count, optional_text, rating, MAX_COMMENT_LEN};
use crate::error::{AppError, AppResult};
use crate::scoring::{EngagementBreakdown, EngagementMetrics};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Recorded engagement counters for one event
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventAnalytics {
    pub event_id: Uuid,
    pub registrations: i32,
    pub attendees: i32,
    pub avg_time_spent_minutes: f64,
    pub event_duration_minutes: f64,
    pub interactions: i32,
    pub engagement_score: i16,
    pub updated_at: DateTime<Utc>,
}

impl EventAnalytics {
    pub fn metrics(&self) -> EngagementMetrics {
        EngagementMetrics {
            registrations: self.registrations,
            attendees: self.attendees,
            avg_time_spent_minutes: self.avg_time_spent_minutes,
            event_duration_minutes: self.event_duration_minutes,
            interactions: self.interactions,
        }
    }
}

/// Body of `PUT /api/analytics/:event_id`
#[derive(Debug, Clone, Deserialize)]
pub struct RecordMetricsRequest {
    pub registrations: i32,
    pub attendees: i32,
    #[serde(default)]
    pub avg_time_spent_minutes: f64,
    #[serde(default)]
    pub event_duration_minutes: f64,
    #[serde(default)]
    pub interactions: i32,
}

impl RecordMetricsRequest {
    pub fn validate(&self) -> AppResult<()> {
        non_negative_count("registrations", self.registrations)?;
        non_negative_count("attendees", self.attendees)?;
        non_negative_count("interactions", self.interactions)?;
        for (field, value) in [
            ("avg_time_spent_minutes", self.avg_time_spent_minutes),
            ("event_duration_minutes", self.event_duration_minutes),
        ] {
            if !value.is_finite() {
                return Err(AppError::Validation(format!("{} must be a finite number", field)));
            }
            non_negative_count(field, value)?;
        }
        Ok(())
    }

    pub fn metrics(&self) -> EngagementMetrics {
        EngagementMetrics {
            registrations: self.registrations,
            attendees: self.attendees,
            avg_time_spent_minutes: self.avg_time_spent_minutes,
            event_duration_minutes: self.event_duration_minutes,
            interactions: self.interactions,
        }
    }
}

/// Post-event rating left by an attendee
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AttendeeFeedback {
    pub id: Uuid,
    pub event_id: Uuid,
    pub guest_id: Option<Uuid>,
    pub rating: i16,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateFeedbackRequest {
    pub guest_id: Option<Uuid>,
    pub rating: i16,
    pub comment: Option<String>,
}

impl CreateFeedbackRequest {
    pub fn validate(&mut self) -> AppResult<()> {
        rating("rating", self.rating)?;
        self.comment = optional_text(self.comment.as_deref());
        if let Some(comment) = &self.comment {
            if comment.chars().count() > MAX_COMMENT_LEN {
                return Err(AppError::Validation(format!(
                    "comment must be at most {} characters",
                    MAX_COMMENT_LEN
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedbackSummary {
    pub count: i64,
    pub average_rating: Option<f64>,
    /// Number of ratings per star, index 0 = one star
    pub distribution: [i64; 5],
}

impl FeedbackSummary {
    pub fn from_ratings(ratings: &[i16]) -> Self {
        let mut distribution = [0_i64; 5];
        for r in ratings.iter().filter(|r| (1..=5).contains(*r)) {
            distribution[(*r - 1) as usize] += 1;
        }

        let count: i64 = distribution.iter().sum();
        let average_rating = if count == 0 {
            None
        } else {
            let total: i64 = distribution
                .iter()
                .enumerate()
                .map(|(i, n)| (i as i64 + 1) * n)
                .sum();
            Some(((total as f64 / count as f64) * 100.0).round() / 100.0)
        };

        Self {
            count,
            average_rating,
            distribution,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct RsvpBreakdown {
    pub invited: i64,
    pub confirmed: i64,
    pub declined: i64,
    pub checked_in: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, FromRow)]
pub struct TaskProgress {
    pub total: i64,
    pub completed: i64,
    pub overdue: i64,
}

impl TaskProgress {
    /// Completed share of all tasks, 0-100 with two decimals
    pub fn completion_rate(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        ((self.completed as f64 / self.total as f64) * 10_000.0).round() / 100.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetUsage {
    pub budget: Decimal,
    /// Agreed cost of booked vendors
    pub committed: Decimal,
    pub remaining: Decimal,
}

impl BudgetUsage {
    pub fn new(budget: Decimal, committed: Decimal) -> Self {
        Self {
            budget,
            committed,
            remaining: budget - committed,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining < Decimal::ZERO
    }
}

/// Per-event analytics report
#[derive(Debug, Clone, Serialize)]
pub struct EventReport {
    pub event_id: Uuid,
    pub metrics: Option<EventAnalytics>,
    pub engagement: EngagementBreakdown,
    pub feedback: FeedbackSummary,
    pub rsvp: RsvpBreakdown,
    pub tasks: TaskProgress,
    pub task_completion_rate: f64,
    pub budget: BudgetUsage,
    pub over_budget: bool,
}

/// Cross-event summary for the dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize, FromRow)]
pub struct DashboardSummary {
    pub total_events: i64,
    pub upcoming_events: i64,
    pub total_guests: i64,
    pub confirmed_guests: i64,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub total_budget: Decimal,
    pub committed_spend: Decimal,
    pub average_engagement: Option<f64>,
}
