use crate::error::RepositoryError;
use crate::models::{
    AttendeeFeedback, CreateFeedbackRequest, DashboardSummary, EventAnalytics,
    RecordMetricsRequest, RsvpBreakdown, TaskProgress,
};
use chrono::NaiveDate;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for engagement metrics, attendee feedback and reporting aggregates
pub struct AnalyticsRepository {
    pool: PgPool,
}

impl AnalyticsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // =========================================================================
    // Engagement metrics
    // =========================================================================

    pub async fn find_by_event(&self, event_id: Uuid) -> Result<Option<EventAnalytics>, RepositoryError> {
        let analytics = sqlx::query_as::<_, EventAnalytics>(
            r#"
            SELECT event_id, registrations, attendees, avg_time_spent_minutes,
                   event_duration_minutes, interactions, engagement_score, updated_at
            FROM event_analytics
            WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(analytics)
    }

    /// Insert or replace the metrics row for an event
    pub async fn upsert(
        &self,
        event_id: Uuid,
        req: &RecordMetricsRequest,
        engagement_score: i16,
    ) -> Result<EventAnalytics, RepositoryError> {
        let analytics = sqlx::query_as::<_, EventAnalytics>(
            r#"
            INSERT INTO event_analytics (
                event_id, registrations, attendees, avg_time_spent_minutes,
                event_duration_minutes, interactions, engagement_score
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (event_id) DO UPDATE
            SET registrations = EXCLUDED.registrations,
                attendees = EXCLUDED.attendees,
                avg_time_spent_minutes = EXCLUDED.avg_time_spent_minutes,
                event_duration_minutes = EXCLUDED.event_duration_minutes,
                interactions = EXCLUDED.interactions,
                engagement_score = EXCLUDED.engagement_score,
                updated_at = NOW()
            RETURNING event_id, registrations, attendees, avg_time_spent_minutes,
                      event_duration_minutes, interactions, engagement_score, updated_at
            "#,
        )
        .bind(event_id)
        .bind(req.registrations)
        .bind(req.attendees)
        .bind(req.avg_time_spent_minutes)
        .bind(req.event_duration_minutes)
        .bind(req.interactions)
        .bind(engagement_score)
        .fetch_one(&self.pool)
        .await?;
        Ok(analytics)
    }

    // =========================================================================
    // Feedback
    // =========================================================================

    pub async fn create_feedback(
        &self,
        event_id: Uuid,
        req: &CreateFeedbackRequest,
    ) -> Result<AttendeeFeedback, RepositoryError> {
        let feedback = sqlx::query_as::<_, AttendeeFeedback>(
            r#"
            INSERT INTO attendee_feedback (event_id, guest_id, rating, comment)
            VALUES ($1, $2, $3, $4)
            RETURNING id, event_id, guest_id, rating, comment, created_at
            "#,
        )
        .bind(event_id)
        .bind(req.guest_id)
        .bind(req.rating)
        .bind(&req.comment)
        .fetch_one(&self.pool)
        .await?;
        Ok(feedback)
    }

    pub async fn find_feedback(&self, event_id: Uuid) -> Result<Vec<AttendeeFeedback>, RepositoryError> {
        let feedback = sqlx::query_as::<_, AttendeeFeedback>(
            r#"
            SELECT id, event_id, guest_id, rating, comment, created_at
            FROM attendee_feedback
            WHERE event_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(feedback)
    }

    // =========================================================================
    // Aggregates
    // =========================================================================

    pub async fn rsvp_breakdown(&self, event_id: Uuid) -> Result<RsvpBreakdown, RepositoryError> {
        let breakdown = sqlx::query_as::<_, RsvpBreakdown>(
            r#"
            SELECT
                COUNT(*) FILTER (WHERE rsvp_status = 'invited') AS invited,
                COUNT(*) FILTER (WHERE rsvp_status = 'confirmed') AS confirmed,
                COUNT(*) FILTER (WHERE rsvp_status = 'declined') AS declined,
                COUNT(*) FILTER (WHERE checked_in_at IS NOT NULL) AS checked_in
            FROM guests
            WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(breakdown)
    }

    pub async fn task_progress(&self, event_id: Uuid, today: NaiveDate) -> Result<TaskProgress, RepositoryError> {
        let progress = sqlx::query_as::<_, TaskProgress>(
            r#"
            SELECT
                COUNT(*) AS total,
                COUNT(*) FILTER (WHERE status = 'completed') AS completed,
                COUNT(*) FILTER (WHERE status <> 'completed' AND due_date < $2) AS overdue
            FROM tasks
            WHERE event_id = $1
            "#,
        )
        .bind(event_id)
        .bind(today)
        .fetch_one(&self.pool)
        .await?;
        Ok(progress)
    }

    /// Cross-event totals for a user's dashboard
    pub async fn dashboard(&self, user_id: Uuid) -> Result<DashboardSummary, RepositoryError> {
        let summary = sqlx::query_as::<_, DashboardSummary>(
            r#"
            SELECT
                (SELECT COUNT(*) FROM events e WHERE e.user_id = $1) AS total_events,
                (SELECT COUNT(*) FROM events e
                    WHERE e.user_id = $1 AND e.event_date > NOW()
                      AND e.status NOT IN ('completed', 'cancelled')) AS upcoming_events,
                (SELECT COUNT(*) FROM guests g JOIN events e ON e.id = g.event_id
                    WHERE e.user_id = $1) AS total_guests,
                (SELECT COUNT(*) FROM guests g JOIN events e ON e.id = g.event_id
                    WHERE e.user_id = $1 AND g.rsvp_status = 'confirmed') AS confirmed_guests,
                (SELECT COUNT(*) FROM tasks t JOIN events e ON e.id = t.event_id
                    WHERE e.user_id = $1) AS total_tasks,
                (SELECT COUNT(*) FROM tasks t JOIN events e ON e.id = t.event_id
                    WHERE e.user_id = $1 AND t.status = 'completed') AS completed_tasks,
                (SELECT COALESCE(SUM(e.budget), 0) FROM events e
                    WHERE e.user_id = $1) AS total_budget,
                (SELECT COALESCE(SUM(ev.agreed_cost), 0) FROM event_vendors ev
                    JOIN events e ON e.id = ev.event_id
                    WHERE e.user_id = $1 AND ev.status = 'booked') AS committed_spend,
                (SELECT AVG(a.engagement_score)::FLOAT8 FROM event_analytics a
                    JOIN events e ON e.id = a.event_id
                    WHERE e.user_id = $1) AS average_engagement
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(summary)
    }
}
