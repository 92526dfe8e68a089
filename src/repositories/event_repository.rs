use crate::error::RepositoryError;
use crate::models::{CreateEventRequest, Event, EventFormat, EventStatus, EventType, UpdateEventRequest};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

const EVENT_COLUMNS: &str = r#"
    id, user_id, title, description, event_type, format, status,
    event_date, end_date, location, virtual_link, budget, expected_attendees,
    created_at, updated_at
"#;

/// Repository for event data access
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    /// Create a new EventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new event owned by `user_id`
    pub async fn create(&self, user_id: Uuid, req: &CreateEventRequest) -> Result<Event, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO events (
                user_id, title, description, event_type, format, status,
                event_date, end_date, location, virtual_link, budget, expected_attendees
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {EVENT_COLUMNS}
            "#
        );

        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(user_id)
            .bind(&req.title)
            .bind(&req.description)
            .bind(req.event_type.unwrap_or(EventType::Other).as_str())
            .bind(req.format.unwrap_or(EventFormat::InPerson).as_str())
            .bind(req.status.unwrap_or(EventStatus::Planning).as_str())
            .bind(req.event_date)
            .bind(req.end_date)
            .bind(&req.location)
            .bind(&req.virtual_link)
            .bind(req.budget.unwrap_or(Decimal::ZERO))
            .bind(req.expected_attendees.unwrap_or(0))
            .fetch_one(&self.pool)
            .await?;

        Ok(event)
    }

    /// Find an event only if it belongs to `user_id`
    pub async fn find_for_user(&self, id: Uuid, user_id: Uuid) -> Result<Option<Event>, RepositoryError> {
        let sql = format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1 AND user_id = $2");
        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(event)
    }

    /// List a user's events, soonest first
    pub async fn find_by_user(
        &self,
        user_id: Uuid,
        status: Option<EventStatus>,
        upcoming_after: Option<DateTime<Utc>>,
    ) -> Result<Vec<Event>, RepositoryError> {
        let sql = format!(
            r#"
            SELECT {EVENT_COLUMNS}
            FROM events
            WHERE user_id = $1
                AND ($2::TEXT IS NULL OR status = $2)
                AND ($3::TIMESTAMPTZ IS NULL OR (event_date > $3 AND status NOT IN ('completed', 'cancelled')))
            ORDER BY event_date ASC
            "#
        );

        let events = sqlx::query_as::<_, Event>(&sql)
            .bind(user_id)
            .bind(status.map(|s| s.as_str()))
            .bind(upcoming_after)
            .fetch_all(&self.pool)
            .await?;
        Ok(events)
    }

    /// Apply a partial update; absent fields keep their stored value
    pub async fn update(&self, id: Uuid, req: &UpdateEventRequest) -> Result<Event, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE events
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                event_type = COALESCE($4, event_type),
                format = COALESCE($5, format),
                status = COALESCE($6, status),
                event_date = COALESCE($7, event_date),
                end_date = COALESCE($8, end_date),
                location = COALESCE($9, location),
                virtual_link = COALESCE($10, virtual_link),
                budget = COALESCE($11, budget),
                expected_attendees = COALESCE($12, expected_attendees),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {EVENT_COLUMNS}
            "#
        );

        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .bind(&req.title)
            .bind(&req.description)
            .bind(req.event_type.map(|v| v.as_str()))
            .bind(req.format.map(|v| v.as_str()))
            .bind(req.status.map(|v| v.as_str()))
            .bind(req.event_date)
            .bind(req.end_date)
            .bind(&req.location)
            .bind(&req.virtual_link)
            .bind(req.budget)
            .bind(req.expected_attendees)
            .fetch_one(&self.pool)
            .await?;
        Ok(event)
    }

    /// Delete an event (tasks, guests, links and analytics cascade)
    pub async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let rows_affected = sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(rows_affected > 0)
    }
}
