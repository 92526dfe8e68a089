use crate::error::RepositoryError;
use crate::models::{CreateGuestRequest, Guest, RsvpStatus, UpdateGuestRequest};
use sqlx::PgPool;
use uuid::Uuid;

const GUEST_COLUMNS: &str = r#"
    id, event_id, name, email, phone, rsvp_status, plus_one, dietary_notes,
    checked_in_at, created_at, updated_at
"#;

/// Repository for guest data access
pub struct GuestRepository {
    pool: PgPool,
}

impl GuestRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new guest. A repeated (event, email) pair surfaces as `Duplicate`.
    pub async fn create(&self, req: &CreateGuestRequest) -> Result<Guest, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO guests (event_id, name, email, phone, rsvp_status, plus_one, dietary_notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {GUEST_COLUMNS}
            "#
        );

        let guest = sqlx::query_as::<_, Guest>(&sql)
            .bind(req.event_id)
            .bind(&req.name)
            .bind(&req.email)
            .bind(&req.phone)
            .bind(req.rsvp_status.unwrap_or(RsvpStatus::Invited).as_str())
            .bind(req.plus_one)
            .bind(&req.dietary_notes)
            .fetch_one(&self.pool)
            .await?;
        Ok(guest)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Guest>, RepositoryError> {
        let sql = format!("SELECT {GUEST_COLUMNS} FROM guests WHERE id = $1");
        let guest = sqlx::query_as::<_, Guest>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(guest)
    }

    /// Look up a guest of an event by (already normalized) email
    pub async fn find_by_email(&self, event_id: Uuid, email: &str) -> Result<Option<Guest>, RepositoryError> {
        let sql = format!("SELECT {GUEST_COLUMNS} FROM guests WHERE event_id = $1 AND email = $2");
        let guest = sqlx::query_as::<_, Guest>(&sql)
            .bind(event_id)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(guest)
    }

    pub async fn find_by_event(&self, event_id: Uuid) -> Result<Vec<Guest>, RepositoryError> {
        let sql = format!(
            "SELECT {GUEST_COLUMNS} FROM guests WHERE event_id = $1 ORDER BY name ASC, created_at ASC"
        );
        let guests = sqlx::query_as::<_, Guest>(&sql)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(guests)
    }

    pub async fn update(&self, id: Uuid, req: &UpdateGuestRequest) -> Result<Guest, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE guests
            SET name = COALESCE($2, name),
                email = COALESCE($3, email),
                phone = COALESCE($4, phone),
                rsvp_status = COALESCE($5, rsvp_status),
                plus_one = COALESCE($6, plus_one),
                dietary_notes = COALESCE($7, dietary_notes),
                updated_at = NOW()
            WHERE id = $1
            RETURNING {GUEST_COLUMNS}
            "#
        );

        let guest = sqlx::query_as::<_, Guest>(&sql)
            .bind(id)
            .bind(&req.name)
            .bind(&req.email)
            .bind(&req.phone)
            .bind(req.rsvp_status.map(|v| v.as_str()))
            .bind(req.plus_one)
            .bind(&req.dietary_notes)
            .fetch_one(&self.pool)
            .await?;
        Ok(guest)
    }

    /// Stamp the check-in time (first check-in wins) and confirm the RSVP
    pub async fn check_in(&self, id: Uuid) -> Result<Guest, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE guests
            SET checked_in_at = COALESCE(checked_in_at, NOW()),
                rsvp_status = 'confirmed',
                updated_at = NOW()
            WHERE id = $1
            RETURNING {GUEST_COLUMNS}
            "#
        );
        let guest = sqlx::query_as::<_, Guest>(&sql)
            .bind(id)
            .fetch_one(&self.pool)
            .await?;
        Ok(guest)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let rows_affected = sqlx::query("DELETE FROM guests WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }
}
