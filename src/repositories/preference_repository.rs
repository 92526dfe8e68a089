use crate::error::RepositoryError;
use crate::models::UserPreference;
use sqlx::PgPool;
use uuid::Uuid;

/// Repository for per-user preferences
pub struct PreferenceRepository {
    pool: PgPool,
}

impl PreferenceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Option<UserPreference>, RepositoryError> {
        let prefs = sqlx::query_as::<_, UserPreference>(
            r#"
            SELECT user_id, theme, email_notifications, default_event_format, timezone, currency, updated_at
            FROM user_preferences
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(prefs)
    }

    /// Write the full preference row for a user
    pub async fn upsert(&self, prefs: &UserPreference) -> Result<UserPreference, RepositoryError> {
        let saved = sqlx::query_as::<_, UserPreference>(
            r#"
            INSERT INTO user_preferences (user_id, theme, email_notifications, default_event_format, timezone, currency)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (user_id) DO UPDATE
            SET theme = EXCLUDED.theme,
                email_notifications = EXCLUDED.email_notifications,
                default_event_format = EXCLUDED.default_event_format,
                timezone = EXCLUDED.timezone,
                currency = EXCLUDED.currency,
                updated_at = NOW()
            RETURNING user_id, theme, email_notifications, default_event_format, timezone, currency, updated_at
            "#,
        )
        .bind(prefs.user_id)
        .bind(&prefs.theme)
        .bind(prefs.email_notifications)
        .bind(&prefs.default_event_format)
        .bind(&prefs.timezone)
        .bind(&prefs.currency)
        .fetch_one(&self.pool)
        .await?;
        Ok(saved)
    }
}
