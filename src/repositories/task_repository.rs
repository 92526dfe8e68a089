use crate::error::RepositoryError;
use crate::models::{CreateTaskRequest, Task, TaskPriority, TaskStatus, UpdateTaskRequest};
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

const TASK_COLUMNS: &str = r#"
    id, event_id, title, description, status, priority, due_date, assigned_to,
    completed_at, created_at, updated_at
"#;

/// Repository for task data access
pub struct TaskRepository {
    pool: PgPool,
}

impl TaskRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new task
    pub async fn create(
        &self,
        req: &CreateTaskRequest,
        completed_at: Option<DateTime<Utc>>,
    ) -> Result<Task, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO tasks (event_id, title, description, status, priority, due_date, assigned_to, completed_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING {TASK_COLUMNS}
            "#
        );

        let task = sqlx::query_as::<_, Task>(&sql)
            .bind(req.event_id)
            .bind(&req.title)
            .bind(&req.description)
            .bind(req.status.unwrap_or(TaskStatus::Pending).as_str())
            .bind(req.priority.unwrap_or(TaskPriority::Medium).as_str())
            .bind(req.due_date)
            .bind(&req.assigned_to)
            .bind(completed_at)
            .fetch_one(&self.pool)
            .await?;
        Ok(task)
    }

    /// Insert several pending tasks for one event in a single transaction
    pub async fn create_many(
        &self,
        event_id: Uuid,
        titles: &[String],
        priority: TaskPriority,
    ) -> Result<Vec<Task>, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO tasks (event_id, title, priority)
            VALUES ($1, $2, $3)
            RETURNING {TASK_COLUMNS}
            "#
        );

        let mut tx = self.pool.begin().await?;
        let mut tasks = Vec::with_capacity(titles.len());
        for title in titles {
            let task = sqlx::query_as::<_, Task>(&sql)
                .bind(event_id)
                .bind(title)
                .bind(priority.as_str())
                .fetch_one(&mut *tx)
                .await?;
            tasks.push(task);
        }
        tx.commit().await?;

        Ok(tasks)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Task>, RepositoryError> {
        let sql = format!("SELECT {TASK_COLUMNS} FROM tasks WHERE id = $1");
        let task = sqlx::query_as::<_, Task>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(task)
    }

    /// Tasks for an event, earliest due first, undated last
    pub async fn find_by_event(&self, event_id: Uuid) -> Result<Vec<Task>, RepositoryError> {
        let sql = format!(
            r#"
            SELECT {TASK_COLUMNS}
            FROM tasks
            WHERE event_id = $1
            ORDER BY due_date ASC NULLS LAST, created_at ASC
            "#
        );
        let tasks = sqlx::query_as::<_, Task>(&sql)
            .bind(event_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(tasks)
    }

    /// Apply a partial update. `completed_at` follows the resulting status: kept or stamped when
    /// completed, cleared otherwise.
    pub async fn update(
        &self,
        id: Uuid,
        req: &UpdateTaskRequest,
    ) -> Result<Task, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE tasks
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                status = COALESCE($4, status),
                priority = COALESCE($5, priority),
                due_date = COALESCE($6, due_date),
                assigned_to = COALESCE($7, assigned_to),
                completed_at = CASE
                    WHEN COALESCE($4, status) = 'completed' THEN COALESCE(completed_at, NOW())
                END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {TASK_COLUMNS}
            "#
        );

        let task = sqlx::query_as::<_, Task>(&sql)
            .bind(id)
            .bind(&req.title)
            .bind(&req.description)
            .bind(req.status.map(|v| v.as_str()))
            .bind(req.priority.map(|v| v.as_str()))
            .bind(req.due_date)
            .bind(&req.assigned_to)
            .fetch_one(&self.pool)
            .await?;
        Ok(task)
    }

    pub async fn delete(&self, id: Uuid) -> Result<bool, RepositoryError> {
        let rows_affected = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?
            .rows_affected();
        Ok(rows_affected > 0)
    }
}
