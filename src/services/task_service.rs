use super::event_service::require_owned_event;
use crate::error::{AppError, AppResult};
use crate::models::task::completion_timestamp;
use crate::models::{CreateTaskRequest, Task, TaskStatus, UpdateTaskRequest};
use crate::repositories::{EventRepository, TaskRepository};
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Service for managing event tasks
pub struct TaskService {
    task_repo: Arc<TaskRepository>,
    event_repo: Arc<EventRepository>,
}

impl TaskService {
    pub fn new(task_repo: Arc<TaskRepository>, event_repo: Arc<EventRepository>) -> Self {
        Self {
            task_repo,
            event_repo,
        }
    }

    /// Load a task whose event belongs to `user_id`
    async fn owned_task(&self, user_id: Uuid, task_id: Uuid) -> AppResult<Task> {
        let task = self
            .task_repo
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Task not found".into()))?;

        match self.event_repo.find_for_user(task.event_id, user_id).await? {
            Some(_) => Ok(task),
            None => Err(AppError::NotFound("Task not found".into())),
        }
    }

    pub async fn list_tasks(&self, user_id: Uuid, event_id: Uuid) -> AppResult<Vec<Task>> {
        require_owned_event(&self.event_repo, event_id, user_id).await?;
        Ok(self.task_repo.find_by_event(event_id).await?)
    }

    pub async fn create_task(&self, user_id: Uuid, mut req: CreateTaskRequest) -> AppResult<Task> {
        req.validate()?;
        require_owned_event(&self.event_repo, req.event_id, user_id).await?;

        let status = req.status.unwrap_or(TaskStatus::Pending);
        let completed_at = completion_timestamp(status, None, Utc::now());

        let task = self.task_repo.create(&req, completed_at).await?;
        info!("Created task {} for event {}", task.id, task.event_id);
        Ok(task)
    }

    pub async fn get_task(&self, user_id: Uuid, task_id: Uuid) -> AppResult<Task> {
        self.owned_task(user_id, task_id).await
    }

    /// Update a task; moving into or out of `completed` stamps or clears `completed_at`
    /// in the same statement that writes the status
    pub async fn update_task(
        &self,
        user_id: Uuid,
        task_id: Uuid,
        mut req: UpdateTaskRequest,
    ) -> AppResult<Task> {
        req.validate()?;
        self.owned_task(user_id, task_id).await?;

        let task = self.task_repo.update(task_id, &req).await?;
        info!("Updated task {} (status={})", task.id, task.status);
        Ok(task)
    }

    pub async fn delete_task(&self, user_id: Uuid, task_id: Uuid) -> AppResult<()> {
        self.owned_task(user_id, task_id).await?;
        if !self.task_repo.delete(task_id).await? {
            return Err(AppError::NotFound("Task not found".into()));
        }
        info!("Deleted task {}", task_id);
        Ok(())
    }
}
