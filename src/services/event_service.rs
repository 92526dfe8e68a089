use crate::error::{AppError, AppResult};
use crate::models::event::check_schedule;
use crate::models::{CreateEventRequest, Event, EventListQuery, UpdateEventRequest};
use crate::repositories::EventRepository;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Load an event owned by `user_id`, or 404 (other users' events are not revealed)
pub async fn require_owned_event(
    event_repo: &EventRepository,
    event_id: Uuid,
    user_id: Uuid,
) -> AppResult<Event> {
    event_repo
        .find_for_user(event_id, user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("Event not found".into()))
}

/// Service for managing events
pub struct EventService {
    event_repo: Arc<EventRepository>,
}

impl EventService {
    pub fn new(event_repo: Arc<EventRepository>) -> Self {
        Self { event_repo }
    }

    /// List the caller's events
    pub async fn list_events(&self, user_id: Uuid, query: &EventListQuery) -> AppResult<Vec<Event>> {
        let upcoming_after = query.upcoming.then(chrono::Utc::now);
        let events = self
            .event_repo
            .find_by_user(user_id, query.status, upcoming_after)
            .await?;
        Ok(events)
    }

    /// Create a new event
    pub async fn create_event(&self, user_id: Uuid, mut req: CreateEventRequest) -> AppResult<Event> {
        req.validate()?;
        info!("Creating event: user={}, title={}", user_id, req.title);

        let event = self.event_repo.create(user_id, &req).await?;

        info!("Created event {} ({})", event.title, event.id);
        Ok(event)
    }

    pub async fn get_event(&self, user_id: Uuid, event_id: Uuid) -> AppResult<Event> {
        require_owned_event(&self.event_repo, event_id, user_id).await
    }

    /// Update an event, re-checking the schedule against the stored dates
    pub async fn update_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        mut req: UpdateEventRequest,
    ) -> AppResult<Event> {
        req.validate()?;
        let current = require_owned_event(&self.event_repo, event_id, user_id).await?;

        let event_date = req.event_date.unwrap_or(current.event_date);
        let end_date = req.end_date.or(current.end_date);
        check_schedule(event_date, end_date)?;

        let event = self.event_repo.update(event_id, &req).await?;
        info!("Updated event {}", event.id);
        Ok(event)
    }

    /// Delete event
    pub async fn delete_event(&self, user_id: Uuid, event_id: Uuid) -> AppResult<()> {
        require_owned_event(&self.event_repo, event_id, user_id).await?;

        if !self.event_repo.delete(event_id).await? {
            return Err(AppError::NotFound("Event not found".into()));
        }

        info!("Deleted event {}", event_id);
        Ok(())
    }
}
