use super::event_service::require_owned_event;
use crate::error::{AppError, AppResult};
use crate::models::{CreateGuestRequest, Guest, UpdateGuestRequest};
use crate::repositories::{EventRepository, GuestRepository};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

fn duplicate_email() -> AppError {
    AppError::Duplicate("A guest with this email already exists for this event".into())
}

/// Service for managing guest lists
pub struct GuestService {
    guest_repo: Arc<GuestRepository>,
    event_repo: Arc<EventRepository>,
}

impl GuestService {
    pub fn new(guest_repo: Arc<GuestRepository>, event_repo: Arc<EventRepository>) -> Self {
        Self {
            guest_repo,
            event_repo,
        }
    }

    async fn owned_guest(&self, user_id: Uuid, guest_id: Uuid) -> AppResult<Guest> {
        let guest = self
            .guest_repo
            .find_by_id(guest_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Guest not found".into()))?;

        match self.event_repo.find_for_user(guest.event_id, user_id).await? {
            Some(_) => Ok(guest),
            None => Err(AppError::NotFound("Guest not found".into())),
        }
    }

    pub async fn list_guests(&self, user_id: Uuid, event_id: Uuid) -> AppResult<Vec<Guest>> {
        require_owned_event(&self.event_repo, event_id, user_id).await?;
        Ok(self.guest_repo.find_by_event(event_id).await?)
    }

    /// Add a guest; the email must not already be on this event's list
    pub async fn create_guest(&self, user_id: Uuid, mut req: CreateGuestRequest) -> AppResult<Guest> {
        req.validate()?;
        require_owned_event(&self.event_repo, req.event_id, user_id).await?;

        if self.guest_repo.find_by_email(req.event_id, &req.email).await?.is_some() {
            return Err(duplicate_email());
        }

        // The unique index still guards against a concurrent insert
        let guest = self.guest_repo.create(&req).await.map_err(|e| match AppError::from(e) {
            AppError::Duplicate(_) => duplicate_email(),
            other => other,
        })?;

        info!("Added guest {} to event {}", guest.id, guest.event_id);
        Ok(guest)
    }

    pub async fn get_guest(&self, user_id: Uuid, guest_id: Uuid) -> AppResult<Guest> {
        self.owned_guest(user_id, guest_id).await
    }

    pub async fn update_guest(
        &self,
        user_id: Uuid,
        guest_id: Uuid,
        mut req: UpdateGuestRequest,
    ) -> AppResult<Guest> {
        req.validate()?;
        let current = self.owned_guest(user_id, guest_id).await?;

        if let Some(email) = req.email.as_deref() {
            if email != current.email {
                if let Some(other) = self.guest_repo.find_by_email(current.event_id, email).await? {
                    if other.id != guest_id {
                        return Err(duplicate_email());
                    }
                }
            }
        }

        let guest = self.guest_repo.update(guest_id, &req).await.map_err(|e| match AppError::from(e) {
            AppError::Duplicate(_) => duplicate_email(),
            other => other,
        })?;
        Ok(guest)
    }

    /// Mark a guest as arrived
    pub async fn check_in(&self, user_id: Uuid, guest_id: Uuid) -> AppResult<Guest> {
        self.owned_guest(user_id, guest_id).await?;
        let guest = self.guest_repo.check_in(guest_id).await?;
        info!("Checked in guest {} for event {}", guest.id, guest.event_id);
        Ok(guest)
    }

    pub async fn delete_guest(&self, user_id: Uuid, guest_id: Uuid) -> AppResult<()> {
        self.owned_guest(user_id, guest_id).await?;
        if !self.guest_repo.delete(guest_id).await? {
            return Err(AppError::NotFound("Guest not found".into()));
        }
        Ok(())
    }
}
