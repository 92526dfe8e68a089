use super::event_service::require_owned_event;
use crate::error::{AppError, AppResult};
use crate::models::{
    CreateVendorRequest, EventVendor, LinkVendorRequest, LinkedVendor, UpdateVendorRequest,
    Vendor, VendorCategory,
};
use crate::repositories::{EventRepository, VendorRepository};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Service for a user's vendor book and vendor bookings per event
pub struct VendorService {
    vendor_repo: Arc<VendorRepository>,
    event_repo: Arc<EventRepository>,
}

impl VendorService {
    pub fn new(vendor_repo: Arc<VendorRepository>, event_repo: Arc<EventRepository>) -> Self {
        Self {
            vendor_repo,
            event_repo,
        }
    }

    async fn owned_vendor(&self, user_id: Uuid, vendor_id: Uuid) -> AppResult<Vendor> {
        self.vendor_repo
            .find_for_user(vendor_id, user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Vendor not found".into()))
    }

    pub async fn list_vendors(
        &self,
        user_id: Uuid,
        category: Option<VendorCategory>,
    ) -> AppResult<Vec<Vendor>> {
        Ok(self.vendor_repo.find_by_user(user_id, category).await?)
    }

    /// Vendors attached to one of the caller's events
    pub async fn list_event_vendors(&self, user_id: Uuid, event_id: Uuid) -> AppResult<Vec<LinkedVendor>> {
        require_owned_event(&self.event_repo, event_id, user_id).await?;
        Ok(self.vendor_repo.find_by_event(event_id).await?)
    }

    pub async fn create_vendor(&self, user_id: Uuid, mut req: CreateVendorRequest) -> AppResult<Vendor> {
        req.validate()?;
        let vendor = self.vendor_repo.create(user_id, &req).await?;
        info!("Created vendor {} ({})", vendor.name, vendor.id);
        Ok(vendor)
    }

    pub async fn get_vendor(&self, user_id: Uuid, vendor_id: Uuid) -> AppResult<Vendor> {
        self.owned_vendor(user_id, vendor_id).await
    }

    pub async fn update_vendor(
        &self,
        user_id: Uuid,
        vendor_id: Uuid,
        mut req: UpdateVendorRequest,
    ) -> AppResult<Vendor> {
        req.validate()?;
        self.owned_vendor(user_id, vendor_id).await?;
        Ok(self.vendor_repo.update(vendor_id, &req).await?)
    }

    pub async fn delete_vendor(&self, user_id: Uuid, vendor_id: Uuid) -> AppResult<()> {
        self.owned_vendor(user_id, vendor_id).await?;
        if !self.vendor_repo.delete(vendor_id).await? {
            return Err(AppError::NotFound("Vendor not found".into()));
        }
        info!("Deleted vendor {}", vendor_id);
        Ok(())
    }

    /// Attach a vendor to an event, or update the existing attachment.
    /// Both the vendor and the event must belong to the caller.
    pub async fn link_vendor(
        &self,
        user_id: Uuid,
        vendor_id: Uuid,
        event_id: Uuid,
        mut req: LinkVendorRequest,
    ) -> AppResult<EventVendor> {
        req.validate()?;
        self.owned_vendor(user_id, vendor_id).await?;
        require_owned_event(&self.event_repo, event_id, user_id).await?;

        let link = self.vendor_repo.upsert_link(event_id, vendor_id, &req).await?;
        info!("Linked vendor {} to event {} ({})", vendor_id, event_id, link.status);
        Ok(link)
    }

    pub async fn unlink_vendor(&self, user_id: Uuid, vendor_id: Uuid, event_id: Uuid) -> AppResult<()> {
        self.owned_vendor(user_id, vendor_id).await?;
        require_owned_event(&self.event_repo, event_id, user_id).await?;

        if !self.vendor_repo.remove_link(event_id, vendor_id).await? {
            return Err(AppError::NotFound("Vendor is not linked to this event".into()));
        }
        Ok(())
    }
}
