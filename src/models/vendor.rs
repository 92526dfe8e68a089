use super::validation::{
    non_negative_amount, normalize_email, optional_text, rating, required_text, MAX_NAME_LEN,
};
use crate::error::AppResult;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

string_enum! {
    VendorCategory {
        Venue => "venue",
        Catering => "catering",
        Photography => "photography",
        Entertainment => "entertainment",
        Decor => "decor",
        AvEquipment => "av_equipment",
        Transportation => "transportation",
        Other => "other",
    }
}

string_enum! {
    /// Where a vendor stands for a particular event
    VendorLinkStatus {
        Contacted => "contacted",
        Negotiating => "negotiating",
        Booked => "booked",
        Cancelled => "cancelled",
    }
}

/// Third-party service provider in a user's address book
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Vendor {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    pub category: String,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<i16>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Link row between an event and a vendor
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventVendor {
    pub event_id: Uuid,
    pub vendor_id: Uuid,
    pub status: String,
    pub agreed_cost: Option<Decimal>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Vendor as seen from one event, with the link details alongside
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LinkedVendor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub vendor: Vendor,
    pub link_status: String,
    pub agreed_cost: Option<Decimal>,
    pub link_notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateVendorRequest {
    pub name: String,
    pub category: Option<VendorCategory>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<i16>,
    pub notes: Option<String>,
}

impl CreateVendorRequest {
    pub fn validate(&mut self) -> AppResult<()> {
        self.name = required_text("name", &self.name, MAX_NAME_LEN)?;
        self.email = match optional_text(self.email.as_deref()) {
            Some(email) => Some(normalize_email(&email)?),
            None => None,
        };
        if let Some(value) = self.rating {
            rating("rating", value)?;
        }
        self.contact_name = optional_text(self.contact_name.as_deref());
        self.phone = optional_text(self.phone.as_deref());
        self.website = optional_text(self.website.as_deref());
        self.notes = optional_text(self.notes.as_deref());
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateVendorRequest {
    pub name: Option<String>,
    pub category: Option<VendorCategory>,
    pub contact_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub website: Option<String>,
    pub rating: Option<i16>,
    pub notes: Option<String>,
}

impl UpdateVendorRequest {
    pub fn validate(&mut self) -> AppResult<()> {
        if let Some(name) = &self.name {
            self.name = Some(required_text("name", name, MAX_NAME_LEN)?);
        }
        if let Some(email) = &self.email {
            self.email = Some(normalize_email(email)?);
        }
        if let Some(value) = self.rating {
            rating("rating", value)?;
        }
        self.contact_name = optional_text(self.contact_name.as_deref());
        self.phone = optional_text(self.phone.as_deref());
        self.website = optional_text(self.website.as_deref());
        self.notes = optional_text(self.notes.as_deref());
        Ok(())
    }
}

/// Body of `PUT /api/vendors/:id/events/:event_id`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LinkVendorRequest {
    pub status: Option<VendorLinkStatus>,
    pub agreed_cost: Option<Decimal>,
    pub notes: Option<String>,
}

impl LinkVendorRequest {
    pub fn validate(&mut self) -> AppResult<()> {
        if let Some(cost) = self.agreed_cost {
            non_negative_amount("agreed_cost", cost)?;
        }
        self.notes = optional_text(self.notes.as_deref());
        Ok(())
    }
}
