use super::extract::{ApiJson, ApiPath, ApiQuery};
use crate::auth::AuthUser;
use crate::error::AppResult;
use crate::models::{
    CreateVendorRequest, EventVendor, LinkVendorRequest, LinkedVendor, UpdateVendorRequest,
    Vendor, VendorCategory,
};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Default, Deserialize)]
pub struct VendorListQuery {
    /// Only vendors linked to this event, with their booking details
    pub event_id: Option<Uuid>,
    pub category: Option<VendorCategory>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum VendorList {
    All(Vec<Vendor>),
    Linked(Vec<LinkedVendor>),
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiQuery(query): ApiQuery<VendorListQuery>,
) -> AppResult<Json<VendorList>> {
    let list = match query.event_id {
        Some(event_id) => {
            VendorList::Linked(state.vendors.list_event_vendors(user.id, event_id).await?)
        }
        None => VendorList::All(state.vendors.list_vendors(user.id, query.category).await?),
    };
    Ok(Json(list))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiJson(req): ApiJson<CreateVendorRequest>,
) -> AppResult<(StatusCode, Json<Vendor>)> {
    let vendor = state.vendors.create_vendor(user.id, req).await?;
    Ok((StatusCode::CREATED, Json(vendor)))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Vendor>> {
    Ok(Json(state.vendors.get_vendor(user.id, id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateVendorRequest>,
) -> AppResult<Json<Vendor>> {
    Ok(Json(state.vendors.update_vendor(user.id, id, req).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    state.vendors.delete_vendor(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn link(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath((vendor_id, event_id)): ApiPath<(Uuid, Uuid)>,
    ApiJson(req): ApiJson<LinkVendorRequest>,
) -> AppResult<Json<EventVendor>> {
    Ok(Json(
        state.vendors.link_vendor(user.id, vendor_id, event_id, req).await?,
    ))
}

pub async fn unlink(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath((vendor_id, event_id)): ApiPath<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    state.vendors.unlink_vendor(user.id, vendor_id, event_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
