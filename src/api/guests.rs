use super::extract::{ApiJson, ApiPath, ApiQuery};
use crate::auth::AuthUser;
use crate::error::AppResult;
use crate::models::{CreateGuestRequest, Guest, UpdateGuestRequest};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Debug, Deserialize)]
pub struct GuestListQuery {
    pub event_id: Uuid,
}

pub async fn list(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiQuery(query): ApiQuery<GuestListQuery>,
) -> AppResult<Json<Vec<Guest>>> {
    Ok(Json(state.guests.list_guests(user.id, query.event_id).await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiJson(req): ApiJson<CreateGuestRequest>,
) -> AppResult<(StatusCode, Json<Guest>)> {
    let guest = state.guests.create_guest(user.id, req).await?;
    Ok((StatusCode::CREATED, Json(guest)))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Guest>> {
    Ok(Json(state.guests.get_guest(user.id, id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateGuestRequest>,
) -> AppResult<Json<Guest>> {
    Ok(Json(state.guests.update_guest(user.id, id, req).await?))
}

pub async fn check_in(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Guest>> {
    Ok(Json(state.guests.check_in(user.id, id).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    state.guests.delete_guest(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
