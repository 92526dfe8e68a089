use super::extract::{ApiJson, ApiPath, ApiQuery};
use crate::auth::AuthUser;
use crate::error::AppResult;
use crate::models::{CreateEventRequest, Event, EventListQuery, UpdateEventRequest};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use uuid::Uuid;

pub async fn list(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiQuery(query): ApiQuery<EventListQuery>,
) -> AppResult<Json<Vec<Event>>> {
    Ok(Json(state.events.list_events(user.id, &query).await?))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiJson(req): ApiJson<CreateEventRequest>,
) -> AppResult<(StatusCode, Json<Event>)> {
    let event = state.events.create_event(user.id, req).await?;
    Ok((StatusCode::CREATED, Json(event)))
}

pub async fn get(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<Json<Event>> {
    Ok(Json(state.events.get_event(user.id, id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UpdateEventRequest>,
) -> AppResult<Json<Event>> {
    Ok(Json(state.events.update_event(user.id, id, req).await?))
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(id): ApiPath<Uuid>,
) -> AppResult<StatusCode> {
    state.events.delete_event(user.id, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
