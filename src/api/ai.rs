use super::extract::ApiJson;
use crate::ai::{GenerateTasksRequest, GenerateTasksResponse, SuggestionRequest, SuggestionResponse};
use crate::auth::AuthUser;
use crate::error::AppResult;
use crate::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

pub async fn suggestions(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiJson(req): ApiJson<SuggestionRequest>,
) -> AppResult<Json<SuggestionResponse>> {
    Ok(Json(state.suggestions.suggest(user.id, req).await?))
}

pub async fn generate_tasks(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiJson(req): ApiJson<GenerateTasksRequest>,
) -> AppResult<Json<GenerateTasksResponse>> {
    Ok(Json(
        state
            .suggestions
            .generate_tasks(user.id, req.event_id, req.persist)
            .await?,
    ))
}
