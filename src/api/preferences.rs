use super::extract::ApiJson;
use crate::auth::AuthUser;
use crate::error::AppResult;
use crate::models::{UpdatePreferenceRequest, UserPreference};
use crate::AppState;
use axum::extract::State;
use axum::Json;
use std::sync::Arc;

pub async fn get(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> AppResult<Json<UserPreference>> {
    Ok(Json(state.preferences.get_preferences(user.id).await?))
}

pub async fn update(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiJson(req): ApiJson<UpdatePreferenceRequest>,
) -> AppResult<Json<UserPreference>> {
    Ok(Json(state.preferences.update_preferences(user.id, req).await?))
}
