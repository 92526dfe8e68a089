use super::extract::{ApiJson, ApiPath};
use crate::auth::AuthUser;
use crate::error::AppResult;
use crate::models::{
    AttendeeFeedback, CreateFeedbackRequest, DashboardSummary, EventAnalytics, EventReport,
    RecordMetricsRequest,
};
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use std::sync::Arc;
use uuid::Uuid;

pub async fn dashboard(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
) -> AppResult<Json<DashboardSummary>> {
    Ok(Json(state.analytics.dashboard(user.id).await?))
}

pub async fn event_report(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(event_id): ApiPath<Uuid>,
) -> AppResult<Json<EventReport>> {
    Ok(Json(state.analytics.event_report(user.id, event_id).await?))
}

pub async fn record_metrics(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(event_id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<RecordMetricsRequest>,
) -> AppResult<Json<EventAnalytics>> {
    Ok(Json(
        state.analytics.record_metrics(user.id, event_id, req).await?,
    ))
}

pub async fn list_feedback(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(event_id): ApiPath<Uuid>,
) -> AppResult<Json<Vec<AttendeeFeedback>>> {
    Ok(Json(state.analytics.list_feedback(user.id, event_id).await?))
}

pub async fn submit_feedback(
    State(state): State<Arc<AppState>>,
    user: AuthUser,
    ApiPath(event_id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<CreateFeedbackRequest>,
) -> AppResult<(StatusCode, Json<AttendeeFeedback>)> {
    let feedback = state.analytics.submit_feedback(user.id, event_id, req).await?;
    Ok((StatusCode::CREATED, Json(feedback)))
}
