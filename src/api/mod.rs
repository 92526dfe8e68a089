//! HTTP surface: JSON routes under `/api`, plus health checks.
//!
//! Every `/api` handler takes an [`AuthUser`](crate::auth::AuthUser), so a
//! request without a valid bearer token is rejected with 401 before its body
//! is parsed.

pub mod ai;
pub mod analytics;
pub mod events;
pub mod extract;
pub mod guests;
pub mod health;
pub mod preferences;
pub mod tasks;
pub mod vendors;

use crate::error::AppError;
use crate::AppState;
use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::check))
        .route("/health/ready", get(health::ready))
        // Events
        .route("/api/events", get(events::list).post(events::create))
        .route(
            "/api/events/:id",
            get(events::get).put(events::update).delete(events::delete),
        )
        // Tasks
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/api/tasks/:id",
            get(tasks::get).put(tasks::update).delete(tasks::delete),
        )
        // Guests
        .route("/api/guests", get(guests::list).post(guests::create))
        .route(
            "/api/guests/:id",
            get(guests::get).put(guests::update).delete(guests::delete),
        )
        .route("/api/guests/:id/check-in", post(guests::check_in))
        // Vendors
        .route("/api/vendors", get(vendors::list).post(vendors::create))
        .route(
            "/api/vendors/:id",
            get(vendors::get).put(vendors::update).delete(vendors::delete),
        )
        .route(
            "/api/vendors/:id/events/:event_id",
            put(vendors::link).delete(vendors::unlink),
        )
        // Analytics
        .route("/api/analytics", get(analytics::dashboard))
        .route(
            "/api/analytics/:event_id",
            get(analytics::event_report).put(analytics::record_metrics),
        )
        .route(
            "/api/analytics/:event_id/feedback",
            get(analytics::list_feedback).post(analytics::submit_feedback),
        )
        // Preferences
        .route(
            "/api/preferences",
            get(preferences::get).put(preferences::update),
        )
        // AI
        .route("/api/ai/suggestions", post(ai::suggestions))
        .route("/api/ai/generate-tasks", post(ai::generate_tasks))
        .fallback(not_found)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound("Route not found".to_string())
}

/// Log method, path, status and latency of every request
async fn log_requests(req: Request, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let started = Instant::now();

    let response = next.run(req).await;

    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;
    if status.is_server_error() {
        warn!(%method, %path, status = status.as_u16(), elapsed_ms, "request failed");
    } else {
        info!(%method, %path, status = status.as_u16(), elapsed_ms, "request");
    }

    response
}
