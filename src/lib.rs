//! Planora Backend Library
//!
//! This module exposes the backend components for use by the binary and tests.

pub mod ai;
pub mod api;
pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod models;
pub mod repositories;
pub mod scoring;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AppError, AppResult};

use ai::SuggestionClient;
use auth::AuthClient;
use database::Database;
use repositories::*;
use services::*;
use std::sync::Arc;

/// Application state containing all services, shared by every request
pub struct AppState {
    pub config: AppConfig,
    pub database: Database,
    pub auth: Arc<AuthClient>,
    pub events: Arc<EventService>,
    pub tasks: Arc<TaskService>,
    pub guests: Arc<GuestService>,
    pub vendors: Arc<VendorService>,
    pub analytics: Arc<AnalyticsService>,
    pub preferences: Arc<PreferenceService>,
    pub suggestions: Arc<SuggestionService>,
}

impl AppState {
    /// Create a new AppState with initialized repositories and services
    pub fn new(pool: sqlx::PgPool, config: AppConfig) -> AppResult<Self> {
        let database = Database::new(pool.clone());

        let event_repo = Arc::new(EventRepository::new(pool.clone()));
        let task_repo = Arc::new(TaskRepository::new(pool.clone()));
        let guest_repo = Arc::new(GuestRepository::new(pool.clone()));
        let vendor_repo = Arc::new(VendorRepository::new(pool.clone()));
        let analytics_repo = Arc::new(AnalyticsRepository::new(pool.clone()));
        let preference_repo = Arc::new(PreferenceRepository::new(pool));

        let auth = Arc::new(AuthClient::new(config.auth.clone(), config.dev_auth)?);
        let ai_client = Arc::new(SuggestionClient::new(config.ai.clone())?);

        Ok(Self {
            database,
            auth,
            events: Arc::new(EventService::new(event_repo.clone())),
            tasks: Arc::new(TaskService::new(task_repo.clone(), event_repo.clone())),
            guests: Arc::new(GuestService::new(guest_repo.clone(), event_repo.clone())),
            vendors: Arc::new(VendorService::new(vendor_repo.clone(), event_repo.clone())),
            analytics: Arc::new(AnalyticsService::new(
                analytics_repo,
                event_repo.clone(),
                guest_repo,
                vendor_repo,
            )),
            preferences: Arc::new(PreferenceService::new(preference_repo)),
            suggestions: Arc::new(SuggestionService::new(ai_client, event_repo, task_repo)),
            config,
        })
    }
}
