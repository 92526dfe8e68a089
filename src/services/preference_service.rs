use crate::error::AppResult;
use crate::models::{UpdatePreferenceRequest, UserPreference};
use crate::repositories::PreferenceRepository;
use std::sync::Arc;
use uuid::Uuid;

/// Service for per-user settings
pub struct PreferenceService {
    preference_repo: Arc<PreferenceRepository>,
}

impl PreferenceService {
    pub fn new(preference_repo: Arc<PreferenceRepository>) -> Self {
        Self { preference_repo }
    }

    /// Stored preferences, or the defaults if the user never saved any
    pub async fn get_preferences(&self, user_id: Uuid) -> AppResult<UserPreference> {
        Ok(self
            .preference_repo
            .find_by_user(user_id)
            .await?
            .unwrap_or_else(|| UserPreference::defaults(user_id)))
    }

    pub async fn update_preferences(
        &self,
        user_id: Uuid,
        mut req: UpdatePreferenceRequest,
    ) -> AppResult<UserPreference> {
        req.validate()?;
        let current = self.get_preferences(user_id).await?;
        let merged = req.apply(current);
        Ok(self.preference_repo.upsert(&merged).await?)
    }
}
