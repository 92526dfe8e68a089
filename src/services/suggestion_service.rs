use super::event_service::require_owned_event;
use crate::ai::{
    GenerateTasksResponse, SuggestionCategory, SuggestionClient, SuggestionRequest,
    SuggestionResponse,
};
use crate::error::AppResult;
use crate::models::validation::MAX_NAME_LEN;
use crate::models::{Event, TaskPriority};
use crate::repositories::{EventRepository, TaskRepository};
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Maximum length of the free-form prompt forwarded to the model
const MAX_PROMPT_CHARS: usize = 1000;

/// AI-assisted planning on top of the caller's events
pub struct SuggestionService {
    client: Arc<SuggestionClient>,
    event_repo: Arc<EventRepository>,
    task_repo: Arc<TaskRepository>,
}

/// Plain-text description of an event for the model prompt
pub fn event_context(event: &Event) -> String {
    let mut lines = vec![
        format!("Title: {}", event.title),
        format!("Type: {}", event.event_type),
        format!("Format: {}", event.format),
        format!("Date: {}", event.event_date.format("%Y-%m-%d")),
        format!("Expected attendees: {}", event.expected_attendees),
        format!("Budget: {}", event.budget),
    ];
    if let Some(location) = &event.location {
        lines.push(format!("Location: {}", location));
    }
    if let Some(description) = &event.description {
        lines.push(format!("Description: {}", description));
    }
    lines.join("\n")
}

impl SuggestionService {
    pub fn new(
        client: Arc<SuggestionClient>,
        event_repo: Arc<EventRepository>,
        task_repo: Arc<TaskRepository>,
    ) -> Self {
        Self {
            client,
            event_repo,
            task_repo,
        }
    }

    pub async fn suggest(&self, user_id: Uuid, req: SuggestionRequest) -> AppResult<SuggestionResponse> {
        let mut context = match req.event_id {
            Some(event_id) => {
                let event = require_owned_event(&self.event_repo, event_id, user_id).await?;
                event_context(&event)
            }
            None => String::new(),
        };

        if let Some(prompt) = req.prompt.as_deref().map(str::trim).filter(|p| !p.is_empty()) {
            let prompt: String = prompt.chars().take(MAX_PROMPT_CHARS).collect();
            if !context.is_empty() {
                context.push('\n');
            }
            context.push_str("Notes: ");
            context.push_str(&prompt);
        }

        let (suggestions, source) = self.client.generate(req.category, &context).await;
        Ok(SuggestionResponse {
            category: req.category,
            suggestions,
            source,
        })
    }

    /// Suggest planning tasks for an event, optionally saving them as pending tasks
    pub async fn generate_tasks(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        persist: bool,
    ) -> AppResult<GenerateTasksResponse> {
        let event = require_owned_event(&self.event_repo, event_id, user_id).await?;

        let (suggestions, source) = self
            .client
            .generate(SuggestionCategory::Tasks, &event_context(&event))
            .await;

        let created = if persist {
            let titles: Vec<String> = suggestions
                .iter()
                .map(|s| s.chars().take(MAX_NAME_LEN).collect())
                .collect();
            let tasks = self
                .task_repo
                .create_many(event_id, &titles, TaskPriority::Medium)
                .await?;
            info!("Created {} suggested tasks for event {}", tasks.len(), event_id);
            tasks
        } else {
            Vec::new()
        };

        Ok(GenerateTasksResponse {
            event_id,
            suggestions,
            source,
            created,
        })
    }
}
