use super::event_service::require_owned_event;
use crate::error::{AppError, AppResult};
use crate::models::{
    AttendeeFeedback, BudgetUsage, CreateFeedbackRequest, DashboardSummary, EventAnalytics,
    EventReport, FeedbackSummary, RecordMetricsRequest,
};
use crate::repositories::{AnalyticsRepository, EventRepository, GuestRepository, VendorRepository};
use crate::scoring::EngagementMetrics;
use chrono::Utc;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Service behind the analytics views
pub struct AnalyticsService {
    analytics_repo: Arc<AnalyticsRepository>,
    event_repo: Arc<EventRepository>,
    guest_repo: Arc<GuestRepository>,
    vendor_repo: Arc<VendorRepository>,
}

impl AnalyticsService {
    pub fn new(
        analytics_repo: Arc<AnalyticsRepository>,
        event_repo: Arc<EventRepository>,
        guest_repo: Arc<GuestRepository>,
        vendor_repo: Arc<VendorRepository>,
    ) -> Self {
        Self {
            analytics_repo,
            event_repo,
            guest_repo,
            vendor_repo,
        }
    }

    /// Totals across all of the caller's events
    pub async fn dashboard(&self, user_id: Uuid) -> AppResult<DashboardSummary> {
        Ok(self.analytics_repo.dashboard(user_id).await?)
    }

    /// Full analytics report for one event
    pub async fn event_report(&self, user_id: Uuid, event_id: Uuid) -> AppResult<EventReport> {
        let event = require_owned_event(&self.event_repo, event_id, user_id).await?;

        let metrics = self.analytics_repo.find_by_event(event_id).await?;
        let engagement = metrics
            .as_ref()
            .map(EventAnalytics::metrics)
            .unwrap_or_default()
            .breakdown();

        let ratings: Vec<i16> = self
            .analytics_repo
            .find_feedback(event_id)
            .await?
            .iter()
            .map(|f| f.rating)
            .collect();
        let feedback = FeedbackSummary::from_ratings(&ratings);

        let rsvp = self.analytics_repo.rsvp_breakdown(event_id).await?;
        let tasks = self
            .analytics_repo
            .task_progress(event_id, Utc::now().date_naive())
            .await?;
        let committed = self.vendor_repo.committed_spend(event_id).await?;
        let budget = BudgetUsage::new(event.budget, committed);

        Ok(EventReport {
            event_id,
            metrics,
            engagement,
            feedback,
            task_completion_rate: tasks.completion_rate(),
            rsvp,
            tasks,
            over_budget: budget.is_over_budget(),
            budget,
        })
    }

    /// Store engagement counters; the score is always recomputed here
    pub async fn record_metrics(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        req: RecordMetricsRequest,
    ) -> AppResult<EventAnalytics> {
        req.validate()?;
        require_owned_event(&self.event_repo, event_id, user_id).await?;

        let metrics: EngagementMetrics = req.metrics();
        let score = i16::from(metrics.score());

        let analytics = self.analytics_repo.upsert(event_id, &req, score).await?;
        info!("Recorded analytics for event {} (engagement={})", event_id, score);
        Ok(analytics)
    }

    pub async fn list_feedback(&self, user_id: Uuid, event_id: Uuid) -> AppResult<Vec<AttendeeFeedback>> {
        require_owned_event(&self.event_repo, event_id, user_id).await?;
        Ok(self.analytics_repo.find_feedback(event_id).await?)
    }

    /// Record attendee feedback. A referenced guest must be on this event's list.
    pub async fn submit_feedback(
        &self,
        user_id: Uuid,
        event_id: Uuid,
        mut req: CreateFeedbackRequest,
    ) -> AppResult<AttendeeFeedback> {
        req.validate()?;
        require_owned_event(&self.event_repo, event_id, user_id).await?;

        if let Some(guest_id) = req.guest_id {
            match self.guest_repo.find_by_id(guest_id).await? {
                Some(guest) if guest.event_id == event_id => {}
                _ => {
                    return Err(AppError::Validation(
                        "guest_id does not belong to this event".into(),
                    ))
                }
            }
        }

        Ok(self.analytics_repo.create_feedback(event_id, &req).await?)
    }
}
