pub mod engagement;

pub use engagement::{engagement_score, EngagementBreakdown, EngagementMetrics};
