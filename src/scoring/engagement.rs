use serde::{Deserialize, Serialize};

/// Weight of the attendance percentage in the engagement score
pub const ATTENDANCE_WEIGHT: f64 = 0.3;
/// Weight of the time-spent percentage
pub const TIME_WEIGHT: f64 = 0.4;
/// Weight of the interaction rate
pub const INTERACTION_WEIGHT: f64 = 0.3;

/// Raw counters recorded for an event
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementMetrics {
    pub registrations: i32,
    pub attendees: i32,
    pub avg_time_spent_minutes: f64,
    pub event_duration_minutes: f64,
    pub interactions: i32,
}

/// Normalized components of the engagement score, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngagementBreakdown {
    pub attendance_pct: f64,
    pub time_pct: f64,
    pub interaction_pct: f64,
    pub score: u8,
}

/// `numerator / denominator` as a percentage clamped to [0, 100].
/// A zero (or negative) denominator yields 0.
fn ratio_pct(numerator: f64, denominator: f64) -> f64 {
    if denominator <= 0.0 || !numerator.is_finite() || !denominator.is_finite() {
        return 0.0;
    }
    (numerator / denominator * 100.0).clamp(0.0, 100.0)
}

/// Weighted combination of the three percentages, rounded to an integer score.
///
/// Inputs are clamped before weighting, so the result always lies in [0, 100].
pub fn engagement_score(attendance_pct: f64, time_pct: f64, interaction_pct: f64) -> u8 {
    let clamp = |v: f64| if v.is_finite() { v.clamp(0.0, 100.0) } else { 0.0 };

    let weighted = ATTENDANCE_WEIGHT * clamp(attendance_pct)
        + TIME_WEIGHT * clamp(time_pct)
        + INTERACTION_WEIGHT * clamp(interaction_pct);

    weighted.round().clamp(0.0, 100.0) as u8
}

impl EngagementMetrics {
    /// Attendees over registrations
    pub fn attendance_pct(&self) -> f64 {
        ratio_pct(self.attendees as f64, self.registrations as f64)
    }

    /// Average time spent over scheduled duration
    pub fn time_pct(&self) -> f64 {
        ratio_pct(self.avg_time_spent_minutes, self.event_duration_minutes)
    }

    /// Interactions per attendee, as a percentage (one interaction each = 100)
    pub fn interaction_pct(&self) -> f64 {
        ratio_pct(self.interactions as f64, self.attendees as f64)
    }

    pub fn breakdown(&self) -> EngagementBreakdown {
        let attendance_pct = self.attendance_pct();
        let time_pct = self.time_pct();
        let interaction_pct = self.interaction_pct();

        EngagementBreakdown {
            attendance_pct,
            time_pct,
            interaction_pct,
            score: engagement_score(attendance_pct, time_pct, interaction_pct),
        }
    }

    pub fn score(&self) -> u8 {
        self.breakdown().score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(registrations: i32, attendees: i32, avg: f64, duration: f64, interactions: i32) -> EngagementMetrics {
        EngagementMetrics {
            registrations,
            attendees,
            avg_time_spent_minutes: avg,
            event_duration_minutes: duration,
            interactions,
        }
    }

    #[test]
    fn test_perfect_event_scores_100() {
        let m = metrics(100, 100, 60.0, 60.0, 250);
        let b = m.breakdown();
        assert_eq!(b.attendance_pct, 100.0);
        assert_eq!(b.time_pct, 100.0);
        assert_eq!(b.interaction_pct, 100.0);
        assert_eq!(b.score, 100);
    }

    #[test]
    fn test_empty_metrics_score_zero() {
        assert_eq!(EngagementMetrics::default().score(), 0);
    }

    #[test]
    fn test_weighted_sum() {
        // attendance 50%, time 50%, interactions 20%
        let m = metrics(200, 100, 30.0, 60.0, 20);
        let b = m.breakdown();
        assert_eq!(b.attendance_pct, 50.0);
        assert_eq!(b.time_pct, 50.0);
        assert_eq!(b.interaction_pct, 20.0);
        // 0.3*50 + 0.4*50 + 0.3*20 = 15 + 20 + 6 = 41
        assert_eq!(b.score, 41);
    }

    #[test]
    fn test_components_are_clamped() {
        // More attendees than registrations, more time than scheduled
        let m = metrics(10, 40, 200.0, 60.0, 0);
        let b = m.breakdown();
        assert_eq!(b.attendance_pct, 100.0);
        assert_eq!(b.time_pct, 100.0);
        assert_eq!(engagement_score(250.0, -20.0, f64::NAN), 30);
    }

    #[test]
    fn test_rounding() {
        // 0.3*33.33.. + 0.4*0 + 0.3*0 = 10.0
        let m = metrics(3, 1, 0.0, 60.0, 0);
        assert_eq!(m.score(), 10);
        assert_eq!(engagement_score(1.0, 1.0, 0.0), 1); // 0.7 rounds up
        assert_eq!(engagement_score(1.0, 0.0, 0.0), 0); // 0.3 rounds down
    }

    #[test]
    fn test_monotonic_in_attendance() {
        let mut previous = 0;
        for attendance in 0..=100 {
            let score = engagement_score(attendance as f64, 40.0, 70.0);
            assert!(score >= previous, "score dropped at attendance {}", attendance);
            previous = score;
        }
    }
}
