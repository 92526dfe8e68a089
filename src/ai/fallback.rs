use super::SuggestionCategory;

const THEME: &[&str] = &[
    "Modern minimalist with a monochrome palette and greenery accents",
    "Festival style with food trucks, string lights and open-air lounges",
    "Retro decade night with matching music and dress code",
    "Tech-forward setup with interactive screens and live social walls",
    "Sustainable event using local, reusable and zero-waste materials",
];

const VENUE: &[&str] = &[
    "Hotel conference centre with on-site catering and AV support",
    "Converted warehouse or loft for a relaxed, creative atmosphere",
    "Co-working space with breakout rooms for small sessions",
    "Outdoor garden or rooftop with an indoor backup option",
    "Hybrid-ready studio with streaming equipment and stable bandwidth",
];

const CATERING: &[&str] = &[
    "Buffet with clearly labelled vegetarian, vegan and gluten-free options",
    "Interactive food stations such as tacos, pasta or a build-your-own bowl",
    "Locally sourced seasonal menu",
    "Coffee and snack bar running throughout the day",
    "Delivered meal boxes for virtual attendees",
];

const ACTIVITIES: &[&str] = &[
    "Icebreaker session in small groups",
    "Live Q&A with speakers using audience polling",
    "Hands-on workshop or breakout track",
    "Networking roulette pairing in-person and remote attendees",
    "Closing raffle or awards moment",
];

const TASKS: &[&str] = &[
    "Confirm the event budget",
    "Book the venue",
    "Send invitations to the guest list",
    "Arrange catering",
    "Set up the registration page",
    "Prepare the event agenda",
    "Test audio-visual and streaming equipment",
    "Send a reminder to attendees one week before",
];

const BUDGET: &[&str] = &[
    "Allocate roughly 40% of the budget to venue and catering",
    "Keep a 10-15% contingency for unexpected costs",
    "Negotiate package deals with vendors that offer several services",
    "Use early-bird pricing to secure cash flow ahead of the event",
    "Track every vendor quote against the budget as it arrives",
];

const MARKETING: &[&str] = &[
    "Announce the event on social media with a countdown",
    "Email your contact list with a clear call to action",
    "Partner with speakers and sponsors to share the event",
    "Offer early-bird or group registration discounts",
    "Publish a short teaser video or speaker highlights",
];

/// Canned suggestions served whenever the AI call is unavailable
pub fn fallback_suggestions(category: SuggestionCategory) -> Vec<String> {
    let table = match category {
        SuggestionCategory::Theme => THEME,
        SuggestionCategory::Venue => VENUE,
        SuggestionCategory::Catering => CATERING,
        SuggestionCategory::Activities => ACTIVITIES,
        SuggestionCategory::Tasks => TASKS,
        SuggestionCategory::Budget => BUDGET,
        SuggestionCategory::Marketing => MARKETING,
    };
    table.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MAX_SUGGESTIONS;

    #[test]
    fn test_every_category_has_suggestions() {
        for category in [
            SuggestionCategory::Theme,
            SuggestionCategory::Venue,
            SuggestionCategory::Catering,
            SuggestionCategory::Activities,
            SuggestionCategory::Tasks,
            SuggestionCategory::Budget,
            SuggestionCategory::Marketing,
        ] {
            let suggestions = fallback_suggestions(category);
            assert!(!suggestions.is_empty(), "{} has no fallback", category.as_str());
            assert!(suggestions.len() <= MAX_SUGGESTIONS);
        }
    }

    #[test]
    fn test_task_fallback_starts_with_budget() {
        assert_eq!(fallback_suggestions(SuggestionCategory::Tasks)[0], "Confirm the event budget");
    }
}
