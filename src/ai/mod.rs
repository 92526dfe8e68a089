//! AI-assisted planning suggestions.
//!
//! Suggestions come from an OpenAI-compatible chat completions endpoint. When
//! no key is configured, or the call fails in any way, the canned list for the
//! requested category is returned instead.

pub mod client;
pub mod fallback;

pub use client::SuggestionClient;
pub use fallback::fallback_suggestions;

use crate::models::string_enum;
use serde::{Deserialize, Serialize};

/// Maximum number of suggestions returned from a model response
pub const MAX_SUGGESTIONS: usize = 8;

string_enum! {
    /// Kind of planning help requested from the assistant
    SuggestionCategory {
        Theme => "theme",
        Venue => "venue",
        Catering => "catering",
        Activities => "activities",
        Tasks => "tasks",
        Budget => "budget",
        Marketing => "marketing",
    }
}

impl SuggestionCategory {
    /// What the model is asked to produce for this category
    pub fn instruction(&self) -> &'static str {
        match self {
            SuggestionCategory::Theme => "creative themes and decor concepts",
            SuggestionCategory::Venue => "venue types and venue selection criteria",
            SuggestionCategory::Catering => "catering and menu ideas",
            SuggestionCategory::Activities => "engaging activities and session formats",
            SuggestionCategory::Tasks => "concrete planning tasks, each a short imperative title",
            SuggestionCategory::Budget => "budget allocation and cost-saving tips",
            SuggestionCategory::Marketing => "promotion and attendee outreach ideas",
        }
    }
}

/// Where a suggestion list came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionSource {
    Ai,
    Fallback,
}

/// Body of `POST /api/ai/suggestions`
#[derive(Debug, Clone, Deserialize)]
pub struct SuggestionRequest {
    pub category: SuggestionCategory,
    pub event_id: Option<uuid::Uuid>,
    /// Free-form extra context from the user
    pub prompt: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionResponse {
    pub category: SuggestionCategory,
    pub suggestions: Vec<String>,
    pub source: SuggestionSource,
}

/// Body of `POST /api/ai/generate-tasks`
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateTasksRequest {
    pub event_id: uuid::Uuid,
    /// Insert the suggestions as pending tasks
    #[serde(default)]
    pub persist: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateTasksResponse {
    pub event_id: uuid::Uuid,
    pub suggestions: Vec<String>,
    pub source: SuggestionSource,
    pub created: Vec<crate::models::Task>,
}

/// Turn a free-text model answer into a clean list of suggestions.
///
/// One suggestion per line; bullets (`-`, `*`, `•`) and numbering (`1.`, `2)`)
/// are stripped, blank lines dropped, duplicates removed, and the list capped at
/// [`MAX_SUGGESTIONS`]. When any line carries a marker, unmarked lines are
/// treated as commentary and skipped. Lines ending in `:` are headings.
pub fn parse_suggestions(content: &str) -> Vec<String> {
    let lines: Vec<(&str, bool)> = content
        .lines()
        .map(strip_marker)
        .filter(|(item, _)| !item.is_empty() && !item.ends_with(':'))
        .collect();
    let has_markers = lines.iter().any(|(_, marked)| *marked);

    let mut out: Vec<String> = Vec::new();
    for (item, marked) in lines {
        if has_markers && !marked {
            continue;
        }
        if out.iter().any(|existing| existing.eq_ignore_ascii_case(item)) {
            continue;
        }

        out.push(item.to_string());
        if out.len() == MAX_SUGGESTIONS {
            break;
        }
    }

    out
}

/// Strip a leading bullet or list number, reporting whether one was present
fn strip_marker(line: &str) -> (&str, bool) {
    let line = line.trim();
    let mut item = line.trim_start_matches(&['-', '*', '•'][..]).trim_start();
    let mut marked = item.len() != line.len();

    let digits = item.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &item[digits..];
        if let Some(stripped) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            item = stripped.trim_start();
            marked = true;
        }
    }

    (item.trim().trim_matches('"').trim(), marked)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_strips_bullets_and_numbers() {
        let content = "1. Book the venue\n2) Send invitations\n- Arrange catering\n* Hire a photographer\n• Plan the agenda\n\n";
        assert_eq!(
            parse_suggestions(content),
            vec![
                "Book the venue",
                "Send invitations",
                "Arrange catering",
                "Hire a photographer",
                "Plan the agenda",
            ]
        );
    }

    #[test]
    fn test_parse_keeps_leading_years() {
        assert_eq!(parse_suggestions("2025 retro theme"), vec!["2025 retro theme"]);
    }

    #[test]
    fn test_parse_dedupes_and_caps() {
        let content = (0..20)
            .map(|i| format!("- Idea {}", i % 10))
            .collect::<Vec<_>>()
            .join("\n");
        let parsed = parse_suggestions(&content);
        assert_eq!(parsed.len(), MAX_SUGGESTIONS);
        assert_eq!(parsed[0], "Idea 0");
    }

    #[test]
    fn test_parse_skips_preamble_and_headings() {
        let content = "Here are some ideas for your event:\n\n1. Rooftop terrace\n2. Botanical garden\n\nLet me know if you want more.";
        assert_eq!(
            parse_suggestions(content),
            vec!["Rooftop terrace", "Botanical garden"]
        );

        let unmarked = "Venues:\nRooftop terrace\nBotanical garden";
        assert_eq!(
            parse_suggestions(unmarked),
            vec!["Rooftop terrace", "Botanical garden"]
        );
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_suggestions("   \n\n").is_empty());
    }

    #[test]
    fn test_category_serde() {
        let c: SuggestionCategory = serde_json::from_str("\"activities\"").unwrap();
        assert_eq!(c, SuggestionCategory::Activities);
        assert_eq!("Tasks".parse::<SuggestionCategory>(), Ok(SuggestionCategory::Tasks));
        assert!("music".parse::<SuggestionCategory>().is_err());
        assert_eq!(SuggestionCategory::ALL.len(), 7);
        assert_eq!(serde_json::to_string(&SuggestionSource::Fallback).unwrap(), "\"fallback\"");
    }
}
