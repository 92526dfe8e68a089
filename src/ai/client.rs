use super::{fallback_suggestions, parse_suggestions, SuggestionCategory, SuggestionSource};
use crate::config::AiConfig;
use crate::error::{AppError, AppResult};
use anyhow::{anyhow, bail, Context};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatContent,
}

#[derive(Debug, Deserialize)]
struct ChatContent {
    #[serde(default)]
    content: Option<String>,
}

const SYSTEM_PROMPT: &str = "You are an assistant for event planners organising in-person, \
virtual and hybrid events. Answer with a plain list, one suggestion per line, no preamble.";

/// Calls the configured LLM endpoint and falls back to canned suggestions on failure
pub struct SuggestionClient {
    http: reqwest::Client,
    config: AiConfig,
}

impl SuggestionClient {
    pub fn new(config: AiConfig) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build AI HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    /// Suggestions for `category`, never failing: any upstream problem yields the fallback list
    pub async fn generate(
        &self,
        category: SuggestionCategory,
        context: &str,
    ) -> (Vec<String>, SuggestionSource) {
        if !self.config.is_enabled() {
            debug!("AI suggestions disabled, serving fallback for {}", category.as_str());
            return (fallback_suggestions(category), SuggestionSource::Fallback);
        }

        match self.request(category, context).await {
            Ok(suggestions) => {
                info!("AI returned {} {} suggestions", suggestions.len(), category.as_str());
                (suggestions, SuggestionSource::Ai)
            }
            Err(e) => {
                warn!("AI suggestion request failed, using fallback: {:#}", e);
                (fallback_suggestions(category), SuggestionSource::Fallback)
            }
        }
    }

    async fn request(&self, category: SuggestionCategory, context: &str) -> anyhow::Result<Vec<String>> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or_else(|| anyhow!("no API key configured"))?;

        let user_prompt = build_prompt(category, context);
        let body = ChatRequest {
            model: &self.config.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &user_prompt,
                },
            ],
            temperature: 0.7,
        };

        let response = self
            .http
            .post(&self.config.api_url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .context("sending chat completion request")?;

        let status = response.status();
        if !status.is_success() {
            bail!("chat completion returned {}", status);
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .context("decoding chat completion response")?;

        let content = parsed
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .ok_or_else(|| anyhow!("chat completion had no content"))?;

        let suggestions = parse_suggestions(&content);
        if suggestions.is_empty() {
            bail!("chat completion contained no suggestions");
        }
        Ok(suggestions)
    }
}

/// User prompt for a category plus whatever event context is known
pub fn build_prompt(category: SuggestionCategory, context: &str) -> String {
    let mut prompt = format!("Suggest up to 8 {}.", category.instruction());
    let context = context.trim();
    if !context.is_empty() {
        prompt.push_str("\n\nEvent details:\n");
        prompt.push_str(context);
    }
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::MAX_SUGGESTIONS;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Answer one request on a local port with a canned response, returning the endpoint URL
    async fn serve_once(status: u16, body: String) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut stream, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 4096];
            while !request_complete(&request) {
                let n = stream.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }

            let response = format!(
                "HTTP/1.1 {} Canned\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            );
            stream.write_all(response.as_bytes()).await.unwrap();
            let _ = stream.shutdown().await;
        });

        format!("http://{}/v1/chat/completions", addr)
    }

    /// Headers received and the whole `Content-Length` body read
    fn request_complete(raw: &[u8]) -> bool {
        let Some(end) = raw.windows(4).position(|w| w == b"\r\n\r\n") else {
            return false;
        };
        let headers = String::from_utf8_lossy(&raw[..end]).to_ascii_lowercase();
        let length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        raw.len() >= end + 4 + length
    }

    fn client_for(api_url: String) -> SuggestionClient {
        SuggestionClient::new(AiConfig {
            api_url,
            api_key: Some("sk-test".to_string()),
            timeout_secs: 5,
            ..AiConfig::default()
        })
        .unwrap()
    }

    fn chat_reply(content: &str) -> String {
        json!({"choices": [{"message": {"role": "assistant", "content": content}}]}).to_string()
    }

    #[test]
    fn test_build_prompt_includes_context() {
        let prompt = build_prompt(SuggestionCategory::Catering, "Title: Team offsite\nGuests: 30");
        assert!(prompt.starts_with("Suggest up to 8 catering and menu ideas."));
        assert!(prompt.contains("Team offsite"));

        let bare = build_prompt(SuggestionCategory::Theme, "   ");
        assert!(!bare.contains("Event details"));
    }

    #[tokio::test]
    async fn test_disabled_client_serves_fallback() {
        let client = SuggestionClient::new(AiConfig::default()).unwrap();
        let (suggestions, source) = client.generate(SuggestionCategory::Budget, "").await;
        assert_eq!(source, SuggestionSource::Fallback);
        assert_eq!(suggestions, fallback_suggestions(SuggestionCategory::Budget));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_serves_fallback() {
        let config = AiConfig {
            api_url: "http://127.0.0.1:1/v1/chat/completions".to_string(),
            api_key: Some("sk-test".to_string()),
            timeout_secs: 2,
            ..AiConfig::default()
        };
        let client = SuggestionClient::new(config).unwrap();
        let (suggestions, source) = client.generate(SuggestionCategory::Venue, "").await;
        assert_eq!(source, SuggestionSource::Fallback);
        assert_eq!(suggestions, fallback_suggestions(SuggestionCategory::Venue));
    }

    #[test]
    fn test_chat_response_decoding() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"- A\n- B"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(raw).unwrap();
        let content = parsed.choices[0].message.content.clone().unwrap();
        assert_eq!(parse_suggestions(&content), vec!["A", "B"]);
    }

    #[tokio::test]
    async fn test_error_status_serves_fallback() {
        let url = serve_once(500, r#"{"error":"overloaded"}"#.to_string()).await;
        let (suggestions, source) = client_for(url).generate(SuggestionCategory::Theme, "").await;
        assert_eq!(source, SuggestionSource::Fallback);
        assert_eq!(suggestions, fallback_suggestions(SuggestionCategory::Theme));
    }

    #[tokio::test]
    async fn test_malformed_body_serves_fallback() {
        let url = serve_once(200, "{}".to_string()).await;
        let (suggestions, source) = client_for(url).generate(SuggestionCategory::Catering, "").await;
        assert_eq!(source, SuggestionSource::Fallback);
        assert_eq!(suggestions, fallback_suggestions(SuggestionCategory::Catering));
    }

    #[tokio::test]
    async fn test_empty_reply_serves_fallback() {
        let url = serve_once(200, chat_reply("\n  \n")).await;
        let (suggestions, source) = client_for(url).generate(SuggestionCategory::Marketing, "").await;
        assert_eq!(source, SuggestionSource::Fallback);
        assert_eq!(suggestions, fallback_suggestions(SuggestionCategory::Marketing));
    }

    #[tokio::test]
    async fn test_model_reply_is_parsed_and_capped() {
        let mut content = String::from("Here are some venue ideas:\n");
        for i in 1..=10 {
            content.push_str(&format!("{}. Venue option {}\n", i, i));
        }
        let url = serve_once(200, chat_reply(&content)).await;
        let (suggestions, source) = client_for(url).generate(SuggestionCategory::Venue, "Guests: 40").await;

        assert_eq!(source, SuggestionSource::Ai);
        assert_eq!(suggestions.len(), MAX_SUGGESTIONS);
        assert_eq!(suggestions[0], "Venue option 1");
        assert!(suggestions.iter().all(|s| s.starts_with("Venue option")));
    }
}
