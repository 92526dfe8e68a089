use crate::config::AuthConfig;
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use uuid::Uuid;

/// Prefix of the tokens accepted locally in development mode
const DEV_TOKEN_PREFIX: &str = "dev:";

/// The authenticated caller, as reported by the auth provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub id: Uuid,
    #[serde(default)]
    pub email: Option<String>,
}

/// Extract the token from an `Authorization: Bearer <token>` header value
///
/// # Returns
/// * `Ok(&str)` - the trimmed token
/// * `Err(AppError::Unauthorized)` - header missing, empty, or not a bearer token
pub fn bearer_token(header: Option<&str>) -> AppResult<&str> {
    let header = header
        .map(str::trim)
        .filter(|h| !h.is_empty())
        .ok_or_else(|| AppError::Unauthorized("Missing authorization header".to_string()))?;

    let (scheme, token) = header
        .split_once(' ')
        .ok_or_else(|| AppError::Unauthorized("Malformed authorization header".to_string()))?;

    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AppError::Unauthorized("Expected a bearer token".to_string()));
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(AppError::Unauthorized("Missing bearer token".to_string()));
    }

    Ok(token)
}

/// Parse a `dev:<uuid>` token
pub fn parse_dev_token(token: &str) -> Option<Uuid> {
    token
        .strip_prefix(DEV_TOKEN_PREFIX)
        .and_then(|id| Uuid::parse_str(id.trim()).ok())
}

/// Create a development token for a user id (local testing only)
pub fn create_dev_token(user_id: Uuid) -> String {
    format!("{}{}", DEV_TOKEN_PREFIX, user_id)
}

/// Validates bearer tokens against the hosted auth provider
pub struct AuthClient {
    http: reqwest::Client,
    config: AuthConfig,
    dev_mode: bool,
}

impl AuthClient {
    /// `dev_mode` enables `dev:<uuid>` tokens and must only be set for local development
    pub fn new(config: AuthConfig, dev_mode: bool) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build auth HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config,
            dev_mode,
        })
    }

    fn user_endpoint(&self) -> String {
        format!("{}/auth/v1/user", self.config.provider_url)
    }

    /// Resolve a bearer token to the user it was issued for
    ///
    /// In development, `dev:<uuid>` tokens are accepted without a network call.
    pub async fn authenticate(&self, token: &str) -> AppResult<AuthUser> {
        if self.dev_mode {
            if let Some(id) = parse_dev_token(token) {
                debug!("Accepted development token for user {}", id);
                return Ok(AuthUser { id, email: None });
            }
        }

        let response = self
            .http
            .get(self.user_endpoint())
            .bearer_auth(token)
            .header("apikey", &self.config.anon_key)
            .send()
            .await
            .map_err(|e| {
                warn!("Auth provider request failed: {}", e);
                AppError::ExternalService(format!("Auth provider unreachable: {}", e))
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(AppError::Unauthorized("Invalid or expired token".to_string()));
        }
        if !status.is_success() {
            warn!("Auth provider returned {}", status);
            return Err(AppError::ExternalService(format!(
                "Auth provider returned {}",
                status
            )));
        }

        response
            .json::<AuthUser>()
            .await
            .map_err(|e| AppError::ExternalService(format!("Invalid auth provider response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_token_parsing() {
        assert_eq!(bearer_token(Some("Bearer abc.def")).unwrap(), "abc.def");
        assert_eq!(bearer_token(Some("bearer   xyz ")).unwrap(), "xyz");
        assert!(bearer_token(None).is_err());
        assert!(bearer_token(Some("")).is_err());
        assert!(bearer_token(Some("Basic dXNlcjpwYXNz")).is_err());
        assert!(bearer_token(Some("Bearer")).is_err());
        assert!(bearer_token(Some("Bearer    ")).is_err());
    }

    #[test]
    fn test_dev_token_round_trip() {
        let id = Uuid::new_v4();
        let token = create_dev_token(id);
        assert!(token.starts_with("dev:"));
        assert_eq!(parse_dev_token(&token), Some(id));
        assert_eq!(parse_dev_token("dev:not-a-uuid"), None);
        assert_eq!(parse_dev_token("eyJhbGciOiJIUzI1NiJ9"), None);
    }

    #[tokio::test]
    async fn test_dev_token_accepted_in_dev_mode() {
        let client = AuthClient::new(AuthConfig::default(), true).unwrap();
        let id = Uuid::new_v4();
        let user = client.authenticate(&create_dev_token(id)).await.unwrap();
        assert_eq!(user.id, id);
    }

    #[tokio::test]
    async fn test_dev_token_rejected_without_dev_mode() {
        let config = AuthConfig {
            provider_url: "http://127.0.0.1:1".to_string(),
            ..AuthConfig::default()
        };
        let client = AuthClient::new(config, false).unwrap();
        let err = client
            .authenticate(&create_dev_token(Uuid::new_v4()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::ExternalService(_)));
    }
}
