use std::env;
use std::time::Duration;

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    pub max_lifetime_secs: u64,
    pub test_before_acquire: bool,
    pub migrations_path: String,
}

/// Hosted auth provider configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Base URL of the auth provider (the `/auth/v1/user` endpoint is appended)
    pub provider_url: String,
    pub anon_key: String,
}

/// External LLM used for planning suggestions
#[derive(Debug, Clone)]
pub struct AiConfig {
    pub api_url: String,
    pub api_key: Option<String>,
    pub model: String,
    pub timeout_secs: u64,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub ai: AiConfig,
    pub log_level: String,
    pub http_port: u16,
    pub environment: String,
    /// Accept `dev:<uuid>` bearer tokens; set only when ENVIRONMENT is explicitly `development`
    pub dev_auth: bool,
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse::<T>().ok())
}

impl DatabaseConfig {
    /// Create database config from environment variables
    pub fn from_env() -> Result<Self, String> {
        let url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL environment variable is required")?;

        let max_connections = env_parse::<u32>("DATABASE_MAX_CONNECTIONS").unwrap_or(10);
        let acquire_timeout_secs = env_parse::<u64>("DATABASE_ACQUIRE_TIMEOUT_SECS").unwrap_or(30);
        let idle_timeout_secs = env_parse::<u64>("DATABASE_IDLE_TIMEOUT_SECS").unwrap_or(600); // 10 minutes
        let max_lifetime_secs = env_parse::<u64>("DATABASE_MAX_LIFETIME_SECS").unwrap_or(1800); // 30 minutes
        let test_before_acquire = env_parse::<bool>("DATABASE_TEST_BEFORE_ACQUIRE").unwrap_or(true);
        let migrations_path =
            env::var("MIGRATIONS_PATH").unwrap_or_else(|_| "./migrations".to_string());

        let config = Self {
            url,
            max_connections,
            acquire_timeout_secs,
            idle_timeout_secs,
            max_lifetime_secs,
            test_before_acquire,
            migrations_path,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        if self.max_connections == 0 {
            return Err("DATABASE_MAX_CONNECTIONS must be greater than 0".to_string());
        }

        if self.acquire_timeout_secs == 0 {
            return Err("DATABASE_ACQUIRE_TIMEOUT_SECS must be greater than 0".to_string());
        }

        Ok(())
    }

    /// Get acquire timeout as Duration
    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    /// Get idle timeout as Duration
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    /// Get max lifetime as Duration
    pub fn max_lifetime(&self) -> Duration {
        Duration::from_secs(self.max_lifetime_secs)
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "postgresql://localhost/planora".to_string(),
            max_connections: 10,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
            test_before_acquire: true,
            migrations_path: "./migrations".to_string(),
        }
    }
}

impl AuthConfig {
    /// Read auth provider settings. The provider URL may only be omitted when
    /// `dev:<uuid>` tokens are accepted locally.
    pub fn from_env(dev_auth: bool) -> Result<Self, String> {
        let provider_url = match env::var("AUTH_PROVIDER_URL") {
            Ok(url) if !url.trim().is_empty() => url.trim().trim_end_matches('/').to_string(),
            _ if dev_auth => "http://localhost:54321".to_string(),
            _ => return Err("AUTH_PROVIDER_URL environment variable is required".to_string()),
        };

        let anon_key = env::var("AUTH_PROVIDER_ANON_KEY").unwrap_or_default();

        Ok(Self {
            provider_url,
            anon_key,
        })
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            provider_url: "http://localhost:54321".to_string(),
            anon_key: String::new(),
        }
    }
}

impl AiConfig {
    pub fn from_env() -> Result<Self, String> {
        let defaults = Self::default();

        let api_url = env::var("AI_API_URL").unwrap_or(defaults.api_url);
        let api_key = env::var("AI_API_KEY").ok().filter(|k| !k.trim().is_empty());
        let model = env::var("AI_MODEL").unwrap_or(defaults.model);
        let timeout_secs = env_parse::<u64>("AI_TIMEOUT_SECS").unwrap_or(defaults.timeout_secs);

        if timeout_secs == 0 {
            return Err("AI_TIMEOUT_SECS must be greater than 0".to_string());
        }

        Ok(Self {
            api_url,
            api_key,
            model,
            timeout_secs,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Whether a remote call should be attempted at all
    pub fn is_enabled(&self) -> bool {
        self.api_key.is_some()
    }
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            api_url: "https://api.openai.com/v1/chat/completions".to_string(),
            api_key: None,
            model: "gpt-4o-mini".to_string(),
            timeout_secs: 15,
        }
    }
}

impl AppConfig {
    /// Create application config from environment variables
    pub fn from_env() -> Result<Self, String> {
        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let http_port = env_parse::<u16>("HTTP_PORT").unwrap_or(8080);

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        // Validate log level
        let valid_log_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_log_levels.contains(&log_level.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid LOG_LEVEL: {}. Must be one of: {:?}",
                log_level, valid_log_levels
            ));
        }

        // Validate environment
        let valid_environments = ["development", "staging", "production"];
        if !valid_environments.contains(&environment.to_lowercase().as_str()) {
            return Err(format!(
                "Invalid ENVIRONMENT: {}. Must be one of: {:?}",
                environment, valid_environments
            ));
        }
        let environment = environment.to_lowercase();

        let database = DatabaseConfig::from_env()?;
        let dev_auth = dev_auth_enabled(env::var("ENVIRONMENT").ok().as_deref());
        let auth = AuthConfig::from_env(dev_auth)?;
        let ai = AiConfig::from_env()?;

        Ok(Self {
            database,
            auth,
            ai,
            log_level: log_level.to_lowercase(),
            http_port,
            environment,
            dev_auth,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Check if running in development
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            ai: AiConfig::default(),
            log_level: "info".to_string(),
            http_port: 8080,
            environment: "development".to_string(),
            dev_auth: false,
        }
    }
}

/// Development tokens are only honoured when ENVIRONMENT is set to `development`, never by default
pub fn dev_auth_enabled(environment: Option<&str>) -> bool {
    environment.is_some_and(|v| v.trim().eq_ignore_ascii_case("development"))
}
