// Centralized configuration management for the salon backend
// All environment variables are loaded ONCE at startup into CONFIG

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::env;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Global application configuration loaded once at startup
pub static CONFIG: Lazy<AppConfig> = Lazy::new(|| {
    // For tests, load .env file first
    #[cfg(test)]
    dotenv::dotenv().ok();

    AppConfig::from_env().expect("Failed to load configuration")
});

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub auth: AuthTokenConfig,
    pub guard: GuardConfig,
    pub mailer: MailerConfig,
    pub cors_allowed_origins: Vec<String>,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub port: u16,
    pub environment: Environment,
    pub rust_log: String,
}

/// Environment type
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            "production" | "prod" => Environment::Production,
            _ => Environment::Development,
        }
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Staging => write!(f, "staging"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Access token configuration
///
/// The same process mints and verifies panel tokens, so a single secret
/// covers both sides.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthTokenConfig {
    pub secret: String,
    pub token_expiry: u64,
}

/// Route guard configuration
///
/// Paths gated at the navigation edge. The guard only tests artifact
/// presence; validity is decided by the token validator on API calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Prefix of the authenticated panel area
    pub protected_prefix: String,
    /// Prefix of the login area
    pub login_prefix: String,
    /// Where unauthenticated panel navigation lands
    pub login_path: String,
    /// Where authenticated login-area navigation lands
    pub home_path: String,
    /// Cookie holding the token artifact
    pub cookie_name: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            protected_prefix: "/bms".to_string(),
            login_prefix: "/auth".to_string(),
            login_path: "/auth/login".to_string(),
            home_path: "/bms/reservations".to_string(),
            cookie_name: "tokens".to_string(),
        }
    }
}

/// Mailer configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailerConfig {
    pub api_url: String,
    pub api_key: String,
    pub from_email: String,
    pub from_name: String,
    pub support_email: String,
    /// Public marketing site URL used in email links
    pub site_url: String,
    /// Business panel URL used in email links
    pub panel_url: String,
}

impl MailerConfig {
    /// Whether delivery credentials were supplied
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty()
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let get_required = |key: &str| -> Result<String, ConfigError> {
            env::var(key).map_err(|_| ConfigError::MissingVar(key.to_string()))
        };

        let get_or_default = |key: &str, default: &str| -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let parse_u64_or_default = |key: &str, default: &str| -> Result<u64, ConfigError> {
            get_or_default(key, default).parse().map_err(|_| {
                ConfigError::InvalidValue(key.to_string(), "not a valid u64".to_string())
            })
        };

        // Parse bind address to extract port
        let bind_address = get_or_default("BIND_ADDRESS", "0.0.0.0:8080");
        let port = bind_address
            .rsplit(':')
            .next()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8080);

        let environment = Environment::from(get_or_default("ENVIRONMENT", "development"));
        let rust_log = get_or_default("RUST_LOG", "info");

        // Token secret validation: the validator cannot safely decide any
        // request with a weak or missing secret, so refuse to start.
        let secret = get_required("AUTH_TOKEN_SECRET")?;
        if secret.len() < 32 {
            return Err(ConfigError::InvalidValue(
                "AUTH_TOKEN_SECRET".to_string(),
                "Secret must be at least 32 characters long".to_string(),
            ));
        }
        let token_expiry = parse_u64_or_default("AUTH_TOKEN_EXPIRY", "3600")?;

        let guard_defaults = GuardConfig::default();
        let guard = GuardConfig {
            protected_prefix: get_or_default(
                "GUARD_PROTECTED_PREFIX",
                &guard_defaults.protected_prefix,
            ),
            login_prefix: get_or_default("GUARD_LOGIN_PREFIX", &guard_defaults.login_prefix),
            login_path: get_or_default("GUARD_LOGIN_PATH", &guard_defaults.login_path),
            home_path: get_or_default("GUARD_HOME_PATH", &guard_defaults.home_path),
            cookie_name: get_or_default("GUARD_TOKEN_COOKIE", &guard_defaults.cookie_name),
        };

        let cors_allowed_origins: Vec<String> = get_or_default("CORS_ALLOWED_ORIGINS", "*")
            .split(',')
            .map(|s| s.trim().to_string())
            .collect();

        let mailer = MailerConfig {
            api_url: get_or_default("MAIL_API_URL", "https://api.resend.com/emails"),
            // Optional: without a key the service still starts and /healthz
            // reports mail as unconfigured.
            api_key: get_or_default("MAIL_API_KEY", ""),
            from_email: get_or_default("MAIL_FROM_ADDRESS", "noreply@salon.example"),
            from_name: get_or_default("MAIL_FROM_NAME", "Salon Platform"),
            support_email: get_or_default("SUPPORT_EMAIL", "support@salon.example"),
            site_url: get_or_default("SITE_URL", "http://localhost:3000"),
            panel_url: get_or_default("PANEL_URL", "http://localhost:3001"),
        };

        Ok(Self {
            server: ServerConfig {
                bind_address,
                port,
                environment,
                rust_log,
            },
            auth: AuthTokenConfig {
                secret,
                token_expiry,
            },
            guard,
            mailer,
            cors_allowed_origins,
        })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.server.environment == Environment::Production
    }

    /// Check if running in development
    pub fn is_development(&self) -> bool {
        self.server.environment == Environment::Development
    }
}

/// Get the global configuration instance
pub fn config() -> &'static AppConfig {
    &CONFIG
}
