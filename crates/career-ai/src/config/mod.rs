use std::env;
use std::fmt;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub provider: ProviderConfig,
    pub advice: AdviceConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let budget_ms = match env::var("ADVICE_BUDGET_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidAdviceBudget { value: raw })?,
            Err(_) => DEFAULT_ADVICE_BUDGET_MS,
        };

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            provider: ProviderConfig::from_env(),
            advice: AdviceConfig { budget_ms },
        })
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

/// Wall-clock budget granted to the external advice attempt before the local
/// fallback takes over.
pub const DEFAULT_ADVICE_BUDGET_MS: u64 = 800;

#[derive(Debug, Clone)]
pub struct AdviceConfig {
    pub budget_ms: u64,
}

impl AdviceConfig {
    pub fn budget(&self) -> Duration {
        Duration::from_millis(self.budget_ms)
    }
}

/// Settings for the optional external text-generation provider. The
/// credentials path acts purely as an availability marker, mirroring how the
/// deployment environment advertises that a service account is mounted.
#[derive(Debug, Clone)]
pub struct ProviderConfig {
    pub credentials: Option<String>,
    pub project: Option<String>,
    pub location: String,
    pub model: String,
    pub access_token: Option<String>,
}

impl ProviderConfig {
    pub fn from_env() -> Self {
        Self {
            credentials: env::var("GOOGLE_APPLICATION_CREDENTIALS").ok(),
            project: env::var("GOOGLE_CLOUD_PROJECT").ok(),
            location: env::var("VERTEX_LOCATION").unwrap_or_else(|_| "us-central1".to_string()),
            model: env::var("VERTEX_MODEL_ID").unwrap_or_else(|_| "text-bison@001".to_string()),
            access_token: env::var("VERTEX_ACCESS_TOKEN").ok(),
        }
    }

    /// True when enough of the environment is present to attempt external
    /// generation at all.
    pub fn is_configured(&self) -> bool {
        self.credentials.is_some() && self.project.is_some()
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidAdviceBudget { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidAdviceBudget { value } => {
                write!(f, "invalid ADVICE_BUDGET_MS '{value}': expected milliseconds")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
