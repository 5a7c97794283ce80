use std::env;
use std::fmt;
use std::path::PathBuf;

use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api/submit";

/// Distinguishes runtime behavior for different deployments of the client.
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

/// Top-level configuration for the intake client.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub validator: ValidatorConfig,
    pub catalog_path: Option<PathBuf>,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let api_url = env::var("INTAKE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let validator = ValidatorConfig { api_url };
        validator.endpoint()?;

        let catalog_path = env::var("INTAKE_CATALOG_PATH")
            .ok()
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from);

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            validator,
            catalog_path,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Where submissions are posted.
#[derive(Debug, Clone)]
pub struct ValidatorConfig {
    pub api_url: String,
}

impl ValidatorConfig {
    pub fn endpoint(&self) -> Result<Url, ConfigError> {
        let url = Url::parse(self.api_url.trim()).map_err(|source| ConfigError::InvalidApiUrl {
            value: self.api_url.clone(),
            source: Some(source),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ConfigError::InvalidApiUrl {
                value: self.api_url.clone(),
                source: None,
            }),
        }
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidApiUrl {
        value: String,
        source: Option<url::ParseError>,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidApiUrl { value, .. } => {
                write!(f, "INTAKE_API_URL must be an http(s) URL, got '{value}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidApiUrl { source, .. } => source
                .as_ref()
                .map(|err| err as &(dyn std::error::Error + 'static)),
        }
    }
}
