use crate::screening::CityPrecedence;
use std::env;
use std::fmt;
use std::path::PathBuf;

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

/// Top-level configuration for a screening run.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub screening: ScreeningConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let city_precedence = match env::var("SCREENING_CITY_PRECEDENCE") {
            Ok(raw) => parse_city_precedence(&raw)?,
            Err(_) => CityPrecedence::default(),
        };

        Ok(Self {
            environment,
            screening: ScreeningConfig {
                gazetteer_path: optional_path("SCREENING_GAZETTEER"),
                heuristics_path: optional_path("SCREENING_HEURISTICS"),
                profiles_path: optional_path("SCREENING_PROFILES"),
                city_precedence,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Locations of the swappable data tables and the city tie-break rule.
#[derive(Debug, Clone, Default)]
pub struct ScreeningConfig {
    pub gazetteer_path: Option<PathBuf>,
    pub heuristics_path: Option<PathBuf>,
    pub profiles_path: Option<PathBuf>,
    pub city_precedence: CityPrecedence,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

fn optional_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

fn parse_city_precedence(raw: &str) -> Result<CityPrecedence, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "gazetteer" | "gazetteer-order" => Ok(CityPrecedence::GazetteerOrder),
        "text" | "text-position" => Ok(CityPrecedence::TextPosition),
        other => Err(ConfigError::InvalidCityPrecedence(other.to_string())),
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCityPrecedence(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCityPrecedence(value) => write!(
                f,
                "SCREENING_CITY_PRECEDENCE must be 'gazetteer' or 'text', got '{}'",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
