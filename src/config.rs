//! Application configuration loaded from environment variables.
//!
//! The Gemini API key is optional at startup: without it the server still
//! serves stored data, and AI-backed operations report that the coach is
//! not configured.

use std::env;

const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
const DEFAULT_PRIMARY_MODEL: &str = "gemini-2.5-flash";
const DEFAULT_FALLBACK_MODEL: &str = "gemini-2.5-flash-lite";

/// Where profile slots are persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-process map; data is lost on restart.
    Memory,
    /// Google Cloud Firestore (or the emulator).
    Firestore,
}

impl std::str::FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(StorageBackend::Memory),
            "firestore" => Ok(StorageBackend::Firestore),
            _ => Err(ConfigError::Invalid("STORAGE_BACKEND")),
        }
    }
}

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Frontend URL allowed by CORS
    pub frontend_url: String,
    /// Server port
    pub port: u16,

    // --- Storage ---
    pub storage_backend: StorageBackend,
    /// GCP project ID (only used with Firestore storage)
    pub gcp_project_id: String,

    // --- AI gateway ---
    /// Gemini API key; `None` leaves the coach unconfigured
    pub gemini_api_key: Option<String>,
    pub gemini_base_url: String,
    /// Model tried first (search-grounded)
    pub primary_model: String,
    /// Cheaper model tried when the primary fails (schema-constrained)
    pub fallback_model: String,
    /// Per-request timeout for generation calls
    pub ai_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let storage_backend = env::var("STORAGE_BACKEND")
            .unwrap_or_else(|_| "memory".to_string())
            .parse()?;

        let gcp_project_id = match storage_backend {
            StorageBackend::Firestore => {
                env::var("GCP_PROJECT_ID").map_err(|_| ConfigError::Missing("GCP_PROJECT_ID"))?
            }
            StorageBackend::Memory => {
                env::var("GCP_PROJECT_ID").unwrap_or_else(|_| "local-dev".to_string())
            }
        };

        Ok(Self {
            frontend_url: env::var("FRONTEND_URL")
                .unwrap_or_else(|_| "http://localhost:5173".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            storage_backend,
            gcp_project_id,
            gemini_api_key: env::var("GEMINI_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            primary_model: env::var("WILDCORD_PRIMARY_MODEL")
                .unwrap_or_else(|_| DEFAULT_PRIMARY_MODEL.to_string()),
            fallback_model: env::var("WILDCORD_FALLBACK_MODEL")
                .unwrap_or_else(|_| DEFAULT_FALLBACK_MODEL.to_string()),
            ai_timeout_secs: env::var("AI_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        })
    }

    /// Deterministic config for tests.
    pub fn test_default() -> Self {
        Self {
            frontend_url: "http://localhost:5173".to_string(),
            port: 8080,
            storage_backend: StorageBackend::Memory,
            gcp_project_id: "test-project".to_string(),
            gemini_api_key: Some("test_api_key".to_string()),
            gemini_base_url: "http://127.0.0.1:9".to_string(),
            primary_model: DEFAULT_PRIMARY_MODEL.to_string(),
            fallback_model: DEFAULT_FALLBACK_MODEL.to_string(),
            ai_timeout_secs: 5,
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}
