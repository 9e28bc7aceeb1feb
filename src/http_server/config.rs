//! HTTP Server Configuration
//!
//! Loaded from a JSON file. Every field has a default, so `{}` is a valid
//! config.

use std::fs;
use std::path::{Path, PathBuf};

use axum::http::HeaderValue;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{ValidationPolicy, DEFAULT_QUESTIONS_PER_PAGE};

/// Configuration loading failures
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("Invalid config JSON: {0}")]
    Parse(String),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Origins the CORS layer allows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// No list configured, or the list contains `*`
    Any,
    List(Vec<HeaderValue>),
}

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to (default: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind to (default: 5000)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Page size for `GET /questions` (default: 10)
    #[serde(default = "default_questions_per_page")]
    pub questions_per_page: usize,

    /// JSON seed file; the bundled dataset is used when unset
    #[serde(default)]
    pub seed_path: Option<PathBuf>,

    /// Fixed quiz RNG seed; OS entropy when unset
    #[serde(default)]
    pub quiz_seed: Option<u64>,

    /// Optional create-time checks
    #[serde(default)]
    pub validation: ValidationPolicy,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_questions_per_page() -> usize {
    DEFAULT_QUESTIONS_PER_PAGE
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            questions_per_page: default_questions_per_page(),
            seed_path: None,
            quiz_seed: None,
            validation: ValidationPolicy::default(),
        }
    }
}

impl ServerConfig {
    /// Create a new config with specified port
    pub fn with_port(port: u16) -> Self {
        Self {
            port,
            ..Default::default()
        }
    }

    /// Load and validate configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Read {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: ServerConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::Invalid("host cannot be empty".to_string()));
        }

        if self.questions_per_page == 0 {
            return Err(ConfigError::Invalid(
                "questions_per_page must be > 0".to_string(),
            ));
        }

        self.allowed_origins()?;

        Ok(())
    }

    /// Resolve `cors_origins` into header values. Every entry must be a
    /// valid header value; a `*` entry allows any origin.
    pub fn allowed_origins(&self) -> Result<AllowedOrigins, ConfigError> {
        let mut origins = Vec::with_capacity(self.cors_origins.len());
        for entry in &self.cors_origins {
            let origin = entry.trim();
            if origin.is_empty() {
                return Err(ConfigError::Invalid(format!(
                    "cors_origins contains an empty entry: {:?}",
                    entry
                )));
            }
            if origin == "*" {
                return Ok(AllowedOrigins::Any);
            }
            let value = HeaderValue::from_str(origin).map_err(|_| {
                ConfigError::Invalid(format!("cors_origins entry {:?} is not a valid origin", entry))
            })?;
            origins.push(value);
        }

        if origins.is_empty() {
            Ok(AllowedOrigins::Any)
        } else {
            Ok(AllowedOrigins::List(origins))
        }
    }

    /// Get the socket address string
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
