use std::net::SocketAddr;

use axum::http::HeaderValue;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    pub bind_address: SocketAddr,

    /// Origins allowed to call the API from a browser. Empty disables CORS headers.
    pub cors_origins: Vec<HeaderValue>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let bind_address = std::env::var("BIND_ADDRESS")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let cors_origins = match std::env::var("CORS_ORIGINS") {
            Ok(origins) => parse_origins(&origins)?,
            Err(_) => Vec::new(),
        };

        Ok(Self {
            database_url,
            bind_address,
            cors_origins,
        })
    }
}

/// Parses a comma separated origin list, skipping empty entries.
fn parse_origins(origins: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(|origin| {
            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidValue {
                var: "CORS_ORIGINS".to_string(),
                reason: format!("'{}': {}", origin, e),
            })
        })
        .collect()
}
