// src/config.rs
use std::env;

use crate::error::PlivoError;

pub const DEFAULT_API_URL: &str = "https://api.plivo.com";
pub const DEFAULT_API_VERSION: &str = "v1";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub auth_id: String,
    pub auth_token: String,
    pub api_url: String,
    pub version: String,
    pub timeout_ms: u64,
}

impl ClientConfig {
    pub fn new(auth_id: &str, auth_token: &str) -> Self {
        Self {
            auth_id: auth_id.to_string(),
            auth_token: auth_token.to_string(),
            api_url: DEFAULT_API_URL.to_string(),
            version: DEFAULT_API_VERSION.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }

    /// Carga la configuración desde variables de entorno (y `.env` si existe)
    ///
    /// - PLIVO_AUTH_ID (obligatoria)
    /// - PLIVO_AUTH_TOKEN (obligatoria)
    /// - PLIVO_API_URL
    /// - PLIVO_API_VERSION
    /// - PLIVO_TIMEOUT_MS
    pub fn from_env() -> Result<Self, PlivoError> {
        dotenv::dotenv().ok();

        let auth_id = env::var("PLIVO_AUTH_ID")
            .map_err(|_| PlivoError::Config("PLIVO_AUTH_ID not set".to_string()))?;

        let auth_token = env::var("PLIVO_AUTH_TOKEN")
            .map_err(|_| PlivoError::Config("PLIVO_AUTH_TOKEN not set".to_string()))?;

        let timeout_ms: u64 = env::var("PLIVO_TIMEOUT_MS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_MS.to_string())
            .parse()
            .map_err(|_| PlivoError::Config("Invalid PLIVO_TIMEOUT_MS".to_string()))?;

        Ok(ClientConfig {
            auth_id,
            auth_token,
            api_url: env::var("PLIVO_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
            version: env::var("PLIVO_API_VERSION")
                .unwrap_or_else(|_| DEFAULT_API_VERSION.to_string()),
            timeout_ms,
        })
    }

    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    /// Root every resource path is appended to: `{api_url}/{version}/Account/{auth_id}`
    pub fn account_url(&self) -> String {
        format!("{}/{}/Account/{}", self.api_url, self.version, self.auth_id)
    }
}
