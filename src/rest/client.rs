//! Cliente HTTP REST para Plivo
//!
//! Proporciona comunicación de bajo nivel con la API: autenticación básica,
//! serialización de parámetros y deserialización de la respuesta JSON.

use reqwest::{Client, ClientBuilder, Method};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, error, instrument, warn};

use super::params::Params;
use super::types::ApiErrorBody;
use crate::config::ClientConfig;
use crate::error::PlivoError;

const USER_AGENT: &str = concat!("plivo-rust/", env!("CARGO_PKG_VERSION"));

/// Cómo tratar una respuesta 2xx cuyo cuerpo no es JSON
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EmptyBody {
    Reject,
    /// The platform answers several DELETE actions with an empty body
    /// instead of a JSON document. Those resolve to `T::default()`.
    Accept,
}

/// Cliente para la API REST de Plivo
pub struct RestApi {
    http_client: Client,
    base_url: String,
    auth_id: String,
    auth_token: String,
    version: String,
    timeout_ms: u64,
}

impl RestApi {
    /// Crea un nuevo cliente con la versión de API por defecto (`v1`)
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let api = RestApi::new("MAXXXXXXXXXXXXXXXXXXXX", "tokenvalue")?;
    /// let account = api.get_account().await?;
    /// ```
    pub fn new(auth_id: &str, auth_token: &str) -> Result<Self, PlivoError> {
        Self::with_config(ClientConfig::new(auth_id, auth_token))
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, PlivoError> {
        let http_client = ClientBuilder::new()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| PlivoError::Connection(e.to_string()))?;

        Ok(Self {
            http_client,
            base_url: config.account_url(),
            auth_id: config.auth_id,
            auth_token: config.auth_token,
            version: config.version,
            timeout_ms: config.timeout_ms,
        })
    }

    /// Crea un cliente desde variables de entorno (ver `ClientConfig::from_env`)
    pub fn from_env() -> Result<Self, PlivoError> {
        Self::with_config(ClientConfig::from_env()?)
    }

    pub fn auth_id(&self) -> &str {
        &self.auth_id
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) async fn get<R>(&self, resource: &str, params: Params) -> Result<R, PlivoError>
    where
        R: DeserializeOwned + Default,
    {
        self.request(Method::GET, resource, params, EmptyBody::Reject).await
    }

    pub(crate) async fn post<R>(&self, resource: &str, params: Params) -> Result<R, PlivoError>
    where
        R: DeserializeOwned + Default,
    {
        self.request(Method::POST, resource, params, EmptyBody::Reject).await
    }

    pub(crate) async fn delete<R>(&self, resource: &str, params: Params) -> Result<R, PlivoError>
    where
        R: DeserializeOwned + Default,
    {
        self.request(Method::DELETE, resource, params, EmptyBody::Accept).await
    }

    /// Ejecuta una petición contra la API de Plivo
    ///
    /// # Arguments
    ///
    /// * `method` - GET, POST o DELETE
    /// * `resource` - Ruta relativa a la cuenta (ej: "/Call/{uuid}/")
    /// * `params` - GET/DELETE los envían en la query string, POST como cuerpo JSON
    /// * `empty_body` - Si un cuerpo 2xx vacío o no-JSON cuenta como éxito
    #[instrument(skip(self, params), fields(method = %method, resource = %resource))]
    pub(crate) async fn request<R>(
        &self,
        method: Method,
        resource: &str,
        params: Params,
        empty_body: EmptyBody,
    ) -> Result<R, PlivoError>
    where
        R: DeserializeOwned + Default,
    {
        let url = format!("{}{}", self.base_url, resource);

        let builder = match method {
            Method::POST => self.http_client.post(&url).json(&params),
            Method::DELETE => self.http_client.delete(&url).query(&params),
            _ => self.http_client.get(&url).query(&params),
        };

        debug!("Plivo request: method={}, url={}, params={:?}", method, url, params);

        let response = builder
            .basic_auth(&self.auth_id, Some(&self.auth_token))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    PlivoError::Timeout(self.timeout_ms)
                } else {
                    PlivoError::Connection(e.to_string())
                }
            })?;

        let status = response.status();

        let body = response.text().await.map_err(|e| {
            PlivoError::ParseError(format!("Failed to read response body: {}", e))
        })?;

        debug!("Plivo response: status={}, body={}", status, body);

        if !status.is_success() {
            let parsed = serde_json::from_str::<ApiErrorBody>(&body).ok();
            let message = parsed
                .as_ref()
                .and_then(ApiErrorBody::message)
                .unwrap_or_else(|| body.clone());
            let api_id = parsed.and_then(|p| p.api_id).unwrap_or_default();

            error!("Plivo HTTP error: status={}, api_id={}, message={}", status, api_id, message);
            return Err(PlivoError::Api {
                status: status.as_u16(),
                message,
            });
        }

        match serde_json::from_str::<R>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) if empty_body == EmptyBody::Accept => {
                if !body.trim().is_empty() {
                    warn!("Plivo returned a non-JSON body for {} {}: {}", method, resource, e);
                }
                Ok(R::default())
            }
            Err(e) => Err(PlivoError::ParseError(format!(
                "Failed to parse JSON: {} - Body: {}",
                e, body
            ))),
        }
    }
}
