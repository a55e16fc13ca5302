//! Endpoint API - Credenciales SIP

use tracing::{info, instrument};

use super::client::RestApi;
use super::params::Params;
use super::types::*;
use crate::error::PlivoError;

impl RestApi {
    #[instrument(skip(self, params))]
    pub async fn get_endpoints(&self, params: Params) -> Result<EndpointList, PlivoError> {
        self.get("/Endpoint/", params).await
    }

    /// Crea un endpoint SIP
    ///
    /// Parámetros obligatorios: `username`, `password`, `alias`. Opcional: `app_id`.
    #[instrument(skip(self, params))]
    pub async fn create_endpoint(&self, params: Params) -> Result<CreateEndpoint, PlivoError> {
        params.ensure(&["username", "password", "alias"])?;

        let reply: CreateEndpoint = self.post("/Endpoint/", params).await?;

        info!(
            "Plivo endpoint created: endpoint_id={}, username={}",
            reply.endpoint_id.as_deref().unwrap_or("-"),
            reply.username.as_deref().unwrap_or("-")
        );

        Ok(reply)
    }

    /// Parámetros obligatorios: `endpoint_id`
    #[instrument(skip(self, params))]
    pub async fn get_endpoint(&self, mut params: Params) -> Result<Endpoint, PlivoError> {
        let endpoint_id = params.require_segment("endpoint_id")?;
        self.get(&format!("/Endpoint/{}/", endpoint_id), params).await
    }

    /// Parámetros obligatorios: `endpoint_id`
    #[instrument(skip(self, params))]
    pub async fn modify_endpoint(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let endpoint_id = params.require_segment("endpoint_id")?;
        self.post(&format!("/Endpoint/{}/", endpoint_id), params).await
    }

    /// Parámetros obligatorios: `endpoint_id`
    #[instrument(skip(self, params))]
    pub async fn delete_endpoint(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let endpoint_id = params.require_segment("endpoint_id")?;
        let reply = self.delete(&format!("/Endpoint/{}/", endpoint_id), params).await?;

        info!("Plivo endpoint deleted: endpoint_id={}", endpoint_id);

        Ok(reply)
    }
}
