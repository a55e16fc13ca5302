//! Application API

use tracing::{info, instrument};

use super::client::RestApi;
use super::params::Params;
use super::types::*;
use crate::error::PlivoError;

impl RestApi {
    #[instrument(skip(self, params))]
    pub async fn get_applications(&self, params: Params) -> Result<ApplicationList, PlivoError> {
        self.get("/Application/", params).await
    }

    /// Parámetros obligatorios: `app_id`
    #[instrument(skip(self, params))]
    pub async fn get_application(&self, mut params: Params) -> Result<Application, PlivoError> {
        let app_id = params.require_segment("app_id")?;
        self.get(&format!("/Application/{}/", app_id), params).await
    }

    /// Crea una aplicación
    ///
    /// Parámetros obligatorios: `app_name`, `answer_url`.
    #[instrument(skip(self, params))]
    pub async fn create_application(&self, params: Params) -> Result<CreateApplication, PlivoError> {
        params.ensure(&["app_name", "answer_url"])?;

        let reply: CreateApplication = self.post("/Application/", params).await?;

        info!(
            "Plivo application created: app_id={}",
            reply.app_id.as_deref().unwrap_or("-")
        );

        Ok(reply)
    }

    /// Parámetros obligatorios: `app_id`
    #[instrument(skip(self, params))]
    pub async fn modify_application(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let app_id = params.require_segment("app_id")?;
        let reply = self.post(&format!("/Application/{}/", app_id), params).await?;

        info!("Plivo application modified: app_id={}", app_id);

        Ok(reply)
    }

    /// Parámetros obligatorios: `app_id`
    #[instrument(skip(self, params))]
    pub async fn delete_application(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let app_id = params.require_segment("app_id")?;
        let reply = self.delete(&format!("/Application/{}/", app_id), params).await?;

        info!("Plivo application deleted: app_id={}", app_id);

        Ok(reply)
    }
}
