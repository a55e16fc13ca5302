//! Number API - Números propios, búsqueda y alquiler

use tracing::{info, instrument};

use super::client::RestApi;
use super::params::Params;
use super::types::*;
use crate::error::PlivoError;

impl RestApi {
    #[instrument(skip(self, params))]
    pub async fn get_numbers(&self, params: Params) -> Result<NumberList, PlivoError> {
        self.get("/Number/", params).await
    }

    /// Busca números individuales disponibles
    #[deprecated(note = "use search_number_group instead")]
    #[instrument(skip(self, params))]
    pub async fn search_numbers(&self, params: Params) -> Result<NumberList, PlivoError> {
        self.get("/AvailableNumber/", params).await
    }

    /// Busca grupos de números disponibles (country_iso, number_type, prefix, ...)
    #[instrument(skip(self, params))]
    pub async fn search_number_group(&self, params: Params) -> Result<NumberGroupList, PlivoError> {
        self.get("/AvailableNumberGroup/", params).await
    }

    /// Parámetros obligatorios: `number`
    #[instrument(skip(self, params))]
    pub async fn get_number(&self, mut params: Params) -> Result<Number, PlivoError> {
        let number = params.require_segment("number")?;
        self.get(&format!("/Number/{}/", number), params).await
    }

    /// Alquila números de un grupo
    ///
    /// Parámetros obligatorios: `group_id`. Opcionales: `quantity`, `app_id`.
    #[instrument(skip(self, params))]
    pub async fn rent_from_number_group(&self, mut params: Params) -> Result<NumberResponse, PlivoError> {
        let group_id = params.require_segment("group_id")?;

        let reply: NumberResponse = self
            .post(&format!("/AvailableNumberGroup/{}/", group_id), params)
            .await?;

        info!(
            "Plivo numbers rented: group_id={}, count={}",
            group_id,
            reply.numbers.len()
        );

        Ok(reply)
    }

    /// Parámetros obligatorios: `number`
    #[instrument(skip(self, params))]
    pub async fn unrent_number(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let number = params.require_segment("number")?;
        let reply = self.delete(&format!("/Number/{}/", number), params).await?;

        info!("Plivo number unrented: number={}", number);

        Ok(reply)
    }

    /// Asocia una aplicación a un número
    ///
    /// Parámetros obligatorios: `number`. Opcional: `app_id`.
    #[instrument(skip(self, params))]
    pub async fn link_application_number(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let number = params.require_segment("number")?;
        self.post(&format!("/Number/{}/", number), params).await
    }

    /// Desasocia la aplicación de un número enviando `app_id` vacío
    ///
    /// Parámetros obligatorios: `number`
    #[instrument(skip(self, params))]
    pub async fn unlink_application_number(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let number = params.require_segment("number")?;
        params.force("app_id", "");
        self.post(&format!("/Number/{}/", number), params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rent_requires_group_id() {
        let api = RestApi::new("MAXXXXXXXXXXXXXXXXXXXX", "tokenvalue").unwrap();

        let err = api
            .rent_from_number_group(Params::new().set("quantity", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, PlivoError::MissingParameter(ref k) if k == "group_id"));
    }
}
