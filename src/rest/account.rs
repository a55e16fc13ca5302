//! Account API - Cuenta principal y subcuentas

use tracing::{info, instrument};

use super::client::RestApi;
use super::params::Params;
use super::types::*;
use crate::error::PlivoError;

impl RestApi {
    /// Obtiene los datos de la cuenta autenticada
    #[instrument(skip(self))]
    pub async fn get_account(&self) -> Result<Account, PlivoError> {
        self.get("/", Params::new()).await
    }

    /// Modifica los datos de la cuenta (name, city, address, ...)
    #[instrument(skip(self, params))]
    pub async fn modify_account(&self, params: Params) -> Result<GenericResponse, PlivoError> {
        let reply = self.post("/", params).await?;
        info!("Plivo account modified: auth_id={}", self.auth_id());
        Ok(reply)
    }

    #[instrument(skip(self, params))]
    pub async fn get_subaccounts(&self, params: Params) -> Result<SubAccountList, PlivoError> {
        self.get("/Subaccount/", params).await
    }

    /// Obtiene una subcuenta
    ///
    /// Parámetros obligatorios: `subauth_id`
    #[instrument(skip(self, params))]
    pub async fn get_subaccount(&self, mut params: Params) -> Result<SubAccount, PlivoError> {
        let subauth_id = params.require_segment("subauth_id")?;
        self.get(&format!("/Subaccount/{}/", subauth_id), params).await
    }

    /// Crea una subcuenta
    ///
    /// Parámetros obligatorios: `name`. Opcional: `enabled`.
    #[instrument(skip(self, params))]
    pub async fn create_subaccount(&self, params: Params) -> Result<CreateSubAccount, PlivoError> {
        params.ensure(&["name"])?;

        let reply: CreateSubAccount = self.post("/Subaccount/", params).await?;

        info!(
            "Plivo subaccount created: auth_id={}",
            reply.auth_id.as_deref().unwrap_or("-")
        );

        Ok(reply)
    }

    /// Parámetros obligatorios: `subauth_id`
    #[instrument(skip(self, params))]
    pub async fn modify_subaccount(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let subauth_id = params.require_segment("subauth_id")?;
        let reply = self.post(&format!("/Subaccount/{}/", subauth_id), params).await?;

        info!("Plivo subaccount modified: subauth_id={}", subauth_id);

        Ok(reply)
    }

    /// Parámetros obligatorios: `subauth_id`
    #[instrument(skip(self, params))]
    pub async fn delete_subaccount(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let subauth_id = params.require_segment("subauth_id")?;
        let reply = self.delete(&format!("/Subaccount/{}/", subauth_id), params).await?;

        info!("Plivo subaccount deleted: subauth_id={}", subauth_id);

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_subaccount_requires_subauth_id() {
        let api = RestApi::new("MAXXXXXXXXXXXXXXXXXXXX", "tokenvalue").unwrap();

        let err = api.get_subaccount(Params::new()).await.unwrap_err();
        assert!(matches!(err, PlivoError::MissingParameter(ref k) if k == "subauth_id"));
    }

    #[tokio::test]
    async fn test_create_subaccount_requires_name() {
        let api = RestApi::new("MAXXXXXXXXXXXXXXXXXXXX", "tokenvalue").unwrap();

        let err = api
            .create_subaccount(Params::new().set("enabled", true))
            .await
            .unwrap_err();
        assert!(matches!(err, PlivoError::MissingParameter(ref k) if k == "name"));
    }
}
