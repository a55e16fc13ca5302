//! Pricing API

use tracing::instrument;

use super::client::RestApi;
use super::params::Params;
use super::types::Pricing;
use crate::error::PlivoError;

impl RestApi {
    /// Obtiene las tarifas de un país
    ///
    /// Parámetros obligatorios: `country_iso` (ej: "US")
    #[instrument(skip(self, params))]
    pub async fn pricing(&self, params: Params) -> Result<Pricing, PlivoError> {
        params.ensure(&["country_iso"])?;
        self.get("/Pricing/", params).await
    }
}
