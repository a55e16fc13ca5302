//! Carrier API - Carriers entrantes, salientes y sus rutas

use tracing::{info, instrument};

use super::client::RestApi;
use super::params::Params;
use super::types::*;
use crate::error::PlivoError;

impl RestApi {
    // ------------------------------------------------------------------
    // Incoming carriers
    // ------------------------------------------------------------------

    #[instrument(skip(self, params))]
    pub async fn get_incoming_carriers(&self, params: Params) -> Result<IncomingCarrierList, PlivoError> {
        self.get("/IncomingCarrier/", params).await
    }

    /// Parámetros obligatorios: `carrier_id`
    #[instrument(skip(self, params))]
    pub async fn get_incoming_carrier(&self, mut params: Params) -> Result<IncomingCarrier, PlivoError> {
        let carrier_id = params.require_segment("carrier_id")?;
        self.get(&format!("/IncomingCarrier/{}/", carrier_id), params).await
    }

    #[instrument(skip(self, params))]
    pub async fn create_incoming_carrier(&self, params: Params) -> Result<GenericResponse, PlivoError> {
        let reply = self.post("/IncomingCarrier/", params).await?;
        info!("Plivo incoming carrier created");
        Ok(reply)
    }

    /// Parámetros obligatorios: `carrier_id`
    #[instrument(skip(self, params))]
    pub async fn modify_incoming_carrier(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let carrier_id = params.require_segment("carrier_id")?;
        self.post(&format!("/IncomingCarrier/{}/", carrier_id), params).await
    }

    /// Parámetros obligatorios: `carrier_id`
    #[instrument(skip(self, params))]
    pub async fn delete_incoming_carrier(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let carrier_id = params.require_segment("carrier_id")?;
        let reply = self
            .delete(&format!("/IncomingCarrier/{}/", carrier_id), params)
            .await?;

        info!("Plivo incoming carrier deleted: carrier_id={}", carrier_id);

        Ok(reply)
    }

    // ------------------------------------------------------------------
    // Outgoing carriers
    // ------------------------------------------------------------------

    #[instrument(skip(self, params))]
    pub async fn get_outgoing_carriers(&self, params: Params) -> Result<OutgoingCarrierList, PlivoError> {
        self.get("/OutgoingCarrier/", params).await
    }

    /// Parámetros obligatorios: `carrier_id`
    #[instrument(skip(self, params))]
    pub async fn get_outgoing_carrier(&self, mut params: Params) -> Result<OutgoingCarrier, PlivoError> {
        let carrier_id = params.require_segment("carrier_id")?;
        self.get(&format!("/OutgoingCarrier/{}/", carrier_id), params).await
    }

    #[instrument(skip(self, params))]
    pub async fn create_outgoing_carrier(&self, params: Params) -> Result<GenericResponse, PlivoError> {
        let reply = self.post("/OutgoingCarrier/", params).await?;
        info!("Plivo outgoing carrier created");
        Ok(reply)
    }

    /// Parámetros obligatorios: `carrier_id`
    #[instrument(skip(self, params))]
    pub async fn modify_outgoing_carrier(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let carrier_id = params.require_segment("carrier_id")?;
        self.post(&format!("/OutgoingCarrier/{}/", carrier_id), params).await
    }

    /// Parámetros obligatorios: `carrier_id`
    #[instrument(skip(self, params))]
    pub async fn delete_outgoing_carrier(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let carrier_id = params.require_segment("carrier_id")?;
        let reply = self
            .delete(&format!("/OutgoingCarrier/{}/", carrier_id), params)
            .await?;

        info!("Plivo outgoing carrier deleted: carrier_id={}", carrier_id);

        Ok(reply)
    }

    // ------------------------------------------------------------------
    // Outgoing carrier routings
    // ------------------------------------------------------------------

    #[instrument(skip(self, params))]
    pub async fn get_outgoing_carrier_routings(
        &self,
        params: Params,
    ) -> Result<OutgoingCarrierRoutingList, PlivoError> {
        self.get("/OutgoingCarrierRouting/", params).await
    }

    /// Parámetros obligatorios: `routing_id`
    #[instrument(skip(self, params))]
    pub async fn get_outgoing_carrier_routing(
        &self,
        mut params: Params,
    ) -> Result<OutgoingCarrierRouting, PlivoError> {
        let routing_id = params.require_segment("routing_id")?;
        self.get(&format!("/OutgoingCarrierRouting/{}/", routing_id), params)
            .await
    }

    #[instrument(skip(self, params))]
    pub async fn create_outgoing_carrier_routing(&self, params: Params) -> Result<GenericResponse, PlivoError> {
        let reply = self.post("/OutgoingCarrierRouting/", params).await?;
        info!("Plivo outgoing carrier routing created");
        Ok(reply)
    }

    /// Parámetros obligatorios: `routing_id`
    #[instrument(skip(self, params))]
    pub async fn modify_outgoing_carrier_routing(
        &self,
        mut params: Params,
    ) -> Result<GenericResponse, PlivoError> {
        let routing_id = params.require_segment("routing_id")?;
        self.post(&format!("/OutgoingCarrierRouting/{}/", routing_id), params)
            .await
    }

    /// Parámetros obligatorios: `routing_id`
    #[instrument(skip(self, params))]
    pub async fn delete_outgoing_carrier_routing(
        &self,
        mut params: Params,
    ) -> Result<GenericResponse, PlivoError> {
        let routing_id = params.require_segment("routing_id")?;
        let reply = self
            .delete(&format!("/OutgoingCarrierRouting/{}/", routing_id), params)
            .await?;

        info!("Plivo outgoing carrier routing deleted: routing_id={}", routing_id);

        Ok(reply)
    }
}
