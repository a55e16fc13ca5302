//! Call API - CDRs, llamadas en curso y control de llamadas

use tracing::{info, instrument};

use super::client::RestApi;
use super::params::Params;
use super::types::*;
use crate::error::PlivoError;

/// Separator the platform expects between bulk-call destinations
const BULK_SEPARATOR: &str = "<";

impl RestApi {
    // ------------------------------------------------------------------
    // CDRs
    // ------------------------------------------------------------------

    /// Lista los CDRs (filtros: call_direction, from_number, bill_duration, limit, offset...)
    #[instrument(skip(self, params))]
    pub async fn get_cdrs(&self, params: Params) -> Result<CdrList, PlivoError> {
        self.get("/Call/", params).await
    }

    /// Parámetros obligatorios: `record_id`
    #[instrument(skip(self, params))]
    pub async fn get_cdr(&self, mut params: Params) -> Result<Cdr, PlivoError> {
        let record_id = params.require_segment("record_id")?;
        self.get(&format!("/Call/{}/", record_id), params).await
    }

    // ------------------------------------------------------------------
    // Live calls
    // ------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn get_live_calls(&self) -> Result<LiveCallList, PlivoError> {
        self.get("/Call/", Params::new().set("status", "live")).await
    }

    /// Parámetros obligatorios: `call_uuid`
    #[instrument(skip(self, params))]
    pub async fn get_live_call(&self, mut params: Params) -> Result<LiveCall, PlivoError> {
        let call_uuid = params.require_segment("call_uuid")?;
        params.insert("status", "live");
        self.get(&format!("/Call/{}/", call_uuid), params).await
    }

    // ------------------------------------------------------------------
    // Outbound calls
    // ------------------------------------------------------------------

    /// Origina una llamada
    ///
    /// Parámetros obligatorios: `from`, `to`, `answer_url`.
    #[instrument(skip(self, params))]
    pub async fn make_call(&self, params: Params) -> Result<Call, PlivoError> {
        params.ensure(&["from", "to", "answer_url"])?;

        let reply: Call = self.post("/Call/", params).await?;

        info!(
            "Plivo call queued: request_uuid={}",
            reply.request_uuid.as_deref().unwrap_or("-")
        );

        Ok(reply)
    }

    /// Origina varias llamadas en una sola petición
    ///
    /// # Arguments
    ///
    /// * `params` - Parámetros comunes; obligatorios `from` y `answer_url`
    /// * `destinations` - Pares (destino, cabeceras SIP) en orden de marcación
    #[instrument(skip(self, params, destinations), fields(count = destinations.len()))]
    pub async fn make_bulk_call(
        &self,
        mut params: Params,
        destinations: &[(&str, &str)],
    ) -> Result<BulkCall, PlivoError> {
        if destinations.is_empty() {
            return Err(PlivoError::MissingParameter("to".to_string()));
        }
        params.ensure(&["from", "answer_url"])?;

        let to = destinations
            .iter()
            .map(|(number, _)| *number)
            .collect::<Vec<_>>()
            .join(BULK_SEPARATOR);
        let sip_headers = destinations
            .iter()
            .map(|(_, headers)| *headers)
            .collect::<Vec<_>>()
            .join(BULK_SEPARATOR);

        params.insert("to", to);
        params.insert("sip_headers", sip_headers);

        let reply: BulkCall = self.post("/Call/", params).await?;

        info!("Plivo bulk call queued: requests={}", reply.request_uuid.len());

        Ok(reply)
    }

    // ------------------------------------------------------------------
    // Call control
    // ------------------------------------------------------------------

    #[instrument(skip(self))]
    pub async fn hangup_all_calls(&self) -> Result<GenericResponse, PlivoError> {
        let reply = self.delete("/Call/", Params::new()).await?;
        info!("Plivo all calls hung up");
        Ok(reply)
    }

    /// Parámetros obligatorios: `call_uuid`
    #[instrument(skip(self, params))]
    pub async fn hangup_call(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let call_uuid = params.require_segment("call_uuid")?;
        let reply = self.delete(&format!("/Call/{}/", call_uuid), params).await?;

        info!("Plivo call hung up: call_uuid={}", call_uuid);

        Ok(reply)
    }

    /// Transfiere una llamada en curso a otra URL (legs, aleg_url, bleg_url...)
    ///
    /// Parámetros obligatorios: `call_uuid`
    #[instrument(skip(self, params))]
    pub async fn transfer_call(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let call_uuid = params.require_segment("call_uuid")?;
        let reply = self.post(&format!("/Call/{}/", call_uuid), params).await?;

        info!("Plivo call transferred: call_uuid={}", call_uuid);

        Ok(reply)
    }

    /// Parámetros obligatorios: `call_uuid`
    #[instrument(skip(self, params))]
    pub async fn record(&self, mut params: Params) -> Result<Recording, PlivoError> {
        let call_uuid = params.require_segment("call_uuid")?;
        self.post(&format!("/Call/{}/Record/", call_uuid), params).await
    }

    /// Parámetros obligatorios: `call_uuid`
    #[instrument(skip(self, params))]
    pub async fn stop_record(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let call_uuid = params.require_segment("call_uuid")?;
        self.delete(&format!("/Call/{}/Record/", call_uuid), params).await
    }

    /// Reproduce audio en la llamada
    ///
    /// Parámetros obligatorios: `call_uuid`, `urls`
    #[instrument(skip(self, params))]
    pub async fn play(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let call_uuid = params.require_segment("call_uuid")?;
        params.ensure(&["urls"])?;
        self.post(&format!("/Call/{}/Play/", call_uuid), params).await
    }

    /// Parámetros obligatorios: `call_uuid`
    #[instrument(skip(self, params))]
    pub async fn stop_play(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let call_uuid = params.require_segment("call_uuid")?;
        self.delete(&format!("/Call/{}/Play/", call_uuid), params).await
    }

    /// Parámetros obligatorios: `call_uuid`, `text`
    #[instrument(skip(self, params))]
    pub async fn speak(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let call_uuid = params.require_segment("call_uuid")?;
        params.ensure(&["text"])?;
        self.post(&format!("/Call/{}/Speak/", call_uuid), params).await
    }

    /// Parámetros obligatorios: `call_uuid`
    #[instrument(skip(self, params))]
    pub async fn stop_speak(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let call_uuid = params.require_segment("call_uuid")?;
        self.delete(&format!("/Call/{}/Speak/", call_uuid), params).await
    }

    /// Envía dígitos DTMF
    ///
    /// Parámetros obligatorios: `call_uuid`, `digits`
    #[instrument(skip(self, params))]
    pub async fn send_digits(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let call_uuid = params.require_segment("call_uuid")?;
        params.ensure(&["digits"])?;
        self.post(&format!("/Call/{}/DTMF/", call_uuid), params).await
    }
}
