//! Message API - SMS

use tracing::{info, instrument};

use super::client::RestApi;
use super::params::Params;
use super::types::*;
use crate::error::PlivoError;

impl RestApi {
    /// Envía un mensaje
    ///
    /// Parámetros obligatorios: `src`, `dst`, `text`. Opcionales: `type`, `url`, `method`.
    #[instrument(skip(self, params))]
    pub async fn send_message(&self, params: Params) -> Result<MessageResponse, PlivoError> {
        params.ensure(&["src", "dst", "text"])?;

        let reply: MessageResponse = self.post("/Message/", params).await?;

        info!("Plivo message queued: uuids={:?}", reply.message_uuid);

        Ok(reply)
    }

    /// Parámetros obligatorios: `record_id`
    #[instrument(skip(self, params))]
    pub async fn get_message(&self, mut params: Params) -> Result<Message, PlivoError> {
        let record_id = params.require_segment("record_id")?;
        self.get(&format!("/Message/{}/", record_id), params).await
    }

    #[instrument(skip(self, params))]
    pub async fn get_messages(&self, params: Params) -> Result<MessageList, PlivoError> {
        self.get("/Message/", params).await
    }
}
