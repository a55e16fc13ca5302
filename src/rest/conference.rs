//! Conference API - Conferencias en curso y control de miembros

use tracing::{info, instrument};

use super::client::RestApi;
use super::params::Params;
use super::types::*;
use crate::error::PlivoError;

/// Extrae `conference_name` y `member_id` y construye la ruta del miembro
fn member_path(params: &mut Params, action: &str) -> Result<String, PlivoError> {
    let conference_name = params.require_segment("conference_name")?;
    let member_id = params.require_segment("member_id")?;
    Ok(format!(
        "/Conference/{}/Member/{}/{}",
        conference_name, member_id, action
    ))
}

impl RestApi {
    #[instrument(skip(self))]
    pub async fn get_live_conferences(&self) -> Result<LiveConferenceList, PlivoError> {
        self.get("/Conference/", Params::new()).await
    }

    #[instrument(skip(self))]
    pub async fn hangup_all_conferences(&self) -> Result<GenericResponse, PlivoError> {
        let reply = self.delete("/Conference/", Params::new()).await?;
        info!("Plivo all conferences hung up");
        Ok(reply)
    }

    /// Parámetros obligatorios: `conference_name`
    #[instrument(skip(self, params))]
    pub async fn get_live_conference(&self, mut params: Params) -> Result<Conference, PlivoError> {
        let conference_name = params.require_segment("conference_name")?;
        self.get(&format!("/Conference/{}/", conference_name), params).await
    }

    /// Parámetros obligatorios: `conference_name`
    #[instrument(skip(self, params))]
    pub async fn hangup_conference(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let conference_name = params.require_segment("conference_name")?;
        let reply = self
            .delete(&format!("/Conference/{}/", conference_name), params)
            .await?;

        info!("Plivo conference hung up: conference_name={}", conference_name);

        Ok(reply)
    }

    // ------------------------------------------------------------------
    // Members (conference_name + member_id obligatorios)
    // ------------------------------------------------------------------

    #[instrument(skip(self, params))]
    pub async fn hangup_member(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let path = member_path(&mut params, "")?;
        self.delete(&path, params).await
    }

    /// Parámetro adicional obligatorio: `urls`
    #[instrument(skip(self, params))]
    pub async fn play_member(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let path = member_path(&mut params, "Play/")?;
        params.ensure(&["urls"])?;
        self.post(&path, params).await
    }

    #[instrument(skip(self, params))]
    pub async fn stop_play_member(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let path = member_path(&mut params, "Play/")?;
        self.delete(&path, params).await
    }

    /// Parámetro adicional obligatorio: `text`
    #[instrument(skip(self, params))]
    pub async fn speak_member(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let path = member_path(&mut params, "Speak/")?;
        params.ensure(&["text"])?;
        self.post(&path, params).await
    }

    #[instrument(skip(self, params))]
    pub async fn deaf_member(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let path = member_path(&mut params, "Deaf/")?;
        self.post(&path, params).await
    }

    #[instrument(skip(self, params))]
    pub async fn undeaf_member(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let path = member_path(&mut params, "Deaf/")?;
        self.delete(&path, params).await
    }

    #[instrument(skip(self, params))]
    pub async fn mute_member(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let path = member_path(&mut params, "Mute/")?;
        self.post(&path, params).await
    }

    #[instrument(skip(self, params))]
    pub async fn unmute_member(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let path = member_path(&mut params, "Mute/")?;
        self.delete(&path, params).await
    }

    #[instrument(skip(self, params))]
    pub async fn kick_member(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let path = member_path(&mut params, "Kick/")?;
        let reply = self.post(&path, params).await?;

        info!("Plivo conference member kicked: path={}", path);

        Ok(reply)
    }

    // ------------------------------------------------------------------
    // Recording
    // ------------------------------------------------------------------

    /// Parámetros obligatorios: `conference_name`
    #[instrument(skip(self, params))]
    pub async fn record_conference(&self, mut params: Params) -> Result<Recording, PlivoError> {
        let conference_name = params.require_segment("conference_name")?;
        self.post(&format!("/Conference/{}/Record/", conference_name), params)
            .await
    }

    /// Parámetros obligatorios: `conference_name`
    #[instrument(skip(self, params))]
    pub async fn stop_record_conference(&self, mut params: Params) -> Result<GenericResponse, PlivoError> {
        let conference_name = params.require_segment("conference_name")?;
        self.delete(&format!("/Conference/{}/Record/", conference_name), params)
            .await
    }
}
