//! Tipos de datos de la API REST de Plivo
//!
//! Registros de paso: reflejan el JSON que devuelve la plataforma. Todos los
//! campos son opcionales porque el servidor omite o anula campos según el
//! recurso y el estado de la cuenta.

use serde::{Deserialize, Serialize};

// ============================================================================
// Common
// ============================================================================

/// Paginación de los listados
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Meta {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub total_count: Option<u64>,
}

impl Meta {
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|n| !n.is_empty())
    }
}

/// Envoltorio genérico de los listados (`objects` + `meta`)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ListResponse<T> {
    pub api_id: Option<String>,
    pub meta: Option<Meta>,
    pub objects: Vec<T>,
    pub error: Option<String>,
}

impl<T> Default for ListResponse<T> {
    fn default() -> Self {
        Self {
            api_id: None,
            meta: None,
            objects: Vec::new(),
            error: None,
        }
    }
}

/// Respuesta de las acciones que no devuelven un recurso
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenericResponse {
    pub api_id: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

/// Cuerpo de error que acompaña a las respuestas no-2xx
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ApiErrorBody {
    pub api_id: Option<String>,
    pub error: Option<serde_json::Value>,
}

impl ApiErrorBody {
    pub(crate) fn message(&self) -> Option<String> {
        match self.error.as_ref()? {
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Null => None,
            other => Some(other.to_string()),
        }
    }
}

// ============================================================================
// Accounts
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Account {
    pub api_id: Option<String>,
    pub account_type: Option<String>,
    pub address: Option<String>,
    pub auth_id: Option<String>,
    pub auto_recharge: Option<bool>,
    pub billing_mode: Option<String>,
    pub cash_credits: Option<String>,
    pub city: Option<String>,
    pub created: Option<String>,
    pub enabled: Option<bool>,
    pub modified: Option<String>,
    pub name: Option<String>,
    pub resource_uri: Option<String>,
    pub state: Option<String>,
    pub timezone: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SubAccount {
    pub api_id: Option<String>,
    pub account: Option<String>,
    pub auth_id: Option<String>,
    pub auth_token: Option<String>,
    pub created: Option<String>,
    pub enabled: Option<bool>,
    pub modified: Option<String>,
    pub name: Option<String>,
    pub resource_uri: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateSubAccount {
    pub api_id: Option<String>,
    pub auth_id: Option<String>,
    pub auth_token: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

// ============================================================================
// Applications
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Application {
    pub api_id: Option<String>,
    pub answer_method: Option<String>,
    pub answer_url: Option<String>,
    pub app_id: Option<String>,
    pub app_name: Option<String>,
    pub default_app: Option<bool>,
    pub enabled: Option<bool>,
    pub fallback_answer_url: Option<String>,
    pub fallback_method: Option<String>,
    pub hangup_method: Option<String>,
    pub hangup_url: Option<String>,
    pub message_method: Option<String>,
    pub message_url: Option<String>,
    pub production_app: Option<bool>,
    pub public_uri: Option<bool>,
    pub resource_uri: Option<String>,
    pub sip_uri: Option<String>,
    pub sub_account: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateApplication {
    pub api_id: Option<String>,
    pub app_id: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

// ============================================================================
// Numbers
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Number {
    pub api_id: Option<String>,
    pub added_on: Option<String>,
    pub application: Option<String>,
    pub carrier: Option<String>,
    pub fax_enabled: Option<bool>,
    pub monthly_rental_rate: Option<String>,
    pub number: Option<String>,
    pub number_type: Option<String>,
    pub region: Option<String>,
    pub resource_uri: Option<String>,
    pub sms_enabled: Option<bool>,
    pub sms_rate: Option<String>,
    pub voice_enabled: Option<bool>,
    pub voice_rate: Option<String>,
    pub error: Option<String>,
}

/// Grupo de números disponibles para alquilar
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberGroup {
    pub group_id: Option<String>,
    pub number_type: Option<String>,
    pub prefix: Option<String>,
    pub region: Option<String>,
    pub rental_rate: Option<String>,
    pub setup_rate: Option<String>,
    pub sms_enabled: Option<bool>,
    pub sms_rate: Option<String>,
    pub stock: Option<u64>,
    pub voice_enabled: Option<bool>,
    pub voice_rate: Option<String>,
    pub resource_uri: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RentedNumber {
    pub number: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberResponse {
    pub api_id: Option<String>,
    pub message: Option<String>,
    pub numbers: Vec<RentedNumber>,
    pub status: Option<String>,
    pub error: Option<String>,
}

// ============================================================================
// Calls
// ============================================================================

/// Call detail record
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Cdr {
    pub api_id: Option<String>,
    pub bill_duration: Option<i64>,
    pub billed_duration: Option<i64>,
    pub call_direction: Option<String>,
    pub call_duration: Option<i64>,
    pub call_uuid: Option<String>,
    pub end_time: Option<String>,
    pub from_number: Option<String>,
    pub parent_call_uuid: Option<String>,
    pub resource_uri: Option<String>,
    pub to_number: Option<String>,
    pub total_amount: Option<String>,
    pub total_rate: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveCall {
    pub api_id: Option<String>,
    pub call_status: Option<String>,
    pub call_uuid: Option<String>,
    pub caller_name: Option<String>,
    pub direction: Option<String>,
    pub from: Option<String>,
    pub request_uuid: Option<String>,
    pub session_start: Option<String>,
    pub to: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveCallList {
    pub api_id: Option<String>,
    pub calls: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Call {
    pub api_id: Option<String>,
    pub message: Option<String>,
    pub request_uuid: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BulkCall {
    pub api_id: Option<String>,
    pub message: Option<String>,
    pub request_uuid: Vec<String>,
    pub error: Option<String>,
}

/// Respuesta de las grabaciones de llamada y de conferencia
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Recording {
    pub api_id: Option<String>,
    pub message: Option<String>,
    pub recording_id: Option<String>,
    pub url: Option<String>,
    pub error: Option<String>,
}

// ============================================================================
// Conferences
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConferenceMember {
    pub call_uuid: Option<String>,
    pub caller_name: Option<String>,
    pub deaf: Option<bool>,
    pub direction: Option<String>,
    pub from: Option<String>,
    pub join_time: Option<String>,
    pub member_id: Option<String>,
    pub muted: Option<bool>,
    pub to: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Conference {
    pub api_id: Option<String>,
    pub conference_member_count: Option<String>,
    pub conference_name: Option<String>,
    pub conference_run_time: Option<String>,
    pub members: Vec<ConferenceMember>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveConferenceList {
    pub api_id: Option<String>,
    pub conferences: Vec<String>,
    pub error: Option<String>,
}

// ============================================================================
// Endpoints
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Endpoint {
    pub api_id: Option<String>,
    pub alias: Option<String>,
    pub application: Option<String>,
    pub endpoint_id: Option<String>,
    pub password: Option<String>,
    pub resource_uri: Option<String>,
    pub sip_registered: Option<String>,
    pub sip_uri: Option<String>,
    pub sub_account: Option<String>,
    pub username: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CreateEndpoint {
    pub api_id: Option<String>,
    pub alias: Option<String>,
    pub endpoint_id: Option<String>,
    pub message: Option<String>,
    pub username: Option<String>,
    pub error: Option<String>,
}

// ============================================================================
// Messages
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResponse {
    pub api_id: Option<String>,
    pub message: Option<String>,
    pub message_uuid: Vec<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Message {
    pub api_id: Option<String>,
    pub from_number: Option<String>,
    pub message_direction: Option<String>,
    pub message_state: Option<String>,
    pub message_time: Option<String>,
    pub message_type: Option<String>,
    pub message_uuid: Option<String>,
    pub resource_uri: Option<String>,
    pub to_number: Option<String>,
    pub total_amount: Option<String>,
    pub total_rate: Option<String>,
    pub units: Option<u32>,
    pub error: Option<String>,
}

// ============================================================================
// Carriers
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IncomingCarrier {
    pub api_id: Option<String>,
    pub carrier_id: Option<String>,
    pub ip_set: Option<String>,
    pub name: Option<String>,
    pub resource_uri: Option<String>,
    pub sms: Option<bool>,
    pub voice: Option<bool>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingCarrier {
    pub api_id: Option<String>,
    pub address: Option<String>,
    pub carrier_id: Option<String>,
    pub enabled: Option<bool>,
    pub failover_address: Option<String>,
    pub failover_prefix: Option<String>,
    pub ips: Option<String>,
    pub name: Option<String>,
    pub prefix: Option<String>,
    pub resource_uri: Option<String>,
    pub retries: Option<u32>,
    pub retry_seconds: Option<u32>,
    pub suffix: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingCarrierRouting {
    pub api_id: Option<String>,
    pub digits: Option<String>,
    pub outgoing_carrier: Option<String>,
    pub priority: Option<i64>,
    pub resource_uri: Option<String>,
    pub routing_id: Option<String>,
    pub error: Option<String>,
}

// ============================================================================
// Pricing
// ============================================================================

/// Tarifas por país. Las tablas anidadas se dejan como JSON sin tipar.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Pricing {
    pub api_id: Option<String>,
    pub country: Option<String>,
    pub country_code: Option<u32>,
    pub country_iso: Option<String>,
    pub message: Option<serde_json::Value>,
    pub phone_numbers: Option<serde_json::Value>,
    pub voice: Option<serde_json::Value>,
    pub error: Option<String>,
}

// ============================================================================
// Aliases
// ============================================================================

pub type SubAccountList = ListResponse<SubAccount>;
pub type ApplicationList = ListResponse<Application>;
pub type NumberList = ListResponse<Number>;
pub type NumberGroupList = ListResponse<NumberGroup>;
pub type CdrList = ListResponse<Cdr>;
pub type EndpointList = ListResponse<Endpoint>;
pub type MessageList = ListResponse<Message>;
pub type IncomingCarrierList = ListResponse<IncomingCarrier>;
pub type OutgoingCarrierList = ListResponse<OutgoingCarrier>;
pub type OutgoingCarrierRoutingList = ListResponse<OutgoingCarrierRouting>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_account_partial_body() {
        let json = r#"{
            "api_id": "97bd34a6-f9b4-11e2-b0a8-1231381bc3d1",
            "auth_id": "MAXXXXXXXXXXXXXXXXXXXX",
            "auto_recharge": false,
            "cash_credits": "19.04",
            "city": null
        }"#;

        let account: Account = serde_json::from_str(json).unwrap();
        assert_eq!(account.auth_id.as_deref(), Some("MAXXXXXXXXXXXXXXXXXXXX"));
        assert_eq!(account.auto_recharge, Some(false));
        assert_eq!(account.cash_credits.as_deref(), Some("19.04"));
        assert!(account.city.is_none());
        assert!(account.error.is_none());
    }

    #[test]
    fn test_list_response_with_meta() {
        let json = r#"{
            "api_id": "abc",
            "meta": {"limit": 20, "next": "/v1/Account/MA1/Application/?limit=20&offset=20", "offset": 0, "previous": null, "total_count": 42},
            "objects": [{"app_id": "1", "app_name": "ivr"}, {"app_id": "2"}]
        }"#;

        let list: ApplicationList = serde_json::from_str(json).unwrap();
        assert_eq!(list.objects.len(), 2);
        assert_eq!(list.objects[0].app_name.as_deref(), Some("ivr"));

        let meta = list.meta.unwrap();
        assert_eq!(meta.total_count, Some(42));
        assert!(meta.has_next());
    }

    #[test]
    fn test_meta_without_next_page() {
        let meta = Meta {
            next: None,
            ..Default::default()
        };
        assert!(!meta.has_next());
    }

    #[test]
    fn test_conference_members() {
        let json = r#"{
            "conference_name": "room1",
            "conference_member_count": "1",
            "members": [{"member_id": "17", "muted": true, "deaf": false, "call_uuid": "uuid-1"}]
        }"#;

        let conference: Conference = serde_json::from_str(json).unwrap();
        assert_eq!(conference.members.len(), 1);
        assert_eq!(conference.members[0].muted, Some(true));
        assert_eq!(conference.members[0].member_id.as_deref(), Some("17"));
    }

    #[test]
    fn test_error_body_message() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"api_id": "x", "error": "not found"}"#).unwrap();
        assert_eq!(body.message().as_deref(), Some("not found"));

        let nested: ApiErrorBody =
            serde_json::from_str(r#"{"error": {"to": ["required"]}}"#).unwrap();
        assert_eq!(nested.message().as_deref(), Some(r#"{"to":["required"]}"#));
    }
}
