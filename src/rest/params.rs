//! Mapa de parámetros para las llamadas REST
//!
//! Solo se envían las claves establecidas explícitamente: un valor vacío o
//! `None` nunca llega al servidor.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Display;

use crate::error::PlivoError;

/// Todo salvo los caracteres no reservados de RFC 3986
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params {
    values: BTreeMap<String, String>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Establece un parámetro. Los valores vacíos se ignoran.
    pub fn set(mut self, key: &str, value: impl Display) -> Self {
        self.insert(key, value);
        self
    }

    /// Establece un parámetro opcional; `None` se ignora.
    pub fn set_opt<V: Display>(mut self, key: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.insert(key, value);
        }
        self
    }

    pub fn insert(&mut self, key: &str, value: impl Display) {
        let value = value.to_string();
        if value.is_empty() {
            return;
        }
        self.values.insert(key.to_string(), value);
    }

    /// Inserts a key even when the value is empty. Only used where the
    /// platform expects an explicit blank (unlinking an application).
    pub(crate) fn force(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    /// Extrae un parámetro obligatorio del mapa
    ///
    /// La clave se elimina para que no se envíe también en el cuerpo o la
    /// query string.
    pub fn require(&mut self, key: &str) -> Result<String, PlivoError> {
        self.values
            .remove(key)
            .ok_or_else(|| PlivoError::MissingParameter(key.to_string()))
    }

    /// Igual que `require`, pero devuelve el valor codificado como un único
    /// segmento de ruta: `room#1` pasa a `room%231`.
    pub(crate) fn require_segment(&mut self, key: &str) -> Result<String, PlivoError> {
        let value = self.require(key)?;
        Ok(utf8_percent_encode(&value, PATH_SEGMENT).to_string())
    }

    /// Fails with `MissingParameter` unless every key is present. Keys stay in the map.
    pub fn ensure(&self, keys: &[&str]) -> Result<(), PlivoError> {
        match keys.iter().find(|key| !self.values.contains_key(**key)) {
            Some(missing) => Err(PlivoError::MissingParameter(missing.to_string())),
            None => Ok(()),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            let key: String = key.into();
            let value: String = value.into();
            params.insert(&key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values_are_skipped() {
        let params = Params::new()
            .set("from", "14155551234")
            .set("caller_name", "")
            .set_opt("ring_url", None::<&str>)
            .set_opt("time_limit", Some(60));

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("from"), Some("14155551234"));
        assert_eq!(params.get("time_limit"), Some("60"));
        assert!(!params.contains("caller_name"));
        assert!(!params.contains("ring_url"));
    }

    #[test]
    fn test_booleans_render_lowercase() {
        let params = Params::new().set("enabled", true).set("fax_enabled", false);
        assert_eq!(params.get("enabled"), Some("true"));
        assert_eq!(params.get("fax_enabled"), Some("false"));
    }

    #[test]
    fn test_require_removes_key() {
        let mut params = Params::new().set("call_uuid", "abc-123").set("legs", "aleg");

        assert_eq!(params.require("call_uuid").unwrap(), "abc-123");
        assert!(!params.contains("call_uuid"));
        assert_eq!(params.len(), 1);
    }

    #[test]
    fn test_require_segment_encodes_reserved_characters() {
        let mut params = Params::new()
            .set("conference_name", "room#1")
            .set("app_id", "sales/q1")
            .set("record_id", "a?b=c")
            .set("call_uuid", "8b1c7e2a-55f1-4c1e.x_y~z");

        assert_eq!(params.require_segment("conference_name").unwrap(), "room%231");
        assert_eq!(params.require_segment("app_id").unwrap(), "sales%2Fq1");
        assert_eq!(params.require_segment("record_id").unwrap(), "a%3Fb%3Dc");
        assert_eq!(
            params.require_segment("call_uuid").unwrap(),
            "8b1c7e2a-55f1-4c1e.x_y~z"
        );
        assert!(params.is_empty());
    }

    #[test]
    fn test_require_missing_key() {
        let mut params = Params::new();
        let err = params.require("app_id").unwrap_err();
        assert!(matches!(err, PlivoError::MissingParameter(ref key) if key == "app_id"));
    }

    #[test]
    fn test_ensure_reports_first_missing_key() {
        let params = Params::new().set("from", "1").set("to", "2");
        assert!(params.ensure(&["from", "to"]).is_ok());

        let err = params.ensure(&["from", "to", "answer_url"]).unwrap_err();
        assert_eq!(err.to_string(), "Missing mandatory parameter answer_url.");
    }

    #[test]
    fn test_force_keeps_blank_value() {
        let mut params = Params::new();
        params.force("app_id", "");
        assert_eq!(params.get("app_id"), Some(""));
    }

    #[test]
    fn test_serializes_as_flat_object() {
        let params = Params::new().set("answer_url", "http://example.com/answer").set("to", "1001");
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"answer_url": "http://example.com/answer", "to": "1001"})
        );
    }

    #[test]
    fn test_from_iterator() {
        let params: Params = vec![("name", "sub1"), ("enabled", "")].into_iter().collect();
        assert_eq!(params.len(), 1);
        assert_eq!(params.get("name"), Some("sub1"));
    }
}
