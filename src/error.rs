// src/error.rs
//! Error types for the REST client and the XML builder.

use thiserror::Error;

/// Errores del cliente REST de Plivo
#[derive(Debug, Error)]
pub enum PlivoError {
    #[error("Missing mandatory parameter {0}.")]
    MissingParameter(String),

    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Timeout: request took longer than {0}ms")]
    Timeout(u64),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PlivoError {
    /// HTTP status returned by the platform, if the error came from a response
    pub fn status(&self) -> Option<u16> {
        match self {
            PlivoError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Errors raised while building or rendering a call-control document
#[derive(Debug, Error, PartialEq, Eq)]
pub enum XmlError {
    #[error("Element {child} cannot be nested within {parent}")]
    InvalidNesting {
        child: &'static str,
        parent: &'static str,
    },

    #[error("XML write error: {0}")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, PlivoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_parameter_message() {
        let err = PlivoError::MissingParameter("call_uuid".to_string());
        assert_eq!(err.to_string(), "Missing mandatory parameter call_uuid.");
    }

    #[test]
    fn test_status_only_for_api_errors() {
        let api = PlivoError::Api {
            status: 404,
            message: "not found".to_string(),
        };
        assert_eq!(api.status(), Some(404));
        assert!(api.is_not_found());

        let timeout = PlivoError::Timeout(50);
        assert_eq!(timeout.status(), None);
        assert!(!timeout.is_not_found());
    }

    #[test]
    fn test_invalid_nesting_message() {
        let err = XmlError::InvalidNesting {
            child: "Number",
            parent: "Response",
        };
        assert_eq!(err.to_string(), "Element Number cannot be nested within Response");
    }
}
