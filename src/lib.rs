//! Plivo SDK
//!
//! - `rest`: cliente asíncrono de la API REST (cuentas, llamadas, conferencias, mensajes...)
//! - `xml`: construcción de documentos de control de llamadas
//! - `config`: configuración del cliente desde código o variables de entorno

pub mod config;
pub mod error;
pub mod rest;
pub mod xml;

pub use config::ClientConfig;
pub use error::{PlivoError, Result, XmlError};
pub use rest::{Params, RestApi};
pub use xml::Element;
