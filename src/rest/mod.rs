//! Plivo REST API
//!
//! Este módulo envuelve la API HTTP de Plivo:
//! - Account / Subaccount
//! - Application, Number, Endpoint
//! - Call (CDRs, llamadas en curso, control) y Conference
//! - Message, Carrier, Pricing
//!
//! # Uso
//!
//! ```rust,ignore
//! use plivo::rest::{Params, RestApi};
//!
//! let api = RestApi::new("MAXXXXXXXXXXXXXXXXXXXX", "tokenvalue")?;
//!
//! let call = api.make_call(
//!     Params::new()
//!         .set("from", "14155551234")
//!         .set("to", "14155556789")
//!         .set("answer_url", "https://example.com/answer/"),
//! ).await?;
//! ```

mod client;
mod params;
mod types;
mod account;
mod application;
mod number;
mod call;
mod conference;
mod endpoint;
mod message;
mod carrier;
mod pricing;

pub use client::RestApi;
pub use params::Params;
pub use types::*;
