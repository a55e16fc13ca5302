//! Documentos XML de control de llamadas
//!
//! Cada documento tiene una raíz `<Response>` a la que se anidan verbos.
//! El anidamiento se valida en `Element::add`: un hijo no permitido por
//! su padre devuelve `XmlError::InvalidNesting`.
//!
//! # Uso
//!
//! ```rust,ignore
//! use plivo::xml::{Element, SpeakOptions};
//!
//! let mut response = Element::response();
//! response.add_speak("Hello", SpeakOptions::default())?;
//!
//! println!("{}", response.to_xml()?);
//! ```

mod element;
mod verbs;

pub use element::{normalize_value, Element, Verb};
pub use verbs::{
    ConferenceOptions, DialOptions, DialTargetOptions, GetDigitsOptions, HttpMethod,
    MessageOptions, PlayOptions, RecordOptions, SpeakOptions, Voice, WaitOptions,
};
