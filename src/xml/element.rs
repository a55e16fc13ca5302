// src/xml/element.rs
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::fmt;
use std::io::Write;

use crate::error::XmlError;

/// Call-control verbs understood by the voice engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Verb {
    Response,
    Speak,
    Play,
    Dial,
    Number,
    User,
    Conference,
    GetDigits,
    Record,
    Wait,
    Redirect,
    Hangup,
    PreAnswer,
    Message,
    Dtmf,
}

impl Verb {
    pub fn tag(&self) -> &'static str {
        match self {
            Verb::Response => "Response",
            Verb::Speak => "Speak",
            Verb::Play => "Play",
            Verb::Dial => "Dial",
            Verb::Number => "Number",
            Verb::User => "User",
            Verb::Conference => "Conference",
            Verb::GetDigits => "GetDigits",
            Verb::Record => "Record",
            Verb::Wait => "Wait",
            Verb::Redirect => "Redirect",
            Verb::Hangup => "Hangup",
            Verb::PreAnswer => "PreAnswer",
            Verb::Message => "Message",
            Verb::Dtmf => "DTMF",
        }
    }

    /// Child verbs this verb may contain
    pub fn nestables(&self) -> &'static [Verb] {
        use Verb::*;
        match self {
            Response => &[
                Speak, Play, GetDigits, Record, Dial, Message, Redirect, Wait, Hangup, PreAnswer,
                Conference, Dtmf,
            ],
            Dial => &[Number, User],
            GetDigits => &[Speak, Play, Wait],
            PreAnswer => &[Play, Speak, GetDigits, Wait, Redirect, Message, Dtmf],
            _ => &[],
        }
    }

    pub fn can_contain(&self, child: Verb) -> bool {
        self.nestables().contains(&child)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Case rules applied to every attribute value: booleans lower-case,
/// HTTP methods and voice genders upper-case, anything else untouched.
pub fn normalize_value(value: &str) -> String {
    let lower = value.to_ascii_lowercase();
    match lower.as_str() {
        "true" | "false" => lower,
        "get" | "post" | "man" | "woman" => value.to_ascii_uppercase(),
        _ => value.to_string(),
    }
}

/// A node of the call-control document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    verb: Verb,
    attributes: Vec<(String, String)>,
    body: Option<String>,
    children: Vec<Element>,
}

impl Element {
    pub(crate) fn new(verb: Verb) -> Self {
        Self {
            verb,
            attributes: Vec::new(),
            body: None,
            children: Vec::new(),
        }
    }

    pub(crate) fn with_body(verb: Verb, body: &str) -> Self {
        Self {
            body: Some(body.to_string()),
            ..Self::new(verb)
        }
    }

    /// Root of every document
    pub fn response() -> Self {
        Self::new(Verb::Response)
    }

    pub fn pre_answer() -> Self {
        Self::new(Verb::PreAnswer)
    }

    pub fn verb(&self) -> Verb {
        self.verb
    }

    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    pub fn children(&self) -> &[Element] {
        &self.children
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Sets an attribute, replacing any previous value in place.
    pub fn set_attribute(&mut self, name: &str, value: impl fmt::Display) -> &mut Self {
        let value = normalize_value(&value.to_string());
        match self.attributes.iter_mut().find(|(k, _)| k == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name.to_string(), value)),
        }
        self
    }

    pub(crate) fn attr(mut self, name: &str, value: impl fmt::Display) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Sets the attribute only when a non-empty value is given
    pub(crate) fn attr_opt<V: fmt::Display>(self, name: &str, value: Option<V>) -> Self {
        match value.map(|v| v.to_string()) {
            Some(v) if !v.is_empty() => self.attr(name, v),
            _ => self,
        }
    }

    /// Attaches a child, failing if its verb is not allowed under this one
    pub fn add(&mut self, child: Element) -> Result<&mut Self, XmlError> {
        if !self.verb.can_contain(child.verb) {
            return Err(XmlError::InvalidNesting {
                child: child.verb.tag(),
                parent: self.verb.tag(),
            });
        }

        self.children.push(child);
        Ok(self)
    }

    /// Renders this element and its children without an XML declaration
    pub fn render(&self) -> Result<String, XmlError> {
        let mut writer = Writer::new(Vec::new());
        write_element(&mut writer, self)?;
        into_string(writer)
    }

    /// Renders the full document, declaration included
    pub fn to_xml(&self) -> Result<String, XmlError> {
        let mut writer = Writer::new(Vec::new());

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), Some("yes"))))
            .map_err(write_error)?;
        write_element(&mut writer, self)?;

        into_string(writer)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let xml = self.to_xml().map_err(|_| fmt::Error)?;
        f.write_str(&xml)
    }
}

fn write_element<W: Write>(writer: &mut Writer<W>, element: &Element) -> Result<(), XmlError> {
    let tag = element.verb.tag();

    let mut start = BytesStart::new(tag);
    for (name, value) in &element.attributes {
        start.push_attribute((name.as_str(), value.as_str()));
    }

    if element.body.is_none() && element.children.is_empty() {
        writer.write_event(Event::Empty(start)).map_err(write_error)?;
        return Ok(());
    }

    writer.write_event(Event::Start(start)).map_err(write_error)?;

    if let Some(body) = &element.body {
        writer
            .write_event(Event::Text(BytesText::new(body)))
            .map_err(write_error)?;
    }

    for child in &element.children {
        write_element(writer, child)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(tag)))
        .map_err(write_error)?;

    Ok(())
}

fn into_string(writer: Writer<Vec<u8>>) -> Result<String, XmlError> {
    String::from_utf8(writer.into_inner()).map_err(write_error)
}

fn write_error<E: fmt::Display>(e: E) -> XmlError {
    XmlError::Write(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_value() {
        assert_eq!(normalize_value("True"), "true");
        assert_eq!(normalize_value("FALSE"), "false");
        assert_eq!(normalize_value("post"), "POST");
        assert_eq!(normalize_value("Get"), "GET");
        assert_eq!(normalize_value("man"), "MAN");
        assert_eq!(normalize_value("woman"), "WOMAN");
        assert_eq!(normalize_value("en-US"), "en-US");
        assert_eq!(normalize_value("http://example.com/Post"), "http://example.com/Post");
    }

    #[test]
    fn test_nestables_table() {
        assert!(Verb::Response.can_contain(Verb::Dial));
        assert!(Verb::Response.can_contain(Verb::Dtmf));
        assert!(!Verb::Response.can_contain(Verb::Number));
        assert!(!Verb::Response.can_contain(Verb::Response));

        assert_eq!(Verb::Dial.nestables(), &[Verb::Number, Verb::User]);
        assert!(Verb::GetDigits.can_contain(Verb::Wait));
        assert!(!Verb::GetDigits.can_contain(Verb::Record));
        assert!(Verb::PreAnswer.can_contain(Verb::Message));
        assert!(!Verb::PreAnswer.can_contain(Verb::Dial));

        for leaf in [Verb::Speak, Verb::Play, Verb::Number, Verb::Hangup, Verb::Dtmf] {
            assert!(leaf.nestables().is_empty(), "{} should be a leaf", leaf);
        }
    }

    #[test]
    fn test_add_rejects_disallowed_child() {
        let mut response = Element::response();
        let err = response.add(Element::new(Verb::Number)).unwrap_err();

        assert_eq!(
            err,
            XmlError::InvalidNesting {
                child: "Number",
                parent: "Response",
            }
        );
        assert!(response.children().is_empty());
    }

    #[test]
    fn test_add_keeps_insertion_order() {
        let mut response = Element::response();
        response
            .add(Element::new(Verb::Wait))
            .unwrap()
            .add(Element::new(Verb::Hangup))
            .unwrap();

        let verbs: Vec<Verb> = response.children().iter().map(Element::verb).collect();
        assert_eq!(verbs, vec![Verb::Wait, Verb::Hangup]);
    }

    #[test]
    fn test_set_attribute_replaces_in_place() {
        let mut element = Element::new(Verb::Play);
        element.set_attribute("loop", 1).set_attribute("loop", 3);

        assert_eq!(element.attribute("loop"), Some("3"));
        assert_eq!(element.attributes().count(), 1);
    }

    #[test]
    fn test_attr_opt_skips_empty() {
        let element = Element::new(Verb::Hangup)
            .attr_opt("reason", Some(""))
            .attr_opt("schedule", None::<u32>)
            .attr_opt("x", Some("y"));

        assert_eq!(element.attributes().count(), 1);
    }

    #[test]
    fn test_render_empty_root() {
        assert_eq!(Element::response().render().unwrap(), "<Response/>");
    }

    #[test]
    fn test_to_xml_has_declaration() {
        let xml = Element::response().to_xml().unwrap();
        assert_eq!(
            xml,
            r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?><Response/>"#
        );
        assert_eq!(Element::response().to_string(), xml);
    }

    #[test]
    fn test_body_is_escaped() {
        let element = Element::with_body(Verb::Speak, "Tom & Jerry <3");
        assert_eq!(
            element.render().unwrap(),
            "<Speak>Tom &amp; Jerry &lt;3</Speak>"
        );
    }
}
