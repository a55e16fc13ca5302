// tests/xml_document_test.rs
#[cfg(test)]
mod tests {
    use plivo::xml::*;
    use plivo::XmlError;

    const DECL: &str = r#"<?xml version="1.0" encoding="utf-8" standalone="yes"?>"#;

    #[test]
    fn test_speak_document() {
        let mut response = Element::response();
        response
            .add_speak(
                "Hello",
                SpeakOptions {
                    voice: Voice::Man,
                    ..Default::default()
                },
            )
            .unwrap();

        assert_eq!(
            response.to_xml().unwrap(),
            format!(
                "{}{}",
                DECL, r#"<Response><Speak voice="MAN" language="en-US" loop="1">Hello</Speak></Response>"#
            )
        );
    }

    #[test]
    fn test_number_directly_under_response_fails() {
        let mut response = Element::response();
        let err = response
            .add_number("14155551234", DialTargetOptions::default())
            .unwrap_err();

        assert_eq!(
            err,
            XmlError::InvalidNesting {
                child: "Number",
                parent: "Response",
            }
        );
        assert_eq!(err.to_string(), "Element Number cannot be nested within Response");
        assert_eq!(response.render().unwrap(), "<Response/>");
    }

    #[test]
    fn test_ivr_menu() {
        let mut get_digits = Element::get_digits(
            "https://example.com/menu",
            GetDigitsOptions {
                num_digits: 1,
                timeout: 10,
                ..Default::default()
            },
        );
        get_digits
            .add_speak("Press 1 for sales", SpeakOptions::default())
            .unwrap();

        let mut response = Element::response();
        response
            .add(get_digits)
            .unwrap()
            .add_speak("No input received", SpeakOptions::default())
            .unwrap()
            .add_hangup(None, 0)
            .unwrap();

        let xml = response.render().unwrap();
        assert!(xml.starts_with(r#"<Response><GetDigits action="https://example.com/menu" method="POST" timeout="10""#));
        assert!(xml.contains(r#"numDigits="1""#));
        assert!(xml.contains(r#"<Speak voice="WOMAN" language="en-US" loop="1">Press 1 for sales</Speak></GetDigits>"#));
        assert!(xml.ends_with("No input received</Speak><Hangup/></Response>"));
    }

    #[test]
    fn test_forward_call() {
        let mut dial = Element::dial(DialOptions {
            action: Some("https://example.com/dial-status".to_string()),
            ..Default::default()
        });
        dial.add_number("14155556789", DialTargetOptions::default())
            .unwrap();

        let mut response = Element::response();
        response.add(dial).unwrap();

        let dial = &response.children()[0];
        assert_eq!(dial.verb(), Verb::Dial);
        assert_eq!(dial.attribute("action"), Some("https://example.com/dial-status"));
        assert_eq!(dial.children()[0].body(), Some("14155556789"));
    }

    #[test]
    fn test_pre_answer_then_conference() {
        let mut response = Element::response();
        response
            .add_pre_answer()
            .unwrap()
            .add_conference("support", ConferenceOptions::default())
            .unwrap();

        let verbs: Vec<Verb> = response.children().iter().map(Element::verb).collect();
        assert_eq!(verbs, vec![Verb::PreAnswer, Verb::Conference]);

        let xml = response.render().unwrap();
        assert!(xml.starts_with("<Response><PreAnswer/><Conference "));
        assert!(xml.ends_with(">support</Conference></Response>"));
    }

    #[test]
    fn test_custom_attribute_values_are_normalized() {
        let mut record = Element::record("https://example.com/rec", RecordOptions::default());
        record
            .set_attribute("method", "get")
            .set_attribute("playBeep", "False");

        assert_eq!(record.attribute("method"), Some("GET"));
        assert_eq!(record.attribute("playBeep"), Some("false"));
    }

    #[test]
    fn test_record_and_message() {
        let mut response = Element::response();
        response
            .add_record(
                "https://example.com/rec",
                RecordOptions {
                    max_length: 120,
                    callback_url: Some("https://example.com/rec-done".to_string()),
                    callback_method: Some(HttpMethod::Get),
                    ..Default::default()
                },
            )
            .unwrap()
            .add_message(
                "Thanks for calling",
                "14155551234",
                "14155556789",
                MessageOptions::default(),
            )
            .unwrap();

        let record = &response.children()[0];
        assert_eq!(record.attribute("maxLength"), Some("120"));
        assert_eq!(record.attribute("callbackUrl"), Some("https://example.com/rec-done"));
        assert_eq!(record.attribute("callbackMethod"), Some("GET"));

        let message = &response.children()[1];
        assert_eq!(message.attribute("type"), Some("sms"));
        assert_eq!(message.body(), Some("Thanks for calling"));
    }

    #[test]
    fn test_display_matches_to_xml() {
        let mut response = Element::response();
        response.add_dtmf("123").unwrap();
        assert_eq!(response.to_string(), response.to_xml().unwrap());
    }
}
