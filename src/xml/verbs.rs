// src/xml/verbs.rs
//! Constructors for each call-control verb and the matching `add_*` helpers.
//!
//! Option structs default to the values the voice engine assumes, so
//! `SpeakOptions::default()` renders `voice="WOMAN" language="en-US" loop="1"`.

use std::fmt;
use std::str::FromStr;

use super::element::{Element, Verb};
use crate::error::XmlError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Voice {
    Man,
    #[default]
    Woman,
}

impl fmt::Display for Voice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Voice::Man => f.write_str("MAN"),
            Voice::Woman => f.write_str("WOMAN"),
        }
    }
}

impl FromStr for Voice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "man" => Ok(Voice::Man),
            "woman" => Ok(Voice::Woman),
            other => Err(format!("unknown voice: {}", other)),
        }
    }
}

/// Callback method for action and callback URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    Get,
    #[default]
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => f.write_str("GET"),
            HttpMethod::Post => f.write_str("POST"),
        }
    }
}

// ==================== Options ====================

#[derive(Debug, Clone)]
pub struct SpeakOptions {
    pub voice: Voice,
    pub language: String,
    pub loop_count: u32,
}

impl Default for SpeakOptions {
    fn default() -> Self {
        Self {
            voice: Voice::Woman,
            language: "en-US".to_string(),
            loop_count: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct PlayOptions {
    pub loop_count: u32,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self { loop_count: 1 }
    }
}

#[derive(Debug, Clone, Default)]
pub struct WaitOptions {
    /// Seconds to wait
    pub length: Option<u32>,
    pub silence: bool,
}

#[derive(Debug, Clone)]
pub struct GetDigitsOptions {
    pub method: HttpMethod,
    pub timeout: u32,
    pub digit_timeout: u32,
    pub finish_on_key: String,
    pub num_digits: u32,
    pub retries: u32,
    pub invalid_digits_sound: Option<String>,
    pub valid_digits: String,
    pub play_beep: bool,
    pub redirect: bool,
}

impl Default for GetDigitsOptions {
    fn default() -> Self {
        Self {
            method: HttpMethod::Post,
            timeout: 5,
            digit_timeout: 2,
            finish_on_key: "#".to_string(),
            num_digits: 99,
            retries: 1,
            invalid_digits_sound: None,
            valid_digits: "1234567890*#".to_string(),
            play_beep: false,
            redirect: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RecordOptions {
    pub method: HttpMethod,
    pub timeout: u32,
    pub finish_on_key: Option<String>,
    pub max_length: u32,
    pub play_beep: bool,
    pub record_session: bool,
    pub start_on_dial_answer: bool,
    pub redirect: bool,
    pub file_format: String,
    pub callback_url: Option<String>,
    pub callback_method: Option<HttpMethod>,
    pub transcription_type: String,
    pub transcription_url: Option<String>,
    pub transcription_method: HttpMethod,
}

impl Default for RecordOptions {
    fn default() -> Self {
        Self {
            method: HttpMethod::Post,
            timeout: 15,
            finish_on_key: None,
            max_length: 60,
            play_beep: true,
            record_session: false,
            start_on_dial_answer: false,
            redirect: true,
            file_format: "mp3".to_string(),
            callback_url: None,
            callback_method: None,
            transcription_type: "auto".to_string(),
            transcription_url: None,
            transcription_method: HttpMethod::Get,
        }
    }
}

#[derive(Debug, Clone)]
pub struct DialOptions {
    pub action: Option<String>,
    pub method: HttpMethod,
    pub hangup_on_star: bool,
    pub time_limit: u32,
    pub timeout: Option<u32>,
    pub caller_id: Option<String>,
    pub caller_name: Option<String>,
    pub confirm_sound: Option<String>,
    pub confirm_key: Option<String>,
    pub dial_music: Option<String>,
    pub callback_url: Option<String>,
    pub digits_match: Option<String>,
    pub sip_headers: Option<String>,
    pub callback_method: HttpMethod,
    pub redirect: bool,
}

impl Default for DialOptions {
    fn default() -> Self {
        Self {
            action: None,
            method: HttpMethod::Post,
            hangup_on_star: false,
            time_limit: 14400,
            timeout: None,
            caller_id: None,
            caller_name: None,
            confirm_sound: None,
            confirm_key: None,
            dial_music: None,
            callback_url: None,
            digits_match: None,
            sip_headers: None,
            callback_method: HttpMethod::Post,
            redirect: true,
        }
    }
}

/// Options shared by `Number` and `User` dial targets
#[derive(Debug, Clone, Default)]
pub struct DialTargetOptions {
    pub send_digits: Option<String>,
    pub send_digits_mode: Option<String>,
    pub send_on_pre_answer: bool,
    /// Only rendered on `User`
    pub sip_headers: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ConferenceOptions {
    pub send_digits: Option<String>,
    pub muted: bool,
    pub enter_sound: Option<String>,
    pub exit_sound: Option<String>,
    pub start_conference_on_enter: bool,
    pub end_conference_on_exit: bool,
    pub stay_alone: bool,
    pub wait_sound: Option<String>,
    pub max_members: u32,
    pub time_limit: u32,
    pub hangup_on_star: bool,
    pub action: Option<String>,
    pub method: Option<HttpMethod>,
    pub callback_url: Option<String>,
    pub callback_method: HttpMethod,
    pub digits_match: Option<String>,
    pub floor_event: bool,
    pub redirect: bool,
    pub record: bool,
    pub record_file_format: String,
    pub transcription_type: String,
    pub transcription_url: Option<String>,
    pub transcription_method: HttpMethod,
}

impl Default for ConferenceOptions {
    fn default() -> Self {
        Self {
            send_digits: None,
            muted: false,
            enter_sound: None,
            exit_sound: None,
            start_conference_on_enter: true,
            end_conference_on_exit: false,
            stay_alone: true,
            wait_sound: None,
            max_members: 200,
            time_limit: 0,
            hangup_on_star: false,
            action: None,
            method: None,
            callback_url: None,
            callback_method: HttpMethod::Post,
            digits_match: None,
            floor_event: false,
            redirect: true,
            record: true,
            record_file_format: "mp3".to_string(),
            transcription_type: "auto".to_string(),
            transcription_url: None,
            transcription_method: HttpMethod::Get,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MessageOptions {
    pub msg_type: String,
    pub callback_url: Option<String>,
    pub callback_method: HttpMethod,
}

impl Default for MessageOptions {
    fn default() -> Self {
        Self {
            msg_type: "sms".to_string(),
            callback_url: None,
            callback_method: HttpMethod::Post,
        }
    }
}

// ==================== Constructors ====================

impl Element {
    pub fn speak(text: &str, opts: SpeakOptions) -> Self {
        Element::with_body(Verb::Speak, text)
            .attr("voice", opts.voice)
            .attr("language", opts.language)
            .attr("loop", opts.loop_count)
    }

    pub fn play(url: &str, opts: PlayOptions) -> Self {
        Element::with_body(Verb::Play, url).attr("loop", opts.loop_count)
    }

    pub fn wait(opts: WaitOptions) -> Self {
        Element::new(Verb::Wait)
            .attr_opt("length", opts.length)
            .attr("silence", opts.silence)
    }

    pub fn redirect(url: &str, method: Option<HttpMethod>) -> Self {
        Element::with_body(Verb::Redirect, url).attr_opt("method", method)
    }

    /// `schedule` of 0 means hang up immediately and is not rendered
    pub fn hangup(reason: Option<&str>, schedule: u32) -> Self {
        Element::new(Verb::Hangup)
            .attr_opt("schedule", (schedule != 0).then_some(schedule))
            .attr_opt("reason", reason)
    }

    pub fn get_digits(action: &str, opts: GetDigitsOptions) -> Self {
        Element::new(Verb::GetDigits)
            .attr("action", action)
            .attr("method", opts.method)
            .attr("timeout", opts.timeout)
            .attr("digitTimeout", opts.digit_timeout)
            .attr("finishOnKey", opts.finish_on_key)
            .attr("numDigits", opts.num_digits)
            .attr("retries", opts.retries)
            .attr_opt("invalidDigitsSound", opts.invalid_digits_sound)
            .attr("validDigits", opts.valid_digits)
            .attr("playBeep", opts.play_beep)
            .attr("redirect", opts.redirect)
    }

    pub fn record(action: &str, opts: RecordOptions) -> Self {
        Element::new(Verb::Record)
            .attr("action", action)
            .attr("method", opts.method)
            .attr("timeout", opts.timeout)
            .attr_opt("finishOnKey", opts.finish_on_key)
            .attr("maxLength", opts.max_length)
            .attr("playBeep", opts.play_beep)
            .attr("recordSession", opts.record_session)
            .attr("startOnDialAnswer", opts.start_on_dial_answer)
            .attr("redirect", opts.redirect)
            .attr("fileFormat", opts.file_format)
            .attr_opt("callbackUrl", opts.callback_url)
            .attr_opt("callbackMethod", opts.callback_method)
            .attr("transcriptionType", opts.transcription_type)
            .attr_opt("transcriptionUrl", opts.transcription_url)
            .attr("transcriptionMethod", opts.transcription_method)
    }

    pub fn dial(opts: DialOptions) -> Self {
        Element::new(Verb::Dial)
            .attr_opt("action", opts.action)
            .attr("method", opts.method)
            .attr("hangupOnStar", opts.hangup_on_star)
            .attr("timeLimit", opts.time_limit)
            .attr_opt("timeout", opts.timeout)
            .attr_opt("callerId", opts.caller_id)
            .attr_opt("callerName", opts.caller_name)
            .attr_opt("confirmSound", opts.confirm_sound)
            .attr_opt("confirmKey", opts.confirm_key)
            .attr_opt("dialMusic", opts.dial_music)
            .attr_opt("callbackUrl", opts.callback_url)
            .attr_opt("digitsMatch", opts.digits_match)
            .attr_opt("sipHeaders", opts.sip_headers)
            .attr("callbackMethod", opts.callback_method)
            .attr("redirect", opts.redirect)
    }

    pub fn number(number: &str, opts: DialTargetOptions) -> Self {
        Element::with_body(Verb::Number, number)
            .attr_opt("sendDigits", opts.send_digits)
            .attr_opt("sendDigitsMode", opts.send_digits_mode)
            .attr("sendOnPreAnswer", opts.send_on_pre_answer)
    }

    pub fn user(sip_uri: &str, opts: DialTargetOptions) -> Self {
        Element::with_body(Verb::User, sip_uri)
            .attr_opt("sendDigits", opts.send_digits)
            .attr_opt("sendDigitsMode", opts.send_digits_mode)
            .attr_opt("sipHeaders", opts.sip_headers)
            .attr("sendOnPreAnswer", opts.send_on_pre_answer)
    }

    pub fn conference(room: &str, opts: ConferenceOptions) -> Self {
        Element::with_body(Verb::Conference, room)
            .attr_opt("sendDigits", opts.send_digits)
            .attr_opt("enterSound", opts.enter_sound)
            .attr_opt("exitSound", opts.exit_sound)
            .attr_opt("waitSound", opts.wait_sound)
            .attr_opt("action", opts.action)
            .attr_opt("method", opts.method)
            .attr_opt("callbackUrl", opts.callback_url)
            .attr_opt("digitsMatch", opts.digits_match)
            .attr_opt("transcriptionUrl", opts.transcription_url)
            .attr("muted", opts.muted)
            .attr("startConferenceOnEnter", opts.start_conference_on_enter)
            .attr("endConferenceOnExit", opts.end_conference_on_exit)
            .attr("stayAlone", opts.stay_alone)
            .attr("maxMembers", opts.max_members)
            .attr("timeLimit", opts.time_limit)
            .attr("hangupOnStar", opts.hangup_on_star)
            .attr("callbackMethod", opts.callback_method)
            .attr("floorEvent", opts.floor_event)
            .attr("redirect", opts.redirect)
            .attr("record", opts.record)
            .attr("recordFileFormat", opts.record_file_format)
            .attr("transcriptionType", opts.transcription_type)
            .attr("transcriptionMethod", opts.transcription_method)
    }

    pub fn message(text: &str, src: &str, dst: &str, opts: MessageOptions) -> Self {
        Element::with_body(Verb::Message, text)
            .attr("src", src)
            .attr("dst", dst)
            .attr("type", opts.msg_type)
            .attr_opt("callbackUrl", opts.callback_url)
            .attr("callbackMethod", opts.callback_method)
    }

    pub fn dtmf(digits: &str) -> Self {
        Element::with_body(Verb::Dtmf, digits)
    }

    // ==================== add_* helpers ====================

    pub fn add_speak(&mut self, text: &str, opts: SpeakOptions) -> Result<&mut Self, XmlError> {
        self.add(Element::speak(text, opts))
    }

    pub fn add_play(&mut self, url: &str, opts: PlayOptions) -> Result<&mut Self, XmlError> {
        self.add(Element::play(url, opts))
    }

    pub fn add_wait(&mut self, opts: WaitOptions) -> Result<&mut Self, XmlError> {
        self.add(Element::wait(opts))
    }

    /// Redirects with POST unless another method is given
    pub fn add_redirect(&mut self, url: &str, method: Option<HttpMethod>) -> Result<&mut Self, XmlError> {
        self.add(Element::redirect(url, Some(method.unwrap_or_default())))
    }

    pub fn add_hangup(&mut self, reason: Option<&str>, schedule: u32) -> Result<&mut Self, XmlError> {
        self.add(Element::hangup(reason, schedule))
    }

    pub fn add_get_digits(&mut self, action: &str, opts: GetDigitsOptions) -> Result<&mut Self, XmlError> {
        self.add(Element::get_digits(action, opts))
    }

    pub fn add_record(&mut self, action: &str, opts: RecordOptions) -> Result<&mut Self, XmlError> {
        self.add(Element::record(action, opts))
    }

    pub fn add_dial(&mut self, opts: DialOptions) -> Result<&mut Self, XmlError> {
        self.add(Element::dial(opts))
    }

    pub fn add_number(&mut self, number: &str, opts: DialTargetOptions) -> Result<&mut Self, XmlError> {
        self.add(Element::number(number, opts))
    }

    pub fn add_user(&mut self, sip_uri: &str, opts: DialTargetOptions) -> Result<&mut Self, XmlError> {
        self.add(Element::user(sip_uri, opts))
    }

    pub fn add_pre_answer(&mut self) -> Result<&mut Self, XmlError> {
        self.add(Element::pre_answer())
    }

    pub fn add_conference(&mut self, room: &str, opts: ConferenceOptions) -> Result<&mut Self, XmlError> {
        self.add(Element::conference(room, opts))
    }

    pub fn add_message(
        &mut self,
        text: &str,
        src: &str,
        dst: &str,
        opts: MessageOptions,
    ) -> Result<&mut Self, XmlError> {
        self.add(Element::message(text, src, dst, opts))
    }

    pub fn add_dtmf(&mut self, digits: &str) -> Result<&mut Self, XmlError> {
        self.add(Element::dtmf(digits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speak_defaults() {
        let xml = Element::speak("Hello", SpeakOptions::default()).render().unwrap();
        assert_eq!(
            xml,
            r#"<Speak voice="WOMAN" language="en-US" loop="1">Hello</Speak>"#
        );
    }

    #[test]
    fn test_voice_from_str() {
        assert_eq!("man".parse::<Voice>().unwrap(), Voice::Man);
        assert_eq!("WOMAN".parse::<Voice>().unwrap(), Voice::Woman);
        assert!("robot".parse::<Voice>().is_err());
    }

    #[test]
    fn test_play() {
        let play = Element::play("https://example.com/hold.mp3", PlayOptions { loop_count: 3 });
        assert_eq!(
            play.render().unwrap(),
            r#"<Play loop="3">https://example.com/hold.mp3</Play>"#
        );
    }

    #[test]
    fn test_wait() {
        assert_eq!(
            Element::wait(WaitOptions::default()).render().unwrap(),
            r#"<Wait silence="false"/>"#
        );

        let wait = Element::wait(WaitOptions {
            length: Some(10),
            silence: true,
        });
        assert_eq!(wait.render().unwrap(), r#"<Wait length="10" silence="true"/>"#);
    }

    #[test]
    fn test_redirect() {
        assert_eq!(
            Element::redirect("https://example.com/next", None).render().unwrap(),
            "<Redirect>https://example.com/next</Redirect>"
        );

        let mut response = Element::response();
        response.add_redirect("https://example.com/next", None).unwrap();
        assert_eq!(
            response.render().unwrap(),
            r#"<Response><Redirect method="POST">https://example.com/next</Redirect></Response>"#
        );
    }

    #[test]
    fn test_hangup() {
        assert_eq!(Element::hangup(None, 0).render().unwrap(), "<Hangup/>");
        assert_eq!(
            Element::hangup(Some("busy"), 60).render().unwrap(),
            r#"<Hangup schedule="60" reason="busy"/>"#
        );
    }

    #[test]
    fn test_get_digits_defaults() {
        let xml = Element::get_digits("https://example.com/digits", GetDigitsOptions::default())
            .render()
            .unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<GetDigits action="https://example.com/digits" method="POST" timeout="5" "#,
                r##"digitTimeout="2" finishOnKey="#" numDigits="99" retries="1" "##,
                r##"validDigits="1234567890*#" playBeep="false" redirect="false"/>"##
            )
        );
    }

    #[test]
    fn test_record_defaults() {
        let xml = Element::record("https://example.com/rec", RecordOptions::default())
            .render()
            .unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<Record action="https://example.com/rec" method="POST" timeout="15" "#,
                r#"maxLength="60" playBeep="true" recordSession="false" startOnDialAnswer="false" "#,
                r#"redirect="true" fileFormat="mp3" transcriptionType="auto" transcriptionMethod="GET"/>"#
            )
        );
    }

    #[test]
    fn test_dial_with_number_and_user() {
        let mut dial = Element::dial(DialOptions {
            caller_id: Some("14155551234".to_string()),
            timeout: Some(30),
            ..Default::default()
        });
        dial.add_number(
            "14155556789",
            DialTargetOptions {
                send_digits: Some("wwww2410".to_string()),
                ..Default::default()
            },
        )
        .unwrap()
        .add_user("sip:alice@phone.plivo.com", DialTargetOptions::default())
        .unwrap();

        assert_eq!(
            dial.render().unwrap(),
            concat!(
                r#"<Dial method="POST" hangupOnStar="false" timeLimit="14400" timeout="30" "#,
                r#"callerId="14155551234" callbackMethod="POST" redirect="true">"#,
                r#"<Number sendDigits="wwww2410" sendOnPreAnswer="false">14155556789</Number>"#,
                r#"<User sendOnPreAnswer="false">sip:alice@phone.plivo.com</User>"#,
                r#"</Dial>"#
            )
        );
    }

    #[test]
    fn test_dial_rejects_speak() {
        let mut dial = Element::dial(DialOptions::default());
        let err = dial.add_speak("nope", SpeakOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "Element Speak cannot be nested within Dial");
    }

    #[test]
    fn test_number_ignores_sip_headers() {
        let number = Element::number(
            "1001",
            DialTargetOptions {
                sip_headers: Some("X-A=1".to_string()),
                ..Default::default()
            },
        );
        assert!(number.attribute("sipHeaders").is_none());
    }

    #[test]
    fn test_conference_defaults() {
        let xml = Element::conference("room1", ConferenceOptions::default())
            .render()
            .unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<Conference muted="false" startConferenceOnEnter="true" endConferenceOnExit="false" "#,
                r#"stayAlone="true" maxMembers="200" timeLimit="0" hangupOnStar="false" "#,
                r#"callbackMethod="POST" floorEvent="false" redirect="true" record="true" "#,
                r#"recordFileFormat="mp3" transcriptionType="auto" transcriptionMethod="GET">room1</Conference>"#
            )
        );
    }

    #[test]
    fn test_message() {
        let xml = Element::message("Hi", "14155551234", "14155556789", MessageOptions::default())
            .render()
            .unwrap();
        assert_eq!(
            xml,
            r#"<Message src="14155551234" dst="14155556789" type="sms" callbackMethod="POST">Hi</Message>"#
        );
    }

    #[test]
    fn test_dtmf() {
        assert_eq!(Element::dtmf("1234#").render().unwrap(), "<DTMF>1234#</DTMF>");
    }

    #[test]
    fn test_get_digits_nests_prompts() {
        let mut get_digits = Element::get_digits("https://example.com/d", GetDigitsOptions::default());
        get_digits
            .add_speak("Press 1", SpeakOptions::default())
            .unwrap()
            .add_wait(WaitOptions::default())
            .unwrap();

        assert_eq!(get_digits.children().len(), 2);
        assert!(get_digits.add_dial(DialOptions::default()).is_err());
        assert!(get_digits.add_record("x", RecordOptions::default()).is_err());
    }

    #[test]
    fn test_pre_answer_allow_list() {
        let mut pre_answer = Element::pre_answer();
        assert!(pre_answer.add_play("https://example.com/ring.mp3", PlayOptions::default()).is_ok());
        assert!(pre_answer.add_dtmf("1").is_ok());
        assert!(pre_answer.add_hangup(None, 0).is_err());
        assert!(pre_answer.add_conference("room", ConferenceOptions::default()).is_err());
    }
}
