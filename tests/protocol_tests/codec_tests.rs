//! Codec Tests
//!
//! Tests for message formatting and parsing.

use pjlink::error::FormatError;
use pjlink::protocol::{
    decode, encode, encode_message, format, parse, parse_with, AmbiguousCode, Body, Command,
    GetResponse, Message, Request, Response, SetResponse, Value, MAX_MESSAGE_SIZE,
};
use pjlink::types::{Class, ErrorCode, PowerInstruction, PowerStatus, ProjectorName};

fn roundtrip(text: &str, awaiting_set: Option<bool>) -> Message {
    let message = parse(text, awaiting_set).unwrap();
    assert_eq!(format(&message), text);
    message
}

// =============================================================================
// Formatting Tests
// =============================================================================

#[test]
fn test_format_get_request() {
    let message = Message::get(Class::One, Command::Power).unwrap();
    assert_eq!(format(&message), "%1POWR ?");
}

#[test]
fn test_format_get_with_parameter() {
    let input = Value::InputSwitchClass2("3A".parse().unwrap());
    let message = Message::get_with(Class::Two, Command::InputTerminalName, input).unwrap();
    assert_eq!(format(&message), "%2INNM ?3A");
}

#[test]
fn test_format_set_request() {
    let message = Message::set(
        Class::One,
        Command::Power,
        Value::PowerInstruction(PowerInstruction::On),
    )
    .unwrap();
    assert_eq!(format(&message), "%1POWR 1");
}

#[test]
fn test_format_responses() {
    let ok = Message::set_response(Class::One, Command::Power, SetResponse::Ok).unwrap();
    assert_eq!(format(&ok), "%1POWR=OK");

    let failure =
        Message::get_failure(Class::Two, Command::Lamp, ErrorCode::UnavailableTime).unwrap();
    assert_eq!(format(&failure), "%2LAMP=ERR3");

    let success = Message::get_success(
        Class::One,
        Command::Power,
        Value::PowerStatus(PowerStatus::Cooling),
    )
    .unwrap();
    assert_eq!(format(&success), "%1POWR=2");
}

#[test]
fn test_encode_message_appends_terminator() {
    let message = Message::get(Class::One, Command::Class).unwrap();
    assert_eq!(encode_message(&message).unwrap(), b"%1CLSS ?\r".to_vec());
}

// =============================================================================
// Message Construction Tests
// =============================================================================

#[test]
fn test_message_rejects_command_outside_class() {
    assert_eq!(
        Message::get(Class::One, Command::Freeze),
        Err(FormatError::CommandNotInClass {
            command: Command::Freeze,
            class: Class::One
        })
    );
}

#[test]
fn test_message_rejects_wrong_payload() {
    let result = Message::set(Class::One, Command::Power, Value::PowerStatus(PowerStatus::On));
    assert!(matches!(result, Err(FormatError::PayloadMismatch { .. })));

    let class2_input = Value::InputSwitchClass2("3A".parse().unwrap());
    let result = Message::set(Class::One, Command::InputSwitch, class2_input);
    assert!(matches!(result, Err(FormatError::PayloadMismatch { .. })));
}

#[test]
fn test_message_rejects_value_reading_as_code() {
    let name = Value::ProjectorName(ProjectorName::new("ERR1").unwrap());
    assert_eq!(
        Message::get_success(Class::One, Command::Name, name),
        Err(FormatError::ValueReadsAsCode {
            command: Command::Name,
            value: "ERR1".to_string()
        })
    );

    // Only failure codes are ambiguous on the get path
    let name = Value::ProjectorName(ProjectorName::new("OK").unwrap());
    let message = Message::get_success(Class::One, Command::Name, name).unwrap();
    assert_eq!(parse(&format(&message), Some(false)).unwrap(), message);
}

#[test]
fn test_message_rejects_missing_forms() {
    assert_eq!(
        Message::get(Class::Two, Command::SpeakerVolume),
        Err(FormatError::GetNotSupported(Command::SpeakerVolume))
    );
    assert_eq!(
        Message::set_response(Class::One, Command::Lamp, SetResponse::Ok),
        Err(FormatError::SetNotSupported(Command::Lamp))
    );
    assert_eq!(
        Message::get(Class::Two, Command::InputTerminalName),
        Err(FormatError::MissingGetParameter(Command::InputTerminalName))
    );
}

// =============================================================================
// Round Trip Tests
// =============================================================================

#[test]
fn test_roundtrip_requests() {
    for text in [
        "%1POWR ?",
        "%1POWR 0",
        "%1INPT 31",
        "%2INPT 6Z",
        "%1AVMT 30",
        "%2INNM ?11",
        "%2SVOL 1",
        "%2MVOL 0",
        "%2FREZ 1",
    ] {
        let message = roundtrip(text, None);
        assert!(message.is_request(), "{}", text);
    }
}

#[test]
fn test_roundtrip_get_responses() {
    for text in [
        "%1POWR=3",
        "%1INPT=25",
        "%2INPT=5C",
        "%1AVMT=21",
        "%1ERST=000120",
        "%1LAMP=1200 1 30 0",
        "%1INST=11 12 31",
        "%2INST=11 2A 6Z",
        "%1INST=",
        "%1NAME=Main Hall",
        "%1NAME=",
        "%1INF1=EPSON",
        "%1INF2=EB-2250U",
        "%1INFO=Firmware 1.0",
        "%1CLSS=2",
        "%2SNUM=ABC123",
        "%2SVER=1.02",
        "%2INNM=HDMI 1",
        "%2IRES=1920x1080",
        "%2IRES=-",
        "%2IRES=*",
        "%2RRES=1280x800",
        "%2FILT=42",
        "%2RLMP=ELPLP95",
        "%2RFIL=ELPAF60 ELPAF61",
        "%2FREZ=0",
    ] {
        let message = roundtrip(text, Some(false));
        assert!(
            matches!(
                message.body(),
                Body::Response(Response::Get(GetResponse::Success(_)))
            ),
            "{}",
            text
        );
    }
}

#[test]
fn test_roundtrip_set_responses() {
    for text in ["%1POWR=OK", "%1INPT=ERR2", "%2SVOL=OK", "%2MVOL=ERR4", "%2FREZ=OK"] {
        let message = roundtrip(text, Some(true));
        assert!(message.is_set_response(), "{}", text);
    }
}

#[test]
fn test_parse_tolerates_terminator() {
    let message = parse("%1POWR=1\r", Some(false)).unwrap();
    assert_eq!(
        message.body(),
        &Body::Response(Response::Get(GetResponse::Success(Value::PowerStatus(
            PowerStatus::On
        ))))
    );
}

#[test]
fn test_input_switch_follows_class() {
    let class1 = parse("%1INPT 31", None).unwrap();
    let class2 = parse("%2INPT 31", None).unwrap();
    assert!(matches!(
        class1.body(),
        Body::Request(Request::Set(Value::InputSwitchClass1(_)))
    ));
    assert!(matches!(
        class2.body(),
        Body::Request(Request::Set(Value::InputSwitchClass2(_)))
    ));
    assert!(parse("%1INPT 3A", None).is_err());
}

// =============================================================================
// Ambiguous Response Tests
// =============================================================================

#[test]
fn test_bare_code_with_set_hint() {
    let message = parse("%1POWR=ERR1", Some(true)).unwrap();
    assert_eq!(
        message.body(),
        &Body::Response(Response::Set(SetResponse::Failure(
            ErrorCode::UndefinedCommand
        )))
    );
}

#[test]
fn test_bare_code_with_get_hint() {
    let message = parse("%1POWR=ERR1", Some(false)).unwrap();
    assert_eq!(
        message.body(),
        &Body::Response(Response::Get(GetResponse::Failure(
            ErrorCode::UndefinedCommand
        )))
    );
}

#[test]
fn test_bare_code_without_hint_defaults_to_set() {
    // Heuristic default: the wire does not say which form a bare ERRn answers
    let message = parse("%1POWR=ERR1", None).unwrap();
    assert!(message.is_set_response());

    let message = parse_with("%1POWR=ERR1", None, AmbiguousCode::GetFailure).unwrap();
    assert!(!message.is_set_response());
}

#[test]
fn test_bare_ok_is_always_set_response() {
    for ambiguous in [AmbiguousCode::SetResponse, AmbiguousCode::GetFailure] {
        let message = parse_with("%1POWR=OK", None, ambiguous).unwrap();
        assert!(matches!(
            message.body(),
            Body::Response(Response::Set(SetResponse::Ok))
        ));
    }
}

#[test]
fn test_table_settles_single_form_commands() {
    // LAMP has no set form, SVOL has no get form
    let lamp = parse("%1LAMP=ERR3", Some(true)).unwrap();
    assert!(matches!(
        lamp.body(),
        Body::Response(Response::Get(GetResponse::Failure(ErrorCode::UnavailableTime)))
    ));

    let volume = parse("%2SVOL=ERR2", Some(false)).unwrap();
    assert!(volume.is_set_response());
}

#[test]
fn test_unhinted_value_reads_as_get() {
    let message = parse("%1POWR=1", None).unwrap();
    assert!(!message.is_set_response());
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn test_parse_structural_errors() {
    assert_eq!(
        parse("#1POWR ?", None),
        Err(FormatError::InvalidIdentifier('#'))
    );
    assert_eq!(parse("%3POWR ?", None), Err(FormatError::UnknownClass('3')));
    assert_eq!(
        parse("%1XXXX ?", None),
        Err(FormatError::UnknownCommand("XXXX".to_string()))
    );
    assert_eq!(parse("%1POWR:1", None), Err(FormatError::UnknownSeparator(':')));
    assert!(matches!(parse("%1PO", None), Err(FormatError::TooShort(_))));
    assert!(matches!(parse("", None), Err(FormatError::TooShort(_))));
    assert!(matches!(parse("%1POWR", None), Err(FormatError::TooShort(_))));
}

#[test]
fn test_parse_grammar_errors() {
    assert_eq!(
        parse("%1FREZ ?", None),
        Err(FormatError::CommandNotInClass {
            command: Command::Freeze,
            class: Class::One
        })
    );
    assert_eq!(
        parse("%1ERST 1", None),
        Err(FormatError::SetNotSupported(Command::ErrorStatus))
    );
    assert_eq!(
        parse("%2SVOL ?", None),
        Err(FormatError::GetNotSupported(Command::SpeakerVolume))
    );
    assert!(matches!(
        parse("%1POWR ?1", None),
        Err(FormatError::UnexpectedGetParameter { .. })
    ));
    assert_eq!(
        parse("%2INNM ?", None),
        Err(FormatError::MissingGetParameter(Command::InputTerminalName))
    );
}

#[test]
fn test_parse_invalid_parameter() {
    assert!(matches!(
        parse("%1ERST=000003", Some(false)),
        Err(FormatError::InvalidParameter {
            command: Command::ErrorStatus,
            ..
        })
    ));
    assert!(matches!(
        parse("%1POWR=maybe", Some(true)),
        Err(FormatError::InvalidSetResponse { .. })
    ));
}

// =============================================================================
// Byte Boundary Tests
// =============================================================================

#[test]
fn test_latin1_boundary() {
    let text = "%1NAME=Salle \u{e9}t\u{e9}";
    let bytes = encode(text).unwrap();
    assert_eq!(bytes.len(), text.chars().count());
    assert_eq!(decode(&bytes), text);

    assert_eq!(encode("\u{20ac}"), Err(FormatError::Unencodable('\u{20ac}')));
}

#[test]
fn test_longest_message_fits() {
    let models = "M".repeat(128);
    let text = format!("%2RLMP={}", models);
    let message = parse(&text, Some(false)).unwrap();
    let encoded = encode_message(&message).unwrap();
    assert_eq!(encoded.len(), MAX_MESSAGE_SIZE);
}
