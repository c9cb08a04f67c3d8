//! Protocol codec
//!
//! Converts between wire text and [`Message`] values using the command
//! grammar table.
//!
//! ## Wire Format
//! ```text
//! ┌─────┬───────┬─────────┬───────────────────────────────────┐
//! │ '%' │ class │ command │ body                              │
//! │ (1) │  (1)  │   (4)   │                                   │
//! └─────┴───────┴─────────┴───────────────────────────────────┘
//!
//! get request   " ?" [parameter]
//! set request   " "  payload
//! response      "="  value | OK | ERR1..ERR4
//! ```
//!
//! Messages are CR-terminated on the wire. [`format`] never appends the CR;
//! [`parse`] tolerates one trailing CR.

use super::command::Command;
use super::message::{Body, GetResponse, Message, Request, Response, SetResponse};
use crate::error::FormatError;
use crate::types::{Class, ErrorCode, OK};

/// Longest message on the wire, terminating CR included
pub const MAX_MESSAGE_SIZE: usize = 136;

/// Message terminator
pub const TERMINATOR: u8 = b'\r';

/// Identifier character opening every message
pub const IDENTIFIER: char = '%';

/// Offset of the separator following `%`, class and command
const SEPARATOR_INDEX: usize = 6;

/// How a bare `ERRn` response is read when the caller gives no hint
///
/// The wire cannot distinguish a failed get from a failed set. A bare `OK`
/// is always a set acknowledgement.
/// The default reads such a response as a set response; this is a
/// heuristic, not something the protocol guarantees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AmbiguousCode {
    #[default]
    SetResponse,
    GetFailure,
}

// =============================================================================
// Formatting
// =============================================================================

/// Format a message to its canonical wire text (without CR)
pub fn format(message: &Message) -> String {
    let mut text = String::with_capacity(MAX_MESSAGE_SIZE);
    text.push(IDENTIFIER);
    text.push(message.class().digit());
    text.push_str(message.command().code());

    match message.body() {
        Body::Request(Request::Get(None)) => text.push_str(" ?"),
        Body::Request(Request::Get(Some(parameter))) => {
            text.push_str(" ?");
            text.push_str(&parameter.to_string());
        }
        Body::Request(Request::Set(value)) => {
            text.push(' ');
            text.push_str(&value.to_string());
        }
        Body::Response(Response::Get(GetResponse::Success(value))) => {
            text.push('=');
            text.push_str(&value.to_string());
        }
        Body::Response(Response::Get(GetResponse::Failure(code)))
        | Body::Response(Response::Set(SetResponse::Failure(code))) => {
            text.push('=');
            text.push_str(code.as_str());
        }
        Body::Response(Response::Set(SetResponse::Ok)) => {
            text.push('=');
            text.push_str(OK);
        }
    }

    text
}

// =============================================================================
// Parsing
// =============================================================================

/// Parse wire text into a message
///
/// `awaiting_set` is the caller's hint for bare `OK`/`ERRn` responses:
/// `Some(true)` when a set response is expected, `Some(false)` for a get.
/// Without a hint [`AmbiguousCode::default`] applies.
pub fn parse(text: &str, awaiting_set: Option<bool>) -> Result<Message, FormatError> {
    parse_with(text, awaiting_set, AmbiguousCode::default())
}

/// [`parse`] with an explicit reading for unhinted bare codes
pub fn parse_with(
    text: &str,
    awaiting_set: Option<bool>,
    ambiguous: AmbiguousCode,
) -> Result<Message, FormatError> {
    let text = text.strip_suffix('\r').unwrap_or(text);

    let mut chars = text.chars();
    match chars.next() {
        Some(IDENTIFIER) => {}
        Some(other) => return Err(FormatError::InvalidIdentifier(other)),
        None => return Err(FormatError::TooShort(text.to_string())),
    }

    let class_digit = chars
        .next()
        .ok_or_else(|| FormatError::TooShort(text.to_string()))?;
    let class = Class::from_digit(class_digit).ok_or(FormatError::UnknownClass(class_digit))?;

    let code = match text.get(2..SEPARATOR_INDEX) {
        Some(code) => code,
        None if text.len() < SEPARATOR_INDEX => {
            return Err(FormatError::TooShort(text.to_string()))
        }
        None => return Err(FormatError::UnknownCommand(chars.take(4).collect())),
    };
    let command =
        Command::from_code(code).ok_or_else(|| FormatError::UnknownCommand(code.to_string()))?;
    if !command.supports(class) {
        return Err(FormatError::CommandNotInClass { command, class });
    }

    // Index 6 is a char boundary: the first six characters are ASCII here
    let rest = &text[SEPARATOR_INDEX..];
    let mut rest_chars = rest.chars();
    let separator = rest_chars
        .next()
        .ok_or_else(|| FormatError::TooShort(text.to_string()))?;
    let parameter = rest_chars.as_str();

    let body = match separator {
        ' ' => match parameter.strip_prefix('?') {
            Some(get_parameter) => parse_get_request(class, command, get_parameter)?,
            None => parse_set_request(class, command, parameter)?,
        },
        '=' => parse_response(class, command, parameter, awaiting_set, ambiguous)?,
        other => return Err(FormatError::UnknownSeparator(other)),
    };

    Message::new(class, command, body)
}

fn invalid_parameter(
    command: Command,
    parameter: &str,
) -> impl FnOnce(crate::error::ValidationError) -> FormatError + '_ {
    move |source| FormatError::InvalidParameter {
        command,
        parameter: parameter.to_string(),
        source,
    }
}

fn parse_get_request(class: Class, command: Command, parameter: &str) -> Result<Body, FormatError> {
    let get = command
        .grammar()
        .get
        .ok_or(FormatError::GetNotSupported(command))?;

    let value = match (get.parameter, parameter.is_empty()) {
        (None, true) => None,
        (None, false) => {
            return Err(FormatError::UnexpectedGetParameter {
                command,
                parameter: parameter.to_string(),
            })
        }
        (Some(_), true) => return Err(FormatError::MissingGetParameter(command)),
        (Some(kind), false) => Some(
            kind.parse(class, parameter)
                .map_err(invalid_parameter(command, parameter))?,
        ),
    };

    Ok(Body::Request(Request::Get(value)))
}

fn parse_set_request(class: Class, command: Command, parameter: &str) -> Result<Body, FormatError> {
    let kind = command
        .grammar()
        .set
        .ok_or(FormatError::SetNotSupported(command))?;
    let value = kind
        .parse(class, parameter)
        .map_err(invalid_parameter(command, parameter))?;
    Ok(Body::Request(Request::Set(value)))
}

fn parse_response(
    class: Class,
    command: Command,
    parameter: &str,
    awaiting_set: Option<bool>,
    ambiguous: AmbiguousCode,
) -> Result<Body, FormatError> {
    let grammar = command.grammar();

    // The table settles commands that only have one form
    let is_set = match (grammar.get, grammar.set.is_some()) {
        (Some(_), false) => false,
        (None, _) => true,
        (Some(_), true) => match awaiting_set {
            Some(hint) => hint,
            // OK only ever acknowledges a set; the policy covers ERR1..ERR4
            None => {
                parameter == OK
                    || (ErrorCode::is_bare_code(parameter)
                        && ambiguous == AmbiguousCode::SetResponse)
            }
        },
    };

    if is_set {
        let response = if parameter == OK {
            SetResponse::Ok
        } else {
            let code = parameter
                .parse::<ErrorCode>()
                .map_err(|_| FormatError::InvalidSetResponse {
                    command,
                    text: parameter.to_string(),
                })?;
            SetResponse::Failure(code)
        };
        return Ok(Body::Response(Response::Set(response)));
    }

    if let Ok(code) = parameter.parse::<ErrorCode>() {
        return Ok(Body::Response(Response::Get(GetResponse::Failure(code))));
    }

    // `get` is present on this path: the `(None, _)` arm always reads as a set
    let kind = grammar
        .get
        .map(|get| get.response)
        .ok_or(FormatError::GetNotSupported(command))?;
    let value = kind
        .parse(class, parameter)
        .map_err(invalid_parameter(command, parameter))?;
    Ok(Body::Response(Response::Get(GetResponse::Success(value))))
}

// =============================================================================
// Byte Boundary
// =============================================================================

/// Encode wire text as bytes, one byte per character
pub fn encode(text: &str) -> Result<Vec<u8>, FormatError> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).map_err(|_| FormatError::Unencodable(c)))
        .collect()
}

/// Decode wire bytes as text, one character per byte
pub fn decode(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Encode a message with its terminating CR
pub fn encode_message(message: &Message) -> Result<Vec<u8>, FormatError> {
    let mut bytes = encode(&format(message))?;
    bytes.push(TERMINATOR);
    Ok(bytes)
}
