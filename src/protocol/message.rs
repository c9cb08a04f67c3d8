//! Message envelope
//!
//! A [`Message`] is always consistent with the command table: the command
//! exists in the message class and every carried value matches the slot
//! the grammar defines for it.

use serde::Serialize;

use super::command::Command;
use super::value::Value;
use crate::error::FormatError;
use crate::types::{Class, ErrorCode};

/// Request sent to a projector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Request {
    /// ` ?` with an optional parameter (only `INNM` carries one)
    Get(Option<Value>),
    /// ` ` followed by the payload
    Set(Value),
}

/// Outcome of a get
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum GetResponse {
    Success(Value),
    Failure(ErrorCode),
}

/// Outcome of a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SetResponse {
    Ok,
    Failure(ErrorCode),
}

/// Response from a projector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Response {
    Get(GetResponse),
    Set(SetResponse),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Body {
    Request(Request),
    Response(Response),
}

/// `%` + class + command + body
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    class: Class,
    command: Command,
    body: Body,
}

impl Message {
    /// Build a message, checking it against the command table
    pub fn new(class: Class, command: Command, body: Body) -> Result<Self, FormatError> {
        if !command.supports(class) {
            return Err(FormatError::CommandNotInClass { command, class });
        }

        let grammar = command.grammar();
        let mismatch = || FormatError::PayloadMismatch { command, class };

        match &body {
            Body::Request(Request::Get(parameter)) => {
                let get = grammar.get.ok_or(FormatError::GetNotSupported(command))?;
                match (get.parameter, parameter) {
                    (None, None) => {}
                    (Some(kind), Some(value)) if value.fits(kind, class) => {}
                    (Some(_), Some(_)) => return Err(mismatch()),
                    (Some(_), None) => return Err(FormatError::MissingGetParameter(command)),
                    (None, Some(value)) => {
                        return Err(FormatError::UnexpectedGetParameter {
                            command,
                            parameter: value.to_string(),
                        })
                    }
                }
            }
            Body::Request(Request::Set(value)) => {
                let kind = grammar.set.ok_or(FormatError::SetNotSupported(command))?;
                if !value.fits(kind, class) {
                    return Err(mismatch());
                }
            }
            Body::Response(Response::Get(outcome)) => {
                let get = grammar.get.ok_or(FormatError::GetNotSupported(command))?;
                if let GetResponse::Success(value) = outcome {
                    if !value.fits(get.response, class) {
                        return Err(mismatch());
                    }
                    // A get response of `ERRn` is always read back as a failure
                    let text = value.to_string();
                    if text.parse::<ErrorCode>().is_ok() {
                        return Err(FormatError::ValueReadsAsCode {
                            command,
                            value: text,
                        });
                    }
                }
            }
            Body::Response(Response::Set(_)) => {
                if grammar.set.is_none() {
                    return Err(FormatError::SetNotSupported(command));
                }
            }
        }

        Ok(Message {
            class,
            command,
            body,
        })
    }

    /// Parameterless get request
    pub fn get(class: Class, command: Command) -> Result<Self, FormatError> {
        Message::new(class, command, Body::Request(Request::Get(None)))
    }

    /// Get request carrying a parameter
    pub fn get_with(class: Class, command: Command, parameter: Value) -> Result<Self, FormatError> {
        Message::new(class, command, Body::Request(Request::Get(Some(parameter))))
    }

    pub fn set(class: Class, command: Command, value: Value) -> Result<Self, FormatError> {
        Message::new(class, command, Body::Request(Request::Set(value)))
    }

    pub fn get_success(class: Class, command: Command, value: Value) -> Result<Self, FormatError> {
        Message::new(
            class,
            command,
            Body::Response(Response::Get(GetResponse::Success(value))),
        )
    }

    pub fn get_failure(class: Class, command: Command, code: ErrorCode) -> Result<Self, FormatError> {
        Message::new(
            class,
            command,
            Body::Response(Response::Get(GetResponse::Failure(code))),
        )
    }

    pub fn set_response(
        class: Class,
        command: Command,
        response: SetResponse,
    ) -> Result<Self, FormatError> {
        Message::new(class, command, Body::Response(Response::Set(response)))
    }

    pub fn class(&self) -> Class {
        self.class
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn into_body(self) -> Body {
        self.body
    }

    pub fn is_request(&self) -> bool {
        matches!(self.body, Body::Request(_))
    }

    pub fn is_set_request(&self) -> bool {
        matches!(self.body, Body::Request(Request::Set(_)))
    }

    pub fn is_set_response(&self) -> bool {
        matches!(self.body, Body::Response(Response::Set(_)))
    }
}
