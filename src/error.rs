//! Error types for the PJLink engine
//!
//! Provides one error enum per failure family plus a unified error type
//! for client operations.

use thiserror::Error;

use crate::protocol::Command;
use crate::types::{Class, ErrorCode};

/// Result type alias using PjlinkError
pub type Result<T> = std::result::Result<T, PjlinkError>;

/// Unified error type for PJLink operations
#[derive(Debug, Error)]
pub enum PjlinkError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("connection closed by peer")]
    ConnectionClosed,

    #[error("message of {length} bytes exceeds the {max} byte limit")]
    MessageTooLong { length: usize, max: usize },

    // -------------------------------------------------------------------------
    // Wire and Value Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    // -------------------------------------------------------------------------
    // Session Errors
    // -------------------------------------------------------------------------
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    // -------------------------------------------------------------------------
    // Command Outcomes
    // -------------------------------------------------------------------------
    #[error("query {command} failed: {code}")]
    QueryFailed { command: Command, code: ErrorCode },

    #[error("set {command} failed: {code}")]
    SetFailed { command: Command, code: ErrorCode },

    // -------------------------------------------------------------------------
    // Collaborator Errors
    // -------------------------------------------------------------------------
    #[error("random source failure: {0}")]
    Random(String),
}

/// Malformed wire text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("message too short: {0:?}")]
    TooShort(String),

    #[error("invalid identifier {0:?}, expected '%'")]
    InvalidIdentifier(char),

    #[error("unknown class digit {0:?}")]
    UnknownClass(char),

    #[error("unknown command {0:?}")]
    UnknownCommand(String),

    #[error("unknown separator {0:?}")]
    UnknownSeparator(char),

    #[error("command {command} is not available in class {class}")]
    CommandNotInClass { command: Command, class: Class },

    #[error("command {0} has no get form")]
    GetNotSupported(Command),

    #[error("command {0} has no set form")]
    SetNotSupported(Command),

    #[error("get request for {command} must not carry a parameter, found {parameter:?}")]
    UnexpectedGetParameter { command: Command, parameter: String },

    #[error("get request for {0} requires a parameter")]
    MissingGetParameter(Command),

    #[error("set response for {command} must be OK or ERR1-ERR4, found {text:?}")]
    InvalidSetResponse { command: Command, text: String },

    #[error("invalid parameter {parameter:?} for {command}: {source}")]
    InvalidParameter {
        command: Command,
        parameter: String,
        #[source]
        source: ValidationError,
    },

    #[error("{command} value {value:?} reads as an error code on the wire")]
    ValueReadsAsCode { command: Command, value: String },

    #[error("value kind does not match the {command} grammar for class {class}")]
    PayloadMismatch { command: Command, class: Class },

    #[error("character {0:?} cannot be carried on the wire")]
    Unencodable(char),

    #[error("unknown notification {0:?}")]
    UnknownNotification(String),

    #[error("invalid notification {text:?}: {source}")]
    InvalidNotification {
        text: String,
        #[source]
        source: ValidationError,
    },
}

/// Value construction failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field}: character {character:?} outside allowed range {min:?}..={max:?}")]
    InvalidCharacter {
        field: &'static str,
        character: char,
        min: char,
        max: char,
    },

    #[error("{field}: length {length} exceeds maximum {max}")]
    TooLong {
        field: &'static str,
        length: usize,
        max: usize,
    },

    #[error("{field}: invalid value {value:?}")]
    InvalidValue { field: &'static str, value: String },

    #[error("invalid error status {0:?}")]
    InvalidErrorStatus(String),

    #[error("lamp status must list usage/state pairs, found {0} tokens")]
    OddLampCount(usize),

    #[error("lamp count {count} outside 1..={max}")]
    LampCount { count: usize, max: usize },

    #[error("{field}: {value} exceeds maximum {max}")]
    OutOfRange {
        field: &'static str,
        value: u64,
        max: u64,
    },

    #[error("invalid resolution {0:?}")]
    InvalidResolution(String),

    #[error("invalid input switch {0:?}")]
    InvalidInputSwitch(String),

    #[error("invalid hex buffer {0:?}")]
    InvalidHex(String),

    #[error("expected {expected} bytes, found {actual}")]
    InvalidDataBufferCount { expected: usize, actual: usize },

    #[error("invalid MAC address {0:?}")]
    InvalidMacAddress(String),
}

/// Request/response consistency failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("response command {actual} does not match request command {expected}")]
    CommandMismatch { expected: Command, actual: Command },

    #[error("expected a {expected} response to {command}")]
    ResponseKindMismatch {
        command: Command,
        expected: &'static str,
    },

    #[error("{0} message is a response and cannot be sent")]
    NotARequest(Command),

    #[error("expected a response, received a request for {0}")]
    UnexpectedRequest(Command),

    #[error("unexpected value in {0} response")]
    UnexpectedValue(Command),
}

/// Authentication handshake failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("malformed connection banner {0:?}")]
    InvalidBanner(String),

    #[error("projector requires authentication but no password was provided")]
    NoPasswordProvided,

    #[error("invalid password: {0}")]
    InvalidPassword(ValidationError),

    #[error("malformed challenge {text:?}: {source}")]
    InvalidChallenge {
        text: String,
        #[source]
        source: ValidationError,
    },

    #[error("projector rejected authentication")]
    Rejected,

    #[error("handshake step {0} is not valid in the current state")]
    OutOfOrder(&'static str),
}
