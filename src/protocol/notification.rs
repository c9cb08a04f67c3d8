//! Status notifications and search
//!
//! Class 2 projectors push `%2<CODE>=<value>` datagrams to UDP port 4352
//! when their state changes. The same port carries the search request
//! (`%2SRCH`) and its acknowledgement (`%2ACKN=<MAC>`).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::FormatError;
use crate::types::{ErrorStatus, InputSwitchClass2, MacAddress, PowerInstruction};

/// UDP port for notifications and search
pub const NOTIFICATION_PORT: u16 = 4352;

const PREFIX: &str = "%2";
const SEARCH_REQUEST: &str = "%2SRCH";
const SEARCH_ACK: &str = "ACKN";

/// Unsolicited state change
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Notification {
    /// `LKUP`: projector came online
    LinkUp(MacAddress),
    /// `ERST`
    ErrorStatus(ErrorStatus),
    /// `POWR`
    Power(PowerInstruction),
    /// `INPT`
    Input(InputSwitchClass2),
}

/// Split `%2CODE=value` into code and value
fn split(text: &str) -> Result<(&str, &str), FormatError> {
    let text = text.strip_suffix('\r').unwrap_or(text);
    let body = text
        .strip_prefix(PREFIX)
        .ok_or_else(|| FormatError::UnknownNotification(text.to_string()))?;
    match (body.get(..4), body.get(4..5), body.get(5..)) {
        (Some(code), Some("="), Some(value)) => Ok((code, value)),
        _ => Err(FormatError::UnknownNotification(text.to_string())),
    }
}

fn parse_value<T>(text: &str, value: &str) -> Result<T, FormatError>
where
    T: FromStr<Err = crate::error::ValidationError>,
{
    value
        .parse()
        .map_err(|source| FormatError::InvalidNotification {
            text: text.to_string(),
            source,
        })
}

impl Notification {
    /// Parse one notification datagram
    pub fn parse(text: &str) -> Result<Self, FormatError> {
        let (code, value) = split(text)?;
        match code {
            "LKUP" => parse_value(text, value).map(Notification::LinkUp),
            "ERST" => parse_value(text, value).map(Notification::ErrorStatus),
            "POWR" => parse_value(text, value).map(Notification::Power),
            "INPT" => parse_value(text, value).map(Notification::Input),
            _ => Err(FormatError::UnknownNotification(text.to_string())),
        }
    }

    /// Four-letter code of this notification
    pub fn code(&self) -> &'static str {
        match self {
            Notification::LinkUp(_) => "LKUP",
            Notification::ErrorStatus(_) => "ERST",
            Notification::Power(_) => "POWR",
            Notification::Input(_) => "INPT",
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}=", PREFIX, self.code())?;
        match self {
            Notification::LinkUp(mac) => write!(f, "{}", mac),
            Notification::ErrorStatus(status) => write!(f, "{}", status),
            Notification::Power(power) => write!(f, "{}", power),
            Notification::Input(input) => write!(f, "{}", input),
        }
    }
}

/// Broadcast search request text (without CR)
pub fn format_search_request() -> &'static str {
    SEARCH_REQUEST
}

/// Parse a search acknowledgement into the responding projector's MAC
pub fn parse_search_ack(text: &str) -> Result<MacAddress, FormatError> {
    let (code, value) = split(text)?;
    if code != SEARCH_ACK {
        return Err(FormatError::UnknownNotification(text.to_string()));
    }
    parse_value(text, value)
}
