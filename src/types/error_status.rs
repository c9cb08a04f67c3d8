//! Error status (`ERST`)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

token_enum! {
    /// Severity of one error status component
    ErrorLevel, "error level" {
        Ok = "0",
        Warning = "1",
        Error = "2",
    }
}

/// Six ordered component levels: fan, lamp, temperature, cover open,
/// filter, other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ErrorStatus {
    pub fan: ErrorLevel,
    pub lamp: ErrorLevel,
    pub temperature: ErrorLevel,
    pub cover_open: ErrorLevel,
    pub filter: ErrorLevel,
    pub other: ErrorLevel,
}

impl ErrorStatus {
    /// Status with every component at [`ErrorLevel::Ok`]
    pub const CLEAR: ErrorStatus = ErrorStatus {
        fan: ErrorLevel::Ok,
        lamp: ErrorLevel::Ok,
        temperature: ErrorLevel::Ok,
        cover_open: ErrorLevel::Ok,
        filter: ErrorLevel::Ok,
        other: ErrorLevel::Ok,
    };

    /// Components in wire order
    pub fn components(&self) -> [ErrorLevel; 6] {
        [
            self.fan,
            self.lamp,
            self.temperature,
            self.cover_open,
            self.filter,
            self.other,
        ]
    }

    /// Whether any component reports a warning or an error
    pub fn has_faults(&self) -> bool {
        self.components().iter().any(|level| *level != ErrorLevel::Ok)
    }
}

impl FromStr for ErrorStatus {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidErrorStatus(text.to_string());

        if text.len() != 6 || !text.is_ascii() {
            return Err(invalid());
        }

        let mut levels = [ErrorLevel::Ok; 6];
        for (index, slot) in levels.iter_mut().enumerate() {
            *slot = text[index..index + 1].parse().map_err(|_| invalid())?;
        }

        let [fan, lamp, temperature, cover_open, filter, other] = levels;
        Ok(ErrorStatus {
            fan,
            lamp,
            temperature,
            cover_open,
            filter,
            other,
        })
    }
}

impl fmt::Display for ErrorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for level in self.components() {
            f.write_str(level.as_str())?;
        }
        Ok(())
    }
}
