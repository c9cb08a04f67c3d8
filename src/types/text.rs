//! Bounded text fields
//!
//! Names and identification strings are limited in length and to a
//! character range. Ranges are Unicode scalar values; the wire carries
//! one byte per character.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// Printable ASCII
const PRINTABLE: (char, char) = (' ', '~');

/// Printable ASCII plus the upper half of Latin-1
const EXTENDED: (char, char) = (' ', '\u{ff}');

fn validate(
    field: &'static str,
    text: &str,
    max: usize,
    (min_char, max_char): (char, char),
) -> Result<(), ValidationError> {
    if let Some(character) = text.chars().find(|c| *c < min_char || *c > max_char) {
        return Err(ValidationError::InvalidCharacter {
            field,
            character,
            min: min_char,
            max: max_char,
        });
    }
    let length = text.chars().count();
    if length > max {
        return Err(ValidationError::TooLong { field, length, max });
    }
    Ok(())
}

macro_rules! bounded_text {
    ($(#[$meta:meta])* $name:ident, $field:literal, $max:expr, $range:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Longest accepted value, in characters
            pub const MAX_LENGTH: usize = $max;

            pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
                let text = text.into();
                validate($field, &text, $max, $range)?;
                Ok($name(text))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                $name::new(text)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

bounded_text!(
    /// Projector name (`NAME`)
    ProjectorName, "projector name", 64, EXTENDED
);
bounded_text!(
    /// Manufacturer name (`INF1`)
    ManufacturerName, "manufacturer name", 32, PRINTABLE
);
bounded_text!(
    /// Product name (`INF2`)
    ProductName, "product name", 32, PRINTABLE
);
bounded_text!(
    /// Free-form manufacturer information (`INFO`)
    OtherInformation, "other information", 32, PRINTABLE
);
bounded_text!(
    /// Serial number (`SNUM`)
    SerialNumber, "serial number", 32, PRINTABLE
);
bounded_text!(
    /// Software version (`SVER`)
    SoftwareVersion, "software version", 32, PRINTABLE
);
bounded_text!(
    /// Human-readable label of a class 2 input (`INNM`)
    InputTerminalName, "input terminal name", 64, EXTENDED
);
bounded_text!(
    /// Space-separated replacement part model numbers (`RLMP`, `RFIL`)
    ModelNumbers, "model numbers", 128, PRINTABLE
);

impl ModelNumbers {
    /// Individual model numbers
    pub fn models(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

/// Authentication password, at most 32 printable ASCII characters
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    pub const MAX_LENGTH: usize = 32;

    pub fn new(text: impl Into<String>) -> Result<Self, ValidationError> {
        let text = text.into();
        validate("password", &text, Self::MAX_LENGTH, PRINTABLE)?;
        Ok(Password(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for Password {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Password::new(text)
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(<redacted>)")
    }
}
