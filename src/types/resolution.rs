//! Resolutions (`IRES`, `RRES`)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// Horizontal x vertical pixel count, both positive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Resolution {
    horizontal: u32,
    vertical: u32,
}

impl Resolution {
    pub fn new(horizontal: u32, vertical: u32) -> Result<Self, ValidationError> {
        if horizontal == 0 || vertical == 0 {
            return Err(ValidationError::InvalidResolution(format!(
                "{}x{}",
                horizontal, vertical
            )));
        }
        Ok(Resolution {
            horizontal,
            vertical,
        })
    }

    pub fn horizontal(&self) -> u32 {
        self.horizontal
    }

    pub fn vertical(&self) -> u32 {
        self.vertical
    }
}

impl FromStr for Resolution {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidResolution(text.to_string());
        let dimension = |part: &str| -> Result<u32, ValidationError> {
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse::<u32>().map_err(|_| invalid())
        };

        let mut parts = text.split('x');
        let (Some(horizontal), Some(vertical), None) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(invalid());
        };

        Resolution::new(dimension(horizontal)?, dimension(vertical)?).map_err(|_| invalid())
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.horizontal, self.vertical)
    }
}

/// Resolution of the active input signal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum InputResolution {
    Signal(Resolution),
    /// `-`: no signal present
    NoSignal,
    /// `*`: signal present but not recognised
    UnknownSignal,
}

impl FromStr for InputResolution {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "-" => Ok(InputResolution::NoSignal),
            "*" => Ok(InputResolution::UnknownSignal),
            other => other.parse().map(InputResolution::Signal),
        }
    }
}

impl fmt::Display for InputResolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputResolution::Signal(resolution) => write!(f, "{}", resolution),
            InputResolution::NoSignal => f.write_str("-"),
            InputResolution::UnknownSignal => f.write_str("*"),
        }
    }
}
