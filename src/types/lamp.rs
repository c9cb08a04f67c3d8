//! Lamp and filter usage (`LAMP`, `FILT`)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

/// Largest usage counter a projector reports, in hours
pub const MAX_USAGE_HOURS: u32 = 99_999;

/// Most lamps a single `LAMP` response may describe
pub const MAX_LAMPS: usize = 8;

/// One lamp: cumulative usage and whether it is lit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct LampStatus {
    pub usage_hours: u32,
    pub is_on: bool,
}

/// All lamps of a projector, in lamp order
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LampsStatus(Vec<LampStatus>);

fn parse_usage(field: &'static str, token: &str) -> Result<u32, ValidationError> {
    if token.is_empty() || token.len() > 6 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidValue {
            field,
            value: token.to_string(),
        });
    }
    // At most six digits, always fits
    let value: u32 = token.parse().map_err(|_| ValidationError::InvalidValue {
        field,
        value: token.to_string(),
    })?;
    if value > MAX_USAGE_HOURS {
        return Err(ValidationError::OutOfRange {
            field,
            value: u64::from(value),
            max: u64::from(MAX_USAGE_HOURS),
        });
    }
    Ok(value)
}

impl LampStatus {
    pub fn new(usage_hours: u32, is_on: bool) -> Result<Self, ValidationError> {
        if usage_hours > MAX_USAGE_HOURS {
            return Err(ValidationError::OutOfRange {
                field: "lamp usage",
                value: u64::from(usage_hours),
                max: u64::from(MAX_USAGE_HOURS),
            });
        }
        Ok(LampStatus { usage_hours, is_on })
    }
}

impl LampsStatus {
    pub fn new(lamps: Vec<LampStatus>) -> Result<Self, ValidationError> {
        if lamps.is_empty() || lamps.len() > MAX_LAMPS {
            return Err(ValidationError::LampCount {
                count: lamps.len(),
                max: MAX_LAMPS,
            });
        }
        Ok(LampsStatus(lamps))
    }

    pub fn lamps(&self) -> &[LampStatus] {
        &self.0
    }
}

impl FromStr for LampsStatus {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = text.split(' ').collect();
        if tokens.len() % 2 != 0 {
            return Err(ValidationError::OddLampCount(tokens.len()));
        }

        let lamps = tokens
            .chunks(2)
            .map(|pair| {
                let usage_hours = parse_usage("lamp usage", pair[0])?;
                let is_on = match pair[1] {
                    "0" => false,
                    "1" => true,
                    other => {
                        return Err(ValidationError::InvalidValue {
                            field: "lamp state",
                            value: other.to_string(),
                        })
                    }
                };
                Ok(LampStatus { usage_hours, is_on })
            })
            .collect::<Result<Vec<_>, _>>()?;

        LampsStatus::new(lamps)
    }
}

impl fmt::Display for LampsStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, lamp) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{} {}", lamp.usage_hours, if lamp.is_on { 1 } else { 0 })?;
        }
        Ok(())
    }
}

/// Cumulative filter usage in hours (`FILT`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct FilterUsageTime(u32);

impl FilterUsageTime {
    pub fn new(hours: u32) -> Result<Self, ValidationError> {
        if hours > MAX_USAGE_HOURS {
            return Err(ValidationError::OutOfRange {
                field: "filter usage",
                value: u64::from(hours),
                max: u64::from(MAX_USAGE_HOURS),
            });
        }
        Ok(FilterUsageTime(hours))
    }

    pub fn hours(self) -> u32 {
        self.0
    }
}

impl FromStr for FilterUsageTime {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        parse_usage("filter usage", text).map(FilterUsageTime)
    }
}

impl fmt::Display for FilterUsageTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
