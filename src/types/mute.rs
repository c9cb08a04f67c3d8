//! AV mute (`AVMT`)

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

token_enum! {
    /// What a mute setting applies to
    MuteTarget, "mute target" {
        Video = "1",
        Audio = "2",
        AudioAndVideo = "3",
    }
}

/// Mute target and whether muting is enabled, e.g. `31` = audio and video muted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MuteState {
    pub target: MuteTarget,
    pub muted: bool,
}

impl MuteState {
    pub fn new(target: MuteTarget, muted: bool) -> Self {
        MuteState { target, muted }
    }
}

impl FromStr for MuteState {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::InvalidValue {
            field: "mute state",
            value: text.to_string(),
        };
        if text.len() != 2 || !text.is_ascii() {
            return Err(invalid());
        }
        let target = text[..1].parse::<MuteTarget>().map_err(|_| invalid())?;
        let muted = match &text[1..] {
            "0" => false,
            "1" => true,
            _ => return Err(invalid()),
        };
        Ok(MuteState { target, muted })
    }
}

impl fmt::Display for MuteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.target, if self.muted { 1 } else { 0 })
    }
}
