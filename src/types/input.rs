//! Input switches (`INPT`, `INST`, `INNM`)
//!
//! An input switch is a two-character code: the input type digit followed
//! by a channel. Class 1 allows types 1-5 with channels 1-9; class 2 adds
//! the internal type 6 and channels A-Z.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::ValidationError;

token_enum! {
    /// Kind of input terminal
    InputType, "input type" {
        Rgb = "1",
        Video = "2",
        Digital = "3",
        Storage = "4",
        Network = "5",
        /// Class 2 only
        Internal = "6",
    }
}

/// Input switch as defined by class 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InputSwitchClass1 {
    input_type: InputType,
    channel: u8,
}

/// Input switch as defined by class 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InputSwitchClass2 {
    input_type: InputType,
    channel: char,
}

/// Split a two-character switch code into its type and channel characters
fn split_code(text: &str) -> Result<(InputType, char), ValidationError> {
    let invalid = || ValidationError::InvalidInputSwitch(text.to_string());
    let mut chars = text.chars();
    let (Some(kind), Some(channel), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(invalid());
    };
    let input_type = kind.to_string().parse::<InputType>().map_err(|_| invalid())?;
    Ok((input_type, channel))
}

impl InputSwitchClass1 {
    pub fn new(input_type: InputType, channel: u8) -> Result<Self, ValidationError> {
        if input_type == InputType::Internal || !(1..=9).contains(&channel) {
            return Err(ValidationError::InvalidInputSwitch(format!(
                "{}{}",
                input_type, channel
            )));
        }
        Ok(InputSwitchClass1 {
            input_type,
            channel,
        })
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn channel(&self) -> u8 {
        self.channel
    }
}

impl FromStr for InputSwitchClass1 {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (input_type, channel) = split_code(text)?;
        let channel = channel
            .to_digit(10)
            .ok_or_else(|| ValidationError::InvalidInputSwitch(text.to_string()))?;
        InputSwitchClass1::new(input_type, channel as u8)
            .map_err(|_| ValidationError::InvalidInputSwitch(text.to_string()))
    }
}

impl fmt::Display for InputSwitchClass1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.input_type, self.channel)
    }
}

impl InputSwitchClass2 {
    pub fn new(input_type: InputType, channel: char) -> Result<Self, ValidationError> {
        if !matches!(channel, '1'..='9' | 'A'..='Z') {
            return Err(ValidationError::InvalidInputSwitch(format!(
                "{}{}",
                input_type, channel
            )));
        }
        Ok(InputSwitchClass2 {
            input_type,
            channel,
        })
    }

    pub fn input_type(&self) -> InputType {
        self.input_type
    }

    pub fn channel(&self) -> char {
        self.channel
    }
}

impl FromStr for InputSwitchClass2 {
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (input_type, channel) = split_code(text)?;
        InputSwitchClass2::new(input_type, channel)
            .map_err(|_| ValidationError::InvalidInputSwitch(text.to_string()))
    }
}

impl fmt::Display for InputSwitchClass2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.input_type, self.channel)
    }
}

impl From<InputSwitchClass1> for InputSwitchClass2 {
    fn from(switch: InputSwitchClass1) -> Self {
        InputSwitchClass2 {
            input_type: switch.input_type,
            channel: char::from(b'0' + switch.channel),
        }
    }
}

/// Space-separated list of input switches (`INST`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct InputSwitches<T>(Vec<T>);

impl<T> InputSwitches<T> {
    pub fn new(inputs: Vec<T>) -> Self {
        InputSwitches(inputs)
    }

    pub fn inputs(&self) -> &[T] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<T> FromStr for InputSwitches<T>
where
    T: FromStr<Err = ValidationError>,
{
    type Err = ValidationError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.is_empty() {
            return Ok(InputSwitches(Vec::new()));
        }
        text.split(' ')
            .map(str::parse)
            .collect::<Result<Vec<T>, _>>()
            .map(InputSwitches)
    }
}

impl<T: fmt::Display> fmt::Display for InputSwitches<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, input) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", input)?;
        }
        Ok(())
    }
}

impl TryFrom<InputSwitchClass2> for InputSwitchClass1 {
    type Error = ValidationError;

    fn try_from(switch: InputSwitchClass2) -> Result<Self, Self::Error> {
        let channel = switch
            .channel
            .to_digit(10)
            .ok_or_else(|| ValidationError::InvalidInputSwitch(switch.to_string()))?;
        InputSwitchClass1::new(switch.input_type, channel as u8)
    }
}
