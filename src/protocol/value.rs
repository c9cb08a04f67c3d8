//! Typed parameter values
//!
//! [`ValueKind`] names the grammar of a parameter slot in the command
//! table; [`Value`] is a parsed parameter of one of those kinds.

use std::fmt;

use serde::Serialize;

use crate::error::ValidationError;
use crate::types::{
    Class, ErrorStatus, FilterUsageTime, Freeze, InputResolution, InputSwitchClass1,
    InputSwitchClass2, InputSwitches, InputTerminalName, LampsStatus, ManufacturerName,
    ModelNumbers, MuteState, OtherInformation, PowerInstruction, PowerStatus, ProductName,
    ProjectorName, Resolution, SerialNumber, SoftwareVersion, VolumeAdjustment,
};

/// Grammar of a parameter slot
///
/// `InputSwitch` and `InputSwitchList` resolve to their class 1 or class 2
/// form from the class of the enclosing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    PowerStatus,
    PowerInstruction,
    InputSwitch,
    InputSwitchList,
    MuteState,
    ErrorStatus,
    LampsStatus,
    ProjectorName,
    ManufacturerName,
    ProductName,
    OtherInformation,
    Class,
    SerialNumber,
    SoftwareVersion,
    InputTerminalName,
    InputResolution,
    Resolution,
    FilterUsageTime,
    ModelNumbers,
    VolumeAdjustment,
    Freeze,
}

/// A parsed parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Value {
    PowerStatus(PowerStatus),
    PowerInstruction(PowerInstruction),
    InputSwitchClass1(InputSwitchClass1),
    InputSwitchClass2(InputSwitchClass2),
    InputListClass1(InputSwitches<InputSwitchClass1>),
    InputListClass2(InputSwitches<InputSwitchClass2>),
    MuteState(MuteState),
    ErrorStatus(ErrorStatus),
    LampsStatus(LampsStatus),
    ProjectorName(ProjectorName),
    ManufacturerName(ManufacturerName),
    ProductName(ProductName),
    OtherInformation(OtherInformation),
    Class(Class),
    SerialNumber(SerialNumber),
    SoftwareVersion(SoftwareVersion),
    InputTerminalName(InputTerminalName),
    InputResolution(InputResolution),
    Resolution(Resolution),
    FilterUsageTime(FilterUsageTime),
    ModelNumbers(ModelNumbers),
    VolumeAdjustment(VolumeAdjustment),
    Freeze(Freeze),
}

impl ValueKind {
    /// Parse parameter text of this kind inside a message of `class`
    pub fn parse(self, class: Class, text: &str) -> Result<Value, ValidationError> {
        let value = match self {
            ValueKind::PowerStatus => Value::PowerStatus(text.parse()?),
            ValueKind::PowerInstruction => Value::PowerInstruction(text.parse()?),
            ValueKind::InputSwitch => match class {
                Class::One => Value::InputSwitchClass1(text.parse()?),
                Class::Two => Value::InputSwitchClass2(text.parse()?),
            },
            ValueKind::InputSwitchList => match class {
                Class::One => Value::InputListClass1(text.parse()?),
                Class::Two => Value::InputListClass2(text.parse()?),
            },
            ValueKind::MuteState => Value::MuteState(text.parse()?),
            ValueKind::ErrorStatus => Value::ErrorStatus(text.parse()?),
            ValueKind::LampsStatus => Value::LampsStatus(text.parse()?),
            ValueKind::ProjectorName => Value::ProjectorName(text.parse()?),
            ValueKind::ManufacturerName => Value::ManufacturerName(text.parse()?),
            ValueKind::ProductName => Value::ProductName(text.parse()?),
            ValueKind::OtherInformation => Value::OtherInformation(text.parse()?),
            ValueKind::Class => Value::Class(text.parse()?),
            ValueKind::SerialNumber => Value::SerialNumber(text.parse()?),
            ValueKind::SoftwareVersion => Value::SoftwareVersion(text.parse()?),
            ValueKind::InputTerminalName => Value::InputTerminalName(text.parse()?),
            ValueKind::InputResolution => Value::InputResolution(text.parse()?),
            ValueKind::Resolution => Value::Resolution(text.parse()?),
            ValueKind::FilterUsageTime => Value::FilterUsageTime(text.parse()?),
            ValueKind::ModelNumbers => Value::ModelNumbers(text.parse()?),
            ValueKind::VolumeAdjustment => Value::VolumeAdjustment(text.parse()?),
            ValueKind::Freeze => Value::Freeze(text.parse()?),
        };
        Ok(value)
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::PowerStatus(_) => ValueKind::PowerStatus,
            Value::PowerInstruction(_) => ValueKind::PowerInstruction,
            Value::InputSwitchClass1(_) | Value::InputSwitchClass2(_) => ValueKind::InputSwitch,
            Value::InputListClass1(_) | Value::InputListClass2(_) => ValueKind::InputSwitchList,
            Value::MuteState(_) => ValueKind::MuteState,
            Value::ErrorStatus(_) => ValueKind::ErrorStatus,
            Value::LampsStatus(_) => ValueKind::LampsStatus,
            Value::ProjectorName(_) => ValueKind::ProjectorName,
            Value::ManufacturerName(_) => ValueKind::ManufacturerName,
            Value::ProductName(_) => ValueKind::ProductName,
            Value::OtherInformation(_) => ValueKind::OtherInformation,
            Value::Class(_) => ValueKind::Class,
            Value::SerialNumber(_) => ValueKind::SerialNumber,
            Value::SoftwareVersion(_) => ValueKind::SoftwareVersion,
            Value::InputTerminalName(_) => ValueKind::InputTerminalName,
            Value::InputResolution(_) => ValueKind::InputResolution,
            Value::Resolution(_) => ValueKind::Resolution,
            Value::FilterUsageTime(_) => ValueKind::FilterUsageTime,
            Value::ModelNumbers(_) => ValueKind::ModelNumbers,
            Value::VolumeAdjustment(_) => ValueKind::VolumeAdjustment,
            Value::Freeze(_) => ValueKind::Freeze,
        }
    }

    /// Class this value's grammar is tied to, if any
    pub fn class_constraint(&self) -> Option<Class> {
        match self {
            Value::InputSwitchClass1(_) | Value::InputListClass1(_) => Some(Class::One),
            Value::InputSwitchClass2(_) | Value::InputListClass2(_) => Some(Class::Two),
            _ => None,
        }
    }

    /// Whether this value may fill a slot of `kind` in a message of `class`
    pub fn fits(&self, kind: ValueKind, class: Class) -> bool {
        self.kind() == kind && self.class_constraint().map_or(true, |c| c == class)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::PowerStatus(v) => fmt::Display::fmt(v, f),
            Value::PowerInstruction(v) => fmt::Display::fmt(v, f),
            Value::InputSwitchClass1(v) => fmt::Display::fmt(v, f),
            Value::InputSwitchClass2(v) => fmt::Display::fmt(v, f),
            Value::InputListClass1(v) => fmt::Display::fmt(v, f),
            Value::InputListClass2(v) => fmt::Display::fmt(v, f),
            Value::MuteState(v) => fmt::Display::fmt(v, f),
            Value::ErrorStatus(v) => fmt::Display::fmt(v, f),
            Value::LampsStatus(v) => fmt::Display::fmt(v, f),
            Value::ProjectorName(v) => fmt::Display::fmt(v, f),
            Value::ManufacturerName(v) => fmt::Display::fmt(v, f),
            Value::ProductName(v) => fmt::Display::fmt(v, f),
            Value::OtherInformation(v) => fmt::Display::fmt(v, f),
            Value::Class(v) => fmt::Display::fmt(v, f),
            Value::SerialNumber(v) => fmt::Display::fmt(v, f),
            Value::SoftwareVersion(v) => fmt::Display::fmt(v, f),
            Value::InputTerminalName(v) => fmt::Display::fmt(v, f),
            Value::InputResolution(v) => fmt::Display::fmt(v, f),
            Value::Resolution(v) => fmt::Display::fmt(v, f),
            Value::FilterUsageTime(v) => fmt::Display::fmt(v, f),
            Value::ModelNumbers(v) => fmt::Display::fmt(v, f),
            Value::VolumeAdjustment(v) => fmt::Display::fmt(v, f),
            Value::Freeze(v) => fmt::Display::fmt(v, f),
        }
    }
}
