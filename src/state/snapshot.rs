//! Projector state snapshots

use serde::Serialize;

use crate::protocol::Notification;
use crate::types::{
    Class, ErrorStatus, FilterUsageTime, Freeze, InputResolution, InputSwitchClass1,
    InputSwitchClass2, InputSwitches, InputTerminalName, LampsStatus, ManufacturerName,
    ModelNumbers, MuteState, OtherInformation, PowerStatus, ProductName, ProjectorName,
    Resolution, SerialNumber, SoftwareVersion,
};

/// State of a class 1 projector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class1State {
    pub power: PowerStatus,
    pub input: InputSwitchClass1,
    pub mute: MuteState,
    pub error_status: ErrorStatus,
    pub lamps: LampsStatus,
    pub inputs: InputSwitches<InputSwitchClass1>,
    pub name: ProjectorName,
    pub manufacturer: ManufacturerName,
    pub product: ProductName,
    pub other_information: OtherInformation,
}

/// A class 2 input and its label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputTerminal {
    pub input: InputSwitchClass2,
    pub name: InputTerminalName,
}

/// State of a class 2 projector
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Class2State {
    pub power: PowerStatus,
    pub input: InputSwitchClass2,
    pub mute: MuteState,
    pub error_status: ErrorStatus,
    pub lamps: LampsStatus,
    pub inputs: InputSwitches<InputSwitchClass2>,
    pub name: ProjectorName,
    pub manufacturer: ManufacturerName,
    pub product: ProductName,
    pub other_information: OtherInformation,
    pub serial_number: SerialNumber,
    pub software_version: SoftwareVersion,
    pub input_resolution: InputResolution,
    pub recommended_resolution: Resolution,
    pub filter_usage_time: FilterUsageTime,
    pub lamp_replacement_models: ModelNumbers,
    pub filter_replacement_models: ModelNumbers,
    pub freeze: Freeze,
    pub input_terminals: Vec<InputTerminal>,
}

/// Snapshot of everything a full fetch reads
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "class")]
pub enum ProjectorState {
    Class1(Class1State),
    Class2(Class2State),
}

impl ProjectorState {
    pub fn class(&self) -> Class {
        match self {
            ProjectorState::Class1(_) => Class::One,
            ProjectorState::Class2(_) => Class::Two,
        }
    }

    pub fn power(&self) -> PowerStatus {
        match self {
            ProjectorState::Class1(state) => state.power,
            ProjectorState::Class2(state) => state.power,
        }
    }

    pub fn error_status(&self) -> ErrorStatus {
        match self {
            ProjectorState::Class1(state) => state.error_status,
            ProjectorState::Class2(state) => state.error_status,
        }
    }

    /// Snapshot with `notification` applied, or `None` if it changes nothing
    pub fn with_notification(&self, notification: &Notification) -> Option<ProjectorState> {
        let mut next = self.clone();
        match (&mut next, notification) {
            (_, Notification::LinkUp(_)) => return None,
            (ProjectorState::Class1(state), Notification::Power(power)) => {
                state.power = (*power).into()
            }
            (ProjectorState::Class2(state), Notification::Power(power)) => {
                state.power = (*power).into()
            }
            (ProjectorState::Class1(state), Notification::ErrorStatus(status)) => {
                state.error_status = *status
            }
            (ProjectorState::Class2(state), Notification::ErrorStatus(status)) => {
                state.error_status = *status
            }
            (ProjectorState::Class1(state), Notification::Input(input)) => {
                state.input = InputSwitchClass1::try_from(*input).ok()?
            }
            (ProjectorState::Class2(state), Notification::Input(input)) => state.input = *input,
        }
        (next != *self).then_some(next)
    }
}
