//! Command catalog
//!
//! One grammar table describes every command: the classes it exists in,
//! the shape of its get form and the payload of its set form. Both
//! directions of the codec read this table.

use std::fmt;
use std::sync::OnceLock;

use serde::Serialize;

use super::value::ValueKind;
use crate::types::Class;

/// Four-letter PJLink command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Command {
    Power,
    InputSwitch,
    AvMute,
    ErrorStatus,
    Lamp,
    InputList,
    Name,
    Manufacturer,
    ProductName,
    OtherInformation,
    Class,
    SerialNumber,
    SoftwareVersion,
    InputTerminalName,
    InputResolution,
    RecommendedResolution,
    FilterUsageTime,
    LampReplacementModel,
    FilterReplacementModel,
    SpeakerVolume,
    MicrophoneVolume,
    Freeze,
}

/// Shape of a command's get form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GetGrammar {
    /// Parameter following `?`, if the request carries one
    pub parameter: Option<ValueKind>,
    /// Value carried by a successful response
    pub response: ValueKind,
}

/// Grammar of one command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandGrammar {
    pub command: Command,
    pub code: &'static str,
    pub classes: &'static [Class],
    pub get: Option<GetGrammar>,
    pub set: Option<ValueKind>,
}

const BOTH: &[Class] = &[Class::One, Class::Two];
const TWO: &[Class] = &[Class::Two];

const fn query(response: ValueKind) -> Option<GetGrammar> {
    Some(GetGrammar {
        parameter: None,
        response,
    })
}

/// Indexed by `Command as usize`
static GRAMMAR: [CommandGrammar; 22] = [
    CommandGrammar {
        command: Command::Power,
        code: "POWR",
        classes: BOTH,
        get: query(ValueKind::PowerStatus),
        set: Some(ValueKind::PowerInstruction),
    },
    CommandGrammar {
        command: Command::InputSwitch,
        code: "INPT",
        classes: BOTH,
        get: query(ValueKind::InputSwitch),
        set: Some(ValueKind::InputSwitch),
    },
    CommandGrammar {
        command: Command::AvMute,
        code: "AVMT",
        classes: BOTH,
        get: query(ValueKind::MuteState),
        set: Some(ValueKind::MuteState),
    },
    CommandGrammar {
        command: Command::ErrorStatus,
        code: "ERST",
        classes: BOTH,
        get: query(ValueKind::ErrorStatus),
        set: None,
    },
    CommandGrammar {
        command: Command::Lamp,
        code: "LAMP",
        classes: BOTH,
        get: query(ValueKind::LampsStatus),
        set: None,
    },
    CommandGrammar {
        command: Command::InputList,
        code: "INST",
        classes: BOTH,
        get: query(ValueKind::InputSwitchList),
        set: None,
    },
    CommandGrammar {
        command: Command::Name,
        code: "NAME",
        classes: BOTH,
        get: query(ValueKind::ProjectorName),
        set: None,
    },
    CommandGrammar {
        command: Command::Manufacturer,
        code: "INF1",
        classes: BOTH,
        get: query(ValueKind::ManufacturerName),
        set: None,
    },
    CommandGrammar {
        command: Command::ProductName,
        code: "INF2",
        classes: BOTH,
        get: query(ValueKind::ProductName),
        set: None,
    },
    CommandGrammar {
        command: Command::OtherInformation,
        code: "INFO",
        classes: BOTH,
        get: query(ValueKind::OtherInformation),
        set: None,
    },
    CommandGrammar {
        command: Command::Class,
        code: "CLSS",
        classes: BOTH,
        get: query(ValueKind::Class),
        set: None,
    },
    CommandGrammar {
        command: Command::SerialNumber,
        code: "SNUM",
        classes: TWO,
        get: query(ValueKind::SerialNumber),
        set: None,
    },
    CommandGrammar {
        command: Command::SoftwareVersion,
        code: "SVER",
        classes: TWO,
        get: query(ValueKind::SoftwareVersion),
        set: None,
    },
    CommandGrammar {
        command: Command::InputTerminalName,
        code: "INNM",
        classes: TWO,
        get: Some(GetGrammar {
            parameter: Some(ValueKind::InputSwitch),
            response: ValueKind::InputTerminalName,
        }),
        set: None,
    },
    CommandGrammar {
        command: Command::InputResolution,
        code: "IRES",
        classes: TWO,
        get: query(ValueKind::InputResolution),
        set: None,
    },
    CommandGrammar {
        command: Command::RecommendedResolution,
        code: "RRES",
        classes: TWO,
        get: query(ValueKind::Resolution),
        set: None,
    },
    CommandGrammar {
        command: Command::FilterUsageTime,
        code: "FILT",
        classes: TWO,
        get: query(ValueKind::FilterUsageTime),
        set: None,
    },
    CommandGrammar {
        command: Command::LampReplacementModel,
        code: "RLMP",
        classes: TWO,
        get: query(ValueKind::ModelNumbers),
        set: None,
    },
    CommandGrammar {
        command: Command::FilterReplacementModel,
        code: "RFIL",
        classes: TWO,
        get: query(ValueKind::ModelNumbers),
        set: None,
    },
    CommandGrammar {
        command: Command::SpeakerVolume,
        code: "SVOL",
        classes: TWO,
        get: None,
        set: Some(ValueKind::VolumeAdjustment),
    },
    CommandGrammar {
        command: Command::MicrophoneVolume,
        code: "MVOL",
        classes: TWO,
        get: None,
        set: Some(ValueKind::VolumeAdjustment),
    },
    CommandGrammar {
        command: Command::Freeze,
        code: "FREZ",
        classes: TWO,
        get: query(ValueKind::Freeze),
        set: Some(ValueKind::Freeze),
    },
];

impl Command {
    /// Every command, in catalog order
    pub const ALL: [Command; 22] = [
        Command::Power,
        Command::InputSwitch,
        Command::AvMute,
        Command::ErrorStatus,
        Command::Lamp,
        Command::InputList,
        Command::Name,
        Command::Manufacturer,
        Command::ProductName,
        Command::OtherInformation,
        Command::Class,
        Command::SerialNumber,
        Command::SoftwareVersion,
        Command::InputTerminalName,
        Command::InputResolution,
        Command::RecommendedResolution,
        Command::FilterUsageTime,
        Command::LampReplacementModel,
        Command::FilterReplacementModel,
        Command::SpeakerVolume,
        Command::MicrophoneVolume,
        Command::Freeze,
    ];

    pub fn grammar(self) -> &'static CommandGrammar {
        &GRAMMAR[self as usize]
    }

    /// Four-letter wire code
    pub fn code(self) -> &'static str {
        self.grammar().code
    }

    /// Look up a command by its wire code
    pub fn from_code(code: &str) -> Option<Command> {
        GRAMMAR
            .iter()
            .find(|grammar| grammar.code == code)
            .map(|grammar| grammar.command)
    }

    pub fn classes(self) -> &'static [Class] {
        self.grammar().classes
    }

    pub fn supports(self, class: Class) -> bool {
        self.classes().contains(&class)
    }

    pub fn has_get(self) -> bool {
        self.grammar().get.is_some()
    }

    pub fn has_set(self) -> bool {
        self.grammar().set.is_some()
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Commands available in class 1
pub fn all_class1_commands() -> &'static [Command] {
    static COMMANDS: OnceLock<Vec<Command>> = OnceLock::new();
    COMMANDS.get_or_init(|| commands_for(Class::One))
}

/// Commands available in class 2
pub fn all_class2_commands() -> &'static [Command] {
    static COMMANDS: OnceLock<Vec<Command>> = OnceLock::new();
    COMMANDS.get_or_init(|| commands_for(Class::Two))
}

fn commands_for(class: Class) -> Vec<Command> {
    Command::ALL
        .iter()
        .copied()
        .filter(|command| command.supports(class))
        .collect()
}
