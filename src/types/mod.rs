//! Value Domain
//!
//! Strongly-typed PJLink field values. Every type validates at
//! construction, parses from its wire text through `FromStr` and formats
//! back through `Display`, so an invalid value never exists.
//!
//! ## Field Overview
//! ```text
//! ┌──────────────────────┬──────────────┬──────────────────────────────┐
//! │ Type                 │ Command      │ Wire shape                   │
//! ├──────────────────────┼──────────────┼──────────────────────────────┤
//! │ PowerStatus          │ POWR         │ 0 | 1 | 2 | 3                │
//! │ InputSwitchClass1/2  │ INPT, INST   │ <type><channel>              │
//! │ MuteState            │ AVMT         │ <target><0|1>                │
//! │ ErrorStatus          │ ERST         │ six digits in {0,1,2}        │
//! │ LampsStatus          │ LAMP         │ <hours> <0|1> ...            │
//! │ Resolution           │ IRES, RRES   │ <H>x<V> | - | *              │
//! │ name strings         │ NAME, INF1.. │ bounded printable text       │
//! └──────────────────────┴──────────────┴──────────────────────────────┘
//! ```

/// Declares a closed enum whose variants map one-to-one onto fixed wire
/// tokens.
macro_rules! token_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $field:literal {
            $( $(#[$vmeta:meta])* $variant:ident = $token:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Wire token for this value
            pub fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $token ),+
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = crate::error::ValidationError;

            fn from_str(text: &str) -> Result<Self, Self::Err> {
                match text {
                    $( $token => Ok(Self::$variant), )+
                    other => Err(crate::error::ValidationError::InvalidValue {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

mod class;
mod code;
mod error_status;
mod freeze;
mod hex;
mod input;
mod lamp;
mod mac;
mod mute;
mod power;
mod resolution;
mod text;
mod volume;

pub use class::Class;
pub use code::{ErrorCode, OK};
pub use error_status::{ErrorLevel, ErrorStatus};
pub use freeze::Freeze;
pub use hex::HexBuffer;
pub use input::{InputSwitchClass1, InputSwitchClass2, InputSwitches, InputType};
pub use lamp::{FilterUsageTime, LampStatus, LampsStatus, MAX_LAMPS, MAX_USAGE_HOURS};
pub use mac::MacAddress;
pub use mute::{MuteState, MuteTarget};
pub use power::{PowerInstruction, PowerStatus};
pub use resolution::{InputResolution, Resolution};
pub use text::{
    InputTerminalName, ManufacturerName, ModelNumbers, OtherInformation, Password,
    ProductName, ProjectorName, SerialNumber, SoftwareVersion,
};
pub use volume::{Volume, VolumeAdjustment};
