//! Protocol Module
//!
//! The PJLink wire protocol: command table, typed messages and the text
//! codec.
//!
//! ## Message Format
//! ```text
//! %1POWR ?        get request        class 1, power status
//! %1POWR 1        set request        power on
//! %1POWR=1        get response       power is on
//! %1POWR=OK       set response       accepted
//! %2INNM ?31      get request        terminal name of input 31
//! ```
//!
//! ### Failure Codes
//! - ERR1: undefined command
//! - ERR2: out of parameter
//! - ERR3: unavailable time
//! - ERR4: projector/display failure

mod command;
mod message;
mod value;
pub mod codec;
pub mod notification;

pub use codec::{
    decode, encode, encode_message, format, parse, parse_with, AmbiguousCode, MAX_MESSAGE_SIZE,
};
pub use command::{all_class1_commands, all_class2_commands, Command, CommandGrammar, GetGrammar};
pub use message::{Body, GetResponse, Message, Request, Response, SetResponse};
pub use notification::{format_search_request, parse_search_ack, Notification, NOTIFICATION_PORT};
pub use value::{Value, ValueKind};
