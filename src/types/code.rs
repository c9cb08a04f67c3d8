//! Projector error codes

token_enum! {
    /// Failure code a projector returns in place of a value or an `OK`.
    ErrorCode, "error code" {
        /// ERR1: undefined command
        UndefinedCommand = "ERR1",
        /// ERR2: out of parameter
        OutOfParameter = "ERR2",
        /// ERR3: unavailable time
        UnavailableTime = "ERR3",
        /// ERR4: projector/display failure
        ProjectorFailure = "ERR4",
    }
}

/// Acknowledgement token for a successful set
pub const OK: &str = "OK";

impl ErrorCode {
    /// Whether `text` is one of the bare response codes (`OK` or `ERR1`..`ERR4`)
    pub fn is_bare_code(text: &str) -> bool {
        text == OK || text.parse::<ErrorCode>().is_ok()
    }
}
