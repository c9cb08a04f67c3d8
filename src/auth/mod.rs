//! Authentication Module
//!
//! The PJLink challenge/response handshake.
//!
//! ## Security Levels
//! - Disabled: banner `PJLINK 0`, requests are sent as-is
//! - Level 1: banner `PJLINK 1 <random4>`, every request is prefixed with
//!   `MD5(random4 + password)` until the projector answers one
//! - Level 2: the projector answers the `PJLINK 2` probe with a 16-byte
//!   random; the prefix is `client_random + SHA256(hex(client XOR projector) + password)`

mod hash;
mod random;
mod state;

pub use hash::{level1_digest, level2_digest, xor_randoms, RANDOM_LEN};
pub use random::{OsRandom, RandomSource};
pub use state::{AuthState, Authenticator, HandshakeStep, AUTH_REJECTED, SECURITY_PROBE};
