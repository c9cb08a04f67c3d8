//! Authentication state machine (client side)
//!
//! ```text
//!                  "PJLINK 0"
//! Indeterminate ───────────────▶ Disabled
//!       │
//!       │ "PJLINK 1 <random4>"
//!       ▼
//! SecurityLevelPending ──"PJLINK 2 <random16>"──▶ Level2 ──┐
//!       │                                                  │ first answered
//!       └──── "PJLINK ERRA" / anything else ───▶ Level1 ───┤ request
//!                                                          ▼
//!                                                    Authenticated
//! ```

use tracing::debug;

use super::hash::{level1_digest, level2_digest, RANDOM_LEN};
use super::random::RandomSource;
use crate::error::{AuthError, Result};
use crate::types::{HexBuffer, Password};

/// Banner prefix shared by every handshake line
const BANNER_PREFIX: &str = "PJLINK ";

/// Security-level probe sent after a `PJLINK 1` banner
pub const SECURITY_PROBE: &str = "PJLINK 2";

/// Projector answer rejecting authentication
pub const AUTH_REJECTED: &str = "PJLINK ERRA";

/// Length of the banner random in bytes
const BANNER_RANDOM_LEN: usize = 4;

/// Authentication state of one connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthState {
    /// No banner received yet
    Indeterminate,
    /// Banner announced authentication; the security level is not known yet
    SecurityLevelPending { projector_random: HexBuffer },
    /// Projector does not authenticate
    Disabled,
    /// MD5 challenge; `prefix` is the 32-character digest
    Level1 {
        projector_random: HexBuffer,
        prefix: String,
    },
    /// SHA-256 challenge; `prefix` is client random plus digest, 96 characters
    Level2 {
        client_random: HexBuffer,
        projector_random: HexBuffer,
        prefix: String,
    },
    /// A prefixed request has been answered; no further prefix is sent
    Authenticated,
}

impl AuthState {
    pub fn name(&self) -> &'static str {
        match self {
            AuthState::Indeterminate => "indeterminate",
            AuthState::SecurityLevelPending { .. } => "security-level-pending",
            AuthState::Disabled => "disabled",
            AuthState::Level1 { .. } => "level1",
            AuthState::Level2 { .. } => "level2",
            AuthState::Authenticated => "authenticated",
        }
    }
}

/// What the client must do after the banner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandshakeStep {
    /// Handshake finished, requests may be sent
    Complete,
    /// Send [`SECURITY_PROBE`] and pass the answer to
    /// [`Authenticator::receive_probe_response`]
    SendProbe,
}

/// Drives the handshake and supplies the request prefix
pub struct Authenticator {
    state: AuthState,
    password: Option<Password>,
}

impl Authenticator {
    pub fn new(password: Option<Password>) -> Self {
        Self {
            state: AuthState::Indeterminate,
            password,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Consume the connection banner
    ///
    /// Fails with [`AuthError::NoPasswordProvided`] as soon as the banner
    /// announces authentication and no password is configured.
    pub fn receive_banner(&mut self, banner: &str) -> std::result::Result<HandshakeStep, AuthError> {
        if self.state != AuthState::Indeterminate {
            return Err(AuthError::OutOfOrder("banner"));
        }

        let line = banner.strip_suffix('\r').unwrap_or(banner);
        let invalid = || AuthError::InvalidBanner(line.to_string());
        let rest = line.strip_prefix(BANNER_PREFIX).ok_or_else(invalid)?;

        if rest == "0" {
            self.transition(AuthState::Disabled);
            return Ok(HandshakeStep::Complete);
        }

        let random = rest.strip_prefix("1 ").ok_or_else(invalid)?;
        if random.len() != BANNER_RANDOM_LEN * 2
            || !random.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f'))
        {
            return Err(invalid());
        }
        let projector_random = HexBuffer::parse_exact(random, BANNER_RANDOM_LEN).map_err(
            |source| AuthError::InvalidChallenge {
                text: random.to_string(),
                source,
            },
        )?;

        if self.password.is_none() {
            return Err(AuthError::NoPasswordProvided);
        }

        self.transition(AuthState::SecurityLevelPending { projector_random });
        Ok(HandshakeStep::SendProbe)
    }

    /// Consume the answer to [`SECURITY_PROBE`] and select the level
    ///
    /// A `PJLINK 2` answer carrying a 16-byte random (32 hex digits) selects
    /// level 2. Any other answer, `PJLINK ERRA` and longer randoms such as
    /// 64 hex digits included, falls back to level 1 with the banner random.
    pub fn receive_probe_response<R: RandomSource + ?Sized>(
        &mut self,
        response: &str,
        random: &mut R,
    ) -> Result<()> {
        let AuthState::SecurityLevelPending { projector_random } = &self.state else {
            return Err(AuthError::OutOfOrder("security probe").into());
        };
        let banner_random = projector_random.clone();
        let password = self
            .password
            .as_ref()
            .ok_or(AuthError::NoPasswordProvided)?
            .as_str()
            .to_string();

        let line = response.strip_suffix('\r').unwrap_or(response);
        let level2_random = line
            .strip_prefix(SECURITY_PROBE)
            .and_then(|rest| rest.strip_prefix(' '))
            .and_then(|hex| HexBuffer::parse_exact(hex, RANDOM_LEN).ok());

        let next = match level2_random {
            Some(projector_random) => {
                let client_random = HexBuffer::new(random.random_bytes(RANDOM_LEN)?);
                let digest = level2_digest(
                    client_random.as_bytes(),
                    projector_random.as_bytes(),
                    &password,
                )?;
                AuthState::Level2 {
                    prefix: format!("{}{}", client_random, digest),
                    client_random,
                    projector_random,
                }
            }
            None => {
                if line != AUTH_REJECTED {
                    debug!("Unrecognised security probe answer, using level 1");
                }
                let prefix = level1_digest(&banner_random.to_string(), &password);
                AuthState::Level1 {
                    projector_random: banner_random,
                    prefix,
                }
            }
        };

        self.transition(next);
        Ok(())
    }

    /// Prefix for the next outgoing request, if one is required
    pub fn prefix(&self) -> Option<&str> {
        match &self.state {
            AuthState::Level1 { prefix, .. } | AuthState::Level2 { prefix, .. } => Some(prefix),
            _ => None,
        }
    }

    /// Record that a prefixed request was answered
    ///
    /// Only leaves level 1 or level 2; every other state is unchanged.
    pub fn mark_authenticated(&mut self) {
        if matches!(self.state, AuthState::Level1 { .. } | AuthState::Level2 { .. }) {
            self.transition(AuthState::Authenticated);
        }
    }

    /// Whether requests may be sent (handshake finished)
    pub fn is_ready(&self) -> bool {
        !matches!(
            self.state,
            AuthState::Indeterminate | AuthState::SecurityLevelPending { .. }
        )
    }

    fn transition(&mut self, next: AuthState) {
        debug!(from = self.state.name(), to = next.name(), "Auth state transition");
        self.state = next;
    }
}
