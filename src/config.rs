//! Configuration for PJLink sessions
//!
//! Centralized configuration with sensible defaults.

use std::time::Duration;

use crate::error::{AuthError, Result};
use crate::protocol::NOTIFICATION_PORT;
use crate::types::Password;

/// Default TCP control port
pub const DEFAULT_PORT: u16 = 4352;

/// Client session configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    // -------------------------------------------------------------------------
    // Projector
    // -------------------------------------------------------------------------
    /// Projector host name or IP address
    pub host: String,

    /// TCP control port
    pub port: u16,

    /// Password for projectors with authentication enabled
    pub password: Option<String>,

    // -------------------------------------------------------------------------
    // Transport
    // -------------------------------------------------------------------------
    /// Connect timeout (milliseconds)
    pub connect_timeout_ms: u64,

    /// Read timeout (milliseconds, 0 = block indefinitely)
    pub read_timeout_ms: u64,

    /// Write timeout (milliseconds, 0 = block indefinitely)
    pub write_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Notifications
    // -------------------------------------------------------------------------
    /// UDP bind address for the notification listener
    pub notification_addr: String,

    /// How long one notification receive waits before re-checking for shutdown
    pub notification_poll_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: DEFAULT_PORT,
            password: None,
            connect_timeout_ms: 5000,
            read_timeout_ms: 5000,
            write_timeout_ms: 5000,
            notification_addr: format!("0.0.0.0:{}", NOTIFICATION_PORT),
            notification_poll_ms: 500,
        }
    }
}

impl ClientConfig {
    /// Create a new config builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Validated password, if one is configured
    pub fn password(&self) -> Result<Option<Password>> {
        self.password
            .as_deref()
            .map(|text| Password::new(text).map_err(AuthError::InvalidPassword))
            .transpose()
            .map_err(Into::into)
    }

    pub(crate) fn timeout(ms: u64) -> Option<Duration> {
        (ms > 0).then(|| Duration::from_millis(ms))
    }
}

/// Builder for ClientConfig
#[derive(Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the projector host
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the TCP control port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the authentication password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = Some(password.into());
        self
    }

    /// Set the connect timeout (in milliseconds)
    pub fn connect_timeout_ms(mut self, ms: u64) -> Self {
        self.config.connect_timeout_ms = ms;
        self
    }

    /// Set the read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the write timeout (in milliseconds)
    pub fn write_timeout_ms(mut self, ms: u64) -> Self {
        self.config.write_timeout_ms = ms;
        self
    }

    /// Set the notification listener bind address
    pub fn notification_addr(mut self, addr: impl Into<String>) -> Self {
        self.config.notification_addr = addr.into();
        self
    }

    /// Set the notification poll interval (in milliseconds)
    pub fn notification_poll_ms(mut self, ms: u64) -> Self {
        self.config.notification_poll_ms = ms;
        self
    }

    pub fn build(self) -> ClientConfig {
        self.config
    }
}
