//! # PJLink
//!
//! Control engine for projectors speaking PJLink class 1 and class 2:
//! - Table-driven wire codec for every command in both classes
//! - Validated value domain (statuses, inputs, names, resolutions)
//! - MD5 and SHA-256 authentication handshakes
//! - Blocking TCP client with typed queries and set-then-verify
//! - UDP notification listener and a shared state cache
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                          Client                             │
//! │        (typed queries, sets, fetch_state, handshake)        │
//! └───────┬─────────────────────┬───────────────────────┬───────┘
//!         │                     │                       │
//!         ▼                     ▼                       ▼
//!  ┌─────────────┐       ┌─────────────┐         ┌─────────────┐
//!  │    Codec    │       │    Auth     │         │  Transport  │
//!  │ (grammar)   │       │ (MD5/SHA256)│         │   (TCP)     │
//!  └──────┬──────┘       └─────────────┘         └─────────────┘
//!         │
//!         ▼
//!  ┌─────────────┐       ┌─────────────┐         ┌─────────────┐
//!  │   Values    │◀──────│ Notification│────────▶│ StateCache  │
//!  │  (types)    │       │  Listener   │         │  (Mutex)    │
//!  └─────────────┘       └─────────────┘         └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;

pub mod auth;
pub mod network;
pub mod protocol;
pub mod state;
pub mod types;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use config::ClientConfig;
pub use error::{PjlinkError, Result};
pub use network::Client;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
