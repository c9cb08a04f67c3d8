//! Network Module
//!
//! TCP control client and UDP notification listener.
//!
//! ## Architecture
//! - One [`Client`] owns one TCP connection; exchanges are sequential
//! - The [`NotificationListener`] owns the UDP socket on its own thread
//! - Both reach the network only through the [`Transport`] and
//!   [`DatagramSource`] collaborators

mod client;
mod listener;
mod transport;

pub use client::{Client, QueryResult};
pub use listener::{DatagramSource, NotificationListener, UdpDatagramSource};
pub use transport::{ShutdownHandle, TcpTransport, Transport};
