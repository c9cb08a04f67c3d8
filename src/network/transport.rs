//! Transport collaborator
//!
//! The client talks to a projector through [`Transport`]. [`TcpTransport`]
//! is the default implementation over a blocking `TcpStream`.

use std::io::{Read, Write};
use std::net::{Shutdown, SocketAddr, TcpStream, ToSocketAddrs};

use bytes::{Buf, BytesMut};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{FormatError, PjlinkError, Result};
use crate::protocol::codec::{decode, TERMINATOR};

/// Size of a single socket read
const READ_CHUNK: usize = 256;

/// Byte channel to a projector
pub trait Transport {
    /// Write all of `bytes`
    fn send(&mut self, bytes: &[u8]) -> Result<()>;

    /// Receive one CR-terminated frame of `min_bytes..=max_bytes` bytes,
    /// terminator included
    ///
    /// Fails with [`PjlinkError::ConnectionClosed`] once the connection is
    /// gone.
    fn receive(&mut self, min_bytes: usize, max_bytes: usize) -> Result<Vec<u8>>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        (**self).send(bytes)
    }

    fn receive(&mut self, min_bytes: usize, max_bytes: usize) -> Result<Vec<u8>> {
        (**self).receive(min_bytes, max_bytes)
    }
}

/// TCP transport with CR framing
pub struct TcpTransport {
    stream: TcpStream,

    /// Bytes read past the last returned frame
    buffer: BytesMut,

    /// Dropping the tail of an overlong frame until the next terminator
    discarding: bool,

    /// Peer address for logging
    peer_addr: String,
}

impl TcpTransport {
    /// Connect to the projector named by `config`
    ///
    /// Tries every resolved address in turn and applies the configured
    /// timeouts.
    pub fn connect(config: &ClientConfig) -> Result<Self> {
        let addrs: Vec<SocketAddr> = (config.host.as_str(), config.port)
            .to_socket_addrs()?
            .collect();

        let mut last_error = None;
        for addr in addrs {
            let attempt = match ClientConfig::timeout(config.connect_timeout_ms) {
                Some(timeout) => TcpStream::connect_timeout(&addr, timeout),
                None => TcpStream::connect(addr),
            };
            match attempt {
                Ok(stream) => {
                    let mut transport = Self::from_stream(stream)?;
                    transport.set_timeouts(config.read_timeout_ms, config.write_timeout_ms)?;
                    return Ok(transport);
                }
                Err(e) => {
                    debug!("Connect to {} failed: {}", addr, e);
                    last_error = Some(e);
                }
            }
        }

        Err(match last_error {
            Some(e) => e.into(),
            None => std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("{} did not resolve to any address", config.host),
            )
            .into(),
        })
    }

    /// Wrap an already connected stream
    pub fn from_stream(stream: TcpStream) -> Result<Self> {
        let peer_addr = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        // Requests are tiny; do not wait to coalesce them
        stream.set_nodelay(true)?;

        Ok(Self {
            stream,
            buffer: BytesMut::with_capacity(READ_CHUNK),
            discarding: false,
            peer_addr,
        })
    }

    /// Configure read/write timeouts (0 = none)
    pub fn set_timeouts(&mut self, read_ms: u64, write_ms: u64) -> Result<()> {
        self.stream.set_read_timeout(ClientConfig::timeout(read_ms))?;
        self.stream.set_write_timeout(ClientConfig::timeout(write_ms))?;
        Ok(())
    }

    /// Handle that closes this connection from another thread
    pub fn shutdown_handle(&self) -> Result<ShutdownHandle> {
        Ok(ShutdownHandle {
            stream: self.stream.try_clone()?,
        })
    }

    pub fn peer_addr(&self) -> &str {
        &self.peer_addr
    }

    /// Split one frame off the buffer if a terminator has arrived
    ///
    /// An unterminated frame reaching `max_bytes` fails the current receive
    /// only; its remaining bytes are skipped up to the next terminator.
    fn take_frame(&mut self, min_bytes: usize, max_bytes: usize) -> Result<Option<Vec<u8>>> {
        if self.discarding {
            match self.buffer.iter().position(|b| *b == TERMINATOR) {
                Some(position) => {
                    self.buffer.advance(position + 1);
                    self.discarding = false;
                }
                None => {
                    self.buffer.clear();
                    return Ok(None);
                }
            }
        }

        let Some(position) = self.buffer.iter().position(|b| *b == TERMINATOR) else {
            if self.buffer.len() >= max_bytes {
                let length = self.buffer.len();
                warn!("Dropping overlong frame of {} bytes from {}", length, self.peer_addr);
                self.buffer.clear();
                self.discarding = true;
                return Err(PjlinkError::MessageTooLong {
                    length,
                    max: max_bytes,
                });
            }
            return Ok(None);
        };

        let frame = self.buffer.split_to(position + 1);
        if frame.len() > max_bytes {
            return Err(PjlinkError::MessageTooLong {
                length: frame.len(),
                max: max_bytes,
            });
        }
        if frame.len() < min_bytes {
            return Err(FormatError::TooShort(decode(&frame)).into());
        }
        Ok(Some(frame.to_vec()))
    }
}

impl Transport for TcpTransport {
    fn send(&mut self, bytes: &[u8]) -> Result<()> {
        self.stream.write_all(bytes).map_err(map_disconnect)?;
        self.stream.flush()?;
        Ok(())
    }

    fn receive(&mut self, min_bytes: usize, max_bytes: usize) -> Result<Vec<u8>> {
        let mut chunk = [0u8; READ_CHUNK];
        loop {
            if let Some(frame) = self.take_frame(min_bytes, max_bytes)? {
                return Ok(frame);
            }

            let read = self.stream.read(&mut chunk).map_err(map_disconnect)?;
            if read == 0 {
                debug!("Connection to {} closed", self.peer_addr);
                self.buffer.clear();
                self.discarding = false;
                return Err(PjlinkError::ConnectionClosed);
            }
            self.buffer.extend_from_slice(&chunk[..read]);
        }
    }
}

impl Drop for TcpTransport {
    fn drop(&mut self) {
        let _ = self.stream.shutdown(Shutdown::Both);
    }
}

/// Closes a [`TcpTransport`] from any thread
///
/// A receive blocked on the closed connection fails with
/// [`PjlinkError::ConnectionClosed`].
pub struct ShutdownHandle {
    stream: TcpStream,
}

impl ShutdownHandle {
    pub fn close(&self) -> Result<()> {
        match self.stream.shutdown(Shutdown::Both) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotConnected => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

fn map_disconnect(error: std::io::Error) -> PjlinkError {
    match error.kind() {
        std::io::ErrorKind::ConnectionReset
        | std::io::ErrorKind::ConnectionAborted
        | std::io::ErrorKind::BrokenPipe
        | std::io::ErrorKind::UnexpectedEof => PjlinkError::ConnectionClosed,
        _ => PjlinkError::Io(error),
    }
}
