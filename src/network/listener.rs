//! Notification listener
//!
//! Class 2 projectors push status changes as UDP datagrams. The listener
//! owns the socket on a dedicated thread, parses every datagram and hands
//! each [`Notification`] to a callback.
//!
//! The receive waits at most one poll interval, after which the `running`
//! flag is re-checked; [`NotificationListener::stop`] therefore returns
//! within one poll interval.

use std::net::{ToSocketAddrs, UdpSocket};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

use crossbeam::channel::{self, Receiver};
use tracing::{debug, error, info, trace, warn};

use crate::error::Result;
use crate::protocol::{decode, Notification, MAX_MESSAGE_SIZE};

/// Source of notification datagrams
pub trait DatagramSource: Send + 'static {
    /// Receive one datagram of at most `max_bytes`
    ///
    /// Returns `Ok(None)` when the poll interval elapses without data.
    fn receive_datagram(&mut self, max_bytes: usize) -> Result<Option<Vec<u8>>>;
}

/// UDP socket with a poll timeout
pub struct UdpDatagramSource {
    socket: UdpSocket,
}

impl UdpDatagramSource {
    pub fn bind(addr: impl ToSocketAddrs, poll: Duration) -> Result<Self> {
        let socket = UdpSocket::bind(addr)?;
        socket.set_read_timeout(Some(poll))?;
        info!("Notification socket bound to {}", socket.local_addr()?);
        Ok(Self { socket })
    }

    pub fn from_socket(socket: UdpSocket, poll: Duration) -> Result<Self> {
        socket.set_read_timeout(Some(poll))?;
        Ok(Self { socket })
    }
}

impl DatagramSource for UdpDatagramSource {
    fn receive_datagram(&mut self, max_bytes: usize) -> Result<Option<Vec<u8>>> {
        let mut buf = vec![0u8; max_bytes];
        match self.socket.recv_from(&mut buf) {
            Ok((len, src)) => {
                trace!("Datagram of {} bytes from {}", len, src);
                buf.truncate(len);
                Ok(Some(buf))
            }
            Err(e) if is_timeout(&e) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

/// Background notification receiver
pub struct NotificationListener {
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl NotificationListener {
    /// Start receiving on a new thread, invoking `callback` per notification
    pub fn spawn<S, F>(source: S, callback: F) -> Result<Self>
    where
        S: DatagramSource,
        F: FnMut(Notification) + Send + 'static,
    {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = thread::Builder::new()
            .name("pjlink-notify".to_string())
            .spawn(move || receive_loop(source, callback, flag))?;

        Ok(Self {
            running,
            handle: Some(handle),
        })
    }

    /// Start receiving on a new thread, delivering notifications to a channel
    ///
    /// The listener keeps running after the receiver is dropped; undeliverable
    /// notifications are discarded.
    pub fn spawn_channel<S: DatagramSource>(source: S) -> Result<(Self, Receiver<Notification>)> {
        let (tx, rx) = channel::unbounded();
        let listener = Self::spawn(source, move |notification| {
            if tx.send(notification).is_err() {
                trace!("Notification receiver dropped");
            }
        })?;
        Ok((listener, rx))
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
            && self.handle.as_ref().is_some_and(|h| !h.is_finished())
    }

    /// Stop the receive loop and wait for the thread to exit
    pub fn stop(&mut self) {
        self.running.store(false, Ordering::SeqCst);
        if let Some(handle) = self.handle.take() {
            if handle.join().is_err() {
                error!("Notification thread panicked");
            }
        }
    }
}

impl Drop for NotificationListener {
    fn drop(&mut self) {
        self.stop();
    }
}

fn receive_loop<S, F>(mut source: S, mut callback: F, running: Arc<AtomicBool>)
where
    S: DatagramSource,
    F: FnMut(Notification),
{
    debug!("Notification listener started");

    while running.load(Ordering::SeqCst) {
        let datagram = match source.receive_datagram(MAX_MESSAGE_SIZE) {
            Ok(Some(datagram)) => datagram,
            Ok(None) => continue,
            Err(e) => {
                error!("Notification receive failed: {}", e);
                break;
            }
        };

        let text = decode(&datagram);
        match Notification::parse(&text) {
            Ok(notification) => {
                debug!(code = notification.code(), "Notification received");
                callback(notification);
            }
            Err(e) => warn!("Dropping datagram {:?}: {}", text, e),
        }
    }

    running.store(false, Ordering::SeqCst);
    debug!("Notification listener stopped");
}

fn is_timeout(e: &std::io::Error) -> bool {
    matches!(
        e.kind(),
        std::io::ErrorKind::WouldBlock | std::io::ErrorKind::TimedOut
    )
}
