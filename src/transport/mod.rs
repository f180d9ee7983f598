//! Transport Module
//!
//! Line-level access to the device byte stream.
//!
//! ## Contract
//! - One newline-terminated line out, one newline-terminated line in
//! - Trailing CR/LF stripped on receipt
//! - Receives block up to the transport's configured timeout

mod serial;

pub use serial::SerialTransport;

use crate::error::Result;

/// A byte stream that speaks newline-terminated lines
///
/// The session owns its transport exclusively for its whole lifetime;
/// there is exactly one command in flight at a time.
pub trait LineTransport {
    /// Send one line, appending the terminator
    fn send_line(&mut self, line: &str) -> Result<()>;

    /// Receive one line, stripped of its terminator
    ///
    /// Blocks until a full line arrives or the configured timeout
    /// elapses; a timeout fails with `Timeout`.
    fn recv_line(&mut self) -> Result<String>;
}
