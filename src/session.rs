//! Session Module
//!
//! A session owns the transport and the negotiated protocol state for its
//! whole lifetime, and dispatches commands through the exchange engine.
//!
//! ## Responsibilities
//! - Query `llen` once at session start and cache the negotiated line length
//! - Render commands and compute expected reply counts from session state
//! - Run one exchange per command, strictly one at a time
//! - Update the negotiated line length whenever `llen` is queried again

use crate::config::{Config, SessionConfig};
use crate::error::{MemlinkError, Result};
use crate::protocol::{Command, Exchange};
use crate::transport::{LineTransport, SerialTransport};

/// A single-command-at-a-time session with one device
#[derive(Debug)]
pub struct Session<T: LineTransport> {
    /// Exclusively owned transport
    transport: T,

    /// Negotiated protocol state, updated only by `llen`
    config: SessionConfig,
}

impl Session<SerialTransport> {
    /// Open a serial device and start a session on it
    pub fn open(path: &str, config: &Config) -> Result<Self> {
        let transport = SerialTransport::open(path, config)?;
        Self::start(transport, SessionConfig::new(config.initial_max_line_len))
    }
}

impl<T: LineTransport> Session<T> {
    /// Start a session over an already-open transport
    ///
    /// Immediately negotiates the maximum line length with a `llen`
    /// query; all later chunking decisions use the negotiated value.
    /// Fails if the device does not answer with a usable length.
    pub fn start(transport: T, initial: SessionConfig) -> Result<Self> {
        let mut session = Self {
            transport,
            config: initial,
        };

        session.execute(Command::QueryLineLen)?;
        tracing::debug!(
            max_line_len = session.config.max_line_len,
            "session negotiated"
        );

        Ok(session)
    }

    /// Execute one command and return its reply lines in order
    ///
    /// A successful `llen` also updates the session's negotiated line
    /// length; no other command touches session state.
    pub fn execute(&mut self, command: Command) -> Result<Vec<String>> {
        let outgoing = command.render(&self.config);
        let expected = command.expected_replies(&self.config);

        tracing::debug!(
            verb = command.verb(),
            lines = outgoing.len(),
            expected_replies = expected,
            "execute"
        );

        let mut exchange = Exchange::new();
        let reply = exchange.run(&mut self.transport, &outgoing, expected)?;

        if matches!(command, Command::QueryLineLen) {
            self.config.max_line_len = parse_line_len(&reply)?;
        }

        Ok(reply)
    }

    /// The negotiated maximum line length (in hex characters)
    pub fn max_line_len(&self) -> usize {
        self.config.max_line_len
    }

    /// The session's protocol state
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The underlying transport
    pub fn transport(&self) -> &T {
        &self.transport
    }
}

/// Decode a `llen` reply into a usable line length
fn parse_line_len(reply: &[String]) -> Result<usize> {
    let line = reply.first().ok_or_else(|| {
        MemlinkError::Protocol("llen reply is missing".to_string())
    })?;

    let len = usize::from_str_radix(line, 16).map_err(|_| {
        MemlinkError::Protocol(format!("llen reply {:?} is not hexadecimal", line))
    })?;

    if len == 0 {
        return Err(MemlinkError::Protocol(
            "device reported a zero line length".to_string(),
        ));
    }

    Ok(len)
}
