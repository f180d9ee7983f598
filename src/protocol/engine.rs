//! Acknowledgment-driven exchange engine
//!
//! Drives one command over the transport: send each outgoing line, wait
//! for its acknowledgment, then collect the expected number of reply
//! lines. The first negative or malformed acknowledgment aborts the whole
//! exchange; no resynchronization is attempted because the transport
//! cannot support it.

use crate::error::{MemlinkError, Result};
use crate::transport::LineTransport;

/// Acknowledgment line the device sends to accept a received line
pub const ACK_TOKEN: &str = "ok";

/// State of one command exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeState {
    /// Outgoing lines remain to be sent
    Sending,

    /// A line was sent; waiting for its acknowledgment
    AwaitingAck,

    /// All lines acknowledged; reading reply lines
    CollectingReply,

    /// Exchange completed, reply collected
    Done,

    /// Exchange aborted by a negative ack or transport failure
    Failed,
}

/// Drives a single command exchange over a line transport
///
/// One exchange per command; the state is terminal once `Done` or
/// `Failed` is reached.
#[derive(Debug)]
pub struct Exchange {
    state: ExchangeState,
}

impl Exchange {
    /// Create an exchange ready to send
    pub fn new() -> Self {
        Self {
            state: ExchangeState::Sending,
        }
    }

    /// Current state, observable for diagnostics and tests
    pub fn state(&self) -> ExchangeState {
        self.state
    }

    /// Run the exchange to completion
    ///
    /// Sends each line in `outgoing` and waits for its ack; on the first
    /// line acknowledged with anything other than [`ACK_TOKEN`] the
    /// exchange fails and the remaining lines are never sent. Once every
    /// line is acknowledged, reads exactly `expected_replies` lines and
    /// returns them in order. Any transport failure mid-exchange is
    /// terminal; no partial reply is returned.
    pub fn run<T: LineTransport>(
        &mut self,
        transport: &mut T,
        outgoing: &[String],
        expected_replies: usize,
    ) -> Result<Vec<String>> {
        for line in outgoing {
            self.state = ExchangeState::AwaitingAck;

            if let Err(e) = self.send_and_check_ack(transport, line) {
                self.state = ExchangeState::Failed;
                return Err(e);
            }
            self.state = ExchangeState::Sending;
        }

        self.state = ExchangeState::CollectingReply;

        let mut reply = Vec::with_capacity(expected_replies);
        for _ in 0..expected_replies {
            match transport.recv_line() {
                Ok(line) => {
                    tracing::trace!(line = %line, "reply line");
                    reply.push(line);
                }
                Err(e) => {
                    self.state = ExchangeState::Failed;
                    return Err(e);
                }
            }
        }

        self.state = ExchangeState::Done;
        Ok(reply)
    }

    fn send_and_check_ack<T: LineTransport>(
        &mut self,
        transport: &mut T,
        line: &str,
    ) -> Result<()> {
        tracing::debug!(line = %line, "send");
        transport.send_line(line)?;

        let ack = transport.recv_line()?;
        tracing::debug!(ack = %ack, "ack");
        if ack != ACK_TOKEN {
            return Err(MemlinkError::Protocol(format!(
                "device rejected line with {:?}",
                ack
            )));
        }
        Ok(())
    }
}

impl Default for Exchange {
    fn default() -> Self {
        Self::new()
    }
}
