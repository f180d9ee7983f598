//! Shared test helpers
//!
//! Provides a scripted line transport so protocol behavior can be tested
//! without a serial device.

#![allow(dead_code)]

use std::collections::VecDeque;

use memlink::error::{MemlinkError, Result};
use memlink::transport::LineTransport;

/// One scripted incoming event
#[derive(Debug)]
pub enum Incoming {
    /// The device answers with this line
    Line(String),

    /// The device stays silent and the read times out
    Timeout,
}

/// A transport that replays a fixed script of incoming lines
///
/// Every line the code under test sends is recorded in `sent`; every
/// `recv_line` pops the next scripted event. Running out of script acts
/// like a silent device (timeout).
#[derive(Debug)]
pub struct ScriptedTransport {
    incoming: VecDeque<Incoming>,
    pub sent: Vec<String>,
}

impl ScriptedTransport {
    /// Script the given incoming lines, in order
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            incoming: lines
                .into_iter()
                .map(|l| Incoming::Line(l.into()))
                .collect(),
            sent: Vec::new(),
        }
    }

    /// Append another incoming line to the script
    pub fn push_line(&mut self, line: &str) {
        self.incoming.push_back(Incoming::Line(line.to_string()));
    }

    /// Append a timeout to the script
    pub fn push_timeout(&mut self) {
        self.incoming.push_back(Incoming::Timeout);
    }

    /// Scripted events not yet consumed
    pub fn remaining(&self) -> usize {
        self.incoming.len()
    }
}

impl LineTransport for ScriptedTransport {
    fn send_line(&mut self, line: &str) -> Result<()> {
        assert!(!line.contains('\n'), "a line must not contain a terminator");
        self.sent.push(line.to_string());
        Ok(())
    }

    fn recv_line(&mut self) -> Result<String> {
        match self.incoming.pop_front() {
            Some(Incoming::Line(line)) => Ok(line),
            Some(Incoming::Timeout) | None => Err(MemlinkError::Timeout),
        }
    }
}
