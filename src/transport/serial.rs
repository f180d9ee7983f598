//! Serial line transport
//!
//! Implements [`LineTransport`] over a serial port opened with a fixed
//! baud rate and a bounded per-read timeout.

use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::time::Duration;

use serialport::SerialPort;

use crate::config::Config;
use crate::error::{MemlinkError, Result};

use super::LineTransport;

/// Line transport over a serial device
pub struct SerialTransport {
    /// Buffered reader over the port; writes go through `get_mut`
    reader: BufReader<Box<dyn SerialPort>>,

    /// Device path for logging
    path: String,
}

impl SerialTransport {
    /// Open a serial device with the configured baud rate and timeout
    ///
    /// The port is exclusively owned by the returned transport and closed
    /// when it is dropped. Baud rate and timeout come from [`Config`];
    /// the transport never selects device-specific settings itself.
    pub fn open(path: &str, config: &Config) -> Result<Self> {
        let port = serialport::new(path, config.baud_rate)
            .timeout(Duration::from_millis(config.read_timeout_ms))
            .open()?;

        tracing::debug!(
            path = %path,
            baud = config.baud_rate,
            timeout_ms = config.read_timeout_ms,
            "serial device opened"
        );

        Ok(Self {
            reader: BufReader::new(port),
            path: path.to_string(),
        })
    }

    /// Device path this transport was opened on
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl LineTransport for SerialTransport {
    fn send_line(&mut self, line: &str) -> Result<()> {
        let port = self.reader.get_mut();
        port.write_all(line.as_bytes())?;
        port.write_all(b"\n")?;
        port.flush()?;
        Ok(())
    }

    fn recv_line(&mut self) -> Result<String> {
        let mut buf = Vec::new();
        match self.reader.read_until(b'\n', &mut buf) {
            Ok(_) => {}
            Err(ref e)
                if e.kind() == ErrorKind::TimedOut || e.kind() == ErrorKind::WouldBlock =>
            {
                return Err(MemlinkError::Timeout);
            }
            Err(e) => return Err(e.into()),
        }

        if !buf.ends_with(b"\n") {
            // The port stopped producing bytes without completing a line.
            return Err(MemlinkError::Timeout);
        }

        while matches!(buf.last(), Some(b'\n') | Some(b'\r')) {
            buf.pop();
        }

        String::from_utf8(buf).map_err(|_| {
            MemlinkError::Protocol("device sent a non-ASCII line".to_string())
        })
    }
}
