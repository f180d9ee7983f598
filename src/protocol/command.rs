//! Command definitions
//!
//! Represents host commands, their rendering to outgoing protocol lines,
//! and the reply-line count each one expects.

use crate::config::SessionConfig;
use crate::error::{MemlinkError, Result};

use super::chunk;
use super::hex;

/// A parsed host command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Query the device memory pointer
    Addr,

    /// Set the device memory pointer
    SetAddr { addr: u16 },

    /// Read `size` bytes starting at the pointer
    ReadMem { size: u16 },

    /// Write hex data starting at the pointer
    WriteMem { payload: String },

    /// Read the ROM identifier
    ReadRom,

    /// Query the maximum line length the device accepts
    QueryLineLen,
}

impl Command {
    /// Parse a verb and argument list into a command
    ///
    /// An unknown verb or a wrong argument count fails with
    /// `InvalidCommand`; an argument that is not valid hex fails with
    /// `MalformedInput`. Neither touches the transport.
    pub fn parse(verb: &str, args: &[String]) -> Result<Self> {
        match verb {
            "addr" => match args {
                [] => Ok(Command::Addr),
                [value] => Ok(Command::SetAddr {
                    addr: parse_u16(value)?,
                }),
                _ => Err(arity_error(verb, "zero or one argument", args.len())),
            },
            "rmem" => match args {
                [size] => Ok(Command::ReadMem {
                    size: parse_u16(size)?,
                }),
                _ => Err(arity_error(verb, "exactly one argument", args.len())),
            },
            "wmem" => match args {
                [data] => {
                    if !hex::validate(data) {
                        return Err(MemlinkError::MalformedInput(format!(
                            "wmem payload is not valid hex data ({} chars)",
                            data.len()
                        )));
                    }
                    Ok(Command::WriteMem {
                        payload: data.clone(),
                    })
                }
                _ => Err(arity_error(verb, "exactly one argument", args.len())),
            },
            "rrom" => match args {
                [] => Ok(Command::ReadRom),
                _ => Err(arity_error(verb, "no arguments", args.len())),
            },
            "llen" => match args {
                [] => Ok(Command::QueryLineLen),
                _ => Err(arity_error(verb, "no arguments", args.len())),
            },
            other => Err(MemlinkError::InvalidCommand(format!(
                "unknown verb {:?}",
                other
            ))),
        }
    }

    /// Render the command as the ordered list of outgoing lines
    ///
    /// `wmem` is the only multi-line command: the verb line, one line per
    /// payload chunk sized to the negotiated line length, and an empty
    /// line marking the end of data.
    pub fn render(&self, config: &SessionConfig) -> Vec<String> {
        match self {
            Command::Addr => vec!["addr".to_string()],
            Command::SetAddr { addr } => vec![format!("addr {:04x}", addr)],
            Command::ReadMem { size } => vec![format!("rmem {:04x}", size)],
            Command::WriteMem { payload } => {
                let chunks = chunk::split(payload, config.max_line_len);
                let mut lines = Vec::with_capacity(chunks.len() + 2);
                lines.push("wmem".to_string());
                lines.extend(chunks.into_iter().map(str::to_string));
                lines.push(String::new());
                lines
            }
            Command::ReadRom => vec!["rrom".to_string()],
            Command::QueryLineLen => vec!["llen".to_string()],
        }
    }

    /// Number of reply lines this command produces after the final ack
    pub fn expected_replies(&self, config: &SessionConfig) -> usize {
        match self {
            Command::Addr => 1,
            Command::SetAddr { .. } => 0,
            Command::ReadMem { size } => {
                chunk::reply_line_count(*size as usize, config.max_line_len)
            }
            Command::WriteMem { .. } => 0,
            Command::ReadRom => 1,
            Command::QueryLineLen => 1,
        }
    }

    /// The protocol verb this command renders to
    pub fn verb(&self) -> &'static str {
        match self {
            Command::Addr | Command::SetAddr { .. } => "addr",
            Command::ReadMem { .. } => "rmem",
            Command::WriteMem { .. } => "wmem",
            Command::ReadRom => "rrom",
            Command::QueryLineLen => "llen",
        }
    }
}

/// Parse a hex address or size argument into a u16
fn parse_u16(text: &str) -> Result<u16> {
    u16::from_str_radix(text, 16).map_err(|_| {
        MemlinkError::MalformedInput(format!(
            "{:?} is not a 16-bit hexadecimal value",
            text
        ))
    })
}

fn arity_error(verb: &str, expected: &str, got: usize) -> MemlinkError {
    MemlinkError::InvalidCommand(format!(
        "{} takes {}, got {}",
        verb, expected, got
    ))
}
