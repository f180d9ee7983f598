//! Protocol Module
//!
//! Defines the line-oriented ASCII wire protocol spoken with the device.
//!
//! ## Wire Format
//!
//! Every exchange is made of LF-terminated text lines (a trailing CR is
//! tolerated on receipt). After each line the host sends, the device
//! answers with a one-line acknowledgment before anything else happens:
//!
//! ```text
//! host ──► "rmem 0020\n"
//! dev  ◄── "ok\n"              ack (anything else aborts the command)
//! dev  ◄── "1122334455667788\n" reply lines, count known in advance
//! dev  ◄── ...
//! ```
//!
//! ### Commands
//! - `addr`        - query the device memory pointer; 1 reply line (4 hex digits)
//! - `addr <hhhh>` - set the device memory pointer; no reply
//! - `rmem <hhhh>` - read `<hhhh>` bytes from the pointer; N reply lines
//! - `wmem`        - write data at the pointer; followed by one line per
//!   payload chunk and a terminating empty line; no reply
//! - `rrom`        - read the ROM identifier; 1 reply line (16 hex digits)
//! - `llen`        - query the maximum line length; 1 reply line (hex)
//!
//! ### Acknowledgment
//! The literal line `ok` means continue; any other text (the device sends
//! `ko`) is a negative acknowledgment and aborts the command.
//!
//! Reply data lines carry up to `max_line_len` hex characters each, i.e.
//! `max_line_len / 2` bytes, where `max_line_len` is the session's
//! negotiated maximum line length.

mod command;
mod engine;

pub mod chunk;
pub mod hex;

pub use command::Command;
pub use engine::{Exchange, ExchangeState, ACK_TOKEN};
