//! Data-or-file argument resolution
//!
//! A `wmem` argument may be literal hex text or the path of a local file
//! containing hex text. Files may span multiple lines; line terminators
//! are stripped before validation.

use std::fs;
use std::path::Path;

use crate::error::{MemlinkError, Result};
use crate::protocol::hex;

/// Resolve a `wmem` argument into a validated hex payload
///
/// If `arg` names an existing file, its contents are read and merged into
/// a single line; otherwise `arg` itself is the payload. Either way the
/// result must be valid hex data or the command is never sent.
pub fn resolve_data_argument(arg: &str) -> Result<String> {
    let payload = if Path::new(arg).is_file() {
        read_data_file(arg)?
    } else {
        arg.to_string()
    };

    if !hex::validate(&payload) {
        return Err(MemlinkError::MalformedInput(format!(
            "payload is not valid hex data ({} chars)",
            payload.len()
        )));
    }

    Ok(payload)
}

/// Read a hex data file, merging its lines
fn read_data_file(path: &str) -> Result<String> {
    let contents = fs::read_to_string(path)?;
    Ok(contents.lines().collect::<Vec<_>>().concat())
}
