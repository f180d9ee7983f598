//! Hexadecimal codec
//!
//! Encoding, decoding and validation of the hex text carried on protocol
//! lines. Encoding is lowercase; decoding accepts either case.

use crate::error::{MemlinkError, Result};

/// Encode bytes as lowercase hex, two digits per byte
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for b in bytes {
        out.push(digit_to_char(b >> 4));
        out.push(digit_to_char(b & 0x0f));
    }
    out
}

/// Decode a hex string to bytes
///
/// Fails with `MalformedInput` if the length is odd or any character is
/// outside `[0-9a-fA-F]`.
pub fn decode(text: &str) -> Result<Vec<u8>> {
    if text.len() % 2 != 0 {
        return Err(MemlinkError::MalformedInput(format!(
            "hex data has odd length {}",
            text.len()
        )));
    }

    let mut out = Vec::with_capacity(text.len() / 2);
    let bytes = text.as_bytes();
    for pair in bytes.chunks_exact(2) {
        let hi = char_to_digit(pair[0])?;
        let lo = char_to_digit(pair[1])?;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

/// Check whether a string is valid hex data (even length, hex digits only)
///
/// Same precondition as [`decode`], exposed standalone so callers can
/// reject bad input before any further processing.
pub fn validate(text: &str) -> bool {
    text.len() % 2 == 0 && text.bytes().all(|b| b.is_ascii_hexdigit())
}

fn digit_to_char(d: u8) -> char {
    match d {
        0..=9 => (b'0' + d) as char,
        _ => (b'a' + d - 10) as char,
    }
}

fn char_to_digit(c: u8) -> Result<u8> {
    match c {
        b'0'..=b'9' => Ok(c - b'0'),
        b'a'..=b'f' => Ok(c - b'a' + 10),
        b'A'..=b'F' => Ok(c - b'A' + 10),
        _ => Err(MemlinkError::MalformedInput(format!(
            "invalid hex character {:?}",
            c as char
        ))),
    }
}
