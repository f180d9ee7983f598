//! Payload chunking
//!
//! Splits hex payloads into protocol-sized lines and computes how many
//! reply lines a read of a given size will occupy. Both directions use
//! the session's negotiated maximum line length.

/// Split a hex payload into lines of at most `max_len` characters
///
/// Greedy left-to-right slicing: every chunk except possibly the last has
/// exactly `max_len` characters, and concatenating the chunks in order
/// reproduces the payload. An empty payload yields no chunks.
pub fn split(payload: &str, max_len: usize) -> Vec<&str> {
    debug_assert!(max_len > 0);

    let mut chunks = Vec::with_capacity(payload.len().div_ceil(max_len));
    let mut rest = payload;
    while !rest.is_empty() {
        let take = rest.len().min(max_len);
        let (chunk, tail) = rest.split_at(take);
        chunks.push(chunk);
        rest = tail;
    }
    chunks
}

/// Number of reply lines a read of `byte_size` bytes occupies
///
/// Each reply line carries up to `max_len` hex characters, i.e.
/// `max_len / 2` bytes, so the count is `ceil(byte_size * 2 / max_len)`.
/// Matches the chunk count [`split`] produces for the same data once
/// hex-encoded.
pub fn reply_line_count(byte_size: usize, max_len: usize) -> usize {
    debug_assert!(max_len > 0);

    (byte_size * 2).div_ceil(max_len)
}
