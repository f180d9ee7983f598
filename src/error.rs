//! Error types for memlink
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using MemlinkError
pub type Result<T> = std::result::Result<T, MemlinkError>;

/// Unified error type for memlink operations
#[derive(Debug, Error)]
pub enum MemlinkError {
    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("Timed out waiting for a line from the device")]
    Timeout,

    // -------------------------------------------------------------------------
    // Input Validation Errors
    // -------------------------------------------------------------------------
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    // -------------------------------------------------------------------------
    // Protocol Errors
    // -------------------------------------------------------------------------
    #[error("Protocol error: {0}")]
    Protocol(String),
}
