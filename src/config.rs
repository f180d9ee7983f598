//! Configuration for memlink
//!
//! Centralized configuration with sensible defaults.

/// Line length assumed before the `llen` query completes.
///
/// The `llen` exchange itself must fit in a single line, so any value the
/// device actually supports works here; 16 matches the smallest device
/// revision observed in the field.
pub const DEFAULT_MAX_LINE_LEN: usize = 16;

/// Transport configuration for a memlink session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Transport Configuration
    // -------------------------------------------------------------------------
    /// Serial baud rate
    pub baud_rate: u32,

    /// Read timeout for a single line (milliseconds)
    pub read_timeout_ms: u64,

    // -------------------------------------------------------------------------
    // Session Configuration
    // -------------------------------------------------------------------------
    /// Maximum line length assumed until `llen` negotiation completes
    /// (in hex characters)
    pub initial_max_line_len: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            baud_rate: 9600,
            read_timeout_ms: 1000,
            initial_max_line_len: DEFAULT_MAX_LINE_LEN,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the serial baud rate
    pub fn baud_rate(mut self, baud: u32) -> Self {
        self.config.baud_rate = baud;
        self
    }

    /// Set the per-line read timeout (in milliseconds)
    pub fn read_timeout_ms(mut self, ms: u64) -> Self {
        self.config.read_timeout_ms = ms;
        self
    }

    /// Set the pre-negotiation maximum line length (in hex characters)
    pub fn initial_max_line_len(mut self, len: usize) -> Self {
        self.config.initial_max_line_len = len;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}

/// Per-session protocol state established at session start.
///
/// Holds the maximum line length negotiated via the `llen` query. Owned
/// exclusively by the running [`Session`](crate::Session) and passed by
/// reference into chunking and command rendering; it is never shared
/// across sessions.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Largest number of hex characters the device accepts per line
    pub max_line_len: usize,
}

impl SessionConfig {
    /// Create a session config with the given starting line length
    pub fn new(max_line_len: usize) -> Self {
        Self { max_line_len }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LINE_LEN)
    }
}
