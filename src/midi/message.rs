use std::error::Error;
use std::fmt;

/// Custom error type for MIDI device operations
#[derive(Debug)]
pub enum MidiError {
    /// Error when receiving a message from a device
    RecvError(String),
    /// Error when connecting to a MIDI device
    ConnectionError(String),
}

impl fmt::Display for MidiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MidiError::RecvError(msg) => write!(f, "MIDI receive error: {}", msg),
            MidiError::ConnectionError(msg) => write!(f, "MIDI connection error: {}", msg),
        }
    }
}

impl Error for MidiError {}

impl From<&str> for MidiError {
    fn from(msg: &str) -> Self {
        MidiError::ConnectionError(msg.to_string())
    }
}

impl From<midir::InitError> for MidiError {
    fn from(err: midir::InitError) -> Self {
        MidiError::ConnectionError(err.to_string())
    }
}

impl From<midir::ConnectError<midir::MidiInput>> for MidiError {
    fn from(err: midir::ConnectError<midir::MidiInput>) -> Self {
        MidiError::ConnectionError(err.to_string())
    }
}

impl From<std::sync::mpsc::RecvError> for MidiError {
    fn from(err: std::sync::mpsc::RecvError) -> Self {
        MidiError::RecvError(err.to_string())
    }
}

/// Result type for MIDI device operations
pub type Result<T> = std::result::Result<T, MidiError>;

/// Sentinel timestamp meaning the device could not supply one.
pub const TIMESTAMP_UNAVAILABLE: i64 = -1;

/// A raw message as delivered by a device: the wire bytes plus the
/// device-relative microsecond timestamp ([`TIMESTAMP_UNAVAILABLE`] when the
/// device could not supply one).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedMessage {
    pub bytes: Vec<u8>,
    pub timestamp_us: i64,
}

impl TimedMessage {
    pub fn new(bytes: Vec<u8>, timestamp_us: i64) -> Self {
        TimedMessage {
            bytes,
            timestamp_us,
        }
    }
}

/// Trait defining the interface for MIDI input engine implementations.
/// Implementations deliver messages in arrival order; the stream processor
/// relies on that ordering.
pub trait MidiEngine: Send {
    /// Receives the next raw message from the device, blocking until one
    /// arrives or the device goes away.
    fn recv(&mut self) -> Result<TimedMessage>;
}
