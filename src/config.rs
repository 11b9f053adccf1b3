// config.rs

/// Standard MIDI timing: 24 timing-clock pulses per quarter note.
pub const PULSES_PER_QUARTER: u8 = 24;

/// Microseconds in a minute, numerator of the BPM computation.
pub const MICROS_PER_MINUTE: i64 = 60_000_000;

/// Default retention window for the note buffer, in seconds. Entries older
/// than this relative to the latest message are evicted.
pub const DEFAULT_NOTE_WINDOW_SECS: u64 = 30;
