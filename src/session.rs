//! Per-stream session state: the tempo tracker and the rolling note log.
//!
//! One `SessionState` exists per active device stream. It is advanced by
//! exactly one fold step per incoming event, in arrival order, by the
//! stream processor; readers take [`SessionState::snapshot`] copies.

use crate::config::{MICROS_PER_MINUTE, PULSES_PER_QUARTER};
use crate::midi::decoder::{DecodedEvent, NoteEvent, StatusKind};
use log::{debug, info};
use std::collections::VecDeque;

/// A buffered note event together with its arrival timestamp.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimedNote {
    pub timestamp_us: i64,
    pub note: NoteEvent,
}

/// Immutable copy of the session state handed to concurrent readers.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionSnapshot {
    pub bpm: Option<f64>,
    pub last_message_timestamp: i64,
    pub notes: Vec<TimedNote>,
}

/// The mutable aggregate folded over the decoded event stream.
#[derive(Debug)]
pub struct SessionState {
    last_message_timestamp: i64,
    clock_pulses: u8,
    beat_stamp: i64,
    bpm: Option<f64>,
    note_buffer: VecDeque<TimedNote>,
}

impl SessionState {
    /// Creates a fresh session: counters zeroed, no tempo estimate yet.
    pub fn new() -> Self {
        SessionState {
            last_message_timestamp: 0,
            clock_pulses: 0,
            beat_stamp: 0,
            bpm: None,
            note_buffer: VecDeque::new(),
        }
    }

    /// Applies one decoded event to the session. This is the single state
    /// transition driving the whole system: timing-clock pulses advance the
    /// tempo tracker, audible note events enter the buffer, and every event
    /// updates the last-seen timestamp. A negative timestamp is the
    /// "unavailable" sentinel and substitutes the previous one.
    pub fn apply(&mut self, event: &DecodedEvent, timestamp_us: i64) {
        let ts = if timestamp_us < 0 {
            self.last_message_timestamp
        } else {
            timestamp_us
        };

        match event {
            DecodedEvent::StatusOnly {
                status: StatusKind::TimingClock,
            } => self.clock_pulse(ts),
            DecodedEvent::Note(note) if note.velocity > 0 => {
                debug!("Buffering note: {}", note);
                self.note_buffer.push_back(TimedNote {
                    timestamp_us: ts,
                    note: note.clone(),
                });
            }
            _ => {}
        }

        self.last_message_timestamp = ts;
    }

    /// Advances the tempo tracker by one timing-clock pulse. The 24th pulse
    /// since the last quarter-note boundary recomputes the tempo from the
    /// elapsed interval and resets the counter.
    fn clock_pulse(&mut self, timestamp_us: i64) {
        if self.clock_pulses < PULSES_PER_QUARTER - 1 {
            self.clock_pulses += 1;
            return;
        }

        // Clamp: a zero or backwards interval must not divide by zero or
        // yield a negative tempo.
        let elapsed = (timestamp_us - self.beat_stamp).max(1);
        let bpm = MICROS_PER_MINUTE as f64 / elapsed as f64;
        info!("Tempo updated to {:.2} BPM", bpm);

        self.bpm = Some(bpm);
        self.beat_stamp = timestamp_us;
        self.clock_pulses = 0;
    }

    /// Removes every buffered note with `timestamp <= cutoff`, preserving
    /// the order of the remainder. Idempotent, and monotonic over
    /// non-decreasing cutoffs.
    pub fn evict_before(&mut self, cutoff_us: i64) {
        let before = self.note_buffer.len();
        self.note_buffer.retain(|entry| entry.timestamp_us > cutoff_us);
        let evicted = before - self.note_buffer.len();
        if evicted > 0 {
            debug!("Evicted {} note(s) at or before {}", evicted, cutoff_us);
        }
    }

    /// Copies the observable state for a concurrent reader.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            bpm: self.bpm,
            last_message_timestamp: self.last_message_timestamp,
            notes: self.note_buffer.iter().cloned().collect(),
        }
    }

    pub fn bpm(&self) -> Option<f64> {
        self.bpm
    }

    pub fn last_message_timestamp(&self) -> i64 {
        self.last_message_timestamp
    }

    pub fn note_count(&self) -> usize {
        self.note_buffer.len()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
