use crate::midi::{MidiError, MidiEngine, Result, TimedMessage};
use std::collections::VecDeque;

/// Scripted engine for tests: replays a fixed message sequence in order,
/// then reports the device as gone.
pub struct MockMidiEngine {
    script: VecDeque<TimedMessage>,
}

impl MockMidiEngine {
    pub fn new() -> Self {
        MockMidiEngine {
            script: VecDeque::new(),
        }
    }

    pub fn with_script(messages: Vec<TimedMessage>) -> Self {
        MockMidiEngine {
            script: messages.into(),
        }
    }
}

impl Default for MockMidiEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MidiEngine for MockMidiEngine {
    fn recv(&mut self) -> Result<TimedMessage> {
        self.script
            .pop_front()
            .ok_or_else(|| MidiError::RecvError("mock script exhausted".to_string()))
    }
}
