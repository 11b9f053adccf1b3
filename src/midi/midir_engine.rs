use crate::midi::{MidiEngine, Result, TimedMessage};
use midir::{Ignore, MidiInput, MidiInputConnection};
use std::sync::mpsc::{channel, Receiver};

/// Real MIDI input via midir. The connection callback runs on the driver's
/// delivery thread and must not block, so it only forwards the bytes and
/// timestamp onto a channel drained by `recv`.
pub struct MidirEngine {
    #[allow(dead_code)]
    input: MidiInputConnection<()>,
    rx: Receiver<TimedMessage>,
}

impl MidirEngine {
    pub fn new(device_name: &str) -> Result<Self> {
        let mut midi_in = MidiInput::new("midiscoprs-in")?;
        midi_in.ignore(Ignore::None);

        let in_ports = midi_in.ports();
        let in_port = in_ports
            .iter()
            .find(|p| midi_in.port_name(p).unwrap_or_default().contains(device_name))
            .ok_or("Input device not found")?;

        let (tx, rx) = channel();
        let input = midi_in.connect(
            in_port,
            "midiscoprs-input",
            move |stamp, message, _| {
                let _ = tx.send(TimedMessage::new(message.to_vec(), stamp as i64));
            },
            (),
        )?;

        Ok(MidirEngine { input, rx })
    }
}

impl MidiEngine for MidirEngine {
    fn recv(&mut self) -> Result<TimedMessage> {
        Ok(self.rx.recv()?)
    }
}

#[cfg(not(feature = "test-mock"))]
pub fn list_input_devices() -> Vec<String> {
    let mut devices = Vec::new();

    if let Ok(midi_in) = MidiInput::new("midiscoprs-list") {
        for port in midi_in.ports() {
            if let Ok(name) = midi_in.port_name(&port) {
                devices.push(name);
            }
        }
    }

    devices
}

#[cfg(feature = "test-mock")]
pub fn list_input_devices() -> Vec<String> {
    // Mock implementation for tests - simple format as expected by tests
    vec!["Mock Device 1".to_string(), "Mock Device 2".to_string()]
}
