//! Decoding of raw MIDI bytes into structured events.
//!
//! Decoding is total: every byte pattern maps to some [`DecodedEvent`],
//! with unrecognized patterns surfaced as [`DecodedEvent::Unknown`] rather
//! than errors. The functions here are pure and hold no state.

use std::fmt;

/// One of the 12 note names within an octave.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PitchClass {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}

impl PitchClass {
    /// Derives the pitch class from a MIDI note number (note mod 12).
    pub fn from_note_number(note: u8) -> Self {
        match note % 12 {
            0 => PitchClass::C,
            1 => PitchClass::CSharp,
            2 => PitchClass::D,
            3 => PitchClass::DSharp,
            4 => PitchClass::E,
            5 => PitchClass::F,
            6 => PitchClass::FSharp,
            7 => PitchClass::G,
            8 => PitchClass::GSharp,
            9 => PitchClass::A,
            10 => PitchClass::ASharp,
            _ => PitchClass::B,
        }
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PitchClass::C => "C",
            PitchClass::CSharp => "C#",
            PitchClass::D => "D",
            PitchClass::DSharp => "D#",
            PitchClass::E => "E",
            PitchClass::F => "F",
            PitchClass::FSharp => "F#",
            PitchClass::G => "G",
            PitchClass::GSharp => "G#",
            PitchClass::A => "A",
            PitchClass::ASharp => "A#",
            PitchClass::B => "B",
        };
        write!(f, "{}", name)
    }
}

/// System real-time and system common statuses (channel-less messages).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    ActiveSensing,
    Continue,
    EndOfExclusive,
    MidiTimeCode,
    SongPositionPointer,
    SongSelect,
    Start,
    Stop,
    SystemReset,
    TimingClock,
    TuneRequest,
}

impl StatusKind {
    /// Looks up a full status byte in the fixed system-status table.
    pub fn from_status(status: u8) -> Option<Self> {
        match status {
            0xF1 => Some(StatusKind::MidiTimeCode),
            0xF2 => Some(StatusKind::SongPositionPointer),
            0xF3 => Some(StatusKind::SongSelect),
            0xF6 => Some(StatusKind::TuneRequest),
            0xF7 => Some(StatusKind::EndOfExclusive),
            0xF8 => Some(StatusKind::TimingClock),
            0xFA => Some(StatusKind::Start),
            0xFB => Some(StatusKind::Continue),
            0xFC => Some(StatusKind::Stop),
            0xFE => Some(StatusKind::ActiveSensing),
            0xFF => Some(StatusKind::SystemReset),
            _ => None,
        }
    }
}

/// Channel-voice commands (high nibble of the status byte).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    NoteOff,
    NoteOn,
    PolyPressure,
    ControlChange,
    ProgramChange,
    ChannelPressure,
    PitchBend,
}

impl CommandKind {
    /// Looks up a command byte in the fixed channel-voice table.
    pub fn from_command(command: u8) -> Option<Self> {
        match command {
            0x80 => Some(CommandKind::NoteOff),
            0x90 => Some(CommandKind::NoteOn),
            0xA0 => Some(CommandKind::PolyPressure),
            0xB0 => Some(CommandKind::ControlChange),
            0xC0 => Some(CommandKind::ProgramChange),
            0xD0 => Some(CommandKind::ChannelPressure),
            0xE0 => Some(CommandKind::PitchBend),
            _ => None,
        }
    }
}

/// System-exclusive lead bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysexKind {
    SystemExclusive,
    SpecialSystemExclusive,
}

impl SysexKind {
    pub fn from_status(status: u8) -> Option<Self> {
        match status {
            0xF0 => Some(SysexKind::SystemExclusive),
            0xF7 => Some(SysexKind::SpecialSystemExclusive),
            _ => None,
        }
    }
}

/// A raw MIDI message as delivered by the device layer, before decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawMessage {
    /// A 1-3 byte message: status byte plus up to two data bytes.
    Short { status: u8, data1: u8, data2: u8 },
    /// A variable-length system-exclusive block, lead byte included.
    Sysex { status: u8, payload: Vec<u8> },
}

impl RawMessage {
    /// Frames a raw byte slice into a message. Total: short messages pad
    /// missing data bytes with zero, and 0xF0/0xF7 leads a sysex block.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let status = bytes.first().copied().unwrap_or(0);
        if SysexKind::from_status(status).is_some() && bytes.len() > 1 {
            return RawMessage::Sysex {
                status,
                payload: bytes[1..].to_vec(),
            };
        }
        RawMessage::Short {
            status,
            data1: bytes.get(1).copied().unwrap_or(0),
            data2: bytes.get(2).copied().unwrap_or(0),
        }
    }
}

/// A note-on or note-off, with the pitch split into class and octave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteEvent {
    pub channel: u8,
    pub key: PitchClass,
    pub octave: u8,
    pub velocity: u8,
    pub on: bool,
}

impl fmt::Display for NoteEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{} {} ch{} vel{}",
            self.key,
            self.octave,
            if self.on { "on" } else { "off" },
            self.channel,
            self.velocity
        )
    }
}

/// A decoded MIDI event. Closed union over everything the wire format can
/// carry; decoding never fails, so there is no error variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedEvent {
    Note(NoteEvent),
    Pressure {
        channel: u8,
        key: PitchClass,
        octave: u8,
        pressure: u8,
    },
    ControlChange {
        channel: u8,
        controller: u8,
        value: u8,
    },
    ProgramChange {
        channel: u8,
        program: u8,
    },
    PitchBend {
        channel: u8,
        value: u16,
    },
    StatusOnly {
        status: StatusKind,
    },
    Sysex {
        kind: Option<SysexKind>,
        payload: Vec<u8>,
    },
    Unknown {
        status: u8,
        command: u8,
        data1: u8,
        data2: u8,
    },
}

/// Combines two 7-bit data bytes into a 14-bit value: low 7 bits from
/// `low`, high 7 bits from `high`. Bits beyond bit 6 of each input are
/// ignored.
pub fn combine14(low: u8, high: u8) -> u16 {
    ((low & 0x7F) as u16) | (((high & 0x7F) as u16) << 7)
}

/// Decodes a raw message into a structured event. Total and deterministic:
/// the command table is consulted first, then the system-status table, and
/// anything outside both becomes [`DecodedEvent::Unknown`] carrying the raw
/// bytes unchanged.
pub fn decode(raw: &RawMessage) -> DecodedEvent {
    match raw {
        RawMessage::Short {
            status,
            data1,
            data2,
        } => decode_short(*status, *data1, *data2),
        RawMessage::Sysex { status, payload } => DecodedEvent::Sysex {
            kind: SysexKind::from_status(*status),
            payload: payload.clone(),
        },
    }
}

fn decode_short(status: u8, data1: u8, data2: u8) -> DecodedEvent {
    let command = status & 0xF0;
    // Channels are 1-based on the wire surface, 0-based in the low nibble.
    let channel = (status & 0x0F) + 1;

    if let Some(kind) = CommandKind::from_command(command) {
        return match kind {
            CommandKind::NoteOn | CommandKind::NoteOff => DecodedEvent::Note(NoteEvent {
                channel,
                key: PitchClass::from_note_number(data1),
                octave: data1 / 12,
                velocity: data2,
                on: kind == CommandKind::NoteOn,
            }),
            CommandKind::PolyPressure | CommandKind::ChannelPressure => DecodedEvent::Pressure {
                channel,
                key: PitchClass::from_note_number(data1),
                octave: data1 / 12,
                pressure: data2,
            },
            CommandKind::ControlChange => DecodedEvent::ControlChange {
                channel,
                controller: data1,
                value: data2,
            },
            CommandKind::ProgramChange => DecodedEvent::ProgramChange {
                channel,
                program: data1,
            },
            CommandKind::PitchBend => DecodedEvent::PitchBend {
                channel,
                value: combine14(data1, data2),
            },
        };
    }

    if let Some(kind) = StatusKind::from_status(status) {
        return DecodedEvent::StatusOnly { status: kind };
    }

    DecodedEvent::Unknown {
        status,
        command,
        data1,
        data2,
    }
}
