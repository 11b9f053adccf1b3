//! MIDI functionality for midiscoprs
//!
//! This module provides the device-facing MIDI layer, including:
//! - Raw message framing and decoding into structured events
//! - Real MIDI device input via midir
//! - Mock implementations for testing
//!
//! The main components are:
//! - [`decoder::decode`] mapping raw bytes to [`decoder::DecodedEvent`]
//! - [`MidiEngine`] trait for receiving timestamped raw messages
//! - [`MidirEngine`] for real MIDI device communication
//! - [`MockMidiEngine`] for testing
//!
pub mod decoder;
mod message;
pub mod midir_engine;
pub mod mock_engine;

// Re-export main types from the message layer
pub use message::{MidiEngine, MidiError, Result, TimedMessage, TIMESTAMP_UNAVAILABLE};

// Re-export concrete implementations
pub use midir_engine::{list_input_devices, MidirEngine};
pub use mock_engine::MockMidiEngine;

// Set default engine type
pub type DefaultMidiEngine = MidirEngine;
