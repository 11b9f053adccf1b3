//! The stream processor: the single consumer that folds raw device
//! messages into the shared session state, in strict arrival order.

use crate::config::DEFAULT_NOTE_WINDOW_SECS;
use crate::midi::decoder::{decode, DecodedEvent, RawMessage};
use crate::midi::{MidiEngine, TimedMessage};
use crate::SharedSession;
use crossbeam::channel::{unbounded, RecvTimeoutError};
use log::{debug, error, info};
use std::time::{Duration, Instant};

const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(5);

/// Decodes raw messages and applies them to the session, one at a time.
/// Decoding itself is pure; only the fold step touches shared state.
pub struct StreamProcessor {
    session: SharedSession,
    note_window_us: i64,
}

impl StreamProcessor {
    pub fn new(session: SharedSession) -> Self {
        Self::with_note_window(session, Duration::from_secs(DEFAULT_NOTE_WINDOW_SECS))
    }

    pub fn with_note_window(session: SharedSession, window: Duration) -> Self {
        StreamProcessor {
            session,
            note_window_us: window.as_micros() as i64,
        }
    }

    /// Processes one raw message: frame, decode, fold into the session,
    /// then evict notes that have aged out of the retention window. Returns
    /// the decoded event for forwarding.
    pub fn process(&self, msg: &TimedMessage) -> DecodedEvent {
        let raw = RawMessage::from_bytes(&msg.bytes);
        let event = decode(&raw);

        if let Ok(mut session) = self.session.lock() {
            session.apply(&event, msg.timestamp_us);
            let cutoff = session.last_message_timestamp() - self.note_window_us;
            session.evict_before(cutoff);
        }

        event
    }
}

/// Runs the stream until the device goes away or falls silent.
///
/// A dedicated thread pulls from the engine and forwards messages over a
/// channel, so the device-facing side never blocks on the fold step; this
/// loop is the sole writer of the session state.
pub fn run_stream<T>(engine: T, session: SharedSession)
where
    T: MidiEngine + 'static,
{
    run_stream_with_window(engine, session, Duration::from_secs(DEFAULT_NOTE_WINDOW_SECS));
}

/// [`run_stream`] with an explicit note retention window.
pub fn run_stream_with_window<T>(engine: T, session: SharedSession, note_window: Duration)
where
    T: MidiEngine + 'static,
{
    let processor = StreamProcessor::with_note_window(session, note_window);
    info!("Stream processor initialized and waiting for input");

    let (tx, rx) = unbounded();
    let mut engine = engine;

    std::thread::spawn(move || loop {
        match engine.recv() {
            Ok(msg) => {
                if tx.send(msg).is_err() {
                    error!("Failed to forward MIDI message - stream processor dropped");
                    break;
                }
            }
            Err(e) => {
                error!("MIDI engine receive error: {}", e);
                break;
            }
        }
    });

    let mut last_message_time = Instant::now();
    loop {
        if last_message_time.elapsed() > INACTIVITY_TIMEOUT {
            error!(
                "MIDI stream timeout - no messages received for {:?}",
                INACTIVITY_TIMEOUT
            );
            break;
        }

        match rx.recv_timeout(Duration::from_secs(1)) {
            Ok(msg) => {
                last_message_time = Instant::now();
                let event = processor.process(&msg);
                debug!("Processed event at {}: {:?}", msg.timestamp_us, event);
            }
            Err(RecvTimeoutError::Timeout) => {
                // Inactivity is handled at the top of the loop
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => {
                error!("MIDI receiver thread disconnected - device closed or thread panicked");
                break;
            }
        }
    }

    info!("Stream processor stopped");
}
