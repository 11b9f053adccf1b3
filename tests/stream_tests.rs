use midiscoprs::midi::decoder::{DecodedEvent, NoteEvent, PitchClass};
use midiscoprs::midi::{MockMidiEngine, TimedMessage, TIMESTAMP_UNAVAILABLE};
use midiscoprs::stream::{run_stream, StreamProcessor};
use midiscoprs::create_shared_session;
use std::time::Duration;

#[test]
fn test_process_buffers_note_on() {
    let session = create_shared_session();
    let processor = StreamProcessor::new(session.clone());

    let event = processor.process(&TimedMessage::new(vec![0x90, 0x3C, 0x40], 1_000));
    assert_eq!(
        event,
        DecodedEvent::Note(NoteEvent {
            channel: 1,
            key: PitchClass::C,
            octave: 5,
            velocity: 64,
            on: true,
        })
    );

    let snapshot = session.lock().unwrap().snapshot();
    assert_eq!(snapshot.notes.len(), 1);
    assert_eq!(snapshot.notes[0].timestamp_us, 1_000);
    assert_eq!(snapshot.last_message_timestamp, 1_000);
}

#[test]
fn test_process_does_not_buffer_control_change() {
    let session = create_shared_session();
    let processor = StreamProcessor::new(session.clone());

    let event = processor.process(&TimedMessage::new(vec![0xB0, 0x07, 0x7F], 2_000));
    assert_eq!(
        event,
        DecodedEvent::ControlChange {
            channel: 1,
            controller: 7,
            value: 127,
        }
    );

    let snapshot = session.lock().unwrap().snapshot();
    assert!(snapshot.notes.is_empty());
    assert_eq!(snapshot.last_message_timestamp, 2_000);
}

#[test]
fn test_process_survives_unknown_status() {
    let session = create_shared_session();
    let processor = StreamProcessor::new(session.clone());

    let event = processor.process(&TimedMessage::new(vec![0xF4], 3_000));
    assert_eq!(
        event,
        DecodedEvent::Unknown {
            status: 0xF4,
            command: 0xF0,
            data1: 0,
            data2: 0,
        }
    );
    assert_eq!(session.lock().unwrap().snapshot().last_message_timestamp, 3_000);
}

#[test]
fn test_processor_evicts_notes_outside_window() {
    let session = create_shared_session();
    let processor =
        StreamProcessor::with_note_window(session.clone(), Duration::from_micros(500));

    processor.process(&TimedMessage::new(vec![0x90, 0x3C, 0x40], 1_000));
    processor.process(&TimedMessage::new(vec![0x90, 0x3E, 0x40], 1_400));
    assert_eq!(session.lock().unwrap().snapshot().notes.len(), 2);

    // A later message pushes the first note past the retention window
    processor.process(&TimedMessage::new(vec![0xB0, 0x07, 0x10], 2_000));
    let snapshot = session.lock().unwrap().snapshot();
    assert_eq!(snapshot.notes.len(), 1);
    assert_eq!(snapshot.notes[0].timestamp_us, 1_400);
}

#[test]
fn test_sentinel_timestamp_reuses_previous() {
    let session = create_shared_session();
    let processor = StreamProcessor::new(session.clone());

    processor.process(&TimedMessage::new(vec![0xB0, 0x07, 0x10], 5_000));
    processor.process(&TimedMessage::new(
        vec![0x90, 0x3C, 0x40],
        TIMESTAMP_UNAVAILABLE,
    ));

    let snapshot = session.lock().unwrap().snapshot();
    assert_eq!(snapshot.notes.len(), 1);
    assert_eq!(snapshot.notes[0].timestamp_us, 5_000);
    assert_eq!(snapshot.last_message_timestamp, 5_000);
}

#[test]
fn test_run_stream_with_scripted_engine() {
    // 120 BPM pulse spacing
    let spacing: i64 = 20_833;
    let mut script = Vec::new();
    for i in 0..24 {
        script.push(TimedMessage::new(vec![0xF8], (i + 1) * spacing));
    }
    script.push(TimedMessage::new(vec![0x90, 0x45, 0x50], 25 * spacing));
    script.push(TimedMessage::new(vec![0x90, 0x45, 0x00], 26 * spacing));

    let session = create_shared_session();
    let engine = MockMidiEngine::with_script(script);

    // Blocks until the script runs out and the engine reports disconnect
    run_stream(engine, session.clone());

    let snapshot = session.lock().unwrap().snapshot();
    let bpm = snapshot.bpm.expect("tempo after 24 timing-clock pulses");
    assert!((bpm - 120.0).abs() < 0.1, "expected ~120 BPM, got {}", bpm);

    // The audible note-on is buffered; the zero-velocity one is not
    assert_eq!(snapshot.notes.len(), 1);
    assert_eq!(snapshot.notes[0].timestamp_us, 25 * spacing);
    assert_eq!(snapshot.last_message_timestamp, 26 * spacing);
}
