pub mod cli;
pub mod config;
pub mod logging;
pub mod midi;
pub mod scheduler;
pub mod session;
pub mod stream;
pub mod ui;

use std::sync::{Arc, Mutex};

pub use scheduler::{Scheduler, ThreadScheduler};
pub use session::SessionState;

/// Session state shared between the stream processor (sole writer) and
/// snapshot readers such as the inspector.
pub type SharedSession = Arc<Mutex<SessionState>>;

pub fn create_shared_session() -> SharedSession {
    Arc::new(Mutex::new(SessionState::new()))
}

pub fn create_scheduler() -> ThreadScheduler {
    ThreadScheduler::new()
}

/// Lists the MIDI input devices currently visible to the system.
pub fn handle_device_list() -> Vec<String> {
    midi::list_input_devices()
}
