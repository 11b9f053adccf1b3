// ui.rs

use crate::SharedSession;
use indicatif::ProgressDrawTarget;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::thread;
use std::time::Duration;

fn create_tempo_spinner(multi_progress: &MultiProgress) -> ProgressBar {
    let pb = multi_progress.add(ProgressBar::new_spinner());
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{prefix:.bold.dim} {spinner} {wide_msg}")
            .unwrap(),
    );
    pb.set_prefix("Session");
    pb
}

/// Reads session snapshots and renders them; never writes to the session.
pub struct SessionInspector {
    session: SharedSession,

    #[allow(dead_code)]
    multi_progress: MultiProgress,
    session_pb: ProgressBar,
}

impl SessionInspector {
    pub fn new(session: SharedSession) -> Self {
        let multi_progress = MultiProgress::with_draw_target(ProgressDrawTarget::stderr());
        let session_pb = create_tempo_spinner(&multi_progress);

        SessionInspector {
            session,
            multi_progress,
            session_pb,
        }
    }

    pub fn run(&self) {
        loop {
            thread::sleep(Duration::from_millis(100));
            let snapshot = match self.session.lock() {
                Ok(session) => session.snapshot(),
                Err(_) => break,
            };

            let bpm = snapshot
                .bpm
                .map(|bpm| format!("{:.1}", bpm))
                .unwrap_or_else(|| "--".to_string());

            self.session_pb.set_message(format!(
                "BPM: {}, Buffered notes: {}, Last message at: {}us",
                bpm,
                snapshot.notes.len(),
                snapshot.last_message_timestamp
            ));

            // Tick the spinner to animate it.
            self.session_pb.tick();
        }
    }
}

pub fn run_session_inspector(session: SharedSession) {
    SessionInspector::new(session).run();
}
