use std::thread;

/// Seam for spawning the long-running worker loops (stream pump,
/// inspector), so tests can substitute their own execution strategy.
pub trait Scheduler {
    fn spawn<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static;
}

pub struct ThreadScheduler;

impl ThreadScheduler {
    pub fn new() -> Self {
        ThreadScheduler
    }
}

impl Default for ThreadScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler for ThreadScheduler {
    fn spawn<F>(&self, f: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let _ = thread::spawn(f);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    #[test]
    fn test_thread_scheduler_runs_closure() {
        let scheduler = ThreadScheduler::new();
        let ran = Arc::new(Mutex::new(false));
        let ran_clone = ran.clone();

        scheduler.spawn(move || {
            *ran_clone.lock().unwrap() = true;
        });

        // Give the thread a moment to execute
        thread::sleep(Duration::from_millis(10));
        assert!(*ran.lock().unwrap());
    }
}
