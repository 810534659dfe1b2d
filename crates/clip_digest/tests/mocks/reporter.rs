use std::sync::{Arc, Mutex};

use clip_digest::progress::Reporter;

#[derive(Clone, Default)]
pub struct MockReporter {
    pub statuses: Arc<Mutex<Vec<String>>>,
    pub progress_events: Arc<Mutex<Vec<(u8, String)>>>,
}

impl Reporter for MockReporter {
    fn status(&self, label: &str) {
        self.statuses.lock().unwrap().push(label.to_string());
    }

    fn progress(&self, percent: u8, label: &str) {
        self.progress_events
            .lock()
            .unwrap()
            .push((percent, label.to_string()));
    }
}
