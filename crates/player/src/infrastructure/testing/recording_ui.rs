//! UI double that records every instruction it receives

use std::sync::Mutex;

use crate::ports::outbound::{UiPort, UiUpdate};

#[derive(Default)]
pub struct RecordingUi {
    updates: Mutex<Vec<UiUpdate>>,
}

impl RecordingUi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything received so far, in order
    pub fn updates(&self) -> Vec<UiUpdate> {
        self.updates
            .lock()
            .map(|updates| updates.clone())
            .unwrap_or_default()
    }

    /// Drain the recorded updates
    pub fn take(&self) -> Vec<UiUpdate> {
        self.updates
            .lock()
            .map(|mut updates| std::mem::take(&mut *updates))
            .unwrap_or_default()
    }

    pub fn contains(&self, update: &UiUpdate) -> bool {
        self.updates().contains(update)
    }

    /// Index of the first update matching the predicate
    pub fn position(&self, predicate: impl Fn(&UiUpdate) -> bool) -> Option<usize> {
        self.updates().iter().position(predicate)
    }
}

impl UiPort for RecordingUi {
    fn apply(&self, update: UiUpdate) {
        if let Ok(mut updates) = self.updates.lock() {
            updates.push(update);
        }
    }
}
