//! Thread-safe event collector for notification assertions in tests.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::domain::{Operation, RejectedEntry};
use crate::port::{Event, Notifier};

#[derive(Clone, Default)]
pub struct RecordingNotifier {
    events: Arc<Mutex<Vec<Event>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().clone()
    }

    /// Operations announced via [`Event::OperationStarted`], in order.
    pub fn started(&self) -> Vec<Operation> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::OperationStarted(operation) => Some(*operation),
                _ => None,
            })
            .collect()
    }

    /// Listing entries reported as left out of the snapshot.
    pub fn rejected(&self) -> Vec<RejectedEntry> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::EntryRejected(entry) => Some(entry.clone()),
                _ => None,
            })
            .collect()
    }

    /// Operations that reported having nothing to do.
    pub fn skipped(&self) -> Vec<Operation> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                Event::NothingToDo(operation) => Some(*operation),
                _ => None,
            })
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, event: Event) {
        self.events.lock().push(event);
    }
}
