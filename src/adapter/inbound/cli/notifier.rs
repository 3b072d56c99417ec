//! Console notifier: renders runner events through [`output`](super::output).

use super::output;
use crate::port::{Event, Notifier};

/// Message shown when get-by-id has no snapshot to work from.
pub const NOTHING_TO_DO: &str = "Nothing! No bet list to work from.";

/// Prints run progress to stdout as it happens.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, event: Event) {
        match event {
            Event::OperationStarted(operation) => output::section(operation),
            Event::StepCompleted(outcome) => output::step(&outcome),
            Event::EntryRejected(entry) => output::rejected(&entry),
            Event::NothingToDo(operation) => output::notice(operation, NOTHING_TO_DO),
            Event::RunFinished(report) => output::summary(&report),
        }
    }
}
