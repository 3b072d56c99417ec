//! Notifier port for run progress.
//!
//! The runner reports what it does as [`Event`]s; how they are shown (console
//! text, JSON lines, logs, an in-memory recorder in tests) is up to the
//! [`Notifier`] implementation.

use crate::domain::{Operation, RejectedEntry, RunReport, StepOutcome};

/// Events emitted while a run progresses.
#[derive(Debug, Clone)]
pub enum Event {
    /// An operation is starting. Emitted once per operation call, before any
    /// snapshot check.
    OperationStarted(Operation),
    /// A request completed and its body was (or was not) parsed.
    StepCompleted(StepOutcome),
    /// A listing entry was not a usable bet and was left out of the snapshot.
    EntryRejected(RejectedEntry),
    /// A snapshot-dependent operation had no snapshot to work from.
    NothingToDo(Operation),
    /// The full sequence finished.
    RunFinished(RunReport),
}

/// Trait for progress handlers.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - `notify` is called inline between requests and should return quickly
pub trait Notifier: Send + Sync {
    /// Handle an event.
    fn notify(&self, event: Event);
}

/// Registry of notifiers (composite pattern).
///
/// Broadcasts events to all registered notifiers.
pub struct NotifierRegistry {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl NotifierRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { notifiers: vec![] }
    }

    /// Register a notifier.
    pub fn register(&mut self, notifier: Box<dyn Notifier>) {
        self.notifiers.push(notifier);
    }

    /// Number of registered notifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    /// Check if registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }
}

impl Default for NotifierRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier for NotifierRegistry {
    fn notify(&self, event: Event) {
        for notifier in &self.notifiers {
            notifier.notify(event.clone());
        }
    }
}

/// A no-op notifier for when only the returned report matters.
pub struct NullNotifier;

impl Notifier for NullNotifier {
    fn notify(&self, _event: Event) {}
}

/// A notifier that logs events via tracing.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, event: Event) {
        use tracing::{debug, info, warn};
        match event {
            Event::OperationStarted(operation) => {
                debug!(operation = %operation, "Operation started");
            }
            Event::StepCompleted(step) => match step.failure_detail() {
                None => debug!(
                    operation = %step.operation,
                    bet_id = step.bet_id.as_ref().map(|id| id.as_str()),
                    status = step.status,
                    "Response parsed"
                ),
                Some(detail) => warn!(
                    operation = %step.operation,
                    bet_id = step.bet_id.as_ref().map(|id| id.as_str()),
                    status = step.status,
                    error = %detail,
                    "Response did not parse"
                ),
            },
            Event::EntryRejected(entry) => {
                warn!(index = entry.index, reason = %entry.reason, "Listed entry is not a bet");
            }
            Event::NothingToDo(operation) => {
                info!(operation = %operation, "No bet list snapshot, skipping");
            }
            Event::RunFinished(report) => {
                info!(
                    requests = report.requests(),
                    parse_failures = report.parse_failures(),
                    remaining_bets = report.remaining_bets(),
                    elapsed_ms = report.elapsed_ms(),
                    "Run finished"
                );
            }
        }
    }
}
