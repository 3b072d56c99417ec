//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`api`]: [`ScriptedApi`](api::ScriptedApi), a recording in-memory
//!   [`BetsApi`](crate::port::BetsApi).
//! - [`notifier`]: [`RecordingNotifier`](notifier::RecordingNotifier).
//! - [`domain`]: Builders for bets and list bodies.

pub mod api;
pub mod domain;
pub mod notifier;
