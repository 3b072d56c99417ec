//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! ```text
//!            ┌──────────────────────┐
//!            │     SmokeRunner      │
//!            └──────────┬───────────┘
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!    ┌───────────┐            ┌────────────┐
//!    │  BetsApi  │            │  Notifier  │
//!    │ (reqwest) │            │ (console)  │
//!    └───────────┘            └────────────┘
//! ```

pub mod outbound;

pub use outbound::bets::{ApiResponse, BetsApi};
pub use outbound::notifier::{Event, LogNotifier, Notifier, NotifierRegistry, NullNotifier};
