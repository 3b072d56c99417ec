//! Betsmoke - smoke tests for a bets CRUD HTTP API.
//!
//! A run creates a number of bets with random amounts, lists them, then
//! fetches, updates and deletes every listed bet before listing once more.
//! Every response is reported raw and parsed; nothing is asserted.
//!
//! # Modules
//!
//! - [`domain`] - Bet model, request payloads, step outcomes
//! - [`port`] - `BetsApi` and `Notifier` traits
//! - [`application`] - `SmokeRunner`, the run sequence
//! - [`adapter`] - HTTP client (reqwest) and CLI
//! - [`infrastructure`] - Configuration and logging
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use betsmoke::adapter::outbound::http::HttpBetsClient;
//! use betsmoke::application::SmokeRunner;
//! use betsmoke::port::LogNotifier;
//!
//! # async fn demo() -> betsmoke::error::Result<()> {
//! let client = HttpBetsClient::new("http://localhost:3000/bets")?;
//! let report = SmokeRunner::with_seed(&client, &LogNotifier, Some(1)).run(2).await?;
//! println!("{} requests", report.requests());
//! # Ok(())
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
