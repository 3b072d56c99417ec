//! Implementations of ports (hexagonal adapters).
//!
//! - [`inbound::cli`] drives the application from the command line.
//! - [`outbound::http`] talks to the bets service over HTTP.

pub mod inbound;
pub mod outbound;
