//! HTTP adapter for the bets service.

pub mod client;
pub mod settings;

pub use client::HttpBetsClient;
pub use settings::{HttpConfig, TargetConfig};
