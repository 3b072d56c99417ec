//! Application layer: orchestrates the smoke-test sequence over the ports.

pub mod runner;

pub use runner::{Listing, SmokeRunner};
