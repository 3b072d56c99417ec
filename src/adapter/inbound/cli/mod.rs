//! CLI module graph.

pub mod command;
pub mod notifier;
pub mod output;
pub mod run;
