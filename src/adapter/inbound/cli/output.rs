//! Terminal output for smoke runs.
//!
//! Text mode keeps the layout of a classic API smoke script: a `TEST:` banner
//! per operation, the raw body, then the parsed value or a failure line.
//! JSON mode emits one `{"type": ..., "payload": ...}` object per line.

use owo_colors::OwoColorize;
use parking_lot::{const_rwlock, RwLock};
use serde_json::{json, Value};

use crate::domain::{Operation, RejectedEntry, RunReport, StepOutcome, StepResult};

/// How the transcript is written, set once from the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// One JSON object per line instead of text.
    pub json: bool,
    /// Text mode only: print failures and the summary, nothing else.
    pub quiet: bool,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool) -> Self {
        Self { json, quiet }
    }

    /// Whether a text line that is neither a failure nor the summary is shown.
    const fn shows_progress(self) -> bool {
        self.json || !self.quiet
    }
}

static OUTPUT: RwLock<OutputConfig> = const_rwlock(OutputConfig::new(false, false));

fn current() -> OutputConfig {
    *OUTPUT.read()
}

fn emit(kind: &str, payload: Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Apply output settings from the command line.
pub fn configure(config: OutputConfig) {
    *OUTPUT.write() = config;
}

/// Print the application header with name, version and target.
pub fn header(version: &str, endpoint: &str) {
    let config = current();
    if config.json {
        emit(
            "header",
            json!({
                "app": "betsmoke",
                "version": version,
                "endpoint": endpoint,
            }),
        );
        return;
    }
    if !config.shows_progress() {
        return;
    }

    println!("{} {}", "betsmoke".bold(), version.dimmed());
    println!("  {:<12} {}", "endpoint".dimmed(), endpoint);
}

/// Print the banner for an operation about to run.
pub fn section(operation: Operation) {
    let config = current();
    if config.json {
        emit(
            "section",
            json!({
                "operation": operation,
                "title": operation.title(),
            }),
        );
        return;
    }
    if !config.shows_progress() {
        return;
    }

    println!("\n\n{}", format!("TEST: {}", operation.title()).bold());
}

/// Print one completed request.
pub fn step(outcome: &StepOutcome) {
    let config = current();
    if config.json {
        emit("step", json!(outcome));
        return;
    }
    if !config.shows_progress() {
        if let Some(detail) = outcome.failure_detail() {
            failure_lines(outcome.operation, detail);
        }
        return;
    }

    print!("{}", render_step(outcome));
}

/// Text rendering of one completed request, without styling.
#[must_use]
pub fn render_step(outcome: &StepOutcome) -> String {
    let mut text = String::new();
    if outcome.operation == Operation::UpdateBet {
        text.push_str(&format!("{} {}\n", outcome.raw_body, outcome.status));
    } else {
        text.push_str(&outcome.raw_body);
        text.push('\n');
    }
    text.push_str("\nAttempting to parse JSON...\n");
    match &outcome.result {
        StepResult::Parsed { value } => {
            let pretty = serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string());
            text.push_str(&pretty);
            text.push_str("\n\n");
        }
        StepResult::ParseFailed { detail } => {
            text.push_str(&format!("{} failed.\n{detail}\n", outcome.operation.label()));
        }
    }
    text
}

fn failure_lines(operation: Operation, detail: &str) {
    println!("{} {}", format!("{} failed.", operation.label()).red(), detail);
}

/// Print a notice (e.g. nothing to do for an operation).
pub fn notice(operation: Operation, message: &str) {
    let config = current();
    if config.json {
        emit(
            "notice",
            json!({
                "operation": operation,
                "message": message,
            }),
        );
        return;
    }
    if !config.shows_progress() {
        return;
    }

    println!("{}", message.yellow());
}

/// Print a listing entry that was left out of the snapshot.
pub fn rejected(entry: &RejectedEntry) {
    let config = current();
    if config.json {
        emit("rejected", json!(entry));
        return;
    }

    println!("{}", render_rejected(entry).yellow());
}

/// Text line for a rejected listing entry.
#[must_use]
pub fn render_rejected(entry: &RejectedEntry) -> String {
    format!("Skipping listed entry #{}: {}", entry.index, entry.reason)
}

/// Print the closing summary. Informational only.
pub fn summary(report: &RunReport) {
    let config = current();
    let remaining = report
        .remaining_bets()
        .map_or_else(|| "unknown".to_string(), |n| n.to_string());

    if config.json {
        emit(
            "summary",
            json!({
                "creation_count": report.creation_count,
                "requests": report.requests(),
                "parse_failures": report.parse_failures(),
                "remaining_bets": report.remaining_bets(),
                "elapsed_ms": report.elapsed_ms(),
            }),
        );
        return;
    }

    println!();
    println!("{}", "SUMMARY".bold());
    field("requests", report.requests());
    let failures = report.parse_failures();
    if failures == 0 {
        field("parse errors", failures);
    } else {
        field("parse errors", failures.red());
    }
    field("bets left", remaining);
    field("elapsed", format!("{} ms", report.elapsed_ms()));
}

fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {:<12} {}", label.dimmed(), value);
}

/// Print an error line.
pub fn error(message: &str) {
    let config = current();

    if config.json {
        eprintln!(
            "{}",
            json!({
                "type": "error",
                "payload": { "message": message },
            })
        );
        return;
    }

    eprintln!("  {} {}", "×".red(), message);
}
