//! Structured results of individual requests and of a whole run.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::bet::BetList;
use super::id::BetId;

/// The five operations a run is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    CreateBet,
    ListBets,
    GetBet,
    UpdateBet,
    DeleteBet,
}

impl Operation {
    /// Stable label used when reporting failures.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::CreateBet => "create_bet",
            Self::ListBets => "list_bets",
            Self::GetBet => "get_bet",
            Self::UpdateBet => "update_bet",
            Self::DeleteBet => "delete_bet",
        }
    }

    /// Banner title shown when the operation starts.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CreateBet => "CREATING BET",
            Self::ListBets => "GETTING ALL BETS",
            Self::GetBet => "GETTING SPECIFIC BETS",
            Self::UpdateBet => "UPDATING SPECIFIC BETS",
            Self::DeleteBet => "DELETING SPECIFIC BETS",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse result for one response body.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepResult {
    Parsed { value: Value },
    ParseFailed { detail: String },
}

/// One request, its raw response, and what came of parsing it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepOutcome {
    pub operation: Operation,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bet_id: Option<BetId>,
    pub status: u16,
    pub raw_body: String,
    pub result: StepResult,
}

impl StepOutcome {
    #[must_use]
    pub const fn is_parsed(&self) -> bool {
        matches!(self.result, StepResult::Parsed { .. })
    }

    #[must_use]
    pub fn failure_detail(&self) -> Option<&str> {
        match &self.result {
            StepResult::Parsed { .. } => None,
            StepResult::ParseFailed { detail } => Some(detail),
        }
    }
}

/// Everything a run produced, in request order.
///
/// Purely observational: nothing here decides whether the run "passed".
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub creation_count: u32,
    pub steps: Vec<StepOutcome>,
    pub final_snapshot: Option<BetList>,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl RunReport {
    /// Number of requests issued.
    #[must_use]
    pub fn requests(&self) -> usize {
        self.steps.len()
    }

    /// Number of response bodies that failed to parse.
    #[must_use]
    pub fn parse_failures(&self) -> usize {
        self.steps.iter().filter(|step| !step.is_parsed()).count()
    }

    /// Number of requests issued for one operation.
    #[must_use]
    pub fn count(&self, operation: Operation) -> usize {
        self.steps
            .iter()
            .filter(|step| step.operation == operation)
            .count()
    }

    /// Bets seen by the closing list call, if it parsed.
    #[must_use]
    pub fn remaining_bets(&self) -> Option<usize> {
        self.final_snapshot.as_ref().map(BetList::len)
    }

    #[must_use]
    pub fn elapsed_ms(&self) -> i64 {
        (self.finished_at - self.started_at).num_milliseconds()
    }
}
