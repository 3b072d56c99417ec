//! The smoke-test sequence against the bets service.
//!
//! Each operation is callable on its own. [`SmokeRunner::run`] chains them in
//! the fixed order:
//!
//! ```text
//! create × N → list → get(each) → update(each) → delete(each) → list
//! ```
//!
//! The bet list snapshot is returned by [`SmokeRunner::list_bets`] and handed
//! to the dependent operations explicitly. A body that fails to parse is
//! recorded on its [`StepOutcome`] and the run moves on; a transport error
//! ends the run.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::domain::{
    BetId, BetList, CreateBetRequest, Operation, RejectedEntry, RunReport, StepOutcome,
    StepResult, UpdateBetRequest,
};
use crate::error::Result;
use crate::port::{ApiResponse, BetsApi, Event, Notifier};

/// Result of one list call: the step itself and the snapshot it produced.
#[derive(Debug, Clone)]
pub struct Listing {
    pub outcome: StepOutcome,
    /// `None` when the body was not a bet list.
    pub snapshot: Option<BetList>,
    /// Entries left out of `snapshot`.
    pub rejected: Vec<RejectedEntry>,
}

/// Drives the bets service through one smoke-test run.
pub struct SmokeRunner<'a> {
    api: &'a dyn BetsApi,
    notifier: &'a dyn Notifier,
    rng: StdRng,
}

impl<'a> SmokeRunner<'a> {
    #[must_use]
    pub const fn new(api: &'a dyn BetsApi, notifier: &'a dyn Notifier, rng: StdRng) -> Self {
        Self { api, notifier, rng }
    }

    /// Seeded for reproducible payloads, or from entropy when `seed` is `None`.
    #[must_use]
    pub fn with_seed(api: &'a dyn BetsApi, notifier: &'a dyn Notifier, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_entropy, StdRng::seed_from_u64);
        Self::new(api, notifier, rng)
    }

    /// Run the full sequence with `creation_count` creates up front.
    pub async fn run(&mut self, creation_count: u32) -> Result<RunReport> {
        let started_at = Utc::now();
        info!(
            creation_count,
            endpoint = self.api.endpoint(),
            "Starting smoke run"
        );

        let mut steps = Vec::new();
        for _ in 0..creation_count {
            steps.push(self.create_bet().await?);
        }

        let listing = self.list_bets().await?;
        steps.push(listing.outcome);
        let snapshot = listing.snapshot;

        steps.extend(self.get_bets(snapshot.as_ref()).await?);
        steps.extend(self.update_bets(snapshot.as_ref()).await?);
        steps.extend(self.delete_bets(snapshot.as_ref()).await?);

        let closing = self.list_bets().await?;
        steps.push(closing.outcome);

        let report = RunReport {
            creation_count,
            steps,
            final_snapshot: closing.snapshot,
            started_at,
            finished_at: Utc::now(),
        };
        self.notifier.notify(Event::RunFinished(report.clone()));
        Ok(report)
    }

    /// Create one bet with random amounts.
    pub async fn create_bet(&mut self) -> Result<StepOutcome> {
        self.started(Operation::CreateBet);
        let request = CreateBetRequest::random(&mut self.rng);
        debug!(?request, "Creating bet");
        let response = self.api.create(&request).await?;
        Ok(self.record(Operation::CreateBet, None, response))
    }

    /// Fetch all bets. The returned snapshot feeds get/update/delete.
    pub async fn list_bets(&mut self) -> Result<Listing> {
        self.started(Operation::ListBets);
        let response = self.api.list().await?;

        let (result, snapshot, rejected) = match parse_body(&response.body) {
            StepResult::Parsed { value } => match BetList::from_listing(value.clone()) {
                Ok((list, rejected)) => {
                    if list.has_more() {
                        debug!(
                            count = list.len(),
                            "Listing is paged, only the first page is used"
                        );
                    }
                    (StepResult::Parsed { value }, Some(list), rejected)
                }
                Err(err) => (
                    StepResult::ParseFailed {
                        detail: format!("response is not a bet list: {err}"),
                    },
                    None,
                    Vec::new(),
                ),
            },
            failed @ StepResult::ParseFailed { .. } => (failed, None, Vec::new()),
        };

        let outcome = self.finish(Operation::ListBets, None, response, result);
        for entry in &rejected {
            debug!(index = entry.index, "Skipping listed entry");
            self.notifier.notify(Event::EntryRejected(entry.clone()));
        }
        Ok(Listing {
            outcome,
            snapshot,
            rejected,
        })
    }

    /// Fetch every bet in `snapshot` by id.
    ///
    /// Without a snapshot this says so and issues nothing.
    pub async fn get_bets(&mut self, snapshot: Option<&BetList>) -> Result<Vec<StepOutcome>> {
        self.started(Operation::GetBet);
        let Some(snapshot) = snapshot else {
            self.notifier.notify(Event::NothingToDo(Operation::GetBet));
            return Ok(Vec::new());
        };

        let mut outcomes = Vec::with_capacity(snapshot.len());
        for bet in snapshot.iter() {
            let response = self.api.get(&bet.bet_id).await?;
            outcomes.push(self.record(Operation::GetBet, Some(bet.bet_id.clone()), response));
        }
        Ok(outcomes)
    }

    /// Update every bet in `snapshot` with fresh amounts and its snapshot
    /// version. Silent no-op without a snapshot.
    pub async fn update_bets(&mut self, snapshot: Option<&BetList>) -> Result<Vec<StepOutcome>> {
        self.started(Operation::UpdateBet);
        let Some(snapshot) = snapshot else {
            return Ok(Vec::new());
        };

        let mut outcomes = Vec::with_capacity(snapshot.len());
        for bet in snapshot.iter() {
            let request = UpdateBetRequest::random_for(bet, &mut self.rng);
            debug!(bet_id = %bet.bet_id, version = %request.version, "Updating bet");
            let response = self.api.update(&bet.bet_id, &request).await?;
            outcomes.push(self.record(Operation::UpdateBet, Some(bet.bet_id.clone()), response));
        }
        Ok(outcomes)
    }

    /// Delete every bet in `snapshot`. Silent no-op without a snapshot.
    pub async fn delete_bets(&mut self, snapshot: Option<&BetList>) -> Result<Vec<StepOutcome>> {
        self.started(Operation::DeleteBet);
        let Some(snapshot) = snapshot else {
            return Ok(Vec::new());
        };

        let mut outcomes = Vec::with_capacity(snapshot.len());
        for bet in snapshot.iter() {
            let response = self.api.delete(&bet.bet_id).await?;
            outcomes.push(self.record(Operation::DeleteBet, Some(bet.bet_id.clone()), response));
        }
        Ok(outcomes)
    }

    fn started(&self, operation: Operation) {
        debug!(operation = %operation, "Operation started");
        self.notifier.notify(Event::OperationStarted(operation));
    }

    /// Parse `response` as JSON and report the outcome under `operation`.
    fn record(
        &self,
        operation: Operation,
        bet_id: Option<BetId>,
        response: ApiResponse,
    ) -> StepOutcome {
        let result = parse_body(&response.body);
        self.finish(operation, bet_id, response, result)
    }

    fn finish(
        &self,
        operation: Operation,
        bet_id: Option<BetId>,
        response: ApiResponse,
        result: StepResult,
    ) -> StepOutcome {
        if let StepResult::ParseFailed { detail } = &result {
            warn!(operation = %operation, status = response.status, error = %detail, "{operation} failed");
        }
        let outcome = StepOutcome {
            operation,
            bet_id,
            status: response.status,
            raw_body: response.body,
            result,
        };
        self.notifier.notify(Event::StepCompleted(outcome.clone()));
        outcome
    }
}

fn parse_body(body: &str) -> StepResult {
    match serde_json::from_str::<Value>(body) {
        Ok(value) => StepResult::Parsed { value },
        Err(err) => StepResult::ParseFailed {
            detail: err.to_string(),
        },
    }
}
