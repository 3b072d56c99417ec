//! Domain types: the remote bet model, request payloads and step outcomes.
//!
//! Nothing in here performs I/O.

pub mod bet;
pub mod id;
pub mod payload;
pub mod step;

pub use bet::{Bet, BetList, RejectedEntry};
pub use id::{BetId, BetVersion};
pub use payload::{CreateBetRequest, UpdateBetRequest};
pub use step::{Operation, RunReport, StepOutcome, StepResult};
