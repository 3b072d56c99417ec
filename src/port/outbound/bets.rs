//! Bets service port.
//!
//! The runner talks to the service only through [`BetsApi`], which hands back
//! raw response text. Parsing is the runner's business, so a body that is not
//! JSON is still a successful call at this level.

use async_trait::async_trait;

use crate::domain::{BetId, CreateBetRequest, UpdateBetRequest};
use crate::error::Error;

/// Raw response from the bets service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code. Recorded, never interpreted.
    pub status: u16,
    /// Response body as text.
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// A 200 response with the given body.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, body)
    }
}

/// CRUD surface of the bets service.
///
/// An `Err` means the request never produced a response (connection refused,
/// DNS failure, timeout, unreadable body). Callers treat it as fatal.
#[async_trait]
pub trait BetsApi: Send + Sync {
    /// `POST /bets`
    async fn create(&self, request: &CreateBetRequest) -> Result<ApiResponse, Error>;

    /// `GET /bets`
    async fn list(&self) -> Result<ApiResponse, Error>;

    /// `GET /bets/{betId}`
    async fn get(&self, bet_id: &BetId) -> Result<ApiResponse, Error>;

    /// `POST /bets/{betId}`
    async fn update(&self, bet_id: &BetId, request: &UpdateBetRequest)
        -> Result<ApiResponse, Error>;

    /// `DELETE /bets/{betId}`
    async fn delete(&self, bet_id: &BetId) -> Result<ApiResponse, Error>;

    /// Where requests go, for display.
    fn endpoint(&self) -> &str;
}
