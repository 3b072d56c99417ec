//! In-memory [`BetsApi`] that records calls and replays scripted bodies.

use std::collections::{HashMap, VecDeque};
use std::io;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde_json::json;

use crate::domain::{BetId, CreateBetRequest, Operation, UpdateBetRequest};
use crate::error::Error;
use crate::port::{ApiResponse, BetsApi};

/// One recorded call against the scripted service.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCall {
    Create(CreateBetRequest),
    List,
    Get(BetId),
    Update(BetId, UpdateBetRequest),
    Delete(BetId),
}

impl ApiCall {
    /// The operation this call belongs to.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        match self {
            Self::Create(_) => Operation::CreateBet,
            Self::List => Operation::ListBets,
            Self::Get(_) => Operation::GetBet,
            Self::Update(..) => Operation::UpdateBet,
            Self::Delete(_) => Operation::DeleteBet,
        }
    }
}

/// Scripted bets service.
///
/// - list calls pop from a queue of bodies, falling back to a default body
/// - get/update/delete answer with a per-id override or `{"betId": id}`
/// - create answers with a fixed body
/// - any operation can be made to fail at the transport level
pub struct ScriptedApi {
    calls: Mutex<Vec<ApiCall>>,
    list_queue: Mutex<VecDeque<String>>,
    default_list_body: String,
    create_body: String,
    item_bodies: HashMap<BetId, String>,
    update_status: u16,
    broken: Option<Operation>,
}

impl Default for ScriptedApi {
    fn default() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            list_queue: Mutex::new(VecDeque::new()),
            default_list_body: json!({ "bets": [] }).to_string(),
            create_body: json!({ "betId": "created" }).to_string(),
            item_bodies: HashMap::new(),
            update_status: 200,
            broken: None,
        }
    }
}

impl ScriptedApi {
    pub fn new() -> Self {
        Self::default()
    }

    /// Body for every list call not covered by the queue.
    #[must_use]
    pub fn with_list_body(mut self, body: impl Into<String>) -> Self {
        self.default_list_body = body.into();
        self
    }

    /// Queue a body for the next list call.
    #[must_use]
    pub fn then_list_body(self, body: impl Into<String>) -> Self {
        self.list_queue.lock().push_back(body.into());
        self
    }

    #[must_use]
    pub fn with_create_body(mut self, body: impl Into<String>) -> Self {
        self.create_body = body.into();
        self
    }

    /// Body for get/update/delete of one bet.
    #[must_use]
    pub fn with_item_body(mut self, id: &str, body: impl Into<String>) -> Self {
        self.item_bodies.insert(BetId::from(id), body.into());
        self
    }

    #[must_use]
    pub fn with_update_status(mut self, status: u16) -> Self {
        self.update_status = status;
        self
    }

    /// Make every call of `operation` fail before a response arrives.
    #[must_use]
    pub fn with_transport_failure(mut self, operation: Operation) -> Self {
        self.broken = Some(operation);
        self
    }

    /// All calls so far, in order.
    pub fn calls(&self) -> Vec<ApiCall> {
        self.calls.lock().clone()
    }

    /// Number of calls of one operation.
    pub fn count(&self, operation: Operation) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    fn record(&self, call: ApiCall) -> Result<(), Error> {
        let operation = call.operation();
        self.calls.lock().push(call);
        if self.broken == Some(operation) {
            return Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                format!("scripted transport failure on {operation}"),
            )
            .into());
        }
        Ok(())
    }

    fn item_body(&self, id: &BetId) -> String {
        self.item_bodies
            .get(id)
            .cloned()
            .unwrap_or_else(|| json!({ "betId": id }).to_string())
    }
}

#[async_trait]
impl BetsApi for ScriptedApi {
    async fn create(&self, request: &CreateBetRequest) -> Result<ApiResponse, Error> {
        self.record(ApiCall::Create(request.clone()))?;
        Ok(ApiResponse::new(201, self.create_body.clone()))
    }

    async fn list(&self) -> Result<ApiResponse, Error> {
        self.record(ApiCall::List)?;
        let body = self
            .list_queue
            .lock()
            .pop_front()
            .unwrap_or_else(|| self.default_list_body.clone());
        Ok(ApiResponse::ok(body))
    }

    async fn get(&self, bet_id: &BetId) -> Result<ApiResponse, Error> {
        self.record(ApiCall::Get(bet_id.clone()))?;
        Ok(ApiResponse::ok(self.item_body(bet_id)))
    }

    async fn update(
        &self,
        bet_id: &BetId,
        request: &UpdateBetRequest,
    ) -> Result<ApiResponse, Error> {
        self.record(ApiCall::Update(bet_id.clone(), request.clone()))?;
        Ok(ApiResponse::new(self.update_status, self.item_body(bet_id)))
    }

    async fn delete(&self, bet_id: &BetId) -> Result<ApiResponse, Error> {
        self.record(ApiCall::Delete(bet_id.clone()))?;
        Ok(ApiResponse::ok(self.item_body(bet_id)))
    }

    fn endpoint(&self) -> &str {
        "scripted://bets"
    }
}
