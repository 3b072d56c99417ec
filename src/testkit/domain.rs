//! Builders for domain primitives used across tests.
//!
//! Provides concise factory functions for bets and list bodies so tests
//! focus on assertions rather than construction boilerplate.

use serde_json::json;

use crate::domain::{Bet, BetId, BetList, BetVersion};

/// A bet with small amounts and the given string version.
pub fn bet(id: &str, version: &str) -> Bet {
    Bet {
        bet_id: BetId::from(id),
        customer_id: Some(1),
        pre_tax_amount: Some(1),
        post_tax_amount: Some(1),
        owner: None,
        version: BetVersion::from(version),
    }
}

/// Generate `n` bets named `b0`, `b1`, ..., each at version `v0`.
pub fn make_bets(n: usize) -> Vec<Bet> {
    (0..n).map(|i| bet(&format!("b{i}"), "v0")).collect()
}

/// A snapshot holding the given bets.
pub fn bet_list(bets: Vec<Bet>) -> BetList {
    BetList::new(bets)
}

/// The JSON text the service would send for `bets`.
pub fn list_body(bets: &[Bet]) -> String {
    json!({ "bets": bets }).to_string()
}

/// The JSON text of an empty listing.
pub fn empty_list_body() -> String {
    list_body(&[])
}
