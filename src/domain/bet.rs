//! Remote bet resource and the list envelope the service returns.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::id::{BetId, BetVersion};

/// A bet as reported by the service.
///
/// Only `betId` is required. The numeric fields are read leniently so that a
/// service emitting string-encoded or decimal amounts still yields a usable
/// snapshot; unreadable values become `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    pub bet_id: BetId,
    #[serde(default, deserialize_with = "lenient_int")]
    pub customer_id: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub pre_tax_amount: Option<i64>,
    #[serde(default, deserialize_with = "lenient_int")]
    pub post_tax_amount: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(default)]
    pub version: BetVersion,
}

impl Bet {
    /// Create a bet with only an identifier and version.
    pub fn new(bet_id: impl Into<BetId>, version: BetVersion) -> Self {
        Self {
            bet_id: bet_id.into(),
            customer_id: None,
            pre_tax_amount: None,
            post_tax_amount: None,
            owner: None,
            version,
        }
    }
}

/// Envelope returned by `GET /bets`.
///
/// The service pages its listing; `lastEvaluatedKey` is kept as opaque
/// metadata and never followed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BetList {
    pub bets: Vec<Bet>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_evaluated_key: Option<Value>,
}

/// A listing entry that could not be read as a bet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEntry {
    /// Position in the `bets` array.
    pub index: usize,
    pub reason: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct Envelope {
    bets: Vec<Value>,
    #[serde(default)]
    last_evaluated_key: Option<Value>,
}

impl BetList {
    #[must_use]
    pub const fn new(bets: Vec<Bet>) -> Self {
        Self {
            bets,
            last_evaluated_key: None,
        }
    }

    /// Read a listing entry by entry.
    ///
    /// Fails only when `value` has no `bets` array. Entries without a usable
    /// `betId` are returned as rejected and left out of the list.
    pub fn from_listing(value: Value) -> Result<(Self, Vec<RejectedEntry>), serde_json::Error> {
        let envelope: Envelope = serde_json::from_value(value)?;

        let mut bets = Vec::with_capacity(envelope.bets.len());
        let mut rejected = Vec::new();
        for (index, entry) in envelope.bets.into_iter().enumerate() {
            match serde_json::from_value::<Bet>(entry) {
                Ok(bet) if bet.bet_id.as_str().trim().is_empty() => rejected.push(RejectedEntry {
                    index,
                    reason: "betId is empty".to_string(),
                }),
                Ok(bet) => bets.push(bet),
                Err(err) => rejected.push(RejectedEntry {
                    index,
                    reason: err.to_string(),
                }),
            }
        }

        let list = Self {
            bets,
            last_evaluated_key: envelope.last_evaluated_key,
        };
        Ok((list, rejected))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.bets.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bets.is_empty()
    }

    /// True when the service indicated more pages are available.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.last_evaluated_key
            .as_ref()
            .is_some_and(|key| !key.is_null())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bet> {
        self.bets.iter()
    }
}

fn lenient_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < 9.0e15)
                .map(|f| f as i64)
        }),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }))
}
