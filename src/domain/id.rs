//! Identifier and version types for remote bets.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Bet identifier assigned by the remote service.
///
/// The inner String is private to ensure all construction goes through
/// the defined constructors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BetId(String);

impl BetId {
    /// Create a new `BetId` from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the bet ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for BetId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for BetId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Optimistic-concurrency token returned by the service.
///
/// Opaque on this side: whatever JSON value the service hands out is echoed
/// back unchanged on update. A bet without a version carries `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BetVersion(Value);

impl BetVersion {
    /// Wrap a raw JSON value.
    #[must_use]
    pub const fn new(value: Value) -> Self {
        Self(value)
    }

    /// True when the service supplied no version.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

impl fmt::Display for BetVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for BetVersion {
    fn from(s: &str) -> Self {
        Self(Value::String(s.to_owned()))
    }
}

impl From<i64> for BetVersion {
    fn from(n: i64) -> Self {
        Self(Value::from(n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn bet_id_serializes_as_plain_string() {
        let id = BetId::new("x1");
        assert_eq!(serde_json::to_value(&id).unwrap(), json!("x1"));
        assert_eq!(id.to_string(), "x1");
    }

    #[test]
    fn version_keeps_whatever_the_service_sent() {
        let numeric: BetVersion = serde_json::from_value(json!(3)).unwrap();
        assert_eq!(numeric, BetVersion::from(3));

        let text: BetVersion = serde_json::from_value(json!("v1")).unwrap();
        assert_eq!(serde_json::to_value(&text).unwrap(), json!("v1"));

        assert!(BetVersion::default().is_null());
    }
}
