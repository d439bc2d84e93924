//! Match identifiers.
//!
//! Ids are UUIDv7 so they sort by creation time and are never reissued.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::RpsError;

/// Globally unique match identifier. Assigned at creation, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MatchId(pub Uuid);

impl MatchId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parse an id handed in by a caller.
    ///
    /// A string that is not a UUID cannot name a stored match, so it is
    /// reported as not found rather than as invalid input.
    pub fn parse(raw: &str) -> crate::Result<Self> {
        Uuid::parse_str(raw.trim())
            .map(Self)
            .map_err(|_| RpsError::UnknownMatchRef {
                raw: raw.to_string(),
            })
    }
}

impl Default for MatchId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MatchId {
    type Err = RpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_id_uniqueness() {
        let a = MatchId::new();
        let b = MatchId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn match_id_ordering() {
        let a = MatchId::new();
        let b = MatchId::new();
        assert!(a < b);
    }

    #[test]
    fn parse_display_agree() {
        let id = MatchId::new();
        let back: MatchId = id.to_string().parse().unwrap();
        assert_eq!(id, back);
    }

    #[test]
    fn garbage_id_is_not_found() {
        let err = MatchId::parse("not-a-match").unwrap_err();
        assert!(matches!(err, RpsError::UnknownMatchRef { ref raw } if raw == "not-a-match"));
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = MatchId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{id}\""));
    }
}
