//! Externally visible projections of a [`Match`].
//!
//! These are the only serializable representations of match state. None of
//! them has a field that could hold a secret.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::{Match, MatchId, MatchPhase, Move, constants};

/// Returned by start and join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchSummary {
    pub match_id: MatchId,
    pub player_one_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player_two_name: Option<String>,
}

impl From<&Match> for MatchSummary {
    fn from(m: &Match) -> Self {
        Self {
            match_id: m.id(),
            player_one_name: m.player_one_name().to_string(),
            player_two_name: m.player_two_name().map(str::to_string),
        }
    }
}

/// Returned by a move submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveReceipt {
    pub match_id: MatchId,
    pub player_name: String,
    pub accepted: bool,
    pub completed: bool,
}

impl MoveReceipt {
    /// Status line for the completion flag.
    #[must_use]
    pub fn game_status(&self) -> &'static str {
        if self.completed {
            "Game Completed"
        } else {
            "In Progress"
        }
    }
}

/// A move as shown to players: the throw once the match is completed,
/// `"Hidden"` before that.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReveal {
    Hidden,
    Shown(Move),
}

impl fmt::Display for MoveReveal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => f.write_str(constants::HIDDEN_MOVE),
            Self::Shown(mv) => write!(f, "{mv}"),
        }
    }
}

impl Serialize for MoveReveal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Full status view for participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchStatus {
    pub player_one_name: String,
    pub player_two_name: Option<String>,
    pub player_one_move: MoveReveal,
    pub player_two_move: MoveReveal,
    pub result: String,
    pub phase: MatchPhase,
}

impl From<&Match> for MatchStatus {
    fn from(m: &Match) -> Self {
        let reveal = |chosen: Option<Move>| match chosen {
            Some(mv) if m.is_completed() => MoveReveal::Shown(mv),
            _ => MoveReveal::Hidden,
        };
        Self {
            player_one_name: m.player_one_name().to_string(),
            player_two_name: m.player_two_name().map(str::to_string),
            player_one_move: reveal(m.player_one().chosen()),
            player_two_move: reveal(m.player_two().and_then(|s| s.chosen())),
            result: m.result_description(),
            phase: m.phase(),
        }
    }
}

/// Spectator view. Has no move fields at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpectatorView {
    pub player_one_name: String,
    pub player_two_name: Option<String>,
    pub result: String,
}

impl From<&Match> for SpectatorView {
    fn from(m: &Match) -> Self {
        Self {
            player_one_name: m.player_one_name().to_string(),
            player_two_name: m.player_two_name().map(str::to_string),
            result: m.result_description(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Outcome, Seat};

    fn completed() -> Match {
        let mut m = Match::dummy_joined();
        m.record_move(Seat::PlayerOne, Move::Rock).unwrap();
        m.record_move(Seat::PlayerTwo, Move::Scissors).unwrap();
        m.settle(Outcome::Player1Wins).unwrap();
        m
    }

    #[test]
    fn status_hides_moves_in_progress() {
        let mut m = Match::dummy_joined();
        m.record_move(Seat::PlayerOne, Move::Rock).unwrap();
        let status = MatchStatus::from(&m);
        assert_eq!(status.player_one_move, MoveReveal::Hidden);
        assert_eq!(status.player_two_move, MoveReveal::Hidden);
        assert_eq!(status.result, "InProgress");
        assert_eq!(status.phase, MatchPhase::OneMoveIn);
    }

    #[test]
    fn status_reveals_after_completion() {
        let status = MatchStatus::from(&completed());
        assert_eq!(status.player_one_move, MoveReveal::Shown(Move::Rock));
        assert_eq!(status.player_two_move, MoveReveal::Shown(Move::Scissors));
        assert_eq!(status.result, "Alice Wins!");
    }

    #[test]
    fn status_json_shape() {
        let json = serde_json::to_value(MatchStatus::from(&completed())).unwrap();
        assert_eq!(json["playerOneName"], "Alice");
        assert_eq!(json["playerTwoName"], "Bob");
        assert_eq!(json["playerOneMove"], "Rock");
        assert_eq!(json["playerTwoMove"], "Scissors");
        assert_eq!(json["result"], "Alice Wins!");

        let open = serde_json::to_value(MatchStatus::from(&Match::dummy_open())).unwrap();
        assert_eq!(open["playerOneMove"], "Hidden");
        assert!(open["playerTwoName"].is_null());
    }

    #[test]
    fn spectator_json_has_no_moves() {
        let json = serde_json::to_value(SpectatorView::from(&completed())).unwrap();
        let obj = json.as_object().unwrap();
        assert_eq!(obj.len(), 3);
        assert!(!json.to_string().contains("Rock"));
        assert_eq!(json["result"], "Alice Wins!");
    }

    #[test]
    fn summary_omits_missing_player_two() {
        let m = Match::dummy_open();
        let json = serde_json::to_value(MatchSummary::from(&m)).unwrap();
        assert_eq!(json["matchId"], m.id().to_string());
        assert_eq!(json["playerOneName"], "Alice");
        assert!(json.get("playerTwoName").is_none());
    }

    #[test]
    fn receipt_status_line() {
        let receipt = MoveReceipt {
            match_id: MatchId::new(),
            player_name: "Alice".into(),
            accepted: true,
            completed: false,
        };
        assert_eq!(receipt.game_status(), "In Progress");
    }
}
