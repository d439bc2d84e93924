//! Closed game domains: moves, seats, outcomes and match phases.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{RpsError, constants};

/// One of the three throws.
///
/// Wire codes are `1 = Rock`, `2 = Paper`, `3 = Scissors`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Self; 3] = [Self::Rock, Self::Paper, Self::Scissors];

    /// Decode a wire move code.
    pub fn from_code(code: i64) -> crate::Result<Self> {
        match code {
            1 => Ok(Self::Rock),
            2 => Ok(Self::Paper),
            3 => Ok(Self::Scissors),
            _ => Err(RpsError::InvalidMove { code }),
        }
    }

    #[must_use]
    pub fn code(self) -> i64 {
        match self {
            Self::Rock => 1,
            Self::Paper => 2,
            Self::Scissors => 3,
        }
    }

    /// The dominance relation: Rock > Scissors > Paper > Rock.
    #[must_use]
    pub fn beats(self, other: Self) -> bool {
        matches!(
            (self, other),
            (Self::Rock, Self::Scissors) | (Self::Scissors, Self::Paper) | (Self::Paper, Self::Rock)
        )
    }
}

impl TryFrom<i64> for Move {
    type Error = RpsError;

    fn try_from(code: i64) -> Result<Self, Self::Error> {
        Self::from_code(code)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rock => write!(f, "Rock"),
            Self::Paper => write!(f, "Paper"),
            Self::Scissors => write!(f, "Scissors"),
        }
    }
}

/// One of the two player slots in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Seat {
    PlayerOne,
    PlayerTwo,
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerOne => write!(f, "Player One"),
            Self::PlayerTwo => write!(f, "Player Two"),
        }
    }
}

/// Result classification of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Player1Wins,
    Player2Wins,
    Tie,
}

impl Outcome {
    #[must_use]
    pub fn is_final(self) -> bool {
        self != Self::InProgress
    }

    /// Human-readable result text, e.g. `"Alice Wins!"`.
    #[must_use]
    pub fn describe(self, player_one: &str, player_two: Option<&str>) -> String {
        match self {
            Self::InProgress => constants::IN_PROGRESS_TEXT.to_string(),
            Self::Player1Wins => format!("{player_one} Wins!"),
            Self::Player2Wins => format!("{} Wins!", player_two.unwrap_or_default()),
            Self::Tie => constants::TIE_TEXT.to_string(),
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InProgress => write!(f, "IN_PROGRESS"),
            Self::Player1Wins => write!(f, "PLAYER1_WINS"),
            Self::Player2Wins => write!(f, "PLAYER2_WINS"),
            Self::Tie => write!(f, "TIE"),
        }
    }
}

/// Lifecycle position of a match. `Completed` is terminal.
///
/// ```text
/// Created ──join──▶ Joined ──move──▶ OneMoveIn ──move──▶ Completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchPhase {
    /// Only Player One is seated.
    Created,
    /// Both players seated, no moves yet.
    Joined,
    /// Exactly one move recorded.
    OneMoveIn,
    /// Outcome fixed.
    Completed,
}

impl fmt::Display for MatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Created => write!(f, "CREATED"),
            Self::Joined => write!(f, "JOINED"),
            Self::OneMoveIn => write!(f, "ONE_MOVE_IN"),
            Self::Completed => write!(f, "COMPLETED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_codes() {
        assert_eq!(Move::from_code(1).unwrap(), Move::Rock);
        assert_eq!(Move::from_code(2).unwrap(), Move::Paper);
        assert_eq!(Move::from_code(3).unwrap(), Move::Scissors);
        for mv in Move::ALL {
            assert_eq!(Move::try_from(mv.code()).unwrap(), mv);
        }
    }

    #[test]
    fn out_of_domain_codes_rejected() {
        for code in [0, 4, -1, i64::MAX, i64::MIN] {
            let err = Move::from_code(code).unwrap_err();
            assert!(matches!(err, RpsError::InvalidMove { code: c } if c == code));
        }
    }

    #[test]
    fn dominance_is_cyclic() {
        assert!(Move::Rock.beats(Move::Scissors));
        assert!(Move::Scissors.beats(Move::Paper));
        assert!(Move::Paper.beats(Move::Rock));
        for mv in Move::ALL {
            assert!(!mv.beats(mv));
        }
    }

    #[test]
    fn exactly_one_side_wins_unequal_pairs() {
        for a in Move::ALL {
            for b in Move::ALL {
                if a != b {
                    assert!(a.beats(b) ^ b.beats(a), "{a} vs {b}");
                }
            }
        }
    }

    #[test]
    fn outcome_text() {
        assert_eq!(Outcome::InProgress.describe("Alice", None), "InProgress");
        assert_eq!(
            Outcome::Player1Wins.describe("Alice", Some("Bob")),
            "Alice Wins!"
        );
        assert_eq!(
            Outcome::Player2Wins.describe("Alice", Some("Bob")),
            "Bob Wins!"
        );
        assert_eq!(Outcome::Tie.describe("Alice", Some("Bob")), "It's a Tie!");
    }

    #[test]
    fn only_in_progress_is_open() {
        assert!(!Outcome::InProgress.is_final());
        assert!(Outcome::Player1Wins.is_final());
        assert!(Outcome::Player2Wins.is_final());
        assert!(Outcome::Tie.is_final());
    }

    #[test]
    fn move_display() {
        assert_eq!(Move::Rock.to_string(), "Rock");
        assert_eq!(Move::Scissors.to_string(), "Scissors");
    }
}
