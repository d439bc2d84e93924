//! Outcome resolution.
//!
//! The full 3×3 table is spelled out so the compiler checks it for
//! exhaustiveness.

use rps_types::{Move, Outcome};

/// Resolve a completed pair of moves.
#[must_use]
pub fn resolve(player_one: Move, player_two: Move) -> Outcome {
    use Move::{Paper, Rock, Scissors};

    match (player_one, player_two) {
        (Rock, Rock) | (Paper, Paper) | (Scissors, Scissors) => Outcome::Tie,
        (Rock, Scissors) | (Scissors, Paper) | (Paper, Rock) => Outcome::Player1Wins,
        (Rock, Paper) | (Paper, Scissors) | (Scissors, Rock) => Outcome::Player2Wins,
    }
}
