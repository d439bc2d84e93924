//! The `Match` entity: one two-player game keyed by [`MatchId`].
//!
//! Fields are private so the lifecycle invariants hold for every caller:
//! Player Two is seated at most once, each seat records at most one move,
//! and the outcome is fixed exactly once after both moves are in.
//!
//! `Match` deliberately does not implement `Serialize`. External
//! representations go through the view types in [`crate::view`].

use chrono::{DateTime, Utc};

use crate::{Credentials, MatchId, MatchPhase, Move, Outcome, RpsError, Result, Seat, Secret};

/// A seated player.
#[derive(Debug, Clone)]
pub struct SeatState {
    name: String,
    secret: Secret,
    chosen: Option<Move>,
}

impl SeatState {
    #[must_use]
    pub fn new(name: impl Into<String>, password: &str) -> Self {
        Self {
            name: name.into(),
            secret: Secret::new(password),
            chosen: None,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn chosen(&self) -> Option<Move> {
        self.chosen
    }

    /// Equality on both name and secret.
    #[must_use]
    pub fn admits(&self, creds: Credentials<'_>) -> bool {
        self.name == creds.name && self.secret.verify(creds.password)
    }
}

/// One Rock-Paper-Scissors game.
#[derive(Debug, Clone)]
pub struct Match {
    id: MatchId,
    player_one: SeatState,
    player_two: Option<SeatState>,
    outcome: Outcome,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Match {
    /// New match with Player One seated and a fresh id.
    #[must_use]
    pub fn new(player_one: SeatState) -> Self {
        let now = Utc::now();
        Self {
            id: MatchId::new(),
            player_one,
            player_two: None,
            outcome: Outcome::InProgress,
            created_at: now,
            updated_at: now,
        }
    }

    #[must_use]
    pub fn id(&self) -> MatchId {
        self.id
    }

    #[must_use]
    pub fn player_one(&self) -> &SeatState {
        &self.player_one
    }

    #[must_use]
    pub fn player_two(&self) -> Option<&SeatState> {
        self.player_two.as_ref()
    }

    #[must_use]
    pub fn player_one_name(&self) -> &str {
        self.player_one.name()
    }

    #[must_use]
    pub fn player_two_name(&self) -> Option<&str> {
        self.player_two.as_ref().map(SeatState::name)
    }

    #[must_use]
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.outcome.is_final()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.player_two.is_some()
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    #[must_use]
    pub fn phase(&self) -> MatchPhase {
        if self.is_completed() {
            return MatchPhase::Completed;
        }
        let Some(two) = &self.player_two else {
            return MatchPhase::Created;
        };
        match (self.player_one.chosen, two.chosen) {
            (None, None) => MatchPhase::Joined,
            _ => MatchPhase::OneMoveIn,
        }
    }

    /// Outcome text, e.g. `"Alice Wins!"`.
    #[must_use]
    pub fn result_description(&self) -> String {
        self.outcome
            .describe(self.player_one_name(), self.player_two_name())
    }

    /// Which seat these credentials claim. Player One is tried first.
    #[must_use]
    pub fn authenticate(&self, creds: Credentials<'_>) -> Option<Seat> {
        if self.player_one.admits(creds) {
            return Some(Seat::PlayerOne);
        }
        match &self.player_two {
            Some(two) if two.admits(creds) => Some(Seat::PlayerTwo),
            _ => None,
        }
    }

    /// Seat Player Two. Fails with `AlreadyFull` if the seat is taken.
    pub fn seat_player_two(&mut self, player_two: SeatState) -> Result<()> {
        if self.player_two.is_some() {
            return Err(RpsError::AlreadyFull(self.id));
        }
        self.player_two = Some(player_two);
        self.touch();
        Ok(())
    }

    /// Record a seat's move.
    ///
    /// Returns both moves `(player_one, player_two)` when this call completes
    /// the pair, so the caller can settle the outcome.
    pub fn record_move(&mut self, seat: Seat, chosen: Move) -> Result<Option<(Move, Move)>> {
        if self.is_completed() {
            return Err(RpsError::AlreadyCompleted(self.id));
        }
        let id = self.id;
        let slot = match seat {
            Seat::PlayerOne => &mut self.player_one,
            Seat::PlayerTwo => self
                .player_two
                .as_mut()
                .ok_or(RpsError::AwaitingOpponent(id))?,
        };
        if slot.chosen.is_some() {
            return Err(RpsError::AlreadyMoved { match_id: id, seat });
        }
        slot.chosen = Some(chosen);
        self.touch();

        let second = self.player_two.as_ref().and_then(SeatState::chosen);
        Ok(self.player_one.chosen.zip(second))
    }

    /// Fix the outcome. Only valid once, after both moves are recorded.
    pub fn settle(&mut self, outcome: Outcome) -> Result<()> {
        if self.is_completed() {
            return Err(RpsError::AlreadyCompleted(self.id));
        }
        if !outcome.is_final() {
            return Err(RpsError::Internal(format!(
                "match {} settled without a final outcome",
                self.id
            )));
        }
        let both_in = self.player_one.chosen.is_some()
            && self.player_two.as_ref().and_then(SeatState::chosen).is_some();
        if !both_in {
            return Err(RpsError::Internal(format!(
                "match {} settled before both moves were recorded",
                self.id
            )));
        }
        self.outcome = outcome;
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Test helpers.
#[cfg(any(test, feature = "test-helpers"))]
impl Match {
    /// Alice waiting for an opponent.
    pub fn dummy_open() -> Self {
        Self::new(SeatState::new("Alice", "Secr3t!"))
    }

    /// Alice versus Bob, no moves yet.
    pub fn dummy_joined() -> Self {
        let mut m = Self::dummy_open();
        m.player_two = Some(SeatState::new("Bob", "P@ssw0rd"));
        m
    }

    /// Same match content under a chosen id.
    #[must_use]
    pub fn with_id(mut self, id: MatchId) -> Self {
        self.id = id;
        self
    }
}
