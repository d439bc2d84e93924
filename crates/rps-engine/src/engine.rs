//! The match engine: game-rule enforcement over a [`MatchStore`].
//!
//! Every state change runs inside a single `MatchStore::mutate` call, so the
//! read → validate → write → resolve sequence for one match is atomic and a
//! failed check never leaves a partial write behind.

use rps_store::MatchStore;
use rps_types::{
    Credentials, EngineConfig, Match, MatchId, MatchPhase, MatchStatus, MatchSummary, Move,
    MoveReceipt, Outcome, Result, RpsError, Seat, SeatState, SpectatorView,
};

use crate::{resolution::resolve, validation::validate_identity};

/// What a successful move submission changed.
struct MoveApplied {
    seat: Seat,
    outcome: Outcome,
    phase: MatchPhase,
}

/// Runs matches: create, join, move, status, spectate.
pub struct MatchEngine {
    store: MatchStore,
    config: EngineConfig,
}

impl MatchEngine {
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        Self::with_store(MatchStore::new(), config)
    }

    #[must_use]
    pub fn with_store(store: MatchStore, config: EngineConfig) -> Self {
        Self { store, config }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &MatchStore {
        &self.store
    }

    /// Open a new match with the caller as Player One.
    pub fn create_match(&self, player_name: &str, password: &str) -> Result<MatchSummary> {
        validate_identity(player_name, password, &self.config)?;

        let game = Match::new(SeatState::new(player_name, password));
        let summary = MatchSummary::from(&game);
        self.store.insert(game)?;

        tracing::info!(
            match_id = %summary.match_id,
            player_one = %summary.player_one_name,
            "Match created"
        );
        Ok(summary)
    }

    /// Take the Player Two seat.
    ///
    /// A full match reports `AlreadyFull` before the joining identity is
    /// looked at.
    pub fn join_match(
        &self,
        id: MatchId,
        player_name: &str,
        password: &str,
    ) -> Result<MatchSummary> {
        let summary = self.store.mutate(id, |game| {
            if game.is_full() {
                return Err(RpsError::AlreadyFull(id));
            }
            validate_identity(player_name, password, &self.config)?;
            if game
                .player_one()
                .admits(Credentials::new(player_name, password))
            {
                return Err(RpsError::invalid_input(
                    "Player Two must use different credentials from Player One",
                ));
            }
            game.seat_player_two(SeatState::new(player_name, password))?;
            Ok(MatchSummary::from(&*game))
        })?;

        tracing::info!(
            match_id = %id,
            player_one = %summary.player_one_name,
            player_two = ?summary.player_two_name,
            "Player Two joined"
        );
        Ok(summary)
    }

    /// Record an authenticated move, resolving the match when it is the
    /// second one.
    ///
    /// Each seat moves once. A repeat submission from a seat that has already
    /// moved fails with `AlreadyMoved` and changes nothing.
    pub fn submit_move(
        &self,
        id: MatchId,
        credentials: Credentials<'_>,
        chosen: Move,
    ) -> Result<MoveReceipt> {
        self.apply_move(id, credentials, || Ok(chosen))
    }

    /// Same as [`Self::submit_move`] for a wire move code.
    ///
    /// Checks run in this order: match exists, match not completed, code in
    /// `1..=3`, credentials match a seat.
    pub fn submit_move_code(
        &self,
        id: MatchId,
        credentials: Credentials<'_>,
        code: i64,
    ) -> Result<MoveReceipt> {
        self.apply_move(id, credentials, || Move::from_code(code))
    }

    fn apply_move<F>(
        &self,
        id: MatchId,
        credentials: Credentials<'_>,
        decode: F,
    ) -> Result<MoveReceipt>
    where
        F: FnOnce() -> Result<Move>,
    {
        let applied = self.store.mutate(id, |game| {
            if game.is_completed() {
                return Err(RpsError::AlreadyCompleted(id));
            }
            let chosen = decode()?;
            let seat = game
                .authenticate(credentials)
                .ok_or(RpsError::AuthenticationFailed)?;

            if let Some((one, two)) = game.record_move(seat, chosen)? {
                game.settle(resolve(one, two))?;
            }
            Ok(MoveApplied {
                seat,
                outcome: game.outcome(),
                phase: game.phase(),
            })
        });

        let applied = match applied {
            Ok(applied) => applied,
            Err(err) => {
                if matches!(err, RpsError::AuthenticationFailed) {
                    tracing::warn!(match_id = %id, "Move rejected: credentials match no seat");
                } else {
                    tracing::debug!(match_id = %id, error = %err, "Move rejected");
                }
                return Err(err);
            }
        };

        tracing::debug!(
            match_id = %id,
            seat = %applied.seat,
            phase = %applied.phase,
            "Move recorded"
        );
        if applied.outcome.is_final() {
            tracing::info!(match_id = %id, outcome = %applied.outcome, "Match completed");
        }

        Ok(MoveReceipt {
            match_id: id,
            player_name: credentials.name.to_string(),
            accepted: true,
            completed: applied.outcome.is_final(),
        })
    }

    /// Participant view: moves stay hidden until the match is completed.
    pub fn status(&self, id: MatchId) -> Result<MatchStatus> {
        let game = self.store.get(id)?;
        tracing::debug!(match_id = %id, phase = %game.phase(), "Status read");
        Ok(MatchStatus::from(&game))
    }

    /// Spectator view: names and result text, never moves.
    pub fn spectate(&self, id: MatchId) -> Result<SpectatorView> {
        let game = self.store.get(id)?;
        tracing::debug!(match_id = %id, "Spectator read");
        Ok(SpectatorView::from(&game))
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}
