//! Boundary checks in front of the engine.
//!
//! The gate rejects blank credentials and placeholder passwords and decodes
//! match ids, then hands the request to [`MatchEngine`]. Move codes are
//! decoded by the engine once the match is known to be open.

use rps_engine::MatchEngine;
use rps_types::{
    IngressConfig, MatchId, MatchStatus, MatchSummary, MoveReceipt, Result, RpsConfig,
    RpsError, SpectatorView,
};

use crate::{MoveRequest, PlayerCredentials};

/// Caller-facing entry point for the five match operations.
pub struct RequestGate {
    engine: MatchEngine,
    config: IngressConfig,
}

impl RequestGate {
    #[must_use]
    pub fn new(config: RpsConfig) -> Self {
        Self::with_engine(MatchEngine::new(config.engine), config.ingress)
    }

    #[must_use]
    pub fn with_engine(engine: MatchEngine, config: IngressConfig) -> Self {
        Self { engine, config }
    }

    #[must_use]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    pub fn start(&self, request: &PlayerCredentials) -> Result<MatchSummary> {
        self.screen_identity(request, "start a game")?;
        self.engine
            .create_match(&request.player_name, &request.password)
    }

    pub fn join(&self, raw_id: &str, request: &PlayerCredentials) -> Result<MatchSummary> {
        self.screen_identity(request, "join a game")?;
        let id = MatchId::parse(raw_id)?;
        self.engine
            .join_match(id, &request.player_name, &request.password)
    }

    pub fn submit_move(&self, raw_id: &str, request: &MoveRequest) -> Result<MoveReceipt> {
        let creds = request
            .credentials
            .as_ref()
            .filter(|c| !c.password.trim().is_empty() && !self.config.is_placeholder(&c.password))
            .ok_or_else(|| {
                tracing::debug!(op = "move", "Request rejected at boundary");
                RpsError::invalid_input(
                    "A secure, non-default password is required to submit a move",
                )
            })?;
        let id = MatchId::parse(raw_id)?;
        self.engine
            .submit_move_code(id, creds.as_credentials(), request.move_code)
    }

    pub fn status(&self, raw_id: &str) -> Result<MatchStatus> {
        self.engine.status(MatchId::parse(raw_id)?)
    }

    pub fn spectate(&self, raw_id: &str) -> Result<SpectatorView> {
        self.engine.spectate(MatchId::parse(raw_id)?)
    }

    fn screen_identity(&self, request: &PlayerCredentials, action: &str) -> Result<()> {
        let blank = request.player_name.trim().is_empty() || request.password.trim().is_empty();
        if blank || self.config.is_placeholder(&request.password) {
            tracing::debug!(op = action, "Request rejected at boundary");
            return Err(RpsError::invalid_input(format!(
                "Player name and a secure, non-default password are required to {action}"
            )));
        }
        Ok(())
    }
}

impl Default for RequestGate {
    fn default() -> Self {
        Self::new(RpsConfig::default())
    }
}
