//! Error types for the Rock-Paper-Scissors match engine.
//!
//! All errors use the `RPS_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Input errors
//! - 2xx: Lookup / storage errors
//! - 3xx: Match state conflicts
//! - 4xx: Authentication errors
//! - 9xx: General / internal errors
//!
//! No variant ever carries a secret or a caller-supplied password.

use thiserror::Error;

use crate::{MatchId, Seat};

/// Central error enum for all match operations.
#[derive(Debug, Error)]
pub enum RpsError {
    // =================================================================
    // Input Errors (1xx)
    // =================================================================
    /// A name or password failed validation (blank, malformed, placeholder).
    #[error("RPS_ERR_100: Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// The move code is outside the three-valued domain.
    #[error("RPS_ERR_101: Invalid move {code}. Pick between: 1 => Rock, 2 => Paper, 3 => Scissors")]
    InvalidMove { code: i64 },

    // =================================================================
    // Lookup / Storage Errors (2xx)
    // =================================================================
    /// No match is stored under this id.
    #[error("RPS_ERR_200: Match not found: {0}")]
    NotFound(MatchId),

    /// The caller supplied an id that cannot name any match.
    #[error("RPS_ERR_201: Match not found: {raw}")]
    UnknownMatchRef { raw: String },

    /// A match with this id is already stored.
    #[error("RPS_ERR_202: Match already exists: {0}")]
    DuplicateKey(MatchId),

    // =================================================================
    // Match State Conflicts (3xx)
    // =================================================================
    /// Player Two has already joined.
    #[error("RPS_ERR_300: Match {0} already has two players")]
    AlreadyFull(MatchId),

    /// The outcome is fixed; no further moves are accepted.
    #[error("RPS_ERR_301: Match {0} is already completed. No further moves can be submitted")]
    AlreadyCompleted(MatchId),

    /// This seat has already recorded its move.
    #[error("RPS_ERR_302: {seat} has already submitted a move in match {match_id}")]
    AlreadyMoved { match_id: MatchId, seat: Seat },

    /// Player Two has not joined yet, so no move can be recorded.
    #[error("RPS_ERR_303: Match {0} is still waiting for a second player")]
    AwaitingOpponent(MatchId),

    // =================================================================
    // Authentication Errors (4xx)
    // =================================================================
    /// The credentials match neither seat. Deliberately does not say which
    /// field was wrong.
    #[error("RPS_ERR_400: Invalid player name or password")]
    AuthenticationFailed,

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("RPS_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("RPS_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (invalid config document, bad values, etc.).
    #[error("RPS_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Coarse classification a transport collaborator maps to a status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Conflict,
    Unauthorized,
    Internal,
}

impl RpsError {
    /// Shorthand for [`RpsError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidInput { .. } | Self::InvalidMove { .. } => ErrorKind::Validation,
            Self::NotFound(_) | Self::UnknownMatchRef { .. } => ErrorKind::NotFound,
            Self::AlreadyFull(_)
            | Self::AlreadyCompleted(_)
            | Self::AlreadyMoved { .. }
            | Self::AwaitingOpponent(_) => ErrorKind::Conflict,
            Self::AuthenticationFailed => ErrorKind::Unauthorized,
            Self::DuplicateKey(_)
            | Self::Internal(_)
            | Self::Serialization(_)
            | Self::Configuration(_) => ErrorKind::Internal,
        }
    }

    /// Whether the caller can fix this by changing the request.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        self.kind() != ErrorKind::Internal
    }
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, RpsError>;

impl From<serde_json::Error> for RpsError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
