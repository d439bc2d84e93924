//! # rps-ingress
//!
//! **Boundary plane**: the caller-facing side of the match engine.
//!
//! A transport collaborator (HTTP, CLI, tests) deserializes requests into
//! [`PlayerCredentials`] / [`MoveRequest`] and calls the matching
//! [`RequestGate`] method:
//!
//! ```text
//! start(creds)          → MatchSummary   { matchId, playerOneName }
//! join(id, creds)       → MatchSummary   { playerOneName, playerTwoName }
//! submit_move(id, req)  → MoveReceipt    { accepted, completed }
//! status(id)            → MatchStatus    { names, moves | "Hidden", result }
//! spectate(id)          → SpectatorView  { names, result }
//! ```
//!
//! Failures are [`rps_types::RpsError`]; use [`rps_types::RpsError::kind`]
//! to pick a status code.

pub mod gate;
pub mod request;

pub use gate::RequestGate;
pub use request::{MoveRequest, PlayerCredentials};
