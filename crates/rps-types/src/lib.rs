//! # rps-types
//!
//! Shared types, errors, and configuration for the Rock-Paper-Scissors
//! match engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Identifiers**: [`MatchId`]
//! - **Game domains**: [`Move`], [`Seat`], [`Outcome`], [`MatchPhase`]
//! - **Match model**: [`Match`], [`SeatState`]
//! - **Authentication**: [`Secret`], [`Credentials`]
//! - **Views**: [`MatchSummary`], [`MoveReceipt`], [`MatchStatus`], [`SpectatorView`]
//! - **Configuration**: [`RpsConfig`], [`EngineConfig`], [`IngressConfig`]
//! - **Errors**: [`RpsError`] with `RPS_ERR_` prefix codes
//! - **Constants**: limits and fixed result texts

pub mod auth;
pub mod config;
pub mod constants;
pub mod error;
pub mod game;
pub mod ids;
pub mod match_state;
pub mod view;

pub use auth::*;
pub use config::*;
pub use error::*;
pub use game::*;
pub use ids::*;
pub use match_state::*;
pub use view::*;

// Constants are accessed via `rps_types::constants::FOO`.
