//! # rps-engine
//!
//! **Match Engine**: every game rule lives here.
//!
//! - **Validation**: player names are letters and spaces, passwords non-blank
//! - **Capacity**: exactly two seats, Player Two joins once
//! - **Authentication**: a move must present one seat's (name, password)
//! - **Resolution**: the outcome is fixed once, the instant both moves are in
//! - **Views**: status hides moves until completion, spectators never see them
//!
//! ## Match Flow
//!
//! ```text
//! create_match → join_match → submit_move ×2 → status / spectate
//!   Created        Joined       OneMoveIn → Completed
//! ```
//!
//! All mutations go through [`rps_store::MatchStore::mutate`], which holds the
//! target match's lock for the whole read-validate-write sequence.

pub mod engine;
pub mod resolution;
pub mod validation;

pub use engine::MatchEngine;
pub use resolution::resolve;
pub use validation::{validate_identity, validate_password, validate_player_name};
