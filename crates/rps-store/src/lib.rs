//! # rps-store
//!
//! **Match Store**: thread-safe, process-lifetime storage of [`Match`]
//! entities keyed by [`MatchId`].
//!
//! The store knows nothing about game rules. It offers three operations:
//!
//! - `insert`: add a new match (rejects duplicate ids)
//! - `get`: snapshot a match by id
//! - `mutate`: run a closure against one match under that match's lock
//!
//! Locks are per entry. Work on different matches proceeds in parallel.
//!
//! [`Match`]: rps_types::Match
//! [`MatchId`]: rps_types::MatchId

pub mod match_store;

pub use match_store::MatchStore;
