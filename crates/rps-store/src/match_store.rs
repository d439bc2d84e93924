//! Concurrent keyed storage for [`Match`] entities.
//!
//! Each stored match sits behind its own `Mutex`. The outer `DashMap` is only
//! held long enough to clone the entry's `Arc`, so a mutation on one match
//! never waits on a mutation of another.

use std::sync::Arc;

use dashmap::{DashMap, mapref::entry::Entry};
use parking_lot::Mutex;
use rps_types::{Match, MatchId, Result, RpsError};

/// In-memory match store. Entries live for the process lifetime.
#[derive(Default)]
pub struct MatchStore {
    entries: DashMap<MatchId, Arc<Mutex<Match>>>,
}

impl MatchStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Add a new match.
    ///
    /// # Errors
    /// Returns [`RpsError::DuplicateKey`] if the id is already stored.
    pub fn insert(&self, game: Match) -> Result<()> {
        let id = game.id();
        match self.entries.entry(id) {
            Entry::Occupied(_) => {
                tracing::warn!(match_id = %id, "Duplicate match id rejected");
                Err(RpsError::DuplicateKey(id))
            }
            Entry::Vacant(slot) => {
                slot.insert(Arc::new(Mutex::new(game)));
                Ok(())
            }
        }
    }

    /// Snapshot of the current state.
    pub fn get(&self, id: MatchId) -> Result<Match> {
        let cell = self.cell(id)?;
        let snapshot = cell.lock().clone();
        Ok(snapshot)
    }

    /// Apply `f` to the stored match under its lock.
    ///
    /// `f` runs on a working copy; the copy replaces the stored match only if
    /// `f` returns `Ok`, so a failed mutation leaves no partial write.
    pub fn mutate<T, F>(&self, id: MatchId, f: F) -> Result<T>
    where
        F: FnOnce(&mut Match) -> Result<T>,
    {
        let cell = self.cell(id)?;
        let mut guard = cell.lock();
        let mut working = guard.clone();
        let out = f(&mut working)?;
        *guard = working;
        Ok(out)
    }

    #[must_use]
    pub fn contains(&self, id: MatchId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn cell(&self, id: MatchId) -> Result<Arc<Mutex<Match>>> {
        self.entries
            .get(&id)
            .map(|entry| Arc::clone(entry.value()))
            .ok_or(RpsError::NotFound(id))
    }
}

#[cfg(test)]
mod tests {
    use rps_types::{Move, Seat, SeatState};

    use super::*;

    #[test]
    fn insert_then_get() {
        let store = MatchStore::new();
        let game = Match::dummy_open();
        let id = game.id();
        store.insert(game).unwrap();

        let got = store.get(id).unwrap();
        assert_eq!(got.id(), id);
        assert_eq!(got.player_one_name(), "Alice");
        assert!(store.contains(id));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn duplicate_insert_rejected() {
        let store = MatchStore::new();
        let first = Match::dummy_open();
        let id = first.id();
        store.insert(first).unwrap();

        let clash = Match::dummy_joined().with_id(id);
        let err = store.insert(clash).unwrap_err();
        assert!(matches!(err, RpsError::DuplicateKey(dup) if dup == id));
        // Original entry untouched
        assert!(store.get(id).unwrap().player_two_name().is_none());
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn missing_id_not_found() {
        let store = MatchStore::new();
        let id = MatchId::new();
        assert!(matches!(store.get(id), Err(RpsError::NotFound(x)) if x == id));
        let err = store.mutate(id, |_| Ok(())).unwrap_err();
        assert!(matches!(err, RpsError::NotFound(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn mutate_persists_on_ok() {
        let store = MatchStore::new();
        let game = Match::dummy_open();
        let id = game.id();
        store.insert(game).unwrap();

        store
            .mutate(id, |m| m.seat_player_two(SeatState::new("Bob", "pw")))
            .unwrap();
        assert_eq!(store.get(id).unwrap().player_two_name(), Some("Bob"));
    }

    #[test]
    fn failed_mutation_leaves_no_partial_write() {
        let store = MatchStore::new();
        let game = Match::dummy_joined();
        let id = game.id();
        store.insert(game).unwrap();

        let err = store
            .mutate(id, |m| {
                m.record_move(Seat::PlayerOne, Move::Rock)?;
                Err::<(), _>(RpsError::AuthenticationFailed)
            })
            .unwrap_err();
        assert!(matches!(err, RpsError::AuthenticationFailed));
        assert_eq!(store.get(id).unwrap().player_one().chosen(), None);
    }

    #[test]
    fn snapshot_is_detached() {
        let store = MatchStore::new();
        let game = Match::dummy_joined();
        let id = game.id();
        store.insert(game).unwrap();

        let mut snapshot = store.get(id).unwrap();
        snapshot.record_move(Seat::PlayerOne, Move::Paper).unwrap();
        assert_eq!(store.get(id).unwrap().player_one().chosen(), None);
    }
}
