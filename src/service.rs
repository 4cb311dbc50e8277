//! Operation contract exposed to the HTTP layer. One call per operation, synchronous.
//!
//! The store sits behind a single `RwLock`: every mutating operation runs its whole
//! check-then-act sequence under the write lock, and reads share the read lock, so a
//! leaderboard never sees a half-applied result.

use crate::logic::{self, Leaderboard};
use crate::models::{GameMatch, MatchId, Player, Tournament, TournamentError, TournamentId};
use crate::store::{EntityStore, StoreError};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

pub struct TournamentService<S> {
    store: RwLock<S>,
}

impl<S: EntityStore> TournamentService<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, S>, TournamentError> {
        self.store
            .read()
            .map_err(|_| TournamentError::Store(StoreError::Unavailable("store lock poisoned".into())))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, S>, TournamentError> {
        self.store
            .write()
            .map_err(|_| TournamentError::Store(StoreError::Unavailable("store lock poisoned".into())))
    }

    pub fn create_tournament(&self) -> Result<Tournament, TournamentError> {
        let tournament = self.write()?.create_tournament()?;
        log::info!("Created tournament {}", tournament.id);
        Ok(tournament)
    }

    pub fn list_tournaments(&self) -> Result<Vec<Tournament>, TournamentError> {
        Ok(self.read()?.list_tournaments()?)
    }

    pub fn get_tournament(&self, id: TournamentId) -> Result<Tournament, TournamentError> {
        self.read()?
            .find_tournament(id)?
            .ok_or(TournamentError::TournamentNotFound(id))
    }

    pub fn admit_participant(
        &self,
        tournament_id: TournamentId,
        name: &str,
    ) -> Result<Player, TournamentError> {
        let mut store = self.write()?;
        logic::admit_participant(&mut *store, tournament_id, name)
            .inspect_err(|e| {
                log::debug!("Admission of '{}' to {} rejected: {}", name, tournament_id, e)
            })
    }

    pub fn start_tournament(
        &self,
        tournament_id: TournamentId,
    ) -> Result<Tournament, TournamentError> {
        let mut store = self.write()?;
        logic::start_tournament(&mut *store, tournament_id)
            .inspect_err(|e| log::debug!("Start of {} rejected: {}", tournament_id, e))
    }

    pub fn record_match_result(
        &self,
        match_id: MatchId,
        score_a: i64,
        score_b: i64,
    ) -> Result<GameMatch, TournamentError> {
        let mut store = self.write()?;
        logic::record_match_result(&mut *store, match_id, score_a, score_b)
            .inspect_err(|e| log::debug!("Result for match {} rejected: {}", match_id, e))
    }

    pub fn leaderboard(&self, tournament_id: TournamentId) -> Result<Leaderboard, TournamentError> {
        logic::compute_leaderboard(&*self.read()?, tournament_id)
    }

    /// Players of a tournament in admission order.
    pub fn list_participants(
        &self,
        tournament_id: TournamentId,
    ) -> Result<Vec<Player>, TournamentError> {
        let store = self.read()?;
        store
            .find_tournament(tournament_id)?
            .ok_or(TournamentError::TournamentNotFound(tournament_id))?;
        store
            .participants_by_tournament(tournament_id)?
            .into_iter()
            .map(|p| -> Result<Player, TournamentError> {
                store
                    .find_player(p.player_id)?
                    .ok_or(TournamentError::PlayerNotFound(p.player_id))
            })
            .collect()
    }

    /// Matches of a tournament in generation order.
    pub fn list_matches(
        &self,
        tournament_id: TournamentId,
    ) -> Result<Vec<GameMatch>, TournamentError> {
        let store = self.read()?;
        store
            .find_tournament(tournament_id)?
            .ok_or(TournamentError::TournamentNotFound(tournament_id))?;
        Ok(store.matches_by_tournament(tournament_id)?)
    }
}
