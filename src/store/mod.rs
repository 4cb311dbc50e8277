//! Entity store: the persistence boundary used by all tournament logic.

mod memory;

pub use memory::MemoryStore;

use crate::models::{
    GameMatch, MatchId, Participant, Player, PlayerId, Tournament, TournamentId,
};
use thiserror::Error;
use uuid::Uuid;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum StoreError {
    #[error("{entity} {id} does not exist in the store")]
    MissingRecord { entity: &'static str, id: Uuid },

    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Create / find / update operations over tournaments, players, participants and matches.
///
/// Implementations assign identifiers and timestamps at creation. Lists are returned in
/// insertion order; the round-robin schedule depends on participant order.
pub trait EntityStore {
    fn create_tournament(&mut self) -> StoreResult<Tournament>;
    fn find_tournament(&self, id: TournamentId) -> StoreResult<Option<Tournament>>;
    fn list_tournaments(&self) -> StoreResult<Vec<Tournament>>;

    fn create_player(&mut self, name: &str) -> StoreResult<Player>;
    fn find_player(&self, id: PlayerId) -> StoreResult<Option<Player>>;
    /// Exact, case-sensitive match.
    fn find_player_by_name(&self, name: &str) -> StoreResult<Option<Player>>;

    fn add_participant(
        &mut self,
        tournament_id: TournamentId,
        player_id: PlayerId,
    ) -> StoreResult<Participant>;
    fn participants_by_tournament(&self, tournament_id: TournamentId)
        -> StoreResult<Vec<Participant>>;
    fn count_participants(&self, tournament_id: TournamentId) -> StoreResult<usize>;
    fn participant_exists(&self, tournament_id: TournamentId, player_id: PlayerId)
        -> StoreResult<bool>;

    /// Create one pending match per `(player_a, player_b)` pair, in order, and move the
    /// tournament from planning to started.
    ///
    /// All or nothing: on error neither the schedule nor the status has changed.
    fn start_with_matches(
        &mut self,
        tournament_id: TournamentId,
        pairings: &[(PlayerId, PlayerId)],
    ) -> StoreResult<(Tournament, Vec<GameMatch>)>;
    fn find_match(&self, id: MatchId) -> StoreResult<Option<GameMatch>>;
    fn matches_by_tournament(&self, tournament_id: TournamentId) -> StoreResult<Vec<GameMatch>>;
    /// Set both scores on a pending match of a started tournament and mark it completed.
    /// When it was the last pending match the tournament moves to finished in the same step;
    /// the returned flag tells whether that happened.
    ///
    /// All or nothing: on error neither the match nor the tournament has changed.
    fn complete_match(
        &mut self,
        id: MatchId,
        score_a: u32,
        score_b: u32,
    ) -> StoreResult<(GameMatch, bool)>;
    fn count_pending_matches(&self, tournament_id: TournamentId) -> StoreResult<usize>;
}
