//! Round-robin tournament organizer: library with models, store, business logic and REST API.

pub mod api;
pub mod config;
pub mod logic;
pub mod models;
pub mod service;
pub mod store;

pub use config::ServerConfig;
pub use logic::{
    admit_participant, compute_leaderboard, generate_round_robin_pairings, record_match_result,
    start_tournament, Leaderboard, Standing, MAX_PARTICIPANTS, MIN_PARTICIPANTS_TO_START,
};
pub use models::{
    ErrorKind, GameMatch, MatchId, MatchStatus, Outcome, Participant, ParticipantId, Player,
    PlayerId, Tournament, TournamentError, TournamentId, TournamentStatus,
};
pub use service::TournamentService;
pub use store::{EntityStore, MemoryStore, StoreError, StoreResult};
