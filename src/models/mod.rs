//! Data structures for round-robin tournaments: players, participants, matches, tournaments.

mod game;
mod player;
mod tournament;

pub use game::{GameMatch, MatchId, MatchStatus, Outcome};
pub use player::{Participant, ParticipantId, Player, PlayerId};
pub use tournament::{ErrorKind, Tournament, TournamentError, TournamentId, TournamentStatus};
