//! Player and Participant data structures.

use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in matches and lookups).
pub type PlayerId = Uuid;

/// Unique identifier for a participant record.
pub type ParticipantId = Uuid;

/// A registrant, reused across tournaments by exact name.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

/// Join record binding a player to one tournament. `(tournament_id, player_id)` is unique.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub tournament_id: TournamentId,
    pub player_id: PlayerId,
}

impl Participant {
    pub fn new(tournament_id: TournamentId, player_id: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            player_id,
        }
    }
}
