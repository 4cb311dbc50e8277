//! Leaderboard: points from completed matches, ranked.

use crate::logic::setup::load_tournament;
use crate::models::{Outcome, PlayerId, TournamentError, TournamentId, TournamentStatus};
use crate::store::EntityStore;
use chrono::{DateTime, Utc};
use serde::Serialize;

pub const POINTS_FOR_WIN: u32 = 2;
pub const POINTS_FOR_DRAW: u32 = 1;
pub const POINTS_FOR_LOSS: u32 = 0;

/// One participant's row on the leaderboard.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Standing {
    pub player_id: PlayerId,
    pub player_name: String,
    pub points: u32,
    pub played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
}

impl Standing {
    fn add(&mut self, outcome: Outcome) {
        self.played += 1;
        match outcome {
            Outcome::Win => {
                self.wins += 1;
                self.points += POINTS_FOR_WIN;
            }
            Outcome::Draw => {
                self.draws += 1;
                self.points += POINTS_FOR_DRAW;
            }
            Outcome::Loss => {
                self.losses += 1;
                self.points += POINTS_FOR_LOSS;
            }
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Leaderboard {
    pub tournament_id: TournamentId,
    pub status: TournamentStatus,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "leaderboard")]
    pub standings: Vec<Standing>,
}

/// Compute standings for every participant. Works in any status; pending matches are ignored.
///
/// Ranked by points, then wins, then admission order.
pub fn compute_leaderboard<S: EntityStore + ?Sized>(
    store: &S,
    tournament_id: TournamentId,
) -> Result<Leaderboard, TournamentError> {
    let tournament = load_tournament(store, tournament_id)?;
    let participants = store.participants_by_tournament(tournament_id)?;
    let matches = store.matches_by_tournament(tournament_id)?;

    let mut standings = Vec::with_capacity(participants.len());
    for participant in &participants {
        let player = store
            .find_player(participant.player_id)?
            .ok_or(TournamentError::PlayerNotFound(participant.player_id))?;
        let mut standing = Standing {
            player_id: player.id,
            player_name: player.name,
            ..Standing::default()
        };
        for outcome in matches.iter().filter_map(|m| m.outcome_for(player.id)) {
            standing.add(outcome);
        }
        standings.push(standing);
    }

    // Stable sort keeps admission order among equal (points, wins).
    standings.sort_by(|a, b| b.points.cmp(&a.points).then(b.wins.cmp(&a.wins)));

    Ok(Leaderboard {
        tournament_id,
        status: tournament.status,
        created_at: tournament.created_at,
        standings,
    })
}
