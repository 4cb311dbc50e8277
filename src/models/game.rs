//! Match (game) between two players, its status and per-player outcome.

use crate::models::player::PlayerId;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Pending,
    Completed,
}

/// Result of a completed match from one player's point of view.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Outcome {
    Win,
    Draw,
    Loss,
}

/// A single match: player A against player B. The A/B order is fixed at creation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct GameMatch {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub player_a_id: PlayerId,
    pub player_b_id: PlayerId,
    /// None until the result is recorded; set together with `score_b`.
    pub score_a: Option<u32>,
    pub score_b: Option<u32>,
    pub status: MatchStatus,
}

impl GameMatch {
    pub fn new(tournament_id: TournamentId, player_a_id: PlayerId, player_b_id: PlayerId) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            player_a_id,
            player_b_id,
            score_a: None,
            score_b: None,
            status: MatchStatus::Pending,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == MatchStatus::Completed
    }

    /// Set both scores and mark the match completed.
    pub fn complete(&mut self, score_a: u32, score_b: u32) {
        self.score_a = Some(score_a);
        self.score_b = Some(score_b);
        self.status = MatchStatus::Completed;
    }

    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.player_a_id == player_id || self.player_b_id == player_id
    }

    /// Outcome for `player_id`, or None if the match is pending or the player did not take part.
    pub fn outcome_for(&self, player_id: PlayerId) -> Option<Outcome> {
        if !self.involves(player_id) {
            return None;
        }
        let (a, b) = match (self.score_a, self.score_b) {
            (Some(a), Some(b)) => (a, b),
            _ => return None,
        };
        let (own, other) = if player_id == self.player_a_id { (a, b) } else { (b, a) };
        Some(if own == other {
            Outcome::Draw
        } else if own > other {
            Outcome::Win
        } else {
            Outcome::Loss
        })
    }
}
