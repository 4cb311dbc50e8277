//! In-memory entity store. Records are kept in insertion order with id indexes on the side.

use super::{EntityStore, StoreError, StoreResult};
use crate::models::{
    GameMatch, MatchId, Participant, Player, PlayerId, Tournament, TournamentId, TournamentStatus,
};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct MemoryStore {
    tournaments: Vec<Tournament>,
    tournament_index: HashMap<TournamentId, usize>,
    players: Vec<Player>,
    player_index: HashMap<PlayerId, usize>,
    participants: Vec<Participant>,
    matches: Vec<GameMatch>,
    match_index: HashMap<MatchId, usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tournament_slot(&self, id: TournamentId) -> StoreResult<usize> {
        self.tournament_index
            .get(&id)
            .copied()
            .ok_or(StoreError::MissingRecord { entity: "tournament", id })
    }

    fn ensure_transition(&self, idx: usize, next: TournamentStatus) -> StoreResult<()> {
        let tournament = &self.tournaments[idx];
        if !tournament.status.can_advance_to(next) {
            return Err(StoreError::ConstraintViolation(format!(
                "tournament {} cannot move from {} to {next}",
                tournament.id, tournament.status
            )));
        }
        Ok(())
    }
}

impl EntityStore for MemoryStore {
    fn create_tournament(&mut self) -> StoreResult<Tournament> {
        let tournament = Tournament::new();
        self.tournament_index
            .insert(tournament.id, self.tournaments.len());
        self.tournaments.push(tournament.clone());
        Ok(tournament)
    }

    fn find_tournament(&self, id: TournamentId) -> StoreResult<Option<Tournament>> {
        Ok(self
            .tournament_index
            .get(&id)
            .map(|&idx| self.tournaments[idx].clone()))
    }

    fn list_tournaments(&self) -> StoreResult<Vec<Tournament>> {
        Ok(self.tournaments.clone())
    }

    fn create_player(&mut self, name: &str) -> StoreResult<Player> {
        let player = Player::new(name);
        self.player_index.insert(player.id, self.players.len());
        self.players.push(player.clone());
        Ok(player)
    }

    fn find_player(&self, id: PlayerId) -> StoreResult<Option<Player>> {
        Ok(self
            .player_index
            .get(&id)
            .map(|&idx| self.players[idx].clone()))
    }

    fn find_player_by_name(&self, name: &str) -> StoreResult<Option<Player>> {
        Ok(self.players.iter().find(|p| p.name == name).cloned())
    }

    fn add_participant(
        &mut self,
        tournament_id: TournamentId,
        player_id: PlayerId,
    ) -> StoreResult<Participant> {
        if !self.tournament_index.contains_key(&tournament_id) {
            return Err(StoreError::MissingRecord {
                entity: "tournament",
                id: tournament_id,
            });
        }
        if !self.player_index.contains_key(&player_id) {
            return Err(StoreError::MissingRecord {
                entity: "player",
                id: player_id,
            });
        }
        if self.participant_exists(tournament_id, player_id)? {
            return Err(StoreError::ConstraintViolation(format!(
                "player {player_id} already participates in tournament {tournament_id}"
            )));
        }
        let participant = Participant::new(tournament_id, player_id);
        self.participants.push(participant.clone());
        Ok(participant)
    }

    fn participants_by_tournament(
        &self,
        tournament_id: TournamentId,
    ) -> StoreResult<Vec<Participant>> {
        Ok(self
            .participants
            .iter()
            .filter(|p| p.tournament_id == tournament_id)
            .cloned()
            .collect())
    }

    fn count_participants(&self, tournament_id: TournamentId) -> StoreResult<usize> {
        Ok(self
            .participants
            .iter()
            .filter(|p| p.tournament_id == tournament_id)
            .count())
    }

    fn participant_exists(
        &self,
        tournament_id: TournamentId,
        player_id: PlayerId,
    ) -> StoreResult<bool> {
        Ok(self
            .participants
            .iter()
            .any(|p| p.tournament_id == tournament_id && p.player_id == player_id))
    }

    fn start_with_matches(
        &mut self,
        tournament_id: TournamentId,
        pairings: &[(PlayerId, PlayerId)],
    ) -> StoreResult<(Tournament, Vec<GameMatch>)> {
        let idx = self.tournament_slot(tournament_id)?;
        self.ensure_transition(idx, TournamentStatus::Started)?;
        for &(a, b) in pairings {
            if a == b {
                return Err(StoreError::ConstraintViolation(format!(
                    "player {a} cannot be paired with themselves"
                )));
            }
            for id in [a, b] {
                if !self.player_index.contains_key(&id) {
                    return Err(StoreError::MissingRecord { entity: "player", id });
                }
            }
        }

        // Everything is validated; nothing below can fail.
        let created: Vec<GameMatch> = pairings
            .iter()
            .map(|&(a, b)| GameMatch::new(tournament_id, a, b))
            .collect();
        for m in &created {
            self.match_index.insert(m.id, self.matches.len());
            self.matches.push(m.clone());
        }
        let tournament = &mut self.tournaments[idx];
        tournament.status = TournamentStatus::Started;
        Ok((tournament.clone(), created))
    }

    fn find_match(&self, id: MatchId) -> StoreResult<Option<GameMatch>> {
        Ok(self
            .match_index
            .get(&id)
            .map(|&idx| self.matches[idx].clone()))
    }

    fn matches_by_tournament(&self, tournament_id: TournamentId) -> StoreResult<Vec<GameMatch>> {
        Ok(self
            .matches
            .iter()
            .filter(|m| m.tournament_id == tournament_id)
            .cloned()
            .collect())
    }

    fn complete_match(
        &mut self,
        id: MatchId,
        score_a: u32,
        score_b: u32,
    ) -> StoreResult<(GameMatch, bool)> {
        let match_idx = *self
            .match_index
            .get(&id)
            .ok_or(StoreError::MissingRecord { entity: "match", id })?;
        if self.matches[match_idx].is_completed() {
            return Err(StoreError::ConstraintViolation(format!(
                "match {id} already has a result"
            )));
        }
        let tournament_id = self.matches[match_idx].tournament_id;
        let tournament_idx = self.tournament_slot(tournament_id)?;
        if self.tournaments[tournament_idx].status != TournamentStatus::Started {
            return Err(StoreError::ConstraintViolation(format!(
                "tournament {tournament_id} is not accepting results"
            )));
        }
        let finishes = self.count_pending_matches(tournament_id)? == 1;
        if finishes {
            self.ensure_transition(tournament_idx, TournamentStatus::Finished)?;
        }

        // Everything is validated; nothing below can fail.
        let game = &mut self.matches[match_idx];
        game.complete(score_a, score_b);
        let updated = game.clone();
        if finishes {
            self.tournaments[tournament_idx].status = TournamentStatus::Finished;
        }
        Ok((updated, finishes))
    }

    fn count_pending_matches(&self, tournament_id: TournamentId) -> StoreResult<usize> {
        Ok(self
            .matches
            .iter()
            .filter(|m| m.tournament_id == tournament_id && !m.is_completed())
            .count())
    }
}
