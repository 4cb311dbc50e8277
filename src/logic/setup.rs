//! Planning phase: admit participants, then start the tournament (Planning -> Started).

use crate::logic::round_robin::generate_round_robin_pairings;
use crate::models::{Player, Tournament, TournamentError, TournamentId, TournamentStatus};
use crate::store::EntityStore;

/// Fixed ceiling on participants per tournament.
pub const MAX_PARTICIPANTS: usize = 5;

/// Participants needed before a tournament can start.
pub const MIN_PARTICIPANTS_TO_START: usize = 2;

pub(crate) fn load_tournament<S: EntityStore + ?Sized>(
    store: &S,
    tournament_id: TournamentId,
) -> Result<Tournament, TournamentError> {
    store
        .find_tournament(tournament_id)?
        .ok_or(TournamentError::TournamentNotFound(tournament_id))
}

/// Register `player_name` in the tournament, creating the player if no player has that exact name.
///
/// Checks, first failure wins: tournament exists, tournament is Planning, fewer than
/// [`MAX_PARTICIPANTS`] registered, player not already registered.
pub fn admit_participant<S: EntityStore + ?Sized>(
    store: &mut S,
    tournament_id: TournamentId,
    player_name: &str,
) -> Result<Player, TournamentError> {
    let tournament = load_tournament(store, tournament_id)?;
    tournament.ensure_status(TournamentStatus::Planning, "add players")?;

    if store.count_participants(tournament_id)? >= MAX_PARTICIPANTS {
        return Err(TournamentError::TournamentFull {
            capacity: MAX_PARTICIPANTS,
        });
    }

    let player = match store.find_player_by_name(player_name)? {
        Some(existing) => existing,
        None => store.create_player(player_name)?,
    };

    if store.participant_exists(tournament_id, player.id)? {
        return Err(TournamentError::DuplicateParticipant(player.name));
    }

    store.add_participant(tournament_id, player.id)?;
    log::info!("Player '{}' joined tournament {}", player.name, tournament_id);
    Ok(player)
}

/// Start the tournament: generate the full round-robin schedule and move to Started.
pub fn start_tournament<S: EntityStore + ?Sized>(
    store: &mut S,
    tournament_id: TournamentId,
) -> Result<Tournament, TournamentError> {
    let tournament = load_tournament(store, tournament_id)?;
    tournament.ensure_status(TournamentStatus::Planning, "start")?;

    let participants = store.participants_by_tournament(tournament_id)?;
    if participants.len() < MIN_PARTICIPANTS_TO_START {
        return Err(TournamentError::NotEnoughParticipants {
            required: MIN_PARTICIPANTS_TO_START,
            registered: participants.len(),
        });
    }

    let pairings = generate_round_robin_pairings(&participants);
    let (started, matches) = store.start_with_matches(tournament_id, &pairings)?;
    log::info!(
        "Tournament {} started with {} participants and {} matches",
        tournament_id,
        participants.len(),
        matches.len()
    );
    Ok(started)
}
