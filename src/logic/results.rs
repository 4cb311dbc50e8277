//! Recording match results. The last result of a tournament finishes it.

use crate::logic::setup::load_tournament;
use crate::models::{GameMatch, MatchId, TournamentError, TournamentStatus};
use crate::store::EntityStore;

/// Record `score_a`/`score_b` for a match and finish the tournament if no match is left pending.
///
/// Checks, first failure wins: match exists, its tournament exists and is Started, match is
/// still pending, both scores are non-negative and fit in a `u32`.
pub fn record_match_result<S: EntityStore + ?Sized>(
    store: &mut S,
    match_id: MatchId,
    score_a: i64,
    score_b: i64,
) -> Result<GameMatch, TournamentError> {
    let game = store
        .find_match(match_id)?
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    let tournament = load_tournament(store, game.tournament_id)?;
    tournament.ensure_status(TournamentStatus::Started, "record results")?;

    if game.is_completed() {
        return Err(TournamentError::MatchAlreadyCompleted(match_id));
    }

    let score_a = validate_score(score_a)?;
    let score_b = validate_score(score_b)?;

    let (updated, finished) = store.complete_match(match_id, score_a, score_b)?;
    log::info!(
        "Match {} in tournament {} recorded {}-{}",
        match_id,
        tournament.id,
        score_a,
        score_b
    );

    if finished {
        log::info!("Tournament {} finished", tournament.id);
    }

    Ok(updated)
}

fn validate_score(score: i64) -> Result<u32, TournamentError> {
    u32::try_from(score).map_err(|_| TournamentError::InvalidScore(score))
}
