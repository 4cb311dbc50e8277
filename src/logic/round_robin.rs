//! Round-robin schedule generation.

use crate::models::{Participant, PlayerId};

/// Every unordered pair of participants exactly once: `n * (n - 1) / 2` pairings.
///
/// For indices `i < j` over the admission order, player A is `participants[i]` and
/// player B is `participants[j]`. No shuffling, so the schedule is reproducible.
pub fn generate_round_robin_pairings(participants: &[Participant]) -> Vec<(PlayerId, PlayerId)> {
    let n = participants.len();
    let mut pairings = Vec::with_capacity(n * n.saturating_sub(1) / 2);
    for (i, first) in participants.iter().enumerate() {
        for second in &participants[i + 1..] {
            pairings.push((first.player_id, second.player_id));
        }
    }
    pairings
}
