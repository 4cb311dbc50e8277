//! Tournament business logic: admission, start, round-robin schedule, results, leaderboard.

mod leaderboard;
mod results;
mod round_robin;
mod setup;

pub use leaderboard::{
    compute_leaderboard, Leaderboard, Standing, POINTS_FOR_DRAW, POINTS_FOR_LOSS, POINTS_FOR_WIN,
};
pub use results::record_match_result;
pub use round_robin::generate_round_robin_pairings;
pub use setup::{admit_participant, start_tournament, MAX_PARTICIPANTS, MIN_PARTICIPANTS_TO_START};
