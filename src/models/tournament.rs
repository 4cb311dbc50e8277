//! Tournament, TournamentStatus and the errors raised by tournament operations.

use crate::models::game::MatchId;
use crate::models::player::PlayerId;
use crate::store::StoreError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Category of a [`TournamentError`], used by callers to pick a status code or exit code.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorKind {
    NotFound,
    InvalidState,
    Validation,
    CapacityExceeded,
    DuplicateParticipant,
    /// Store-level failure, not a business rule.
    Internal,
}

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TournamentError {
    #[error("Tournament {0} not found")]
    TournamentNotFound(TournamentId),

    #[error("Match {0} not found")]
    MatchNotFound(MatchId),

    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),

    /// The tournament's status forbids the requested action.
    #[error("Cannot {action} while tournament is {status}")]
    InvalidState {
        action: &'static str,
        status: TournamentStatus,
    },

    #[error("Match {0} already has a result")]
    MatchAlreadyCompleted(MatchId),

    #[error("At least {required} participants are required to start (registered {registered})")]
    NotEnoughParticipants { required: usize, registered: usize },

    #[error("Score {0} is not a valid non-negative integer")]
    InvalidScore(i64),

    #[error("Tournament is full. Maximum {capacity} participants allowed")]
    TournamentFull { capacity: usize },

    #[error("Player '{0}' is already in this tournament")]
    DuplicateParticipant(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl TournamentError {
    pub fn kind(&self) -> ErrorKind {
        use TournamentError::*;
        match self {
            TournamentNotFound(_) | MatchNotFound(_) | PlayerNotFound(_) => ErrorKind::NotFound,
            InvalidState { .. } | MatchAlreadyCompleted(_) => ErrorKind::InvalidState,
            NotEnoughParticipants { .. } | InvalidScore(_) => ErrorKind::Validation,
            TournamentFull { .. } => ErrorKind::CapacityExceeded,
            DuplicateParticipant(_) => ErrorKind::DuplicateParticipant,
            Store(_) => ErrorKind::Internal,
        }
    }
}

/// Current phase of the tournament. Only ever moves forward.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentStatus {
    /// Accepting participants; no matches yet.
    #[default]
    Planning,
    /// Schedule generated; results are being recorded.
    Started,
    /// Every match has a result.
    Finished,
}

impl TournamentStatus {
    /// Whether `self -> next` is one of the two legal transitions.
    pub fn can_advance_to(self, next: TournamentStatus) -> bool {
        matches!(
            (self, next),
            (TournamentStatus::Planning, TournamentStatus::Started)
                | (TournamentStatus::Started, TournamentStatus::Finished)
        )
    }
}

impl fmt::Display for TournamentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TournamentStatus::Planning => "planning",
            TournamentStatus::Started => "started",
            TournamentStatus::Finished => "finished",
        };
        f.write_str(s)
    }
}

/// A round-robin tournament. Participants and matches live in the store, keyed by `id`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub status: TournamentStatus,
    pub created_at: DateTime<Utc>,
}

impl Tournament {
    /// Create a new tournament in Planning status.
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            status: TournamentStatus::Planning,
            created_at: Utc::now(),
        }
    }

    /// Fail with `InvalidState` unless the tournament is in `expected` status.
    pub fn ensure_status(
        &self,
        expected: TournamentStatus,
        action: &'static str,
    ) -> Result<(), TournamentError> {
        if self.status != expected {
            return Err(TournamentError::InvalidState {
                action,
                status: self.status,
            });
        }
        Ok(())
    }
}

impl Default for Tournament {
    fn default() -> Self {
        Self::new()
    }
}
