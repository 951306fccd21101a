//! Outcome of a resolution and the errors that can stop one.

use crate::models::team::TeamId;
use serde::{Deserialize, Serialize};

const INVALID_DESC: &str =
    "The data provided is invalid. This could be because you have provided no data at all";

const INADEQUATE_DESC: &str = "The data provided is inadequate. This could be because you have \
     provided only one team. In this case, there can be no second best team";

const OK_DESC: &str = "The data provided is correct and the correct result is provided";

/// Result of running a bracket.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Two or more teams played; both places are known.
    Ok { winner: TeamId, second_best: TeamId },
    /// A single team entered. It wins by default and there is no second place.
    Inadequate { winner: TeamId },
    /// No teams entered.
    Invalid,
}

/// Status tag of an [`Outcome`], without its payload.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Ok,
    Inadequate,
    Invalid,
}

impl Outcome {
    pub fn status(&self) -> OutcomeStatus {
        match self {
            Outcome::Ok { .. } => OutcomeStatus::Ok,
            Outcome::Inadequate { .. } => OutcomeStatus::Inadequate,
            Outcome::Invalid => OutcomeStatus::Invalid,
        }
    }

    pub fn winner(&self) -> Option<TeamId> {
        match *self {
            Outcome::Ok { winner, .. } | Outcome::Inadequate { winner } => Some(winner),
            Outcome::Invalid => None,
        }
    }

    pub fn second_best(&self) -> Option<TeamId> {
        match *self {
            Outcome::Ok { second_best, .. } => Some(second_best),
            _ => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Invalid => f.write_str(INVALID_DESC),
            Outcome::Inadequate { .. } => f.write_str(INADEQUATE_DESC),
            Outcome::Ok {
                winner,
                second_best,
            } => write!(
                f,
                "{}: winner = {}, second winner = {}",
                OK_DESC, winner, second_best
            ),
        }
    }
}

/// Errors that stop a resolution. `E` is the match oracle's own error type.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ResolveError<E> {
    /// The match kind is not in the sport catalog. Raised before any match is played.
    UnsupportedKind(u32),
    /// The same team was entered more than once. Raised before any match is played.
    DuplicateTeam(TeamId),
    /// The oracle named a winner that was not one of the two teams it was given.
    ForeignWinner {
        team_a: TeamId,
        team_b: TeamId,
        returned: TeamId,
    },
    /// The oracle failed; its error is passed through untouched.
    Oracle(E),
}

impl<E: std::fmt::Display> std::fmt::Display for ResolveError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ResolveError::UnsupportedKind(kind) => {
                write!(f, "This sport is not currently supported (kind {})", kind)
            }
            ResolveError::DuplicateTeam(team) => {
                write!(f, "Team {} was entered more than once", team)
            }
            ResolveError::ForeignWinner {
                team_a,
                team_b,
                returned,
            } => write!(
                f,
                "Match between {} and {} reported {} as the winner",
                team_a, team_b, returned
            ),
            ResolveError::Oracle(e) => write!(f, "Match could not be played: {}", e),
        }
    }
}

impl<E: std::fmt::Debug + std::fmt::Display> std::error::Error for ResolveError<E> {}
