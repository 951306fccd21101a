//! Data structures for the bracket: teams, sports, outcomes.

mod outcome;
pub mod sport;
mod team;

pub use outcome::{Outcome, OutcomeStatus, ResolveError};
pub use sport::Sport;
pub use team::{MatchRecord, TeamId};
