//! Second-best finder: a single-elimination bracket that reports the champion and
//! the true runner-up, with the match outcome decided by an injected oracle.

pub mod logic;
pub mod models;

pub use logic::{
    resolve, resolve_sport, FirstTeamWins, MatchOracle, OracleError, RandomOracle, Recorder,
    StrengthOracle,
};
pub use models::{MatchRecord, Outcome, OutcomeStatus, ResolveError, Sport, TeamId};
