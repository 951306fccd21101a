//! Bracket logic: the match oracles, the defeat ledger and the resolver.

mod ledger;
mod oracle;
mod resolver;

pub use oracle::{FirstTeamWins, MatchOracle, OracleError, RandomOracle, Recorder, StrengthOracle};
pub use resolver::{resolve, resolve_sport};
