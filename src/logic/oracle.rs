//! Match oracles: whatever decides who wins a single encounter.
//!
//! The bracket never simulates a sport itself. It asks a [`MatchOracle`] for the
//! winner of each pairing and trusts the answer.

use crate::models::{MatchRecord, Sport, TeamId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashMap;
use std::convert::Infallible;

/// Decides the winner of one match between two teams.
pub trait MatchOracle {
    type Error;

    /// Play `team_a` against `team_b` and return the winner, which must be one of the two.
    fn match_winner(
        &mut self,
        team_a: TeamId,
        team_b: TeamId,
        sport: Sport,
    ) -> Result<TeamId, Self::Error>;
}

impl<F, E> MatchOracle for F
where
    F: FnMut(TeamId, TeamId, Sport) -> Result<TeamId, E>,
{
    type Error = E;

    fn match_winner(
        &mut self,
        team_a: TeamId,
        team_b: TeamId,
        sport: Sport,
    ) -> Result<TeamId, E> {
        self(team_a, team_b, sport)
    }
}

/// Errors raised by the oracles in this module.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum OracleError {
    /// The team has no entry in the strength table.
    UnknownTeam(TeamId),
}

impl std::fmt::Display for OracleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OracleError::UnknownTeam(id) => write!(f, "No strength known for team {}", id),
        }
    }
}

impl std::error::Error for OracleError {}

/// The first team named always wins.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstTeamWins;

impl MatchOracle for FirstTeamWins {
    type Error = Infallible;

    fn match_winner(
        &mut self,
        team_a: TeamId,
        _team_b: TeamId,
        _sport: Sport,
    ) -> Result<TeamId, Infallible> {
        Ok(team_a)
    }
}

/// Fair coin flip per match.
#[derive(Clone, Debug)]
pub struct RandomOracle<R = StdRng> {
    rng: R,
}

impl<R: Rng> RandomOracle<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomOracle<StdRng> {
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible coin flips for the same seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MatchOracle for RandomOracle<R> {
    type Error = Infallible;

    fn match_winner(
        &mut self,
        team_a: TeamId,
        team_b: TeamId,
        _sport: Sport,
    ) -> Result<TeamId, Infallible> {
        Ok(if self.rng.gen_bool(0.5) { team_a } else { team_b })
    }
}

/// Fixed strength table: the stronger team wins, equal strength goes to `team_a`.
#[derive(Clone, Debug, Default)]
pub struct StrengthOracle {
    strengths: HashMap<TeamId, u32>,
}

impl StrengthOracle {
    pub fn new(strengths: impl IntoIterator<Item = (TeamId, u32)>) -> Self {
        Self {
            strengths: strengths.into_iter().collect(),
        }
    }

    fn strength(&self, team: TeamId) -> Result<u32, OracleError> {
        self.strengths
            .get(&team)
            .copied()
            .ok_or(OracleError::UnknownTeam(team))
    }
}

impl MatchOracle for StrengthOracle {
    type Error = OracleError;

    fn match_winner(
        &mut self,
        team_a: TeamId,
        team_b: TeamId,
        _sport: Sport,
    ) -> Result<TeamId, OracleError> {
        let a = self.strength(team_a)?;
        let b = self.strength(team_b)?;
        Ok(if b > a { team_b } else { team_a })
    }
}

/// Wraps another oracle and keeps every played match, in call order.
#[derive(Clone, Debug)]
pub struct Recorder<O> {
    inner: O,
    records: Vec<MatchRecord>,
}

impl<O: MatchOracle> Recorder<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            records: Vec::new(),
        }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn into_records(self) -> Vec<MatchRecord> {
        self.records
    }
}

impl<O: MatchOracle> MatchOracle for Recorder<O> {
    type Error = O::Error;

    fn match_winner(
        &mut self,
        team_a: TeamId,
        team_b: TeamId,
        sport: Sport,
    ) -> Result<TeamId, O::Error> {
        let winner = self.inner.match_winner(team_a, team_b, sport)?;
        self.records.push(MatchRecord::new(team_a, team_b, winner));
        Ok(winner)
    }
}
