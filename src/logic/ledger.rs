//! Defeat ledger: which teams each team has personally beaten.

use crate::models::TeamId;
use std::collections::HashMap;

/// Maps a winner to the teams it has beaten, in the order it beat them.
///
/// A team is only ever beaten once (it leaves the bracket when it loses), so each
/// loser appears under exactly one winner.
#[derive(Clone, Debug, Default)]
pub(crate) struct DefeatLedger {
    defeated: HashMap<TeamId, Vec<TeamId>>,
}

impl DefeatLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `loser` to the teams beaten by `winner`.
    pub fn record(&mut self, winner: TeamId, loser: TeamId) {
        self.defeated.entry(winner).or_default().push(loser);
    }

    /// Teams beaten by `team` so far (empty if it has not won a match).
    #[cfg(test)]
    pub fn defeated_by(&self, team: TeamId) -> &[TeamId] {
        self.defeated.get(&team).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Remove and return the teams beaten by `team`.
    pub fn take_defeated_by(&mut self, team: TeamId) -> Vec<TeamId> {
        self.defeated.remove(&team).unwrap_or_default()
    }

    /// The team that eliminated `loser`, if any.
    #[cfg(test)]
    pub fn beaten_by(&self, loser: TeamId) -> Option<TeamId> {
        self.defeated
            .iter()
            .find(|(_, losers)| losers.contains(&loser))
            .map(|(&winner, _)| winner)
    }

    /// Total number of recorded defeats.
    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.defeated.values().map(Vec::len).sum()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.defeated.is_empty()
    }
}
