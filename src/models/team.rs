//! Team identifiers and played-match records.

use serde::{Deserialize, Serialize};

/// Identifier for a team. Only distinctness matters to the bracket.
pub type TeamId = u32;

/// One played encounter: who met whom, and who won.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub team_a: TeamId,
    pub team_b: TeamId,
    pub winner: TeamId,
}

impl MatchRecord {
    pub fn new(team_a: TeamId, team_b: TeamId, winner: TeamId) -> Self {
        Self {
            team_a,
            team_b,
            winner,
        }
    }

    /// The team that did not win. Assumes `winner` is one of the two teams.
    pub fn loser(&self) -> TeamId {
        if self.winner == self.team_a {
            self.team_b
        } else {
            self.team_a
        }
    }
}
