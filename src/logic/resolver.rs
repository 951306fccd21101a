//! Champion and runner-up resolution for a single-elimination bracket.
//!
//! Teams are played off the front of a queue in pairs; each winner goes to the
//! back. Because the queue is consumed strictly in order, teams only meet others
//! at the same depth of the bracket (an odd team out carries over one level).
//! Once one team is left it is the champion. The runner-up can only be a team the
//! champion beat itself, so those teams are played down the same way.

use crate::logic::ledger::DefeatLedger;
use crate::logic::oracle::MatchOracle;
use crate::models::{Outcome, ResolveError, Sport, TeamId};
use std::collections::{HashSet, VecDeque};

/// Resolve a bracket for a raw match-kind id.
///
/// An id outside the sport catalog fails with [`ResolveError::UnsupportedKind`]
/// before anything else is looked at.
pub fn resolve<O: MatchOracle>(
    teams: &[TeamId],
    kind: u32,
    oracle: &mut O,
) -> Result<Outcome, ResolveError<O::Error>> {
    let sport = Sport::from_id(kind).ok_or(ResolveError::UnsupportedKind(kind))?;
    resolve_sport(teams, sport, oracle)
}

/// Resolve a bracket for an already validated sport.
///
/// - no teams: [`Outcome::Invalid`]
/// - one team: [`Outcome::Inadequate`] with that team as winner
/// - otherwise: [`Outcome::Ok`] with the champion and the runner-up
///
/// A team entered twice fails with [`ResolveError::DuplicateTeam`]. The oracle is only
/// consulted for a bracket of two or more distinct teams, once per match, in bracket order.
pub fn resolve_sport<O: MatchOracle>(
    teams: &[TeamId],
    sport: Sport,
    oracle: &mut O,
) -> Result<Outcome, ResolveError<O::Error>> {
    match teams {
        [] => return Ok(Outcome::Invalid),
        [only] => return Ok(Outcome::Inadequate { winner: *only }),
        _ => {}
    }
    if let Some(team) = first_duplicate(teams) {
        return Err(ResolveError::DuplicateTeam(team));
    }

    let mut ledger = DefeatLedger::new();
    let mut bracket: VecDeque<TeamId> = teams.iter().copied().collect();
    let winner = play_down(&mut bracket, &mut ledger, sport, oracle)?;

    let mut contenders: VecDeque<TeamId> = ledger.take_defeated_by(winner).into();
    assert!(
        !contenders.is_empty(),
        "champion {} of {} teams beat nobody",
        winner,
        teams.len()
    );
    let second_best = play_down(&mut contenders, &mut ledger, sport, oracle)?;

    log::info!(
        "{} bracket of {} teams: winner {}, second best {}",
        sport,
        teams.len(),
        winner,
        second_best
    );
    Ok(Outcome::Ok {
        winner,
        second_best,
    })
}

/// First team id that appears more than once, in input order.
fn first_duplicate(teams: &[TeamId]) -> Option<TeamId> {
    let mut seen = HashSet::with_capacity(teams.len());
    teams.iter().copied().find(|&team| !seen.insert(team))
}

/// Play the queue until one team is left and return it.
fn play_down<O: MatchOracle>(
    queue: &mut VecDeque<TeamId>,
    ledger: &mut DefeatLedger,
    sport: Sport,
    oracle: &mut O,
) -> Result<TeamId, ResolveError<O::Error>> {
    loop {
        match (queue.pop_front(), queue.pop_front()) {
            (Some(team_a), Some(team_b)) => {
                let winner = oracle
                    .match_winner(team_a, team_b, sport)
                    .map_err(ResolveError::Oracle)?;
                let loser = if winner == team_a {
                    team_b
                } else if winner == team_b {
                    team_a
                } else {
                    return Err(ResolveError::ForeignWinner {
                        team_a,
                        team_b,
                        returned: winner,
                    });
                };
                log::debug!("{}: {} beat {}", sport, winner, loser);
                ledger.record(winner, loser);
                queue.push_back(winner);
            }
            (Some(survivor), None) => return Ok(survivor),
            (None, _) => unreachable!("bracket played down from an empty queue"),
        }
    }
}
