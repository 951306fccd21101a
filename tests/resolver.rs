//! Integration tests for bracket resolution: degenerate input, match order and runner-up choice.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use second_best::{
    resolve, resolve_sport, FirstTeamWins, MatchRecord, OracleError, Outcome, OutcomeStatus,
    RandomOracle, Recorder, ResolveError, Sport, StrengthOracle, TeamId,
};
use std::collections::HashSet;
use std::convert::Infallible;

const ARCHERY: u32 = 5;

/// Oracle that counts calls and always picks the first team.
fn counting_oracle(
    calls: &mut usize,
) -> impl FnMut(TeamId, TeamId, Sport) -> Result<TeamId, Infallible> + '_ {
    move |a, _b, _sport| {
        *calls += 1;
        Ok(a)
    }
}

fn played(records: &[MatchRecord]) -> Vec<(TeamId, TeamId)> {
    records.iter().map(|r| (r.team_a, r.team_b)).collect()
}

#[test]
fn no_teams_is_invalid_without_matches() {
    let mut calls = 0;
    let outcome = resolve(&[], ARCHERY, &mut counting_oracle(&mut calls)).unwrap();
    assert_eq!(outcome, Outcome::Invalid);
    assert_eq!(outcome.status(), OutcomeStatus::Invalid);
    assert_eq!(calls, 0);
}

#[test]
fn single_team_is_inadequate_without_matches() {
    let mut calls = 0;
    let outcome = resolve(&[4], ARCHERY, &mut counting_oracle(&mut calls)).unwrap();
    assert_eq!(outcome, Outcome::Inadequate { winner: 4 });
    assert_eq!(outcome.winner(), Some(4));
    assert_eq!(outcome.second_best(), None);
    assert_eq!(calls, 0);
}

#[test]
fn unsupported_kind_fails_before_any_match() {
    for kind in [0, 6, 99] {
        let mut calls = 0;
        let err = resolve(&[1, 2, 3], kind, &mut counting_oracle(&mut calls)).unwrap_err();
        assert_eq!(err, ResolveError::UnsupportedKind(kind));
        assert_eq!(calls, 0);
    }
    let mut calls = 0;
    assert!(resolve(&[], 0, &mut counting_oracle(&mut calls)).is_err());
}

#[test]
fn duplicate_team_fails_before_any_match() {
    let cases: [(&[TeamId], TeamId); 3] = [(&[1, 1, 2], 1), (&[7, 7], 7), (&[4, 5, 6, 5, 4], 5)];
    for (teams, repeated) in cases {
        let mut calls = 0;
        let err = resolve(teams, ARCHERY, &mut counting_oracle(&mut calls)).unwrap_err();
        assert_eq!(err, ResolveError::DuplicateTeam(repeated));
        assert_eq!(calls, 0);
    }
}

#[test]
fn unsupported_kind_is_reported_before_duplicates() {
    let mut calls = 0;
    let err = resolve(&[3, 3], 0, &mut counting_oracle(&mut calls)).unwrap_err();
    assert_eq!(err, ResolveError::UnsupportedKind(0));
}

#[test]
fn first_team_wins_even_bracket() {
    let outcome = resolve(&[1, 2, 3, 4, 5, 6], ARCHERY, &mut FirstTeamWins).unwrap();
    assert_eq!(
        outcome,
        Outcome::Ok {
            winner: 5,
            second_best: 6
        }
    );
}

#[test]
fn first_team_wins_odd_bracket() {
    let outcome = resolve(&[1, 2, 3, 4, 5], ARCHERY, &mut FirstTeamWins).unwrap();
    assert_eq!(
        outcome,
        Outcome::Ok {
            winner: 3,
            second_best: 4
        }
    );
}

#[test]
fn first_team_wins_match_sequence() {
    let mut oracle = Recorder::new(FirstTeamWins);
    resolve(&[1, 2, 3, 4, 5, 6], ARCHERY, &mut oracle).unwrap();
    assert_eq!(
        played(oracle.records()),
        vec![(1, 2), (3, 4), (5, 6), (1, 3), (5, 1), (6, 1)]
    );
}

#[test]
fn matches_only_involve_teams_still_in_contention() {
    let teams = [4, 5, 6, 3, 1, 7];
    for seed in 0..20 {
        let mut oracle = Recorder::new(RandomOracle::seeded(seed));
        let outcome = resolve(&teams, ARCHERY, &mut oracle).unwrap();
        assert_eq!(outcome.status(), OutcomeStatus::Ok);
        let records = oracle.records();

        // Five matches settle the champion of six teams, starting with the front pair.
        assert_eq!((records[0].team_a, records[0].team_b), (4, 5));
        let champion = records[4].winner;
        assert_eq!(outcome.winner(), Some(champion));

        let mut alive: HashSet<TeamId> = teams.iter().copied().collect();
        let mut beaten_by_champion = Vec::new();
        for r in &records[..5] {
            assert!(alive.contains(&r.team_a) && alive.contains(&r.team_b));
            assert!(r.winner == r.team_a || r.winner == r.team_b);
            alive.remove(&r.loser());
            if r.winner == champion {
                beaten_by_champion.push(r.loser());
            }
        }
        assert_eq!(alive, HashSet::from([champion]));

        // The playoff for second place is among the champion's victims only.
        let mut contenders: HashSet<TeamId> = beaten_by_champion.iter().copied().collect();
        for r in &records[5..] {
            assert!(contenders.contains(&r.team_a) && contenders.contains(&r.team_b));
            contenders.remove(&r.loser());
        }
        assert_eq!(records.len(), 5 + beaten_by_champion.len() - 1);
        let survivors: Vec<TeamId> = contenders.into_iter().collect();
        assert_eq!(survivors, vec![outcome.second_best().unwrap()]);
    }
}

#[test]
fn second_best_was_beaten_by_the_champion() {
    for n in 2..=33u32 {
        let teams: Vec<TeamId> = (100..100 + n).collect();
        for seed in 0..5 {
            let mut oracle = Recorder::new(RandomOracle::seeded(u64::from(n) * 31 + seed));
            let outcome = resolve_sport(&teams, Sport::Football, &mut oracle).unwrap();
            let (winner, second) = match outcome {
                Outcome::Ok {
                    winner,
                    second_best,
                } => (winner, second_best),
                other => panic!("unexpected outcome {:?}", other),
            };
            assert_ne!(winner, second);
            assert!(oracle
                .records()
                .iter()
                .any(|r| r.winner == winner && r.loser() == second));
        }
    }
}

#[test]
fn power_of_two_bracket_uses_minimum_matches() {
    // n - 1 matches for the champion, log2(n) - 1 more for the runner-up.
    for (n, log2) in [(2u32, 1usize), (4, 2), (8, 3), (16, 4), (64, 6)] {
        let teams: Vec<TeamId> = (1..=n).collect();
        let mut oracle = Recorder::new(RandomOracle::seeded(u64::from(n)));
        resolve_sport(&teams, Sport::Swimming, &mut oracle).unwrap();
        assert_eq!(oracle.records().len(), n as usize - 1 + log2 - 1);
    }
}

#[test]
fn strength_oracle_finds_true_top_two() {
    let mut rng = StdRng::seed_from_u64(2024);
    for n in [2usize, 3, 5, 6, 9, 17, 40] {
        let mut teams: Vec<TeamId> = (1..=n as TeamId).collect();
        teams.shuffle(&mut rng);
        // Strength equals the id, so the best two are n and n - 1.
        let mut oracle = StrengthOracle::new(teams.iter().map(|&t| (t, t)));
        let outcome = resolve_sport(&teams, Sport::Hockey, &mut oracle).unwrap();
        assert_eq!(
            outcome,
            Outcome::Ok {
                winner: n as TeamId,
                second_best: n as TeamId - 1
            }
        );
    }
}

#[test]
fn repeated_runs_give_identical_outcomes() {
    let teams = [9, 2, 7, 4, 11, 3, 8];
    let first = resolve(&teams, 2, &mut FirstTeamWins).unwrap();
    let second = resolve(&teams, 2, &mut FirstTeamWins).unwrap();
    assert_eq!(first, second);

    let mut a = Recorder::new(RandomOracle::seeded(5));
    let mut b = Recorder::new(RandomOracle::seeded(5));
    assert_eq!(
        resolve(&teams, 2, &mut a).unwrap(),
        resolve(&teams, 2, &mut b).unwrap()
    );
    assert_eq!(a.records(), b.records());
}

#[test]
fn oracle_error_propagates_unchanged() {
    let mut oracle = StrengthOracle::new([(1, 5), (2, 3)]);
    let err = resolve(&[1, 2, 3, 4], ARCHERY, &mut oracle).unwrap_err();
    assert_eq!(err, ResolveError::Oracle(OracleError::UnknownTeam(3)));
}

#[test]
fn oracle_naming_an_outsider_is_rejected() {
    let mut oracle = |_a: TeamId, _b: TeamId, _s: Sport| -> Result<TeamId, Infallible> { Ok(42) };
    let err = resolve(&[1, 2], ARCHERY, &mut oracle).unwrap_err();
    assert_eq!(
        err,
        ResolveError::ForeignWinner {
            team_a: 1,
            team_b: 2,
            returned: 42
        }
    );
}

#[test]
fn oracle_sees_requested_sport() {
    let mut seen = Vec::new();
    let mut oracle = |a: TeamId, _b: TeamId, sport: Sport| -> Result<TeamId, Infallible> {
        seen.push(sport);
        Ok(a)
    };
    resolve(&[1, 2, 3], 3, &mut oracle).unwrap();
    assert_eq!(seen, vec![Sport::Football, Sport::Football]);
}
