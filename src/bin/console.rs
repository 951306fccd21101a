//! Console front-end: pick a sport, enter the teams, get the second best.
//! Run with: cargo run --bin console
//! Input (whitespace separated): sport id, number of teams, then the team ids.
//! Set SEED to make the random matches reproducible.

use anyhow::{Context, Result};
use second_best::{resolve, Outcome, RandomOracle, Recorder, Sport, TeamId};
use std::io::{self, Read};

/// Parsed console input.
#[derive(Debug, PartialEq)]
struct Request {
    sport: u32,
    teams: Vec<TeamId>,
}

fn parse_request(input: &str) -> Result<Request> {
    let mut tokens = input.split_whitespace();
    let mut next_number = |what: &str| -> Result<u32> {
        let token = tokens
            .next()
            .with_context(|| format!("expected {}", what))?;
        token
            .parse()
            .with_context(|| format!("{} must be a non-negative number, got {:?}", what, token))
    };

    let sport = next_number("sport")?;
    let count = next_number("number of teams")?;
    let teams = (0..count)
        .map(|i| next_number(&format!("team #{}", i + 1)))
        .collect::<Result<Vec<_>>>()?;
    Ok(Request { sport, teams })
}

fn oracle_from_env() -> Result<RandomOracle> {
    match std::env::var("SEED") {
        Ok(seed) => {
            let seed: u64 = seed.parse().context("SEED must be an unsigned integer")?;
            Ok(RandomOracle::seeded(seed))
        }
        Err(_) => Ok(RandomOracle::from_entropy()),
    }
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    println!("Enter the number type of sport which should be one of  : ");
    for sport in Sport::ALL {
        println!("{}.  {}", sport.id(), sport);
    }
    println!();
    println!("Then the number of participating teams, followed by the teams :");

    let mut input = String::new();
    io::stdin()
        .read_to_string(&mut input)
        .context("failed to read from stdin")?;
    let request = parse_request(&input)?;

    let mut oracle = Recorder::new(oracle_from_env()?);
    let outcome = resolve(&request.teams, request.sport, &mut oracle)?;
    for m in oracle.records() {
        log::debug!("{} vs {}: {} won", m.team_a, m.team_b, m.winner);
    }

    match outcome {
        Outcome::Ok { second_best, .. } => {
            println!("{}", outcome);
            println!("The second winner is team : {}", second_best);
        }
        Outcome::Inadequate { .. } | Outcome::Invalid => println!("{}", outcome),
    }
    Ok(())
}
