//! HTTP front-end: resolve a bracket per request, no state kept between requests.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080).

use actix_web::{get, post, web::Json, App, HttpResponse, HttpServer, Responder};
use second_best::models::sport::readable_name;
use second_best::{
    resolve, FirstTeamWins, MatchOracle, MatchRecord, Outcome, RandomOracle, Recorder, Sport,
    StrengthOracle, TeamId,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Which oracle decides the matches of a request.
#[derive(Clone, Copy, Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
enum OracleKind {
    #[default]
    Random,
    FirstTeamWins,
    Strength,
}

#[derive(Deserialize)]
struct ResolveBody {
    /// Missing teams are treated like an empty list.
    #[serde(default)]
    teams: Vec<TeamId>,
    sport: u32,
    #[serde(default)]
    oracle: OracleKind,
    /// Only used by the random oracle.
    seed: Option<u64>,
    /// Only used by the strength oracle.
    #[serde(default)]
    strengths: HashMap<TeamId, u32>,
}

#[derive(Serialize)]
struct ResolveResponse {
    run_id: Uuid,
    sport: u32,
    sport_name: &'static str,
    outcome: Outcome,
    description: String,
    matches: Vec<MatchRecord>,
}

#[derive(Serialize)]
struct SportEntry {
    id: u32,
    name: &'static str,
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "second-best",
    })
}

/// List the supported sports.
#[get("/api/sports")]
async fn api_sports() -> HttpResponse {
    let sports: Vec<SportEntry> = Sport::ALL
        .iter()
        .map(|s| SportEntry {
            id: s.id(),
            name: s.name(),
        })
        .collect();
    HttpResponse::Ok().json(sports)
}

/// Run the bracket with a recording oracle; errors are flattened to their message.
fn run_bracket<O>(
    teams: &[TeamId],
    sport: u32,
    oracle: O,
) -> Result<(Outcome, Vec<MatchRecord>), String>
where
    O: MatchOracle,
    O::Error: std::fmt::Display,
{
    let mut recorder = Recorder::new(oracle);
    let outcome = resolve(teams, sport, &mut recorder).map_err(|e| e.to_string())?;
    Ok((outcome, recorder.into_records()))
}

/// Resolve winner and second best for the given teams.
#[post("/api/resolve")]
async fn api_resolve(body: Json<ResolveBody>) -> HttpResponse {
    let run_id = Uuid::new_v4();
    let result = match body.oracle {
        OracleKind::Random => match body.seed {
            Some(seed) => run_bracket(&body.teams, body.sport, RandomOracle::seeded(seed)),
            None => run_bracket(&body.teams, body.sport, RandomOracle::from_entropy()),
        },
        OracleKind::FirstTeamWins => run_bracket(&body.teams, body.sport, FirstTeamWins),
        OracleKind::Strength => run_bracket(
            &body.teams,
            body.sport,
            StrengthOracle::new(body.strengths.iter().map(|(&team, &s)| (team, s))),
        ),
    };
    match result {
        Ok((outcome, matches)) => {
            log::info!(
                "Run {}: {} team(s), {:?} oracle, {} match(es), {:?}",
                run_id,
                body.teams.len(),
                body.oracle,
                matches.len(),
                outcome.status()
            );
            HttpResponse::Ok().json(ResolveResponse {
                run_id,
                sport: body.sport,
                sport_name: readable_name(body.sport),
                description: outcome.to_string(),
                outcome,
                matches,
            })
        }
        Err(e) => {
            log::warn!("Run {} failed: {}", run_id, e);
            HttpResponse::BadRequest().json(serde_json::json!({ "error": e }))
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| default_host());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or_else(default_port);
    let bind = (host.as_str(), port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    HttpServer::new(|| {
        App::new()
            .service(api_health)
            .service(api_sports)
            .service(api_resolve)
    })
    .bind(bind)?
    .run()
    .await
}
