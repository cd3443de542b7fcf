//! JSON API over uploaded divisions: post a season file, then ask who is eliminated.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default.
//! Override with env: HOST (e.g. 127.0.0.1), PORT (e.g. 8080).
//! Set DIVISION_FILE to a season file to preload it at startup.

use actix_web::{
    delete, get, post,
    web::{Data, Path},
    App, HttpResponse, HttpServer, Responder,
};
use baseball_elimination::{analyze, division_report, DivisionError, Standings, Team};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Unique identifier for an uploaded division.
type DivisionId = Uuid;

/// Per-division entry: the parsed table + last activity time (for auto-cleanup).
struct DivisionEntry {
    standings: Arc<Standings>,
    last_activity: Instant,
}

/// In-memory state: uploaded divisions by ID. Entries are removed after 12h inactivity.
type AppState = Data<RwLock<HashMap<DivisionId, DivisionEntry>>>;

/// Inactivity threshold: divisions not accessed for this long are removed.
const INACTIVITY_TIMEOUT: Duration = Duration::from_secs(12 * 3600);

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

#[derive(Serialize)]
struct DivisionSummary<'a> {
    id: DivisionId,
    teams: &'a [Team],
}

/// Path segment: division id (e.g. /api/divisions/{id})
#[derive(Deserialize)]
struct DivisionPath {
    id: DivisionId,
}

/// Path segments: division id and team name (e.g. /api/divisions/{id}/teams/{name})
#[derive(Deserialize)]
struct DivisionTeamPath {
    id: DivisionId,
    name: String,
}

fn error_response(err: DivisionError) -> HttpResponse {
    match err {
        DivisionError::UnknownTeam(_) => HttpResponse::NotFound().body(err.to_string()),
        DivisionError::MalformedInput { .. } | DivisionError::DegenerateDivision { .. } => {
            HttpResponse::BadRequest().body(err.to_string())
        }
        DivisionError::Io(_) | DivisionError::UnboundedFlow => {
            log::error!("{}", err);
            HttpResponse::InternalServerError().body(err.to_string())
        }
    }
}

/// Fetch a division's table and refresh its last_activity.
fn lookup(state: &AppState, id: DivisionId) -> Result<Arc<Standings>, HttpResponse> {
    let mut g = state
        .write()
        .map_err(|_| HttpResponse::InternalServerError().body("lock error"))?;
    let entry = g
        .get_mut(&id)
        .ok_or_else(|| HttpResponse::NotFound().body("Division not found"))?;
    entry.last_activity = Instant::now();
    Ok(Arc::clone(&entry.standings))
}

fn insert(
    state: &AppState,
    standings: Standings,
) -> Result<(DivisionId, Arc<Standings>), HttpResponse> {
    let id = Uuid::new_v4();
    let standings = Arc::new(standings);
    let mut g = state
        .write()
        .map_err(|_| HttpResponse::InternalServerError().body("lock error"))?;
    g.insert(
        id,
        DivisionEntry {
            standings: Arc::clone(&standings),
            last_activity: Instant::now(),
        },
    );
    Ok((id, standings))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "baseball-elimination",
    })
}

/// Upload a season file (plain-text body). Returns the new division id and its teams.
#[post("/api/divisions")]
async fn api_create_division(state: AppState, body: String) -> HttpResponse {
    let standings = match Standings::parse(&body) {
        Ok(s) => s,
        Err(e) => {
            log::warn!("Rejected season file: {}", e);
            return error_response(e);
        }
    };
    let (id, standings) = match insert(&state, standings) {
        Ok(inserted) => inserted,
        Err(resp) => return resp,
    };
    log::info!("Stored division {} with {} teams", id, standings.team_count());
    HttpResponse::Created().json(DivisionSummary {
        id,
        teams: standings.teams(),
    })
}

#[get("/api/divisions/{id}")]
async fn api_get_division(state: AppState, path: Path<DivisionPath>) -> HttpResponse {
    match lookup(&state, path.id) {
        Ok(standings) => HttpResponse::Ok().json(DivisionSummary {
            id: path.id,
            teams: standings.teams(),
        }),
        Err(resp) => resp,
    }
}

/// Elimination status of every team, in season-file order.
#[get("/api/divisions/{id}/report")]
async fn api_division_report(state: AppState, path: Path<DivisionPath>) -> HttpResponse {
    let standings = match lookup(&state, path.id) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    match division_report(&standings) {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e) => error_response(e),
    }
}

#[get("/api/divisions/{id}/teams/{name}")]
async fn api_team_status(state: AppState, path: Path<DivisionTeamPath>) -> HttpResponse {
    let standings = match lookup(&state, path.id) {
        Ok(s) => s,
        Err(resp) => return resp,
    };
    match analyze(&standings, &path.name) {
        Ok(status) => HttpResponse::Ok().json(status),
        Err(e) => error_response(e),
    }
}

#[delete("/api/divisions/{id}")]
async fn api_delete_division(state: AppState, path: Path<DivisionPath>) -> HttpResponse {
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    match g.remove(&path.id) {
        Some(_) => HttpResponse::NoContent().finish(),
        None => HttpResponse::NotFound().body("Division not found"),
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

    let state: AppState = Data::new(RwLock::new(HashMap::new()));

    if let Ok(path) = std::env::var("DIVISION_FILE") {
        let standings = Standings::from_file(&path).map_err(|e| {
            log::error!("Could not preload {}: {}", path, e);
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        let team_count = standings.team_count();
        let (id, _) = insert(&state, standings)
            .map_err(|_| std::io::Error::new(std::io::ErrorKind::Other, "lock error"))?;
        log::info!("Preloaded division {} ({} teams) from {}", id, team_count, path);
    }

    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    // Background task: every 30 minutes, remove divisions inactive for 12+ hours
    let state_cleanup = state.clone();
    actix_web::rt::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(30 * 60));
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < INACTIVITY_TIMEOUT);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive division(s) (no activity for 12h)", removed);
            }
        }
    });

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .service(api_health)
            .service(api_create_division)
            .service(api_get_division)
            .service(api_division_report)
            .service(api_team_status)
            .service(api_delete_division)
    })
    .bind(bind)?
    .run()
    .await
}
