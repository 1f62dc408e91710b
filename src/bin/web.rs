//! Single binary web server: HTML from templates/, static from /static, API via REST.
//! Run with: cargo run --bin web
//! Listens on 0.0.0.0:8080 by default. Override with env: HOST, PORT, GENERATE_DELAY_MS,
//! SESSION_TTL_HOURS, SESSION_SECRET.

use actix_files::Files;
use actix_session::{storage::CookieSessionStore, Session, SessionMiddleware};
use actix_web::{
    cookie::Key,
    delete, get, post, put,
    web::{self, Data, Json, Path},
    App, HttpResponse, HttpServer, Responder,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::RwLock;
use std::time::Instant;
use team_draw_web::persistence::{self, MemoryStore};
use team_draw_web::{
    coerce_score, schedule_to_csv, MatchDuration, MatchId, ServerConfig, SessionPhase,
    TournamentError, TournamentFormat, TournamentSession, TournamentState,
};
use uuid::Uuid;

/// Per-browser entry: the persisted snapshot store + last activity time (for auto-cleanup).
struct SessionEntry {
    store: MemoryStore,
    last_activity: Instant,
}

/// In-memory state: one store per browser session id. Idle entries are removed periodically.
type AppState = Data<RwLock<HashMap<Uuid, SessionEntry>>>;

/// Cookie session key holding the browser's session id.
const SESSION_ID_KEY: &str = "session_id";

#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
    service: &'static str,
}

/// Tournament snapshot plus derived display fields.
#[derive(Serialize)]
struct StateResponse<'a> {
    phase: SessionPhase,
    format_name: &'static str,
    #[serde(flatten)]
    state: &'a TournamentState,
}

impl<'a> StateResponse<'a> {
    fn new(session: &'a TournamentSession) -> Self {
        Self {
            phase: session.phase(),
            format_name: session.state().format.display_name(),
            state: session.state(),
        }
    }
}

#[derive(Deserialize)]
struct NameBody {
    name: String,
}

#[derive(Deserialize)]
struct SettingsBody {
    format: Option<TournamentFormat>,
    match_duration: Option<MatchDuration>,
    rules: Option<String>,
}

/// Scores arrive as whatever the form sent; coerced to non-negative integers.
#[derive(Deserialize)]
struct ResultBody {
    #[serde(default)]
    home_score: Value,
    #[serde(default)]
    away_score: Value,
}

/// This browser's session id, minting a new one on first visit.
fn session_id(session: &Session) -> Uuid {
    match session.get::<Uuid>(SESSION_ID_KEY) {
        Ok(Some(id)) => id,
        _ => {
            let id = Uuid::new_v4();
            if let Err(e) = session.insert(SESSION_ID_KEY, id) {
                log::warn!("Could not store session id: {}", e);
            }
            id
        }
    }
}

/// Rehydrate this browser's tournament, apply `op`, persist and respond with the new state.
fn with_tournament<F>(state: &AppState, session: &Session, op: F) -> HttpResponse
where
    F: FnOnce(&mut TournamentSession) -> Result<(), TournamentError>,
{
    let id = session_id(session);
    let mut g = match state.write() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let entry = g.entry(id).or_insert_with(|| SessionEntry {
        store: MemoryStore::new(),
        last_activity: Instant::now(),
    });
    entry.last_activity = Instant::now();

    let mut tournament = persistence::load(&entry.store);
    if let Err(e) = op(&mut tournament) {
        return HttpResponse::BadRequest().json(serde_json::json!({ "error": e.to_string() }));
    }
    if let Err(e) = persistence::save(&tournament, &mut entry.store) {
        log::error!("Failed to save tournament state: {}", e);
        return HttpResponse::InternalServerError().body("save error");
    }
    HttpResponse::Ok().json(StateResponse::new(&tournament))
}

#[get("/api/health")]
async fn api_health() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        ok: true,
        service: "team-draw-web",
    })
}

/// Avoid 404 in browser tab: favicon not required for app logic.
#[get("/favicon.ico")]
async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

/// Current state (creates an empty tournament on first visit).
#[get("/api/state")]
async fn api_get_state(state: AppState, session: Session) -> HttpResponse {
    with_tournament(&state, &session, |_| Ok(()))
}

#[post("/api/players")]
async fn api_add_player(state: AppState, session: Session, body: Json<NameBody>) -> HttpResponse {
    with_tournament(&state, &session, |t| t.add_player(body.name.as_str()))
}

/// Remove a player by list position (out of range is ignored).
#[delete("/api/players/{index}")]
async fn api_remove_player(state: AppState, session: Session, path: Path<usize>) -> HttpResponse {
    let index = path.into_inner();
    with_tournament(&state, &session, |t| {
        t.remove_player(index);
        Ok(())
    })
}

#[post("/api/teams")]
async fn api_add_team(state: AppState, session: Session, body: Json<NameBody>) -> HttpResponse {
    with_tournament(&state, &session, |t| t.add_team(body.name.as_str()))
}

/// Remove a team by list position (out of range is ignored).
#[delete("/api/teams/{index}")]
async fn api_remove_team(state: AppState, session: Session, path: Path<usize>) -> HttpResponse {
    let index = path.into_inner();
    with_tournament(&state, &session, |t| {
        t.remove_team(index);
        Ok(())
    })
}

/// Update format, match duration and/or rules text. Omitted fields stay unchanged.
#[put("/api/settings")]
async fn api_update_settings(
    state: AppState,
    session: Session,
    body: Json<SettingsBody>,
) -> HttpResponse {
    let body = body.into_inner();
    with_tournament(&state, &session, move |t| {
        if let Some(format) = body.format {
            t.set_format(format);
        }
        if let Some(duration) = body.match_duration {
            t.set_match_duration(duration);
        }
        if let Some(rules) = body.rules {
            t.set_rules(rules);
        }
        Ok(())
    })
}

/// Draw teams and generate the schedule.
#[post("/api/generate")]
async fn api_generate(state: AppState, config: Data<ServerConfig>, session: Session) -> HttpResponse {
    if !config.generate_delay.is_zero() {
        tokio::time::sleep(config.generate_delay).await;
    }
    with_tournament(&state, &session, |t| t.generate())
}

/// Record a match score (unknown ids are ignored).
#[put("/api/matches/{id}/result")]
async fn api_record_result(
    state: AppState,
    session: Session,
    path: Path<MatchId>,
    body: Json<ResultBody>,
) -> HttpResponse {
    let match_id = path.into_inner();
    let home = coerce_score(&body.home_score);
    let away = coerce_score(&body.away_score);
    with_tournament(&state, &session, |t| {
        t.record_result(match_id, home, away);
        Ok(())
    })
}

/// Clear everything and start over.
#[post("/api/reset")]
async fn api_reset(state: AppState, session: Session) -> HttpResponse {
    with_tournament(&state, &session, |t| {
        t.reset();
        Ok(())
    })
}

/// Download the current schedule as CSV.
#[get("/api/schedule.csv")]
async fn api_schedule_csv(state: AppState, session: Session) -> HttpResponse {
    let id = session_id(&session);
    let g = match state.read() {
        Ok(guard) => guard,
        Err(_) => return HttpResponse::InternalServerError().body("lock error"),
    };
    let tournament = match g.get(&id) {
        Some(entry) => persistence::load(&entry.store),
        None => TournamentSession::new(),
    };
    match schedule_to_csv(tournament.state().matches.as_slice()) {
        Ok(csv) => HttpResponse::Ok()
            .content_type("text/csv; charset=utf-8")
            .insert_header(("Content-Disposition", "attachment; filename=\"schedule.csv\""))
            .body(csv),
        Err(e) => {
            log::error!("CSV export failed: {}", e);
            HttpResponse::InternalServerError().body("export error")
        }
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = ServerConfig::from_env();
    let bind = (config.host.clone(), config.port);
    log::info!("Starting server at http://{}:{}", bind.0, bind.1);

    let key = match config.session_secret.as_deref() {
        Some(secret) => Key::from(secret),
        None => {
            log::info!("SESSION_SECRET not set; sessions will not survive a restart");
            Key::generate()
        }
    };

    let state = Data::new(RwLock::new(HashMap::<Uuid, SessionEntry>::new()));

    // Background task: periodically remove sessions idle for longer than the TTL
    let state_cleanup = state.clone();
    let ttl = config.session_ttl;
    let cleanup_interval = config.cleanup_interval;
    actix_web::rt::spawn(async move {
        let mut interval = actix_web::rt::time::interval(cleanup_interval);
        loop {
            interval.tick().await;
            let mut g = match state_cleanup.write() {
                Ok(guard) => guard,
                Err(_) => continue,
            };
            let before = g.len();
            g.retain(|_, entry| entry.last_activity.elapsed() < ttl);
            let removed = before - g.len();
            if removed > 0 {
                log::info!("Cleaned up {} inactive session(s)", removed);
            }
        }
    });

    let config = Data::new(config);
    HttpServer::new(move || {
        App::new()
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), key.clone())
                    .cookie_secure(false)
                    .build(),
            )
            .app_data(state.clone())
            .app_data(config.clone())
            .route("/", web::get().to(serve_index_async))
            .service(api_health)
            .service(favicon)
            .service(api_get_state)
            .service(api_add_player)
            .service(api_remove_player)
            .service(api_add_team)
            .service(api_remove_team)
            .service(api_update_settings)
            .service(api_generate)
            .service(api_record_result)
            .service(api_reset)
            .service(api_schedule_csv)
            .service(Files::new("/static", "static"))
    })
    .bind(bind)?
    .run()
    .await
}

async fn serve_index_async() -> HttpResponse {
    let html = include_str!("../../templates/index.html");
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html)
}
