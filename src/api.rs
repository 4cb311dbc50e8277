//! REST API over [`TournamentService`]. Errors map to status codes by [`ErrorKind`] only.

use crate::models::{ErrorKind, TournamentError, TournamentId};
use crate::service::TournamentService;
use crate::store::MemoryStore;
use actix_web::{
    error::InternalError,
    get,
    http::StatusCode,
    patch, post,
    web::{self, Data, Json, Path},
    HttpResponse, ResponseError,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

/// Shared application state: the service over the in-memory store.
pub type AppState = Data<TournamentService<MemoryStore>>;

type ApiResult = Result<HttpResponse, TournamentError>;

#[derive(Serialize)]
struct ApiResponse<T: Serialize> {
    success: bool,
    data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

fn ok_json<T: Serialize>(status: StatusCode, data: T, message: Option<String>) -> HttpResponse {
    HttpResponse::build(status).json(ApiResponse {
        success: true,
        data,
        message,
    })
}

fn error_json(status: StatusCode, message: impl Into<String>) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "success": false, "error": message.into() }))
}

impl ResponseError for TournamentError {
    fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Validation
            | ErrorKind::InvalidState
            | ErrorKind::CapacityExceeded
            | ErrorKind::DuplicateParticipant => StatusCode::BAD_REQUEST,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.kind() == ErrorKind::Internal {
            log::error!("Internal error: {}", self);
            return error_json(self.status_code(), "An internal error occurred");
        }
        error_json(self.status_code(), self.to_string())
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    timestamp: chrono::DateTime<chrono::Utc>,
}

#[derive(Deserialize)]
struct AddParticipantBody {
    name: String,
}

#[derive(Deserialize)]
struct RecordResultBody {
    #[serde(rename = "scoreA", alias = "score_a")]
    score_a: i64,
    #[serde(rename = "scoreB", alias = "score_b")]
    score_b: i64,
}

/// Path segment: tournament id (e.g. /api/tournaments/{id})
#[derive(Deserialize)]
struct TournamentPath {
    id: TournamentId,
}

/// Path segment: match id (e.g. /api/matches/{match_id}/result)
#[derive(Deserialize)]
struct MatchPath {
    match_id: Uuid,
}

#[get("/health")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        timestamp: chrono::Utc::now(),
    })
}

#[post("/api/tournaments")]
async fn api_create_tournament(state: AppState) -> ApiResult {
    let tournament = state.create_tournament()?;
    Ok(ok_json(StatusCode::CREATED, tournament, None))
}

#[get("/api/tournaments")]
async fn api_list_tournaments(state: AppState) -> ApiResult {
    Ok(ok_json(StatusCode::OK, state.list_tournaments()?, None))
}

#[get("/api/tournaments/{id}")]
async fn api_get_tournament(state: AppState, path: Path<TournamentPath>) -> ApiResult {
    Ok(ok_json(StatusCode::OK, state.get_tournament(path.id)?, None))
}

/// Add a participant by name (tournament must be in planning).
#[post("/api/tournaments/{id}/participants")]
async fn api_add_participant(
    state: AppState,
    path: Path<TournamentPath>,
    body: Json<AddParticipantBody>,
) -> ApiResult {
    let name = body.name.trim();
    if name.is_empty() {
        return Ok(error_json(
            StatusCode::BAD_REQUEST,
            "Player name is required and must be a non-empty string",
        ));
    }
    let player = state.admit_participant(path.id, name)?;
    let message = format!("Player '{}' added to tournament", player.name);
    Ok(ok_json(StatusCode::CREATED, player, Some(message)))
}

#[get("/api/tournaments/{id}/participants")]
async fn api_list_participants(state: AppState, path: Path<TournamentPath>) -> ApiResult {
    Ok(ok_json(StatusCode::OK, state.list_participants(path.id)?, None))
}

/// Start the tournament and generate all round-robin matches.
#[patch("/api/tournaments/{id}/start")]
async fn api_start_tournament(state: AppState, path: Path<TournamentPath>) -> ApiResult {
    let tournament = state.start_tournament(path.id)?;
    Ok(ok_json(
        StatusCode::OK,
        tournament,
        Some("Tournament started successfully".to_string()),
    ))
}

#[get("/api/tournaments/{id}/matches")]
async fn api_list_matches(state: AppState, path: Path<TournamentPath>) -> ApiResult {
    Ok(ok_json(StatusCode::OK, state.list_matches(path.id)?, None))
}

#[get("/api/tournaments/{id}/leaderboard")]
async fn api_leaderboard(state: AppState, path: Path<TournamentPath>) -> ApiResult {
    Ok(ok_json(StatusCode::OK, state.leaderboard(path.id)?, None))
}

/// Record both scores of a match (tournament must be started).
#[post("/api/matches/{match_id}/result")]
async fn api_record_result(
    state: AppState,
    path: Path<MatchPath>,
    body: Json<RecordResultBody>,
) -> ApiResult {
    let game = state.record_match_result(path.match_id, body.score_a, body.score_b)?;
    Ok(ok_json(
        StatusCode::OK,
        game,
        Some("Match result recorded successfully".to_string()),
    ))
}

/// Register all routes plus JSON/path extractor error envelopes.
pub fn configure(cfg: &mut web::ServiceConfig) {
    let json_config = web::JsonConfig::default().error_handler(|err, _req| {
        let response = error_json(StatusCode::BAD_REQUEST, format!("Invalid request body: {err}"));
        InternalError::from_response(err, response).into()
    });
    // Malformed ids can never match a stored record.
    let path_config = web::PathConfig::default().error_handler(|err, _req| {
        let response = error_json(StatusCode::NOT_FOUND, "Resource not found");
        InternalError::from_response(err, response).into()
    });

    cfg.app_data(json_config)
        .app_data(path_config)
        .service(health)
        .service(api_create_tournament)
        .service(api_list_tournaments)
        .service(api_get_tournament)
        .service(api_add_participant)
        .service(api_list_participants)
        .service(api_start_tournament)
        .service(api_list_matches)
        .service(api_leaderboard)
        .service(api_record_result);
}
