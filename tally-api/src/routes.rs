use std::path::Path;

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tally_app::domain::{Choice, Tally};
use tally_app::AppContext;
use tally_errors::AppError;
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

/// Fields of a vote submission. Only JSON objects are accepted; a missing
/// or non-string field reads as empty.
#[derive(Debug, Default)]
pub struct VoteRequest {
    pub choice: String,
    pub session_id: String,
}

impl VoteRequest {
    pub fn from_object(body: &Map<String, Value>) -> Self {
        Self {
            choice: string_field(body, "choice"),
            session_id: string_field(body, "session_id"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct VoteResponse {
    pub ok: bool,
    pub choice: Choice,
}

#[derive(Debug, Default)]
pub struct CheckRequest {
    pub session_id: String,
}

impl CheckRequest {
    pub fn from_object(body: &Map<String, Value>) -> Self {
        Self {
            session_id: string_field(body, "session_id"),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckResponse {
    pub voted: bool,
}

/// JSON API under `/api`, everything else falls through to the static
/// landing page directory.
pub fn router(ctx: AppContext, static_dir: impl AsRef<Path>) -> Router {
    Router::new()
        .route("/api/results", get(get_results))
        .route("/api/vote", post(submit_vote))
        .route("/api/check", post(check_voted))
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(ctx)
}

async fn get_results(State(ctx): State<AppContext>) -> Result<Json<Tally>, AppError> {
    Ok(Json(ctx.ledger.results().await?))
}

async fn submit_vote(
    State(ctx): State<AppContext>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<VoteResponse>, AppError> {
    let body = match payload {
        Ok(Json(Value::Object(body))) if !body.is_empty() => body,
        Ok(Json(_)) => return Err(AppError::MalformedRequest),
        Err(rejection) => {
            tracing::debug!(%rejection, "Unreadable vote body");
            return Err(AppError::MalformedRequest);
        }
    };

    let request = VoteRequest::from_object(&body);
    let choice = ctx
        .ledger
        .submit_vote(&request.choice, &request.session_id)
        .await?;

    Ok(Json(VoteResponse { ok: true, choice }))
}

async fn check_voted(
    State(ctx): State<AppContext>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<CheckResponse>, AppError> {
    // Absent, unreadable or non-object bodies carry an empty identifier.
    let request = match payload {
        Ok(Json(Value::Object(body))) => CheckRequest::from_object(&body),
        _ => CheckRequest::default(),
    };

    let voted = ctx.ledger.has_voted(&request.session_id).await?;
    Ok(Json(CheckResponse { voted }))
}

fn string_field(body: &Map<String, Value>, key: &str) -> String {
    body.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
