use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::dto::matches::{
    CreateMatchEventRequest, CreateMatchRequest, GenerateMatchesRequest, GeneratedMatchesResponse,
    GenerationStrategy, UpdateMatchRequest,
};
use storage::models::{Match, MatchEvent, MatchStatus, StageKind};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;
use crate::features::stages::services as stage_services;

#[utoipa::path(
    get,
    path = "/api/editions/{id}/matches",
    params(
        ("id" = Uuid, Path, description = "Edition id")
    ),
    responses(
        (status = 200, description = "Matches of the edition", body = Vec<Match>),
        (status = 404, description = "Edition not found")
    ),
    tag = "matches"
)]
pub async fn list_matches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Match>>, WebError> {
    let matches = services::list_matches(state.db.pool(), id).await?;

    Ok(Json(matches))
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}",
    params(
        ("id" = Uuid, Path, description = "Match id")
    ),
    responses(
        (status = 200, description = "Match found", body = Match),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn get_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let m = services::get_match(state.db.pool(), id).await?;

    Ok(Json(m).into_response())
}

#[utoipa::path(
    post,
    path = "/api/editions/{id}/matches",
    params(
        ("id" = Uuid, Path, description = "Edition id")
    ),
    request_body = CreateMatchRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Match created", body = Match),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Edition not found")
    ),
    tag = "matches"
)]
pub async fn create_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let m = services::create_match(state.db.pool(), id, &req).await?;

    notify_schedule_change(&state, id, &m).await;

    Ok((StatusCode::CREATED, Json(m)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/matches/{id}",
    params(
        ("id" = Uuid, Path, description = "Match id")
    ),
    request_body = UpdateMatchRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Match updated (last write wins)", body = Match),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn update_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateMatchRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let (before, after) = services::update_match(state.db.pool(), id, &req).await?;

    if before.kickoff_at != after.kickoff_at {
        notify_schedule_change(&state, after.edition_id, &after).await;
    }
    if before.status != after.status {
        match after.status {
            MatchStatus::Finalized => notify_result(&state, &after, "match_finalized").await,
            MatchStatus::Disputed => notify_result(&state, &after, "match_disputed").await,
            _ => {}
        }
    }

    Ok(Json(after).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/matches/{id}",
    params(
        ("id" = Uuid, Path, description = "Match id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Match deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn delete_match(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_match(state.db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/editions/{id}/matches/generate",
    params(
        ("id" = Uuid, Path, description = "Edition id")
    ),
    request_body = GenerateMatchesRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Fixtures generated", body = GeneratedMatchesResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Edition or stage not found"),
        (status = 422, description = "Strategy does not fit the stage kind")
    ),
    tag = "matches"
)]
pub async fn generate_matches(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<GenerateMatchesRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let stage = stage_services::get_stage(state.db.pool(), req.stage_id).await?;
    if stage.edition_id != id {
        return Err(WebError::BadRequest(
            "Stage does not belong to this edition".to_string(),
        ));
    }

    let fits = match req.strategy {
        GenerationStrategy::RoundRobinCircle => stage.kind == StageKind::Group,
        GenerationStrategy::KnockoutSeeded => stage.kind == StageKind::Knockout,
    };
    if !fits {
        return Err(WebError::InvalidStageKind(format!(
            "Strategy does not fit a {:?} stage",
            stage.kind
        )));
    }

    let created = services::generate_matches(state.db.pool(), id, &req).await?;
    tracing::info!(edition_id = %id, stage_id = %req.stage_id, created, "Generated fixtures");

    Ok((
        StatusCode::CREATED,
        Json(GeneratedMatchesResponse {
            stage_id: req.stage_id,
            created,
        }),
    )
        .into_response())
}

#[utoipa::path(
    post,
    path = "/api/matches/{id}/events",
    params(
        ("id" = Uuid, Path, description = "Match id")
    ),
    request_body = CreateMatchEventRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Event recorded", body = MatchEvent),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn add_match_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateMatchEventRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let event = services::add_event(state.db.pool(), id, &req).await?;

    Ok((StatusCode::CREATED, Json(event)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/matches/{id}/events",
    params(
        ("id" = Uuid, Path, description = "Match id")
    ),
    responses(
        (status = 200, description = "Events of the match in minute order", body = Vec<MatchEvent>),
        (status = 404, description = "Match not found")
    ),
    tag = "matches"
)]
pub async fn list_match_events(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<MatchEvent>>, WebError> {
    let events = services::list_events(state.db.pool(), id).await?;

    Ok(Json(events))
}

/// Best-effort schedule-change mail to every approved entry's contact.
/// Failures are logged inside the mailer, never surfaced here.
async fn notify_schedule_change(state: &AppState, edition_id: Uuid, m: &Match) {
    match services::notification_recipients(state.db.pool(), edition_id).await {
        Ok(recipients) => state.mailer.send_batch(
            "schedule_changed",
            "Match schedule updated",
            recipients,
            json!({ "match_id": m.match_id, "kickoff_at": m.kickoff_at }),
        ),
        Err(e) => tracing::warn!("Could not load notification recipients: {e}"),
    }
}

async fn notify_result(state: &AppState, m: &Match, template: &'static str) {
    match services::notification_recipients(state.db.pool(), m.edition_id).await {
        Ok(recipients) => state.mailer.send_batch(
            template,
            "Match result recorded",
            recipients,
            json!({
                "match_id": m.match_id,
                "home_score": m.home_score,
                "away_score": m.away_score,
            }),
        ),
        Err(e) => tracing::warn!("Could not load notification recipients: {e}"),
    }
}
