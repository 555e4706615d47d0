use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::scoreboard::{ScoreboardResponse, TriggerHighlightRequest};
use storage::models::Highlight;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/scoreboard/{competition_slug}/{edition_slug}",
    params(
        ("competition_slug" = String, Path, description = "Competition slug"),
        ("edition_slug" = String, Path, description = "Edition slug")
    ),
    responses(
        (status = 200, description = "Full scoreboard payload for one poll cycle", body = ScoreboardResponse),
        (status = 404, description = "Edition not found")
    ),
    tag = "scoreboard"
)]
pub async fn get_scoreboard(
    State(state): State<AppState>,
    Path((competition_slug, edition_slug)): Path<(String, String)>,
) -> Result<Response, WebError> {
    let scoreboard =
        services::get_scoreboard(state.db.pool(), &competition_slug, &edition_slug).await?;

    Ok(Json(scoreboard).into_response())
}

#[utoipa::path(
    post,
    path = "/api/editions/{id}/highlight",
    params(
        ("id" = Uuid, Path, description = "Edition id")
    ),
    request_body = TriggerHighlightRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Highlight activated", body = Highlight),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Edition not found"),
        (status = 422, description = "Duration out of range")
    ),
    tag = "scoreboard"
)]
pub async fn trigger_highlight(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<TriggerHighlightRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    if !services::highlight_duration_in_bounds(req.duration_seconds) {
        return Err(WebError::InvalidHighlightDuration(req.duration_seconds));
    }

    let highlight =
        services::trigger_highlight(state.db.pool(), id, &req.message, req.duration_seconds)
            .await?;

    Ok((StatusCode::CREATED, Json(highlight)).into_response())
}
