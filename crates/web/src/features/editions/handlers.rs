use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::edition::{CreateEditionRequest, EditionResponse, UpdateEditionRequest};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/competitions/{slug}/editions",
    params(
        ("slug" = String, Path, description = "Competition slug")
    ),
    responses(
        (status = 200, description = "Editions of the competition", body = Vec<EditionResponse>),
        (status = 404, description = "Competition not found")
    ),
    tag = "editions"
)]
pub async fn list_editions(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Vec<EditionResponse>>, WebError> {
    let editions = services::list_editions(state.db.pool(), &slug).await?;

    Ok(Json(editions.into_iter().map(EditionResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/editions/{id}",
    params(
        ("id" = Uuid, Path, description = "Edition id")
    ),
    responses(
        (status = 200, description = "Edition found", body = EditionResponse),
        (status = 404, description = "Edition not found")
    ),
    tag = "editions"
)]
pub async fn get_edition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let edition = services::get_edition(state.db.pool(), id).await?;

    Ok(Json(EditionResponse::from(edition)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/competitions/{slug}/editions",
    params(
        ("slug" = String, Path, description = "Competition slug")
    ),
    request_body = CreateEditionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Edition created", body = EditionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Competition not found"),
        (status = 409, description = "Edition slug already exists")
    ),
    tag = "editions"
)]
pub async fn create_edition(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(req): Json<CreateEditionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let edition = services::create_edition(state.db.pool(), &slug, &req).await?;

    Ok((StatusCode::CREATED, Json(EditionResponse::from(edition))).into_response())
}

#[utoipa::path(
    put,
    path = "/api/editions/{id}",
    params(
        ("id" = Uuid, Path, description = "Edition id")
    ),
    request_body = UpdateEditionRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Edition updated", body = EditionResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Edition not found"),
        (status = 409, description = "Edition slug already exists")
    ),
    tag = "editions"
)]
pub async fn update_edition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateEditionRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let edition = services::update_edition(state.db.pool(), id, &req).await?;

    Ok(Json(EditionResponse::from(edition)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/editions/{id}/publish",
    params(
        ("id" = Uuid, Path, description = "Edition id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Edition published", body = EditionResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Edition not found"),
        (status = 409, description = "Edition is not in draft status")
    ),
    tag = "editions"
)]
pub async fn publish_edition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let edition = services::publish_edition(state.db.pool(), id).await?;

    Ok(Json(EditionResponse::from(edition)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/editions/{id}",
    params(
        ("id" = Uuid, Path, description = "Edition id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Edition deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Edition not found")
    ),
    tag = "editions"
)]
pub async fn delete_edition(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_edition(state.db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
