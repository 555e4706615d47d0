use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::dto::stage::{
    CreateGroupRequest, CreateStageRequest, ReorderStagesRequest, UpdateGroupRequest,
    UpdateStageRequest,
};
use storage::models::{Group, Stage};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/editions/{id}/stages",
    params(
        ("id" = Uuid, Path, description = "Edition id")
    ),
    responses(
        (status = 200, description = "Stages of the edition in display order", body = Vec<Stage>),
        (status = 404, description = "Edition not found")
    ),
    tag = "stages"
)]
pub async fn list_stages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Stage>>, WebError> {
    let stages = services::list_stages(state.db.pool(), id).await?;

    Ok(Json(stages))
}

#[utoipa::path(
    post,
    path = "/api/editions/{id}/stages",
    params(
        ("id" = Uuid, Path, description = "Edition id")
    ),
    request_body = CreateStageRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Stage created at the end of the ordering", body = Stage),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Edition not found")
    ),
    tag = "stages"
)]
pub async fn create_stage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateStageRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let stage = services::create_stage(state.db.pool(), id, &req).await?;

    Ok((StatusCode::CREATED, Json(stage)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/stages/{id}",
    params(
        ("id" = Uuid, Path, description = "Stage id")
    ),
    request_body = UpdateStageRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Stage updated", body = Stage),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Stage not found")
    ),
    tag = "stages"
)]
pub async fn update_stage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateStageRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let stage = services::update_stage(state.db.pool(), id, &req).await?;

    Ok(Json(stage).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/stages/{id}",
    params(
        ("id" = Uuid, Path, description = "Stage id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Stage deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Stage not found")
    ),
    tag = "stages"
)]
pub async fn delete_stage(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_stage(state.db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    post,
    path = "/api/editions/{id}/stages/reorder",
    params(
        ("id" = Uuid, Path, description = "Edition id")
    ),
    request_body = ReorderStagesRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Stages renumbered in the requested order", body = Vec<Stage>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Edition not found"),
        (status = 409, description = "Order does not match the edition's stages")
    ),
    tag = "stages"
)]
pub async fn reorder_stages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ReorderStagesRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let stages = services::reorder_stages(state.db.pool(), id, &req.stage_ids).await?;

    Ok(Json(stages).into_response())
}

#[utoipa::path(
    get,
    path = "/api/stages/{id}/groups",
    params(
        ("id" = Uuid, Path, description = "Stage id")
    ),
    responses(
        (status = 200, description = "Groups of the stage", body = Vec<Group>),
        (status = 404, description = "Stage not found")
    ),
    tag = "stages"
)]
pub async fn list_groups(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<Group>>, WebError> {
    let groups = services::list_groups(state.db.pool(), id).await?;

    Ok(Json(groups))
}

#[utoipa::path(
    post,
    path = "/api/stages/{id}/groups",
    params(
        ("id" = Uuid, Path, description = "Stage id")
    ),
    request_body = CreateGroupRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Group created", body = Group),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Stage not found"),
        (status = 422, description = "Stage is not a group stage")
    ),
    tag = "stages"
)]
pub async fn create_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateGroupRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let stage = services::get_stage(state.db.pool(), id).await?;
    if !services::stage_accepts_groups(&stage) {
        return Err(WebError::InvalidStageKind(format!(
            "Stage '{}' is a knockout stage and cannot hold groups",
            stage.name
        )));
    }

    let group = services::create_group(state.db.pool(), id, &req).await?;

    Ok((StatusCode::CREATED, Json(group)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    params(
        ("id" = Uuid, Path, description = "Group id")
    ),
    request_body = UpdateGroupRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Group updated", body = Group),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Group not found")
    ),
    tag = "stages"
)]
pub async fn update_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateGroupRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let group = services::update_group(state.db.pool(), id, &req).await?;

    Ok(Json(group).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    params(
        ("id" = Uuid, Path, description = "Group id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Group not found")
    ),
    tag = "stages"
)]
pub async fn delete_group(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_group(state.db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
