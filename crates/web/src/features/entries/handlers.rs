use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use storage::dto::entry::{CreateEntryRequest, EntryResponse};
use storage::models::EntryStatus;
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::mailer::Notification;
use crate::state::AppState;

use super::services;

#[utoipa::path(
    get,
    path = "/api/editions/{id}/entries",
    params(
        ("id" = Uuid, Path, description = "Edition id")
    ),
    responses(
        (status = 200, description = "Entries of the edition", body = Vec<EntryResponse>),
        (status = 404, description = "Edition not found")
    ),
    tag = "entries"
)]
pub async fn list_entries(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<EntryResponse>>, WebError> {
    let entries = services::list_entries(state.db.pool(), id).await?;

    Ok(Json(entries))
}

#[utoipa::path(
    get,
    path = "/api/entries/{id}",
    params(
        ("id" = Uuid, Path, description = "Entry id")
    ),
    responses(
        (status = 200, description = "Entry found", body = EntryResponse),
        (status = 404, description = "Entry not found")
    ),
    tag = "entries"
)]
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let entry = services::get_entry(state.db.pool(), id).await?;

    Ok(Json(entry).into_response())
}

#[utoipa::path(
    post,
    path = "/api/editions/{id}/entries",
    params(
        ("id" = Uuid, Path, description = "Edition id")
    ),
    request_body = CreateEntryRequest,
    responses(
        (status = 201, description = "Entry submitted", body = EntryResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Edition not found"),
        (status = 409, description = "Team already entered")
    ),
    tag = "entries"
)]
pub async fn create_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entry = services::create_entry(state.db.pool(), id, &req).await?;

    if let Some(email) = &entry.contact_email {
        state.mailer.send(Notification {
            to: email.clone(),
            subject: format!("Entry received for {}", entry.team_name),
            template: "entry_submitted",
            variables: json!({ "team_name": entry.team_name, "entry_id": entry.entry_id }),
        });
    }

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

#[utoipa::path(
    post,
    path = "/api/entries/{id}/approve",
    params(
        ("id" = Uuid, Path, description = "Entry id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Entry approved", body = EntryResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Entry not found"),
        (status = 409, description = "Entry is not pending")
    ),
    tag = "entries"
)]
pub async fn approve_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    decide_entry(state, id, EntryStatus::Approved).await
}

#[utoipa::path(
    post,
    path = "/api/entries/{id}/reject",
    params(
        ("id" = Uuid, Path, description = "Entry id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Entry rejected", body = EntryResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Entry not found"),
        (status = 409, description = "Entry is not pending")
    ),
    tag = "entries"
)]
pub async fn reject_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    decide_entry(state, id, EntryStatus::Rejected).await
}

#[utoipa::path(
    post,
    path = "/api/entries/{id}/withdraw",
    params(
        ("id" = Uuid, Path, description = "Entry id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Entry withdrawn", body = EntryResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Entry not found"),
        (status = 409, description = "Entry cannot be withdrawn")
    ),
    tag = "entries"
)]
pub async fn withdraw_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let entry = services::transition_entry(state.db.pool(), id, EntryStatus::Withdrawn).await?;

    Ok(Json(entry).into_response())
}

async fn decide_entry(
    state: AppState,
    id: Uuid,
    target: EntryStatus,
) -> Result<Response, WebError> {
    let entry = services::transition_entry(state.db.pool(), id, target).await?;

    if let Some(email) = &entry.contact_email {
        state.mailer.send(Notification {
            to: email.clone(),
            subject: format!("Entry decision for {}", entry.team_name),
            template: "entry_decided",
            variables: json!({
                "team_name": entry.team_name,
                "status": entry.status,
            }),
        });
    }

    Ok(Json(entry).into_response())
}
