use sqlx::PgPool;
use storage::{
    dto::stage::{CreateGroupRequest, CreateStageRequest, UpdateGroupRequest, UpdateStageRequest},
    error::Result,
    models::{Group, Stage, StageKind},
    repository::{edition::EditionRepository, stage::StageRepository},
};
use uuid::Uuid;

pub async fn list_stages(pool: &PgPool, edition_id: Uuid) -> Result<Vec<Stage>> {
    EditionRepository::new(pool).find_by_id(edition_id).await?;

    StageRepository::new(pool).list_for_edition(edition_id).await
}

pub async fn get_stage(pool: &PgPool, id: Uuid) -> Result<Stage> {
    StageRepository::new(pool).find_by_id(id).await
}

pub async fn create_stage(
    pool: &PgPool,
    edition_id: Uuid,
    request: &CreateStageRequest,
) -> Result<Stage> {
    EditionRepository::new(pool).find_by_id(edition_id).await?;

    StageRepository::new(pool).create(edition_id, request).await
}

pub async fn update_stage(pool: &PgPool, id: Uuid, request: &UpdateStageRequest) -> Result<Stage> {
    let repo = StageRepository::new(pool);
    let existing = repo.find_by_id(id).await?;

    let name = request.name.as_deref().unwrap_or(&existing.name);
    let kind = request.kind.unwrap_or(existing.kind);

    repo.update(id, name, kind).await
}

pub async fn delete_stage(pool: &PgPool, id: Uuid) -> Result<()> {
    StageRepository::new(pool).delete(id).await
}

pub async fn reorder_stages(
    pool: &PgPool,
    edition_id: Uuid,
    ordered_ids: &[Uuid],
) -> Result<Vec<Stage>> {
    EditionRepository::new(pool).find_by_id(edition_id).await?;

    StageRepository::new(pool).reorder(edition_id, ordered_ids).await
}

pub async fn list_groups(pool: &PgPool, stage_id: Uuid) -> Result<Vec<Group>> {
    StageRepository::new(pool).find_by_id(stage_id).await?;

    StageRepository::new(pool).groups_for_stage(stage_id).await
}

/// Only group stages can hold groups; the stage kind is checked by the
/// handler so it can answer with the dedicated problem type.
pub fn stage_accepts_groups(stage: &Stage) -> bool {
    stage.kind == StageKind::Group
}

pub async fn create_group(
    pool: &PgPool,
    stage_id: Uuid,
    request: &CreateGroupRequest,
) -> Result<Group> {
    StageRepository::new(pool).create_group(stage_id, request).await
}

pub async fn update_group(pool: &PgPool, id: Uuid, request: &UpdateGroupRequest) -> Result<Group> {
    let repo = StageRepository::new(pool);
    let existing = repo.find_group_by_id(id).await?;

    let name = request.name.as_deref().unwrap_or(&existing.name);

    repo.update_group(id, name).await
}

pub async fn delete_group(pool: &PgPool, id: Uuid) -> Result<()> {
    StageRepository::new(pool).delete_group(id).await
}
