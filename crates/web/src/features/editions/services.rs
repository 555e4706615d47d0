use sqlx::PgPool;
use storage::{
    dto::edition::{CreateEditionRequest, UpdateEditionRequest},
    error::{Result, StorageError},
    models::{Edition, EditionStatus, ThemeConfig},
    repository::{competition::CompetitionRepository, edition::EditionRepository},
};
use uuid::Uuid;

/// List editions of a competition, newest first
pub async fn list_editions(pool: &PgPool, competition_slug: &str) -> Result<Vec<Edition>> {
    let competition = CompetitionRepository::new(pool)
        .find_by_slug(competition_slug)
        .await?;

    EditionRepository::new(pool)
        .list_for_competition(competition.competition_id)
        .await
}

pub async fn get_edition(pool: &PgPool, id: Uuid) -> Result<Edition> {
    EditionRepository::new(pool).find_by_id(id).await
}

/// Create an edition under a competition
pub async fn create_edition(
    pool: &PgPool,
    competition_slug: &str,
    request: &CreateEditionRequest,
) -> Result<Edition> {
    let competition = CompetitionRepository::new(pool)
        .find_by_slug(competition_slug)
        .await?;

    EditionRepository::new(pool)
        .create(competition.competition_id, request)
        .await
}

/// Update an edition, merging unset fields from the current row
pub async fn update_edition(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateEditionRequest,
) -> Result<Edition> {
    let repo = EditionRepository::new(pool);
    let existing = repo.find_by_id(id).await?;

    let label = request.label.as_deref().unwrap_or(&existing.label);
    let slug = request.slug.as_deref().unwrap_or(&existing.slug);
    let format = request.format.unwrap_or(existing.format);
    let timezone = request.timezone.as_deref().unwrap_or(&existing.timezone);
    let rotation = request.rotation_seconds.unwrap_or(existing.rotation_seconds);
    let theme = request
        .theme
        .clone()
        .unwrap_or_else(|| ThemeConfig::from_column(&existing.theme));

    repo.update(id, label, slug, format, timezone, rotation, &theme)
        .await
}

/// Publish a draft edition, making its scoreboard publicly resolvable
pub async fn publish_edition(pool: &PgPool, id: Uuid) -> Result<Edition> {
    let repo = EditionRepository::new(pool);
    let existing = repo.find_by_id(id).await?;

    if existing.status != EditionStatus::Draft {
        return Err(StorageError::InvalidTransition(format!(
            "Only draft editions can be published, this one is {:?}",
            existing.status
        )));
    }

    repo.set_status(id, EditionStatus::Published).await
}

pub async fn delete_edition(pool: &PgPool, id: Uuid) -> Result<()> {
    EditionRepository::new(pool).delete(id).await
}
