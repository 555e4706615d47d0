use sqlx::PgPool;
use storage::{
    dto::competition::{CreateCompetitionRequest, UpdateCompetitionRequest},
    error::Result,
    models::Competition,
    repository::competition::CompetitionRepository,
};

/// List all competitions
pub async fn list_competitions(pool: &PgPool) -> Result<Vec<Competition>> {
    let repo = CompetitionRepository::new(pool);
    repo.list().await
}

/// Get competition by slug
pub async fn get_competition_by_slug(pool: &PgPool, slug: &str) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    repo.find_by_slug(slug).await
}

/// Create a new competition
pub async fn create_competition(
    pool: &PgPool,
    request: &CreateCompetitionRequest,
) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);
    repo.create(request).await
}

/// Update a competition, merging unset fields from the current row
pub async fn update_competition(
    pool: &PgPool,
    slug: &str,
    request: &UpdateCompetitionRequest,
) -> Result<Competition> {
    let repo = CompetitionRepository::new(pool);

    let existing = repo.find_by_slug(slug).await?;
    let name = request.name.as_deref().unwrap_or(&existing.name);
    let new_slug = request.slug.as_deref().unwrap_or(&existing.slug);

    repo.update(existing.competition_id, name, new_slug).await
}

/// Delete a competition
pub async fn delete_competition(pool: &PgPool, slug: &str) -> Result<()> {
    let repo = CompetitionRepository::new(pool);
    let competition = repo.find_by_slug(slug).await?;
    repo.delete(competition.competition_id).await
}
