use sqlx::PgPool;
use storage::{
    dto::entry::{CreateEntryRequest, EntryResponse},
    error::{Result, StorageError},
    models::EntryStatus,
    repository::{edition::EditionRepository, entry::EntryRepository},
};
use uuid::Uuid;

pub async fn list_entries(pool: &PgPool, edition_id: Uuid) -> Result<Vec<EntryResponse>> {
    // 404 on a bad edition rather than an empty list.
    EditionRepository::new(pool).find_by_id(edition_id).await?;

    EntryRepository::new(pool).list_for_edition(edition_id).await
}

pub async fn get_entry(pool: &PgPool, id: Uuid) -> Result<EntryResponse> {
    EntryRepository::new(pool).find_by_id(id).await
}

pub async fn create_entry(
    pool: &PgPool,
    edition_id: Uuid,
    request: &CreateEntryRequest,
) -> Result<EntryResponse> {
    EditionRepository::new(pool).find_by_id(edition_id).await?;

    EntryRepository::new(pool).create(edition_id, request).await
}

/// Moves an entry through its lifecycle. Approve/reject act on pending
/// entries only; withdraw is allowed while pending or approved.
pub async fn transition_entry(
    pool: &PgPool,
    id: Uuid,
    target: EntryStatus,
) -> Result<EntryResponse> {
    let repo = EntryRepository::new(pool);
    let existing = repo.find_by_id(id).await?;

    let allowed = match target {
        EntryStatus::Approved | EntryStatus::Rejected => {
            existing.status == EntryStatus::Pending
        }
        EntryStatus::Withdrawn => {
            matches!(existing.status, EntryStatus::Pending | EntryStatus::Approved)
        }
        EntryStatus::Pending => false,
    };

    if !allowed {
        return Err(StorageError::InvalidTransition(format!(
            "Cannot move entry from {:?} to {:?}",
            existing.status, target
        )));
    }

    repo.set_status(id, target).await
}
