use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::entry::{CreateEntryRequest, EntryResponse};
use crate::error::{Result, StorageError};
use crate::models::EntryStatus;

const ENTRY_COLUMNS: &str = "e.entry_id, e.edition_id, e.team_id, t.name AS team_name, \
                             e.status, e.contact_email, e.submitted_at, e.decided_at";

/// Repository for Entry database operations
pub struct EntryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EntryRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_edition(&self, edition_id: Uuid) -> Result<Vec<EntryResponse>> {
        let entries = sqlx::query_as::<_, EntryResponse>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries e \
             JOIN teams t ON t.team_id = e.team_id \
             WHERE e.edition_id = $1 \
             ORDER BY e.submitted_at"
        ))
        .bind(edition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<EntryResponse> {
        let entry = sqlx::query_as::<_, EntryResponse>(&format!(
            "SELECT {ENTRY_COLUMNS} FROM entries e \
             JOIN teams t ON t.team_id = e.team_id \
             WHERE e.entry_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(entry)
    }

    /// Registers a team into an edition. The team row is created on
    /// first sight and matched by name afterwards; the whole operation
    /// runs in one transaction.
    pub async fn create(&self, edition_id: Uuid, req: &CreateEntryRequest) -> Result<EntryResponse> {
        let mut tx = self.pool.begin().await?;

        let team_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO teams (name, short_code)
            VALUES ($1, $2)
            ON CONFLICT (name) DO UPDATE SET name = EXCLUDED.name
            RETURNING team_id
            "#,
        )
        .bind(&req.team_name)
        .bind(&req.short_code)
        .fetch_one(&mut *tx)
        .await?;

        let entry_id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO entries (edition_id, team_id, contact_email)
            VALUES ($1, $2, $3)
            RETURNING entry_id
            "#,
        )
        .bind(edition_id)
        .bind(team_id)
        .bind(&req.contact_email)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::on_unique(e, "Team is already entered in this edition"))?;

        tx.commit().await?;

        self.find_by_id(entry_id).await
    }

    pub async fn set_status(&self, id: Uuid, status: EntryStatus) -> Result<EntryResponse> {
        let updated = sqlx::query(
            r#"
            UPDATE entries
            SET status = $2, decided_at = now()
            WHERE entry_id = $1
            "#,
        )
        .bind(id)
        .bind(status)
        .execute(self.pool)
        .await?;

        if updated.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        self.find_by_id(id).await
    }

    /// Contact addresses of every approved entry, for schedule-change
    /// notifications.
    pub async fn approved_emails(&self, edition_id: Uuid) -> Result<Vec<Option<String>>> {
        let emails = sqlx::query_scalar::<_, Option<String>>(
            r#"
            SELECT e.contact_email
            FROM entries e
            WHERE e.edition_id = $1 AND e.status = 'approved'
            "#,
        )
        .bind(edition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(emails)
    }
}
