use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::edition::CreateEditionRequest;
use crate::error::{Result, StorageError};
use crate::models::{Edition, EditionFormat, EditionStatus, ThemeConfig};

const EDITION_COLUMNS: &str = "edition_id, competition_id, label, slug, status, format, \
                               timezone, rotation_seconds, theme, created_at";

/// Repository for Edition database operations
pub struct EditionRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EditionRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_competition(&self, competition_id: Uuid) -> Result<Vec<Edition>> {
        let editions = sqlx::query_as::<_, Edition>(&format!(
            "SELECT {EDITION_COLUMNS} FROM editions \
             WHERE competition_id = $1 ORDER BY created_at DESC"
        ))
        .bind(competition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(editions)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Edition> {
        let edition = sqlx::query_as::<_, Edition>(&format!(
            "SELECT {EDITION_COLUMNS} FROM editions WHERE edition_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(edition)
    }

    /// Resolves an edition from the public scoreboard URL pair.
    pub async fn find_by_slugs(&self, competition_slug: &str, edition_slug: &str) -> Result<Edition> {
        let edition = sqlx::query_as::<_, Edition>(
            r#"
            SELECT e.edition_id, e.competition_id, e.label, e.slug, e.status, e.format,
                   e.timezone, e.rotation_seconds, e.theme, e.created_at
            FROM editions e
            JOIN competitions c ON c.competition_id = e.competition_id
            WHERE c.slug = $1 AND e.slug = $2
            "#,
        )
        .bind(competition_slug)
        .bind(edition_slug)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(edition)
    }

    pub async fn create(&self, competition_id: Uuid, req: &CreateEditionRequest) -> Result<Edition> {
        let theme = serde_json::to_value(req.theme.clone().unwrap_or_default())
            .unwrap_or_else(|_| serde_json::json!({}));

        let edition = sqlx::query_as::<_, Edition>(&format!(
            "INSERT INTO editions (competition_id, label, slug, format, timezone, rotation_seconds, theme) \
             VALUES ($1, $2, $3, $4, $5, $6, $7) \
             RETURNING {EDITION_COLUMNS}"
        ))
        .bind(competition_id)
        .bind(&req.label)
        .bind(&req.slug)
        .bind(req.format)
        .bind(&req.timezone)
        .bind(req.rotation_seconds)
        .bind(theme)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::on_duplicate_slug(e, "Edition slug already exists for this competition"))?;

        Ok(edition)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn update(
        &self,
        id: Uuid,
        label: &str,
        slug: &str,
        format: EditionFormat,
        timezone: &str,
        rotation_seconds: i32,
        theme: &ThemeConfig,
    ) -> Result<Edition> {
        let theme = serde_json::to_value(theme).unwrap_or_else(|_| serde_json::json!({}));

        let edition = sqlx::query_as::<_, Edition>(&format!(
            "UPDATE editions \
             SET label = $2, slug = $3, format = $4, timezone = $5, rotation_seconds = $6, theme = $7 \
             WHERE edition_id = $1 \
             RETURNING {EDITION_COLUMNS}"
        ))
        .bind(id)
        .bind(label)
        .bind(slug)
        .bind(format)
        .bind(timezone)
        .bind(rotation_seconds)
        .bind(theme)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| StorageError::on_duplicate_slug(e, "Edition slug already exists for this competition"))?
        .ok_or(StorageError::NotFound)?;

        Ok(edition)
    }

    pub async fn set_status(&self, id: Uuid, status: EditionStatus) -> Result<Edition> {
        let edition = sqlx::query_as::<_, Edition>(&format!(
            "UPDATE editions SET status = $2 WHERE edition_id = $1 RETURNING {EDITION_COLUMNS}"
        ))
        .bind(id)
        .bind(status)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(edition)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM editions WHERE edition_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}
