use std::collections::HashSet;

use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::stage::{CreateGroupRequest, CreateStageRequest};
use crate::error::{Result, StorageError};
use crate::models::{Group, Stage, StageKind};

const STAGE_COLUMNS: &str = "stage_id, edition_id, name, kind, position, created_at";

/// Offset applied during reorder so intermediate rows never collide
/// with the (edition_id, position) unique constraint.
const REORDER_OFFSET: i32 = 1_000_000;

/// Repository for Stage and Group database operations
pub struct StageRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> StageRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_edition(&self, edition_id: Uuid) -> Result<Vec<Stage>> {
        let stages = sqlx::query_as::<_, Stage>(&format!(
            "SELECT {STAGE_COLUMNS} FROM stages WHERE edition_id = $1 ORDER BY position"
        ))
        .bind(edition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(stages)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Stage> {
        let stage = sqlx::query_as::<_, Stage>(&format!(
            "SELECT {STAGE_COLUMNS} FROM stages WHERE stage_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(stage)
    }

    /// Appends the stage at the end of the edition's ordering.
    pub async fn create(&self, edition_id: Uuid, req: &CreateStageRequest) -> Result<Stage> {
        let stage = sqlx::query_as::<_, Stage>(&format!(
            "INSERT INTO stages (edition_id, name, kind, position) \
             SELECT $1, $2, $3, COALESCE(MAX(position), 0) + 1 \
             FROM stages WHERE edition_id = $1 \
             RETURNING {STAGE_COLUMNS}"
        ))
        .bind(edition_id)
        .bind(&req.name)
        .bind(req.kind)
        .fetch_one(self.pool)
        .await?;

        Ok(stage)
    }

    pub async fn update(&self, id: Uuid, name: &str, kind: StageKind) -> Result<Stage> {
        let stage = sqlx::query_as::<_, Stage>(&format!(
            "UPDATE stages SET name = $2, kind = $3 WHERE stage_id = $1 \
             RETURNING {STAGE_COLUMNS}"
        ))
        .bind(id)
        .bind(name)
        .bind(kind)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(stage)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM stages WHERE stage_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Replaces the edition's stage ordering. Renumbers in two passes
    /// inside one transaction: positions are first shifted out of range,
    /// then written back as 1..N, so the unique (edition_id, position)
    /// constraint never trips mid-update.
    pub async fn reorder(&self, edition_id: Uuid, ordered_ids: &[Uuid]) -> Result<Vec<Stage>> {
        let mut tx = self.pool.begin().await?;

        let existing: Vec<Uuid> = sqlx::query_scalar(
            "SELECT stage_id FROM stages WHERE edition_id = $1 FOR UPDATE",
        )
        .bind(edition_id)
        .fetch_all(&mut *tx)
        .await?;

        let assignments = position_assignments(&existing, ordered_ids)?;

        sqlx::query("UPDATE stages SET position = position + $2 WHERE edition_id = $1")
            .bind(edition_id)
            .bind(REORDER_OFFSET)
            .execute(&mut *tx)
            .await?;

        for (stage_id, position) in &assignments {
            sqlx::query("UPDATE stages SET position = $2 WHERE stage_id = $1")
                .bind(stage_id)
                .bind(position)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        self.list_for_edition(edition_id).await
    }

    pub async fn groups_for_stage(&self, stage_id: Uuid) -> Result<Vec<Group>> {
        let groups = sqlx::query_as::<_, Group>(
            "SELECT group_id, stage_id, name, position FROM groups \
             WHERE stage_id = $1 ORDER BY position",
        )
        .bind(stage_id)
        .fetch_all(self.pool)
        .await?;

        Ok(groups)
    }

    pub async fn find_group_by_id(&self, id: Uuid) -> Result<Group> {
        let group = sqlx::query_as::<_, Group>(
            "SELECT group_id, stage_id, name, position FROM groups WHERE group_id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(group)
    }

    pub async fn create_group(&self, stage_id: Uuid, req: &CreateGroupRequest) -> Result<Group> {
        let group = sqlx::query_as::<_, Group>(
            "INSERT INTO groups (stage_id, name, position) \
             SELECT $1, $2, COALESCE(MAX(position), 0) + 1 \
             FROM groups WHERE stage_id = $1 \
             RETURNING group_id, stage_id, name, position",
        )
        .bind(stage_id)
        .bind(&req.name)
        .fetch_one(self.pool)
        .await?;

        Ok(group)
    }

    pub async fn update_group(&self, id: Uuid, name: &str) -> Result<Group> {
        let group = sqlx::query_as::<_, Group>(
            "UPDATE groups SET name = $2 WHERE group_id = $1 \
             RETURNING group_id, stage_id, name, position",
        )
        .bind(id)
        .bind(name)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(group)
    }

    pub async fn delete_group(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM groups WHERE group_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }
}

/// Validates a requested ordering against the edition's current stage
/// ids and maps it to (stage_id, position) pairs, positions 1..N in
/// request order. Every current stage must appear exactly once.
fn position_assignments(existing: &[Uuid], ordered: &[Uuid]) -> Result<Vec<(Uuid, i32)>> {
    let existing_set: HashSet<Uuid> = existing.iter().copied().collect();
    let requested_set: HashSet<Uuid> = ordered.iter().copied().collect();
    if existing_set != requested_set || requested_set.len() != ordered.len() {
        return Err(StorageError::ConstraintViolation(
            "Stage order must list each of the edition's stages exactly once".to_string(),
        ));
    }

    Ok(ordered
        .iter()
        .enumerate()
        .map(|(index, stage_id)| (*stage_id, index as i32 + 1))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::position_assignments;
    use uuid::Uuid;

    fn ids(range: std::ops::RangeInclusive<u128>) -> Vec<Uuid> {
        range.map(Uuid::from_u128).collect()
    }

    #[test]
    fn permutation_yields_contiguous_positions() {
        let existing = ids(1..=4);
        let ordered = vec![
            Uuid::from_u128(3),
            Uuid::from_u128(1),
            Uuid::from_u128(4),
            Uuid::from_u128(2),
        ];

        let assignments = position_assignments(&existing, &ordered).unwrap();

        let positions: Vec<i32> = assignments.iter().map(|(_, p)| *p).collect();
        assert_eq!(positions, vec![1, 2, 3, 4]);
        let order: Vec<Uuid> = assignments.iter().map(|(id, _)| *id).collect();
        assert_eq!(order, ordered);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let existing = ids(1..=2);
        let ordered = vec![Uuid::from_u128(1), Uuid::from_u128(1)];

        assert!(position_assignments(&existing, &ordered).is_err());
    }

    #[test]
    fn missing_or_foreign_ids_are_rejected() {
        let existing = ids(1..=3);

        // One of the edition's stages left out.
        assert!(position_assignments(&existing, &ids(1..=2)).is_err());
        // A stage from some other edition slipped in.
        assert!(position_assignments(&existing, &ids(2..=4)).is_err());
    }
}
