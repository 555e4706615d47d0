use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::matches::{CreateMatchEventRequest, CreateMatchRequest};
use crate::error::{Result, StorageError};
use crate::models::{Match, MatchEvent};
use crate::services::schedule::GeneratedFixture;

const MATCH_COLUMNS: &str = "match_id, edition_id, stage_id, group_id, home_entry_id, \
                             away_entry_id, status, home_score, away_score, home_score_et, \
                             away_score_et, home_score_pens, away_score_pens, kickoff_at, \
                             venue, round_label, bracket_slot, created_at";

/// Repository for Match and MatchEvent database operations
pub struct MatchRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> MatchRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_for_edition(&self, edition_id: Uuid) -> Result<Vec<Match>> {
        let matches = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches \
             WHERE edition_id = $1 \
             ORDER BY kickoff_at NULLS LAST, created_at"
        ))
        .bind(edition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(matches)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Match> {
        let m = sqlx::query_as::<_, Match>(&format!(
            "SELECT {MATCH_COLUMNS} FROM matches WHERE match_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(m)
    }

    pub async fn create(&self, edition_id: Uuid, req: &CreateMatchRequest) -> Result<Match> {
        let m = sqlx::query_as::<_, Match>(&format!(
            "INSERT INTO matches (edition_id, stage_id, group_id, home_entry_id, away_entry_id, \
                                  kickoff_at, venue, round_label) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8) \
             RETURNING {MATCH_COLUMNS}"
        ))
        .bind(edition_id)
        .bind(req.stage_id)
        .bind(req.group_id)
        .bind(req.home_entry_id)
        .bind(req.away_entry_id)
        .bind(req.kickoff_at)
        .bind(&req.venue)
        .bind(&req.round_label)
        .fetch_one(self.pool)
        .await?;

        Ok(m)
    }

    /// Writes back a fully merged match row. There is no row-version
    /// check: two admins editing the same match race, last write wins.
    pub async fn update(&self, m: &Match) -> Result<Match> {
        let updated = sqlx::query_as::<_, Match>(&format!(
            "UPDATE matches SET home_entry_id = $2, away_entry_id = $3, status = $4, \
                                home_score = $5, away_score = $6, home_score_et = $7, \
                                away_score_et = $8, home_score_pens = $9, away_score_pens = $10, \
                                kickoff_at = $11, venue = $12 \
             WHERE match_id = $1 \
             RETURNING {MATCH_COLUMNS}"
        ))
        .bind(m.match_id)
        .bind(m.home_entry_id)
        .bind(m.away_entry_id)
        .bind(m.status)
        .bind(m.home_score)
        .bind(m.away_score)
        .bind(m.home_score_et)
        .bind(m.away_score_et)
        .bind(m.home_score_pens)
        .bind(m.away_score_pens)
        .bind(m.kickoff_at)
        .bind(&m.venue)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(updated)
    }

    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM matches WHERE match_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Bulk-inserts generated fixtures for a stage in one transaction,
    /// spacing kickoffs by `interval_minutes` from `kickoff_start` when
    /// given.
    pub async fn insert_generated(
        &self,
        edition_id: Uuid,
        stage_id: Uuid,
        fixtures: &[GeneratedFixture],
        kickoff_start: Option<chrono::NaiveDateTime>,
        interval_minutes: Option<i64>,
    ) -> Result<usize> {
        let mut tx = self.pool.begin().await?;

        for (offset, fixture) in fixtures.iter().enumerate() {
            let kickoff = kickoff_start.map(|start| {
                start + chrono::Duration::minutes(interval_minutes.unwrap_or(0) * offset as i64)
            });

            sqlx::query(
                "INSERT INTO matches (edition_id, stage_id, home_entry_id, away_entry_id, \
                                      kickoff_at, round_label, bracket_slot) \
                 VALUES ($1, $2, $3, $4, $5, $6, $7)",
            )
            .bind(edition_id)
            .bind(stage_id)
            .bind(fixture.home)
            .bind(fixture.away)
            .bind(kickoff)
            .bind(&fixture.round_label)
            .bind(&fixture.bracket_slot)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        Ok(fixtures.len())
    }

    pub async fn add_event(&self, match_id: Uuid, req: &CreateMatchEventRequest) -> Result<MatchEvent> {
        let event = sqlx::query_as::<_, MatchEvent>(
            "INSERT INTO match_events (match_id, entry_id, person_id, event_type, minute) \
             VALUES ($1, $2, $3, $4, $5) \
             RETURNING event_id, match_id, entry_id, person_id, event_type, minute, created_at",
        )
        .bind(match_id)
        .bind(req.entry_id)
        .bind(req.person_id)
        .bind(req.event_type)
        .bind(req.minute)
        .fetch_one(self.pool)
        .await?;

        Ok(event)
    }

    pub async fn events_for_match(&self, match_id: Uuid) -> Result<Vec<MatchEvent>> {
        let events = sqlx::query_as::<_, MatchEvent>(
            "SELECT event_id, match_id, entry_id, person_id, event_type, minute, created_at \
             FROM match_events WHERE match_id = $1 \
             ORDER BY minute NULLS LAST, created_at",
        )
        .bind(match_id)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }
}
