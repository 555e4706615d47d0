use sqlx::PgPool;
use uuid::Uuid;

use crate::dto::scoreboard::{EntryRef, ScoringEventRow};
use crate::error::Result;
use crate::models::{Highlight, Match};

/// Read-only loaders for the public scoreboard, plus the operator's
/// highlight trigger. Everything here is a flat row set; the folds over
/// them live in `services`.
pub struct ScoreboardRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ScoreboardRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Approved entries with team names resolved; the "known set" that
    /// standings are computed over.
    pub async fn approved_entries(&self, edition_id: Uuid) -> Result<Vec<EntryRef>> {
        let entries = sqlx::query_as::<_, EntryRef>(
            r#"
            SELECT e.entry_id, t.name AS team_name
            FROM entries e
            JOIN teams t ON t.team_id = e.team_id
            WHERE e.edition_id = $1 AND e.status = 'approved'
            ORDER BY t.name
            "#,
        )
        .bind(edition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(entries)
    }

    pub async fn matches_for_edition(&self, edition_id: Uuid) -> Result<Vec<Match>> {
        let matches = sqlx::query_as::<_, Match>(
            r#"
            SELECT match_id, edition_id, stage_id, group_id, home_entry_id, away_entry_id,
                   status, home_score, away_score, home_score_et, away_score_et,
                   home_score_pens, away_score_pens, kickoff_at, venue, round_label,
                   bracket_slot, created_at
            FROM matches
            WHERE edition_id = $1
            "#,
        )
        .bind(edition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(matches)
    }

    /// Every scoring/card event for the edition, with player names
    /// joined in for the top-scorer fold.
    pub async fn scoring_events(&self, edition_id: Uuid) -> Result<Vec<ScoringEventRow>> {
        let events = sqlx::query_as::<_, ScoringEventRow>(
            r#"
            SELECT ev.entry_id, ev.person_id, ev.event_type, p.full_name AS person_name
            FROM match_events ev
            JOIN matches m ON m.match_id = ev.match_id
            LEFT JOIN people p ON p.person_id = ev.person_id
            WHERE m.edition_id = $1
            "#,
        )
        .bind(edition_id)
        .fetch_all(self.pool)
        .await?;

        Ok(events)
    }

    /// The most recently started highlight that has not yet expired.
    pub async fn active_highlight(&self, edition_id: Uuid) -> Result<Option<Highlight>> {
        let highlight = sqlx::query_as::<_, Highlight>(
            r#"
            SELECT highlight_id, edition_id, message, starts_at, ends_at
            FROM highlights
            WHERE edition_id = $1 AND starts_at <= now() AND ends_at > now()
            ORDER BY starts_at DESC
            LIMIT 1
            "#,
        )
        .bind(edition_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(highlight)
    }

    pub async fn insert_highlight(
        &self,
        edition_id: Uuid,
        message: &str,
        duration_seconds: i64,
    ) -> Result<Highlight> {
        let highlight = sqlx::query_as::<_, Highlight>(
            r#"
            INSERT INTO highlights (edition_id, message, starts_at, ends_at)
            VALUES ($1, $2, now(), now() + make_interval(secs => $3::double precision))
            RETURNING highlight_id, edition_id, message, starts_at, ends_at
            "#,
        )
        .bind(edition_id)
        .bind(message)
        .bind(duration_seconds)
        .fetch_one(self.pool)
        .await?;

        Ok(highlight)
    }
}
