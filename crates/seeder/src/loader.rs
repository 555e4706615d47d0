use std::collections::HashMap;

use anyhow::{Context, bail};
use sqlx::PgPool;
use uuid::Uuid;

use crate::fixture::{EditionFixture, Fixture, MatchFixture};

/// Loads one fixture file into the database. All writes go through
/// upserts keyed on natural keys, so re-running the same file is a
/// no-op.
pub struct FixtureLoader<'a> {
    pool: &'a PgPool,
}

impl<'a> FixtureLoader<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn load(&self, fixture: &Fixture) -> anyhow::Result<()> {
        let competition_id = self.upsert_competition(fixture).await?;

        for edition in &fixture.editions {
            let edition_id = self.upsert_edition(competition_id, edition).await?;
            tracing::info!(
                "  Edition '{}': {} entries, {} stages, {} matches",
                edition.slug,
                edition.entries.len(),
                edition.stages.len(),
                edition.matches.len()
            );

            let entry_ids = self.upsert_entries(edition_id, edition).await?;
            let (stage_ids, group_ids) = self.upsert_stages(edition_id, edition).await?;

            for m in &edition.matches {
                self.upsert_match(edition_id, m, &entry_ids, &stage_ids, &group_ids)
                    .await?;
            }
        }

        Ok(())
    }

    async fn upsert_competition(&self, fixture: &Fixture) -> anyhow::Result<Uuid> {
        let (competition_id,): (Uuid,) = sqlx::query_as(
            "INSERT INTO competitions (name, slug) VALUES ($1, $2)
             ON CONFLICT (slug) DO UPDATE SET name = EXCLUDED.name
             RETURNING competition_id",
        )
        .bind(&fixture.competition.name)
        .bind(&fixture.competition.slug)
        .fetch_one(self.pool)
        .await
        .context("Failed to upsert competition")?;

        Ok(competition_id)
    }

    async fn upsert_edition(
        &self,
        competition_id: Uuid,
        edition: &EditionFixture,
    ) -> anyhow::Result<Uuid> {
        let (edition_id,): (Uuid,) = sqlx::query_as(
            "INSERT INTO editions
                 (competition_id, label, slug, status, format, timezone, rotation_seconds, theme)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
             ON CONFLICT (competition_id, slug) DO UPDATE SET
                 label = EXCLUDED.label,
                 status = EXCLUDED.status,
                 format = EXCLUDED.format,
                 timezone = EXCLUDED.timezone,
                 rotation_seconds = EXCLUDED.rotation_seconds,
                 theme = EXCLUDED.theme
             RETURNING edition_id",
        )
        .bind(competition_id)
        .bind(&edition.label)
        .bind(&edition.slug)
        .bind(edition.status)
        .bind(edition.format)
        .bind(&edition.timezone)
        .bind(edition.rotation_seconds)
        .bind(&edition.theme)
        .fetch_one(self.pool)
        .await
        .with_context(|| format!("Failed to upsert edition '{}'", edition.slug))?;

        Ok(edition_id)
    }

    /// Returns a team-name -> entry_id map for resolving match fixtures.
    async fn upsert_entries(
        &self,
        edition_id: Uuid,
        edition: &EditionFixture,
    ) -> anyhow::Result<HashMap<String, Uuid>> {
        let mut entry_ids = HashMap::new();

        for entry in &edition.entries {
            let (team_id,): (Uuid,) = sqlx::query_as(
                "INSERT INTO teams (name, short_code) VALUES ($1, $2)
                 ON CONFLICT (name) DO UPDATE
                     SET short_code = COALESCE(EXCLUDED.short_code, teams.short_code)
                 RETURNING team_id",
            )
            .bind(&entry.team_name)
            .bind(&entry.short_code)
            .fetch_one(self.pool)
            .await
            .with_context(|| format!("Failed to upsert team '{}'", entry.team_name))?;

            let (entry_id,): (Uuid,) = sqlx::query_as(
                "INSERT INTO entries (edition_id, team_id, status, contact_email)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT (edition_id, team_id) DO UPDATE SET
                     status = EXCLUDED.status,
                     contact_email = EXCLUDED.contact_email
                 RETURNING entry_id",
            )
            .bind(edition_id)
            .bind(team_id)
            .bind(entry.status)
            .bind(&entry.contact_email)
            .fetch_one(self.pool)
            .await
            .with_context(|| format!("Failed to upsert entry for '{}'", entry.team_name))?;

            for member in &entry.squad {
                let person_id = self.find_or_create_person(&member.full_name).await?;
                sqlx::query(
                    "INSERT INTO squad_members (entry_id, person_id, shirt_number)
                     VALUES ($1, $2, $3)
                     ON CONFLICT (entry_id, person_id) DO UPDATE
                         SET shirt_number = EXCLUDED.shirt_number",
                )
                .bind(entry_id)
                .bind(person_id)
                .bind(member.shirt_number)
                .execute(self.pool)
                .await
                .with_context(|| {
                    format!("Failed to upsert squad member '{}'", member.full_name)
                })?;
            }

            entry_ids.insert(entry.team_name.clone(), entry_id);
        }

        Ok(entry_ids)
    }

    // People carry no unique key in the schema, so the seeder treats the
    // full name as one to stay idempotent across runs.
    async fn find_or_create_person(&self, full_name: &str) -> anyhow::Result<Uuid> {
        let existing: Option<(Uuid,)> =
            sqlx::query_as("SELECT person_id FROM people WHERE full_name = $1 LIMIT 1")
                .bind(full_name)
                .fetch_optional(self.pool)
                .await?;

        if let Some((person_id,)) = existing {
            return Ok(person_id);
        }

        let (person_id,): (Uuid,) =
            sqlx::query_as("INSERT INTO people (full_name) VALUES ($1) RETURNING person_id")
                .bind(full_name)
                .fetch_one(self.pool)
                .await
                .with_context(|| format!("Failed to create person '{}'", full_name))?;

        Ok(person_id)
    }

    /// Stage positions follow fixture order; groups likewise within a stage.
    /// Returns (stage name -> id, group name -> id) maps.
    async fn upsert_stages(
        &self,
        edition_id: Uuid,
        edition: &EditionFixture,
    ) -> anyhow::Result<(HashMap<String, Uuid>, HashMap<String, Uuid>)> {
        let mut stage_ids = HashMap::new();
        let mut group_ids = HashMap::new();

        for (idx, stage) in edition.stages.iter().enumerate() {
            let (stage_id,): (Uuid,) = sqlx::query_as(
                "INSERT INTO stages (edition_id, name, kind, position)
                 VALUES ($1, $2, $3, $4)
                 ON CONFLICT (edition_id, position) DO UPDATE SET
                     name = EXCLUDED.name,
                     kind = EXCLUDED.kind
                 RETURNING stage_id",
            )
            .bind(edition_id)
            .bind(&stage.name)
            .bind(stage.kind)
            .bind((idx + 1) as i32)
            .fetch_one(self.pool)
            .await
            .with_context(|| format!("Failed to upsert stage '{}'", stage.name))?;

            for (group_idx, group_name) in stage.groups.iter().enumerate() {
                let (group_id,): (Uuid,) = sqlx::query_as(
                    "INSERT INTO groups (stage_id, name, position)
                     VALUES ($1, $2, $3)
                     ON CONFLICT (stage_id, position) DO UPDATE SET name = EXCLUDED.name
                     RETURNING group_id",
                )
                .bind(stage_id)
                .bind(group_name)
                .bind((group_idx + 1) as i32)
                .fetch_one(self.pool)
                .await
                .with_context(|| format!("Failed to upsert group '{}'", group_name))?;

                group_ids.insert(group_name.clone(), group_id);
            }

            stage_ids.insert(stage.name.clone(), stage_id);
        }

        Ok((stage_ids, group_ids))
    }

    /// Matches have no unique constraint; (edition, home, away, kickoff)
    /// serves as the natural key. Events are replaced wholesale so the
    /// fixture file stays the source of truth for seeded matches.
    async fn upsert_match(
        &self,
        edition_id: Uuid,
        m: &MatchFixture,
        entry_ids: &HashMap<String, Uuid>,
        stage_ids: &HashMap<String, Uuid>,
        group_ids: &HashMap<String, Uuid>,
    ) -> anyhow::Result<()> {
        let home_entry_id = resolve(entry_ids, &m.home_team, "team")?;
        let away_entry_id = resolve(entry_ids, &m.away_team, "team")?;
        let stage_id = m
            .stage
            .as_deref()
            .map(|name| resolve(stage_ids, name, "stage"))
            .transpose()?;
        let group_id = m
            .group
            .as_deref()
            .map(|name| resolve(group_ids, name, "group"))
            .transpose()?;

        let existing: Option<(Uuid,)> = sqlx::query_as(
            "SELECT match_id FROM matches
             WHERE edition_id = $1 AND home_entry_id = $2 AND away_entry_id = $3
               AND kickoff_at IS NOT DISTINCT FROM $4",
        )
        .bind(edition_id)
        .bind(home_entry_id)
        .bind(away_entry_id)
        .bind(m.kickoff_at)
        .fetch_optional(self.pool)
        .await?;

        let match_id = match existing {
            Some((match_id,)) => {
                sqlx::query(
                    "UPDATE matches SET
                         stage_id = $2, group_id = $3, status = $4,
                         home_score = $5, away_score = $6,
                         home_score_et = $7, away_score_et = $8,
                         home_score_pens = $9, away_score_pens = $10,
                         venue = $11, round_label = $12, bracket_slot = $13
                     WHERE match_id = $1",
                )
                .bind(match_id)
                .bind(stage_id)
                .bind(group_id)
                .bind(m.status)
                .bind(m.home_score)
                .bind(m.away_score)
                .bind(m.home_score_et)
                .bind(m.away_score_et)
                .bind(m.home_score_pens)
                .bind(m.away_score_pens)
                .bind(&m.venue)
                .bind(&m.round_label)
                .bind(&m.bracket_slot)
                .execute(self.pool)
                .await?;
                match_id
            }
            None => {
                let (match_id,): (Uuid,) = sqlx::query_as(
                    "INSERT INTO matches
                         (edition_id, stage_id, group_id, home_entry_id, away_entry_id,
                          status, home_score, away_score, home_score_et, away_score_et,
                          home_score_pens, away_score_pens, kickoff_at, venue,
                          round_label, bracket_slot)
                     VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
                     RETURNING match_id",
                )
                .bind(edition_id)
                .bind(stage_id)
                .bind(group_id)
                .bind(home_entry_id)
                .bind(away_entry_id)
                .bind(m.status)
                .bind(m.home_score)
                .bind(m.away_score)
                .bind(m.home_score_et)
                .bind(m.away_score_et)
                .bind(m.home_score_pens)
                .bind(m.away_score_pens)
                .bind(m.kickoff_at)
                .bind(&m.venue)
                .bind(&m.round_label)
                .bind(&m.bracket_slot)
                .fetch_one(self.pool)
                .await
                .with_context(|| {
                    format!("Failed to insert match {} vs {}", m.home_team, m.away_team)
                })?;
                match_id
            }
        };

        sqlx::query("DELETE FROM match_events WHERE match_id = $1")
            .bind(match_id)
            .execute(self.pool)
            .await?;

        for event in &m.events {
            let entry_id = resolve(entry_ids, &event.team, "team")?;
            let person_id = match &event.person {
                Some(name) => Some(self.find_or_create_person(name).await?),
                None => None,
            };

            sqlx::query(
                "INSERT INTO match_events (match_id, entry_id, person_id, event_type, minute)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(match_id)
            .bind(entry_id)
            .bind(person_id)
            .bind(event.event_type)
            .bind(event.minute)
            .execute(self.pool)
            .await?;
        }

        Ok(())
    }
}

fn resolve(map: &HashMap<String, Uuid>, name: &str, kind: &str) -> anyhow::Result<Uuid> {
    match map.get(name) {
        Some(id) => Ok(*id),
        None => bail!("Unknown {} '{}' referenced by a match fixture", kind, name),
    }
}
