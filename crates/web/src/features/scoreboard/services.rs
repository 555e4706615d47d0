use std::collections::HashMap;

use sqlx::PgPool;
use storage::{
    dto::scoreboard::{ScoreboardEdition, ScoreboardResponse},
    error::Result,
    models::{Highlight, ThemeConfig},
    repository::{
        competition::CompetitionRepository, edition::EditionRepository,
        scoreboard::ScoreboardRepository,
    },
    services::{match_view, rotation, scorers, standings},
};
use uuid::Uuid;

pub const MIN_HIGHLIGHT_SECONDS: i64 = 5;
pub const MAX_HIGHLIGHT_SECONDS: i64 = 3600;

/// Operator-supplied banner durations must stay within display bounds.
pub fn highlight_duration_in_bounds(duration_seconds: i64) -> bool {
    (MIN_HIGHLIGHT_SECONDS..=MAX_HIGHLIGHT_SECONDS).contains(&duration_seconds)
}

/// Assembles everything the public display needs for one poll cycle.
/// Each call recomputes standings and top scorers from the raw rows;
/// nothing is cached between polls.
pub async fn get_scoreboard(
    pool: &PgPool,
    competition_slug: &str,
    edition_slug: &str,
) -> Result<ScoreboardResponse> {
    let edition = EditionRepository::new(pool)
        .find_by_slugs(competition_slug, edition_slug)
        .await?;
    let competition = CompetitionRepository::new(pool)
        .find_by_id(edition.competition_id)
        .await?;

    let repo = ScoreboardRepository::new(pool);
    let entries = repo.approved_entries(edition.edition_id).await?;
    let matches = repo.matches_for_edition(edition.edition_id).await?;
    let events = repo.scoring_events(edition.edition_id).await?;
    let highlight = repo.active_highlight(edition.edition_id).await?;

    let entry_names: HashMap<Uuid, String> = entries
        .iter()
        .map(|e| (e.entry_id, e.team_name.clone()))
        .collect();

    let display_matches =
        match_view::build_display_matches(&matches, &entry_names, highlight.as_ref());
    let standings = standings::compute_standings(&matches, &entries);
    let top_scorers = scorers::top_scorers(&events, &entry_names);
    let rotation = rotation::select_rotation(&display_matches, &standings, &top_scorers);

    let theme = ThemeConfig::from_column(&edition.theme);

    Ok(ScoreboardResponse {
        edition: ScoreboardEdition {
            edition_id: edition.edition_id,
            label: edition.label,
            competition_name: competition.name,
            timezone: edition.timezone,
        },
        theme,
        rotation,
        matches: display_matches,
        standings,
        top_scorers,
        highlight: highlight.map(|h| h.message),
        refresh_seconds: edition.rotation_seconds,
    })
}

pub async fn trigger_highlight(
    pool: &PgPool,
    edition_id: Uuid,
    message: &str,
    duration_seconds: i64,
) -> Result<Highlight> {
    EditionRepository::new(pool).find_by_id(edition_id).await?;

    ScoreboardRepository::new(pool)
        .insert_highlight(edition_id, message, duration_seconds)
        .await
}

#[cfg(test)]
mod tests {
    use super::highlight_duration_in_bounds;

    #[test]
    fn duration_bounds_are_inclusive() {
        assert!(highlight_duration_in_bounds(5));
        assert!(highlight_duration_in_bounds(30));
        assert!(highlight_duration_in_bounds(3600));
    }

    #[test]
    fn out_of_range_durations_are_rejected() {
        assert!(!highlight_duration_in_bounds(4));
        assert!(!highlight_duration_in_bounds(3601));
        assert!(!highlight_duration_in_bounds(0));
        assert!(!highlight_duration_in_bounds(-10));
    }
}
