use sqlx::PgPool;
use storage::{
    dto::matches::{
        CreateMatchEventRequest, CreateMatchRequest, GenerateMatchesRequest, GenerationStrategy,
        UpdateMatchRequest,
    },
    error::Result,
    models::{Match, MatchEvent},
    repository::{
        edition::EditionRepository, matches::MatchRepository, scoreboard::ScoreboardRepository,
    },
    services::schedule,
};
use uuid::Uuid;

pub async fn list_matches(pool: &PgPool, edition_id: Uuid) -> Result<Vec<Match>> {
    EditionRepository::new(pool).find_by_id(edition_id).await?;

    MatchRepository::new(pool).list_for_edition(edition_id).await
}

pub async fn get_match(pool: &PgPool, id: Uuid) -> Result<Match> {
    MatchRepository::new(pool).find_by_id(id).await
}

pub async fn create_match(
    pool: &PgPool,
    edition_id: Uuid,
    request: &CreateMatchRequest,
) -> Result<Match> {
    EditionRepository::new(pool).find_by_id(edition_id).await?;

    MatchRepository::new(pool).create(edition_id, request).await
}

/// Merges the request into the current row and writes it back. Returns
/// the row as it was before the update alongside the new one so the
/// handler can detect kickoff and status changes for notifications.
pub async fn update_match(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateMatchRequest,
) -> Result<(Match, Match)> {
    let repo = MatchRepository::new(pool);
    let before = repo.find_by_id(id).await?;

    let mut merged = before.clone();
    if request.home_entry_id.is_some() {
        merged.home_entry_id = request.home_entry_id;
    }
    if request.away_entry_id.is_some() {
        merged.away_entry_id = request.away_entry_id;
    }
    if let Some(status) = request.status {
        merged.status = status;
    }
    if request.home_score.is_some() {
        merged.home_score = request.home_score;
    }
    if request.away_score.is_some() {
        merged.away_score = request.away_score;
    }
    if request.home_score_et.is_some() {
        merged.home_score_et = request.home_score_et;
    }
    if request.away_score_et.is_some() {
        merged.away_score_et = request.away_score_et;
    }
    if request.home_score_pens.is_some() {
        merged.home_score_pens = request.home_score_pens;
    }
    if request.away_score_pens.is_some() {
        merged.away_score_pens = request.away_score_pens;
    }
    if request.kickoff_at.is_some() {
        merged.kickoff_at = request.kickoff_at;
    }
    if request.venue.is_some() {
        merged.venue = request.venue.clone();
    }

    let after = repo.update(&merged).await?;
    Ok((before, after))
}

pub async fn delete_match(pool: &PgPool, id: Uuid) -> Result<()> {
    MatchRepository::new(pool).delete(id).await
}

/// Generates and bulk-inserts a stage's fixtures from the edition's
/// approved entries, ordered as the standings loader returns them
/// (alphabetical; the caller-facing seed order).
pub async fn generate_matches(
    pool: &PgPool,
    edition_id: Uuid,
    request: &GenerateMatchesRequest,
) -> Result<usize> {
    let entries = ScoreboardRepository::new(pool)
        .approved_entries(edition_id)
        .await?;
    let entry_ids: Vec<Uuid> = entries.iter().map(|e| e.entry_id).collect();

    let fixtures = match request.strategy {
        GenerationStrategy::RoundRobinCircle => schedule::round_robin_circle(&entry_ids),
        GenerationStrategy::KnockoutSeeded => schedule::knockout_seeded(&entry_ids),
    };

    MatchRepository::new(pool)
        .insert_generated(
            edition_id,
            request.stage_id,
            &fixtures,
            request.kickoff_start,
            request.interval_minutes,
        )
        .await
}

pub async fn add_event(
    pool: &PgPool,
    match_id: Uuid,
    request: &CreateMatchEventRequest,
) -> Result<MatchEvent> {
    MatchRepository::new(pool).find_by_id(match_id).await?;

    MatchRepository::new(pool).add_event(match_id, request).await
}

pub async fn list_events(pool: &PgPool, match_id: Uuid) -> Result<Vec<MatchEvent>> {
    MatchRepository::new(pool).find_by_id(match_id).await?;

    MatchRepository::new(pool).events_for_match(match_id).await
}

/// Contact addresses for schedule/result notifications.
pub async fn notification_recipients(
    pool: &PgPool,
    edition_id: Uuid,
) -> Result<Vec<Option<String>>> {
    storage::repository::entry::EntryRepository::new(pool)
        .approved_emails(edition_id)
        .await
}
