use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{MatchStatus, ThemeConfig};

/// An approved entry with its team name resolved, as loaded for the
/// scoreboard read path.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct EntryRef {
    pub entry_id: Uuid,
    pub team_name: String,
}

/// A scoring/card event joined with the player's name. Entry or person
/// may be missing when the operator logged a bare event.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ScoringEventRow {
    pub entry_id: Option<Uuid>,
    pub person_id: Option<Uuid>,
    pub event_type: crate::models::MatchEventType,
    pub person_name: Option<String>,
}

/// Derived per-entry ranking row. Never persisted; recomputed from
/// match rows on every read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Standing {
    pub position: usize,
    pub entry_id: Uuid,
    pub team_name: String,
    pub played: u32,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub goals_for: i32,
    pub goals_against: i32,
    pub goal_difference: i32,
    pub points: u32,
}

/// Derived per-(entry, person) scorer aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TopScorer {
    pub entry_id: Uuid,
    pub person_id: Uuid,
    pub player_name: String,
    pub team_name: String,
    pub goals: u32,
    pub assists: u32,
    pub yellow_cards: u32,
    pub red_cards: u32,
}

/// Display-ready match summary for the public screen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DisplayMatch {
    pub match_id: Uuid,
    pub home_name: String,
    pub away_name: String,
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub kickoff_at: Option<chrono::NaiveDateTime>,
    pub venue: Option<String>,
    pub round_label: Option<String>,
    pub highlight: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RotationSection {
    LiveMatches,
    Upcoming,
    Standings,
    TopScorers,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreboardEdition {
    pub edition_id: Uuid,
    pub label: String,
    pub competition_name: String,
    pub timezone: String,
}

/// Everything the public display needs for one poll cycle.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreboardResponse {
    pub edition: ScoreboardEdition,
    pub theme: ThemeConfig,
    pub rotation: Vec<RotationSection>,
    pub matches: Vec<DisplayMatch>,
    pub standings: Vec<Standing>,
    pub top_scorers: Vec<TopScorer>,
    pub highlight: Option<String>,
    pub refresh_seconds: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct TriggerHighlightRequest {
    #[validate(length(
        min = 1,
        max = 500,
        message = "Message must be between 1 and 500 characters"
    ))]
    pub message: String,

    pub duration_seconds: i64,
}
