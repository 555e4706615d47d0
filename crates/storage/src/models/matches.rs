use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "match_status", rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Finalized,
    Disputed,
}

/// A scheduled or completed fixture. Entry ids may be null for bracket
/// placeholder slots that have not been filled yet.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Match {
    pub match_id: Uuid,
    pub edition_id: Uuid,
    pub stage_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub home_entry_id: Option<Uuid>,
    pub away_entry_id: Option<Uuid>,
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub home_score_et: Option<i32>,
    pub away_score_et: Option<i32>,
    pub home_score_pens: Option<i32>,
    pub away_score_pens: Option<i32>,
    pub kickoff_at: Option<chrono::NaiveDateTime>,
    pub venue: Option<String>,
    pub round_label: Option<String>,
    pub bracket_slot: Option<String>,
    pub created_at: chrono::NaiveDateTime,
}
