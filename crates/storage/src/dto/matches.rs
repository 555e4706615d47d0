use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{MatchEventType, MatchStatus};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMatchRequest {
    pub stage_id: Option<Uuid>,
    pub group_id: Option<Uuid>,
    pub home_entry_id: Option<Uuid>,
    pub away_entry_id: Option<Uuid>,
    pub kickoff_at: Option<chrono::NaiveDateTime>,

    #[validate(length(max = 255))]
    pub venue: Option<String>,

    #[validate(length(max = 64))]
    pub round_label: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateMatchRequest {
    pub home_entry_id: Option<Uuid>,
    pub away_entry_id: Option<Uuid>,
    pub status: Option<MatchStatus>,

    #[validate(range(min = 0, max = 99))]
    pub home_score: Option<i32>,
    #[validate(range(min = 0, max = 99))]
    pub away_score: Option<i32>,
    #[validate(range(min = 0, max = 99))]
    pub home_score_et: Option<i32>,
    #[validate(range(min = 0, max = 99))]
    pub away_score_et: Option<i32>,
    #[validate(range(min = 0, max = 99))]
    pub home_score_pens: Option<i32>,
    #[validate(range(min = 0, max = 99))]
    pub away_score_pens: Option<i32>,

    pub kickoff_at: Option<chrono::NaiveDateTime>,

    #[validate(length(max = 255))]
    pub venue: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMatchEventRequest {
    pub entry_id: Option<Uuid>,
    pub person_id: Option<Uuid>,
    pub event_type: MatchEventType,

    #[validate(range(min = 0, max = 130, message = "Minute must be 0-130"))]
    pub minute: Option<i16>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum GenerationStrategy {
    RoundRobinCircle,
    KnockoutSeeded,
}

/// Bulk match generation for one stage from the edition's approved
/// entries.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct GenerateMatchesRequest {
    pub stage_id: Uuid,
    pub strategy: GenerationStrategy,
    pub kickoff_start: Option<chrono::NaiveDateTime>,

    #[validate(range(min = 15, max = 10080, message = "Interval must be 15-10080 minutes"))]
    pub interval_minutes: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedMatchesResponse {
    pub stage_id: Uuid,
    pub created: usize,
}
