use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "match_event_type", rename_all = "snake_case")]
pub enum MatchEventType {
    Goal,
    PenaltyGoal,
    Assist,
    YellowCard,
    RedCard,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct MatchEvent {
    pub event_id: Uuid,
    pub match_id: Uuid,
    pub entry_id: Option<Uuid>,
    pub person_id: Option<Uuid>,
    pub event_type: MatchEventType,
    pub minute: Option<i16>,
    pub created_at: chrono::NaiveDateTime,
}
