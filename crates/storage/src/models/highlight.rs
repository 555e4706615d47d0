use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Operator-triggered banner shown on the public scoreboard until
/// `ends_at` passes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Highlight {
    pub highlight_id: Uuid,
    pub edition_id: Uuid,
    pub message: String,
    pub starts_at: chrono::NaiveDateTime,
    pub ends_at: chrono::NaiveDateTime,
}
