use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "entry_status", rename_all = "snake_case")]
pub enum EntryStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
    Withdrawn,
}

/// A team's registration into one edition. At most one entry per
/// (edition, team), enforced by a unique constraint.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Entry {
    pub entry_id: Uuid,
    pub edition_id: Uuid,
    pub team_id: Uuid,
    pub status: EntryStatus,
    pub contact_email: Option<String>,
    pub submitted_at: chrono::NaiveDateTime,
    pub decided_at: Option<chrono::NaiveDateTime>,
}
