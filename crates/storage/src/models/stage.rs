use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "stage_kind", rename_all = "snake_case")]
pub enum StageKind {
    Group,
    Knockout,
}

/// A phase of an edition. `position` is the display order, unique per
/// edition; reordering renumbers in two passes inside one transaction.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Stage {
    pub stage_id: Uuid,
    pub edition_id: Uuid,
    pub name: String,
    pub kind: StageKind,
    pub position: i32,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Group {
    pub group_id: Uuid,
    pub stage_id: Uuid,
    pub name: String,
    pub position: i32,
}
