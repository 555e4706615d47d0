use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "edition_status", rename_all = "snake_case")]
pub enum EditionStatus {
    #[default]
    Draft,
    Published,
    Live,
    Archived,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[serde(rename_all = "snake_case")]
#[sqlx(type_name = "edition_format", rename_all = "snake_case")]
pub enum EditionFormat {
    #[default]
    League,
    Knockout,
    LeagueAndKnockout,
}

/// One year/instance of a competition. The `theme` column is raw JSONB;
/// callers decode it into a `ThemeConfig` at the read boundary.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Edition {
    pub edition_id: Uuid,
    pub competition_id: Uuid,
    pub label: String,
    pub slug: String,
    pub status: EditionStatus,
    pub format: EditionFormat,
    pub timezone: String,
    pub rotation_seconds: i32,
    #[schema(value_type = Object)]
    pub theme: serde_json::Value,
    pub created_at: chrono::NaiveDateTime,
}
