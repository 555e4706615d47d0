use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::EntryStatus;

/// Registers a team into an edition. The team is created on first use
/// and matched by name afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEntryRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Team name must be between 1 and 255 characters"
    ))]
    pub team_name: String,

    #[validate(length(max = 8))]
    pub short_code: Option<String>,

    #[validate(email(message = "Contact email must be a valid address"))]
    pub contact_email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct EntryResponse {
    pub entry_id: Uuid,
    pub edition_id: Uuid,
    pub team_id: Uuid,
    pub team_name: String,
    pub status: EntryStatus,
    pub contact_email: Option<String>,
    pub submitted_at: chrono::NaiveDateTime,
    pub decided_at: Option<chrono::NaiveDateTime>,
}
