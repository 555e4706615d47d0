use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{Edition, EditionFormat, EditionStatus, ThemeConfig};

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateEditionRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "Label must be between 1 and 255 characters"
    ))]
    pub label: String,

    #[validate(length(min = 1, max = 255))]
    #[validate(custom(function = "crate::dto::validate_slug"))]
    pub slug: String,

    #[serde(default = "default_format")]
    pub format: EditionFormat,

    #[validate(length(min = 1, max = 64))]
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[validate(range(min = 5, max = 300, message = "Rotation must be 5-300 seconds"))]
    #[serde(default = "default_rotation")]
    pub rotation_seconds: i32,

    #[serde(default)]
    pub theme: Option<ThemeConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateEditionRequest {
    #[validate(length(min = 1, max = 255))]
    pub label: Option<String>,

    #[validate(length(min = 1, max = 255))]
    #[validate(custom(function = "crate::dto::validate_slug"))]
    pub slug: Option<String>,

    pub format: Option<EditionFormat>,

    #[validate(length(min = 1, max = 64))]
    pub timezone: Option<String>,

    #[validate(range(min = 5, max = 300))]
    pub rotation_seconds: Option<i32>,

    pub theme: Option<ThemeConfig>,
}

/// Response with the theme decoded into its explicit config form.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EditionResponse {
    pub edition_id: Uuid,
    pub competition_id: Uuid,
    pub label: String,
    pub slug: String,
    pub status: EditionStatus,
    pub format: EditionFormat,
    pub timezone: String,
    pub rotation_seconds: i32,
    pub theme: ThemeConfig,
    pub created_at: chrono::NaiveDateTime,
}

impl From<Edition> for EditionResponse {
    fn from(e: Edition) -> Self {
        let theme = ThemeConfig::from_column(&e.theme);
        Self {
            edition_id: e.edition_id,
            competition_id: e.competition_id,
            label: e.label,
            slug: e.slug,
            status: e.status,
            format: e.format,
            timezone: e.timezone,
            rotation_seconds: e.rotation_seconds,
            theme,
            created_at: e.created_at,
        }
    }
}

fn default_format() -> EditionFormat {
    EditionFormat::League
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_rotation() -> i32 {
    15
}
