use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Display theme for the public scoreboard, stored as JSONB on the
/// edition. Decoding defaults field-by-field so partial or legacy theme
/// blobs still render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ThemeConfig {
    #[serde(default = "default_accent")]
    pub accent_color: String,
    #[serde(default = "default_background")]
    pub background: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default = "default_show_crests")]
    pub show_club_crests: bool,
}

fn default_accent() -> String {
    "#1d4ed8".to_string()
}

fn default_background() -> String {
    "#0f172a".to_string()
}

fn default_show_crests() -> bool {
    true
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            accent_color: default_accent(),
            background: default_background(),
            logo_url: None,
            show_club_crests: default_show_crests(),
        }
    }
}

impl ThemeConfig {
    /// Decodes the raw JSONB column. Anything that fails to parse falls
    /// back to the default theme rather than surfacing an error.
    pub fn from_column(value: &serde_json::Value) -> Self {
        serde_json::from_value(value.clone()).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn partial_theme_fills_missing_fields() {
        let theme = ThemeConfig::from_column(&json!({ "accent_color": "#ff0000" }));
        assert_eq!(theme.accent_color, "#ff0000");
        assert_eq!(theme.background, "#0f172a");
        assert!(theme.show_club_crests);
    }

    #[test]
    fn empty_object_yields_defaults() {
        assert_eq!(ThemeConfig::from_column(&json!({})), ThemeConfig::default());
    }

    #[test]
    fn malformed_blob_yields_defaults() {
        let theme = ThemeConfig::from_column(&json!({ "accent_color": 42, "background": [] }));
        assert_eq!(theme, ThemeConfig::default());
    }
}
