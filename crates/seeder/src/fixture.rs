use chrono::NaiveDateTime;
use serde::Deserialize;
use storage::models::{
    EditionFormat, EditionStatus, EntryStatus, MatchEventType, MatchStatus, StageKind,
};

/// One fixture file: a competition snapshot with everything hanging off it.
/// Entities are referenced by natural key (slug, team name, stage name) so
/// files stay readable and re-runnable.
#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub competition: CompetitionFixture,
    #[serde(default)]
    pub editions: Vec<EditionFixture>,
}

#[derive(Debug, Deserialize)]
pub struct CompetitionFixture {
    pub name: String,
    pub slug: String,
}

#[derive(Debug, Deserialize)]
pub struct EditionFixture {
    pub label: String,
    pub slug: String,
    #[serde(default)]
    pub status: EditionStatus,
    #[serde(default)]
    pub format: EditionFormat,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default = "default_rotation_seconds")]
    pub rotation_seconds: i32,
    #[serde(default = "default_theme")]
    pub theme: serde_json::Value,
    #[serde(default)]
    pub entries: Vec<EntryFixture>,
    #[serde(default)]
    pub stages: Vec<StageFixture>,
    #[serde(default)]
    pub matches: Vec<MatchFixture>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}

fn default_rotation_seconds() -> i32 {
    15
}

fn default_theme() -> serde_json::Value {
    serde_json::json!({})
}

#[derive(Debug, Deserialize)]
pub struct EntryFixture {
    pub team_name: String,
    pub short_code: Option<String>,
    pub contact_email: Option<String>,
    #[serde(default)]
    pub status: EntryStatus,
    #[serde(default)]
    pub squad: Vec<SquadFixture>,
}

#[derive(Debug, Deserialize)]
pub struct SquadFixture {
    pub full_name: String,
    pub shirt_number: Option<i16>,
}

#[derive(Debug, Deserialize)]
pub struct StageFixture {
    pub name: String,
    pub kind: StageKind,
    #[serde(default)]
    pub groups: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct MatchFixture {
    pub home_team: String,
    pub away_team: String,
    pub stage: Option<String>,
    pub group: Option<String>,
    #[serde(default)]
    pub status: MatchStatus,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub home_score_et: Option<i32>,
    pub away_score_et: Option<i32>,
    pub home_score_pens: Option<i32>,
    pub away_score_pens: Option<i32>,
    pub kickoff_at: Option<NaiveDateTime>,
    pub venue: Option<String>,
    pub round_label: Option<String>,
    pub bracket_slot: Option<String>,
    #[serde(default)]
    pub events: Vec<EventFixture>,
}

#[derive(Debug, Deserialize)]
pub struct EventFixture {
    pub team: String,
    pub person: Option<String>,
    pub event_type: MatchEventType,
    pub minute: Option<i16>,
}
