use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::scoreboard::DisplayMatch;
use crate::models::{Highlight, Match, MatchStatus};

/// Maps raw match rows into display-ready summaries for the public
/// screen. Matches missing either entry id are treated as not yet fully
/// scheduled and excluded. The active highlight (a single global banner,
/// not per-match state) is attached to every built match.
pub fn build_display_matches(
    matches: &[Match],
    entry_names: &HashMap<Uuid, String>,
    highlight: Option<&Highlight>,
) -> Vec<DisplayMatch> {
    let message = highlight.map(|h| h.message.clone());

    let mut built: Vec<DisplayMatch> = matches
        .iter()
        .filter_map(|m| {
            let home_id = m.home_entry_id?;
            let away_id = m.away_entry_id?;
            Some(DisplayMatch {
                match_id: m.match_id,
                home_name: resolve_name(entry_names, home_id),
                away_name: resolve_name(entry_names, away_id),
                status: m.status,
                home_score: m.home_score,
                away_score: m.away_score,
                kickoff_at: m.kickoff_at,
                venue: m.venue.clone(),
                round_label: m.round_label.clone(),
                highlight: message.clone(),
            })
        })
        .collect();

    built.sort_by(|a, b| {
        status_priority(a.status)
            .cmp(&status_priority(b.status))
            .then_with(|| cmp_kickoff(a.kickoff_at, b.kickoff_at))
    });

    built
}

fn resolve_name(entry_names: &HashMap<Uuid, String>, entry_id: Uuid) -> String {
    entry_names
        .get(&entry_id)
        .cloned()
        .unwrap_or_else(|| "TBD".to_string())
}

/// Fixed display priority: live first, then contested results, then the
/// upcoming schedule, finished matches last.
fn status_priority(status: MatchStatus) -> u8 {
    match status {
        MatchStatus::InProgress => 0,
        MatchStatus::Disputed => 1,
        MatchStatus::Scheduled => 2,
        MatchStatus::Finalized => 3,
    }
}

fn cmp_kickoff(
    a: Option<chrono::NaiveDateTime>,
    b: Option<chrono::NaiveDateTime>,
) -> std::cmp::Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(
        home: Option<u128>,
        away: Option<u128>,
        status: MatchStatus,
        kickoff_hour: Option<u32>,
    ) -> Match {
        Match {
            match_id: Uuid::new_v4(),
            edition_id: Uuid::from_u128(999),
            stage_id: None,
            group_id: None,
            home_entry_id: home.map(Uuid::from_u128),
            away_entry_id: away.map(Uuid::from_u128),
            status,
            home_score: None,
            away_score: None,
            home_score_et: None,
            away_score_et: None,
            home_score_pens: None,
            away_score_pens: None,
            kickoff_at: kickoff_hour.map(|h| {
                NaiveDate::from_ymd_opt(2025, 6, 1)
                    .unwrap()
                    .and_hms_opt(h, 0, 0)
                    .unwrap()
            }),
            venue: None,
            round_label: None,
            bracket_slot: None,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    fn names() -> HashMap<Uuid, String> {
        HashMap::from([
            (Uuid::from_u128(1), "Alpha".to_string()),
            (Uuid::from_u128(2), "Bravo".to_string()),
        ])
    }

    #[test]
    fn placeholder_matches_are_excluded() {
        let matches = vec![
            row(Some(1), Some(2), MatchStatus::Scheduled, Some(12)),
            row(Some(1), None, MatchStatus::Scheduled, Some(13)),
            row(None, Some(2), MatchStatus::Scheduled, Some(14)),
        ];

        let built = build_display_matches(&matches, &names(), None);
        assert_eq!(built.len(), 1);
        assert_eq!(built[0].home_name, "Alpha");
        assert_eq!(built[0].away_name, "Bravo");
    }

    #[test]
    fn status_priority_then_kickoff() {
        let matches = vec![
            row(Some(1), Some(2), MatchStatus::Finalized, Some(9)),
            row(Some(1), Some(2), MatchStatus::Scheduled, Some(15)),
            row(Some(1), Some(2), MatchStatus::Scheduled, Some(10)),
            row(Some(1), Some(2), MatchStatus::Disputed, Some(11)),
            row(Some(1), Some(2), MatchStatus::InProgress, Some(12)),
        ];

        let built = build_display_matches(&matches, &names(), None);
        let order: Vec<MatchStatus> = built.iter().map(|m| m.status).collect();
        assert_eq!(
            order,
            vec![
                MatchStatus::InProgress,
                MatchStatus::Disputed,
                MatchStatus::Scheduled,
                MatchStatus::Scheduled,
                MatchStatus::Finalized,
            ]
        );
        // Within scheduled, earlier kickoff first.
        assert!(built[2].kickoff_at < built[3].kickoff_at);
    }

    #[test]
    fn missing_kickoff_sorts_last_within_status() {
        let matches = vec![
            row(Some(1), Some(2), MatchStatus::Scheduled, None),
            row(Some(1), Some(2), MatchStatus::Scheduled, Some(10)),
        ];

        let built = build_display_matches(&matches, &names(), None);
        assert!(built[0].kickoff_at.is_some());
        assert!(built[1].kickoff_at.is_none());
    }

    #[test]
    fn active_highlight_is_attached_to_every_match() {
        let highlight = Highlight {
            highlight_id: Uuid::new_v4(),
            edition_id: Uuid::from_u128(999),
            message: "GOAL!".to_string(),
            starts_at: chrono::NaiveDateTime::default(),
            ends_at: chrono::NaiveDateTime::default(),
        };
        let matches = vec![
            row(Some(1), Some(2), MatchStatus::Scheduled, Some(10)),
            row(Some(2), Some(1), MatchStatus::Finalized, Some(9)),
        ];

        let built = build_display_matches(&matches, &names(), Some(&highlight));
        assert!(built.iter().all(|m| m.highlight.as_deref() == Some("GOAL!")));
    }

    #[test]
    fn unknown_entry_renders_as_tbd() {
        let matches = vec![row(Some(1), Some(42), MatchStatus::Scheduled, Some(10))];
        let built = build_display_matches(&matches, &names(), None);
        assert_eq!(built[0].away_name, "TBD");
    }
}
