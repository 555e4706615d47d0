use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::scoreboard::{ScoringEventRow, TopScorer};
use crate::models::MatchEventType;

const TOP_SCORER_LIMIT: usize = 10;

/// Folds scoring and card events into per-(entry, person) tallies and
/// returns the top 10 by goals, assists, then player name. Events
/// without a person or entry association are skipped.
pub fn top_scorers(
    events: &[ScoringEventRow],
    team_names: &HashMap<Uuid, String>,
) -> Vec<TopScorer> {
    let mut tally: HashMap<(Uuid, Uuid), TopScorer> = HashMap::new();

    for event in events {
        let (Some(entry_id), Some(person_id)) = (event.entry_id, event.person_id) else {
            continue;
        };

        let scorer = tally.entry((entry_id, person_id)).or_insert_with(|| TopScorer {
            entry_id,
            person_id,
            player_name: event
                .person_name
                .clone()
                .unwrap_or_else(|| "Unknown".to_string()),
            team_name: team_names.get(&entry_id).cloned().unwrap_or_default(),
            goals: 0,
            assists: 0,
            yellow_cards: 0,
            red_cards: 0,
        });

        match event.event_type {
            MatchEventType::Goal | MatchEventType::PenaltyGoal => scorer.goals += 1,
            MatchEventType::Assist => scorer.assists += 1,
            MatchEventType::YellowCard => scorer.yellow_cards += 1,
            MatchEventType::RedCard => scorer.red_cards += 1,
        }
    }

    let mut scorers: Vec<TopScorer> = tally.into_values().collect();
    scorers.sort_by(|a, b| {
        b.goals
            .cmp(&a.goals)
            .then(b.assists.cmp(&a.assists))
            .then_with(|| {
                a.player_name
                    .to_lowercase()
                    .cmp(&b.player_name.to_lowercase())
            })
    });
    scorers.truncate(TOP_SCORER_LIMIT);

    scorers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ev(entry: u128, person: u128, name: &str, kind: MatchEventType) -> ScoringEventRow {
        ScoringEventRow {
            entry_id: Some(Uuid::from_u128(entry)),
            person_id: Some(Uuid::from_u128(person)),
            event_type: kind,
            person_name: Some(name.to_string()),
        }
    }

    fn names() -> HashMap<Uuid, String> {
        HashMap::from([
            (Uuid::from_u128(1), "Alpha".to_string()),
            (Uuid::from_u128(2), "Bravo".to_string()),
        ])
    }

    #[test]
    fn goals_and_penalty_goals_both_count() {
        let events = vec![
            ev(1, 10, "Ada", MatchEventType::Goal),
            ev(1, 10, "Ada", MatchEventType::PenaltyGoal),
            ev(2, 20, "Ben", MatchEventType::Goal),
            ev(2, 20, "Ben", MatchEventType::Assist),
        ];

        let scorers = top_scorers(&events, &names());
        assert_eq!(scorers[0].player_name, "Ada");
        assert_eq!(scorers[0].goals, 2);
        assert_eq!(scorers[1].player_name, "Ben");
        assert_eq!((scorers[1].goals, scorers[1].assists), (1, 1));
    }

    #[test]
    fn events_missing_person_or_entry_are_skipped() {
        let mut orphan = ev(1, 10, "Ada", MatchEventType::Goal);
        orphan.person_id = None;
        let mut teamless = ev(1, 11, "Ben", MatchEventType::Goal);
        teamless.entry_id = None;

        let scorers = top_scorers(&[orphan, teamless], &names());
        assert!(scorers.is_empty());
    }

    #[test]
    fn ties_break_by_assists_then_name() {
        let events = vec![
            ev(1, 10, "zoe", MatchEventType::Goal),
            ev(1, 11, "Anna", MatchEventType::Goal),
            ev(2, 20, "Mia", MatchEventType::Goal),
            ev(2, 20, "Mia", MatchEventType::Assist),
        ];

        let scorers = top_scorers(&events, &names());
        // All on one goal: Mia's assist wins, then case-insensitive name.
        assert_eq!(scorers[0].player_name, "Mia");
        assert_eq!(scorers[1].player_name, "Anna");
        assert_eq!(scorers[2].player_name, "zoe");
    }

    #[test]
    fn list_is_capped_at_ten() {
        let events: Vec<ScoringEventRow> = (0..15)
            .map(|i| ev(1, 100 + i as u128, &format!("P{i:02}"), MatchEventType::Goal))
            .collect();

        let scorers = top_scorers(&events, &names());
        assert_eq!(scorers.len(), 10);
    }

    #[test]
    fn cards_tally_without_affecting_rank() {
        let events = vec![
            ev(1, 10, "Ada", MatchEventType::Goal),
            ev(1, 10, "Ada", MatchEventType::YellowCard),
            ev(1, 10, "Ada", MatchEventType::RedCard),
        ];

        let scorers = top_scorers(&events, &names());
        assert_eq!(scorers[0].goals, 1);
        assert_eq!(scorers[0].yellow_cards, 1);
        assert_eq!(scorers[0].red_cards, 1);
    }
}
