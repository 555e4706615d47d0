use std::collections::HashMap;

use uuid::Uuid;

use crate::dto::scoreboard::{EntryRef, Standing};
use crate::models::{Match, MatchStatus};

/// Folds finalized and disputed matches into one Standing per known
/// entry. Matches referencing an entry outside the known set are
/// skipped; entries without matches keep all-zero stats.
pub fn compute_standings(matches: &[Match], entries: &[EntryRef]) -> Vec<Standing> {
    let mut table: HashMap<Uuid, Standing> = entries
        .iter()
        .map(|e| {
            (
                e.entry_id,
                Standing {
                    position: 0,
                    entry_id: e.entry_id,
                    team_name: e.team_name.clone(),
                    played: 0,
                    won: 0,
                    drawn: 0,
                    lost: 0,
                    goals_for: 0,
                    goals_against: 0,
                    goal_difference: 0,
                    points: 0,
                },
            )
        })
        .collect();

    for m in matches {
        if !counts_for_standings(m.status) {
            continue;
        }
        let (Some(home_id), Some(away_id)) = (m.home_entry_id, m.away_entry_id) else {
            continue;
        };
        if !table.contains_key(&home_id) || !table.contains_key(&away_id) {
            continue;
        }
        let home_goals = m.home_score.unwrap_or(0);
        let away_goals = m.away_score.unwrap_or(0);

        let outcome = home_goals.cmp(&away_goals);

        if let Some(home) = table.get_mut(&home_id) {
            home.played += 1;
            home.goals_for += home_goals;
            home.goals_against += away_goals;
            match outcome {
                std::cmp::Ordering::Greater => {
                    home.won += 1;
                    home.points += 3;
                }
                std::cmp::Ordering::Less => home.lost += 1,
                std::cmp::Ordering::Equal => {
                    home.drawn += 1;
                    home.points += 1;
                }
            }
        }
        if let Some(away) = table.get_mut(&away_id) {
            away.played += 1;
            away.goals_for += away_goals;
            away.goals_against += home_goals;
            match outcome {
                std::cmp::Ordering::Greater => away.lost += 1,
                std::cmp::Ordering::Less => {
                    away.won += 1;
                    away.points += 3;
                }
                std::cmp::Ordering::Equal => {
                    away.drawn += 1;
                    away.points += 1;
                }
            }
        }
    }

    let mut standings: Vec<Standing> = table.into_values().collect();
    for s in &mut standings {
        s.goal_difference = s.goals_for - s.goals_against;
    }
    standings.sort_by(|a, b| {
        b.points
            .cmp(&a.points)
            .then(b.goal_difference.cmp(&a.goal_difference))
            .then(b.goals_for.cmp(&a.goals_for))
            .then(a.entry_id.cmp(&b.entry_id))
    });
    for (i, s) in standings.iter_mut().enumerate() {
        s.position = i + 1;
    }

    standings
}

/// Only settled results count; a disputed score still stands until the
/// dispute is resolved.
pub fn counts_for_standings(status: MatchStatus) -> bool {
    matches!(status, MatchStatus::Finalized | MatchStatus::Disputed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchStatus;

    fn entry(id: u128, name: &str) -> EntryRef {
        EntryRef {
            entry_id: Uuid::from_u128(id),
            team_name: name.to_string(),
        }
    }

    fn played(home: u128, away: u128, score: (i32, i32), status: MatchStatus) -> Match {
        Match {
            match_id: Uuid::new_v4(),
            edition_id: Uuid::from_u128(999),
            stage_id: None,
            group_id: None,
            home_entry_id: Some(Uuid::from_u128(home)),
            away_entry_id: Some(Uuid::from_u128(away)),
            status,
            home_score: Some(score.0),
            away_score: Some(score.1),
            home_score_et: None,
            away_score_et: None,
            home_score_pens: None,
            away_score_pens: None,
            kickoff_at: None,
            venue: None,
            round_label: None,
            bracket_slot: None,
            created_at: chrono::NaiveDateTime::default(),
        }
    }

    #[test]
    fn worked_example_from_two_matches() {
        let entries = vec![entry(1, "Alpha"), entry(2, "Bravo"), entry(3, "Casper")];
        let matches = vec![
            played(1, 2, (3, 1), MatchStatus::Finalized),
            played(2, 3, (2, 2), MatchStatus::Finalized),
        ];

        let standings = compute_standings(&matches, &entries);

        let a = &standings[0];
        assert_eq!(a.team_name, "Alpha");
        assert_eq!((a.played, a.won, a.points), (1, 1, 3));

        // Bravo and Casper both sit on 1 point; Bravo's -2 goal
        // difference puts it below Casper's 0.
        let c = &standings[1];
        assert_eq!(c.team_name, "Casper");
        assert_eq!((c.played, c.drawn, c.points), (1, 1, 1));

        let b = &standings[2];
        assert_eq!(b.team_name, "Bravo");
        assert_eq!((b.played, b.won, b.drawn, b.lost, b.points), (2, 0, 1, 1, 1));
        assert_eq!(b.goal_difference, -2);
    }

    #[test]
    fn scheduled_matches_do_not_count() {
        let entries = vec![entry(1, "Alpha"), entry(2, "Bravo")];
        let matches = vec![
            played(1, 2, (4, 0), MatchStatus::Scheduled),
            played(1, 2, (4, 0), MatchStatus::InProgress),
        ];

        let standings = compute_standings(&matches, &entries);
        assert!(standings.iter().all(|s| s.played == 0 && s.points == 0));
    }

    #[test]
    fn disputed_matches_count_like_finalized() {
        let entries = vec![entry(1, "Alpha"), entry(2, "Bravo")];
        let matches = vec![played(1, 2, (0, 1), MatchStatus::Disputed)];

        let standings = compute_standings(&matches, &entries);
        assert_eq!(standings[0].team_name, "Bravo");
        assert_eq!(standings[0].points, 3);
        assert_eq!(standings[1].lost, 1);
    }

    #[test]
    fn unknown_entries_are_skipped() {
        let entries = vec![entry(1, "Alpha"), entry(2, "Bravo")];
        let matches = vec![
            played(1, 2, (1, 0), MatchStatus::Finalized),
            // 7 was never registered; row must not corrupt the table.
            played(1, 7, (9, 0), MatchStatus::Finalized),
        ];

        let standings = compute_standings(&matches, &entries);
        assert_eq!(standings.len(), 2);
        assert_eq!(standings[0].goals_for, 1);
    }

    #[test]
    fn entries_without_matches_appear_zeroed() {
        let entries = vec![entry(1, "Alpha"), entry(2, "Bravo"), entry(3, "Casper")];
        let matches = vec![played(1, 2, (2, 0), MatchStatus::Finalized)];

        let standings = compute_standings(&matches, &entries);
        assert_eq!(standings.len(), 3);
        let idle = standings.iter().find(|s| s.team_name == "Casper").unwrap();
        assert_eq!(idle.played, 0);
        assert_eq!(idle.points, 0);
    }

    #[test]
    fn accounting_invariants_hold() {
        let entries = vec![
            entry(1, "A"),
            entry(2, "B"),
            entry(3, "C"),
            entry(4, "D"),
        ];
        let matches = vec![
            played(1, 2, (2, 1), MatchStatus::Finalized),
            played(3, 4, (0, 0), MatchStatus::Finalized),
            played(1, 3, (1, 3), MatchStatus::Disputed),
            played(2, 4, (2, 2), MatchStatus::Finalized),
        ];

        let standings = compute_standings(&matches, &entries);

        let wins: u32 = standings.iter().map(|s| s.won).sum();
        let losses: u32 = standings.iter().map(|s| s.lost).sum();
        assert_eq!(wins, losses);

        // 2 decisive, 2 drawn: 3*2 + 2*2 points in total.
        let points: u32 = standings.iter().map(|s| s.points).sum();
        assert_eq!(points, 10);

        for s in &standings {
            assert_eq!(s.goal_difference, s.goals_for - s.goals_against);
            assert_eq!(s.points, 3 * s.won + s.drawn);
        }
    }

    #[test]
    fn ordering_is_a_total_order_with_id_tiebreak() {
        let entries = vec![entry(2, "Same"), entry(1, "Same"), entry(3, "Same")];
        let standings = compute_standings(&[], &entries);

        // All-zero stats: order falls through to ascending entry id.
        let ids: Vec<Uuid> = standings.iter().map(|s| s.entry_id).collect();
        assert_eq!(
            ids,
            vec![Uuid::from_u128(1), Uuid::from_u128(2), Uuid::from_u128(3)]
        );
        for (i, s) in standings.iter().enumerate() {
            assert_eq!(s.position, i + 1);
        }

        for pair in standings.windows(2) {
            let (a, b) = (&pair[0], &pair[1]);
            assert!(
                (a.points, a.goal_difference, a.goals_for)
                    >= (b.points, b.goal_difference, b.goals_for)
            );
        }
    }
}
