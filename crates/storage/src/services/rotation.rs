use crate::dto::scoreboard::{DisplayMatch, RotationSection, Standing, TopScorer};
use crate::models::MatchStatus;

const DEFAULT_ROTATION: [RotationSection; 4] = [
    RotationSection::LiveMatches,
    RotationSection::Upcoming,
    RotationSection::Standings,
    RotationSection::TopScorers,
];

/// Picks which display sections should rotate on the public screen,
/// dropping sections with nothing to show. An edition with no content at
/// all still gets the full default rotation rather than a blank screen.
pub fn select_rotation(
    matches: &[DisplayMatch],
    standings: &[Standing],
    scorers: &[TopScorer],
) -> Vec<RotationSection> {
    let has_live = matches.iter().any(|m| m.status == MatchStatus::InProgress);
    let has_upcoming = matches.iter().any(|m| m.status == MatchStatus::Scheduled);
    let has_standings = !standings.is_empty();
    let has_scorers = !scorers.is_empty();

    let rotation: Vec<RotationSection> = DEFAULT_ROTATION
        .into_iter()
        .filter(|section| match section {
            RotationSection::LiveMatches => has_live,
            RotationSection::Upcoming => has_upcoming,
            RotationSection::Standings => has_standings,
            RotationSection::TopScorers => has_scorers,
        })
        .collect();

    if rotation.is_empty() {
        DEFAULT_ROTATION.to_vec()
    } else {
        rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn display(status: MatchStatus) -> DisplayMatch {
        DisplayMatch {
            match_id: Uuid::new_v4(),
            home_name: "A".to_string(),
            away_name: "B".to_string(),
            status,
            home_score: None,
            away_score: None,
            kickoff_at: None,
            venue: None,
            round_label: None,
            highlight: None,
        }
    }

    fn standing() -> Standing {
        Standing {
            position: 1,
            entry_id: Uuid::new_v4(),
            team_name: "A".to_string(),
            played: 0,
            won: 0,
            drawn: 0,
            lost: 0,
            goals_for: 0,
            goals_against: 0,
            goal_difference: 0,
            points: 0,
        }
    }

    #[test]
    fn empty_edition_falls_back_to_full_rotation() {
        let rotation = select_rotation(&[], &[], &[]);
        assert_eq!(rotation, DEFAULT_ROTATION.to_vec());
    }

    #[test]
    fn sections_without_content_are_dropped() {
        let matches = vec![display(MatchStatus::Scheduled)];
        let standings = vec![standing()];

        let rotation = select_rotation(&matches, &standings, &[]);
        assert_eq!(
            rotation,
            vec![RotationSection::Upcoming, RotationSection::Standings]
        );
    }

    #[test]
    fn live_section_needs_an_in_progress_match() {
        let matches = vec![display(MatchStatus::Finalized)];
        let rotation = select_rotation(&matches, &[standing()], &[]);
        assert!(!rotation.contains(&RotationSection::LiveMatches));

        let matches = vec![display(MatchStatus::InProgress)];
        let rotation = select_rotation(&matches, &[standing()], &[]);
        assert!(rotation.contains(&RotationSection::LiveMatches));
    }
}
