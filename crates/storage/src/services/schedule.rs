use uuid::Uuid;

/// One generated fixture. Knockout placeholder slots carry `None` entry
/// ids until earlier rounds settle; the public view hides them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFixture {
    pub round: u32,
    pub index: u32,
    pub home: Option<Uuid>,
    pub away: Option<Uuid>,
    pub round_label: String,
    pub bracket_slot: Option<String>,
}

/// Circle-method round robin: every entry meets every other exactly
/// once across N-1 rounds (N rounds for an odd entry count, one bye per
/// round, byes omitted from the output).
pub fn round_robin_circle(entries: &[Uuid]) -> Vec<GeneratedFixture> {
    if entries.len() < 2 {
        return Vec::new();
    }

    let mut seats: Vec<Option<Uuid>> = entries.iter().copied().map(Some).collect();
    if seats.len() % 2 != 0 {
        seats.push(None);
    }
    let n = seats.len();

    let mut fixtures = Vec::new();
    for round in 1..n as u32 {
        let mut index = 0u32;
        for i in 0..n / 2 {
            if let (Some(home), Some(away)) = (seats[i], seats[n - 1 - i]) {
                index += 1;
                fixtures.push(GeneratedFixture {
                    round,
                    index,
                    home: Some(home),
                    away: Some(away),
                    round_label: format!("Round {round}"),
                    bracket_slot: None,
                });
            }
        }
        // Rotate every seat but the first.
        seats[1..].rotate_right(1);
    }

    fixtures
}

/// Seeded single-elimination bracket: the draw is padded to the next
/// power of two, top seeds take the byes, and the canonical bracket
/// order (1 vs N, 2 vs N-1, recursively interleaved) keeps the highest
/// seeds apart until the latest possible round. Bye winners are placed
/// straight into their second-round slot; all later slots stay empty.
pub fn knockout_seeded(seeds: &[Uuid]) -> Vec<GeneratedFixture> {
    if seeds.len() < 2 {
        return Vec::new();
    }

    let size = seeds.len().next_power_of_two();
    let order = bracket_order(size);

    // First-round pairs in bracket order; seeds beyond the field are byes.
    let pairs: Vec<(Option<Uuid>, Option<Uuid>)> = order
        .chunks(2)
        .map(|pair| (seed_entry(seeds, pair[0]), seed_entry(seeds, pair[1])))
        .collect();

    let mut fixtures = Vec::new();
    let rounds = size.trailing_zeros();

    let mut index = 0u32;
    for (home, away) in &pairs {
        index += 1;
        if home.is_some() && away.is_some() {
            fixtures.push(GeneratedFixture {
                round: 1,
                index,
                home: *home,
                away: *away,
                round_label: knockout_round_label(pairs.len()),
                bracket_slot: Some(format!("R1-M{index}")),
            });
        }
    }

    for round in 2..=rounds {
        let slots = size >> round;
        for slot in 0..slots {
            // A first-round bye feeds its seed straight into round two.
            let (home, away) = if round == 2 {
                (bye_winner(&pairs, slot * 2), bye_winner(&pairs, slot * 2 + 1))
            } else {
                (None, None)
            };
            fixtures.push(GeneratedFixture {
                round,
                index: slot as u32 + 1,
                home,
                away,
                round_label: knockout_round_label(slots),
                bracket_slot: Some(format!("R{round}-M{}", slot + 1)),
            });
        }
    }

    fixtures
}

/// Canonical seeding order for a bracket of `size` (a power of two):
/// repeatedly interleave each seed with its complement so 1 and 2 land
/// in opposite halves.
fn bracket_order(size: usize) -> Vec<usize> {
    let mut order = vec![1];
    while order.len() < size {
        let next_len = order.len() * 2;
        let mut next = Vec::with_capacity(next_len);
        for &seed in &order {
            next.push(seed);
            next.push(next_len + 1 - seed);
        }
        order = next;
    }
    order
}

fn seed_entry(seeds: &[Uuid], seed: usize) -> Option<Uuid> {
    seeds.get(seed - 1).copied()
}

fn bye_winner(pairs: &[(Option<Uuid>, Option<Uuid>)], pair_index: usize) -> Option<Uuid> {
    match pairs.get(pair_index) {
        Some((Some(a), None)) => Some(*a),
        Some((None, Some(b))) => Some(*b),
        _ => None,
    }
}

fn knockout_round_label(matches_in_round: usize) -> String {
    match matches_in_round {
        1 => "Final".to_string(),
        2 => "Semi-finals".to_string(),
        4 => "Quarter-finals".to_string(),
        n => format!("Round of {}", n * 2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn ids(n: u128) -> Vec<Uuid> {
        (1..=n).map(Uuid::from_u128).collect()
    }

    #[test]
    fn round_robin_even_field() {
        let entries = ids(4);
        let fixtures = round_robin_circle(&entries);

        assert_eq!(fixtures.len(), 6);
        assert_eq!(fixtures.iter().map(|f| f.round).max(), Some(3));

        // Each round is a perfect matching.
        for round in 1..=3 {
            let mut seen = HashSet::new();
            for f in fixtures.iter().filter(|f| f.round == round) {
                assert!(seen.insert(f.home.unwrap()));
                assert!(seen.insert(f.away.unwrap()));
            }
            assert_eq!(seen.len(), 4);
        }

        // Every pair meets exactly once.
        let mut pairings = HashSet::new();
        for f in &fixtures {
            let mut pair = [f.home.unwrap(), f.away.unwrap()];
            pair.sort();
            assert!(pairings.insert(pair));
        }
        assert_eq!(pairings.len(), 6);
    }

    #[test]
    fn round_robin_odd_field_gets_byes() {
        let entries = ids(5);
        let fixtures = round_robin_circle(&entries);

        // C(5,2) pairings over 5 rounds, two matches per round.
        assert_eq!(fixtures.len(), 10);
        assert_eq!(fixtures.iter().map(|f| f.round).max(), Some(5));
        for round in 1..=5 {
            assert_eq!(fixtures.iter().filter(|f| f.round == round).count(), 2);
        }
    }

    #[test]
    fn round_robin_degenerate_fields() {
        assert!(round_robin_circle(&[]).is_empty());
        assert!(round_robin_circle(&ids(1)).is_empty());
        assert_eq!(round_robin_circle(&ids(2)).len(), 1);
    }

    #[test]
    fn knockout_full_bracket_of_eight() {
        let seeds = ids(8);
        let fixtures = knockout_seeded(&seeds);

        let r1: Vec<_> = fixtures.iter().filter(|f| f.round == 1).collect();
        assert_eq!(r1.len(), 4);
        let pairs: Vec<(u128, u128)> = r1
            .iter()
            .map(|f| (f.home.unwrap().as_u128(), f.away.unwrap().as_u128()))
            .collect();
        assert_eq!(pairs, vec![(1, 8), (4, 5), (2, 7), (3, 6)]);

        // 4 + 2 + 1 slots, later rounds empty.
        assert_eq!(fixtures.len(), 7);
        assert!(fixtures
            .iter()
            .filter(|f| f.round > 1)
            .all(|f| f.home.is_none() && f.away.is_none()));
        assert_eq!(
            fixtures.last().unwrap().bracket_slot.as_deref(),
            Some("R3-M1")
        );
        assert_eq!(fixtures.last().unwrap().round_label, "Final");
    }

    #[test]
    fn knockout_partial_field_gives_top_seeds_byes() {
        let seeds = ids(6);
        let fixtures = knockout_seeded(&seeds);

        let r1: Vec<_> = fixtures.iter().filter(|f| f.round == 1).collect();
        assert_eq!(r1.len(), 2);
        let pairs: Vec<(u128, u128)> = r1
            .iter()
            .map(|f| (f.home.unwrap().as_u128(), f.away.unwrap().as_u128()))
            .collect();
        assert_eq!(pairs, vec![(4, 5), (3, 6)]);

        // Seeds 1 and 2 advance straight into opposite semi-final slots.
        let r2: Vec<_> = fixtures.iter().filter(|f| f.round == 2).collect();
        assert_eq!(r2.len(), 2);
        assert_eq!(r2[0].home.map(|u| u.as_u128()), Some(1));
        assert!(r2[0].away.is_none());
        assert_eq!(r2[1].home.map(|u| u.as_u128()), Some(2));
        assert!(r2[1].away.is_none());
    }

    #[test]
    fn knockout_two_entries_is_a_single_final() {
        let fixtures = knockout_seeded(&ids(2));
        assert_eq!(fixtures.len(), 1);
        assert_eq!(fixtures[0].round_label, "Final");
        assert_eq!(fixtures[0].bracket_slot.as_deref(), Some("R1-M1"));
    }
}
