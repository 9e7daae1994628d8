use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use gr_core::Player;

use crate::error::{DraftError, DraftResult};
use crate::team::{Team, TeamMember, TeamPair, TeamSizes};

/// Label of the first team.
pub const FIRST_LABEL: &str = "Team 1";
/// Label of the second team.
pub const SECOND_LABEL: &str = "Team 2";

/// Split a roster into two disjoint teams.
///
/// The roster is shuffled with a uniform Fisher–Yates shuffle; the first
/// `sizes.first()` players form Team 1, the next `sizes.second()` form
/// Team 2, and anyone left over sits out.
pub fn partition<R: Rng + ?Sized>(
    roster: &[Player],
    sizes: TeamSizes,
    rng: &mut R,
) -> DraftResult<TeamPair> {
    let (first, second) = (sizes.first(), sizes.second());
    if first == 0 || second == 0 {
        return Err(DraftError::InvalidTeamSize { first, second });
    }

    let needed = sizes.total();
    if roster.len() < needed {
        return Err(DraftError::InsufficientPlayers {
            needed,
            available: roster.len(),
            first,
            second,
        });
    }

    let mut shuffled: Vec<&Player> = roster.iter().collect();
    shuffled.shuffle(rng);

    let team = |label: &str, players: &[&Player]| {
        Team::new(label, players.iter().map(|p| TeamMember::from(*p)).collect())
    };
    let pair = TeamPair {
        first: team(FIRST_LABEL, &shuffled[..first]),
        second: team(SECOND_LABEL, &shuffled[first..needed]),
    };

    debug!(
        sizes = %sizes,
        roster = roster.len(),
        benched = roster.len() - needed,
        "teams generated"
    );
    Ok(pair)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::{HashMap, HashSet};

    use gr_core::PlayerId;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn roster(names: &[&str]) -> Vec<Player> {
        names
            .iter()
            .enumerate()
            .map(|(i, n)| Player {
                id: PlayerId::from(format!("p{i}")),
                name: n.to_string(),
                god: None,
            })
            .collect()
    }

    fn ids(team: &Team) -> HashSet<PlayerId> {
        team.members.iter().map(|m| m.id.clone()).collect()
    }

    #[test]
    fn ten_players_five_a_side() {
        let players = roster(&[
            "Alice", "Bob", "Cara", "Dan", "Eve", "Fay", "Gus", "Han", "Ivy", "Jan",
        ]);
        let mut rng = StdRng::seed_from_u64(42);
        let teams = partition(&players, TeamSizes::balanced(5), &mut rng).unwrap();

        assert_eq!(teams.first.label, "Team 1");
        assert_eq!(teams.second.label, "Team 2");
        assert_eq!(teams.first.len(), 5);
        assert_eq!(teams.second.len(), 5);

        let a = ids(&teams.first);
        let b = ids(&teams.second);
        assert!(a.is_disjoint(&b));
        let all: HashSet<PlayerId> = players.iter().map(|p| p.id.clone()).collect();
        assert_eq!(a.union(&b).cloned().collect::<HashSet<_>>(), all);
    }

    #[test]
    fn members_carry_identity_without_gods() {
        let players = roster(&["Alice", "Bob"]);
        let mut rng = StdRng::seed_from_u64(1);
        let teams = partition(&players, TeamSizes::balanced(1), &mut rng).unwrap();
        for m in teams.members() {
            let p = players.iter().find(|p| p.id == m.id).unwrap();
            assert_eq!(m.name, p.name);
            assert!(m.god.is_none());
        }
    }

    #[test]
    fn insufficient_players() {
        let players = roster(&["Alice", "Bob", "Cara"]);
        let mut rng = StdRng::seed_from_u64(1);
        let err = partition(&players, TeamSizes::new(2, 2), &mut rng).unwrap_err();
        assert_eq!(
            err,
            DraftError::InsufficientPlayers {
                needed: 4,
                available: 3,
                first: 2,
                second: 2,
            }
        );
    }

    #[test]
    fn zero_size_rejected() {
        let players = roster(&["Alice", "Bob"]);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            partition(&players, TeamSizes::new(0, 1), &mut rng).unwrap_err(),
            DraftError::InvalidTeamSize {
                first: 0,
                second: 1
            }
        );
    }

    #[test]
    fn extra_players_sit_out() {
        let players = roster(&["A", "B", "C", "D", "E", "F", "G"]);
        let mut rng = StdRng::seed_from_u64(9);
        let teams = partition(&players, TeamSizes::new(2, 3), &mut rng).unwrap();
        assert_eq!(teams.len(), 5);
    }

    #[test]
    fn team_one_membership_is_uniform() {
        let players = roster(&["A", "B", "C", "D", "E", "F", "G"]);
        let sizes = TeamSizes::new(3, 2);
        let trials = 20_000;
        let mut rng = StdRng::seed_from_u64(2024);
        let mut hits: HashMap<PlayerId, usize> = HashMap::new();

        for _ in 0..trials {
            let teams = partition(&players, sizes, &mut rng).unwrap();
            for m in &teams.first.members {
                *hits.entry(m.id.clone()).or_default() += 1;
            }
        }

        let expected = 3.0 / 7.0;
        for p in &players {
            let freq = hits.get(&p.id).copied().unwrap_or(0) as f64 / trials as f64;
            assert!(
                (freq - expected).abs() < 0.02,
                "{} in Team 1 with frequency {freq:.3}, expected {expected:.3}",
                p.name
            );
        }
    }

    #[test]
    fn every_ordering_is_equally_likely() {
        let players = roster(&["A", "B", "C"]);
        let sizes = TeamSizes::new(1, 2);
        let trials = 30_000;
        let mut rng = StdRng::seed_from_u64(77);
        let mut counts: HashMap<Vec<String>, usize> = HashMap::new();

        for _ in 0..trials {
            let teams = partition(&players, sizes, &mut rng).unwrap();
            let order: Vec<String> = teams.members().map(|m| m.name.clone()).collect();
            *counts.entry(order).or_default() += 1;
        }

        assert_eq!(counts.len(), 6);
        for (order, n) in counts {
            let freq = n as f64 / trials as f64;
            assert!(
                (freq - 1.0 / 6.0).abs() < 0.015,
                "{order:?} drawn with frequency {freq:.3}"
            );
        }
    }

    proptest! {
        #[test]
        fn partition_respects_sizes(
            len in 0usize..14,
            first in 1usize..6,
            second in 1usize..6,
            seed in any::<u64>(),
        ) {
            let names: Vec<String> = (0..len).map(|i| format!("P{i}")).collect();
            let refs: Vec<&str> = names.iter().map(String::as_str).collect();
            let players = roster(&refs);
            let mut rng = StdRng::seed_from_u64(seed);

            match partition(&players, TeamSizes::new(first, second), &mut rng) {
                Ok(teams) => {
                    prop_assert!(len >= first + second);
                    prop_assert_eq!(teams.first.len(), first);
                    prop_assert_eq!(teams.second.len(), second);
                    prop_assert!(ids(&teams.first).is_disjoint(&ids(&teams.second)));
                }
                Err(DraftError::InsufficientPlayers { needed, available, .. }) => {
                    prop_assert!(len < first + second);
                    prop_assert_eq!(needed, first + second);
                    prop_assert_eq!(available, len);
                }
                Err(other) => prop_assert!(false, "unexpected error: {other}"),
            }
        }
    }
}
