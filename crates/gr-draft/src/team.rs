use std::collections::HashSet;
use std::fmt;

use gr_core::{Player, PlayerId};

/// A player's seat on a team, with the god currently shown for them.
///
/// Assignments live here, not on the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    /// Roster id of the player.
    pub id: PlayerId,
    /// Player name at the time teams were generated.
    pub name: String,
    /// Assigned (or currently rolling) god.
    pub god: Option<String>,
}

impl From<&Player> for TeamMember {
    fn from(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            god: None,
        }
    }
}

/// A labelled, ordered list of members.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    /// Display label, e.g. "Team 1".
    pub label: String,
    /// Members in draw order.
    pub members: Vec<TeamMember>,
}

impl Team {
    /// Create a team.
    pub fn new(label: impl Into<String>, members: Vec<TeamMember>) -> Self {
        Self {
            label: label.into(),
            members,
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the team has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// The two teams of a matchup. No player appears in both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamPair {
    /// Team 1.
    pub first: Team,
    /// Team 2.
    pub second: Team,
}

impl TeamPair {
    /// Every member of both teams, Team 1 first.
    pub fn members(&self) -> impl Iterator<Item = &TeamMember> {
        self.first.members.iter().chain(self.second.members.iter())
    }

    /// Mutable access to every member.
    pub fn members_mut(&mut self) -> impl Iterator<Item = &mut TeamMember> {
        self.first
            .members
            .iter_mut()
            .chain(self.second.members.iter_mut())
    }

    /// Find a member by player id.
    pub fn member(&self, id: &PlayerId) -> Option<&TeamMember> {
        self.members().find(|m| &m.id == id)
    }

    /// Find a member by player id, mutably.
    pub fn member_mut(&mut self, id: &PlayerId) -> Option<&mut TeamMember> {
        self.members_mut().find(|m| &m.id == id)
    }

    /// Gods currently shown for every member other than `id`.
    pub fn gods_except(&self, id: &PlayerId) -> HashSet<&str> {
        self.members()
            .filter(|m| &m.id != id)
            .filter_map(|m| m.god.as_deref())
            .collect()
    }

    /// `(id, god)` for every member, for recording onto the roster.
    pub fn assignments(&self) -> impl Iterator<Item = (&PlayerId, Option<&str>)> {
        self.members().map(|m| (&m.id, m.god.as_deref()))
    }

    /// Forget every assigned god.
    pub fn clear_gods(&mut self) {
        for m in self.members_mut() {
            m.god = None;
        }
    }

    /// Total number of members.
    pub fn len(&self) -> usize {
        self.first.len() + self.second.len()
    }

    /// Whether both teams are empty.
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }
}

/// Requested team sizes with the "balanced teams" toggle.
///
/// While balanced, the second size mirrors the first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TeamSizes {
    first: usize,
    second: usize,
    balanced: bool,
}

impl Default for TeamSizes {
    fn default() -> Self {
        Self::balanced(5)
    }
}

impl TeamSizes {
    /// Equal sizes with the balance toggle on.
    pub fn balanced(size: usize) -> Self {
        Self {
            first: size,
            second: size,
            balanced: true,
        }
    }

    /// Independent sizes with the balance toggle off.
    pub fn new(first: usize, second: usize) -> Self {
        Self {
            first,
            second,
            balanced: false,
        }
    }

    /// Set the first size. While balanced, the second follows.
    pub fn set_first(&mut self, size: usize) {
        self.first = size;
        if self.balanced {
            self.second = size;
        }
    }

    /// Set the second size. Has no effect while balanced.
    pub fn set_second(&mut self, size: usize) {
        if !self.balanced {
            self.second = size;
        }
    }

    /// Toggle balancing. Turning it on copies the first size to the second.
    pub fn set_balanced(&mut self, balanced: bool) {
        self.balanced = balanced;
        if balanced {
            self.second = self.first;
        }
    }

    /// Size of Team 1.
    pub fn first(&self) -> usize {
        self.first
    }

    /// Size of Team 2.
    pub fn second(&self) -> usize {
        self.second
    }

    /// Whether the balance toggle is on.
    pub fn is_balanced(&self) -> bool {
        self.balanced
    }

    /// Players needed for both teams.
    pub fn total(&self) -> usize {
        self.first + self.second
    }
}

impl fmt::Display for TeamSizes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}v{}", self.first, self.second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn member(id: &str, god: Option<&str>) -> TeamMember {
        TeamMember {
            id: PlayerId::from(id),
            name: id.to_uppercase(),
            god: god.map(str::to_string),
        }
    }

    fn pair() -> TeamPair {
        TeamPair {
            first: Team::new("Team 1", vec![member("a", Some("Loki")), member("b", None)]),
            second: Team::new("Team 2", vec![member("c", Some("Ares"))]),
        }
    }

    #[test]
    fn default_sizes_are_five_a_side() {
        let sizes = TeamSizes::default();
        assert_eq!((sizes.first(), sizes.second()), (5, 5));
        assert!(sizes.is_balanced());
        assert_eq!(sizes.to_string(), "5v5");
    }

    #[test]
    fn balanced_second_follows_first() {
        let mut sizes = TeamSizes::default();
        sizes.set_first(3);
        assert_eq!(sizes.second(), 3);
        sizes.set_second(1);
        assert_eq!(sizes.second(), 3);
    }

    #[test]
    fn unbalanced_sizes_are_independent() {
        let mut sizes = TeamSizes::default();
        sizes.set_balanced(false);
        sizes.set_first(2);
        sizes.set_second(4);
        assert_eq!(sizes.to_string(), "2v4");
        assert_eq!(sizes.total(), 6);
    }

    #[test]
    fn rebalancing_copies_first() {
        let mut sizes = TeamSizes::new(2, 4);
        sizes.set_balanced(true);
        assert_eq!((sizes.first(), sizes.second()), (2, 2));
    }

    #[test]
    fn gods_except_skips_target() {
        let teams = pair();
        let taken = teams.gods_except(&PlayerId::from("a"));
        assert_eq!(taken, HashSet::from(["Ares"]));
        let taken = teams.gods_except(&PlayerId::from("b"));
        assert_eq!(taken, HashSet::from(["Loki", "Ares"]));
    }

    #[test]
    fn member_lookup_spans_both_teams() {
        let mut teams = pair();
        assert_eq!(teams.len(), 3);
        assert_eq!(teams.member(&PlayerId::from("c")).unwrap().name, "C");
        teams.member_mut(&PlayerId::from("b")).unwrap().god = Some("Thor".into());
        assert_eq!(teams.assignments().filter(|(_, g)| g.is_some()).count(), 3);
        teams.clear_gods();
        assert!(teams.members().all(|m| m.god.is_none()));
    }
}
