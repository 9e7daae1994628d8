use std::time::Duration;

use gr_core::PlayerId;

use crate::config::RevealConfig;
use crate::error::{DraftError, DraftResult};
use crate::event::RollTarget;
use crate::sequence::{AssignContext, CancelHandle, MemberReveal, Sequence, Step};
use crate::team::TeamPair;

/// Gods a member may receive, given what everyone else currently shows.
pub fn available_for(
    teams: &TeamPair,
    player: &PlayerId,
    names: &[String],
    allow_duplicates: bool,
) -> Vec<String> {
    if allow_duplicates {
        return names.to_vec();
    }
    let taken = teams.gods_except(player);
    names
        .iter()
        .filter(|n| !taken.contains(n.as_str()))
        .cloned()
        .collect()
}

/// Re-roll one team member.
///
/// The pool is fixed when the reroll starts, from the live assignments of
/// every other member.
#[derive(Debug)]
pub struct Reroll {
    current: MemberReveal,
    step_interval: Duration,
    cancel: CancelHandle,
}

impl Reroll {
    /// Prepare a reroll for `player`.
    pub fn new(
        teams: &TeamPair,
        player: &PlayerId,
        names: &[String],
        allow_duplicates: bool,
        reveal: &RevealConfig,
    ) -> DraftResult<Self> {
        let member = teams
            .member(player)
            .ok_or_else(|| DraftError::PlayerNotInTeams(player.clone()))?;

        let pool = available_for(teams, player, names, allow_duplicates);
        let current = MemberReveal::new(
            RollTarget::from(member),
            pool,
            reveal.steps,
            member.god.clone(),
        )
        .ok_or_else(|| DraftError::NoCharactersAvailable {
            player: member.name.clone(),
        })?;

        Ok(Self {
            current,
            step_interval: reveal.step_interval,
            cancel: CancelHandle::new(),
        })
    }

    /// The player being re-rolled.
    pub fn target(&self) -> &RollTarget {
        self.current.target()
    }
}

impl Sequence for Reroll {
    type Output = String;

    fn step(&mut self, ctx: &mut AssignContext<'_>) -> DraftResult<Step<String>> {
        Ok(match self.current.advance(ctx)? {
            Some(god) => Step::Done(god),
            None => Step::Wait(self.step_interval),
        })
    }

    fn cancel(&mut self, ctx: &mut AssignContext<'_>) {
        self.current.restore(ctx);
    }

    fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::team::{Team, TeamMember};

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn teams() -> TeamPair {
        let m = |id: &str, god: Option<&str>| TeamMember {
            id: PlayerId::from(id),
            name: id.to_string(),
            god: god.map(str::to_string),
        };
        TeamPair {
            first: Team::new("Team 1", vec![m("a", Some("Ares")), m("b", Some("Loki"))]),
            second: Team::new("Team 2", vec![m("c", None)]),
        }
    }

    #[test]
    fn available_excludes_other_members() {
        let all = names(&["Ares", "Loki", "Thor"]);
        let pool = available_for(&teams(), &PlayerId::from("a"), &all, false);
        assert_eq!(pool, names(&["Ares", "Thor"]));
        let pool = available_for(&teams(), &PlayerId::from("c"), &all, false);
        assert_eq!(pool, names(&["Thor"]));
    }

    #[test]
    fn available_with_duplicates_is_everything() {
        let all = names(&["Ares", "Loki"]);
        assert_eq!(available_for(&teams(), &PlayerId::from("c"), &all, true), all);
    }

    #[test]
    fn unknown_player() {
        let err = Reroll::new(
            &teams(),
            &PlayerId::from("zz"),
            &names(&["Thor"]),
            false,
            &RevealConfig::instant(),
        )
        .unwrap_err();
        assert_eq!(err, DraftError::PlayerNotInTeams(PlayerId::from("zz")));
    }

    #[test]
    fn exhausted_pool() {
        let err = Reroll::new(
            &teams(),
            &PlayerId::from("c"),
            &names(&["Ares", "Loki"]),
            false,
            &RevealConfig::instant(),
        )
        .unwrap_err();
        assert_eq!(
            err,
            DraftError::NoCharactersAvailable {
                player: "c".to_string()
            }
        );
    }
}
