use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use gr_core::{Catalog, Player, PlayerId};

use crate::bulk::BulkAssignment;
use crate::config::DraftConfig;
use crate::error::{DraftError, DraftResult};
use crate::event::DraftEvent;
use crate::partition::partition;
use crate::reroll::Reroll;
use crate::roll::SingleRoll;
use crate::scheduler::Scheduler;
use crate::sequence::{AssignContext, Outcome, Sequence, Step};
use crate::team::{TeamPair, TeamSizes};

/// A draft session: the catalog, the RNG, and the current teams.
///
/// Sequences are created with `start_*` and driven with [`Draft::run`] (or
/// tick by tick with [`Draft::step`]). Only one runs at a time.
pub struct Draft {
    names: Vec<String>,
    config: DraftConfig,
    rng: StdRng,
    teams: Option<TeamPair>,
}

impl std::fmt::Debug for Draft {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Draft")
            .field("gods", &self.names.len())
            .field("allow_duplicates", &self.config.allow_duplicates)
            .field("teams", &self.teams.as_ref().map(TeamPair::len))
            .finish()
    }
}

impl Draft {
    /// Create a session over `catalog`.
    pub fn new(catalog: &Catalog, config: DraftConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            names: catalog.list_names().into_iter().map(str::to_string).collect(),
            config,
            rng,
            teams: None,
        }
    }

    /// Catalog names in order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Active configuration.
    pub fn config(&self) -> &DraftConfig {
        &self.config
    }

    /// Toggle duplicate gods for sequences started from now on.
    pub fn set_allow_duplicates(&mut self, allow: bool) {
        self.config.allow_duplicates = allow;
    }

    /// Draw two fresh teams from `roster`, replacing any previous teams.
    ///
    /// Returns the [`DraftEvent::TeamsGenerated`] describing the split; the
    /// teams themselves are available from [`Draft::teams`].
    pub fn generate_teams(
        &mut self,
        roster: &[Player],
        sizes: TeamSizes,
    ) -> DraftResult<DraftEvent> {
        let teams = self.teams.insert(partition(roster, sizes, &mut self.rng)?);
        Ok(DraftEvent::TeamsGenerated {
            first: teams.first.len(),
            second: teams.second.len(),
            benched: roster.len().saturating_sub(teams.len()),
        })
    }

    /// The current teams, if generated.
    pub fn teams(&self) -> Option<&TeamPair> {
        self.teams.as_ref()
    }

    /// Forget every assigned god on the current teams.
    pub fn clear_assignments(&mut self) {
        if let Some(teams) = self.teams.as_mut() {
            teams.clear_gods();
        }
    }

    /// Plan a bulk assignment over the current teams.
    pub fn start_bulk(&mut self) -> DraftResult<BulkAssignment> {
        let teams = self.teams.as_ref().ok_or(DraftError::NoTeams)?;
        Ok(BulkAssignment::new(
            teams,
            self.config.allow_duplicates,
            self.config.reveal.clone(),
            &mut self.rng,
        ))
    }

    /// Plan a reroll of one team member.
    pub fn start_reroll(&self, player: &PlayerId) -> DraftResult<Reroll> {
        let teams = self.teams.as_ref().ok_or(DraftError::NoTeams)?;
        Reroll::new(
            teams,
            player,
            &self.names,
            self.config.allow_duplicates,
            &self.config.reveal,
        )
    }

    /// Plan a free roll over the whole catalog.
    pub fn start_roll(&self) -> DraftResult<SingleRoll> {
        SingleRoll::new(self.names.clone(), &self.config.reveal)
    }

    /// Advance `seq` by one step and return the step with the events it
    /// produced. For front ends that schedule ticks themselves.
    pub fn step<S: Sequence>(
        &mut self,
        seq: &mut S,
    ) -> DraftResult<(Step<S::Output>, Vec<DraftEvent>)> {
        let mut events = Vec::new();
        let step = seq.step(&mut self.context(&mut events))?;
        Ok((step, events))
    }

    /// Drive `seq` to completion, waiting on `scheduler` between steps and
    /// passing every event to `observer` as soon as it happens.
    ///
    /// The cancel handle is checked before each step. Events are delivered
    /// even when the sequence fails.
    pub fn run<S, O>(
        &mut self,
        mut seq: S,
        scheduler: &mut dyn Scheduler,
        mut observer: O,
    ) -> DraftResult<Outcome<S::Output>>
    where
        S: Sequence,
        O: FnMut(&DraftEvent),
    {
        let handle = seq.cancel_handle();
        let mut events = Vec::new();

        loop {
            if handle.is_cancelled() {
                seq.cancel(&mut self.context(&mut events));
                events.drain(..).for_each(|e| observer(&e));
                debug!("sequence cancelled");
                return Ok(Outcome::Cancelled);
            }

            let step = seq.step(&mut self.context(&mut events));
            events.drain(..).for_each(|e| observer(&e));

            match step? {
                Step::Wait(delay) => scheduler.wait(delay),
                Step::Done(output) => return Ok(Outcome::Completed(output)),
            }
        }
    }

    fn context<'a>(&'a mut self, events: &'a mut Vec<DraftEvent>) -> AssignContext<'a> {
        AssignContext {
            teams: self.teams.as_mut(),
            names: &self.names,
            rng: &mut self.rng,
            events,
        }
    }
}
