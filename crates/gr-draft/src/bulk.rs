use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use gr_core::PlayerId;

use crate::config::RevealConfig;
use crate::error::{DraftError, DraftResult};
use crate::event::{DraftEvent, RollTarget};
use crate::sequence::{AssignContext, CancelHandle, MemberReveal, Sequence, Step};
use crate::team::TeamPair;

/// Result of a completed bulk run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkReport {
    /// `(player, god)` in the order they were assigned.
    pub assigned: Vec<(PlayerId, String)>,
}

impl BulkReport {
    /// Number of players assigned.
    pub fn len(&self) -> usize {
        self.assigned.len()
    }

    /// Whether nobody was assigned.
    pub fn is_empty(&self) -> bool {
        self.assigned.is_empty()
    }
}

/// Assigns a god to every team member, one at a time, in random order.
///
/// With duplicates forbidden, every god committed during the run is taken
/// for the rest of the run. Gods shown before the run started do not count.
/// If the pool runs dry the run stops with
/// [`DraftError::NoCharactersAvailable`]; members already assigned keep their
/// gods.
#[derive(Debug)]
pub struct BulkAssignment {
    order: Vec<RollTarget>,
    next: usize,
    allow_duplicates: bool,
    reveal: RevealConfig,
    taken: HashSet<String>,
    current: Option<MemberReveal>,
    report: BulkReport,
    finished: bool,
    cancel: CancelHandle,
}

impl BulkAssignment {
    /// Plan a run over every member of `teams`, shuffling the order.
    pub fn new<R: Rng + ?Sized>(
        teams: &TeamPair,
        allow_duplicates: bool,
        reveal: RevealConfig,
        rng: &mut R,
    ) -> Self {
        let mut order: Vec<RollTarget> = teams.members().map(RollTarget::from).collect();
        order.shuffle(rng);
        Self {
            order,
            next: 0,
            allow_duplicates,
            reveal,
            taken: HashSet::new(),
            current: None,
            report: BulkReport::default(),
            finished: false,
            cancel: CancelHandle::new(),
        }
    }

    /// Players in processing order.
    pub fn order(&self) -> &[RollTarget] {
        &self.order
    }

    /// Gods taken so far in this run.
    pub fn taken(&self) -> &HashSet<String> {
        &self.taken
    }

    /// Assignments committed so far.
    pub fn report(&self) -> &BulkReport {
        &self.report
    }

    fn start_next(&mut self, ctx: &mut AssignContext<'_>) -> DraftResult<Option<MemberReveal>> {
        let Some(target) = self.order.get(self.next).cloned() else {
            return Ok(None);
        };
        self.next += 1;

        let pool: Vec<String> = ctx
            .names
            .iter()
            .filter(|n| self.allow_duplicates || !self.taken.contains(*n))
            .cloned()
            .collect();

        let previous = ctx
            .teams_mut()?
            .member(&target.id)
            .ok_or_else(|| DraftError::PlayerNotInTeams(target.id.clone()))?
            .god
            .clone();

        match MemberReveal::new(target.clone(), pool, self.reveal.steps, previous) {
            Some(reveal) => Ok(Some(reveal)),
            None => {
                self.finished = true;
                ctx.emit(DraftEvent::Exhausted {
                    target: target.clone(),
                });
                Err(DraftError::NoCharactersAvailable {
                    player: target.name,
                })
            }
        }
    }
}

impl Sequence for BulkAssignment {
    type Output = BulkReport;

    fn step(&mut self, ctx: &mut AssignContext<'_>) -> DraftResult<Step<BulkReport>> {
        if self.finished {
            return Ok(Step::Done(self.report.clone()));
        }

        let mut current = match self.current.take() {
            Some(current) => current,
            None => match self.start_next(ctx)? {
                Some(current) => current,
                None => {
                    self.finished = true;
                    return Ok(Step::Done(self.report.clone()));
                }
            },
        };

        match current.advance(ctx)? {
            Some(god) => {
                debug!(player = %current.target().name, god = %god, "god assigned");
                if !self.allow_duplicates {
                    self.taken.insert(god.clone());
                }
                self.report.assigned.push((current.target().id.clone(), god));
                Ok(Step::Wait(self.reveal.settle_pause))
            }
            None => {
                self.current = Some(current);
                Ok(Step::Wait(self.reveal.step_interval))
            }
        }
    }

    fn cancel(&mut self, ctx: &mut AssignContext<'_>) {
        match self.current.take() {
            Some(current) => current.restore(ctx),
            None => ctx.emit(DraftEvent::Cancelled { target: None }),
        }
        self.finished = true;
    }

    fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }
}
