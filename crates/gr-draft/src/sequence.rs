//! Step-driven sequences.
//!
//! A [`Sequence`] is advanced one [`Step`] at a time. Each step mutates the
//! teams held by the [`AssignContext`], records events, and says how long to
//! wait before the next step. Only one sequence runs at a time, so one
//! player's pick is always committed before the next player's pool is built.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use rand::rngs::StdRng;

use crate::error::{DraftError, DraftResult};
use crate::event::{DraftEvent, RollTarget};
use crate::reveal::{Reveal, RevealState};
use crate::team::TeamPair;

/// What a sequence wants after a step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step<T> {
    /// Call `step` again after this delay.
    Wait(Duration),
    /// The sequence is finished.
    Done(T),
}

/// How a driven sequence ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// Ran to completion.
    Completed(T),
    /// Stopped through its [`CancelHandle`].
    Cancelled,
}

impl<T> Outcome<T> {
    /// The completed value, if any.
    pub fn completed(self) -> Option<T> {
        match self {
            Self::Completed(v) => Some(v),
            Self::Cancelled => None,
        }
    }

    /// Whether the sequence was cancelled.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

/// Shared flag that asks a running sequence to stop.
///
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    /// Create a handle in the not-cancelled state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Mutable state a sequence works on during one step.
pub struct AssignContext<'a> {
    /// Current teams, if generated.
    pub teams: Option<&'a mut TeamPair>,
    /// Catalog names, used for the rolling animation.
    pub names: &'a [String],
    /// Session RNG.
    pub rng: &'a mut StdRng,
    /// Events produced during this step.
    pub events: &'a mut Vec<DraftEvent>,
}

impl AssignContext<'_> {
    /// The teams, or [`DraftError::NoTeams`].
    pub fn teams_mut(&mut self) -> DraftResult<&mut TeamPair> {
        self.teams.as_deref_mut().ok_or(DraftError::NoTeams)
    }

    /// Record an event.
    pub fn emit(&mut self, event: DraftEvent) {
        self.events.push(event);
    }
}

/// A cooperative, step-at-a-time process.
pub trait Sequence {
    /// Value produced on completion.
    type Output;

    /// Advance by one step.
    fn step(&mut self, ctx: &mut AssignContext<'_>) -> DraftResult<Step<Self::Output>>;

    /// Undo any half-finished work after cancellation.
    fn cancel(&mut self, ctx: &mut AssignContext<'_>);

    /// Handle that stops this sequence.
    fn cancel_handle(&self) -> CancelHandle;
}

/// A reveal bound to a team member: rolling values are written into the
/// member so the UI shows them.
#[derive(Debug, Clone)]
pub(crate) struct MemberReveal {
    target: RollTarget,
    reveal: Reveal,
    previous: Option<String>,
}

impl MemberReveal {
    /// `None` if `pool` is empty.
    pub(crate) fn new(
        target: RollTarget,
        pool: Vec<String>,
        steps: u32,
        previous: Option<String>,
    ) -> Option<Self> {
        Reveal::new(pool, steps).map(|reveal| Self {
            target,
            reveal,
            previous,
        })
    }

    pub(crate) fn target(&self) -> &RollTarget {
        &self.target
    }

    /// Advance one tick. Returns the god once settled.
    pub(crate) fn advance(&mut self, ctx: &mut AssignContext<'_>) -> DraftResult<Option<String>> {
        let state = self.reveal.tick(ctx.names, &mut *ctx.rng).clone();
        let shown = match &state {
            RevealState::Idle => return Ok(None),
            RevealState::Rolling { showing, .. } => showing.clone(),
            RevealState::Settled(god) => god.clone(),
        };

        {
            let member = ctx
                .teams_mut()?
                .member_mut(&self.target.id)
                .ok_or_else(|| DraftError::PlayerNotInTeams(self.target.id.clone()))?;
            member.god = Some(shown.clone());
        }

        match state {
            RevealState::Rolling { step, showing } => {
                ctx.emit(DraftEvent::Rolling {
                    target: Some(self.target.clone()),
                    step,
                    steps: self.reveal.steps(),
                    showing,
                });
                Ok(None)
            }
            _ => {
                ctx.emit(DraftEvent::Settled {
                    target: Some(self.target.clone()),
                    god: shown.clone(),
                });
                Ok(Some(shown))
            }
        }
    }

    /// Put back the god shown before this reveal started.
    pub(crate) fn restore(&self, ctx: &mut AssignContext<'_>) {
        let id = &self.target.id;
        if let Some(member) = ctx.teams_mut().ok().and_then(|t| t.member_mut(id)) {
            member.god = self.previous.clone();
        }
        ctx.emit(DraftEvent::Cancelled {
            target: Some(self.target.clone()),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_handle_is_shared() {
        let handle = CancelHandle::new();
        let clone = handle.clone();
        assert!(!handle.is_cancelled());
        clone.cancel();
        assert!(handle.is_cancelled());
    }

    #[test]
    fn outcome_accessors() {
        assert_eq!(Outcome::Completed(3).completed(), Some(3));
        assert!(Outcome::<u8>::Cancelled.is_cancelled());
        assert_eq!(Outcome::<u8>::Cancelled.completed(), None);
    }
}
