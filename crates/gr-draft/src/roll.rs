use std::time::Duration;

use crate::config::RevealConfig;
use crate::error::{DraftError, DraftResult};
use crate::event::DraftEvent;
use crate::reveal::{Reveal, RevealState};
use crate::sequence::{AssignContext, CancelHandle, Sequence, Step};

/// A free roll over a list of gods, not tied to any player.
#[derive(Debug)]
pub struct SingleRoll {
    reveal: Reveal,
    step_interval: Duration,
    cancel: CancelHandle,
}

impl SingleRoll {
    /// Roll over `pool`.
    pub fn new(pool: Vec<String>, reveal: &RevealConfig) -> DraftResult<Self> {
        let inner = Reveal::new(pool, reveal.steps).ok_or(DraftError::EmptyPool)?;
        Ok(Self {
            reveal: inner,
            step_interval: reveal.step_interval,
            cancel: CancelHandle::new(),
        })
    }
}

impl Sequence for SingleRoll {
    type Output = String;

    fn step(&mut self, ctx: &mut AssignContext<'_>) -> DraftResult<Step<String>> {
        let steps = self.reveal.steps();
        match self.reveal.tick(ctx.names, &mut *ctx.rng).clone() {
            RevealState::Settled(god) => {
                ctx.emit(DraftEvent::Settled {
                    target: None,
                    god: god.clone(),
                });
                Ok(Step::Done(god))
            }
            RevealState::Rolling { step, showing } => {
                ctx.emit(DraftEvent::Rolling {
                    target: None,
                    step,
                    steps,
                    showing,
                });
                Ok(Step::Wait(self.step_interval))
            }
            RevealState::Idle => Ok(Step::Wait(Duration::ZERO)),
        }
    }

    fn cancel(&mut self, ctx: &mut AssignContext<'_>) {
        ctx.emit(DraftEvent::Cancelled { target: None });
    }

    fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pool_is_rejected() {
        let err = SingleRoll::new(Vec::new(), &RevealConfig::default()).unwrap_err();
        assert_eq!(err, DraftError::EmptyPool);
    }
}
