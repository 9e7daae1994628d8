use std::fmt;

use gr_core::PlayerId;

use crate::team::TeamMember;

/// The player a reveal belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RollTarget {
    /// Player id.
    pub id: PlayerId,
    /// Player name.
    pub name: String,
}

impl From<&TeamMember> for RollTarget {
    fn from(m: &TeamMember) -> Self {
        Self {
            id: m.id.clone(),
            name: m.name.clone(),
        }
    }
}

/// Something a front end may want to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftEvent {
    /// Two teams were drawn from the roster.
    TeamsGenerated {
        /// Size of Team 1.
        first: usize,
        /// Size of Team 2.
        second: usize,
        /// Roster players left out.
        benched: usize,
    },
    /// An intermediate value of the rolling animation.
    Rolling {
        /// Who is rolling; `None` for a free roll.
        target: Option<RollTarget>,
        /// Step number, starting at 1.
        step: u32,
        /// Total rolling steps.
        steps: u32,
        /// God currently shown.
        showing: String,
    },
    /// A final value was committed.
    Settled {
        /// Who received it; `None` for a free roll.
        target: Option<RollTarget>,
        /// The committed god.
        god: String,
    },
    /// No god was left for this player; the run stopped.
    Exhausted {
        /// The player left without a god.
        target: RollTarget,
    },
    /// The run was cancelled while `target` was rolling.
    Cancelled {
        /// The player whose reveal was interrupted, if any.
        target: Option<RollTarget>,
    },
}

impl fmt::Display for DraftEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let who = |t: &Option<RollTarget>| {
            t.as_ref()
                .map(|t| t.name.clone())
                .unwrap_or_else(|| "roll".to_string())
        };
        match self {
            Self::TeamsGenerated {
                first,
                second,
                benched,
            } => write!(f, "teams generated ({first}v{second}, {benched} benched)"),
            Self::Rolling {
                target,
                step,
                steps,
                showing,
            } => write!(f, "{} rolling {step}/{steps}: {showing}", who(target)),
            Self::Settled { target, god } => write!(f, "{} -> {god}", who(target)),
            Self::Exhausted { target } => write!(f, "no gods left for {}", target.name),
            Self::Cancelled { target } => write!(f, "{} cancelled", who(target)),
        }
    }
}
