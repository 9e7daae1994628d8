//! Team partitioning and randomized god assignment for Godroll.
//!
//! The roster is split into two disjoint teams with a uniform shuffle. Gods
//! are then handed out through small state machines ([`Reveal`],
//! [`BulkAssignment`], [`Reroll`], [`SingleRoll`]) that advance one tick at a
//! time. A [`Draft`] session drives them against a [`Scheduler`], reporting
//! every intermediate value as a [`DraftEvent`] so a front end can animate
//! the roll.

/// Draft and reveal timing configuration.
pub mod config;
/// Error types for partitioning and assignment.
pub mod error;
/// Events emitted while a draft runs.
pub mod event;
/// Team, team member and team size types.
pub mod team;
/// Uniform two-team partition of a roster.
pub mod partition;
/// The rolling-then-settled reveal state machine.
pub mod reveal;
/// Step-driven sequences, their context, and cancellation.
pub mod sequence;
/// Sequential, duplicate-aware assignment over every team member.
pub mod bulk;
/// Re-rolling a single team member against live assignments.
pub mod reroll;
/// A free roll over the catalog, not tied to a player.
pub mod roll;
/// Time sources that pace a running sequence.
pub mod scheduler;
/// The draft session that owns teams, RNG and configuration.
pub mod draft;

pub use bulk::{BulkAssignment, BulkReport};
pub use config::{DraftConfig, RevealConfig};
pub use draft::Draft;
pub use error::{DraftError, DraftResult};
pub use event::{DraftEvent, RollTarget};
pub use partition::partition;
pub use reroll::Reroll;
pub use reveal::{Reveal, RevealState};
pub use roll::SingleRoll;
pub use scheduler::{Scheduler, SleepScheduler, VirtualClock};
pub use sequence::{AssignContext, CancelHandle, Outcome, Sequence, Step};
pub use team::{Team, TeamMember, TeamPair, TeamSizes};
