use std::time::Duration;

/// Timing of the reveal animation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealConfig {
    /// Number of random intermediate values shown before settling.
    pub steps: u32,
    /// Delay between two intermediate values.
    pub step_interval: Duration,
    /// Pause after a player settles during a bulk run.
    pub settle_pause: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            steps: 20,
            step_interval: Duration::from_millis(100),
            settle_pause: Duration::from_millis(500),
        }
    }
}

impl RevealConfig {
    /// Settle immediately with no pauses.
    pub fn instant() -> Self {
        Self {
            steps: 0,
            step_interval: Duration::ZERO,
            settle_pause: Duration::ZERO,
        }
    }

    /// Set the number of rolling steps.
    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = steps;
        self
    }

    /// Set the delay between rolling steps.
    pub fn with_step_interval(mut self, interval: Duration) -> Self {
        self.step_interval = interval;
        self
    }

    /// Set the pause after each settled bulk assignment.
    pub fn with_settle_pause(mut self, pause: Duration) -> Self {
        self.settle_pause = pause;
        self
    }
}

/// Configuration for a [`Draft`](crate::Draft) session.
#[derive(Debug, Clone, Default)]
pub struct DraftConfig {
    /// RNG seed for reproducible drafts; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Allow two players to receive the same god.
    pub allow_duplicates: bool,
    /// Reveal animation timing.
    pub reveal: RevealConfig,
}

impl DraftConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Allow or forbid duplicate gods.
    pub fn with_allow_duplicates(mut self, allow: bool) -> Self {
        self.allow_duplicates = allow;
        self
    }

    /// Set the reveal timing.
    pub fn with_reveal(mut self, reveal: RevealConfig) -> Self {
        self.reveal = reveal;
        self
    }
}
