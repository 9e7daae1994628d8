//! The reveal animation as an explicit state machine.
//!
//! `Idle → Rolling { step: 1..=steps } → Settled`. Every tick moves one
//! state forward. Rolling values are drawn from the whole catalog so the
//! animation looks the same whatever is still available; the settled value
//! is drawn only from the available pool.

use rand::Rng;

/// Where a reveal is in its animation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RevealState {
    /// Not started.
    #[default]
    Idle,
    /// Showing a random intermediate value.
    Rolling {
        /// Current step, starting at 1.
        step: u32,
        /// Value shown at this step.
        showing: String,
    },
    /// Final value committed.
    Settled(String),
}

/// A single rolling-then-settling pick.
#[derive(Debug, Clone)]
pub struct Reveal {
    pool: Vec<String>,
    steps: u32,
    state: RevealState,
}

impl Reveal {
    /// Create a reveal that settles on a member of `pool` after `steps`
    /// rolling ticks. Returns `None` if the pool is empty.
    pub fn new(pool: Vec<String>, steps: u32) -> Option<Self> {
        if pool.is_empty() {
            return None;
        }
        Some(Self {
            pool,
            steps,
            state: RevealState::Idle,
        })
    }

    /// Advance one tick.
    ///
    /// `display` supplies the intermediate values; when empty, the pool is
    /// used instead. Ticking a settled reveal does nothing.
    pub fn tick<R: Rng + ?Sized>(&mut self, display: &[String], rng: &mut R) -> &RevealState {
        let next = match &self.state {
            RevealState::Settled(_) => return &self.state,
            RevealState::Idle => 1,
            RevealState::Rolling { step, .. } => step + 1,
        };

        self.state = if next <= self.steps {
            let source = if display.is_empty() {
                self.pool.as_slice()
            } else {
                display
            };
            RevealState::Rolling {
                step: next,
                showing: pick(source, rng),
            }
        } else {
            RevealState::Settled(pick(&self.pool, rng))
        };
        &self.state
    }

    /// Current state.
    pub fn state(&self) -> &RevealState {
        &self.state
    }

    /// The committed value, once settled.
    pub fn settled(&self) -> Option<&str> {
        match &self.state {
            RevealState::Settled(name) => Some(name),
            _ => None,
        }
    }

    /// Number of rolling steps before settling.
    pub fn steps(&self) -> u32 {
        self.steps
    }
}

fn pick<R: Rng + ?Sized>(items: &[String], rng: &mut R) -> String {
    items[rng.random_range(0..items.len())].clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_pool_rejected() {
        assert!(Reveal::new(Vec::new(), 3).is_none());
    }

    #[test]
    fn rolls_then_settles() {
        let display = names(&["Ares", "Loki", "Thor"]);
        let mut reveal = Reveal::new(names(&["Ymir"]), 3).unwrap();
        let mut rng = StdRng::seed_from_u64(5);

        assert_eq!(reveal.state(), &RevealState::Idle);
        for expected in 1..=3 {
            match reveal.tick(&display, &mut rng) {
                RevealState::Rolling { step, showing } => {
                    assert_eq!(*step, expected);
                    assert!(display.contains(showing));
                }
                other => panic!("expected rolling, got {other:?}"),
            }
        }
        assert_eq!(
            reveal.tick(&display, &mut rng),
            &RevealState::Settled("Ymir".to_string())
        );
        assert_eq!(reveal.settled(), Some("Ymir"));
    }

    #[test]
    fn zero_steps_settles_on_first_tick() {
        let mut reveal = Reveal::new(names(&["Ymir"]), 0).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        assert!(matches!(
            reveal.tick(&[], &mut rng),
            RevealState::Settled(_)
        ));
    }

    #[test]
    fn settled_is_terminal() {
        let mut reveal = Reveal::new(names(&["Ares", "Loki"]), 0).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        reveal.tick(&[], &mut rng);
        let first = reveal.settled().unwrap().to_string();
        for _ in 0..10 {
            reveal.tick(&[], &mut rng);
        }
        assert_eq!(reveal.settled(), Some(first.as_str()));
    }

    #[test]
    fn empty_display_rolls_from_pool() {
        let mut reveal = Reveal::new(names(&["Ymir"]), 2).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        match reveal.tick(&[], &mut rng) {
            RevealState::Rolling { showing, .. } => assert_eq!(showing, "Ymir"),
            other => panic!("expected rolling, got {other:?}"),
        }
    }

    #[test]
    fn settled_value_is_uniform_over_pool() {
        let pool = names(&["A", "B", "C", "D"]);
        let mut rng = StdRng::seed_from_u64(11);
        let mut counts = [0usize; 4];
        for _ in 0..8_000 {
            let mut reveal = Reveal::new(pool.clone(), 0).unwrap();
            reveal.tick(&[], &mut rng);
            let idx = pool
                .iter()
                .position(|p| Some(p.as_str()) == reveal.settled())
                .unwrap();
            counts[idx] += 1;
        }
        for c in counts {
            assert!((1_800..2_200).contains(&c), "skewed counts: {counts:?}");
        }
    }
}
