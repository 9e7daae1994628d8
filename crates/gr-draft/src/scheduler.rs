use std::time::Duration;

/// Paces a running sequence between steps.
pub trait Scheduler {
    /// Block until `delay` has passed (or pretend to).
    fn wait(&mut self, delay: Duration);
}

/// Real time: sleeps the current thread.
#[derive(Debug, Clone, Copy, Default)]
pub struct SleepScheduler;

impl Scheduler for SleepScheduler {
    fn wait(&mut self, delay: Duration) {
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

/// Virtual time: records how long a run would have taken without waiting.
#[derive(Debug, Clone, Default)]
pub struct VirtualClock {
    elapsed: Duration,
    waits: u64,
}

impl VirtualClock {
    /// Create a clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total virtual time waited.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Number of waits, i.e. scheduled ticks.
    pub fn waits(&self) -> u64 {
        self.waits
    }
}

impl Scheduler for VirtualClock {
    fn wait(&mut self, delay: Duration) {
        self.elapsed += delay;
        self.waits += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn virtual_clock_accumulates() {
        let mut clock = VirtualClock::new();
        clock.wait(Duration::from_millis(100));
        clock.wait(Duration::from_millis(500));
        assert_eq!(clock.waits(), 2);
        assert_eq!(clock.elapsed(), Duration::from_millis(600));
    }

    #[test]
    fn sleep_scheduler_skips_zero() {
        let mut s = SleepScheduler;
        s.wait(Duration::ZERO);
    }
}
