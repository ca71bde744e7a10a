//! Wall-clock pacing for the dashboard's periodic re-poll.

use std::time::{Duration, Instant};

/// Fires every `interval`, measured from the previous firing.
#[derive(Debug)]
pub struct RefreshTimer {
    interval: Duration,
    last: Instant,
    forced: bool,
}

impl RefreshTimer {
    pub fn new(interval: Duration) -> Self {
        RefreshTimer {
            interval,
            last: Instant::now(),
            forced: false,
        }
    }

    /// True once per elapsed interval; resets the clock when it fires.
    pub fn due(&mut self) -> bool {
        if self.forced || self.last.elapsed() >= self.interval {
            self.forced = false;
            self.last = Instant::now();
            true
        } else {
            false
        }
    }

    /// Make the next `due` call fire immediately (manual refresh).
    pub fn force(&mut self) {
        self.forced = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_interval_is_always_due() {
        let mut timer = RefreshTimer::new(Duration::ZERO);
        assert!(timer.due());
        assert!(timer.due());
    }

    #[test]
    fn test_long_interval_is_not_due_immediately() {
        let mut timer = RefreshTimer::new(Duration::from_secs(3600));
        assert!(!timer.due());
    }

    #[test]
    fn test_force_triggers_next_due() {
        let mut timer = RefreshTimer::new(Duration::from_secs(3600));
        timer.force();
        assert!(timer.due());
        assert!(!timer.due());
    }
}
