//! Eased counter animation for the dashboard stat tiles.
//!
//! A tween runs from the previously displayed value to the new target over a
//! fixed window, sampled once per UI tick. The curve is ease-out-quartic:
//! fast at the start, decelerating to a stop. Samples round to whole
//! numbers; the final sample is clamped to the exact target, so a finished
//! counter never drifts from its snapshot value.

use std::time::Duration;

/// Animation window used by the dashboard (the classic 1-second count-up).
pub const COUNTER_WINDOW: Duration = Duration::from_millis(1000);

/// `1 - (1-t)^4`, clamped to `[0, 1]`.
pub fn ease_out_quart(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(4)
}

/// A single integer tween.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterTween {
    start: i64,
    end: i64,
    window: Duration,
}

impl CounterTween {
    pub fn new(start: i64, end: i64, window: Duration) -> Self {
        CounterTween { start, end, window }
    }

    /// A tween that is already at its target (zero-length window).
    pub fn settled(value: i64) -> Self {
        CounterTween {
            start: value,
            end: value,
            window: Duration::ZERO,
        }
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    /// Value at `elapsed` since the tween started. Past the window (or for
    /// a zero window) this is exactly the target.
    pub fn sample(&self, elapsed: Duration) -> i64 {
        if self.window.is_zero() || elapsed >= self.window {
            return self.end;
        }
        let t = elapsed.as_secs_f64() / self.window.as_secs_f64();
        let eased = ease_out_quart(t);
        self.start + ((self.end - self.start) as f64 * eased).round() as i64
    }

    pub fn is_complete(&self, elapsed: Duration) -> bool {
        self.window.is_zero() || elapsed >= self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curve_endpoints() {
        assert_eq!(ease_out_quart(0.0), 0.0);
        assert_eq!(ease_out_quart(1.0), 1.0);
        // Front-loaded: half the window covers 93.75% of the distance.
        assert!((ease_out_quart(0.5) - 0.9375).abs() < 1e-12);
    }

    #[test]
    fn test_sample_starts_at_start_and_ends_exactly_at_target() {
        let tween = CounterTween::new(0, 24, COUNTER_WINDOW);
        assert_eq!(tween.sample(Duration::ZERO), 0);
        assert_eq!(tween.sample(COUNTER_WINDOW), 24);
        assert_eq!(tween.sample(Duration::from_secs(5)), 24);
    }

    #[test]
    fn test_no_drift_for_large_values() {
        let tween = CounterTween::new(0, 2_845_000, COUNTER_WINDOW);
        assert_eq!(tween.sample(COUNTER_WINDOW), 2_845_000);
        assert!(tween.is_complete(COUNTER_WINDOW));
    }

    #[test]
    fn test_samples_are_monotonic_for_an_increasing_tween() {
        let tween = CounterTween::new(100, 500, COUNTER_WINDOW);
        let mut last = i64::MIN;
        for ms in (0..=1000).step_by(50) {
            let value = tween.sample(Duration::from_millis(ms));
            assert!(value >= last, "regressed at {}ms", ms);
            last = value;
        }
        assert_eq!(last, 500);
    }

    #[test]
    fn test_decreasing_tween_reaches_lower_target() {
        let tween = CounterTween::new(500, 100, COUNTER_WINDOW);
        assert_eq!(tween.sample(Duration::ZERO), 500);
        let mid = tween.sample(Duration::from_millis(500));
        assert!(mid < 500 && mid >= 100);
        assert_eq!(tween.sample(COUNTER_WINDOW), 100);
    }

    #[test]
    fn test_settled_tween_is_immediately_complete() {
        let tween = CounterTween::settled(42);
        assert_eq!(tween.sample(Duration::ZERO), 42);
        assert!(tween.is_complete(Duration::ZERO));
    }
}
