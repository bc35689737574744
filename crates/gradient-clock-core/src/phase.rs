//! Ping-pong phase oscillator driving the gradient animation.

use std::time::Duration;

/// Time for one bound-to-bound sweep. A full cycle (0 → 1 → 0) is twice this.
pub const DEFAULT_HALF_CYCLE: Duration = Duration::from_secs(30);

/// A scalar in `[0, 1]` that rises to 1, falls back to 0, and repeats forever.
///
/// The oscillator starts at 0 rising. [`PingPong::advance`] consumes wall-clock
/// delta time; overshoot past a bound reflects back inside, so arbitrarily
/// large steps still land in `[0, 1]`.
#[derive(Debug, Clone)]
pub struct PingPong {
    value: f32,
    rising: bool,
    half_cycle: Duration,
}

impl PingPong {
    /// Creates an oscillator at phase 0, rising, with the given half-cycle.
    pub fn new(half_cycle: Duration) -> Self {
        debug_assert!(!half_cycle.is_zero());
        Self {
            value: 0.0,
            rising: true,
            half_cycle,
        }
    }

    /// Current phase in `[0, 1]`.
    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Advances the phase by `dt` of wall-clock time.
    pub fn advance(&mut self, dt: Duration) {
        let step = (dt.as_secs_f64() / self.half_cycle.as_secs_f64()) as f32;

        // Unfold the current state onto a sawtooth over [0, 2): the rising leg
        // maps to [0, 1], the falling leg to (1, 2). Stepping and re-folding
        // handles any number of bound reflections at once.
        let unfolded = if self.rising {
            self.value
        } else {
            2.0 - self.value
        };
        let pos = (unfolded + step).rem_euclid(2.0);

        if pos <= 1.0 {
            self.value = pos;
            self.rising = true;
        } else {
            self.value = 2.0 - pos;
            self.rising = false;
        }
    }
}

impl Default for PingPong {
    fn default() -> Self {
        Self::new(DEFAULT_HALF_CYCLE)
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_HALF_CYCLE, PingPong};
    use proptest::prelude::*;
    use std::time::Duration;

    const EPS: f32 = 1e-4;

    #[test]
    fn starts_at_zero() {
        assert_eq!(PingPong::default().value(), 0.0);
    }

    #[test]
    fn reaches_one_at_half_cycle_and_returns() {
        let mut phase = PingPong::default();

        phase.advance(DEFAULT_HALF_CYCLE / 2);
        assert!((phase.value() - 0.5).abs() < EPS);

        phase.advance(DEFAULT_HALF_CYCLE / 2);
        assert!((phase.value() - 1.0).abs() < EPS);

        phase.advance(DEFAULT_HALF_CYCLE);
        assert!(phase.value() < EPS, "full cycle should return to 0");
    }

    #[test]
    fn reverses_at_both_bounds() {
        let mut phase = PingPong::new(Duration::from_secs(10));

        // Past the upper bound: 12s of a 10s sweep folds to 0.8 falling.
        phase.advance(Duration::from_secs(12));
        assert!((phase.value() - 0.8).abs() < EPS);

        // Keep falling through 0 and back up: 0.8 - 1.0 reflects to 0.2 rising.
        phase.advance(Duration::from_secs(10));
        assert!((phase.value() - 0.2).abs() < EPS);
    }

    #[test]
    fn huge_step_lands_inside_bounds() {
        let mut phase = PingPong::new(Duration::from_secs(1));
        phase.advance(Duration::from_secs(1_000_000));
        assert!((0.0..=1.0).contains(&phase.value()));
    }

    proptest! {
        #[test]
        fn never_leaves_unit_interval(steps_ms in prop::collection::vec(0u64..120_000, 1..200)) {
            let mut phase = PingPong::default();
            for ms in steps_ms {
                phase.advance(Duration::from_millis(ms));
                let v = phase.value();
                prop_assert!((0.0..=1.0).contains(&v), "phase {v} escaped [0, 1]");
            }
        }

        #[test]
        fn small_steps_move_monotonically_between_bounds(step_ms in 1u64..500) {
            let mut phase = PingPong::default();
            let step = Duration::from_millis(step_ms);
            let mut previous = phase.value();
            let mut rising = true;
            for _ in 0..1_000 {
                phase.advance(step);
                let v = phase.value();
                if rising && v < previous {
                    // Direction may only flip at the bounds.
                    prop_assert!(previous > 1.0 - 0.02, "reversed at {previous} while rising");
                    rising = false;
                } else if !rising && v > previous {
                    prop_assert!(previous < 0.02, "reversed at {previous} while falling");
                    rising = true;
                }
                previous = v;
            }
        }
    }
}
