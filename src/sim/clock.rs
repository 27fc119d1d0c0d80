//! Fixed-period tick scheduling
//!
//! Elapsed wall time goes in, a count of due ticks comes out. The caller
//! runs them one after another, so a tick always finishes before the next
//! one starts.

use crate::consts::{MAX_CATCHUP_TICKS, MIN_TICK_MS};

/// Accumulates frame time and releases ticks at a fixed period
#[derive(Debug, Clone)]
pub struct FixedTicker {
    period_ms: f64,
    accumulator_ms: f64,
}

impl FixedTicker {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: f64::from(period_ms.max(MIN_TICK_MS)),
            accumulator_ms: 0.0,
        }
    }

    /// Current tick period in milliseconds
    pub fn period_ms(&self) -> u32 {
        self.period_ms as u32
    }

    /// Change the period; time already accumulated is kept so the next
    /// tick lands on the new cadence without a hitch
    pub fn set_period(&mut self, period_ms: u32) {
        self.period_ms = f64::from(period_ms.max(MIN_TICK_MS));
    }

    /// Add elapsed time and return how many ticks are due.
    ///
    /// At most `MAX_CATCHUP_TICKS` are released per call; anything beyond
    /// that is dropped.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if elapsed_ms.is_finite() && elapsed_ms > 0.0 {
            self.accumulator_ms += elapsed_ms;
        }

        let mut due = 0;
        while self.accumulator_ms >= self.period_ms && due < MAX_CATCHUP_TICKS {
            self.accumulator_ms -= self.period_ms;
            due += 1;
        }

        if due == MAX_CATCHUP_TICKS && self.accumulator_ms >= self.period_ms {
            log::debug!("Dropping {:.0} ms of tick backlog", self.accumulator_ms);
            self.accumulator_ms %= self.period_ms;
        }

        due
    }

    /// Forget any partially accumulated time
    pub fn reset(&mut self) {
        self.accumulator_ms = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_releases_whole_periods() {
        let mut ticker = FixedTicker::new(90);
        assert_eq!(ticker.advance(50.0), 0);
        assert_eq!(ticker.advance(50.0), 1);
        assert_eq!(ticker.advance(80.0), 1);
        assert_eq!(ticker.advance(89.0), 0);
    }

    #[test]
    fn test_caps_catch_up() {
        let mut ticker = FixedTicker::new(10);
        assert_eq!(ticker.advance(10_000.0), MAX_CATCHUP_TICKS);
        // Backlog was dropped
        assert_eq!(ticker.advance(0.0), 0);
    }

    #[test]
    fn test_set_period_keeps_accumulated_time() {
        let mut ticker = FixedTicker::new(100);
        assert_eq!(ticker.advance(60.0), 0);
        ticker.set_period(50);
        assert_eq!(ticker.period_ms(), 50);
        assert_eq!(ticker.advance(0.0), 1);
    }

    #[test]
    fn test_period_floor_and_bad_input() {
        let mut ticker = FixedTicker::new(0);
        assert_eq!(ticker.period_ms(), MIN_TICK_MS);
        assert_eq!(ticker.advance(f64::NAN), 0);
        assert_eq!(ticker.advance(-5.0), 0);
    }

    #[test]
    fn test_reset() {
        let mut ticker = FixedTicker::new(100);
        ticker.advance(99.0);
        ticker.reset();
        assert_eq!(ticker.advance(1.0), 0);
    }
}
