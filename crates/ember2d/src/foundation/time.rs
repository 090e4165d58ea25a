//! Fixed-tick timing

use std::time::Duration;

/// Paces the engine loop at a fixed tick rate.
///
/// The period is derived once from the configured rate; the driver
/// sleeps a full period after every tick, so tick, render, and present
/// never overlap.
pub struct TickTimer {
    period: Duration,
    tick_count: u64,
}

impl TickTimer {
    /// Create a timer for the given tick rate in ticks per second.
    ///
    /// The rate must be positive; settings validation guarantees this
    /// before the timer is built.
    pub fn new(tick_rate: f64) -> Self {
        Self {
            period: Duration::from_secs_f64(1.0 / tick_rate),
            tick_count: 0,
        }
    }

    /// The fixed period between ticks
    pub fn period(&self) -> Duration {
        self.period
    }

    /// The number of completed ticks
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Sleep out the remainder of the current tick
    pub fn wait(&mut self) {
        std::thread::sleep(self.period);
        self.tick_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_tick_rate() {
        let timer = TickTimer::new(50.0);
        assert_eq!(timer.period(), Duration::from_millis(20));
    }

    #[test]
    fn test_wait_advances_tick_count() {
        let mut timer = TickTimer::new(1000.0);
        assert_eq!(timer.tick_count(), 0);
        timer.wait();
        timer.wait();
        assert_eq!(timer.tick_count(), 2);
    }
}
