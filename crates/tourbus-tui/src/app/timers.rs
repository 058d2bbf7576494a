//! Fixed-interval timers that drive the telemetry simulations

use std::time::{Duration, Instant};

use super::config::TuiConfig;

/// Fires once per elapsed period
#[derive(Debug, Clone)]
pub struct IntervalTimer {
    period: Duration,
    last: Instant,
}

impl IntervalTimer {
    pub fn new(period: Duration, start: Instant) -> Self {
        Self {
            period,
            last: start,
        }
    }

    /// Number of whole periods elapsed since the last firing
    ///
    /// Capped at a few periods so a stalled terminal does not replay a long
    /// backlog in one frame. A zero period never fires.
    pub fn poll(&mut self, now: Instant) -> u32 {
        const MAX_CATCH_UP: u32 = 4;

        if self.period.is_zero() {
            return 0;
        }

        let elapsed = now.saturating_duration_since(self.last);
        let due = (elapsed.as_millis() / self.period.as_millis().max(1)) as u32;
        if due == 0 {
            return 0;
        }

        self.last = now;
        due.min(MAX_CATCH_UP)
    }
}

/// One timer per live model
#[derive(Debug, Clone)]
pub struct SimulationTimers {
    pub driver: IntervalTimer,
    pub energy: IntervalTimer,
    pub robot: IntervalTimer,
}

impl SimulationTimers {
    pub fn from_config(config: &TuiConfig, start: Instant) -> Self {
        Self {
            driver: IntervalTimer::new(config.driver_interval(), start),
            energy: IntervalTimer::new(config.energy_interval(), start),
            robot: IntervalTimer::new(config.robot_interval(), start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_period() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new(Duration::from_millis(100), start);

        assert_eq!(timer.poll(start + Duration::from_millis(50)), 0);
        assert_eq!(timer.poll(start + Duration::from_millis(100)), 1);
        assert_eq!(timer.poll(start + Duration::from_millis(150)), 0);
        assert_eq!(timer.poll(start + Duration::from_millis(320)), 2);
    }

    #[test]
    fn test_catch_up_is_capped() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new(Duration::from_millis(10), start);
        assert_eq!(timer.poll(start + Duration::from_secs(60)), 4);
    }

    #[test]
    fn test_zero_period_never_fires() {
        let start = Instant::now();
        let mut timer = IntervalTimer::new(Duration::ZERO, start);
        assert_eq!(timer.poll(start + Duration::from_secs(1)), 0);
    }
}
