use std::time::{Duration, Instant};

/// Decides when a running simulation takes its next step.
///
/// Checked once per frame; never interrupts a step.
pub struct StepCadence {
    last_step: Instant,
    steptime_smoothed: f64,
}

impl Default for StepCadence {
    fn default() -> Self {
        Self::new(Instant::now())
    }
}

impl StepCadence {
    pub fn new(now: Instant) -> Self {
        Self {
            last_step: now,
            steptime_smoothed: 0.,
        }
    }

    /// Measured steps per second.
    pub fn steps_per_second(&self) -> f64 {
        if self.steptime_smoothed == 0. {
            0.
        } else {
            1. / self.steptime_smoothed
        }
    }

    /// Time left until the next step at `rate` steps per second.
    pub fn remaining(&self, now: Instant, rate: f64) -> Duration {
        Self::interval(rate).saturating_sub(now.saturating_duration_since(self.last_step))
    }

    /// Returns `true` and restarts the interval if a step is due.
    pub fn poll(&mut self, now: Instant, rate: f64) -> bool {
        let elapsed = now.saturating_duration_since(self.last_step);
        if elapsed < Self::interval(rate) {
            return false;
        }
        let steptime = elapsed.as_secs_f64();
        if self.steptime_smoothed == 0. {
            self.steptime_smoothed = steptime;
        } else {
            self.steptime_smoothed += (steptime - self.steptime_smoothed) * 0.1;
        }
        self.last_step = now;
        true
    }

    /// Starts a fresh interval, e.g. when a run is resumed.
    pub fn restart(&mut self, now: Instant) {
        self.last_step = now;
        self.steptime_smoothed = 0.;
    }

    fn interval(rate: f64) -> Duration {
        Duration::from_secs_f64(1. / rate.clamp(1e-3, 1e9))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_poll_respects_rate() {
        let start = Instant::now();
        let mut cadence = StepCadence::new(start);
        assert!(!cadence.poll(start + Duration::from_millis(100), 2.));
        assert!(cadence.poll(start + Duration::from_millis(500), 2.));
        assert!(!cadence.poll(start + Duration::from_millis(900), 2.));
        assert!(cadence.poll(start + Duration::from_millis(1000), 2.));
        assert!((cadence.steps_per_second() - 2.).abs() < 1e-9);
    }

    #[test]
    fn test_remaining() {
        let start = Instant::now();
        let cadence = StepCadence::new(start);
        assert_eq!(
            cadence.remaining(start + Duration::from_millis(200), 2.),
            Duration::from_millis(300)
        );
        assert_eq!(
            cadence.remaining(start + Duration::from_secs(3), 2.),
            Duration::ZERO
        );
    }
}
