//! Fixed-rate tick clock

use std::time::{Duration, Instant};

/// Schedules ticks at a fixed interval
///
/// A late tick reschedules from now rather than bursting to catch up.
#[derive(Debug, Clone)]
pub struct FixedStep {
    interval: Duration,
    next: Instant,
}

impl FixedStep {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next: Instant::now() + interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Deadline of the upcoming tick
    pub fn deadline(&self) -> Instant {
        self.next
    }

    /// Time left until the upcoming tick (zero when due)
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Mark the current tick as taken and schedule the next one
    pub fn advance(&mut self, now: Instant) {
        self.next += self.interval;
        if self.next <= now {
            log::debug!("Tick overran by {:?}", now - self.next);
            self.next = now + self.interval;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_keeps_cadence() {
        let mut clock = FixedStep::new(Duration::from_millis(100));
        let first = clock.deadline();
        clock.advance(first);
        assert_eq!(clock.deadline(), first + Duration::from_millis(100));
    }

    #[test]
    fn test_overrun_reschedules_from_now() {
        let mut clock = FixedStep::new(Duration::from_millis(100));
        let late = clock.deadline() + Duration::from_millis(350);
        clock.advance(late);
        assert_eq!(clock.deadline(), late + Duration::from_millis(100));
        assert_eq!(clock.remaining(late), Duration::from_millis(100));
    }

    #[test]
    fn test_remaining_saturates() {
        let clock = FixedStep::new(Duration::from_millis(10));
        let after = clock.deadline() + Duration::from_millis(5);
        assert_eq!(clock.remaining(after), Duration::ZERO);
    }
}
