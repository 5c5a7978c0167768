use std::time::{Duration, Instant};

/// Decides when the board should step, independently of the frame rate.
///
/// The host polls every frame; a poll fires at most once per elapsed
/// interval and never blocks. A late poll does not queue up extra steps.
#[derive(Debug, Clone)]
pub struct StepTicker {
    interval: Duration,
    last_step: Instant,
}

impl StepTicker {
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last_step: now,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn set_interval(&mut self, interval: Duration) {
        self.interval = interval;
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_step) < self.interval {
            return false;
        }

        self.last_step = now;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const INTERVAL: Duration = Duration::from_millis(100);

    #[test]
    fn does_not_fire_before_interval() {
        let start = Instant::now();
        let mut ticker = StepTicker::new(INTERVAL, start);

        assert!(!ticker.poll(start));
        assert!(!ticker.poll(start + Duration::from_millis(99)));
    }

    #[test]
    fn fires_once_per_interval() {
        let start = Instant::now();
        let mut ticker = StepTicker::new(INTERVAL, start);

        let first = start + INTERVAL;
        assert!(ticker.poll(first));
        assert!(!ticker.poll(first));
        assert!(!ticker.poll(first + Duration::from_millis(50)));
        assert!(ticker.poll(first + INTERVAL));
    }

    #[test]
    fn late_poll_fires_only_once() {
        let start = Instant::now();
        let mut ticker = StepTicker::new(INTERVAL, start);

        let late = start + INTERVAL * 10;
        assert!(ticker.poll(late));
        assert!(!ticker.poll(late + Duration::from_millis(1)));
    }

    #[test]
    fn interval_change_applies_to_next_poll() {
        let start = Instant::now();
        let mut ticker = StepTicker::new(INTERVAL, start);

        ticker.set_interval(Duration::from_millis(20));
        assert_eq!(ticker.interval(), Duration::from_millis(20));
        assert!(ticker.poll(start + Duration::from_millis(20)));
    }
}
