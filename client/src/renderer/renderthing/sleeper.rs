use std::time::{Duration, Instant};

/// Paces redraws to a target frame time.
pub struct Sleeper {
    target_delta_time: Duration,
    last_instant: Option<Instant>,
}

impl Sleeper {
    pub fn new(target_delta_time: Duration) -> Self {
        Self {
            target_delta_time,
            last_instant: None,
        }
    }

    pub fn from_fps(target_fps: u64) -> Self {
        Self::new(Duration::from_micros(1_000_000 / target_fps.max(1)))
    }

    /// Time left in the current frame, or `None` when running late or on
    /// the first frame.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        let last_instant = self.last_instant?;
        let delta_time = now.saturating_duration_since(last_instant);

        self.target_delta_time
            .checked_sub(delta_time)
            .filter(|remaining| !remaining.is_zero())
    }

    /// Sleeps out the rest of the frame. Returns whether it slept.
    pub fn sleep(&mut self) -> bool {
        let slept = match self.remaining(Instant::now()) {
            Some(remaining) => {
                spin_sleep::sleep(remaining);
                true
            }
            None => false,
        };

        self.last_instant = Some(Instant::now());
        slept
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_frame_never_sleeps() {
        let sleeper = Sleeper::new(Duration::from_millis(16));
        assert_eq!(sleeper.remaining(Instant::now()), None);
    }

    #[test]
    fn remaining_counts_down_from_last_frame() {
        let start = Instant::now();
        let sleeper = Sleeper {
            target_delta_time: Duration::from_millis(16),
            last_instant: Some(start),
        };

        assert_eq!(
            sleeper.remaining(start + Duration::from_millis(10)),
            Some(Duration::from_millis(6))
        );
        assert_eq!(sleeper.remaining(start + Duration::from_millis(16)), None);
        assert_eq!(sleeper.remaining(start + Duration::from_millis(40)), None);
    }

    #[test]
    fn fps_sets_frame_time() {
        assert_eq!(
            Sleeper::from_fps(50).target_delta_time,
            Duration::from_millis(20)
        );
    }
}
