//! Fixed-rate frame clock.

use std::thread;
use std::time::{Duration, Instant};

/// Paces the frame loop at a fixed tick.
///
/// [`wait`](FrameClock::wait) only sleeps for what is left of the current
/// tick; an overrunning frame starts the next one immediately instead of
/// accumulating debt.
#[derive(Debug, Clone)]
pub struct FrameClock {
    period: Duration,
    next: Instant,
    frames: u64,
}

impl FrameClock {
    pub fn new(period: Duration) -> Self {
        Self {
            period,
            next: Instant::now() + period,
            frames: 0,
        }
    }

    pub fn from_fps(fps: u32) -> Self {
        Self::new(Duration::from_secs(1) / fps.max(1))
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Time left in the current tick.
    pub fn remaining(&self, now: Instant) -> Duration {
        self.next.saturating_duration_since(now)
    }

    /// Block until the current tick ends, then start the next one.
    pub fn wait(&mut self) {
        let now = Instant::now();
        let left = self.remaining(now);
        if !left.is_zero() {
            thread::sleep(left);
        }
        self.advance(now + left);
    }

    fn advance(&mut self, now: Instant) {
        self.frames += 1;
        self.next += self.period;
        if self.next < now {
            self.next = now + self.period;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_fps() {
        assert_eq!(FrameClock::from_fps(50).period(), Duration::from_millis(20));
        assert_eq!(FrameClock::from_fps(0).period(), Duration::from_secs(1));
    }

    #[test]
    fn test_wait_sleeps_roughly_one_tick() {
        let mut clock = FrameClock::new(Duration::from_millis(10));
        let start = Instant::now();
        clock.wait();
        clock.wait();
        assert!(start.elapsed() >= Duration::from_millis(15));
        assert_eq!(clock.frames(), 2);
    }

    #[test]
    fn test_overrun_does_not_accumulate() {
        let mut clock = FrameClock::new(Duration::from_millis(5));
        let late = Instant::now() + Duration::from_millis(100);
        clock.advance(late);
        assert_eq!(clock.remaining(late), Duration::from_millis(5));
    }
}
