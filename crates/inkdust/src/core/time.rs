/// Frame limiter for a host that calls in faster than the target rate.
/// Ticks that arrive before the interval has elapsed are skipped, not queued.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    /// Minimum milliseconds between admitted frames.
    interval: f64,
    /// Reference time of the last admitted frame, phase-corrected.
    last: Option<f64>,
}

impl FrameLimiter {
    pub fn new(fps: f64) -> Self {
        Self {
            interval: if fps > 0.0 { 1000.0 / fps } else { 0.0 },
            last: None,
        }
    }

    /// Returns true when a frame should run at `now` (milliseconds).
    ///
    /// The remainder of the elapsed time modulo the interval is carried over,
    /// so admitted frames stay on the interval grid instead of drifting.
    pub fn admit(&mut self, now: f64) -> bool {
        let Some(last) = self.last else {
            self.last = Some(now);
            return true;
        };

        let delta = now - last;
        if delta > self.interval {
            let carry = if self.interval > 0.0 { delta % self.interval } else { 0.0 };
            self.last = Some(now - carry);
            true
        } else {
            false
        }
    }

    /// Milliseconds between admitted frames.
    pub fn interval(&self) -> f64 {
        self.interval
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_is_admitted() {
        let mut limiter = FrameLimiter::new(60.0);
        assert!(limiter.admit(0.0));
    }

    #[test]
    fn fast_ticks_are_skipped() {
        let mut limiter = FrameLimiter::new(60.0);
        limiter.admit(0.0);
        assert!(!limiter.admit(8.0));
        assert!(!limiter.admit(16.0));
        assert!(limiter.admit(17.0));
    }

    #[test]
    fn carry_keeps_phase() {
        let mut limiter = FrameLimiter::new(50.0); // 20ms
        limiter.admit(0.0);
        // 25ms late: next reference is 25 - 5 = 20, so 41 is the next frame.
        assert!(limiter.admit(25.0));
        assert!(!limiter.admit(40.0));
        assert!(limiter.admit(41.0));
    }

    #[test]
    fn unlimited_when_fps_is_zero() {
        let mut limiter = FrameLimiter::new(0.0);
        limiter.admit(0.0);
        assert!(limiter.admit(0.001));
    }
}
