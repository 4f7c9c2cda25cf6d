// extensions/tween.rs
//
// Time bookkeeping for a single animation run, driven by absolute timestamps.
// The tween does not own the animated values: callers keep their own
// start/goal pairs and ask the tween to interpolate them.
//
// Usage:
//   let mut tween = Tween::new(Easing::QuadOut);
//   tween.schedule(now + 250.0, 3000.0);   // deferred start
//   tween.advance(now);                    // once per frame
//   radius = tween.value(0.0, goal_radius);

use glam::Vec2;
use super::easing::Easing;

/// Where a tween is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TweenStatus {
    /// Never started, or finished.
    Stopped,
    /// Waiting for its scheduled start time.
    Pending,
    /// Advancing.
    Running,
}

/// One animation run measured in milliseconds on the caller's clock.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Easing curve applied to every interpolated quantity.
    pub easing: Easing,
    /// Duration of the current run.
    duration: f64,
    /// Timestamp the current run started at.
    start_time: f64,
    /// Milliseconds since `start_time`, as of the last `advance`.
    elapsed: f64,
    running: bool,
    /// Deferred start: (start time, duration).
    pending: Option<(f64, f64)>,
    /// Number of runs that have finished.
    completed_runs: u32,
}

impl Tween {
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            duration: 0.0,
            start_time: 0.0,
            elapsed: 0.0,
            running: false,
            pending: None,
            completed_runs: 0,
        }
    }

    /// Start a run immediately. Replaces any running or pending run.
    pub fn restart(&mut self, now: f64, duration: f64) {
        self.pending = None;
        self.duration = duration.max(0.0);
        self.start_time = now;
        self.elapsed = 0.0;
        self.running = true;
    }

    /// Start a run at `at`. It begins on the first `advance` at or after that time.
    pub fn schedule(&mut self, at: f64, duration: f64) {
        self.pending = Some((at, duration));
    }

    /// Move the clock to `now`.
    ///
    /// Returns `true` when a run finished during this call. A run finishes once
    /// elapsed time strictly exceeds its duration, so the frame that lands on
    /// `elapsed == duration` still reports the exact end values.
    pub fn advance(&mut self, now: f64) -> bool {
        if let Some((at, duration)) = self.pending {
            if now >= at {
                self.restart(at, duration);
            }
        }

        if !self.running {
            return false;
        }

        self.elapsed = (now - self.start_time).max(0.0);
        if self.elapsed > self.duration {
            self.running = false;
            self.completed_runs += 1;
            return true;
        }
        false
    }

    pub fn status(&self) -> TweenStatus {
        if self.running {
            TweenStatus::Running
        } else if self.pending.is_some() {
            TweenStatus::Pending
        } else {
            TweenStatus::Stopped
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn completed_runs(&self) -> u32 {
        self.completed_runs
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    pub fn start_time(&self) -> f64 {
        self.start_time
    }

    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Normalized progress [0, 1].
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0) as f32
        }
    }

    /// Interpolate `from → to` at the current elapsed time.
    /// From `elapsed == duration` on, the result is exactly `to`.
    #[inline]
    pub fn value(&self, from: f32, to: f32) -> f32 {
        if self.elapsed >= self.duration {
            return to;
        }
        self.easing.ease(self.elapsed as f32, from, to - from, self.duration as f32)
    }

    /// Interpolate each axis independently.
    #[inline]
    pub fn value_vec2(&self, from: Vec2, to: Vec2) -> Vec2 {
        Vec2::new(self.value(from.x, to.x), self.value(from.y, to.y))
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(Easing::QuadOut)
    }
}
