//! Frame-rate limiter for a per-frame animation loop.
//!
//! The host calls [`FrameClock::tick`] with a monotonic timestamp on every
//! display refresh; the clock decides whether enough time has passed for a
//! new update/draw frame. No timers are owned here.

/// Frames per second used by [`FrameClock::default`].
pub const DEFAULT_FPS: f64 = 60.0;

/// One accepted frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameTick {
    /// 1-based count of frames accepted so far.
    pub frame: u64,
    /// Milliseconds since the previous accepted frame boundary.
    pub elapsed_ms: f64,
}

#[derive(Debug, Clone)]
pub struct FrameClock {
    interval_ms: f64,
    then_ms: f64,
    frame: u64,
}

impl FrameClock {
    /// A clock targeting `fps` frames per second, started at `now_ms`.
    ///
    /// A non-positive or non-finite `fps` falls back to [`DEFAULT_FPS`].
    pub fn new(fps: f64, now_ms: f64) -> Self {
        let fps = if fps.is_finite() && fps > 0.0 { fps } else { DEFAULT_FPS };
        Self {
            interval_ms: 1000.0 / fps,
            then_ms: now_ms,
            frame: 0,
        }
    }

    /// Target time between frames.
    pub fn interval_ms(&self) -> f64 {
        self.interval_ms
    }

    /// Frames accepted so far.
    pub fn frame(&self) -> u64 {
        self.frame
    }

    /// Offer a refresh at `now_ms`.
    ///
    /// When more than one interval has passed, the frame is accepted and the
    /// reference time is realigned to the last interval boundary so the
    /// cadence does not drift.
    pub fn tick(&mut self, now_ms: f64) -> Option<FrameTick> {
        let elapsed = now_ms - self.then_ms;
        if elapsed <= self.interval_ms {
            return None;
        }
        self.then_ms = now_ms - elapsed % self.interval_ms;
        self.frame += 1;
        Some(FrameTick {
            frame: self.frame,
            elapsed_ms: elapsed,
        })
    }

    /// Restart timing from `now_ms`, keeping the frame counter.
    pub fn reset(&mut self, now_ms: f64) {
        self.then_ms = now_ms;
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new(DEFAULT_FPS, 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn waits_for_a_full_interval() {
        let mut clock = FrameClock::new(10.0, 0.0);
        assert_eq!(clock.interval_ms(), 100.0);
        assert_eq!(clock.tick(50.0), None);
        assert_eq!(clock.tick(100.0), None);
        let t = clock.tick(130.0).unwrap();
        assert_eq!(t.frame, 1);
        assert_eq!(t.elapsed_ms, 130.0);
    }

    #[test]
    fn realigns_to_interval_boundary() {
        let mut clock = FrameClock::new(10.0, 0.0);
        clock.tick(130.0).unwrap();
        // Reference is now 100, so 190 is not yet a full interval later.
        assert_eq!(clock.tick(190.0), None);
        assert_eq!(clock.tick(205.0).unwrap().frame, 2);
    }

    #[test]
    fn invalid_fps_falls_back() {
        let clock = FrameClock::new(0.0, 0.0);
        assert_eq!(clock.interval_ms(), 1000.0 / DEFAULT_FPS);
        assert_eq!(FrameClock::default().frame(), 0);
    }

    #[test]
    fn reset_restarts_timing() {
        let mut clock = FrameClock::new(10.0, 0.0);
        clock.reset(1000.0);
        assert_eq!(clock.tick(1050.0), None);
        assert!(clock.tick(1101.0).is_some());
    }
}
