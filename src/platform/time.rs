//! Fixed-rate frame pacing
//!
//! The shell feeds in wall-clock time as it passes; the clock says how many
//! whole frames are due. Leftover time carries over to the next call.

/// Fixed-rate frame throttle
#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Seconds per frame
    interval: f64,
    /// Time owed to the simulation, always below one interval after `advance`
    accumulator: f64,
    /// Frames run per call at most; older time is dropped
    max_frames: u32,
}

impl FrameClock {
    pub fn new(target_fps: u32, max_frames: u32) -> Self {
        Self {
            interval: 1.0 / target_fps.max(1) as f64,
            accumulator: 0.0,
            max_frames: max_frames.max(1),
        }
    }

    /// Seconds per frame
    pub fn interval(&self) -> f64 {
        self.interval
    }

    /// Account for `elapsed` seconds and return the number of frames due.
    ///
    /// Long stalls are clamped so the game never tries to catch up more than
    /// `max_frames` at once.
    pub fn advance(&mut self, elapsed: f64) -> u32 {
        if elapsed.is_finite() && elapsed > 0.0 {
            self.accumulator += elapsed;
        }

        let mut frames = 0;
        while self.accumulator >= self.interval && frames < self.max_frames {
            self.accumulator -= self.interval;
            frames += 1;
        }
        if self.accumulator >= self.interval {
            // Still behind after the cap: drop the backlog instead of spiralling
            self.accumulator = 0.0;
        }
        frames
    }

    /// Seconds until the next frame is due
    pub fn until_next_frame(&self) -> f64 {
        (self.interval - self.accumulator).max(0.0)
    }

    /// Forget any owed time (after a pause, so play resumes without a burst)
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}
