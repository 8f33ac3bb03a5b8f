//! Fixed-step frame loop driven by explicit frame times.
//!
//! Frame times are accumulated and drained in `step`-sized updates, so scene
//! animation is independent of how unevenly frames arrive. Long frames are
//! clamped to `max_frame_time` instead of replaying every missed step.

use tracing::warn;

/// Default clamp, in multiples of the step.
pub const MAX_STEPS_PER_FRAME: f64 = 15.0;

/// Fixed-step accumulator.
pub struct FrameLoop {
    step: f64,
    max_frame_time: f64,
    accumulator: f64,
    total_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl FrameLoop {
    /// Loop that updates in increments of `step` and clamps each frame to
    /// `MAX_STEPS_PER_FRAME` steps.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not positive and finite.
    pub fn new(step: f64) -> Self {
        Self::with_max_frame_time(step, step * MAX_STEPS_PER_FRAME)
    }

    /// Loop with an explicit frame-time clamp.
    ///
    /// # Panics
    ///
    /// Panics if `step` is not positive and finite, or `max_frame_time < step`.
    pub fn with_max_frame_time(step: f64, max_frame_time: f64) -> Self {
        assert!(
            step > 0.0 && step.is_finite(),
            "step must be positive and finite, got {step}"
        );
        assert!(
            max_frame_time >= step,
            "max_frame_time ({max_frame_time}) must be at least one step ({step})"
        );
        Self {
            step,
            max_frame_time,
            accumulator: 0.0,
            total_time: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Feed one frame of `frame_time`, calling `update_fn(step, total_time)` for
    /// each whole step it completes. Returns the number of updates run.
    pub fn tick(&mut self, frame_time: f64, mut update_fn: impl FnMut(f64, f64)) -> u32 {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > self.max_frame_time {
            warn!(
                "Frame time {frame_time:.1} exceeds maximum, clamping to {:.1}",
                self.max_frame_time
            );
            frame_time = self.max_frame_time;
        }

        self.accumulator += frame_time;

        let mut updates = 0;
        while self.accumulator >= self.step {
            update_fn(self.step, self.total_time);
            self.total_time += self.step;
            self.accumulator -= self.step;
            updates += 1;
        }

        self.update_count += u64::from(updates);
        self.frame_count += 1;
        updates
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Simulated time consumed by updates so far.
    pub fn total_time(&self) -> f64 {
        self.total_time
    }
}
