//! Fixed-step frame clock
//!
//! Wall-clock time is accumulated and handed out in whole simulation frames,
//! so the game runs at the same pace whatever the display refresh rate.

use crate::consts::MAX_FRAME_TIME;
use crate::settings::Settings;

#[derive(Debug, Clone)]
pub struct FrameClock {
    /// Seconds per simulation frame
    step: f32,
    max_substeps: u32,
    accumulator: f32,
}

impl FrameClock {
    pub fn new(step: f32, max_substeps: u32) -> Self {
        Self {
            step: step.max(f32::EPSILON),
            max_substeps: max_substeps.max(1),
            accumulator: 0.0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.frame_dt(), settings.max_substeps)
    }

    pub fn step(&self) -> f32 {
        self.step
    }

    /// Add `elapsed` wall-clock seconds; returns how many frames to simulate
    pub fn advance(&mut self, elapsed: f32) -> u32 {
        // Long stalls (debugger, window drag) are not caught up on
        self.accumulator += elapsed.clamp(0.0, MAX_FRAME_TIME);

        let mut substeps = 0;
        while self.accumulator >= self.step && substeps < self.max_substeps {
            self.accumulator -= self.step;
            substeps += 1;
        }
        if substeps == self.max_substeps {
            self.accumulator = self.accumulator.min(self.step);
        }
        substeps
    }
}
