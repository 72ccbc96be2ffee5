//! Timed status effects
//!
//! Invincibility, score-lock and the jump all follow the same pattern: a flag
//! that turns itself off once enough frame time has been accumulated.

use serde::{Deserialize, Serialize};

/// An `(active, elapsed, duration)` triple advanced by explicit frame time
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Timer {
    pub active: bool,
    /// Seconds accumulated since the last `start`; only grows while active
    pub elapsed: f32,
    pub duration: f32,
}

impl Timer {
    pub fn new(duration: f32) -> Self {
        Self {
            active: false,
            elapsed: 0.0,
            duration,
        }
    }

    /// Activate (or re-arm) the effect from zero
    pub fn start(&mut self) {
        self.active = true;
        self.elapsed = 0.0;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Accumulate `dt` seconds. Returns true if the effect ran out during
    /// this call; the flag is already cleared when that happens.
    pub fn advance(&mut self, dt: f32) -> bool {
        if !self.active {
            return false;
        }
        self.elapsed += dt.max(0.0);
        if self.elapsed >= self.duration {
            self.active = false;
            return true;
        }
        false
    }

    /// Fraction of the duration elapsed, in [0, 1]
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
}
