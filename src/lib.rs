//! Alpine Ski - a side-scrolling skiing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player, obstacles, collisions, difficulty)
//! - `renderer`: Drawing contract consumed by a presentation layer
//! - `audio`: Fire-and-forget sound cues
//! - `platform`: Input snapshots, fixed-step frame clock, demo autopilot
//! - `settings`: Data-driven game tuning

pub mod audio;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{OffscreenRule, Settings, SpeedCurve};

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Target frame rate of the game loop
    pub const TARGET_FPS: u32 = 60;
    /// Fixed simulation timestep (one frame at 60 Hz)
    pub const SIM_DT: f32 = 1.0 / TARGET_FPS as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest wall-clock frame the clock will accept (seconds)
    pub const MAX_FRAME_TIME: f32 = 0.1;

    /// Collision boxes are shrunk by this much on every side of the sprite
    pub const HITBOX_INSET: f32 = 10.0;
}

/// Screen geometry the simulation reads from the presentation layer.
///
/// Screen space has its origin at the top-left corner, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub window_width: f32,
    pub window_height: f32,
    /// Leftmost x the skier may occupy; reaching it is a hazard
    pub left_limit: f32,
    /// Rightmost x the skier may occupy; reaching it is a hazard
    pub right_limit: f32,
}

impl Bounds {
    /// Replace unusable geometry with `fallback`: non-finite or non-positive
    /// window sizes, non-finite limits, and a right limit left of the left one
    pub fn sanitized(self, fallback: Bounds) -> Self {
        let usable = |v: f32| v.is_finite() && v > 0.0;
        let (window_width, window_height) = if usable(self.window_width) && usable(self.window_height) {
            (self.window_width, self.window_height)
        } else {
            (fallback.window_width, fallback.window_height)
        };
        let (left_limit, right_limit) = if self.left_limit.is_finite() && self.right_limit.is_finite() {
            (self.left_limit, self.right_limit)
        } else {
            (fallback.left_limit, fallback.right_limit)
        };
        Self {
            window_width,
            window_height,
            left_limit,
            right_limit: right_limit.max(left_limit),
        }
    }
}

/// Axis-aligned rectangle in screen space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Collision box for a sprite drawn at `pos`: inset by `HITBOX_INSET`
    /// on each side so it sits strictly inside the sprite.
    pub fn hitbox(pos: Vec2, sprite_size: Vec2) -> Self {
        let inset = consts::HITBOX_INSET;
        Self {
            pos: pos + Vec2::splat(inset),
            size: (sprite_size - Vec2::splat(2.0 * inset)).max(Vec2::ZERO),
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Overlap test with a non-empty shared area (touching edges do not count)
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.size.x <= 0.0 || self.size.y <= 0.0 || other.size.x <= 0.0 || other.size.y <= 0.0 {
            return false;
        }
        self.pos.x < other.right()
            && other.pos.x < self.right()
            && self.pos.y < other.bottom()
            && other.pos.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hitbox_is_inset() {
        let sprite_pos = Vec2::new(100.0, 40.0);
        let sprite_size = Vec2::new(90.0, 60.0);
        let hb = Rect::hitbox(sprite_pos, sprite_size);
        assert_eq!(hb.pos, Vec2::new(110.0, 50.0));
        assert_eq!(hb.size, Vec2::new(70.0, 40.0));
        assert!(hb.pos.x > sprite_pos.x && hb.right() < sprite_pos.x + sprite_size.x);
        assert!(hb.pos.y > sprite_pos.y && hb.bottom() < sprite_pos.y + sprite_size.y);
    }

    #[test]
    fn test_bounds_sanitized() {
        let fallback = Settings::default().bounds();
        let good = Bounds {
            window_width: 800.0,
            window_height: 600.0,
            left_limit: 100.0,
            right_limit: 600.0,
        };
        assert_eq!(good.sanitized(fallback), good);

        let nan_limit = Bounds {
            left_limit: f32::NAN,
            ..good
        };
        let fixed = nan_limit.sanitized(fallback);
        assert_eq!(fixed.left_limit, fallback.left_limit);
        assert_eq!(fixed.right_limit, fallback.right_limit);
        assert_eq!(fixed.window_width, 800.0);

        let bad_window = Bounds {
            window_height: f32::INFINITY,
            ..good
        };
        assert_eq!(bad_window.sanitized(fallback).window_height, fallback.window_height);

        let crossed = Bounds {
            left_limit: 500.0,
            right_limit: 200.0,
            ..good
        };
        let fixed = crossed.sanitized(fallback);
        assert_eq!(fixed.right_limit, 500.0);
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(Vec2::ZERO, Vec2::splat(10.0));
        let b = Rect::new(Vec2::splat(5.0), Vec2::splat(10.0));
        let c = Rect::new(Vec2::new(10.0, 0.0), Vec2::splat(10.0));
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        // Shared edge only
        assert!(!a.intersects(&c));
        // Degenerate box never collides
        let empty = Rect::new(Vec2::splat(2.0), Vec2::ZERO);
        assert!(!a.intersects(&empty));
    }
}
