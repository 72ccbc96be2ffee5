//! Rocks and trees scrolling up the slope
//!
//! Obstacles are never destroyed: once one leaves the top of the window it
//! respawns in place below the bottom edge at a fresh x.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::settings::{OffscreenRule, Settings};
use crate::Rect;

/// Obstacle flavour; only decides the sprite and whether it can be jumped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ObstacleKind {
    /// Low obstacle, can be jumped for a bonus
    Rock,
    /// Tall obstacle, always a hit
    Tree,
}

impl ObstacleKind {
    pub fn jump_allowed(&self) -> bool {
        matches!(self, ObstacleKind::Rock)
    }
}

/// Where and when obstacles respawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpawnRules {
    pub window_height: f32,
    /// Smallest spawn x (left lane limit plus margin)
    pub min_x: f32,
    /// Largest spawn x (right lane limit minus margin)
    pub max_x: f32,
    pub offscreen: OffscreenRule,
}

impl SpawnRules {
    pub fn from_settings(settings: &Settings) -> Self {
        let bounds = settings.bounds();
        let min_x = bounds.left_limit + settings.spawn_margin;
        let max_x = (bounds.right_limit - settings.spawn_margin).max(min_x);
        Self {
            window_height: settings.window_height,
            min_x,
            max_x,
            offscreen: settings.offscreen_rule,
        }
    }
}

/// A single obstacle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    pub kind: ObstacleKind,
    /// Top-left of the sprite
    pub pos: Vec2,
    pub size: Vec2,
    pub jump_allowed: bool,
    /// Set once the skier has passed below it; reset on respawn
    pub cleared: bool,
    /// Collision box, refreshed by `update_hitbox`
    pub hitbox: Rect,
}

impl Obstacle {
    /// Create an obstacle already placed below the window
    pub fn spawn<R: Rng + ?Sized>(kind: ObstacleKind, size: Vec2, rules: &SpawnRules, rng: &mut R) -> Self {
        let mut obstacle = Self {
            kind,
            pos: Vec2::ZERO,
            size,
            jump_allowed: kind.jump_allowed(),
            cleared: false,
            hitbox: Rect::default(),
        };
        obstacle.respawn(rules, rng);
        obstacle
    }

    /// Move below the bottom edge at a random depth and lane position
    pub fn respawn<R: Rng + ?Sized>(&mut self, rules: &SpawnRules, rng: &mut R) {
        let depth = rules.window_height.max(0.0) as i32;
        let min_x = rules.min_x.ceil() as i32;
        let max_x = (rules.max_x.floor() as i32).max(min_x);
        self.pos.y = rules.window_height + rng.random_range(0..=depth) as f32;
        self.pos.x = rng.random_range(min_x..=max_x) as f32;
        self.cleared = false;
        self.update_hitbox();
    }

    /// Scroll up by `speed` pixels; respawn once past the top edge
    pub fn advance<R: Rng + ?Sized>(&mut self, speed: f32, rules: &SpawnRules, rng: &mut R) -> bool {
        self.pos.y -= speed;
        if self.pos.y < rules.offscreen.threshold(self.size.y) {
            self.respawn(rules, rng);
            return true;
        }
        false
    }

    pub fn update_hitbox(&mut self) {
        self.hitbox = Rect::hitbox(self.pos, self.size);
    }

    pub fn set_cleared(&mut self) {
        self.cleared = true;
    }

    /// Whether any part of the sprite is inside the window vertically
    pub fn is_visible(&self, window_height: f32) -> bool {
        -self.size.y < self.pos.y && self.pos.y < window_height
    }
}
