//! Game settings and tuning
//!
//! Loaded from a JSON file when one is given; every field has a default so
//! partial files are accepted.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Bounds;

/// How scroll speed grows with level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SpeedCurve {
    /// `speed = level + 1`
    #[default]
    LevelPlusOne,
    /// `speed = level / 2 + 1`
    HalfLevelPlusOne,
}

impl SpeedCurve {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpeedCurve::LevelPlusOne => "LevelPlusOne",
            SpeedCurve::HalfLevelPlusOne => "HalfLevelPlusOne",
        }
    }

    /// Scroll speed in pixels per frame for a level
    pub fn speed_for(&self, level: u32) -> f32 {
        match self {
            SpeedCurve::LevelPlusOne => level as f32 + 1.0,
            SpeedCurve::HalfLevelPlusOne => level as f32 / 2.0 + 1.0,
        }
    }
}

/// When an obstacle counts as gone off the top of the screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum OffscreenRule {
    /// `y < -sprite_height`: fully scrolled out
    #[default]
    SpriteHeight,
    /// `y < 0`: top edge crossed the window
    Zero,
}

impl OffscreenRule {
    /// Lowest y an obstacle of `sprite_height` may keep before respawning
    pub fn threshold(&self, sprite_height: f32) -> f32 {
        match self {
            OffscreenRule::SpriteHeight => -sprite_height,
            OffscreenRule::Zero => 0.0,
        }
    }
}

/// Pixel sizes of the sprites the simulation reasons about
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpriteSizes {
    pub skier: Vec2,
    pub tree: Vec2,
    pub rock: Vec2,
}

impl Default for SpriteSizes {
    fn default() -> Self {
        Self {
            skier: Vec2::new(100.0, 100.0),
            tree: Vec2::new(70.0, 70.0),
            rock: Vec2::new(90.0, 60.0),
        }
    }
}

/// Game settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Window ===
    pub window_width: f32,
    pub window_height: f32,
    /// Grid spacing of the border trees; lane limits derive from it
    pub border_spacing: f32,
    pub sprites: SpriteSizes,

    // === Player ===
    /// Skier speed in pixels per second
    pub player_speed: f32,
    pub starting_lives: u32,
    /// Seconds of invulnerability after a hit or a restart
    pub invincible_duration: f32,
    /// Seconds during which clear bonuses are withheld after a jump bonus
    pub score_lock_duration: f32,
    /// Seconds a jump lasts
    pub jump_duration: f32,

    // === Scoring ===
    pub clear_bonus: u64,
    pub jump_bonus: u64,
    pub points_per_level: u64,
    pub speed_curve: SpeedCurve,

    // === Obstacles ===
    /// Number of rocks (can be jumped)
    pub rocks: usize,
    /// Number of trees (cannot be jumped)
    pub trees: usize,
    /// Horizontal distance kept between spawned obstacles and the lane limits
    pub spawn_margin: f32,
    pub offscreen_rule: OffscreenRule,

    // === Loop ===
    /// Obstacle RNG seed (random when absent)
    pub seed: Option<u64>,
    pub target_fps: u32,
    pub max_substeps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            window_width: 1400.0,
            window_height: 750.0,
            border_spacing: 50.0,
            sprites: SpriteSizes::default(),

            player_speed: 300.0,
            starting_lives: 3,
            invincible_duration: 3.0,
            score_lock_duration: 3.0,
            jump_duration: 1.5,

            clear_bonus: 25,
            jump_bonus: 100,
            points_per_level: 1000,
            speed_curve: SpeedCurve::LevelPlusOne,

            rocks: 3,
            trees: 4,
            spawn_margin: 50.0,
            offscreen_rule: OffscreenRule::SpriteHeight,

            seed: None,
            target_fps: crate::consts::TARGET_FPS,
            max_substeps: crate::consts::MAX_SUBSTEPS,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str::<Settings>(json).map(Settings::sanitized)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load settings from a JSON file, falling back to defaults
    pub fn load(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings in {}: {} - using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read {}: {} - using defaults", path.display(), e);
                Self::default()
            }
        }
    }

    /// Clamp values that would break simulation invariants
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        self.window_width = positive_or(self.window_width, defaults.window_width);
        self.window_height = positive_or(self.window_height, defaults.window_height);
        self.border_spacing = positive_or(self.border_spacing, defaults.border_spacing);
        if 8.0 * self.border_spacing >= self.window_width {
            self.border_spacing = self.window_width / 10.0;
        }
        self.sprites.skier = self.sprites.skier.max(Vec2::ONE);
        self.sprites.tree = self.sprites.tree.max(Vec2::ONE);
        self.sprites.rock = self.sprites.rock.max(Vec2::ONE);
        self.player_speed = self.player_speed.max(0.0);
        self.invincible_duration = positive_or(self.invincible_duration, defaults.invincible_duration);
        self.score_lock_duration = positive_or(self.score_lock_duration, defaults.score_lock_duration);
        self.jump_duration = positive_or(self.jump_duration, defaults.jump_duration);
        self.starting_lives = self.starting_lives.max(1);
        self.points_per_level = self.points_per_level.max(1);
        self.spawn_margin = self.spawn_margin.max(0.0);
        self.target_fps = self.target_fps.max(1);
        self.max_substeps = self.max_substeps.max(1);
        self
    }

    /// Window and lane geometry
    pub fn bounds(&self) -> Bounds {
        Bounds {
            window_width: self.window_width,
            window_height: self.window_height,
            left_limit: 3.0 * self.border_spacing,
            right_limit: self.window_width - 5.0 * self.border_spacing,
        }
    }

    /// Fixed frame time in seconds
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps as f32
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value > 0.0 { value } else { fallback }
}
