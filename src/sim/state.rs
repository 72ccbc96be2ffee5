//! Session state: one playthrough from title screen to game over and back
//!
//! The session owns the skier, the fixed set of obstacles and the RNG used
//! for respawns. Obstacles keep their slot for the whole session.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::difficulty::Difficulty;
use super::obstacle::{Obstacle, ObstacleKind, SpawnRules};
use super::player::Player;
use super::scenery::Scenery;
use crate::Bounds;
use crate::settings::Settings;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Title screen, waiting for confirm
    NotStarted,
    /// Active gameplay
    Running,
    /// Out of lives, waiting for confirm to restart
    GameOver,
}

/// Complete game session (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(crate) settings: Settings,
    pub(crate) bounds: Bounds,
    pub(crate) spawn: SpawnRules,
    pub(crate) phase: SessionPhase,
    pub(crate) player: Player,
    /// Rocks first, then trees; order is update and draw order
    pub(crate) obstacles: Vec<Obstacle>,
    pub(crate) difficulty: Difficulty,
    pub(crate) scenery: Scenery,
    pub(crate) rng: Pcg32,
    pub(crate) seed: u64,
    /// Frames simulated while running
    pub(crate) frames: u64,
}

impl GameSession {
    /// Create a session on the title screen.
    ///
    /// The seed comes from the settings when present, otherwise `seed`.
    pub fn new(settings: Settings, seed: u64) -> Self {
        let settings = settings.sanitized();
        let bounds = settings.bounds();
        Self::with_bounds(settings, bounds, seed)
    }

    /// Create a session using geometry supplied by the presentation layer
    pub fn with_bounds(settings: Settings, bounds: Bounds, seed: u64) -> Self {
        let mut settings = settings.sanitized();
        let bounds = bounds.sanitized(settings.bounds());
        settings.window_width = bounds.window_width;
        settings.window_height = bounds.window_height;
        let seed = settings.seed.unwrap_or(seed);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut spawn = SpawnRules::from_settings(&settings);
        spawn.window_height = bounds.window_height;
        spawn.min_x = bounds.left_limit + settings.spawn_margin;
        spawn.max_x = (bounds.right_limit - settings.spawn_margin).max(spawn.min_x);

        let sprites = settings.sprites;
        let mut obstacles = Vec::with_capacity(settings.rocks + settings.trees);
        for _ in 0..settings.rocks {
            obstacles.push(Obstacle::spawn(ObstacleKind::Rock, sprites.rock, &spawn, &mut rng));
        }
        for _ in 0..settings.trees {
            obstacles.push(Obstacle::spawn(ObstacleKind::Tree, sprites.tree, &spawn, &mut rng));
        }

        let difficulty = Difficulty::from_points(0, settings.points_per_level, settings.speed_curve);
        let scenery = Scenery::new(bounds.window_width, bounds.window_height, settings.border_spacing);

        log::info!(
            "Session created with seed {} ({} rocks, {} trees)",
            seed,
            settings.rocks,
            settings.trees
        );

        Self {
            player: Player::new(&settings),
            settings,
            bounds,
            spawn,
            phase: SessionPhase::NotStarted,
            obstacles,
            difficulty,
            scenery,
            rng,
            seed,
            frames: 0,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Direct access for scripted scenarios and tools
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        &self.obstacles
    }

    /// Direct access for scripted scenarios and tools; the set stays fixed
    pub fn obstacles_mut(&mut self) -> &mut [Obstacle] {
        &mut self.obstacles
    }

    pub fn level(&self) -> u32 {
        self.difficulty.level
    }

    pub fn scroll_speed(&self) -> f32 {
        self.difficulty.scroll_speed
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn scenery(&self) -> &Scenery {
        &self.scenery
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Recompute level and speed from the current points
    pub(crate) fn refresh_difficulty(&mut self) {
        let next = Difficulty::from_points(
            self.player.points,
            self.settings.points_per_level,
            self.settings.speed_curve,
        );
        if next.level != self.difficulty.level && self.phase == SessionPhase::Running {
            log::info!("Level {} (scroll speed {})", next.level, next.scroll_speed);
        }
        self.difficulty = next;
    }

    /// Put the skier back at the start with full lives and level 1
    pub(crate) fn restart(&mut self) {
        self.player.reset();
        self.player.update_hitbox();
        self.refresh_difficulty();
    }
}
