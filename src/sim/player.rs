//! The skier avatar
//!
//! Position, drift, lives/points and the three timed effects
//! (invincibility, score-lock, jump) with the jump's spin animation.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::tick::FrameInput;
use super::timer::Timer;
use crate::settings::Settings;
use crate::{Bounds, Rect};

/// Which way the skier sprite points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    #[default]
    Left,
    Right,
}

/// Spin and zoom for a jump at progress `t` in [0, 1].
///
/// Returns `(scale, angle_degrees)`: grows to 2x and half a turn at the apex,
/// then shrinks back while completing the turn.
pub fn jump_pose(t: f32) -> (f32, f32) {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        (1.0 + 2.0 * t, 360.0 * t)
    } else {
        (2.0 - 2.0 * (t - 0.5), 180.0 + 360.0 * (t - 0.5))
    }
}

/// The player's skier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left of the sprite
    pub pos: Vec2,
    pub size: Vec2,
    start: Vec2,
    /// Pixels per second
    pub speed: f32,
    /// Last nonzero horizontal velocity; the skier keeps sliding with it
    pub drift: f32,
    pub facing: Facing,

    pub lives: u32,
    starting_lives: u32,
    pub points: u64,
    clear_bonus: u64,
    jump_bonus: u64,

    pub invincible: Timer,
    pub score_lock: Timer,
    pub jump: Timer,
    /// Sprite zoom while airborne (1.0 on the ground)
    pub scale: f32,
    /// Sprite rotation in degrees while airborne (0.0 on the ground)
    pub angle: f32,

    /// Collision box, refreshed by `tick`
    pub hitbox: Rect,
}

impl Player {
    pub fn new(settings: &Settings) -> Self {
        let settings = settings.clone().sanitized();
        let size = settings.sprites.skier;
        let start = Vec2::new(
            (settings.window_width / 2.0).floor() - (size.x / 2.0).floor(),
            size.y + 20.0,
        );
        Self {
            pos: start,
            size,
            start,
            speed: settings.player_speed,
            drift: 0.0,
            facing: Facing::Left,
            lives: settings.starting_lives,
            starting_lives: settings.starting_lives,
            points: 0,
            clear_bonus: settings.clear_bonus,
            jump_bonus: settings.jump_bonus,
            invincible: Timer::new(settings.invincible_duration),
            score_lock: Timer::new(settings.score_lock_duration),
            jump: Timer::new(settings.jump_duration),
            scale: 1.0,
            angle: 0.0,
            hitbox: Rect::hitbox(start, size),
        }
    }

    #[inline]
    pub fn is_invincible(&self) -> bool {
        self.invincible.is_active()
    }

    #[inline]
    pub fn is_score_locked(&self) -> bool {
        self.score_lock.is_active()
    }

    #[inline]
    pub fn is_jumping(&self) -> bool {
        self.jump.is_active()
    }

    pub fn starting_position(&self) -> Vec2 {
        self.start
    }

    /// Move according to the frame's input, then clamp to the lanes
    pub fn apply_input(&mut self, input: &FrameInput, dt: f32, bounds: &Bounds) {
        let vx = if self.is_jumping() {
            // No air control
            0.0
        } else if input.left {
            self.drift = -self.speed;
            self.facing = Facing::Left;
            self.drift
        } else if input.right {
            self.drift = self.speed;
            self.facing = Facing::Right;
            self.drift
        } else {
            self.drift
        };
        self.pos.x += vx * dt;

        if input.up {
            self.pos.y -= self.speed * dt;
        }
        if input.down {
            self.pos.y += self.speed * dt;
        }

        if input.jump && !self.is_jumping() {
            self.jump.start();
        }

        self.clamp_to(bounds);
    }

    fn clamp_to(&mut self, bounds: &Bounds) {
        self.pos.x = self.pos.x.clamp(bounds.left_limit, bounds.right_limit.max(bounds.left_limit));
        let max_y = (bounds.window_height - self.size.y).max(0.0);
        self.pos.y = self.pos.y.clamp(0.0, max_y);
    }

    /// Refresh the collision box and advance the timed effects
    pub fn tick(&mut self, dt: f32) {
        self.update_hitbox();
        self.invincible.advance(dt);
        self.score_lock.advance(dt);
        if self.is_jumping() {
            self.update_jump_pose(self.jump.elapsed + dt.max(0.0));
        }
    }

    pub fn update_hitbox(&mut self) {
        self.hitbox = Rect::hitbox(self.pos, self.size);
    }

    /// Set the jump clock to `elapsed` seconds and derive the pose from it.
    /// Landing happens once the full jump duration has passed.
    pub fn update_jump_pose(&mut self, elapsed: f32) {
        self.jump.elapsed = elapsed.max(0.0);
        if self.jump.elapsed >= self.jump.duration {
            self.jump.active = false;
            self.scale = 1.0;
            self.angle = 0.0;
            return;
        }
        let (scale, angle) = jump_pose(self.jump.progress());
        self.scale = scale;
        self.angle = angle;
    }

    /// Lose a life and start the grace period
    pub fn on_obstacle_hit(&mut self) {
        self.lives = self.lives.saturating_sub(1);
        self.invincible.start();
    }

    /// Award the jump bonus and withhold clear bonuses for a while
    pub fn on_obstacle_jumped(&mut self) {
        self.points = self.points.saturating_add(self.jump_bonus);
        self.score_lock.start();
    }

    /// Award the clear bonus; callers check invincibility and score-lock
    pub fn on_obstacle_cleared(&mut self) {
        self.points = self.points.saturating_add(self.clear_bonus);
    }

    /// Back to the start line with full lives, invincible for the grace period
    pub fn reset(&mut self) {
        self.lives = self.starting_lives;
        self.points = 0;
        self.pos = self.start;
        self.invincible.start();
    }

    /// Blink while invincible: visible on even tenths of a second
    pub fn is_visible(&self) -> bool {
        if !self.is_invincible() {
            return true;
        }
        ((self.invincible.elapsed * 10.0) as u32).is_multiple_of(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn player() -> (Player, Bounds) {
        let settings = Settings::default();
        (Player::new(&settings), settings.bounds())
    }

    fn held(f: impl FnOnce(&mut FrameInput)) -> FrameInput {
        let mut input = FrameInput::default();
        f(&mut input);
        input
    }

    #[test]
    fn test_starting_state() {
        let (p, _) = player();
        assert_eq!(p.pos, Vec2::new(650.0, 120.0));
        assert_eq!(p.lives, 3);
        assert_eq!(p.points, 0);
        assert!(!p.is_invincible());
        assert_eq!(p.facing, Facing::Left);
    }

    #[test]
    fn test_zero_durations_take_defaults() {
        let settings = Settings {
            invincible_duration: 0.0,
            jump_duration: -1.0,
            starting_lives: 0,
            ..Default::default()
        };
        let mut p = Player::new(&settings);
        assert_eq!(p.invincible.duration, 3.0);
        assert_eq!(p.jump.duration, 1.5);
        assert_eq!(p.lives, 1);

        p.on_obstacle_hit();
        p.tick(SIM_DT);
        assert!(p.is_invincible());
        assert!(p.invincible.elapsed < p.invincible.duration);
    }

    #[test]
    fn test_horizontal_drift_persists() {
        let (mut p, bounds) = player();
        let x0 = p.pos.x;
        p.apply_input(&held(|i| i.right = true), SIM_DT, &bounds);
        assert!(p.pos.x > x0);
        assert_eq!(p.facing, Facing::Right);

        // Keys released: keeps sliding right at the same rate
        let x1 = p.pos.x;
        p.apply_input(&FrameInput::default(), SIM_DT, &bounds);
        assert!((p.pos.x - x1 - (x1 - x0)).abs() < 1e-3);

        p.apply_input(&held(|i| i.left = true), SIM_DT, &bounds);
        assert!(p.pos.x < x1 + (x1 - x0));
        assert_eq!(p.facing, Facing::Left);
        assert_eq!(p.drift, -p.speed);
    }

    #[test]
    fn test_no_air_control() {
        let (mut p, bounds) = player();
        p.apply_input(&held(|i| i.right = true), SIM_DT, &bounds);
        p.jump.start();
        let x = p.pos.x;
        p.apply_input(&held(|i| i.left = true), SIM_DT, &bounds);
        assert_eq!(p.pos.x, x);
        // Drift survives the jump
        assert_eq!(p.drift, p.speed);
    }

    #[test]
    fn test_vertical_move_and_clamp() {
        let (mut p, bounds) = player();
        let y = p.pos.y;
        p.apply_input(&held(|i| i.down = true), SIM_DT, &bounds);
        assert!(p.pos.y > y);
        p.apply_input(&held(|i| i.up = true), 10.0, &bounds);
        assert_eq!(p.pos.y, 0.0);
        p.apply_input(&held(|i| i.down = true), 10.0, &bounds);
        assert_eq!(p.pos.y, bounds.window_height - p.size.y);
        p.apply_input(&held(|i| i.left = true), 10.0, &bounds);
        assert_eq!(p.pos.x, bounds.left_limit);
        p.apply_input(&held(|i| i.right = true), 10.0, &bounds);
        assert_eq!(p.pos.x, bounds.right_limit);
    }

    #[test]
    fn test_jump_trigger_resets_clock_only_from_ground() {
        let (mut p, bounds) = player();
        p.apply_input(&held(|i| i.jump = true), SIM_DT, &bounds);
        assert!(p.is_jumping());
        assert_eq!(p.jump.elapsed, 0.0);
        p.tick(0.5);
        p.apply_input(&held(|i| i.jump = true), SIM_DT, &bounds);
        assert!((p.jump.elapsed - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_jump_pose_apex_and_landing() {
        let (mut p, _) = player();
        p.jump.start();
        p.update_jump_pose(p.jump.duration / 2.0);
        assert!((p.scale - 2.0).abs() < 1e-5);
        assert!((p.angle - 180.0).abs() < 1e-3);
        assert!(p.is_jumping());

        p.update_jump_pose(p.jump.duration);
        assert!(!p.is_jumping());
        assert_eq!(p.scale, 1.0);
        assert_eq!(p.angle, 0.0);
    }

    #[test]
    fn test_jump_pose_curve() {
        let (scale, angle) = jump_pose(0.25);
        assert!((scale - 1.5).abs() < 1e-6);
        assert!((angle - 90.0).abs() < 1e-4);
        let (scale, angle) = jump_pose(0.75);
        assert!((scale - 1.5).abs() < 1e-6);
        assert!((angle - 270.0).abs() < 1e-4);
    }

    #[test]
    fn test_jump_lands_through_tick() {
        let (mut p, _) = player();
        p.jump.start();
        for _ in 0..89 {
            p.tick(SIM_DT);
        }
        assert!(p.is_jumping());
        p.tick(SIM_DT * 2.0);
        assert!(!p.is_jumping());
        assert_eq!(p.scale, 1.0);
    }

    #[test]
    fn test_hit_and_floor() {
        let (mut p, _) = player();
        for _ in 0..5 {
            p.on_obstacle_hit();
        }
        assert_eq!(p.lives, 0);
        assert!(p.is_invincible());
        assert_eq!(p.invincible.elapsed, 0.0);
    }

    #[test]
    fn test_invincibility_clears_at_duration() {
        let (mut p, _) = player();
        p.on_obstacle_hit();
        p.tick(2.9);
        assert!(p.is_invincible());
        p.tick(0.1);
        assert!(!p.is_invincible());
    }

    #[test]
    fn test_bonuses() {
        let (mut p, _) = player();
        p.on_obstacle_jumped();
        assert_eq!(p.points, 100);
        assert!(p.is_score_locked());
        p.on_obstacle_cleared();
        assert_eq!(p.points, 125);
        p.tick(3.0);
        assert!(!p.is_score_locked());
    }

    #[test]
    fn test_reset_grants_grace() {
        let (mut p, bounds) = player();
        p.on_obstacle_jumped();
        p.on_obstacle_hit();
        p.apply_input(&held(|i| i.down = true), 1.0, &bounds);
        p.tick(3.5);
        p.reset();
        assert_eq!(p.lives, 3);
        assert_eq!(p.points, 0);
        assert_eq!(p.pos, p.starting_position());
        assert!(p.is_invincible());
        assert_eq!(p.invincible.elapsed, 0.0);
    }

    #[test]
    fn test_blink_while_invincible() {
        let (mut p, _) = player();
        assert!(p.is_visible());
        p.on_obstacle_hit();
        assert!(p.is_visible());
        p.tick(0.15);
        assert!(!p.is_visible());
        p.tick(0.1);
        assert!(p.is_visible());
    }

    #[test]
    fn test_hitbox_follows_position() {
        let (mut p, bounds) = player();
        p.apply_input(&held(|i| i.down = true), SIM_DT, &bounds);
        p.tick(SIM_DT);
        assert_eq!(p.hitbox.pos, p.pos + Vec2::splat(10.0));
        assert_eq!(p.hitbox.size, p.size - Vec2::splat(20.0));
    }
}
