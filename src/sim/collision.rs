//! Collision rules between the skier and obstacles
//!
//! Pure functions: they read the player and obstacle and decide, the session
//! applies the outcome.

use serde::{Deserialize, Serialize};

use super::obstacle::Obstacle;
use super::player::Player;
use crate::Bounds;

/// Result of checking the skier against one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionOutcome {
    None,
    /// Lose a life
    Hit,
    /// Airborne over a rock: jump bonus
    Jumped,
}

/// Decide what touching `obstacle` means this frame.
///
/// Rules are checked in order:
/// 1. overlapping, vulnerable, and grounded or the obstacle is a tree: `Hit`
/// 2. overlapping, vulnerable, airborne over a rock, not score-locked: `Jumped`
/// 3. vulnerable and on or past a lane limit: `Hit`
pub fn resolve(player: &Player, obstacle: &Obstacle, bounds: &Bounds) -> CollisionOutcome {
    if player.is_invincible() {
        return CollisionOutcome::None;
    }

    let touching = obstacle.is_visible(bounds.window_height) && player.hitbox.intersects(&obstacle.hitbox);

    if touching && (!player.is_jumping() || !obstacle.jump_allowed) {
        return CollisionOutcome::Hit;
    }

    if touching && obstacle.jump_allowed && player.is_jumping() && !player.is_score_locked() {
        return CollisionOutcome::Jumped;
    }

    if player.pos.x <= bounds.left_limit || player.pos.x >= bounds.right_limit {
        return CollisionOutcome::Hit;
    }

    CollisionOutcome::None
}

/// Whether the skier has just moved below an obstacle not yet counted
pub fn check_cleared(player: &Player, obstacle: &Obstacle) -> bool {
    player.pos.y > obstacle.pos.y && !obstacle.cleared
}
