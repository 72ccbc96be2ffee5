//! Demo autopilot
//!
//! Plays the game from a read-only view of the session: dodges trees, jumps
//! rocks and keeps away from the lane limits. Used by the headless runner.

use crate::sim::{FrameInput, GameSession, Obstacle, SessionPhase};

/// How far below the skier obstacles are considered (pixels)
const LOOKAHEAD: f32 = 220.0;
/// Extra horizontal clearance wanted around the skier's collision box
const CLEARANCE: f32 = 20.0;
/// Jump when a rock's box is this close below the skier's box
const JUMP_WINDOW: f32 = 24.0;
/// Distance from a lane limit at which the autopilot steers back
const WALL_MARGIN: f32 = 120.0;

/// Decide this frame's input for the current session state
pub fn autopilot(session: &GameSession) -> FrameInput {
    let mut input = FrameInput::default();

    match session.phase() {
        SessionPhase::NotStarted | SessionPhase::GameOver => {
            input.confirm = true;
            return input;
        }
        SessionPhase::Running => {}
    }

    let player = session.player();
    let bounds = session.bounds();
    let hitbox = player.hitbox;
    let center_x = hitbox.pos.x + hitbox.size.x / 2.0;

    // Nearest obstacle below us that is in our path
    let threat = session
        .obstacles()
        .iter()
        .filter(|o| o.is_visible(bounds.window_height))
        .filter(|o| o.hitbox.bottom() > hitbox.pos.y && o.hitbox.pos.y - hitbox.bottom() < LOOKAHEAD)
        .filter(|o| {
            o.hitbox.pos.x < hitbox.right() + CLEARANCE && o.hitbox.right() > hitbox.pos.x - CLEARANCE
        })
        .min_by(|a, b| a.pos.y.total_cmp(&b.pos.y));

    if let Some(obstacle) = threat {
        if can_jump(session, obstacle) {
            let gap = obstacle.hitbox.pos.y - hitbox.bottom();
            input.jump = gap <= JUMP_WINDOW;
            return input;
        }
        let obstacle_center = obstacle.hitbox.pos.x + obstacle.hitbox.size.x / 2.0;
        let dodge_left = obstacle_center > center_x;
        // Never dodge into a wall
        if dodge_left && player.pos.x - bounds.left_limit > WALL_MARGIN {
            input.left = true;
        } else if !dodge_left && bounds.right_limit - player.pos.x > WALL_MARGIN {
            input.right = true;
        } else {
            input.left = !dodge_left;
            input.right = dodge_left;
        }
        return input;
    }

    // Drift carries on without input; turn around near the walls
    if player.pos.x - bounds.left_limit < WALL_MARGIN {
        input.right = true;
    } else if bounds.right_limit - player.pos.x < WALL_MARGIN {
        input.left = true;
    }
    input
}

fn can_jump(session: &GameSession, obstacle: &Obstacle) -> bool {
    let player = session.player();
    obstacle.jump_allowed && (player.is_jumping() || !player.is_score_locked())
}
