//! Per-frame simulation step
//!
//! One call advances the session by one frame. Nothing in here blocks or
//! schedules work: timers advance by the `dt` handed in.

use serde::{Deserialize, Serialize};

use super::collision::{CollisionOutcome, check_cleared, resolve};
use super::state::{GameSession, SessionPhase};
use crate::audio::{Music, SoundCue, SoundSink};

/// Input intents for a single frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub jump: bool,
    /// Start / restart
    pub confirm: bool,
}

/// Advance the session by one frame of `dt` seconds
pub fn tick(session: &mut GameSession, input: &FrameInput, dt: f32, sound: &mut dyn SoundSink) {
    let dt = dt.max(0.0);

    match session.phase {
        SessionPhase::NotStarted => {
            if input.confirm {
                session.phase = SessionPhase::Running;
                session.refresh_difficulty();
                sound.music(Music::Play);
                log::info!("Run started");
            }
        }
        SessionPhase::GameOver => {
            session.refresh_difficulty();
            if input.confirm {
                session.restart();
                session.phase = SessionPhase::Running;
                sound.music(Music::Resume);
                log::info!("Run restarted");
            }
        }
        SessionPhase::Running => run_frame(session, input, dt, sound),
    }
}

fn run_frame(session: &mut GameSession, input: &FrameInput, dt: f32, sound: &mut dyn SoundSink) {
    session.frames += 1;

    let bounds = session.bounds;
    let speed = session.difficulty.scroll_speed;

    session.player.apply_input(input, dt, &bounds);
    session.player.tick(dt);

    let player = &mut session.player;
    for obstacle in session.obstacles.iter_mut() {
        obstacle.update_hitbox();

        match resolve(player, obstacle, &bounds) {
            CollisionOutcome::Jumped => {
                player.on_obstacle_jumped();
                sound.play(SoundCue::Jumped);
                log::debug!("Jumped {:?} (+bonus, points {})", obstacle.kind, player.points);
            }
            CollisionOutcome::Hit => {
                player.on_obstacle_hit();
                if player.lives == 0 {
                    sound.play(SoundCue::Killed);
                } else {
                    sound.play(SoundCue::Hit);
                }
                log::debug!("Hit {:?} ({} lives left)", obstacle.kind, player.lives);
            }
            CollisionOutcome::None => {}
        }

        if check_cleared(player, obstacle) {
            obstacle.set_cleared();
            // No clear bonus during the grace period or right after a jump bonus
            if !player.is_invincible() && !player.is_score_locked() {
                player.on_obstacle_cleared();
                sound.play(SoundCue::Cleared);
                log::debug!("Cleared {:?} (points {})", obstacle.kind, player.points);
            }
        }

        obstacle.advance(speed, &session.spawn, &mut session.rng);
    }

    session.scenery.advance(speed);
    session.refresh_difficulty();

    if session.player.lives == 0 {
        session.phase = SessionPhase::GameOver;
        sound.music(Music::Pause);
        log::info!(
            "Game over at level {} with {} points",
            session.difficulty.level,
            session.player.points
        );
    }
}
