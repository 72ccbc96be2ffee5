//! Rendering contract
//!
//! The simulation does not know how pixels get on screen. Each frame it
//! describes what to draw through the `Renderer` trait; a renderer that draws
//! nothing is valid.

pub mod headless;

pub use headless::HeadlessRenderer;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::Bounds;
use crate::sim::{Facing, GameSession, ObstacleKind, SessionPhase};

/// Image handles the simulation refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sprite {
    Skier(Facing),
    Rock,
    Tree,
}

impl From<ObstacleKind> for Sprite {
    fn from(kind: ObstacleKind) -> Self {
        match kind {
            ObstacleKind::Rock => Sprite::Rock,
            ObstacleKind::Tree => Sprite::Tree,
        }
    }
}

/// Status line shown during play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub level: u32,
    pub lives: u32,
    pub points: u64,
}

/// Full-screen states outside of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Screen {
    Title,
    GameOver { level: u32, points: u64 },
}

/// Presentation layer driven by the simulation
pub trait Renderer {
    /// Window size and lane limits
    fn bounds(&self) -> Bounds;

    /// Draw `sprite` with its top-left corner at `pos`
    fn draw_sprite(&mut self, sprite: Sprite, pos: Vec2);

    /// Draw `sprite` zoomed by `scale` and rotated by `angle` degrees
    /// around its centre; `pos` is the untransformed top-left corner
    fn draw_sprite_transformed(&mut self, sprite: Sprite, pos: Vec2, _scale: f32, _angle: f32) {
        self.draw_sprite(sprite, pos);
    }

    fn draw_hud(&mut self, _hud: &Hud) {}

    fn draw_screen(&mut self, _screen: Screen) {}
}

/// Emit the draw calls for the session's current state (read-only)
pub fn draw_frame(session: &GameSession, renderer: &mut dyn Renderer) {
    let player = session.player();
    match session.phase() {
        SessionPhase::NotStarted => renderer.draw_screen(Screen::Title),
        SessionPhase::GameOver => renderer.draw_screen(Screen::GameOver {
            level: session.level(),
            points: player.points,
        }),
        SessionPhase::Running => {
            let window_height = session.bounds().window_height;
            for obstacle in session.obstacles() {
                if obstacle.is_visible(window_height) {
                    renderer.draw_sprite(obstacle.kind.into(), obstacle.pos);
                }
            }

            if player.is_visible() {
                let sprite = Sprite::Skier(player.facing);
                if player.is_jumping() {
                    renderer.draw_sprite_transformed(sprite, player.pos, player.scale, player.angle);
                } else {
                    renderer.draw_sprite(sprite, player.pos);
                }
            }

            renderer.draw_hud(&Hud {
                level: session.level(),
                lives: player.lives,
                points: player.points,
            });

            for pos in session.scenery().positions() {
                renderer.draw_sprite(Sprite::Tree, pos);
            }
        }
    }
}
