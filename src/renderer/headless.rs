//! Renderer without a display
//!
//! Counts draw calls and remembers the last HUD/screen; used by the native
//! runner and tests.

use glam::Vec2;

use super::{Hud, Renderer, Screen, Sprite};
use crate::Bounds;

#[derive(Debug, Clone)]
pub struct HeadlessRenderer {
    bounds: Bounds,
    /// Plain sprite draws since `begin_frame`
    pub sprites_drawn: u32,
    /// Rotated/zoomed sprite draws since `begin_frame`
    pub transformed_drawn: u32,
    pub last_hud: Option<Hud>,
    pub last_screen: Option<Screen>,
    /// Frames started
    pub frames: u64,
}

impl HeadlessRenderer {
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            sprites_drawn: 0,
            transformed_drawn: 0,
            last_hud: None,
            last_screen: None,
            frames: 0,
        }
    }

    /// Reset per-frame counters
    pub fn begin_frame(&mut self) {
        self.frames += 1;
        self.sprites_drawn = 0;
        self.transformed_drawn = 0;
        self.last_screen = None;
    }
}

impl Renderer for HeadlessRenderer {
    fn bounds(&self) -> Bounds {
        self.bounds
    }

    fn draw_sprite(&mut self, _sprite: Sprite, _pos: Vec2) {
        self.sprites_drawn += 1;
    }

    fn draw_sprite_transformed(&mut self, _sprite: Sprite, _pos: Vec2, _scale: f32, _angle: f32) {
        self.transformed_drawn += 1;
    }

    fn draw_hud(&mut self, hud: &Hud) {
        self.last_hud = Some(*hud);
    }

    fn draw_screen(&mut self, screen: Screen) {
        self.last_screen = Some(screen);
    }
}
