//! Decorative tree borders on both sides of the piste
//!
//! Four columns of trees per side, scrolling up at the obstacle speed so the
//! slope appears to move.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Columns of border trees on each side
pub const BORDER_COLUMNS: usize = 4;
/// Horizontal nudge so the outer trees are partly cut off
pub const BORDER_ALIGNMENT: f32 = -10.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scenery {
    /// Vertical scroll offset in `(0, spacing]`
    pub offset: f32,
    spacing: f32,
    window_width: f32,
    rows: i32,
}

impl Scenery {
    pub fn new(window_width: f32, window_height: f32, spacing: f32) -> Self {
        Self {
            offset: spacing,
            spacing,
            window_width,
            rows: (window_height / spacing).floor() as i32,
        }
    }

    /// Scroll up by `speed` pixels, wrapping every row
    pub fn advance(&mut self, speed: f32) {
        self.offset -= speed;
        while self.offset <= 0.0 {
            self.offset += self.spacing;
        }
    }

    /// Top-left positions of all border trees, row by row
    pub fn positions(&self) -> impl Iterator<Item = Vec2> + '_ {
        let columns: [f32; 2 * BORDER_COLUMNS] = std::array::from_fn(|i| {
            if i < BORDER_COLUMNS {
                BORDER_ALIGNMENT + i as f32 * self.spacing
            } else {
                self.window_width - (2 * BORDER_COLUMNS - i) as f32 * self.spacing + BORDER_ALIGNMENT
            }
        });

        (-1..self.rows).flat_map(move |row| {
            let y = row as f32 * self.spacing + self.offset;
            columns.into_iter().map(move |x| Vec2::new(x, y))
        })
    }
}
