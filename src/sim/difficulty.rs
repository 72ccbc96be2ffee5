//! Level and scroll speed as a function of score

use serde::{Deserialize, Serialize};

use crate::settings::SpeedCurve;

/// Points needed per level with the default tuning
pub const POINTS_PER_LEVEL: u64 = 1000;

/// Current difficulty, recomputed from points every frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Difficulty {
    /// 1-based level
    pub level: u32,
    /// Pixels per frame that obstacles and scenery scroll up
    pub scroll_speed: f32,
}

impl Difficulty {
    /// `level = points / points_per_level + 1`, speed from the curve
    pub fn from_points(points: u64, points_per_level: u64, curve: SpeedCurve) -> Self {
        let level = (points / points_per_level.max(1)).saturating_add(1);
        let level = u32::try_from(level).unwrap_or(u32::MAX);
        Self {
            level,
            scroll_speed: curve.speed_for(level),
        }
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::from_points(0, POINTS_PER_LEVEL, SpeedCurve::default())
    }
}
