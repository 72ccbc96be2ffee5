//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only advances through the `dt` passed to `tick`
//! - Seeded RNG only
//! - Stable iteration order (obstacles keep their slot)
//! - No rendering, audio or platform dependencies beyond the sink traits

pub mod collision;
pub mod difficulty;
pub mod obstacle;
pub mod player;
pub mod scenery;
pub mod state;
pub mod tick;
pub mod timer;

pub use collision::{CollisionOutcome, check_cleared, resolve};
pub use difficulty::Difficulty;
pub use obstacle::{Obstacle, ObstacleKind, SpawnRules};
pub use player::{Facing, Player, jump_pose};
pub use scenery::Scenery;
pub use state::{GameSession, SessionPhase};
pub use tick::{FrameInput, tick};
pub use timer::Timer;
