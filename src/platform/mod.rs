//! Platform abstraction layer
//!
//! Everything between the outside world and the simulation:
//! - Input snapshots (`InputSource`)
//! - Frame timing (`FrameClock`)
//! - The demo autopilot that plays without a keyboard

pub mod autopilot;
pub mod clock;
pub mod input;

pub use autopilot::autopilot;
pub use clock::FrameClock;
pub use input::{InputSource, ScriptedInput};
