//! Per-frame input snapshots

use std::collections::VecDeque;

use crate::sim::FrameInput;

/// Anything that can be sampled once per frame for the player's intents
pub trait InputSource {
    fn poll(&mut self) -> FrameInput;
}

impl<F> InputSource for F
where
    F: FnMut() -> FrameInput,
{
    fn poll(&mut self) -> FrameInput {
        self()
    }
}

/// Replays a fixed list of snapshots, then reports nothing held
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Queue `input` for the next `count` frames
    pub fn hold(mut self, input: FrameInput, count: usize) -> Self {
        self.frames.extend(std::iter::repeat_n(input, count));
        self
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> FrameInput {
        self.frames.pop_front().unwrap_or_default()
    }
}
