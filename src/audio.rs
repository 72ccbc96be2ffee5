//! Sound cues emitted by the simulation
//!
//! The simulation never waits on audio: cues are fire-and-forget and a sink
//! that drops them is always valid.

use serde::{Deserialize, Serialize};

/// Sound effect cues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundCue {
    /// Obstacle or lane limit hit, lives remain
    Hit,
    /// Last life lost
    Killed,
    /// Clear bonus awarded
    Cleared,
    /// Jump bonus awarded
    Jumped,
}

/// Background music control
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Music {
    /// First start from the title screen (loops)
    Play,
    /// Game over
    Pause,
    /// Restart after game over
    Resume,
}

/// Receiver of sound cues
pub trait SoundSink {
    fn play(&mut self, cue: SoundCue);

    fn music(&mut self, _command: Music) {}
}

/// Drops everything
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl SoundSink for Silent {
    fn play(&mut self, _cue: SoundCue) {}
}

/// Logs cues instead of playing them; used by the headless runner
#[derive(Debug, Clone, Default)]
pub struct AudioLog {
    muted: bool,
    /// Cues received so far, in order of `SoundCue` variants
    counts: [u64; 4],
}

impl AudioLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mute/unmute; muted cues are still counted
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn count(&self, cue: SoundCue) -> u64 {
        self.counts[Self::slot(cue)]
    }

    fn slot(cue: SoundCue) -> usize {
        match cue {
            SoundCue::Hit => 0,
            SoundCue::Killed => 1,
            SoundCue::Cleared => 2,
            SoundCue::Jumped => 3,
        }
    }
}

impl SoundSink for AudioLog {
    fn play(&mut self, cue: SoundCue) {
        self.counts[Self::slot(cue)] += 1;
        if !self.muted {
            log::debug!("sound: {:?}", cue);
        }
    }

    fn music(&mut self, command: Music) {
        if !self.muted {
            log::debug!("music: {:?}", command);
        }
    }
}

/// Keeps every cue in order; handy for asserting on gameplay
#[derive(Debug, Clone, Default)]
pub struct CueRecorder {
    pub cues: Vec<SoundCue>,
    pub music: Vec<Music>,
}

impl SoundSink for CueRecorder {
    fn play(&mut self, cue: SoundCue) {
        self.cues.push(cue);
    }

    fn music(&mut self, command: Music) {
        self.music.push(command);
    }
}
