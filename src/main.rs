//! Alpine Ski entry point
//!
//! Runs the simulation headless with the autopilot at the fixed frame rate
//! and logs what happens. Usage: `alpine-ski [frames] [settings.json]`.

use std::path::Path;

use alpine_ski::Settings;
use alpine_ski::audio::{AudioLog, SoundCue};
use alpine_ski::platform::{FrameClock, autopilot};
use alpine_ski::renderer::{HeadlessRenderer, Renderer, draw_frame};
use alpine_ski::sim::{GameSession, SessionPhase, tick};

/// One minute of play at 60 Hz
const DEFAULT_FRAMES: u64 = 3600;

fn main() {
    env_logger::init();
    log::info!("Alpine Ski (headless) starting...");

    let mut args = std::env::args().skip(1);
    let frames = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            log::warn!("Invalid frame count {:?}, using {}", arg, DEFAULT_FRAMES);
            DEFAULT_FRAMES
        }),
        None => DEFAULT_FRAMES,
    };
    let settings = match args.next() {
        Some(path) => Settings::load(Path::new(&path)),
        None => Settings::default(),
    };

    let seed = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    log::info!(
        "Running {} frames at {} fps ({} speed curve)",
        frames,
        settings.target_fps,
        settings.speed_curve.as_str()
    );

    let mut renderer = HeadlessRenderer::new(settings.bounds());
    let mut clock = FrameClock::from_settings(&settings);
    let mut sound = AudioLog::new();
    let mut session = GameSession::with_bounds(settings, renderer.bounds(), seed);
    let dt = clock.step();

    let mut games = 0u32;
    let mut best = 0u64;
    let mut simulated = 0u64;
    while simulated < frames {
        // Pretend the display delivers exactly one frame's worth of time
        for _ in 0..clock.advance(dt) {
            let input = autopilot(&session);
            let was = session.phase();
            tick(&mut session, &input, dt, &mut sound);
            if was == SessionPhase::Running && session.phase() == SessionPhase::GameOver {
                games += 1;
                best = best.max(session.player().points);
            }
            simulated += 1;
        }
        renderer.begin_frame();
        draw_frame(&session, &mut renderer);
    }

    best = best.max(session.player().points);
    log::info!(
        "Simulated {} frames (seed {}): {} games over, best {} points, level {}",
        simulated,
        session.seed(),
        games,
        best,
        session.level()
    );
    log::info!(
        "Cues: {} hits, {} kills, {} clears, {} jumps",
        sound.count(SoundCue::Hit),
        sound.count(SoundCue::Killed),
        sound.count(SoundCue::Cleared),
        sound.count(SoundCue::Jumped)
    );
    println!("best score: {} ({} frames rendered)", best, renderer.frames);
}
