//! Property tests for the simulation invariants

use alpine_ski::{Settings, SpeedCurve};
use alpine_ski::audio::Silent;
use alpine_ski::sim::{
    Difficulty, FrameInput, GameSession, Obstacle, ObstacleKind, SessionPhase, SpawnRules, jump_pose, tick,
};
use glam::Vec2;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_pcg::Pcg32;

fn frame_input() -> impl Strategy<Value = FrameInput> {
    prop::array::uniform5(any::<bool>()).prop_map(|[left, right, up, down, jump]| FrameInput {
        left,
        right,
        up,
        down,
        jump,
        confirm: false,
    })
}

fn started(seed: u64) -> GameSession {
    let mut session = GameSession::new(Settings::default(), seed);
    let confirm = FrameInput {
        confirm: true,
        ..Default::default()
    };
    tick(&mut session, &confirm, 1.0 / 60.0, &mut Silent);
    session
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn lives_and_points_are_monotone(
        seed in any::<u64>(),
        frames in prop::collection::vec((frame_input(), 0.0f32..0.1), 1..400),
    ) {
        let mut session = started(seed);
        let mut lives = session.player().lives;
        let mut points = session.player().points;
        for (input, dt) in &frames {
            tick(&mut session, input, *dt, &mut Silent);
            let player = session.player();
            prop_assert!(player.lives <= lives);
            prop_assert!(player.points >= points);
            lives = player.lives;
            points = player.points;
            if lives == 0 {
                prop_assert_eq!(session.phase(), SessionPhase::GameOver);
            }
        }
    }

    #[test]
    fn timed_effects_stay_in_range(
        seed in any::<u64>(),
        frames in prop::collection::vec((frame_input(), 0.0f32..0.5), 1..300),
    ) {
        let mut session = started(seed);
        let bounds = *session.bounds();
        for (input, dt) in &frames {
            tick(&mut session, input, *dt, &mut Silent);
            let player = session.player();
            if player.is_invincible() {
                prop_assert!(player.invincible.elapsed >= 0.0);
                prop_assert!(player.invincible.elapsed < player.invincible.duration);
            }
            if player.is_score_locked() {
                prop_assert!(player.score_lock.elapsed < player.score_lock.duration);
            }
            if player.is_jumping() {
                prop_assert!(player.jump.elapsed < player.jump.duration);
            } else {
                prop_assert_eq!(player.scale, 1.0);
                prop_assert_eq!(player.angle, 0.0);
            }
            prop_assert!(player.pos.x >= bounds.left_limit && player.pos.x <= bounds.right_limit);
            prop_assert!(player.pos.y >= 0.0 && player.pos.y <= bounds.window_height - player.size.y);
        }
    }

    #[test]
    fn respawn_lands_below_window_in_lane(
        seed in any::<u64>(),
        y in -500.0f32..-60.01,
        speed in 0.0f32..10.0,
    ) {
        let settings = Settings::default();
        let rules = SpawnRules::from_settings(&settings);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut rock = Obstacle::spawn(ObstacleKind::Rock, Vec2::new(90.0, 60.0), &rules, &mut rng);
        rock.pos.y = y;
        rock.cleared = true;
        prop_assert!(rock.advance(speed, &rules, &mut rng));
        prop_assert!(!rock.cleared);
        prop_assert!(rock.pos.y >= 750.0 && rock.pos.y <= 1500.0);
        prop_assert_eq!(rock.pos.y.fract(), 0.0);
        prop_assert!(rock.pos.x >= 200.0 && rock.pos.x <= 1100.0);
    }

    #[test]
    fn difficulty_matches_formula(points in 0u64..10_000_000) {
        let d = Difficulty::from_points(points, 1000, SpeedCurve::LevelPlusOne);
        prop_assert_eq!(d.level as u64, points / 1000 + 1);
        prop_assert_eq!(d.scroll_speed, d.level as f32 + 1.0);
    }

    #[test]
    fn jump_pose_stays_bounded(t in 0.0f32..=1.0) {
        let (scale, angle) = jump_pose(t);
        prop_assert!((1.0..=2.0).contains(&scale));
        prop_assert!((0.0..=360.0).contains(&angle));
    }
}
