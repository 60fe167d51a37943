//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session by one step.

use rand::Rng;

use super::collision::{Layout, detect_collision};
use super::obstacles::{advance, maybe_retire, maybe_spawn, speed_for_score};
use super::physics::integrate;
use super::state::{GameEvent, GamePhase, GameSession};
use crate::settings::Settings;

/// How far below the gap centre the autopilot lets the avatar sink before flapping
const AUTOPILOT_SLACK: f32 = 20.0;

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Apply the flap impulse this tick
    pub impulse: bool,
}

/// Advance the session by one tick.
///
/// Order: speed, avatar, scroll, spawn, retire, collision. A finished session
/// is left untouched.
pub fn tick<R: Rng + ?Sized>(
    session: &mut GameSession,
    settings: &Settings,
    input: &TickInput,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if session.phase == GamePhase::GameOver {
        return events;
    }

    session.ticks += 1;
    session.speed = speed_for_score(session.score, settings);

    let impulse = input.impulse.then_some(settings.flap_velocity);
    integrate(&mut session.avatar, settings.gravity, impulse);
    if impulse.is_some() {
        events.push(GameEvent::Flapped);
    }

    advance(&mut session.obstacles, session.speed);

    if let Some(spawned) = maybe_spawn(&mut session.obstacles, settings, rng) {
        events.push(GameEvent::ObstacleSpawned { x: spawned.x });
    }

    if maybe_retire(&mut session.obstacles, settings.obstacle_width) {
        session.score += 1;
        log::debug!("Obstacle cleared, score {}", session.score);
        events.push(GameEvent::Scored {
            score: session.score,
        });
    }

    if let Some(cause) = detect_collision(
        session.avatar.y,
        settings.avatar_size,
        &session.obstacles,
        settings.screen_height,
        &Layout::from(settings),
    ) {
        session.phase = GamePhase::GameOver;
        log::info!(
            "Crashed ({:?}) after {} ticks with score {}",
            cause,
            session.ticks,
            session.score
        );
        events.push(GameEvent::Crashed { cause });
    }

    events
}

/// Demo input policy: flap when sinking below the next gap's centre.
///
/// The target is the first obstacle whose trailing edge is still ahead of the
/// avatar's left edge; with no such obstacle the avatar holds mid-screen.
pub fn autopilot_should_flap(session: &GameSession, settings: &Settings) -> bool {
    if session.phase != GamePhase::Playing {
        return false;
    }

    let avatar_left = settings.avatar_x - settings.avatar_size / 2.0;
    let target_y = session
        .obstacles
        .iter()
        .find(|o| o.trailing_edge(settings.obstacle_width) > avatar_left)
        .map(|o| o.gap_center(settings.gap_height))
        .unwrap_or(settings.screen_height / 2.0);

    session.avatar.velocity >= 0.0 && session.avatar.y > target_y + AUTOPILOT_SLACK
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::collision::Collision;
    use crate::sim::state::{AvatarState, Obstacle};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn flap() -> TickInput {
        TickInput { impulse: true }
    }

    /// Settings whose only legal gap is centred on the screen
    fn centred_gaps() -> Settings {
        Settings {
            min_margin: 225.0,
            ..Default::default()
        }
    }

    #[test]
    fn test_tick_applies_gravity() {
        let settings = Settings::default();
        let mut session = GameSession::new(&settings);
        let mut rng = Pcg32::seed_from_u64(1);

        let before = session.avatar;
        tick(&mut session, &settings, &TickInput::default(), &mut rng);
        assert_eq!(session.avatar.velocity, before.velocity + settings.gravity);
        assert_eq!(session.avatar.y, before.y + session.avatar.velocity);
        assert_eq!(session.ticks, 1);
    }

    #[test]
    fn test_tick_applies_impulse() {
        let settings = Settings::default();
        let mut session = GameSession::new(&settings);
        let mut rng = Pcg32::seed_from_u64(1);

        session.avatar.velocity = 6.0;
        let y = session.avatar.y;
        let events = tick(&mut session, &settings, &flap(), &mut rng);
        let expected = settings.flap_velocity + settings.gravity;
        assert_eq!(session.avatar.velocity, expected);
        assert_eq!(session.avatar.y, y + expected);
        assert!(events.contains(&GameEvent::Flapped));
    }

    #[test]
    fn test_seeded_obstacle_retires_on_predicted_tick() {
        let settings = Settings {
            speed_accel: 0.0,
            ..centred_gaps()
        };
        let mut session = GameSession::new(&settings);
        let mut rng = Pcg32::seed_from_u64(21);

        // trailing edge 200 + 60 = 260 at 2 px/tick: exactly 0 after 130 ticks,
        // strictly below 0 after 131
        let seeded = session.obstacles[0];
        assert_eq!(seeded.trailing_edge(settings.obstacle_width), 260.0);
        let expected_tick = 131;

        for t in 1..=expected_tick {
            let input = TickInput {
                impulse: autopilot_should_flap(&session, &settings),
            };
            let events = tick(&mut session, &settings, &input, &mut rng);
            assert_eq!(session.phase, GamePhase::Playing, "crashed on tick {t}");

            if t < expected_tick {
                assert_eq!(session.score, 0, "scored early on tick {t}");
                assert_eq!(session.obstacles[0].gap_top, seeded.gap_top);
                assert_eq!(session.obstacles[0].x, seeded.x - 2.0 * t as f32);
            } else {
                assert_eq!(session.score, 1);
                assert!(events.contains(&GameEvent::Scored { score: 1 }));
                // the obstacle spawned on tick 1 at 398 is now in front
                assert_eq!(session.obstacles[0].x, 398.0 - 2.0 * 130.0);
            }
        }
    }

    #[test]
    fn test_tick_scrolls_and_spawns() {
        let settings = Settings::default();
        let mut session = GameSession::new(&settings);
        let mut rng = Pcg32::seed_from_u64(1);

        // seeded obstacle at 200 moves to 198, which is < 400 - 200
        let events = tick(&mut session, &settings, &flap(), &mut rng);
        assert_eq!(session.obstacles.len(), 2);
        assert_eq!(session.obstacles[0].x, 198.0);
        assert_eq!(session.obstacles[1].x, 398.0);
        assert!(events.contains(&GameEvent::ObstacleSpawned { x: 398.0 }));
    }

    #[test]
    fn test_retirement_scores_one_point() {
        let settings = centred_gaps();
        let mut session = GameSession::new(&settings);
        let mut rng = Pcg32::seed_from_u64(1);
        session.obstacles = vec![Obstacle::new(-59.0, 225.0), Obstacle::new(141.0, 225.0)];
        session.avatar = AvatarState::new(300.0);

        let events = tick(&mut session, &settings, &flap(), &mut rng);
        assert_eq!(session.score, 1);
        assert!(events.contains(&GameEvent::Scored { score: 1 }));
        assert_eq!(session.obstacles[0].x, 139.0);
        assert_eq!(session.phase, GamePhase::Playing);
    }

    #[test]
    fn test_falling_to_ground_ends_game() {
        let settings = Settings::default();
        let mut session = GameSession::new(&settings);
        let mut rng = Pcg32::seed_from_u64(3);
        session.obstacles.clear();

        let mut crash = None;
        for _ in 0..200 {
            let events = tick(&mut session, &settings, &TickInput::default(), &mut rng);
            if let Some(GameEvent::Crashed { cause }) = events.last() {
                crash = Some(*cause);
                break;
            }
        }
        assert_eq!(crash, Some(Collision::Ground));
        assert_eq!(session.phase, GamePhase::GameOver);
    }

    #[test]
    fn test_game_over_freezes_state() {
        let settings = Settings::default();
        let mut session = GameSession::new(&settings);
        let mut rng = Pcg32::seed_from_u64(3);
        session.phase = GamePhase::GameOver;

        let frozen = session.clone();
        for _ in 0..10 {
            assert!(tick(&mut session, &settings, &flap(), &mut rng).is_empty());
        }
        assert_eq!(session, frozen);
    }

    #[test]
    fn test_score_never_decreases() {
        let settings = centred_gaps();
        let mut session = GameSession::new(&settings);
        let mut rng = Pcg32::seed_from_u64(11);

        let mut last_score = 0;
        let mut last_speed = session.speed;
        while session.phase == GamePhase::Playing && session.ticks < 5_000 {
            let input = TickInput {
                impulse: autopilot_should_flap(&session, &settings),
            };
            tick(&mut session, &settings, &input, &mut rng);
            assert!(session.score >= last_score);
            assert!(session.score - last_score <= 1);
            assert!(session.speed >= last_speed);
            assert!(session.speed <= settings.max_speed());
            last_score = session.score;
            last_speed = session.speed;
        }
    }

    #[test]
    fn test_autopilot_clears_centred_gaps() {
        let settings = centred_gaps();
        let mut session = GameSession::new(&settings);
        let mut rng = Pcg32::seed_from_u64(5);

        for _ in 0..1_000 {
            let input = TickInput {
                impulse: autopilot_should_flap(&session, &settings),
            };
            tick(&mut session, &settings, &input, &mut rng);
        }
        assert_eq!(session.phase, GamePhase::Playing);
        assert!(session.score >= 5, "score was {}", session.score);
    }

    #[test]
    fn test_autopilot_idle_when_rising_or_over() {
        let settings = Settings::default();
        let mut session = GameSession::new(&settings);
        session.avatar = AvatarState {
            y: 500.0,
            velocity: -3.0,
        };
        assert!(!autopilot_should_flap(&session, &settings));

        session.avatar.velocity = 1.0;
        assert!(autopilot_should_flap(&session, &settings));

        session.phase = GamePhase::GameOver;
        assert!(!autopilot_should_flap(&session, &settings));
    }
}
