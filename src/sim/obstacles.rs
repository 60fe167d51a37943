//! Obstacle stream: scroll, spawn and retire gated obstacles
//!
//! The stream is a plain `Vec<Obstacle>` ordered leftmost first. New obstacles
//! are only ever pushed to the back at `rightmost + spacing` and only the front
//! is ever removed, so strict `x` ordering holds as long as every obstacle moves
//! by the same amount each tick.

use rand::Rng;

use super::state::Obstacle;
use crate::settings::Settings;

/// Scroll every obstacle left by `speed`
pub fn advance(obstacles: &mut [Obstacle], speed: f32) {
    for obstacle in obstacles.iter_mut() {
        obstacle.x -= speed;
    }
}

/// Append a new obstacle if the stream is empty or the rightmost one has
/// scrolled at least `spacing` in from the right edge.
///
/// Returns the spawned obstacle, if any.
pub fn maybe_spawn<R: Rng + ?Sized>(
    obstacles: &mut Vec<Obstacle>,
    settings: &Settings,
    rng: &mut R,
) -> Option<Obstacle> {
    let x = match obstacles.last() {
        None => settings.screen_width,
        Some(last) if last.x < settings.screen_width - settings.spacing => {
            last.x + settings.spacing
        }
        Some(_) => return None,
    };

    let obstacle = Obstacle::new(x, random_gap_top(settings, rng));
    obstacles.push(obstacle);
    log::debug!("Spawned obstacle at x={:.1} gap_top={:.1}", obstacle.x, obstacle.gap_top);
    Some(obstacle)
}

/// Remove the leftmost obstacle once its trailing edge is past x = 0.
///
/// Returns true when an obstacle was retired (one scoring event).
pub fn maybe_retire(obstacles: &mut Vec<Obstacle>, obstacle_width: f32) -> bool {
    match obstacles.first() {
        Some(first) if first.trailing_edge(obstacle_width) < 0.0 => {
            obstacles.remove(0);
            true
        }
        _ => false,
    }
}

/// Scroll speed for a given score: `base + min(score * accel, cap)`
pub fn speed_for_score(score: u32, settings: &Settings) -> f32 {
    settings.base_speed + (score as f32 * settings.speed_accel).min(settings.speed_cap)
}

/// Uniform draw from `[gap_top_min, gap_top_max]`
fn random_gap_top<R: Rng + ?Sized>(settings: &Settings, rng: &mut R) -> f32 {
    let lo = settings.gap_top_min();
    let hi = settings.gap_top_max();
    if hi <= lo {
        return lo;
    }
    rng.random_range(lo..=hi)
}
