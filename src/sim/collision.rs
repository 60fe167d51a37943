//! Collision detection against obstacles and screen bounds
//!
//! The avatar is a square of side `avatar_size` centred on `(avatar_x, y)`.
//! Obstacles are full-height columns with one gap; the avatar is safe inside a
//! column only when its whole vertical extent sits inside the gap.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Obstacle;
use crate::settings::Settings;

/// What the avatar ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    /// Bottom edge went below the screen
    Ground,
    /// Top edge went above the screen
    Ceiling,
    /// Hit the body of the obstacle at this index in the stream
    Obstacle { index: usize },
}

/// Horizontal layout shared by the avatar and every obstacle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    pub avatar_x: f32,
    pub obstacle_width: f32,
    pub gap_height: f32,
}

impl From<&Settings> for Layout {
    fn from(settings: &Settings) -> Self {
        Self {
            avatar_x: settings.avatar_x,
            obstacle_width: settings.obstacle_width,
            gap_height: settings.gap_height,
        }
    }
}

/// Axis-aligned box, `min` is the top-left corner (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn from_center(center: Vec2, size: f32) -> Self {
        let half = Vec2::splat(size / 2.0);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Open-interval overlap on x: touching edges do not count
    #[inline]
    pub fn overlaps_x(&self, left: f32, right: f32) -> bool {
        self.max.x > left && self.min.x < right
    }

    /// Whole vertical extent lies within `[top, bottom]`
    #[inline]
    pub fn within_y(&self, top: f32, bottom: f32) -> bool {
        self.min.y >= top && self.max.y <= bottom
    }
}

/// Bounding box of the avatar at height `y`
pub fn avatar_bounds(y: f32, avatar_size: f32, avatar_x: f32) -> Aabb {
    Aabb::from_center(Vec2::new(avatar_x, y), avatar_size)
}

/// Report the first collision, bounds checked before obstacles
pub fn detect_collision(
    avatar_y: f32,
    avatar_size: f32,
    obstacles: &[Obstacle],
    screen_height: f32,
    layout: &Layout,
) -> Option<Collision> {
    let avatar = avatar_bounds(avatar_y, avatar_size, layout.avatar_x);

    if avatar.max.y > screen_height {
        return Some(Collision::Ground);
    }
    if avatar.min.y < 0.0 {
        return Some(Collision::Ceiling);
    }

    obstacles
        .iter()
        .position(|o| {
            avatar.overlaps_x(o.x, o.trailing_edge(layout.obstacle_width))
                && !avatar.within_y(o.gap_top, o.gap_bottom(layout.gap_height))
        })
        .map(|index| Collision::Obstacle { index })
}

/// True if the avatar is out of bounds or clipping an obstacle
pub fn check_collision(
    avatar_y: f32,
    avatar_size: f32,
    obstacles: &[Obstacle],
    screen_height: f32,
    layout: &Layout,
) -> bool {
    detect_collision(avatar_y, avatar_size, obstacles, screen_height, layout).is_some()
}
