//! Game state and core simulation types
//!
//! Everything a renderer needs to draw a frame lives here.

use serde::{Deserialize, Serialize};

use super::collision::Collision;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended, state frozen until restart
    GameOver,
}

/// Vertical motion of the avatar. Horizontal position is fixed by settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AvatarState {
    /// Centre of the avatar (screen space, y grows downward)
    pub y: f32,
    /// Pixels per tick, positive = falling
    pub velocity: f32,
}

impl AvatarState {
    pub fn new(y: f32) -> Self {
        Self { y, velocity: 0.0 }
    }

    /// Top edge for an avatar of the given size
    #[inline]
    pub fn top(&self, size: f32) -> f32 {
        self.y - size / 2.0
    }

    /// Bottom edge for an avatar of the given size
    #[inline]
    pub fn bottom(&self, size: f32) -> f32 {
        self.y + size / 2.0
    }
}

/// A gated obstacle: a full-height column with one opening
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Leading (left) edge
    pub x: f32,
    /// Top edge of the gap
    pub gap_top: f32,
}

impl Obstacle {
    pub fn new(x: f32, gap_top: f32) -> Self {
        Self { x, gap_top }
    }

    /// Bottom edge of the gap
    #[inline]
    pub fn gap_bottom(&self, gap_height: f32) -> f32 {
        self.gap_top + gap_height
    }

    /// Vertical centre of the gap
    #[inline]
    pub fn gap_center(&self, gap_height: f32) -> f32 {
        self.gap_top + gap_height / 2.0
    }

    /// Right edge of the obstacle body
    #[inline]
    pub fn trailing_edge(&self, width: f32) -> f32 {
        self.x + width
    }
}

/// Notable things that happened during a tick, for audio and HUD collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A buffered impulse was applied to the avatar
    Flapped,
    /// A new obstacle joined the stream
    ObstacleSpawned { x: f32 },
    /// The leftmost obstacle was retired
    Scored { score: u32 },
    /// The run ended
    Crashed { cause: Collision },
    /// The run beat the persisted best score
    NewBest { score: u32 },
    /// A fresh session replaced a finished one
    Restarted,
}

/// One play session (serializable snapshot for renderers)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSession {
    /// Oldest (leftmost) first, strictly increasing `x`
    pub obstacles: Vec<Obstacle>,
    pub avatar: AvatarState,
    pub score: u32,
    /// Scroll speed used on the latest tick
    pub speed: f32,
    pub phase: GamePhase,
    /// Playing ticks simulated so far
    pub ticks: u64,
}

impl GameSession {
    /// Fresh session: avatar centred at rest, one obstacle at mid-screen
    pub fn new(settings: &Settings) -> Self {
        let seeded = Obstacle::new(
            settings.screen_width / 2.0,
            (settings.screen_height - settings.gap_height) / 2.0,
        );
        Self {
            obstacles: vec![seeded],
            avatar: AvatarState::new(settings.screen_height / 2.0),
            score: 0,
            speed: settings.base_speed,
            phase: GamePhase::Playing,
            ticks: 0,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Sprite frame for a flapping animation that flips every `ticks_per_frame` ticks
    pub fn avatar_frame(&self, ticks_per_frame: u64, frame_count: usize) -> usize {
        if ticks_per_frame == 0 || frame_count == 0 {
            return 0;
        }
        ((self.ticks / ticks_per_frame) % frame_count as u64) as usize
    }
}
