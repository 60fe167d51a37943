//! Flappy Gates - a one-button gate-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, obstacle stream, collisions, tick)
//! - `game`: Session owner driven by the frame scheduler and input source
//! - `persistence`: Best-score storage backends
//! - `settings`: Data-driven game tuning and validation
//!
//! Rendering, audio and input wiring live outside this crate. They read
//! [`Game::session`] once per frame and call [`Game::tick`] / [`Game::impulse`].

pub mod error;
pub mod game;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use error::{ConfigError, StoreError};
pub use game::Game;
pub use persistence::{BestScoreStore, MemoryStore};
pub use settings::{Settings, SpeedPreset};

/// Default game tuning constants
pub mod consts {
    /// Logical screen size
    pub const SCREEN_WIDTH: f32 = 400.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Downward acceleration added to velocity every tick
    pub const GRAVITY: f32 = 0.5;
    /// Velocity set by a flap (negative = upward)
    pub const FLAP_VELOCITY: f32 = -8.0;

    /// Avatar is a square of this side, pinned at `AVATAR_X`
    pub const AVATAR_SIZE: f32 = 30.0;
    pub const AVATAR_X: f32 = 80.0;

    /// Obstacle geometry
    pub const OBSTACLE_WIDTH: f32 = 60.0;
    pub const GAP_HEIGHT: f32 = 150.0;
    /// Horizontal distance between consecutive obstacles
    pub const OBSTACLE_SPACING: f32 = 200.0;
    /// Closest a gap may come to the ceiling or ground
    pub const GAP_MIN_MARGIN: f32 = 50.0;

    /// Scroll speed: base + min(score * accel, cap)
    pub const BASE_SPEED: f32 = 2.0;
    pub const TOUCH_BASE_SPEED: f32 = 1.6;
    pub const SPEED_ACCEL: f32 = 0.05;
    pub const SPEED_CAP: f32 = 1.5;
}
