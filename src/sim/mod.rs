//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call is one tick)
//! - Randomness only through an injected `rand::Rng`
//! - Obstacles kept in strictly increasing `x` order
//! - No rendering, persistence or platform dependencies

pub mod collision;
pub mod obstacles;
pub mod physics;
pub mod state;
pub mod tick;

pub use collision::{Aabb, Collision, Layout, avatar_bounds, check_collision, detect_collision};
pub use obstacles::{advance, maybe_retire, maybe_spawn, speed_for_score};
pub use physics::{apply_gravity, apply_impulse, integrate};
pub use state::{AvatarState, GameEvent, GamePhase, GameSession, Obstacle};
pub use tick::{TickInput, autopilot_should_flap, tick};
