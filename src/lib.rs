//! Cosmic Dodge - a single-screen asteroid-dodging arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (spawning, collisions, power-up effects, game state)
//!
//! Rendering and input polling are external collaborators: the simulation
//! consumes discrete [`sim::TickInput`] intents once per tick and exposes a
//! read-only [`sim::Snapshot`] for a renderer to draw.

pub mod sim;

pub use sim::{GamePhase, GameState, Snapshot, TickInput, tick};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Playfield dimensions in pixels
    pub const WIDTH: f32 = 400.0;
    pub const HEIGHT: f32 = 400.0;

    /// Reaching this difficulty level wins the game
    pub const MAX_LEVEL: u32 = 30;
    /// Obstacles kept in play at all times
    pub const INITIAL_OBSTACLES: usize = 5;
    /// Starting lives
    pub const INITIAL_LIVES: u32 = 3;
    /// Hard cap on lives from ExtraLife power-ups
    pub const MAX_LIVES: u32 = 5;
    /// Starting fall speed (pixels per tick)
    pub const INITIAL_SPEED: f32 = 2.0;
    /// SlowDown can never drop the fall speed below this
    pub const MIN_SPEED: f32 = 1.0;

    /// Shield duration in ticks (5 seconds at 60 Hz)
    pub const SHIELD_DURATION_TICKS: u32 = 300;
    /// Per-tick probability of spawning a power-up
    pub const POWER_UP_SPAWN_CHANCE: f64 = 0.01;
    /// Power-ups fall slower than obstacles
    pub const POWER_UP_FALL_FACTOR: f32 = 0.7;
    /// Power-up spin per tick (radians)
    pub const POWER_UP_SPIN: f32 = 0.03;

    /// Collision radius of the player ship
    pub const PLAYER_RADIUS: f32 = 10.0;
    /// Collection radius for power-ups
    pub const POWER_UP_COLLECT_RADIUS: f32 = 15.0;
    /// Horizontal step per held movement intent (pixels per tick)
    pub const PLAYER_STEP: f32 = 3.0;
    /// Above this score the ship gains an extra pixel of step
    pub const PLAYER_BOOST_SCORE: u32 = 30;

    /// Floating text lifetime in ticks
    pub const FLOATING_TEXT_LIFE: u32 = 60;
    /// Maximum live particles; the oldest is dropped beyond this
    pub const MAX_PARTICLES: usize = 512;
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    (a - b).length()
}
