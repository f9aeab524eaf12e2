//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one discrete tick per call)
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawn;
pub mod state;
pub mod tick;

pub use collision::{collects_power_up, hits_obstacle};
pub use spawn::{spawn_obstacle, spawn_power_up};
pub use state::{
    FloatingText, GamePhase, GameState, Obstacle, Particle, Player, PowerUp, PowerUpKind, Rgba,
    Snapshot,
};
pub use tick::{TickInput, tick};
