//! Collision predicates
//!
//! Circular-distance tests only. Asteroid silhouettes are irregular polygons,
//! but an enclosing-circle check is cheap and good enough for arcade feel.

use glam::Vec2;

use super::state::{Obstacle, PowerUp};
use crate::consts::{PLAYER_RADIUS, POWER_UP_COLLECT_RADIUS};
use crate::distance;

/// True iff the player ship overlaps the asteroid's enclosing circle
pub fn hits_obstacle(player_pos: Vec2, obstacle: &Obstacle) -> bool {
    distance(player_pos, obstacle.center()) < obstacle.size / 2.0 + PLAYER_RADIUS
}

/// True iff the player ship is close enough to collect the power-up
pub fn collects_power_up(player_pos: Vec2, power_up: &PowerUp) -> bool {
    distance(player_pos, power_up.pos) < POWER_UP_COLLECT_RADIUS
}
