//! Entity spawners and particle emitters
//!
//! Every function draws from the session RNG, so spawns replay identically
//! for a given seed.

use std::f32::consts::TAU;

use glam::Vec2;
use rand::Rng;

use super::state::{Obstacle, Particle, PowerUp, PowerUpKind, Rgba};
use crate::consts::*;

/// Produce a fresh asteroid just above the top edge
pub fn spawn_obstacle(rng: &mut impl Rng) -> Obstacle {
    Obstacle {
        pos: Vec2::new(rng.random_range(0.0..WIDTH - 30.0), -30.0),
        size: rng.random_range(20.0..50.0),
        vertices: rng.random_range(5..8),
        irregularity: rng.random_range(0.2..0.5),
        rotation: rng.random_range(0.0..TAU),
        rotation_speed: rng.random_range(-0.05..0.05),
    }
}

/// Produce a power-up just above the top edge, kind chosen uniformly
pub fn spawn_power_up(rng: &mut impl Rng) -> PowerUp {
    let kind = match rng.random_range(0..3) {
        0 => PowerUpKind::Shield,
        1 => PowerUpKind::ExtraLife,
        _ => PowerUpKind::SlowDown,
    };
    PowerUp {
        pos: Vec2::new(rng.random_range(20.0..WIDTH - 20.0), -20.0),
        kind,
        rotation: 0.0,
        pulse_phase: rng.random_range(0.0..TAU),
    }
}

/// Radial particle burst for collisions and the game-over flash
pub fn explosion(rng: &mut impl Rng, pos: Vec2, color: Rgba, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let angle = rng.random_range(0.0..TAU);
            let speed = rng.random_range(1.0..3.0);
            Particle {
                pos,
                vel: Vec2::new(angle.cos(), angle.sin()) * speed,
                size: rng.random_range(3.0..8.0),
                color,
                life: 255.0,
                decay: rng.random_range(3.0..8.0),
            }
        })
        .collect()
}

/// Engine exhaust behind the ship, occasionally trailed by smoke
pub fn engine_exhaust(rng: &mut impl Rng, pos: Vec2, direction: f32) -> Vec<Particle> {
    let flame = Rgba::rgb(
        rng.random_range(200..=255),
        rng.random_range(100..=200),
        rng.random_range(0..=100),
    );
    let mut out = vec![Particle {
        pos,
        vel: Vec2::new(
            rng.random_range(-0.5..0.5) + direction * 0.5,
            rng.random_range(1.0..3.0),
        ),
        size: rng.random_range(2.0..5.0),
        color: flame,
        life: 100.0,
        decay: rng.random_range(3.0..8.0),
    }];

    if rng.random::<f32>() > 0.7 {
        out.push(Particle {
            pos: pos + Vec2::new(0.0, rng.random_range(5.0..10.0)),
            vel: Vec2::new(
                rng.random_range(-0.3..0.3) + direction * 0.2,
                rng.random_range(0.2..0.8),
            ),
            size: rng.random_range(2.0..4.0),
            color: Rgba::rgb(150, 150, 150),
            life: 60.0,
            decay: rng.random_range(2.0..4.0),
        });
    }
    out
}

/// Celebration burst scattered around the player on the winning tick
pub fn victory_celebration(rng: &mut impl Rng, player_pos: Vec2) -> Vec<Particle> {
    (0..100)
        .map(|_| {
            let angle = rng.random_range(0.0..TAU);
            let dist = rng.random_range(20.0..100.0);
            Particle {
                pos: player_pos + Vec2::new(angle.cos(), angle.sin()) * dist,
                vel: Vec2::new(
                    angle.cos() * rng.random_range(1.0..3.0),
                    // Slight upward bias so the burst lifts off the ship
                    angle.sin() * rng.random_range(1.0..3.0) - 1.0,
                ),
                size: rng.random_range(3.0..8.0),
                color: Rgba::rgb(
                    rng.random_range(100..=255),
                    rng.random_range(100..=255),
                    rng.random_range(100..=255),
                ),
                life: 255.0,
                decay: rng.random_range(1.0..3.0),
            }
        })
        .collect()
}
