//! Per-tick simulation step
//!
//! Advances the game by exactly one discrete step. The update order within
//! Playing is fixed: obstacles, power-ups, movement, stochastic spawns,
//! floating texts, particles. Determinism depends on that order.

use glam::Vec2;
use rand::Rng;

use super::collision::{collects_power_up, hits_obstacle};
use super::spawn;
use super::state::{FloatingText, GamePhase, GameState, PowerUpKind, Rgba};
use crate::consts::*;

/// Input intents for a single tick
///
/// `left`/`right` are sampled each tick while held; the rest are
/// edge-triggered by the external input adapter.
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub start: bool,
    pub pause: bool,
    pub restart: bool,
}

/// Burst color when the shield absorbs a collision
const SHIELD_BLUE: Rgba = Rgba::rgb(100, 150, 255);
/// Burst color when a collision costs a life
const HIT_ORANGE: Rgba = Rgba::rgb(255, 100, 50);
/// Burst color for the final explosion
const GAME_OVER_RED: Rgba = Rgba::rgb(255, 50, 0);

/// Particles in an ordinary collision burst
const BURST_SMALL: usize = 15;
/// Particles in the game-over burst
const BURST_LARGE: usize = 30;

/// Advance the game state by one tick
pub fn tick(state: &mut GameState, input: &TickInput) {
    match state.phase {
        GamePhase::NotStarted => {
            if input.start {
                log::info!("Game started (seed {})", state.seed);
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::GameOver | GamePhase::Won => {
            if input.restart {
                state.reset();
                state.phase = GamePhase::Playing;
                log::info!("Game restarted");
            }
            return;
        }
        GamePhase::Paused => {
            if input.pause {
                state.phase = GamePhase::Playing;
            }
            return;
        }
        GamePhase::Playing => {}
    }

    if input.pause {
        state.phase = GamePhase::Paused;
        return;
    }

    state.tick_count += 1;

    // Shield winds down at the top of the tick: a 300-tick shield protects
    // the 300 ticks after collection and has lapsed on the 301st.
    if state.player.shielded {
        if state.player.shield_ticks == 0 {
            state.player.shielded = false;
        } else {
            state.player.shield_ticks -= 1;
        }
    }

    if !advance_obstacles(state) {
        // A terminal transition consumed the rest of this tick
        return;
    }
    collect_power_ups(state);
    apply_movement(state, input);
    maybe_spawn_power_up(state);
    advance_floating_texts(state);
    advance_particles(state);
}

/// Obstacle pass: fall, rotate, resolve collisions and bottom exits.
///
/// Side effects are deferred out of the scan (the event lists below) and each
/// removal is paired with a respawn, so the live count stays constant.
/// Returns false when the pass ended the game.
fn advance_obstacles(state: &mut GameState) -> bool {
    let player_pos = state.player.pos;
    let shielded = state.player.shielded;
    let speed = state.speed;

    let mut bursts: Vec<Vec2> = Vec::new();
    let mut lives_lost = 0u32;
    let mut exited = 0u32;
    let mut removed = 0usize;

    state.obstacles.retain_mut(|obstacle| {
        obstacle.pos.y += speed;
        obstacle.rotation += obstacle.rotation_speed;

        if hits_obstacle(player_pos, obstacle) {
            bursts.push(obstacle.center());
            if !shielded {
                lives_lost += 1;
            }
            removed += 1;
            return false;
        }
        if obstacle.pos.y > HEIGHT {
            exited += 1;
            removed += 1;
            return false;
        }
        true
    });

    let burst_color = if shielded { SHIELD_BLUE } else { HIT_ORANGE };
    for center in bursts {
        for p in spawn::explosion(&mut state.rng, center, burst_color, BURST_SMALL) {
            state.push_particle(p);
        }
    }

    for _ in 0..removed {
        let obstacle = spawn::spawn_obstacle(&mut state.rng);
        state.obstacles.push(obstacle);
    }

    if lives_lost > 0 {
        state.lives = state.lives.saturating_sub(lives_lost);
        if state.lives == 0 {
            for p in spawn::explosion(&mut state.rng, player_pos, GAME_OVER_RED, BURST_LARGE) {
                state.push_particle(p);
            }
            log::info!(
                "Game over at score {} (level {})",
                state.score,
                state.level
            );
            state.phase = GamePhase::GameOver;
            return false;
        }
    }

    // Score each unharmed exit; level up on every tenth point
    for _ in 0..exited {
        state.score += 1;
        if state.score % 10 == 0 {
            state.speed += 0.5;
            state.level += 1;
            log::debug!("Level {} (speed {})", state.level, state.speed);
            if state.level >= MAX_LEVEL {
                for p in spawn::victory_celebration(&mut state.rng, player_pos) {
                    state.push_particle(p);
                }
                log::info!("Level {} reached, you win", MAX_LEVEL);
                state.phase = GamePhase::Won;
                return false;
            }
        }
    }

    true
}

/// Power-up pass: fall, spin, collect or drop off-screen
fn collect_power_ups(state: &mut GameState) {
    let player_pos = state.player.pos;
    let fall = state.speed * POWER_UP_FALL_FACTOR;

    let mut collected: Vec<PowerUpKind> = Vec::new();
    state.power_ups.retain_mut(|power_up| {
        power_up.pos.y += fall;
        power_up.rotation += POWER_UP_SPIN;

        if collects_power_up(player_pos, power_up) {
            collected.push(power_up.kind);
            return false;
        }
        power_up.pos.y <= HEIGHT
    });

    for kind in collected {
        apply_power_up(state, kind);
    }
}

/// Apply exactly one effect per collected power-up
fn apply_power_up(state: &mut GameState, kind: PowerUpKind) {
    match kind {
        PowerUpKind::Shield => {
            state.player.shielded = true;
            state.player.shield_ticks = SHIELD_DURATION_TICKS;
        }
        PowerUpKind::ExtraLife => {
            state.lives = (state.lives + 1).min(MAX_LIVES);
        }
        PowerUpKind::SlowDown => {
            state.speed = (state.speed * 0.7).max(MIN_SPEED);
        }
    }
    let (label, color) = kind.label();
    state.floating_texts.push(FloatingText::new(
        state.player.pos,
        Some(label),
        Some(color),
    ));
    log::debug!("Collected {kind:?}");
}

/// Movement pass: held intents step the ship, clamped to the playfield
fn apply_movement(state: &mut GameState, input: &TickInput) {
    let step = if state.score > PLAYER_BOOST_SCORE {
        PLAYER_STEP + 1.0
    } else {
        PLAYER_STEP
    };
    let thrusting_exhaust = state.tick_count % 3 == 0;

    if input.left && state.player.pos.x > PLAYER_RADIUS {
        state.player.pos.x -= step;
        if thrusting_exhaust {
            emit_exhaust(state, Vec2::new(5.0, 10.0), 1.0);
        }
    }
    if input.right && state.player.pos.x < WIDTH - PLAYER_RADIUS {
        state.player.pos.x += step;
        if thrusting_exhaust {
            emit_exhaust(state, Vec2::new(-5.0, 10.0), -1.0);
        }
    }

    // Idle exhaust keeps the engine visibly burning
    if state.tick_count % 5 == 0 {
        emit_exhaust(state, Vec2::new(0.0, 10.0), 0.0);
    }
}

fn emit_exhaust(state: &mut GameState, offset: Vec2, direction: f32) {
    let pos = state.player.pos + offset;
    for p in spawn::engine_exhaust(&mut state.rng, pos, direction) {
        state.push_particle(p);
    }
}

/// Stochastic power-up spawn, at most one per tick. Live power-ups are
/// deliberately uncapped.
fn maybe_spawn_power_up(state: &mut GameState) {
    if state.rng.random_bool(POWER_UP_SPAWN_CHANCE) {
        let power_up = spawn::spawn_power_up(&mut state.rng);
        state.power_ups.push(power_up);
    }
}

/// Floating texts drift up and fade, faster toward the end of their life
fn advance_floating_texts(state: &mut GameState) {
    state.floating_texts.retain_mut(|text| {
        if text.life == 0 {
            return false;
        }
        text.pos.y -= 1.0;
        text.alpha = (text.alpha - 255.0 / text.life as f32).max(0.0);
        text.life -= 1;
        text.life > 0
    });
}

/// Particles coast, shrink, and burn out
fn advance_particles(state: &mut GameState) {
    state.particles.retain_mut(|particle| {
        particle.pos += particle.vel;
        particle.life -= particle.decay;
        particle.size *= 0.95;
        !particle.is_dead()
    });
}
