//! Cosmic Dodge entry point
//!
//! Runs the simulation headless at the nominal 60 Hz cadence with a small
//! autopilot, logging progress. Real builds pair the sim with an external
//! renderer and input adapter; this binary exists to watch a full session
//! play out end to end.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use cosmic_dodge::consts::*;
use cosmic_dodge::distance;
use cosmic_dodge::sim::{GamePhase, GameState, TickInput, tick};

/// Nominal tick cadence (ticks per second)
const TICK_RATE: u32 = 60;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|arg| arg.parse().ok())
        .unwrap_or(0xC0DE);

    let mut state = GameState::new(seed);
    log::info!("Cosmic Dodge starting (seed {seed})");

    let mut input = TickInput {
        start: true,
        ..TickInput::default()
    };
    let tick_duration = Duration::from_secs(1) / TICK_RATE;

    loop {
        let tick_start = Instant::now();

        tick(&mut state, &input);
        input = autopilot(&state);

        match state.phase {
            GamePhase::GameOver => {
                log::info!(
                    "Game over: score {} at level {}",
                    state.score,
                    state.level
                );
                break;
            }
            GamePhase::Won => {
                log::info!("Victory at score {}", state.score);
                break;
            }
            _ => {}
        }

        if state.tick_count > 0 && state.tick_count % 600 == 0 {
            let snap = state.snapshot();
            log::info!(
                "score {} lives {} level {}/{} speed {:.1}",
                snap.score,
                snap.lives,
                snap.level,
                snap.max_level,
                snap.speed
            );
        }

        let elapsed = tick_start.elapsed();
        if elapsed < tick_duration {
            std::thread::sleep(tick_duration - elapsed);
        }
    }
}

/// Steer away from the nearest asteroid on a collision course; when the sky
/// is clear, drift toward the nearest power-up.
fn autopilot(state: &GameState) -> TickInput {
    let player = state.player.pos;
    let mut input = TickInput::default();

    let by_distance = |a: f32, b: f32| a.partial_cmp(&b).unwrap_or(Ordering::Equal);

    let threat = state
        .obstacles
        .iter()
        .filter(|o| o.center().y < player.y)
        .min_by(|a, b| {
            by_distance(distance(player, a.center()), distance(player, b.center()))
        });

    let dodging = threat.is_some_and(|obstacle| {
        let center = obstacle.center();
        let danger = obstacle.size / 2.0 + PLAYER_RADIUS + 25.0;
        if (center.x - player.x).abs() < danger && (center.y - player.y).abs() < 3.0 * danger {
            if center.x >= player.x {
                input.left = true;
            } else {
                input.right = true;
            }
            true
        } else {
            false
        }
    });

    if !dodging {
        let pickup = state
            .power_ups
            .iter()
            .min_by(|a, b| by_distance(distance(player, a.pos), distance(player, b.pos)));
        if let Some(pickup) = pickup {
            if pickup.pos.x < player.x - PLAYER_STEP {
                input.left = true;
            } else if pickup.pos.x > player.x + PLAYER_STEP {
                input.right = true;
            }
        }
    }

    input
}
