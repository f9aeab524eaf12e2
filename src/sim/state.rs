//! Game state and core simulation types
//!
//! Everything the tick mutates and the renderer reads lives here.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::spawn;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for the start intent
    NotStarted,
    /// Active gameplay
    Playing,
    /// Tick advance frozen; state stays queryable
    Paused,
    /// Ship destroyed
    GameOver,
    /// Final level reached
    Won,
}

/// An RGBA color, carried for the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    /// Opaque color from its three channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// The player's ship
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub pos: Vec2,
    pub shielded: bool,
    /// Shield ticks remaining
    pub shield_ticks: u32,
}

impl Player {
    /// Fresh ship at the bottom-center start position
    pub fn new() -> Self {
        Self {
            pos: Vec2::new(WIDTH / 2.0, HEIGHT - 50.0),
            shielded: false,
            shield_ticks: 0,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A falling asteroid
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Obstacle {
    /// Top-left anchor; the collision center sits `size / 2` in on both axes
    pub pos: Vec2,
    pub size: f32,
    /// Polygon vertex count for the renderer
    pub vertices: u32,
    /// How far the silhouette deviates from a circle (0..1)
    pub irregularity: f32,
    pub rotation: f32,
    pub rotation_speed: f32,
}

impl Obstacle {
    /// Collision center of the asteroid
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUpKind {
    Shield,
    ExtraLife,
    SlowDown,
}

impl PowerUpKind {
    /// Parse an external kind name. Unknown names are rejected here, at the
    /// boundary, so the tick never sees a malformed kind.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "shield" => Some(Self::Shield),
            "extraLife" => Some(Self::ExtraLife),
            "slowDown" => Some(Self::SlowDown),
            _ => {
                log::warn!("Rejected unknown power-up kind {name:?}");
                None
            }
        }
    }

    /// Floating-text label and color shown on collection
    pub fn label(&self) -> (&'static str, Rgba) {
        match self {
            Self::Shield => ("SHIELD!", Rgba::rgb(100, 150, 255)),
            Self::ExtraLife => ("+1 LIFE", Rgba::rgb(255, 100, 100)),
            Self::SlowDown => ("SLOW TIME", Rgba::rgb(150, 255, 150)),
        }
    }
}

/// A collectible power-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub pos: Vec2,
    pub kind: PowerUpKind,
    pub rotation: f32,
    /// Phase offset for the renderer's pulse animation
    pub pulse_phase: f32,
}

/// A short-lived visual particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
    pub color: Rgba,
    /// Remaining energy; drains by `decay` each tick
    pub life: f32,
    pub decay: f32,
}

impl Particle {
    /// Dead particles are removed at the end of the particle pass
    pub fn is_dead(&self) -> bool {
        self.life <= 0.0 || self.size < 0.5
    }
}

/// Pickup feedback text drifting up from the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FloatingText {
    pub pos: Vec2,
    pub message: String,
    pub color: Rgba,
    pub alpha: f32,
    /// Ticks remaining
    pub life: u32,
}

impl FloatingText {
    /// Build a floating text, normalizing malformed parameters instead of
    /// failing: a missing message becomes empty, a missing color opaque white.
    pub fn new(pos: Vec2, message: Option<&str>, color: Option<Rgba>) -> Self {
        if message.is_none() || color.is_none() {
            log::warn!("Floating text at {pos} missing message or color, substituting defaults");
        }
        Self {
            pos,
            message: message.unwrap_or_default().to_owned(),
            color: color.unwrap_or(Rgba::WHITE),
            alpha: 255.0,
            life: FLOATING_TEXT_LIFE,
        }
    }
}

/// Complete game state (deterministic, serializable)
///
/// Exclusively owns every entity collection; the session RNG lives here so a
/// run replays identically from its seed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Session RNG; every stochastic decision draws from here
    pub rng: Pcg32,
    pub score: u32,
    /// Shared fall speed for all obstacles (pixels per tick)
    pub speed: f32,
    pub lives: u32,
    /// Difficulty level; advances every 10 points
    pub level: u32,
    pub phase: GamePhase,
    /// Simulation tick counter
    pub tick_count: u64,
    pub player: Player,
    pub obstacles: Vec<Obstacle>,
    pub power_ups: Vec<PowerUp>,
    /// Visual particles (not gameplay-affecting)
    #[serde(skip)]
    pub particles: Vec<Particle>,
    pub floating_texts: Vec<FloatingText>,
}

impl GameState {
    /// Create a new session with the given seed, on the title screen
    pub fn new(seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            score: 0,
            speed: INITIAL_SPEED,
            lives: INITIAL_LIVES,
            level: 1,
            phase: GamePhase::NotStarted,
            tick_count: 0,
            player: Player::new(),
            obstacles: Vec::new(),
            power_ups: Vec::new(),
            particles: Vec::new(),
            floating_texts: Vec::new(),
        };
        state.spawn_initial_obstacles();
        state
    }

    /// Reinitialize every session field for a fresh run. The RNG keeps
    /// rolling so successive runs within one session differ.
    pub fn reset(&mut self) {
        self.score = 0;
        self.speed = INITIAL_SPEED;
        self.lives = INITIAL_LIVES;
        self.level = 1;
        self.tick_count = 0;
        self.player = Player::new();
        self.obstacles.clear();
        self.power_ups.clear();
        self.particles.clear();
        self.floating_texts.clear();
        self.spawn_initial_obstacles();
    }

    fn spawn_initial_obstacles(&mut self) {
        for _ in 0..INITIAL_OBSTACLES {
            let obstacle = spawn::spawn_obstacle(&mut self.rng);
            self.obstacles.push(obstacle);
        }
    }

    /// Append a particle, dropping the oldest once the buffer is full
    pub fn push_particle(&mut self, particle: Particle) {
        if self.particles.len() >= MAX_PARTICLES {
            self.particles.remove(0);
        }
        self.particles.push(particle);
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            score: self.score,
            speed: self.speed,
            lives: self.lives,
            level: self.level,
            max_level: MAX_LEVEL,
            phase: self.phase,
            player: &self.player,
            obstacles: &self.obstacles,
            power_ups: &self.power_ups,
            particles: &self.particles,
            floating_texts: &self.floating_texts,
        }
    }
}

/// Borrowed render snapshot
///
/// Handed to the renderer each frame; borrowing makes mutation from the
/// render side impossible. Collections keep their insertion order.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Snapshot<'a> {
    pub score: u32,
    pub speed: f32,
    pub lives: u32,
    pub level: u32,
    pub max_level: u32,
    pub phase: GamePhase,
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub power_ups: &'a [PowerUp],
    pub particles: &'a [Particle],
    pub floating_texts: &'a [FloatingText],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_starts_on_title_screen() {
        let state = GameState::new(42);
        assert_eq!(state.phase, GamePhase::NotStarted);
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, INITIAL_SPEED);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.level, 1);
        assert_eq!(state.obstacles.len(), INITIAL_OBSTACLES);
        assert!(state.power_ups.is_empty());
        assert!(state.particles.is_empty());
        assert!(state.floating_texts.is_empty());
    }

    #[test]
    fn reset_restores_initial_fields() {
        let mut state = GameState::new(42);
        state.score = 57;
        state.speed = 4.5;
        state.lives = 1;
        state.level = 6;
        state.player.shielded = true;
        state.player.shield_ticks = 120;
        state.power_ups.push(PowerUp {
            pos: Vec2::new(50.0, 50.0),
            kind: PowerUpKind::Shield,
            rotation: 0.0,
            pulse_phase: 0.0,
        });
        state
            .floating_texts
            .push(FloatingText::new(Vec2::ZERO, Some("+1 LIFE"), None));

        state.reset();
        assert_eq!(state.score, 0);
        assert_eq!(state.speed, INITIAL_SPEED);
        assert_eq!(state.lives, INITIAL_LIVES);
        assert_eq!(state.level, 1);
        assert!(!state.player.shielded);
        assert_eq!(state.player.shield_ticks, 0);
        assert_eq!(state.obstacles.len(), INITIAL_OBSTACLES);
        assert!(state.power_ups.is_empty());
        assert!(state.floating_texts.is_empty());
    }

    #[test]
    fn particle_buffer_drops_oldest_at_cap() {
        let mut state = GameState::new(1);
        for i in 0..(MAX_PARTICLES + 10) {
            state.push_particle(Particle {
                pos: Vec2::new(i as f32, 0.0),
                vel: Vec2::ZERO,
                size: 4.0,
                color: Rgba::WHITE,
                life: 255.0,
                decay: 1.0,
            });
        }
        assert_eq!(state.particles.len(), MAX_PARTICLES);
        // The ten oldest were dropped
        assert_eq!(state.particles[0].pos.x, 10.0);
    }

    #[test]
    fn power_up_kind_parses_known_names_only() {
        assert_eq!(PowerUpKind::from_name("shield"), Some(PowerUpKind::Shield));
        assert_eq!(
            PowerUpKind::from_name("extraLife"),
            Some(PowerUpKind::ExtraLife)
        );
        assert_eq!(
            PowerUpKind::from_name("slowDown"),
            Some(PowerUpKind::SlowDown)
        );
        assert_eq!(PowerUpKind::from_name("warpDrive"), None);
        assert_eq!(PowerUpKind::from_name(""), None);
    }

    #[test]
    fn floating_text_normalizes_missing_parameters() {
        let text = FloatingText::new(Vec2::new(10.0, 20.0), None, None);
        assert_eq!(text.message, "");
        assert_eq!(text.color, Rgba::WHITE);
        assert_eq!(text.alpha, 255.0);
        assert_eq!(text.life, FLOATING_TEXT_LIFE);
    }

    #[test]
    fn obstacle_center_is_offset_by_half_size() {
        let obstacle = Obstacle {
            pos: Vec2::new(100.0, 200.0),
            size: 40.0,
            vertices: 6,
            irregularity: 0.3,
            rotation: 0.0,
            rotation_speed: 0.01,
        };
        assert_eq!(obstacle.center(), Vec2::new(120.0, 220.0));
    }
}
