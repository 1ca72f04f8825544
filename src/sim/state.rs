//! Round configuration and simulation state
//!
//! All per-round state lives here. A round's configuration is drawn once
//! from the controller's RNG and stays immutable for the round's duration;
//! the entities it seeds are mutated in place by the frame tick.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use super::particle::Particle;
use super::ring::Ring;
use crate::consts::*;

/// RGB color, one byte per channel
pub type Color = [u8; 3];

/// Channel-wise brighten, saturating at 255
pub fn brighter(color: Color, delta: u8) -> Color {
    [
        color[0].saturating_add(delta),
        color[1].saturating_add(delta),
        color[2].saturating_add(delta),
    ]
}

/// Externally observable simulation events, drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The ball passed through a ring's gap; `ring` is its index
    RingDestroyed { ring: usize },
    /// The ball left the display bounds; the round is over
    RoundOver,
}

/// Immutable per-round configuration, supplied once at round start.
///
/// The core does not validate these beyond its own invariants;
/// out-of-range values are the supplier's responsibility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundConfig {
    pub ring_count: u32,
    pub ring_thickness: f32,
    pub ring_spacing: f32,
    /// Angular width of every gap (degrees)
    pub gap_span: f32,
    /// Shared start angle for every ring (degrees)
    pub initial_angle: f32,
    /// Angular speed of the innermost ring (degrees/frame)
    pub base_speed: f32,
    /// Angular speed of the outermost ring (degrees/frame, < base)
    pub min_speed: f32,
    pub ball_radius: f32,
    pub ring_color: Color,
    pub ball_color: Color,
}

impl RoundConfig {
    /// Draw a fresh configuration, matching the original game's ranges
    pub fn random(rng: &mut impl Rng) -> Self {
        let base_speed = rng.random_range(0.3..1.2);
        const QUARTERS: [f32; 4] = [0.0, 90.0, 180.0, 270.0];
        Self {
            ring_count: rng.random_range(3..=20),
            ring_thickness: rng.random_range(2..=16) as f32,
            ring_spacing: rng.random_range(10..=40) as f32,
            gap_span: rng.random_range(20..=90) as f32,
            initial_angle: QUARTERS[rng.random_range(0..QUARTERS.len())],
            base_speed,
            min_speed: rng.random_range(0.05..base_speed * 0.7),
            ball_radius: rng.random_range(10..=18) as f32,
            ring_color: random_color(rng),
            ball_color: random_color(rng),
        }
    }

    /// Debris color derived from the ring color
    pub fn particle_color(&self) -> Color {
        brighter(self.ring_color, 30)
    }

    /// Angular speed for ring `index`: linear fade from base (innermost)
    /// to min (outermost), direction alternating with index parity.
    pub fn ring_speed(&self, index: u32) -> f32 {
        let magnitude = if self.ring_count > 1 {
            let t = index as f32 / (self.ring_count - 1) as f32;
            self.base_speed + (self.min_speed - self.base_speed) * t
        } else {
            self.base_speed
        };
        if index % 2 == 0 { magnitude } else { -magnitude }
    }
}

fn random_color(rng: &mut impl Rng) -> Color {
    [
        rng.random_range(80..=255),
        rng.random_range(80..=255),
        rng.random_range(80..=255),
    ]
}

/// Complete state of one round
#[derive(Debug)]
pub struct SimState {
    pub config: RoundConfig,
    /// Shared ring center, fixed for the round
    pub center: Vec2,
    /// Rings never leave this collection; destruction only flags them
    pub rings: Vec<Ring>,
    pub ball: Ball,
    pub particles: Vec<Particle>,
    /// Seeded RNG driving bounce jitter and particle spawns
    pub rng: Pcg32,
    /// Frames simulated so far this round
    pub frame: u64,
    /// Set once the ball escapes the display bounds
    pub round_over: bool,
    /// Events produced by the most recent tick
    pub events: Vec<GameEvent>,
}

impl SimState {
    /// Build a fresh round: concentric rings at `BASE + i * spacing` with
    /// alternating rotation direction, and the ball at the shared center.
    pub fn new_round(config: RoundConfig, seed: u64) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let center = Vec2::new(WIDTH / 2.0, HEIGHT / 2.0);

        let rings = (0..config.ring_count)
            .map(|i| {
                Ring::new(
                    center,
                    BASE_RING_RADIUS + i as f32 * config.ring_spacing,
                    config.ring_thickness,
                    config.gap_span,
                    config.initial_angle,
                    config.ring_speed(i),
                )
            })
            .collect();

        let ball = Ball::new(center, config.ball_radius, &mut rng);

        Self {
            config,
            center,
            rings,
            ball,
            particles: Vec::new(),
            rng,
            frame: 0,
            round_over: false,
            events: Vec::new(),
        }
    }

    /// Number of rings still standing
    pub fn alive_rings(&self) -> usize {
        self.rings.iter().filter(|r| r.alive).count()
    }

    /// True once the ball is outside the display rectangle by more than
    /// its radius in any direction
    pub fn ball_out_of_bounds(&self) -> bool {
        let r = self.ball.radius;
        let p = self.ball.pos;
        p.x < -r || p.x > WIDTH + r || p.y < -r || p.y > HEIGHT + r
    }
}
