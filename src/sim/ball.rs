//! Ball motion and reflection physics
//!
//! One explicit Euler step per frame, no substepping: tunneling through a
//! thin ring at high speed is an accepted risk, bounded by the speed cap.
//! The bounce is deliberately non-physical - it always pushes away from the
//! struck face and re-rolls speed inside the caps so the ball never crawls
//! and never explodes.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ring::Ring;
use crate::consts::{BOUNCE_JITTER, CORRECTION_EPSILON, LIVELINESS_MAX, LIVELINESS_MIN};

/// Randomness injected into the bounce, kept behind a seam so tests can
/// substitute a fixed source and assert exact post-bounce velocities.
pub trait BounceRng {
    /// Direction perturbation applied after reflection (radians)
    fn jitter(&mut self) -> f32;
    /// Speed multiplier (> 1) applied after reflection
    fn liveliness(&mut self) -> f32;
}

impl<R: Rng> BounceRng for R {
    fn jitter(&mut self) -> f32 {
        self.random_range(-BOUNCE_JITTER..BOUNCE_JITTER)
    }

    fn liveliness(&mut self) -> f32 {
        self.random_range(LIVELINESS_MIN..LIVELINESS_MAX)
    }
}

/// A point mass with one frame of position history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Position at the start of the previous integration step; used to
    /// classify which ring face a bounce came from
    pub prev_pos: Vec2,
    pub vel: Vec2,
    /// Fixed for the round
    pub radius: f32,
}

impl Ball {
    /// Spawn at the arena center with a small random upward-biased kick
    pub fn new(pos: Vec2, radius: f32, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            prev_pos: pos,
            vel: Vec2::new(rng.random_range(-2.0..2.0), rng.random_range(-2.0..0.0)),
            radius,
        }
    }

    /// Current speed in pixels per frame
    #[inline]
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// One explicit Euler step: capture history, apply gravity, clamp
    /// speed, advance position.
    pub fn integrate(&mut self, gravity: f32, max_speed: f32) {
        self.prev_pos = self.pos;
        self.vel.y += gravity;
        self.clamp_speed(max_speed);
        self.pos += self.vel;
    }

    /// Bounce off a surface with unit outward normal `normal`.
    ///
    /// Not specular reflection: the new velocity always points away from
    /// the surface with magnitude `|v . n| * damping`, then gets a small
    /// random direction jitter and a liveliness boost, floored at
    /// `min_speed` and finally reclamped to `max_speed`.
    pub fn reflect(
        &mut self,
        normal: Vec2,
        damping: f32,
        min_speed: f32,
        max_speed: f32,
        rng: &mut impl BounceRng,
    ) {
        let v_dot_n = self.vel.dot(normal);
        self.vel = -normal * v_dot_n.abs() * damping;

        let angle = self.vel.y.atan2(self.vel.x) + rng.jitter();
        let speed = (v_dot_n.abs() * damping).max(min_speed) * rng.liveliness();
        self.vel = Vec2::new(angle.cos(), angle.sin()) * speed;

        self.clamp_speed(max_speed);
    }

    /// Push the ball radially so its edge sits exactly on the annulus
    /// boundary it struck, with a small epsilon so the same contact does
    /// not re-trigger next frame.
    pub fn correct_position(&mut self, ring: &Ring, from_inside: bool) {
        let d = self.pos - ring.center;
        let dist = d.length();
        // Degenerate: ball exactly at ring center, fall back to +x
        let n = if dist == 0.0 { Vec2::X } else { d / dist };

        let target = if from_inside {
            ring.inner_radius() - self.radius - CORRECTION_EPSILON
        } else {
            ring.outer_radius() + self.radius + CORRECTION_EPSILON
        };
        self.pos = ring.center + n * target;
    }

    fn clamp_speed(&mut self, max_speed: f32) {
        let speed = self.vel.length();
        if speed > max_speed {
            self.vel *= max_speed / speed;
        }
    }
}
