//! Decorative debris particles
//!
//! Purely visual: particles never collide with anything, they drift and
//! decay. Spawned in bursts when a ring is destroyed (one per non-gap
//! sample point around its circumference) or as a fixed-size burst at a
//! point.

use glam::Vec2;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::ring::Ring;
use crate::consts::{POINT_BURST_COUNT, RING_BURST_SAMPLES};
use crate::{circle_point, world_angle_deg};

/// A short-lived debris particle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Remaining lifetime in frames; strictly decreases each update
    pub life: i32,
    pub size: f32,
}

impl Particle {
    pub fn new(pos: Vec2, rng: &mut impl Rng) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-2.0..2.0), rng.random_range(-2.0..2.0)),
            life: rng.random_range(20..=40),
            size: rng.random_range(1..=2) as f32,
        }
    }

    /// Drift and age by one frame
    pub fn update(&mut self) {
        self.pos += self.vel;
        self.life -= 1;
    }

    /// Once false, the particle is permanently inert
    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0
    }

    /// Render alpha derived from remaining lifetime
    pub fn alpha(&self) -> u8 {
        (self.life * 8).clamp(0, 255) as u8
    }
}

/// Burst a destroyed ring into debris: sample its circumference and spawn
/// one particle at every sample point the gap does not cover.
pub fn spawn_ring_burst(ring: &Ring, rng: &mut impl Rng, out: &mut Vec<Particle>) {
    for i in 0..RING_BURST_SAMPLES {
        let theta = std::f32::consts::TAU * i as f32 / RING_BURST_SAMPLES as f32;
        let pos = circle_point(ring.center, ring.radius, theta);
        if ring.angle_in_gap(world_angle_deg(ring.center, pos)) {
            continue;
        }
        out.push(Particle::new(pos, rng));
    }
}

/// Fixed-size burst at a point
pub fn spawn_burst(pos: Vec2, rng: &mut impl Rng, out: &mut Vec<Particle>) {
    for _ in 0..POINT_BURST_COUNT {
        out.push(Particle::new(pos, rng));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_lifetime_counts_down_to_inert() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::new(1.0, 0.0),
            life: 30,
            size: 2.0,
        };
        for _ in 0..29 {
            p.update();
        }
        assert!(p.is_alive());
        p.update();
        assert!(!p.is_alive());
    }

    #[test]
    fn test_alpha_tracks_lifetime() {
        let mut p = Particle {
            pos: Vec2::ZERO,
            vel: Vec2::ZERO,
            life: 40,
            size: 1.0,
        };
        assert_eq!(p.alpha(), 255);
        p.life = 10;
        assert_eq!(p.alpha(), 80);
        p.life = 0;
        assert_eq!(p.alpha(), 0);
    }

    #[test]
    fn test_ring_burst_skips_gap_samples() {
        let mut rng = Pcg32::seed_from_u64(7);
        // Quarter-circle gap: roughly a quarter of the samples skipped
        let ring = Ring::new(Vec2::new(400.0, 300.0), 150.0, 10.0, 90.0, 0.0, 0.5);
        let mut out = Vec::new();
        spawn_ring_burst(&ring, &mut rng, &mut out);

        let expected = crate::consts::RING_BURST_SAMPLES as usize * 3 / 4;
        assert!(out.len() <= expected + 3);
        assert!(out.len() >= expected - 3);

        // Every spawned particle sits outside the gap
        for p in &out {
            assert!(!ring.angle_in_gap(world_angle_deg(ring.center, p.pos)));
        }
    }

    #[test]
    fn test_point_burst_size() {
        let mut rng = Pcg32::seed_from_u64(7);
        let mut out = Vec::new();
        spawn_burst(Vec2::new(10.0, 10.0), &mut rng, &mut out);
        assert_eq!(out.len(), crate::consts::POINT_BURST_COUNT as usize);
        for p in &out {
            assert!((20..=40).contains(&p.life));
        }
    }
}
