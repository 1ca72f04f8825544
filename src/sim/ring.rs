//! Ring geometry and lifecycle
//!
//! A ring is a destructible annulus with a single angular gap, rotating
//! around the shared arena center. Angles are degrees in [0,360), measured
//! with the screen-space convention of [`crate::world_angle_deg`] so the
//! physics and drawing layers agree on where the gap is.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::ball::Ball;
use crate::{normalize_deg, world_angle_deg};

/// Outcome of testing a ring against the ball for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contact {
    /// Ball is outside the collision band, or the ring is already dead
    None,
    /// Ball passed through the gap; the ring is now dead
    Destroyed,
    /// Ball struck the inner face, approaching from inside the ring
    BounceInner,
    /// Ball struck the outer face, approaching from outside
    BounceOuter,
}

/// A rotating, gapped, destructible ring
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ring {
    /// Arena center, shared by all rings
    pub center: Vec2,
    /// Centerline radius; shrinks over time, never below the floor
    pub radius: f32,
    /// Radial thickness, fixed at creation
    pub thickness: f32,
    /// Angular width of the gap (degrees), fixed at creation
    pub gap_span: f32,
    /// Current rotation angle (degrees, [0,360)); the gap starts here
    pub angle: f32,
    /// Signed degrees per frame; sign flips when any ring is destroyed
    pub rotation_speed: f32,
    /// False once the ball has passed through the gap; never resurrected
    pub alive: bool,
}

impl Ring {
    pub fn new(
        center: Vec2,
        radius: f32,
        thickness: f32,
        gap_span: f32,
        start_angle: f32,
        rotation_speed: f32,
    ) -> Self {
        Self {
            center,
            radius,
            thickness,
            gap_span,
            angle: normalize_deg(start_angle),
            rotation_speed,
            alive: true,
        }
    }

    /// Gap interval start for this frame
    #[inline]
    pub fn gap_start(&self) -> f32 {
        self.angle
    }

    /// Gap interval end for this frame (may wrap past 360)
    #[inline]
    pub fn gap_end(&self) -> f32 {
        normalize_deg(self.angle + self.gap_span)
    }

    /// Inner boundary of the annulus material
    #[inline]
    pub fn inner_radius(&self) -> f32 {
        self.radius - self.thickness / 2.0
    }

    /// Outer boundary of the annulus material
    #[inline]
    pub fn outer_radius(&self) -> f32 {
        self.radius + self.thickness / 2.0
    }

    /// Radial range where a ball of `ball_radius` can touch this ring
    pub fn collision_band(&self, ball_radius: f32) -> (f32, f32) {
        (
            self.inner_radius() - ball_radius,
            self.outer_radius() + ball_radius,
        )
    }

    /// Advance rotation by `delta` degrees; dead rings stop rotating
    pub fn advance(&mut self, delta: f32) {
        if self.alive {
            self.angle = normalize_deg(self.angle + delta);
        }
    }

    /// Exponentially decay the radius, clamped to `floor`
    pub fn shrink(&mut self, factor: f32, floor: f32) {
        if self.alive {
            self.radius = (self.radius * factor).max(floor);
        }
    }

    /// Flip rotation direction (reaction to any ring being destroyed)
    pub fn reverse_direction(&mut self) {
        self.rotation_speed = -self.rotation_speed;
    }

    /// Whether a world-space angle (degrees, [0,360)) falls in the gap.
    ///
    /// The interval wraps around 360 when the gap straddles zero, so the
    /// membership test special-cases `start > end`.
    pub fn angle_in_gap(&self, angle: f32) -> bool {
        let start = self.gap_start();
        let end = self.gap_end();
        if start < end {
            start <= angle && angle <= end
        } else {
            angle >= start || angle <= end
        }
    }

    /// Test the ball against this ring and classify the contact.
    ///
    /// The collision band uses strict inequalities at both edges: a ball
    /// centered exactly on a boundary distance is not colliding, favoring
    /// pass-through over sticking. Passing through the gap kills the ring
    /// as a side effect; the caller owns the world-wide reaction.
    pub fn test_collision(&mut self, ball: &Ball) -> Contact {
        if !self.alive {
            return Contact::None;
        }

        let dist = ball.pos.distance(self.center);
        let (band_in, band_out) = self.collision_band(ball.radius);
        if !(band_in < dist && dist < band_out) {
            return Contact::None;
        }

        let angle = world_angle_deg(self.center, ball.pos);
        if self.angle_in_gap(angle) {
            self.alive = false;
            return Contact::Destroyed;
        }

        // Which face was struck depends on where the ball came from,
        // not where it is now.
        let prev_dist = ball.prev_pos.distance(self.center);
        if prev_dist < self.radius {
            Contact::BounceInner
        } else {
            Contact::BounceOuter
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::normalize_deg;

    fn ring_at(radius: f32, thickness: f32, gap_span: f32, angle: f32) -> Ring {
        Ring::new(
            Vec2::new(400.0, 300.0),
            radius,
            thickness,
            gap_span,
            angle,
            0.5,
        )
    }

    fn ball_at_distance(ring: &Ring, dist: f32, world_deg: f32, radius: f32) -> Ball {
        // World angle convention negates y, so a point at world angle a
        // sits at center + dist * (cos a, -sin a).
        let rad = world_deg.to_radians();
        let pos = ring.center + Vec2::new(dist * rad.cos(), -dist * rad.sin());
        Ball {
            pos,
            prev_pos: pos,
            vel: Vec2::new(1.0, 1.0),
            radius,
        }
    }

    #[test]
    fn test_gap_membership_no_wrap() {
        let ring = ring_at(150.0, 10.0, 30.0, 0.0);
        assert!(ring.angle_in_gap(0.0));
        assert!(ring.angle_in_gap(15.0));
        assert!(ring.angle_in_gap(30.0));
        assert!(!ring.angle_in_gap(31.0));
        assert!(!ring.angle_in_gap(180.0));
        assert!(!ring.angle_in_gap(359.0));
    }

    #[test]
    fn test_gap_membership_wraps_past_zero() {
        // Gap [350, 20): membership is angle >= 350 OR angle <= 20
        let ring = ring_at(150.0, 10.0, 30.0, 350.0);
        assert!(ring.angle_in_gap(355.0));
        assert!(ring.angle_in_gap(5.0));
        assert!(ring.angle_in_gap(20.0));
        assert!(!ring.angle_in_gap(25.0));
        assert!(!ring.angle_in_gap(180.0));
    }

    #[test]
    fn test_gap_is_single_contiguous_arc() {
        let ring = ring_at(150.0, 10.0, 45.0, 300.0);
        // Walking the circle must enter and leave the gap exactly once.
        let mut transitions = 0;
        let mut prev = ring.angle_in_gap(0.0);
        for i in 1..=3600 {
            let a = normalize_deg(i as f32 * 0.1);
            let cur = ring.angle_in_gap(a);
            if cur != prev {
                transitions += 1;
            }
            prev = cur;
        }
        assert_eq!(transitions, 2);
    }

    #[test]
    fn test_collision_band_is_strict() {
        // Ring radius 150, thickness 10, ball radius 12: band is (133, 167)
        let mut ring = ring_at(150.0, 10.0, 30.0, 0.0);
        let (lo, hi) = ring.collision_band(12.0);
        assert_eq!(lo, 133.0);
        assert_eq!(hi, 167.0);

        // Inside the band, away from the gap: must not be None
        let ball = ball_at_distance(&ring, 143.0, 180.0, 12.0);
        assert_ne!(ring.test_collision(&ball), Contact::None);

        // Exactly on a boundary: no collision
        let ball = ball_at_distance(&ring, 133.0, 180.0, 12.0);
        assert_eq!(ring.test_collision(&ball), Contact::None);
        let ball = ball_at_distance(&ring, 167.0, 180.0, 12.0);
        assert_eq!(ring.test_collision(&ball), Contact::None);
    }

    #[test]
    fn test_gap_hit_destroys_ring() {
        let mut ring = ring_at(150.0, 10.0, 30.0, 0.0);
        let ball = ball_at_distance(&ring, 150.0, 15.0, 12.0);
        assert_eq!(ring.test_collision(&ball), Contact::Destroyed);
        assert!(!ring.alive);

        // Dead rings report nothing afterwards
        assert_eq!(ring.test_collision(&ball), Contact::None);
        assert!(!ring.alive);
    }

    #[test]
    fn test_destruction_is_monotonic() {
        let mut ring = ring_at(150.0, 10.0, 30.0, 0.0);
        ring.alive = false;
        ring.advance(5.0);
        ring.shrink(SHRINK_FACTOR, MIN_RING_RADIUS);
        let ball = ball_at_distance(&ring, 150.0, 15.0, 12.0);
        ring.test_collision(&ball);
        assert!(!ring.alive);
    }

    #[test]
    fn test_bounce_face_classification() {
        let mut ring = ring_at(150.0, 10.0, 30.0, 0.0);

        // Came from inside the ring: inner face
        let mut ball = ball_at_distance(&ring, 145.0, 180.0, 12.0);
        ball.prev_pos = ring.center + Vec2::new(-100.0, 0.0);
        assert_eq!(ring.test_collision(&ball), Contact::BounceInner);

        // Came from outside: outer face
        let mut ball = ball_at_distance(&ring, 160.0, 180.0, 12.0);
        ball.prev_pos = ring.center + Vec2::new(-200.0, 0.0);
        assert_eq!(ring.test_collision(&ball), Contact::BounceOuter);
    }

    #[test]
    fn test_advance_wraps_and_stops_when_dead() {
        let mut ring = ring_at(150.0, 10.0, 30.0, 358.0);
        ring.advance(4.0);
        assert!((ring.angle - 2.0).abs() < 1e-4);

        ring.alive = false;
        ring.advance(10.0);
        assert!((ring.angle - 2.0).abs() < 1e-4);
    }

    #[test]
    fn test_shrink_clamps_to_floor() {
        let mut ring = ring_at(21.0, 10.0, 30.0, 0.0);
        for _ in 0..5000 {
            ring.shrink(SHRINK_FACTOR, MIN_RING_RADIUS);
        }
        assert_eq!(ring.radius, MIN_RING_RADIUS);
    }
}
