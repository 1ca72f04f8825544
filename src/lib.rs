//! Ring Rush - a looping ring-trap simulation
//!
//! A ball bounces inside a set of concentric, rotating, gapped rings.
//! Passing through a ring's gap destroys the ring and reverses every
//! surviving ring's rotation; hitting the solid arc reflects the ball.
//! When the ball escapes the display bounds the round ends and a freshly
//! randomized one begins.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rings, ball, particles, frame tick)
//! - `audio`: Optional fire-and-forget sound collaborator

pub mod audio;
pub mod sim;

pub use audio::{AudioSink, NullAudio};

use glam::Vec2;

/// Simulation tuning constants
pub mod consts {
    /// Display bounds the ball must escape to end a round
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 600.0;
    /// Frame-rate target for the cooperative loop (physics is per-frame)
    pub const FPS: u32 = 60;

    /// Downward acceleration per frame (screen coords, +y is down)
    pub const GRAVITY: f32 = 0.05;

    /// Ball speed caps (pixels per frame)
    pub const MAX_BALL_SPEED: f32 = 12.0;
    pub const MIN_BALL_SPEED: f32 = 4.0;
    /// No energy loss on bounce
    pub const BOUNCE_DAMPING: f32 = 1.0;
    /// Direction jitter applied after each bounce (radians)
    pub const BOUNCE_JITTER: f32 = 0.18;
    /// Post-bounce speed multiplier range, keeps the ball lively
    pub const LIVELINESS_MIN: f32 = 1.05;
    pub const LIVELINESS_MAX: f32 = 1.15;

    /// Radius of the innermost ring; ring i sits at `BASE + i * spacing`
    pub const BASE_RING_RADIUS: f32 = 100.0;
    /// Exponential per-frame radius decay for the active ring
    pub const SHRINK_FACTOR: f32 = 0.997;
    /// Rings never shrink below this radius
    pub const MIN_RING_RADIUS: f32 = 20.0;
    /// Outward nudge after position correction, avoids instant re-trigger
    pub const CORRECTION_EPSILON: f32 = 0.1;

    /// Circumference samples when bursting a destroyed ring into debris
    pub const RING_BURST_SAMPLES: u32 = 200;
    /// Particle count for a plain point burst
    pub const POINT_BURST_COUNT: u32 = 40;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_deg(angle: f32) -> f32 {
    angle.rem_euclid(360.0)
}

/// World-space angle (degrees, [0,360)) from `center` to `point`.
///
/// Screen coordinates grow downward, so the y delta is negated to keep the
/// angle convention counter-clockwise-positive like the drawing layer's.
#[inline]
pub fn world_angle_deg(center: Vec2, point: Vec2) -> f32 {
    let d = point - center;
    normalize_deg((-d.y).atan2(d.x).to_degrees())
}

/// Point on a circle at `angle_rad` (math convention, screen coords)
#[inline]
pub fn circle_point(center: Vec2, radius: f32, angle_rad: f32) -> Vec2 {
    center + Vec2::new(radius * angle_rad.cos(), radius * angle_rad.sin())
}
