//! Renderer-facing frame snapshot
//!
//! The core produces data only; an external drawing layer consumes it.
//! Dead rings and expired particles never appear here.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::{Color, SimState};

/// One alive ring, ready to draw
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RingSprite {
    pub center: Vec2,
    pub radius: f32,
    pub thickness: f32,
    /// Current rotation angle (degrees); the gap starts here
    pub angle: f32,
    pub gap_span: f32,
    pub color: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BallSprite {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Color,
}

/// Debris particle with lifetime-derived alpha
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSprite {
    pub pos: Vec2,
    pub size: f32,
    /// RGBA; alpha fades out as the particle dies
    pub color: [u8; 4],
}

/// Everything the drawing layer needs for one frame
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scene {
    pub rings: Vec<RingSprite>,
    pub ball: BallSprite,
    pub particles: Vec<ParticleSprite>,
}

impl Scene {
    /// Snapshot the current frame
    pub fn from_state(state: &SimState) -> Self {
        let ring_color = state.config.ring_color;
        let particle_rgb = state.config.particle_color();

        let rings = state
            .rings
            .iter()
            .filter(|r| r.alive)
            .map(|r| RingSprite {
                center: r.center,
                radius: r.radius,
                thickness: r.thickness,
                angle: r.angle,
                gap_span: r.gap_span,
                color: ring_color,
            })
            .collect();

        let particles = state
            .particles
            .iter()
            .map(|p| ParticleSprite {
                pos: p.pos,
                size: p.size,
                color: [
                    particle_rgb[0],
                    particle_rgb[1],
                    particle_rgb[2],
                    p.alpha(),
                ],
            })
            .collect();

        Self {
            rings,
            ball: BallSprite {
                pos: state.ball.pos,
                radius: state.ball.radius,
                color: state.config.ball_color,
            },
            particles,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::RoundConfig;

    fn test_state() -> SimState {
        SimState::new_round(
            RoundConfig {
                ring_count: 3,
                ring_thickness: 10.0,
                ring_spacing: 30.0,
                gap_span: 30.0,
                initial_angle: 0.0,
                base_speed: 1.0,
                min_speed: 0.2,
                ball_radius: 12.0,
                ring_color: [200, 100, 100],
                ball_color: [100, 200, 100],
            },
            7,
        )
    }

    #[test]
    fn test_dead_rings_are_omitted() {
        let mut state = test_state();
        state.rings[1].alive = false;
        let scene = Scene::from_state(&state);
        assert_eq!(scene.rings.len(), 2);
    }

    #[test]
    fn test_particle_alpha_from_lifetime() {
        let mut state = test_state();
        state.particles.push(crate::sim::Particle {
            pos: Vec2::new(10.0, 10.0),
            vel: Vec2::ZERO,
            life: 10,
            size: 2.0,
        });
        let scene = Scene::from_state(&state);
        assert_eq!(scene.particles[0].color, [230, 130, 130, 80]);
    }

    #[test]
    fn test_particle_color_is_brightened_ring_color() {
        let state = test_state();
        assert_eq!(state.config.particle_color(), [230, 130, 130]);
    }
}
