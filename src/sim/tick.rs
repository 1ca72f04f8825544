//! Per-frame collision engine
//!
//! One call to [`tick`] advances the round by exactly one frame, in a
//! fixed order: integrate the ball, pick the active ring, gate shrinking,
//! advance rotations, age particles, resolve collisions, check bounds.
//!
//! Collision bands of neighboring rings can overlap when thickness is
//! large relative to spacing; reactions are then applied in ring index
//! order and the last one wins on the ball's final state. Accepted
//! nondeterminism, not a bug to fix here.

use glam::Vec2;

use super::particle::spawn_ring_burst;
use super::ring::Contact;
use super::state::{GameEvent, SimState};
use crate::consts::*;

/// Advance the simulation by one frame
pub fn tick(state: &mut SimState) {
    state.events.clear();
    if state.round_over {
        return;
    }
    state.frame += 1;

    // 1. Integrate the ball
    state.ball.integrate(GRAVITY, MAX_BALL_SPEED);

    // 2. Active ring: alive ring whose radius is closest to the ball's
    // distance from the shared center. Not necessarily the one the ball
    // will collide with - it only gates shrinking.
    let ball_dist = state.ball.pos.distance(state.center);
    let active = state
        .rings
        .iter()
        .enumerate()
        .filter(|(_, r)| r.alive)
        .min_by(|(_, a), (_, b)| {
            (a.radius - ball_dist)
                .abs()
                .partial_cmp(&(b.radius - ball_dist).abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i);

    // 3. Shrinking is suppressed while the ball sits in the active ring's
    // collision band, so the geometry cannot shrink out from under an
    // in-progress contact. The gate uses the inclusive band on purpose.
    let shrink_allowed = active.is_none_or(|i| {
        let (lo, hi) = state.rings[i].collision_band(state.ball.radius);
        !(lo <= ball_dist && ball_dist <= hi)
    });

    // 4. Rotate every alive ring; shrink only the active one if allowed
    for (i, ring) in state.rings.iter_mut().enumerate() {
        let delta = ring.rotation_speed;
        ring.advance(delta);
        if shrink_allowed && active == Some(i) {
            ring.shrink(SHRINK_FACTOR, MIN_RING_RADIUS);
        }
    }

    // 5. Age particles, drop the expired
    for particle in state.particles.iter_mut() {
        particle.update();
    }
    state.particles.retain(|p| p.is_alive());

    // 6. Test every alive ring, innermost first
    for i in 0..state.rings.len() {
        match state.rings[i].test_collision(&state.ball) {
            Contact::None => {}
            Contact::Destroyed => {
                // The eliminated ring forces a world-wide rhythm change:
                // every survivor flips rotation direction.
                for ring in state.rings.iter_mut().filter(|r| r.alive) {
                    ring.reverse_direction();
                }
                spawn_ring_burst(&state.rings[i], &mut state.rng, &mut state.particles);
                state.events.push(GameEvent::RingDestroyed { ring: i });
                log::debug!(
                    "frame {}: ring {} destroyed, {} remain",
                    state.frame,
                    i,
                    state.rings.iter().filter(|r| r.alive).count()
                );
            }
            contact @ (Contact::BounceInner | Contact::BounceOuter) => {
                let from_inside = contact == Contact::BounceInner;
                state.ball.correct_position(&state.rings[i], from_inside);

                let mut normal =
                    (state.ball.pos - state.rings[i].center).normalize_or_zero();
                if normal == Vec2::ZERO {
                    normal = Vec2::X;
                }
                state.ball.reflect(
                    normal,
                    BOUNCE_DAMPING,
                    MIN_BALL_SPEED,
                    MAX_BALL_SPEED,
                    &mut state.rng,
                );
            }
        }
    }

    // 7. Round ends once the ball escapes the display, radius-inclusive
    if state.ball_out_of_bounds() {
        state.round_over = true;
        state.events.push(GameEvent::RoundOver);
        log::info!(
            "frame {}: ball escaped at ({:.0}, {:.0}), round over",
            state.frame,
            state.ball.pos.x,
            state.ball.pos.y
        );
    }
}
