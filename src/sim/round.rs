//! Round lifecycle state machine
//!
//! Replaces the classic "infinite outer loop" with an explicit machine so
//! the new-round transition is observable and testable. Round-over is a
//! soft cancellation: the per-round state is discarded, nothing else needs
//! tearing down.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::state::{GameEvent, RoundConfig, SimState};
use super::tick::tick;
use crate::audio::AudioSink;

/// Where the controller is in the round lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    /// No round in flight; the next advance randomizes and builds one
    Setup,
    /// A round is being ticked frame by frame
    Running,
    /// The ball escaped; the next advance tears the round down
    Ended,
}

/// Drives rounds indefinitely: randomize, run until the ball escapes,
/// tear down, repeat.
pub struct RoundController {
    /// Master RNG: draws each round's configuration and sim seed
    rng: Pcg32,
    phase: RoundPhase,
    state: Option<SimState>,
    rounds_completed: u32,
}

impl RoundController {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            phase: RoundPhase::Setup,
            state: None,
            rounds_completed: 0,
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn rounds_completed(&self) -> u32 {
        self.rounds_completed
    }

    /// Current round state, if one is in flight
    pub fn state(&self) -> Option<&SimState> {
        self.state.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> Option<&mut SimState> {
        self.state.as_mut()
    }

    /// Advance the machine by one step: one frame while running, one
    /// transition otherwise. Ring-destroyed events are forwarded to the
    /// audio sink as they happen.
    pub fn advance(&mut self, audio: &mut dyn AudioSink) {
        match self.phase {
            RoundPhase::Setup => {
                let config = RoundConfig::random(&mut self.rng);
                log::info!(
                    "round {}: {} rings, thickness {}, gap {} deg, ball radius {}",
                    self.rounds_completed + 1,
                    config.ring_count,
                    config.ring_thickness,
                    config.gap_span,
                    config.ball_radius
                );
                let seed = self.rng.random();
                self.state = Some(SimState::new_round(config, seed));
                self.phase = RoundPhase::Running;
            }
            RoundPhase::Running => {
                if let Some(state) = &mut self.state {
                    tick(state);
                    for event in &state.events {
                        if matches!(event, GameEvent::RingDestroyed { .. }) {
                            audio.ring_destroyed();
                        }
                    }
                    if state.round_over {
                        self.phase = RoundPhase::Ended;
                    }
                } else {
                    // Unreachable by construction; recover instead of panicking
                    self.phase = RoundPhase::Setup;
                }
            }
            RoundPhase::Ended => {
                if let Some(state) = self.state.take() {
                    log::info!(
                        "round {} over after {} frames, {} of {} rings destroyed",
                        self.rounds_completed + 1,
                        state.frame,
                        state.rings.len() - state.alive_rings(),
                        state.rings.len()
                    );
                }
                self.rounds_completed += 1;
                self.phase = RoundPhase::Setup;
            }
        }
    }
}
