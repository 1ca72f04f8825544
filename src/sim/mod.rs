//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure and
//! deterministic:
//! - Per-frame stepping only (no wall-clock time)
//! - Seeded RNG only
//! - Stable iteration order (by ring index)
//! - No rendering or platform dependencies

pub mod ball;
pub mod particle;
pub mod ring;
pub mod round;
pub mod scene;
pub mod state;
pub mod tick;

pub use ball::{Ball, BounceRng};
pub use particle::Particle;
pub use ring::{Contact, Ring};
pub use round::{RoundController, RoundPhase};
pub use scene::Scene;
pub use state::{GameEvent, RoundConfig, SimState};
pub use tick::tick;
