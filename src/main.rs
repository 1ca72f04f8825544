//! Ring Rush entry point
//!
//! Headless frame loop: rendering is an external concern, so this binary
//! just drives rounds at the frame-rate target and logs what happens.
//! Quit is coarse (Ctrl+C kills the process); an optional first argument
//! bounds the number of rounds instead.

use std::time::{Duration, Instant};

use ring_rush::audio::LogAudio;
use ring_rush::consts::FPS;
use ring_rush::sim::{RoundController, RoundPhase, Scene};

fn main() {
    env_logger::init();

    let max_rounds: Option<u32> = std::env::args().nth(1).and_then(|s| s.parse().ok());
    let seed: u64 = rand::random();
    log::info!("Ring Rush starting, seed {seed}");

    let mut controller = RoundController::new(seed);
    let mut audio = LogAudio;
    let frame_budget = Duration::from_secs_f64(1.0 / FPS as f64);

    loop {
        let start = Instant::now();
        controller.advance(&mut audio);

        if let Some(state) = controller.state() {
            // The renderer input for this frame; a headless run drops it
            let _scene = Scene::from_state(state);
        }

        if let Some(max) = max_rounds
            && controller.phase() == RoundPhase::Setup
            && controller.rounds_completed() >= max
        {
            break;
        }

        // Throttle to the frame-rate target, never busy-spin
        if let Some(rest) = frame_budget.checked_sub(start.elapsed()) {
            std::thread::sleep(rest);
        }
    }

    log::info!("done after {} rounds", controller.rounds_completed());
}
