//! Optional audio collaborator
//!
//! The simulation only ever emits one sound: a fire-and-forget "ring
//! destroyed" notification. A backend may be missing entirely (headless
//! runs, muted platforms); the sink must then no-op without blocking or
//! failing.

/// Receiver for the ring-destroyed notification. The default method makes
/// every implementation safe to call with no backend behind it.
pub trait AudioSink {
    fn ring_destroyed(&mut self) {}
}

/// Silent sink for headless or muted runs
#[derive(Debug, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {}

/// Sink that only logs, for the headless binary
#[derive(Debug, Default)]
pub struct LogAudio;

impl AudioSink for LogAudio {
    fn ring_destroyed(&mut self) {
        log::debug!("audio: ring break");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_audio_is_callable() {
        let mut sink = NullAudio;
        sink.ring_destroyed();
        sink.ring_destroyed();
    }
}
