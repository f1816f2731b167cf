use crate::items::ItemId;
use tracing::debug;

/// Playback capability supplied by the host. Fire-and-forget: `play` must
/// not block, and the engine never waits on it.
pub trait AudioSink {
    fn play(&self, reference: &str);
}

/// Sink that only logs the reference. Used by the CLI and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&self, reference: &str) {
        debug!("audio play: {}", reference);
    }
}

/// Tracks which item is currently playing, purely for UI feedback.
/// Starting a new play supersedes the previous marker; overlapping audio
/// is not prevented, only indicated. Carries no effect on scoring.
#[derive(Debug, Default, Clone)]
pub struct Playback {
    current: Option<ItemId>,
}

impl Playback {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn start(&mut self, id: ItemId, reference: &str, sink: &dyn AudioSink) {
        self.current = Some(id);
        sink.play(reference);
    }

    /// Best-effort "ended" notification from the host. Stale notifications
    /// (a newer play already superseded this id) are ignored.
    pub fn mark_ended(&mut self, id: ItemId) {
        if self.current == Some(id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<ItemId> {
        self.current
    }
}
