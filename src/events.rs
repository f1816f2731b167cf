/// Warnings surfaced to the user without failing the exercise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseWarning {
    /// Validation was requested with nothing selected (Audio-Match only;
    /// the other controllers block silently).
    EmptySelection,
}

/// Notification emitted synchronously by a controller toward its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostEvent {
    /// Emitted exactly once per validation (or drill completion).
    ScoreSubmitted { correct: u32, total: u32 },
    /// The user requested another attempt; host bookkeeping hook.
    Retried,
    /// The user dismissed the results view.
    Completed,
    Warned(ExerciseWarning),
}

/// Host-side receiver for controller notifications. Calls are synchronous
/// and happen inside the triggering user action.
pub trait EventSink {
    fn emit(&mut self, event: HostEvent);
}

/// Sink that records every event, in order. Backs the integration tests
/// and any host that wants to inspect the stream after the fact.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<HostEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scores(&self) -> Vec<(u32, u32)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::ScoreSubmitted { correct, total } => Some((*correct, *total)),
                _ => None,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: HostEvent) {
        self.events.push(event);
    }
}
